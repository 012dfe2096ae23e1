pub mod catalog;
pub mod cli;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;

pub use engine::{assess, classify, is_complete, recommend, recompute};
pub use error::{HealthError, Result};
pub use models::{Assessment, FoodEntry, ForecastResult, PersonalProfile};
