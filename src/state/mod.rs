mod loader;
mod manager;

pub use loader::{load_catalog, load_entries, load_profile};
pub use manager::{ForecastSession, Step};
