pub mod advice;
pub mod assessment;
pub mod food;
pub mod forecast;
pub mod profile;

pub use advice::{
    BalanceStatus, BmiCategory, ExercisePlanKind, ExerciseRecommendation, FoodBenefit,
    FoodPlanKind, FoodRecommendation, Goal, Recommendation, WeightTrend,
};
pub use assessment::{Assessment, DisplayAssessment};
pub use food::{EntryId, FoodEntry, clamp_quantity};
pub use forecast::{DisplayForecast, ForecastResult, round_half_up, round_to};
pub use profile::{ActivityLevel, PersonalProfile, Sex};
