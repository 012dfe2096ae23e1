pub mod classify;
pub mod constants;
pub mod energy;
pub mod forecast;
pub mod intake;
pub mod recommend;

pub use classify::classify;
pub use constants::*;
pub use energy::{bmr, is_complete, tdee};
pub use forecast::{bmi, recompute, weight_delta_kg};
pub use intake::{add_entry, remove_entry, total_calories, update_quantity};
pub use recommend::{
    HABIT_TIPS, balance_status, recommend, select_exercise, select_food, select_goal,
    weight_trend,
};

use crate::models::{Assessment, FoodEntry, PersonalProfile};

/// Run the whole pipeline: validate, forecast, classify, recommend.
///
/// `None` means the profile is not complete yet.
pub fn assess(profile: &PersonalProfile, entries: &[FoodEntry]) -> Option<Assessment> {
    let forecast = recompute(profile, entries)?;

    Some(Assessment {
        current_category: classify(forecast.current_bmi),
        predicted_category: classify(forecast.predicted_bmi),
        trend: weight_trend(forecast.weight_delta_kg),
        balance: balance_status(forecast.calorie_balance),
        recommendation: recommend(&forecast, profile),
        forecast,
    })
}
