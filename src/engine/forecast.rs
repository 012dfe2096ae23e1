use tracing::debug;

use crate::engine::constants::{KCAL_PER_POUND, KG_PER_POUND};
use crate::engine::energy::{bmr, is_complete, tdee};
use crate::engine::intake::total_calories;
use crate::models::{FoodEntry, ForecastResult, PersonalProfile};

/// Weight change (kg) implied by a calorie balance.
///
/// Linear, single-step: 3500 kcal per pound, 0.45 kg per pound.
#[inline]
pub fn weight_delta_kg(calorie_balance: f64) -> f64 {
    (calorie_balance / KCAL_PER_POUND) * KG_PER_POUND
}

/// Body mass index for a weight at a given height in centimeters.
#[inline]
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Recompute the forecast from scratch.
///
/// Returns `None` while the profile is incomplete; nothing downstream runs.
pub fn recompute(profile: &PersonalProfile, entries: &[FoodEntry]) -> Option<ForecastResult> {
    if !is_complete(profile) {
        debug!(entries = entries.len(), "profile incomplete, no forecast");
        return None;
    }

    let bmr = bmr(profile);
    let tdee = tdee(profile, bmr);
    let calories_consumed = total_calories(entries);

    let calorie_balance = calories_consumed - tdee;
    let weight_delta_kg = weight_delta_kg(calorie_balance);
    let predicted_weight_kg = profile.weight_kg + weight_delta_kg;

    let result = ForecastResult {
        bmr,
        tdee,
        calories_consumed,
        calorie_balance,
        weight_delta_kg,
        predicted_weight_kg,
        current_bmi: bmi(profile.weight_kg, profile.height_cm),
        predicted_bmi: bmi(predicted_weight_kg, profile.height_cm),
    };

    debug!(
        entries = entries.len(),
        tdee = result.tdee,
        balance = result.calorie_balance,
        "forecast recomputed"
    );

    Some(result)
}
