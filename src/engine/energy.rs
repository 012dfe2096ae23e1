use crate::engine::constants::*;
use crate::models::{PersonalProfile, Sex};

/// True iff height, weight and age are all positive.
///
/// NaN height or weight fails the check.
pub fn is_complete(profile: &PersonalProfile) -> bool {
    profile.height_cm > 0.0 && profile.weight_kg > 0.0 && profile.age_years > 0
}

/// Basal metabolic rate (Harris-Benedict, revised), full precision.
pub fn bmr(profile: &PersonalProfile) -> f64 {
    let w = profile.weight_kg;
    let h = profile.height_cm;
    let a = profile.age_years as f64;

    match profile.sex {
        Sex::Male => MALE_BMR_BASE + MALE_BMR_WEIGHT * w + MALE_BMR_HEIGHT * h - MALE_BMR_AGE * a,
        Sex::Female => {
            FEMALE_BMR_BASE + FEMALE_BMR_WEIGHT * w + FEMALE_BMR_HEIGHT * h - FEMALE_BMR_AGE * a
        }
    }
}

/// Total daily energy expenditure: BMR scaled by the activity factor.
#[inline]
pub fn tdee(profile: &PersonalProfile, bmr: f64) -> f64 {
    bmr * profile.activity_factor()
}
