// ─────────────────────────────────────────────────────────────────────────────
// Harris-Benedict BMR (revised coefficients)
// ─────────────────────────────────────────────────────────────────────────────

pub const MALE_BMR_BASE: f64 = 88.362;
pub const MALE_BMR_WEIGHT: f64 = 13.397;
pub const MALE_BMR_HEIGHT: f64 = 4.799;
pub const MALE_BMR_AGE: f64 = 5.677;

pub const FEMALE_BMR_BASE: f64 = 447.593;
pub const FEMALE_BMR_WEIGHT: f64 = 9.247;
pub const FEMALE_BMR_HEIGHT: f64 = 3.098;
pub const FEMALE_BMR_AGE: f64 = 4.330;

// ─────────────────────────────────────────────────────────────────────────────
// Forecast
// ─────────────────────────────────────────────────────────────────────────────

/// Calorie surplus equivalent to one pound of body weight.
pub const KCAL_PER_POUND: f64 = 3500.0;

/// Kilograms per pound, as used by the forecast heuristic.
pub const KG_PER_POUND: f64 = 0.45;

/// Smallest quantity a food entry may hold.
pub const MIN_QUANTITY: f64 = 0.1;

// ─────────────────────────────────────────────────────────────────────────────
// BMI bands (lower bound inclusive)
// ─────────────────────────────────────────────────────────────────────────────

pub const BMI_NORMAL_MIN: f64 = 18.5;
pub const BMI_OVERWEIGHT_MIN: f64 = 24.0;
pub const BMI_OBESE_MIN: f64 = 28.0;

// ─────────────────────────────────────────────────────────────────────────────
// Recommendation thresholds
// ─────────────────────────────────────────────────────────────────────────────

/// Goal and food tables treat BMI strictly above this as "lose".
pub const BMI_LOSE_ABOVE: f64 = 24.0;

/// Goal and food tables treat BMI strictly below this as "gain".
pub const BMI_GAIN_BELOW: f64 = 18.5;

/// Calorie adjustment applied to TDEE for gain/lose goals.
pub const GOAL_CALORIE_ADJUSTMENT: f64 = 300.0;

/// Balance beyond which the food table overrides a normal BMI.
pub const FOOD_BALANCE_THRESHOLD: f64 = 500.0;

/// Activity factors at or below this get the "increase activity" plan.
pub const LOW_ACTIVITY_MAX_FACTOR: f64 = 1.375;

// ─────────────────────────────────────────────────────────────────────────────
// Derived advice
// ─────────────────────────────────────────────────────────────────────────────

/// Weight delta (kg) beyond which the trend is no longer "stable".
pub const TREND_THRESHOLD_KG: f64 = 0.1;

/// Absolute calorie balance beyond which the day counts as imbalanced.
pub const IMBALANCE_THRESHOLD: f64 = 500.0;
