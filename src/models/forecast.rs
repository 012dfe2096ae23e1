use serde::Serialize;

/// Round to the nearest integer; halves go toward positive infinity.
///
/// Never yields `-0.0`.
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round `value` to `decimals` places with [`round_half_up`].
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    round_half_up(value * scale) / scale
}

/// Full-precision output of one recompute.
///
/// Never rounded; use [`ForecastResult::display`] at presentation time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastResult {
    pub bmr: f64,
    pub tdee: f64,
    pub calories_consumed: f64,
    pub calorie_balance: f64,
    pub weight_delta_kg: f64,
    pub predicted_weight_kg: f64,
    pub current_bmi: f64,
    pub predicted_bmi: f64,
}

impl ForecastResult {
    /// Presentation copy with the display rounding applied.
    pub fn display(&self) -> DisplayForecast {
        DisplayForecast {
            bmr: round_half_up(self.bmr) as i64,
            tdee: round_half_up(self.tdee) as i64,
            calories_consumed: round_half_up(self.calories_consumed) as i64,
            calorie_balance: round_half_up(self.calorie_balance) as i64,
            weight_delta_kg: round_to(self.weight_delta_kg, 2),
            predicted_weight_kg: round_to(self.predicted_weight_kg, 1),
            current_bmi: round_to(self.current_bmi, 1),
            predicted_bmi: round_to(self.predicted_bmi, 1),
        }
    }
}

/// Rounded forecast for rendering and JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DisplayForecast {
    pub bmr: i64,
    pub tdee: i64,
    pub calories_consumed: i64,
    pub calorie_balance: i64,
    pub weight_delta_kg: f64,
    pub predicted_weight_kg: f64,
    pub current_bmi: f64,
    pub predicted_bmi: f64,
}
