use serde::Serialize;

use crate::models::{
    BalanceStatus, BmiCategory, DisplayForecast, ExerciseRecommendation, FoodRecommendation,
    ForecastResult, Goal, Recommendation, WeightTrend, round_half_up,
};

/// Immutable snapshot produced by one run of the full pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment {
    pub forecast: ForecastResult,
    pub current_category: BmiCategory,
    pub predicted_category: BmiCategory,
    pub trend: WeightTrend,
    pub balance: BalanceStatus,
    pub recommendation: Recommendation,
}

impl Assessment {
    /// Rounded, serializable view of this snapshot.
    pub fn display(&self) -> DisplayAssessment {
        let gap = self
            .recommendation
            .target_gap(self.forecast.calories_consumed);

        DisplayAssessment {
            forecast: self.forecast.display(),
            current_category: self.current_category,
            predicted_category: self.predicted_category,
            trend: self.trend,
            balance: self.balance,
            goal: self.recommendation.goal,
            target_calories: round_half_up(self.recommendation.target_calories) as i64,
            target_gap: round_half_up(gap) as i64,
            food: self.recommendation.food,
            exercise: self.recommendation.exercise,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DisplayAssessment {
    pub forecast: DisplayForecast,
    pub current_category: BmiCategory,
    pub predicted_category: BmiCategory,
    pub trend: WeightTrend,
    pub balance: BalanceStatus,
    pub goal: Goal,
    pub target_calories: i64,
    pub target_gap: i64,
    pub food: &'static FoodRecommendation,
    pub exercise: &'static ExerciseRecommendation,
}
