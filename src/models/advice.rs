use std::fmt;

use serde::Serialize;

/// BMI band. Ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    GainWeight,
    LoseWeight,
    Maintain,
}

impl Goal {
    pub fn label(self) -> &'static str {
        match self {
            Goal::GainWeight => "Gain weight healthily",
            Goal::LoseWeight => "Lose weight healthily",
            Goal::Maintain => "Maintain weight",
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            Goal::GainWeight => "Eat a little more each day and favour nutrient-dense foods.",
            Goal::LoseWeight => "Eat a little less each day and move more.",
            Goal::Maintain => "Keep up your current eating and exercise habits.",
        }
    }
}

/// Which food catalog a recommendation was drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodPlanKind {
    Gain,
    Lose,
    Balanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExercisePlanKind {
    IncreaseActivity,
    WeightLoss,
    Maintenance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FoodBenefit {
    pub food: &'static str,
    pub benefit: &'static str,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct FoodRecommendation {
    pub kind: FoodPlanKind,
    pub title: &'static str,
    pub foods: [FoodBenefit; 6],
    pub avoid: [&'static str; 3],
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ExerciseRecommendation {
    pub kind: ExercisePlanKind,
    pub title: &'static str,
    pub activities: [&'static str; 4],
}

/// Output of the three recommendation tables.
///
/// The tables are evaluated independently and may disagree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Recommendation {
    pub goal: Goal,
    pub target_calories: f64,
    pub food: &'static FoodRecommendation,
    pub exercise: &'static ExerciseRecommendation,
}

impl Recommendation {
    /// Consumed calories minus the target; positive means over target.
    pub fn target_gap(&self, calories_consumed: f64) -> f64 {
        calories_consumed - self.target_calories
    }
}

/// Direction of the forecast weight change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightTrend {
    Gaining,
    Losing,
    Stable,
}

impl WeightTrend {
    pub fn label(self) -> &'static str {
        match self {
            WeightTrend::Gaining => "increasing",
            WeightTrend::Losing => "decreasing",
            WeightTrend::Stable => "stable",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceStatus {
    Balanced,
    Imbalanced,
}
