use crate::engine::constants::*;
use crate::models::{
    BalanceStatus, ExercisePlanKind, ExerciseRecommendation, FoodBenefit, FoodPlanKind,
    FoodRecommendation, ForecastResult, Goal, PersonalProfile, Recommendation, WeightTrend,
};

const fn pair(food: &'static str, benefit: &'static str) -> FoodBenefit {
    FoodBenefit { food, benefit }
}

pub static GAIN_FOODS: FoodRecommendation = FoodRecommendation {
    kind: FoodPlanKind::Gain,
    title: "Foods for healthy weight gain",
    foods: [
        pair("Avocado", "Healthy fats, energy dense"),
        pair("Nuts", "Protein and healthy fats"),
        pair("Wholemeal bread", "Complex carbohydrates"),
        pair("Eggs", "High-quality protein"),
        pair("Milk", "Protein and calcium"),
        pair("Banana", "Natural sugars and potassium"),
    ],
    avoid: ["Highly processed food", "Sugary drinks", "Deep-fried food"],
};

pub static LOSE_FOODS: FoodRecommendation = FoodRecommendation {
    kind: FoodPlanKind::Lose,
    title: "Foods for healthy weight loss",
    foods: [
        pair("Leafy greens", "Low calorie, high fibre"),
        pair("Lean meat", "High-quality protein"),
        pair("Fish", "Omega-3 fatty acids"),
        pair("Berries", "Antioxidants, low sugar"),
        pair("Oats", "Keeps you full"),
        pair("Greek yogurt", "High protein, probiotics"),
    ],
    avoid: ["High-sugar food", "Refined carbohydrates", "High-fat snacks"],
};

pub static BALANCED_FOODS: FoodRecommendation = FoodRecommendation {
    kind: FoodPlanKind::Balanced,
    title: "Balanced diet",
    foods: [
        pair("Colourful vegetables", "Vitamins and minerals"),
        pair("Whole grains", "Complex carbohydrates"),
        pair("Lean protein", "Muscle maintenance"),
        pair("Healthy fats", "Essential fatty acids"),
        pair("Fruit", "Natural vitamins"),
        pair("Plenty of water", "Keeps metabolism going"),
    ],
    avoid: ["Too much processed food", "Too much refined sugar", "Trans fats"],
};

pub static INCREASE_ACTIVITY: ExerciseRecommendation = ExerciseRecommendation {
    kind: ExercisePlanKind::IncreaseActivity,
    title: "Move more",
    activities: [
        "30 minutes of brisk walking every day",
        "Simple strength training at home",
        "Yoga or stretching",
        "Take the stairs instead of the lift",
    ],
};

pub static WEIGHT_LOSS_EXERCISE: ExerciseRecommendation = ExerciseRecommendation {
    kind: ExercisePlanKind::WeightLoss,
    title: "Exercise for weight loss",
    activities: [
        "45-60 minutes of aerobic exercise",
        "High-intensity interval training (HIIT)",
        "Strength training 2-3 times a week",
        "Swimming or cycling",
    ],
};

pub static MAINTENANCE_EXERCISE: ExerciseRecommendation = ExerciseRecommendation {
    kind: ExercisePlanKind::Maintenance,
    title: "Stay healthy",
    activities: [
        "Regular aerobic exercise",
        "Strength training to keep muscle",
        "Flexibility training",
        "Outdoor activities for fun",
    ],
};

pub const HABIT_TIPS: [&str; 6] = [
    "Keep regular meal times",
    "Eat slowly and notice when you are full",
    "Drink water before meals",
    "Get enough sleep",
    "Reduce stress and emotional eating",
    "Log what you eat to keep track",
];

/// Goal table. BMI above 24 is strict, unlike the classification band.
pub fn select_goal(current_bmi: f64, tdee: f64) -> (Goal, f64) {
    if current_bmi < BMI_GAIN_BELOW {
        (Goal::GainWeight, tdee + GOAL_CALORIE_ADJUSTMENT)
    } else if current_bmi > BMI_LOSE_ABOVE {
        (Goal::LoseWeight, tdee - GOAL_CALORIE_ADJUSTMENT)
    } else {
        (Goal::Maintain, tdee)
    }
}

pub fn select_food(current_bmi: f64, calorie_balance: f64) -> &'static FoodRecommendation {
    if current_bmi < BMI_GAIN_BELOW || calorie_balance < -FOOD_BALANCE_THRESHOLD {
        &GAIN_FOODS
    } else if current_bmi > BMI_LOSE_ABOVE || calorie_balance > FOOD_BALANCE_THRESHOLD {
        &LOSE_FOODS
    } else {
        &BALANCED_FOODS
    }
}

pub fn select_exercise(activity_factor: f64, current_bmi: f64) -> &'static ExerciseRecommendation {
    if activity_factor <= LOW_ACTIVITY_MAX_FACTOR {
        &INCREASE_ACTIVITY
    } else if current_bmi > BMI_LOSE_ABOVE {
        &WEIGHT_LOSS_EXERCISE
    } else {
        &MAINTENANCE_EXERCISE
    }
}

/// Run the three recommendation tables against one forecast.
pub fn recommend(forecast: &ForecastResult, profile: &PersonalProfile) -> Recommendation {
    let (goal, target_calories) = select_goal(forecast.current_bmi, forecast.tdee);

    Recommendation {
        goal,
        target_calories,
        food: select_food(forecast.current_bmi, forecast.calorie_balance),
        exercise: select_exercise(profile.activity_factor(), forecast.current_bmi),
    }
}

pub fn weight_trend(weight_delta_kg: f64) -> WeightTrend {
    if weight_delta_kg > TREND_THRESHOLD_KG {
        WeightTrend::Gaining
    } else if weight_delta_kg < -TREND_THRESHOLD_KG {
        WeightTrend::Losing
    } else {
        WeightTrend::Stable
    }
}

pub fn balance_status(calorie_balance: f64) -> BalanceStatus {
    if calorie_balance.abs() > IMBALANCE_THRESHOLD {
        BalanceStatus::Imbalanced
    } else {
        BalanceStatus::Balanced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_boundaries() {
        assert_eq!(select_goal(18.4, 2000.0), (Goal::GainWeight, 2300.0));
        assert_eq!(select_goal(18.5, 2000.0), (Goal::Maintain, 2000.0));
        assert_eq!(select_goal(24.0, 2000.0), (Goal::Maintain, 2000.0));
        assert_eq!(select_goal(24.01, 2000.0), (Goal::LoseWeight, 1700.0));
    }

    #[test]
    fn test_food_balance_overrides() {
        assert_eq!(select_food(22.0, 0.0).kind, FoodPlanKind::Balanced);
        assert_eq!(select_food(22.0, -500.0).kind, FoodPlanKind::Balanced);
        assert_eq!(select_food(22.0, -500.5).kind, FoodPlanKind::Gain);
        assert_eq!(select_food(22.0, 500.0).kind, FoodPlanKind::Balanced);
        assert_eq!(select_food(22.0, 500.5).kind, FoodPlanKind::Lose);
        assert_eq!(select_food(17.0, 0.0).kind, FoodPlanKind::Gain);
        assert_eq!(select_food(25.0, 0.0).kind, FoodPlanKind::Lose);
    }

    #[test]
    fn test_food_gain_takes_priority() {
        // High BMI with a deep deficit still hits the first branch.
        assert_eq!(select_food(30.0, -800.0).kind, FoodPlanKind::Gain);
    }

    #[test]
    fn test_exercise_activity_first() {
        assert_eq!(select_exercise(1.2, 30.0).kind, ExercisePlanKind::IncreaseActivity);
        assert_eq!(select_exercise(1.375, 30.0).kind, ExercisePlanKind::IncreaseActivity);
        assert_eq!(select_exercise(1.55, 30.0).kind, ExercisePlanKind::WeightLoss);
        assert_eq!(select_exercise(1.55, 24.0).kind, ExercisePlanKind::Maintenance);
        assert_eq!(select_exercise(1.9, 20.0).kind, ExercisePlanKind::Maintenance);
    }

    #[test]
    fn test_weight_trend() {
        assert_eq!(weight_trend(0.25), WeightTrend::Gaining);
        assert_eq!(weight_trend(0.1), WeightTrend::Stable);
        assert_eq!(weight_trend(-0.1), WeightTrend::Stable);
        assert_eq!(weight_trend(-0.25), WeightTrend::Losing);
    }

    #[test]
    fn test_balance_status() {
        assert_eq!(balance_status(-1959.7), BalanceStatus::Imbalanced);
        assert_eq!(balance_status(500.0), BalanceStatus::Balanced);
        assert_eq!(balance_status(-120.0), BalanceStatus::Balanced);
        assert_eq!(balance_status(501.0), BalanceStatus::Imbalanced);
    }
}
