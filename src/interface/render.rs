use crate::catalog::{CatalogCategory, CatalogFood};
use crate::engine::{HABIT_TIPS, total_calories};
use crate::models::{Assessment, BalanceStatus, FoodEntry, PersonalProfile};

/// Explicit sign for positive values.
fn signed(value: i64) -> String {
    if value > 0 {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}

pub fn display_incomplete() {
    println!("Enter your height, weight and age to see a forecast.");
}

pub fn display_profile(profile: &PersonalProfile) {
    println!();
    println!("=== Profile ===");
    println!("  Height:   {} cm", profile.height_cm);
    println!("  Weight:   {} kg", profile.weight_kg);
    println!("  Age:      {}", profile.age_years);
    println!("  Sex:      {}", profile.sex);
    println!(
        "  Activity: {} (x{})",
        profile.activity.label(),
        profile.activity.factor()
    );
    println!();
}

/// Display today's food log with per-entry and total calories.
pub fn display_food_log(entries: &[FoodEntry]) {
    if entries.is_empty() {
        println!("Food log: (empty)");
        return;
    }

    let max_name_len = entries.iter().map(|e| e.name.len()).max().unwrap_or(10);

    println!();
    println!("=== Food log ({} items) ===", entries.len());
    for entry in entries {
        println!(
            "  #{:<3} {:<width$}  {:>6.1} x {:<5} = {:>6.0} kcal",
            entry.id,
            entry.name,
            entry.calories_per_unit,
            entry.quantity(),
            entry.calories(),
            width = max_name_len
        );
    }
    println!("  Total: {:.0} kcal", total_calories(entries));
    println!();
}

/// Display the weight/BMI forecast and calorie analysis.
pub fn display_forecast(assessment: &Assessment, profile: &PersonalProfile) {
    let shown = assessment.display();
    let f = &shown.forecast;

    println!();
    println!("=== Tomorrow's forecast ===");
    println!();
    println!("--- Weight ---");
    println!("  Current:   {} kg", profile.weight_kg);
    println!("  Predicted: {} kg", f.predicted_weight_kg);
    let delta_sign = if f.weight_delta_kg > 0.0 { "+" } else { "" };
    println!("  Change:    {}{} kg", delta_sign, f.weight_delta_kg);
    println!("  Trend:     {}", assessment.trend.label());
    println!();
    println!("--- BMI ---");
    println!("  Current:   {} ({})", f.current_bmi, assessment.current_category);
    println!("  Predicted: {} ({})", f.predicted_bmi, assessment.predicted_category);
    println!();
    println!("--- Calories ---");
    println!("  BMR:      {} kcal", f.bmr);
    println!("  TDEE:     {} kcal", f.tdee);
    println!("  Consumed: {} kcal", f.calories_consumed);
    println!("  Balance:  {} kcal", signed(f.calorie_balance));
    println!();

    match assessment.balance {
        BalanceStatus::Imbalanced => {
            println!("! Calorie imbalance: intake and expenditure are far apart today.");
            println!("  Consider adjusting your diet or exercising more.");
        }
        BalanceStatus::Balanced => {
            println!("Calorie balance looks good today. Keep it up.");
        }
    }
    println!();
}

/// Display goal, food and exercise recommendations plus tomorrow's plan.
pub fn display_advice(assessment: &Assessment) {
    let shown = assessment.display();
    let rec = &assessment.recommendation;

    println!();
    println!("=== {} ===", rec.goal.label());
    println!("  Daily target:         {} kcal", shown.target_calories);
    println!("  Gap to today's intake: {} kcal", signed(shown.target_gap));
    println!("  {}", rec.goal.advice());
    println!();

    println!("--- {} ---", rec.food.title);
    for item in &rec.food.foods {
        println!("  * {:<22} {}", item.food, item.benefit);
    }
    println!("  Avoid: {}", rec.food.avoid.join(", "));
    println!();

    println!("--- {} ---", rec.exercise.title);
    for activity in &rec.exercise.activities {
        println!("  - {}", activity);
    }
    println!();

    println!("--- Healthy habits ---");
    for tip in HABIT_TIPS {
        println!("  - {}", tip);
    }
    println!();

    println!("--- Plan for tomorrow ---");
    println!("  1. Aim for {} kcal", shown.target_calories);
    println!("  2. Eat more of the recommended foods");
    println!("  3. Do the suggested exercise");
    println!("  4. Log your food and weight through the day");
    println!();
}

fn display_catalog_food(food: &CatalogFood) {
    println!(
        "  {} {} - {} kcal/{} (default {})",
        food.glyph, food.name, food.calories_per_unit, food.unit, food.default_quantity
    );
}

/// Display catalog categories with their (possibly filtered) foods.
pub fn display_catalog(sections: &[(&CatalogCategory, Vec<&CatalogFood>)]) {
    for (category, foods) in sections {
        if foods.is_empty() {
            continue;
        }
        println!();
        println!("=== {} [{}] ({} items) ===", category.name, category.key, foods.len());
        for food in foods {
            display_catalog_food(food);
        }
    }
    println!();
}

pub fn display_search_results(term: &str, foods: &[&CatalogFood]) {
    if foods.is_empty() {
        println!("No catalog food matches '{}'.", term);
        return;
    }

    println!();
    println!("=== Matches for '{}' ===", term);
    for food in foods {
        display_catalog_food(food);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed() {
        assert_eq!(signed(12), "+12");
        assert_eq!(signed(0), "0");
        assert_eq!(signed(-1960), "-1960");
    }
}
