use std::str::FromStr;

use dialoguer::{Confirm, Input, Select};

use crate::catalog::{Catalog, CatalogFood};
use crate::error::{HealthError, Result};
use crate::models::{ActivityLevel, EntryId, FoodEntry, PersonalProfile, Sex};
use crate::state::Step;

/// Number of fuzzy matches offered when searching the catalog.
const SEARCH_LIMIT: usize = 5;

fn parse_number<T: FromStr>(input: &str, what: &str) -> Result<T> {
    input
        .trim()
        .parse()
        .map_err(|_| HealthError::InvalidInput(format!("Invalid {}: '{}'", what, input.trim())))
}

fn prompt_text(prompt: &str, default: String) -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt(prompt)
        .default(default)
        .allow_empty(true)
        .interact_text()?)
}

/// Show a blank default for unset fields.
fn default_or_blank(value: f64) -> String {
    if value > 0.0 {
        value.to_string()
    } else {
        String::new()
    }
}

/// Prompt for the whole profile, pre-filled with the current values.
pub fn prompt_profile(current: &PersonalProfile) -> Result<PersonalProfile> {
    let height_cm: f64 = parse_number(
        &prompt_text("Height (cm)", default_or_blank(current.height_cm))?,
        "height",
    )?;
    let weight_kg: f64 = parse_number(
        &prompt_text("Weight (kg)", default_or_blank(current.weight_kg))?,
        "weight",
    )?;
    let age_years: u32 = parse_number(
        &prompt_text("Age", default_or_blank(current.age_years as f64))?,
        "age",
    )?;

    let sex_options = ["Male", "Female"];
    let sex = match Select::new()
        .with_prompt("Sex")
        .items(&sex_options)
        .default(if current.sex == Sex::Female { 1 } else { 0 })
        .interact()?
    {
        1 => Sex::Female,
        _ => Sex::Male,
    };

    let activity_options: Vec<String> = ActivityLevel::ALL
        .iter()
        .map(|level| format!("{} - {}", level.label(), level.description()))
        .collect();
    let current_activity = ActivityLevel::ALL
        .iter()
        .position(|level| *level == current.activity)
        .unwrap_or(0);
    let activity = ActivityLevel::ALL[Select::new()
        .with_prompt("Activity level")
        .items(&activity_options)
        .default(current_activity)
        .interact()?];

    Ok(PersonalProfile::new(height_cm, weight_kg, age_years, sex, activity))
}

/// Navigation choice on the wizard menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardChoice {
    Go(Step),
    Restart,
    Quit,
}

/// Pick which wizard step to show next.
pub fn prompt_step(default: Step) -> Result<WizardChoice> {
    let choices = [
        ("1. Personal info", WizardChoice::Go(Step::Profile)),
        ("2. Food log", WizardChoice::Go(Step::FoodLog)),
        ("3. Weight forecast", WizardChoice::Go(Step::Forecast)),
        ("4. Advice", WizardChoice::Go(Step::Advice)),
        ("Start over", WizardChoice::Restart),
        ("Quit", WizardChoice::Quit),
    ];
    let labels: Vec<&str> = choices.iter().map(|(label, _)| *label).collect();

    let default_index = choices
        .iter()
        .position(|(_, choice)| *choice == WizardChoice::Go(default))
        .unwrap_or(0);
    let selection = Select::new()
        .with_prompt("Where to?")
        .items(&labels)
        .default(default_index)
        .interact()?;

    Ok(choices[selection].1)
}

/// Action chosen on the food-log screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodAction {
    AddFromCatalog,
    AddCustom,
    ChangeQuantity,
    Remove,
    Done,
}

pub fn prompt_food_action() -> Result<FoodAction> {
    let actions = [
        ("Add from catalog", FoodAction::AddFromCatalog),
        ("Add custom food", FoodAction::AddCustom),
        ("Change quantity", FoodAction::ChangeQuantity),
        ("Remove entry", FoodAction::Remove),
        ("Done", FoodAction::Done),
    ];
    let labels: Vec<&str> = actions.iter().map(|(label, _)| *label).collect();

    let selection = Select::new()
        .with_prompt("Food log")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(actions[selection].1)
}

/// Search the catalog with fuzzy matching.
pub fn prompt_catalog_food(catalog: &Catalog) -> Result<Option<&CatalogFood>> {
    let input: String = Input::new()
        .with_prompt("Search food (or press Enter to cancel)")
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    // Exact match first (case-insensitive)
    if let Some(food) = catalog.find(input) {
        return Ok(Some(food));
    }

    let candidates = catalog.fuzzy_search(input, SEARCH_LIMIT);

    if candidates.is_empty() {
        println!("No matching food found for '{}'", input);
        return Ok(None);
    }

    if candidates.len() == 1 {
        let food = candidates[0];
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", food.name))
            .default(true)
            .interact()?;
        return Ok(confirm.then_some(food));
    }

    let mut options: Vec<String> = candidates
        .iter()
        .map(|f| format!("{} {} ({} kcal/{})", f.glyph, f.name, f.calories_per_unit, f.unit))
        .collect();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(candidates.get(selection).copied())
}

/// Prompt for a custom food: (name, kcal per unit, quantity).
pub fn prompt_custom_food() -> Result<(String, f64, f64)> {
    let name: String = Input::new()
        .with_prompt("Food name")
        .allow_empty(true)
        .interact_text()?;
    let calories: f64 = parse_number(&prompt_text("Calories per unit", "0".to_string())?, "calories")?;
    let quantity: f64 = parse_number(&prompt_text("Quantity", "1".to_string())?, "quantity")?;

    Ok((name, calories, quantity))
}

/// Pick an entry from the log. `None` if the log is empty or cancelled.
pub fn prompt_entry(entries: &[FoodEntry], prompt: &str) -> Result<Option<EntryId>> {
    if entries.is_empty() {
        println!("Food log is empty.");
        return Ok(None);
    }

    let mut options: Vec<String> = entries
        .iter()
        .map(|e| format!("{} x {} ({:.0} kcal)", e.name, e.quantity(), e.calories()))
        .collect();
    options.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&options)
        .default(0)
        .interact()?;

    Ok(entries.get(selection).map(|e| e.id))
}

pub fn prompt_quantity(current: f64) -> Result<f64> {
    parse_number(&prompt_text("New quantity", current.to_string())?, "quantity")
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number::<f64>(" 65.5 ", "weight").unwrap(), 65.5);
        assert_eq!(parse_number::<u32>("25", "age").unwrap(), 25);
        assert!(matches!(
            parse_number::<u32>("-3", "age"),
            Err(HealthError::InvalidInput(_))
        ));
        assert!(parse_number::<f64>("", "height").is_err());
    }

    #[test]
    fn test_default_or_blank() {
        assert_eq!(default_or_blank(0.0), "");
        assert_eq!(default_or_blank(170.0), "170");
        assert_eq!(default_or_blank(65.5), "65.5");
    }
}
