use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::catalog::{Catalog, CatalogCategory, CatalogFood};
use crate::error::Result;
use crate::models::{EntryId, FoodEntry, PersonalProfile};

/// Load a profile from a JSON file.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<PersonalProfile> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load a food log from a JSON array.
///
/// Deduplicates by id (last occurrence wins, first position kept).
/// Quantities are clamped during deserialization.
pub fn load_entries<P: AsRef<Path>>(path: P) -> Result<Vec<FoodEntry>> {
    let content = fs::read_to_string(path)?;
    let entries: Vec<FoodEntry> = serde_json::from_str(&content)?;

    let mut order = Vec::new();
    let mut seen: HashMap<EntryId, FoodEntry> = HashMap::new();
    for entry in entries {
        if seen.insert(entry.id, entry.clone()).is_none() {
            order.push(entry.id);
        }
    }

    Ok(order
        .into_iter()
        .filter_map(|id| seen.remove(&id))
        .collect())
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    category: String,
    name: String,
    calories_per_unit: f64,
    unit: String,
    default_quantity: f64,
    #[serde(default)]
    glyph: String,
}

/// Load a catalog from CSV.
///
/// Columns: `category,name,calories_per_unit,unit,default_quantity,glyph`.
/// Rows with an empty name or non-positive calories are skipped.
/// Categories keep the order they first appear in.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut categories: Vec<CatalogCategory> = Vec::new();

    for row in reader.deserialize() {
        let row: CatalogRow = row?;
        let food = CatalogFood {
            name: row.name.trim().to_string(),
            calories_per_unit: row.calories_per_unit,
            unit: row.unit,
            default_quantity: row.default_quantity,
            glyph: row.glyph,
        };

        if !food.is_loggable() {
            warn!(name = %food.name, calories = food.calories_per_unit, "skipping catalog row");
            continue;
        }

        let key = row.category.trim().to_lowercase();
        match categories.iter_mut().find(|c| c.key == key) {
            Some(category) => category.foods.push(food),
            None => categories.push(CatalogCategory {
                name: row.category.trim().to_string(),
                key,
                foods: vec![food],
            }),
        }
    }

    Ok(Catalog::from_categories(categories))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::constants::MIN_QUANTITY;
    use crate::models::{ActivityLevel, Sex};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_profile() {
        let file = temp_file(
            r#"{"height_cm": 158, "weight_kg": 49.5, "age_years": 31, "sex": "female", "activity_factor": 1.725}"#,
        );
        let profile = load_profile(file.path()).unwrap();
        assert_eq!(profile.sex, Sex::Female);
        assert_eq!(profile.activity, ActivityLevel::Active);
        assert_eq!(profile.weight_kg, 49.5);
    }

    #[test]
    fn test_load_entries_dedup_and_clamp() {
        let file = temp_file(
            r#"[
                {"id": 1, "name": "Rice", "calories_per_unit": 116, "quantity": 1},
                {"id": 2, "name": "Egg", "calories_per_unit": 70, "quantity": 0},
                {"id": 1, "name": "Brown rice", "calories_per_unit": 100, "quantity": 2}
            ]"#,
        );
        let entries = load_entries(file.path()).unwrap();
        assert_eq!(entries.len(), 2);
        // Last occurrence wins, first position kept
        assert_eq!(entries[0].name, "Brown rice");
        assert_eq!(entries[1].quantity(), MIN_QUANTITY);
    }

    #[test]
    fn test_load_entries_bad_json() {
        let file = temp_file("not json");
        assert!(load_entries(file.path()).is_err());
    }

    #[test]
    fn test_load_catalog() {
        let file = temp_file(
            "category,name,calories_per_unit,unit,default_quantity,glyph\n\
             Fruit,Apple,52,piece,1,🍎\n\
             Drinks,Water,0,cup,1,💧\n\
             Fruit,Banana,89,piece,1,🍌\n\
             Drinks,Cola,129,bottle,1,🥤\n",
        );
        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.categories().len(), 2);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.category("fruit").unwrap().foods.len(), 2);
        assert!(catalog.find("water").is_none());
    }
}
