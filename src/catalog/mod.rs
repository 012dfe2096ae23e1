mod builtin;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::models::{EntryId, FoodEntry};

pub use builtin::BUILTIN_CATEGORIES;

/// Minimum Jaro-Winkler similarity for a fuzzy catalog match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Reference record in the food catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogFood {
    pub name: String,
    pub calories_per_unit: f64,
    pub unit: String,
    pub default_quantity: f64,
    pub glyph: String,
}

impl CatalogFood {
    /// Log entry for this food at its default quantity.
    pub fn to_entry(&self, id: EntryId) -> FoodEntry {
        FoodEntry::new(id, self.name.clone(), self.calories_per_unit, self.default_quantity)
    }

    /// Whether this food can be logged (non-empty name, positive calories).
    pub fn is_loggable(&self) -> bool {
        !self.name.is_empty() && self.calories_per_unit > 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogCategory {
    pub key: String,
    pub name: String,
    pub foods: Vec<CatalogFood>,
}

/// Read-only collection of food categories.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    categories: Vec<CatalogCategory>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self::from_categories((*BUILTIN_CATEGORIES).clone())
    }

    pub fn from_categories(categories: Vec<CatalogCategory>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[CatalogCategory] {
        &self.categories
    }

    /// Look up a category by key (case-insensitive).
    pub fn category(&self, key: &str) -> Option<&CatalogCategory> {
        self.categories
            .iter()
            .find(|c| c.key.eq_ignore_ascii_case(key))
    }

    /// Look up a food by exact name (case-insensitive).
    pub fn find(&self, name: &str) -> Option<&CatalogFood> {
        let needle = name.to_lowercase();
        self.foods().find(|f| f.name.to_lowercase() == needle)
    }

    pub fn foods(&self) -> impl Iterator<Item = &CatalogFood> {
        self.categories.iter().flat_map(|c| c.foods.iter())
    }

    /// Total number of foods across all categories.
    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.foods.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Foods per category whose name contains `term`.
    ///
    /// An empty term keeps every food. Categories are kept even when empty.
    pub fn filter(&self, term: &str) -> Vec<(&CatalogCategory, Vec<&CatalogFood>)> {
        let needle = term.trim().to_lowercase();
        self.categories
            .iter()
            .map(|c| {
                let foods = c
                    .foods
                    .iter()
                    .filter(|f| needle.is_empty() || f.name.to_lowercase().contains(&needle))
                    .collect();
                (c, foods)
            })
            .collect()
    }

    /// Rank foods by similarity to `term`, best first.
    ///
    /// Substring hits always qualify; others need a Jaro-Winkler score
    /// above [`FUZZY_MATCH_THRESHOLD`].
    pub fn fuzzy_search(&self, term: &str, limit: usize) -> Vec<&CatalogFood> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(&CatalogFood, f64)> = self
            .foods()
            .map(|f| {
                let name = f.name.to_lowercase();
                let score = if name.contains(&needle) {
                    1.0 + jaro_winkler(&name, &needle)
                } else {
                    jaro_winkler(&name, &needle)
                };
                (f, score)
            })
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.into_iter().take(limit).map(|(f, _)| f).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
