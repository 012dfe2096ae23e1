use serde::{Deserialize, Deserializer, Serialize};

use crate::engine::constants::MIN_QUANTITY;

/// Caller-assigned identifier of a logged food entry.
pub type EntryId = u64;

/// Clamp a requested quantity to the floor. NaN also maps to the floor.
#[inline]
pub fn clamp_quantity(quantity: f64) -> f64 {
    quantity.max(MIN_QUANTITY)
}

fn deserialize_quantity<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer).map(clamp_quantity)
}

/// A food logged for the day.
///
/// `quantity` is private so it can only be set through the clamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    pub id: EntryId,
    pub name: String,
    pub calories_per_unit: f64,
    #[serde(deserialize_with = "deserialize_quantity")]
    quantity: f64,
}

impl FoodEntry {
    pub fn new(id: EntryId, name: impl Into<String>, calories_per_unit: f64, quantity: f64) -> Self {
        Self {
            id,
            name: name.into(),
            calories_per_unit,
            quantity: clamp_quantity(quantity),
        }
    }

    #[inline]
    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Copy of this entry with a new (clamped) quantity.
    pub fn with_quantity(&self, quantity: f64) -> Self {
        Self {
            quantity: clamp_quantity(quantity),
            ..self.clone()
        }
    }

    /// Calories contributed by this entry.
    #[inline]
    pub fn calories(&self) -> f64 {
        self.calories_per_unit * self.quantity
    }

    /// Name non-empty and calories strictly positive.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && self.calories_per_unit > 0.0
    }
}
