use tracing::debug;

use crate::engine::constants::MIN_QUANTITY;
use crate::models::{EntryId, FoodEntry};

/// Total calories consumed across all entries. Empty list yields 0.
pub fn total_calories(entries: &[FoodEntry]) -> f64 {
    entries.iter().map(FoodEntry::calories).sum()
}

/// Append `candidate` to a copy of `entries`.
///
/// The list comes back unchanged if the candidate has an empty name,
/// non-positive calories, or an id already in the list.
pub fn add_entry(entries: &[FoodEntry], candidate: FoodEntry) -> Vec<FoodEntry> {
    let mut next = entries.to_vec();

    if !candidate.is_valid() {
        debug!(name = %candidate.name, calories = candidate.calories_per_unit, "rejected invalid food entry");
        return next;
    }
    if entries.iter().any(|e| e.id == candidate.id) {
        debug!(id = candidate.id, "rejected food entry with duplicate id");
        return next;
    }

    next.push(candidate);
    next
}

/// Copy of `entries` without the entry `id`. Unknown ids are a no-op.
pub fn remove_entry(entries: &[FoodEntry], id: EntryId) -> Vec<FoodEntry> {
    if !entries.iter().any(|e| e.id == id) {
        debug!(id, "remove ignored, no such entry");
    }
    entries.iter().filter(|e| e.id != id).cloned().collect()
}

/// Copy of `entries` with the quantity of `id` replaced, floored at 0.1.
pub fn update_quantity(entries: &[FoodEntry], id: EntryId, quantity: f64) -> Vec<FoodEntry> {
    if quantity.is_nan() || quantity < MIN_QUANTITY {
        debug!(id, requested = quantity, "quantity clamped to floor");
    }

    entries
        .iter()
        .map(|e| {
            if e.id == id {
                e.with_quantity(quantity)
            } else {
                e.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entries() -> Vec<FoodEntry> {
        vec![
            FoodEntry::new(1, "Rice", 116.0, 1.0),
            FoodEntry::new(2, "Egg", 70.0, 2.0),
        ]
    }

    #[test]
    fn test_total_calories() {
        assert_eq!(total_calories(&[]), 0.0);
        assert!((total_calories(&sample_entries()) - 256.0).abs() < 1e-9);
    }

    #[test]
    fn test_total_calories_fractional() {
        let entries = vec![FoodEntry::new(1, "Pork belly", 518.0, 0.5)];
        assert!((total_calories(&entries) - 259.0).abs() < 1e-9);
    }

    #[test]
    fn test_add_entry() {
        let entries = sample_entries();
        let next = add_entry(&entries, FoodEntry::new(3, "Apple", 52.0, 1.0));
        assert_eq!(next.len(), 3);
        assert_eq!(next[2].name, "Apple");
        // Input untouched
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_add_entry_rejects_invalid() {
        let entries = sample_entries();
        assert_eq!(add_entry(&entries, FoodEntry::new(3, "", 52.0, 1.0)).len(), 2);
        assert_eq!(add_entry(&entries, FoodEntry::new(3, "Water", 0.0, 1.0)).len(), 2);
        assert_eq!(add_entry(&entries, FoodEntry::new(3, "Odd", -10.0, 1.0)).len(), 2);
    }

    #[test]
    fn test_add_entry_accepts_blank_but_nonempty_name() {
        let next = add_entry(&[], FoodEntry::new(1, "  ", 100.0, 1.0));
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].name, "  ");
    }

    #[test]
    fn test_add_entry_rejects_duplicate_id() {
        let entries = sample_entries();
        let next = add_entry(&entries, FoodEntry::new(1, "Apple", 52.0, 1.0));
        assert_eq!(next, entries);
    }

    #[test]
    fn test_remove_entry() {
        let entries = sample_entries();
        let next = remove_entry(&entries, 1);
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].id, 2);

        assert_eq!(remove_entry(&entries, 99), entries);
    }

    #[test]
    fn test_update_quantity() {
        let entries = sample_entries();
        let next = update_quantity(&entries, 2, 3.5);
        assert_eq!(next[1].quantity(), 3.5);
        assert_eq!(next[0].quantity(), 1.0);
    }

    #[test]
    fn test_update_quantity_floor() {
        let entries = sample_entries();
        for requested in [0.0, -1.0, -0.0001, f64::NAN] {
            let next = update_quantity(&entries, 1, requested);
            assert_eq!(next[0].quantity(), MIN_QUANTITY);
        }
    }

    #[test]
    fn test_update_quantity_unknown_id() {
        let entries = sample_entries();
        assert_eq!(update_quantity(&entries, 42, 5.0), entries);
    }
}
