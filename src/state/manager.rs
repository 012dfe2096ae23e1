use tracing::{debug, info};

use crate::catalog::CatalogFood;
use crate::engine::{self, add_entry, is_complete, remove_entry, update_quantity};
use crate::models::{Assessment, EntryId, FoodEntry, PersonalProfile};

/// Wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    Profile,
    FoodLog,
    Forecast,
    Advice,
}

/// Owns the profile and food log and keeps the assessment in sync.
///
/// Every mutator replaces its collection wholesale and then refreshes the
/// snapshot; the previous snapshot is dropped.
pub struct ForecastSession {
    profile: PersonalProfile,
    entries: Vec<FoodEntry>,
    next_id: EntryId,
    snapshot: Option<Assessment>,
}

impl ForecastSession {
    pub fn new(profile: PersonalProfile) -> Self {
        Self::with_entries(profile, Vec::new())
    }

    /// Start from an existing food log; new ids continue after the largest.
    ///
    /// Ids wrap around past `u64::MAX`, skipping any already in the log.
    pub fn with_entries(profile: PersonalProfile, entries: Vec<FoodEntry>) -> Self {
        let next_id = entries
            .iter()
            .map(|e| e.id)
            .max()
            .map_or(1, |id| id.wrapping_add(1));
        let mut session = Self {
            profile,
            entries,
            next_id,
            snapshot: None,
        };
        session.refresh();
        session
    }

    pub fn profile(&self) -> &PersonalProfile {
        &self.profile
    }

    pub fn entries(&self) -> &[FoodEntry] {
        &self.entries
    }

    pub fn entry(&self, id: EntryId) -> Option<&FoodEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Current snapshot, `None` while the profile is incomplete.
    pub fn assessment(&self) -> Option<&Assessment> {
        self.snapshot.as_ref()
    }

    /// Replace the whole profile.
    pub fn set_profile(&mut self, profile: PersonalProfile) {
        self.profile = profile;
        self.refresh();
    }

    /// Log a custom food. Returns the new id, or `None` if it was rejected.
    pub fn add_food(&mut self, name: &str, calories_per_unit: f64, quantity: f64) -> Option<EntryId> {
        let candidate = FoodEntry::new(self.fresh_id(), name, calories_per_unit, quantity);
        self.push_candidate(candidate)
    }

    /// Log a catalog food at its default quantity.
    pub fn add_catalog_food(&mut self, food: &CatalogFood) -> Option<EntryId> {
        let candidate = food.to_entry(self.fresh_id());
        self.push_candidate(candidate)
    }

    /// First id at or after `next_id` that is not in the log.
    fn fresh_id(&self) -> EntryId {
        let mut id = self.next_id;
        while self.entries.iter().any(|e| e.id == id) {
            id = id.wrapping_add(1);
        }
        id
    }

    fn push_candidate(&mut self, candidate: FoodEntry) -> Option<EntryId> {
        let id = candidate.id;
        let before = self.entries.len();
        self.entries = add_entry(&self.entries, candidate);

        if self.entries.len() == before {
            return None;
        }

        self.next_id = id.wrapping_add(1);
        self.refresh();
        Some(id)
    }

    /// Remove an entry. Returns whether anything was removed.
    pub fn remove_food(&mut self, id: EntryId) -> bool {
        let before = self.entries.len();
        self.entries = remove_entry(&self.entries, id);
        self.refresh();
        self.entries.len() != before
    }

    /// Change an entry's quantity; values at or below zero become 0.1.
    pub fn update_quantity(&mut self, id: EntryId, quantity: f64) {
        self.entries = update_quantity(&self.entries, id, quantity);
        self.refresh();
    }

    /// Drop the food log but keep the profile.
    pub fn clear_entries(&mut self) {
        info!(entries = self.entries.len(), "clearing food log");
        self.entries = Vec::new();
        self.refresh();
    }

    /// Whether the wizard may show `step`.
    pub fn step_available(&self, step: Step) -> bool {
        match step {
            Step::Profile | Step::FoodLog => true,
            Step::Forecast | Step::Advice => is_complete(&self.profile),
        }
    }

    /// Rebuild the snapshot from the current profile and food log.
    pub fn refresh(&mut self) {
        self.snapshot = engine::assess(&self.profile, &self.entries);
        debug!(
            entries = self.entries.len(),
            ready = self.snapshot.is_some(),
            "session refreshed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::engine::constants::MIN_QUANTITY;
    use crate::models::{ActivityLevel, Sex};

    fn sample_profile() -> PersonalProfile {
        PersonalProfile::new(170.0, 65.0, 25, Sex::Male, ActivityLevel::Sedentary)
    }

    #[test]
    fn test_blank_session_has_no_snapshot() {
        let session = ForecastSession::new(PersonalProfile::default());
        assert!(session.assessment().is_none());
        assert!(session.step_available(Step::FoodLog));
        assert!(!session.step_available(Step::Forecast));
        assert!(!session.step_available(Step::Advice));
    }

    #[test]
    fn test_set_profile_produces_snapshot() {
        let mut session = ForecastSession::new(PersonalProfile::default());
        session.set_profile(sample_profile());
        assert!(session.assessment().is_some());
        assert!(session.step_available(Step::Advice));
    }

    #[test]
    fn test_add_food_assigns_ids_and_refreshes() {
        let mut session = ForecastSession::new(sample_profile());
        let before = session.assessment().unwrap().forecast.calories_consumed;

        let first = session.add_food("Rice", 116.0, 1.0).unwrap();
        let second = session.add_food("Egg", 70.0, 2.0).unwrap();
        assert_ne!(first, second);

        let after = session.assessment().unwrap().forecast.calories_consumed;
        assert_eq!(before, 0.0);
        assert!((after - 256.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejected_food_keeps_id_and_list() {
        let mut session = ForecastSession::new(sample_profile());
        assert!(session.add_food("", 100.0, 1.0).is_none());
        assert!(session.add_food("Water", 0.0, 1.0).is_none());
        assert!(session.entries().is_empty());
        assert_eq!(session.add_food("Apple", 52.0, 1.0), Some(1));
    }

    #[test]
    fn test_add_catalog_food() {
        let catalog = Catalog::builtin();
        let mut session = ForecastSession::new(sample_profile());
        let id = session.add_catalog_food(catalog.find("Egg").unwrap()).unwrap();
        assert_eq!(session.entries()[0].id, id);
        assert_eq!(session.entries()[0].quantity(), 2.0);

        assert!(session.add_catalog_food(catalog.find("Water").unwrap()).is_none());
    }

    #[test]
    fn test_catalog_food_stored_with_clamped_quantity() {
        let saffron = CatalogFood {
            name: "Saffron".to_string(),
            calories_per_unit: 310.0,
            unit: "pinch".to_string(),
            default_quantity: 0.02,
            glyph: String::new(),
        };

        let mut session = ForecastSession::new(sample_profile());
        let id = session.add_catalog_food(&saffron).unwrap();
        assert_eq!(session.entry(id).map(FoodEntry::quantity), Some(MIN_QUANTITY));
        assert!(session.entry(id + 1).is_none());
    }

    #[test]
    fn test_update_and_remove() {
        let mut session = ForecastSession::new(sample_profile());
        let id = session.add_food("Rice", 116.0, 1.0).unwrap();

        session.update_quantity(id, -2.0);
        assert_eq!(session.entries()[0].quantity(), 0.1);
        let consumed = session.assessment().unwrap().forecast.calories_consumed;
        assert!((consumed - 11.6).abs() < 1e-9);

        assert!(!session.remove_food(id + 100));
        assert!(session.remove_food(id));
        assert!(session.entries().is_empty());
    }

    #[test]
    fn test_with_entries_continues_ids() {
        let entries = vec![FoodEntry::new(7, "Rice", 116.0, 1.0)];
        let mut session = ForecastSession::with_entries(sample_profile(), entries);
        assert_eq!(session.add_food("Egg", 70.0, 1.0), Some(8));
    }

    #[test]
    fn test_with_entries_at_max_id_wraps() {
        let entries = vec![FoodEntry::new(u64::MAX, "Rice", 116.0, 1.0)];
        let mut session = ForecastSession::with_entries(sample_profile(), entries);
        assert!(session.assessment().is_some());

        let first = session.add_food("Egg", 70.0, 1.0).unwrap();
        let second = session.add_food("Apple", 52.0, 1.0).unwrap();
        assert_eq!(first, 0);
        assert_eq!(second, 1);
        assert_eq!(session.entries().len(), 3);
    }

    #[test]
    fn test_fresh_id_skips_ids_in_use() {
        let entries = vec![
            FoodEntry::new(u64::MAX, "Rice", 116.0, 1.0),
            FoodEntry::new(0, "Egg", 70.0, 1.0),
            FoodEntry::new(1, "Milk", 54.0, 1.0),
        ];
        let mut session = ForecastSession::with_entries(sample_profile(), entries);
        assert_eq!(session.add_food("Apple", 52.0, 1.0), Some(2));
    }

    #[test]
    fn test_clear_entries_keeps_profile() {
        let mut session = ForecastSession::new(sample_profile());
        session.add_food("Rice", 116.0, 1.0);
        session.clear_entries();
        assert!(session.entries().is_empty());
        assert_eq!(session.profile(), &sample_profile());
        assert!(session.assessment().is_some());
    }
}
