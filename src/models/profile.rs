use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::HealthError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    #[default]
    Male,
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

/// Self-reported activity tier.
///
/// Serialized as its bare multiplier; any other number is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum ActivityLevel {
    #[default]
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// TDEE multiplier for this tier.
    pub fn factor(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Light => "Lightly active",
            ActivityLevel::Moderate => "Moderately active",
            ActivityLevel::Active => "Very active",
            ActivityLevel::VeryActive => "Extra active",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Desk job, little or no exercise",
            ActivityLevel::Light => "Light exercise 1-3 days a week",
            ActivityLevel::Moderate => "Moderate exercise 3-5 days a week",
            ActivityLevel::Active => "Hard exercise 6-7 days a week",
            ActivityLevel::VeryActive => "Physical job or training twice a day",
        }
    }
}

impl TryFrom<f64> for ActivityLevel {
    type Error = HealthError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|level| (level.factor() - value).abs() < 1e-9)
            .ok_or(HealthError::UnknownActivityFactor(value))
    }
}

impl From<ActivityLevel> for f64 {
    fn from(level: ActivityLevel) -> Self {
        level.factor()
    }
}

/// Anthropometric profile entered by the user.
///
/// A zeroed profile is the "nothing entered yet" state, not an error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PersonalProfile {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub age_years: u32,
    pub sex: Sex,
    #[serde(rename = "activity_factor")]
    pub activity: ActivityLevel,
}

impl PersonalProfile {
    pub fn new(
        height_cm: f64,
        weight_kg: f64,
        age_years: u32,
        sex: Sex,
        activity: ActivityLevel,
    ) -> Self {
        Self {
            height_cm,
            weight_kg,
            age_years,
            sex,
            activity,
        }
    }

    pub fn activity_factor(&self) -> f64 {
        self.activity.factor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_factor_roundtrip() {
        for level in ActivityLevel::ALL {
            assert_eq!(ActivityLevel::try_from(level.factor()).unwrap(), level);
        }
        assert!(matches!(
            ActivityLevel::try_from(1.3),
            Err(HealthError::UnknownActivityFactor(_))
        ));
    }

    #[test]
    fn test_profile_json_uses_bare_factor() {
        let json = r#"{"height_cm":170,"weight_kg":65,"age_years":25,"sex":"female","activity_factor":1.55}"#;
        let profile: PersonalProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.sex, Sex::Female);
        assert_eq!(profile.activity, ActivityLevel::Moderate);

        let out = serde_json::to_string(&profile).unwrap();
        assert!(out.contains("\"activity_factor\":1.55"));
    }

    #[test]
    fn test_profile_json_rejects_unknown_factor() {
        let json = r#"{"height_cm":170,"weight_kg":65,"age_years":25,"sex":"male","activity_factor":2.5}"#;
        assert!(serde_json::from_str::<PersonalProfile>(json).is_err());
    }

    #[test]
    fn test_default_is_blank() {
        let profile = PersonalProfile::default();
        assert_eq!(profile.height_cm, 0.0);
        assert_eq!(profile.age_years, 0);
        assert_eq!(profile.activity, ActivityLevel::Sedentary);
    }
}
