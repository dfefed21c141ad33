//=========================================================================
// Scene Configuration
//=========================================================================
//
// Serde-backed record supplying every text and numeric value a scene
// needs. One scene file describes one panel; loading it and building the
// snapshot replaces the original approach of baking constants into code.
//
// Format is RON, human-readable and hand-editable:
//
// ```text
// (
//     title: "Reach Surface - Entering ONI Facility",
//     mission: "Enter ONI facility. Secure interior position.",
//     status: [("🔓", "Facility Access: Hatch Open")],
//     health: 95,
//     shield: 75,
//     shield_recharging: true,
//     ammo: (45, 12),
//     inventory: [("🔪", "Combat Knife")],
//     view_markup: None,
// )
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fs;
use std::path::Path;

//=== External Crates =====================================================

use log::debug;
use serde::{Deserialize, Serialize};

//=== Internal Modules ====================================================

use crate::error::ConfigError;
use crate::model::{SceneSnapshot, SnapshotBuilder, Vitals};

//=== SceneConfig =========================================================

/// Configuration record for one scene.
///
/// Field names match the RON scene file format. All fields except
/// `title`, `health`, `shield`, and `ammo` default to empty/absent, so a
/// minimal scene file only needs those four.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneConfig {
    pub title: String,

    #[serde(default)]
    pub mission: String,

    /// (icon, label) pairs, in display order.
    #[serde(default)]
    pub status: Vec<(String, String)>,

    pub health: u32,
    pub shield: u32,

    #[serde(default)]
    pub shield_recharging: bool,

    /// (magazine, reserve).
    pub ammo: (u32, u32),

    /// (icon, name) pairs, in display order.
    #[serde(default)]
    pub inventory: Vec<(String, String)>,

    /// Pre-authored vector markup for the scene view, carried opaquely.
    #[serde(default)]
    pub view_markup: Option<String>,
}

impl SceneConfig {
    //--- Loading ----------------------------------------------------------

    /// Loads a scene configuration from a RON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Loading scene config from {}", path.display());

        let text = fs::read_to_string(path)?;
        Self::from_ron(&text)
    }

    /// Parses a scene configuration from a RON string.
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(text)?;
        debug!("Parsed scene config '{}'", config.title);
        Ok(config)
    }

    //--- Saving -----------------------------------------------------------

    /// Serializes the configuration as pretty RON.
    ///
    /// Lets scene files be authored programmatically and round-trip
    /// through [`SceneConfig::from_ron`].
    pub fn to_ron(&self) -> Result<String, ConfigError> {
        let pretty = ron::ser::PrettyConfig::new();
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    /// Writes the configuration to a RON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        debug!("Saving scene config '{}' to {}", self.title, path.display());

        fs::write(path, self.to_ron()?)?;
        Ok(())
    }

    //--- Building ---------------------------------------------------------

    /// Builds a validated [`SceneSnapshot`] from this configuration.
    ///
    /// Same validation rules as the builder: health or shield above 100
    /// is rejected.
    pub fn build(&self) -> Result<SceneSnapshot, ConfigError> {
        let mut vitals = Vitals::new(self.health, self.shield, self.ammo.0, self.ammo.1);
        if self.shield_recharging {
            vitals = vitals.with_shield_recharging();
        }

        let mut builder = SnapshotBuilder::new()
            .title(&self.title)
            .mission(&self.mission)
            .vitals(vitals);

        for (icon, label) in &self.status {
            builder = builder.status_line(icon, label);
        }
        for (icon, name) in &self.inventory {
            builder = builder.inventory_entry(icon, name);
        }
        if let Some(markup) = &self.view_markup {
            builder = builder.view_markup(markup);
        }

        Ok(builder.build()?)
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;

    const MINIMAL_SCENE: &str = r#"(
        title: "Minimal",
        health: 100,
        shield: 50,
        ammo: (8, 24),
    )"#;

    #[test]
    fn minimal_scene_parses_with_defaults() {
        let config = SceneConfig::from_ron(MINIMAL_SCENE).unwrap();
        assert_eq!(config.title, "Minimal");
        assert!(config.mission.is_empty());
        assert!(config.status.is_empty());
        assert!(config.inventory.is_empty());
        assert!(!config.shield_recharging);
        assert!(config.view_markup.is_none());
    }

    #[test]
    fn build_carries_values_into_snapshot() {
        let config = SceneConfig {
            title: "Test".into(),
            mission: "Hold the line.".into(),
            status: vec![("⚠".into(), "Contact".into())],
            health: 60,
            shield: 40,
            shield_recharging: true,
            ammo: (30, 90),
            inventory: vec![("🔫".into(), "M6D Pistol".into())],
            view_markup: None,
        };

        let snapshot = config.build().unwrap();
        assert_eq!(snapshot.title(), "Test");
        assert_eq!(snapshot.mission().text(), "Hold the line.");
        assert_eq!(snapshot.status().len(), 1);
        assert_eq!(snapshot.vitals().shield(), 40);
        assert!(snapshot.vitals().shield_recharging());
        assert_eq!(snapshot.vitals().ammo_reserve(), 90);
        assert_eq!(snapshot.inventory().len(), 1);
    }

    #[test]
    fn build_surfaces_validation_errors() {
        let mut config = SceneConfig::from_ron(MINIMAL_SCENE).unwrap();
        config.health = 150;

        let err = config.build().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(ModelError::HealthOutOfRange { value: 150, .. })
        ));
    }

    #[test]
    fn out_of_range_scene_text_is_rejected() {
        // Scene text is the only serde entry point into the model, so
        // hostile numeric values must die at build(), not slip through.
        let config = SceneConfig::from_ron(
            r#"(
            title: "Overdriven",
            health: 150,
            shield: 300,
            ammo: (45, 12),
        )"#,
        )
        .unwrap();

        let err = config.build().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(ModelError::HealthOutOfRange { value: 150, .. })
        ));
    }

    #[test]
    fn ron_round_trip_preserves_config() {
        let config = SceneConfig::from_ron(MINIMAL_SCENE).unwrap();
        let text = config.to_ron().unwrap();
        let reparsed = SceneConfig::from_ron(&text).unwrap();
        assert_eq!(config, reparsed);
    }

    #[test]
    fn malformed_ron_is_a_parse_error() {
        let err = SceneConfig::from_ron("(title: oops").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
