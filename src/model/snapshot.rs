//=========================================================================
// Scene Snapshot
//
// The aggregate presentation record and its builder.
//
// Architecture:
// ```text
//     SnapshotBuilder  ──build()──>  SceneSnapshot  ──>  RenderSurface
//         │                              │
//         ├─ title() / mission()         └─ read-only accessors
//         ├─ status_line()
//         ├─ vitals()
//         └─ inventory_entry()
// ```
//
// A snapshot is constructed once per display cycle, read by the rendering
// collaborator, and discarded. It has exactly one state: fully built.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::warn;

//=== Internal Dependencies ===============================================

use crate::error::ModelError;
use crate::model::{Inventory, InventoryEntry, MissionBrief, SceneStatus, StatusLine, Vitals};

//=== SnapshotBuilder =====================================================

/// Builder for assembling a [`SceneSnapshot`].
///
/// Provides a fluent API for supplying scene text and numeric values
/// before construction. The builder is pure and deterministic: the same
/// inputs always yield the same snapshot, and `build()` has no side
/// effects beyond a couple of advisory log lines.
///
/// # Validation
///
/// Range checks run once, at [`build()`](SnapshotBuilder::build). Health
/// or shield above 100 is rejected with a [`ModelError`]; everything else
/// is accepted as-is.
///
/// # Examples
///
/// ```
/// use sitrep_panel::{SnapshotBuilder, Vitals};
///
/// let snapshot = SnapshotBuilder::new()
///     .title("Reach Surface - Entering ONI Facility")
///     .mission("Enter ONI facility. Secure interior position.")
///     .status_line("🔓", "Facility Access: Hatch Open, Team Entering")
///     .vitals(Vitals::new(95, 75, 45, 12).with_shield_recharging())
///     .inventory_entry("🔪", "Combat Knife")
///     .inventory_entry("💣", "Frag Grenade (x1)")
///     .build()
///     .unwrap();
///
/// assert_eq!(snapshot.vitals().health(), 95);
/// assert_eq!(snapshot.inventory().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SnapshotBuilder {
    title: String,
    mission: MissionBrief,
    status: SceneStatus,
    vitals: Vitals,
    inventory: Inventory,
    view_markup: Option<String>,
}

impl SnapshotBuilder {
    /// Creates a builder with an empty scene.
    ///
    /// Defaults: empty title, mission, status, and inventory; full vitals
    /// with an empty weapon; no view markup.
    pub fn new() -> Self {
        Self::default()
    }

    //--- Text fields ------------------------------------------------------

    /// Sets the scene title shown above the panel.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the mission brief.
    pub fn mission(mut self, text: impl Into<String>) -> Self {
        self.mission = MissionBrief::new(text);
        self
    }

    //--- Sequences --------------------------------------------------------

    /// Appends a battlefield status line. Order of calls is display order.
    pub fn status_line(mut self, icon: impl Into<String>, label: impl Into<String>) -> Self {
        self.status.push(StatusLine::new(icon, label));
        self
    }

    /// Appends an inventory entry. Order of calls is display order.
    pub fn inventory_entry(mut self, icon: impl Into<String>, name: impl Into<String>) -> Self {
        self.inventory.push(InventoryEntry::new(icon, name));
        self
    }

    //--- Vitals and view --------------------------------------------------

    /// Sets the vitals readout.
    pub fn vitals(mut self, vitals: Vitals) -> Self {
        self.vitals = vitals;
        self
    }

    /// Attaches pre-authored scene view markup.
    ///
    /// The markup is carried as an opaque string for the rendering
    /// collaborator; the model never interprets it.
    pub fn view_markup(mut self, markup: impl Into<String>) -> Self {
        self.view_markup = Some(markup.into());
        self
    }

    //--- Construction -----------------------------------------------------

    /// Builds the snapshot, validating numeric ranges.
    ///
    /// Fails only if health or shield exceeds 100. An empty mission or
    /// inventory is legal but logged, since a scene normally has both.
    pub fn build(self) -> Result<SceneSnapshot, ModelError> {
        self.vitals.validate()?;

        if self.mission.is_empty() {
            warn!("Building snapshot '{}' with empty mission brief", self.title);
        }
        if self.inventory.is_empty() {
            warn!("Building snapshot '{}' with empty inventory", self.title);
        }

        Ok(SceneSnapshot {
            title: self.title,
            mission: self.mission,
            status: self.status,
            vitals: self.vitals,
            inventory: self.inventory,
            view_markup: self.view_markup,
        })
    }
}

//=== SceneSnapshot =======================================================

/// Immutable snapshot of on-screen scene state.
///
/// Aggregates the mission brief, battlefield status lines, vitals, and
/// inventory for one display cycle. Built via [`SnapshotBuilder`]; all
/// fields are read-only after construction, and the rendering side
/// receives only borrowed data.
///
/// Two snapshots built from identical inputs compare equal. The builder
/// and [`SceneConfig`] are the only construction paths, so validation
/// cannot be sidestepped.
///
/// [`SceneConfig`]: crate::config::SceneConfig
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneSnapshot {
    title: String,
    mission: MissionBrief,
    status: SceneStatus,
    vitals: Vitals,
    inventory: Inventory,
    view_markup: Option<String>,
}

impl SceneSnapshot {
    //--- Accessors --------------------------------------------------------

    /// Scene title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Mission brief for the sidebar.
    pub fn mission(&self) -> &MissionBrief {
        &self.mission
    }

    /// Battlefield status lines, in authored order.
    pub fn status(&self) -> &SceneStatus {
        &self.status
    }

    /// Vitals readout.
    pub fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    /// Inventory entries, in authored order.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Pre-authored scene view markup, if the scene ships one.
    pub fn view_markup(&self) -> Option<&str> {
        self.view_markup.as_deref()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MAX_VITAL;

    fn reference_builder() -> SnapshotBuilder {
        SnapshotBuilder::new()
            .title("Reach Surface - Entering ONI Facility")
            .mission("Enter ONI facility. Secure interior position.")
            .status_line("🔓", "Facility Access: Hatch Open, Team Entering")
            .status_line("💨", "Smoke Screen: Deployed, Obscuring Entry")
            .vitals(Vitals::new(95, 75, 45, 12).with_shield_recharging())
            .inventory_entry("🔪", "Combat Knife")
            .inventory_entry("💣", "Frag Grenade (x1)")
    }

    //=====================================================================
    // SnapshotBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults_build_cleanly() {
        let snapshot = SnapshotBuilder::new().build().unwrap();
        assert!(snapshot.title().is_empty());
        assert!(snapshot.status().is_empty());
        assert!(snapshot.inventory().is_empty());
        assert_eq!(snapshot.vitals().health(), MAX_VITAL);
    }

    #[test]
    fn builder_round_trips_all_fields() {
        let snapshot = reference_builder().build().unwrap();

        assert_eq!(snapshot.title(), "Reach Surface - Entering ONI Facility");
        assert_eq!(
            snapshot.mission().text(),
            "Enter ONI facility. Secure interior position."
        );
        assert_eq!(snapshot.status().len(), 2);
        assert_eq!(snapshot.vitals().health(), 95);
        assert_eq!(snapshot.vitals().shield(), 75);
        assert!(snapshot.vitals().shield_recharging());
        assert_eq!(snapshot.vitals().ammo_magazine(), 45);
        assert_eq!(snapshot.vitals().ammo_reserve(), 12);
        assert_eq!(snapshot.inventory().len(), 2);
    }

    #[test]
    fn builder_rejects_health_over_max() {
        let err = SnapshotBuilder::new()
            .vitals(Vitals::new(150, 75, 45, 12))
            .build()
            .unwrap_err();
        assert!(matches!(err, ModelError::HealthOutOfRange { value: 150, .. }));
    }

    #[test]
    fn builder_rejects_shield_over_max() {
        let err = SnapshotBuilder::new()
            .vitals(Vitals::new(95, 200, 45, 12))
            .build()
            .unwrap_err();
        assert!(matches!(err, ModelError::ShieldOutOfRange { value: 200, .. }));
    }

    #[test]
    fn identical_inputs_build_equal_snapshots() {
        let first = reference_builder().build().unwrap();
        let second = reference_builder().build().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn view_markup_is_carried_untouched() {
        let markup = "<svg viewBox=\"0 0 400 300\"></svg>";
        let snapshot = SnapshotBuilder::new().view_markup(markup).build().unwrap();
        assert_eq!(snapshot.view_markup(), Some(markup));
    }

    #[test]
    fn view_markup_defaults_to_none() {
        let snapshot = SnapshotBuilder::new().build().unwrap();
        assert!(snapshot.view_markup().is_none());
    }

    //=====================================================================
    // SceneSnapshot Tests
    //=====================================================================

    #[test]
    fn status_lines_read_in_authored_order() {
        let snapshot = reference_builder().build().unwrap();
        let icons: Vec<_> = snapshot.status().lines().map(|l| l.icon()).collect();
        assert_eq!(icons, ["🔓", "💨"]);
    }

    #[test]
    fn inventory_reads_in_authored_order() {
        let snapshot = reference_builder().build().unwrap();
        assert_eq!(
            snapshot.inventory().get(0).map(|e| e.name()),
            Some("Combat Knife")
        );
    }
}
