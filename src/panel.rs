//=========================================================================
// Panel Rendering Seam
//
// Contract between the presentation model and display surfaces.
//
// Responsibilities:
// - Define `RenderSurface`, the one-way seam a display collaborator
//   implements: it receives an immutable snapshot and mutates nothing
//   back into the model
// - Provide `TextPanel`, a built-in plain-text surface that formats the
//   snapshot into the classic sidebar layout (status list, vitals bars,
//   ammo, inventory, mission)
//
// Notes:
// Toolkit rendering (windows, charts, vector views) lives outside this
// crate. `TextPanel` exists as the reference collaborator and for tests;
// the pre-authored view markup is surfaced only as an attachment note.
//
//=========================================================================

//=== Standard Library Imports ============================================
use std::fmt::Write;

//=== External Crates =====================================================
use log::debug;

//=== Internal Modules ====================================================
use crate::model::{SceneSnapshot, Vitals, MAX_VITAL};

//=== RenderSurface Trait =================================================

/// Defines the display side of the presentation model.
///
/// A surface receives a fully-built snapshot once per display cycle and
/// renders it however it likes. The snapshot is borrowed and immutable;
/// surfaces never write back into the model.
pub trait RenderSurface {
    /// Presents one snapshot on this surface.
    fn present(&mut self, snapshot: &SceneSnapshot);
}

//=== TextPanel ===========================================================

/// Plain-text display surface.
///
/// Formats a snapshot into a panel string: title, battlefield status,
/// vitals with progress bars, inventory, and mission brief. Output is
/// deterministic for a given snapshot.
///
/// # Examples
///
/// ```
/// use sitrep_panel::{RenderSurface, SnapshotBuilder, TextPanel, Vitals};
///
/// let snapshot = SnapshotBuilder::new()
///     .title("Test Scene")
///     .vitals(Vitals::new(50, 50, 8, 24))
///     .build()
///     .unwrap();
///
/// let mut panel = TextPanel::new();
/// panel.present(&snapshot);
/// assert!(panel.output().contains("Test Scene"));
/// ```
#[derive(Debug, Default)]
pub struct TextPanel {
    output: String,
}

//--- Bar geometry --------------------------------------------------------
//
// Progress bars are BAR_WIDTH cells; filled cells scale linearly with
// the vital's value against MAX_VITAL.
//
const BAR_WIDTH: u32 = 20;

impl TextPanel {
    //--- Constructor ------------------------------------------------------
    //
    // Creates a panel with no rendered output yet.
    //
    pub fn new() -> Self {
        Self::default()
    }

    //--- output() ---------------------------------------------------------
    //
    // Returns the text of the most recently presented snapshot, or an
    // empty string if nothing has been presented.
    //
    pub fn output(&self) -> &str {
        &self.output
    }

    //--- render_bar() -----------------------------------------------------
    //
    // Renders a `[####----]`-style progress bar for a 0–100 value.
    //
    fn render_bar(value: u32) -> String {
        let filled = (value.min(MAX_VITAL) * BAR_WIDTH / MAX_VITAL) as usize;
        let empty = BAR_WIDTH as usize - filled;
        format!("[{}{}]", "#".repeat(filled), "-".repeat(empty))
    }

    //--- render_vitals() --------------------------------------------------
    //
    // Formats the vitals block: health and shield bars plus the ammo line.
    //
    fn render_vitals(out: &mut String, vitals: &Vitals) {
        let _ = writeln!(
            out,
            "  Health {} {}",
            Self::render_bar(vitals.health()),
            vitals.health()
        );

        let recharge = if vitals.shield_recharging() {
            " (Recharging)"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "  Shield {} {}{}",
            Self::render_bar(vitals.shield()),
            vitals.shield(),
            recharge
        );

        let _ = writeln!(
            out,
            "  Ammo: {} / {}",
            vitals.ammo_magazine(),
            vitals.ammo_reserve()
        );
    }
}

impl RenderSurface for TextPanel {
    //--- present() --------------------------------------------------------
    //
    // Rebuilds the output string from scratch for each snapshot; the
    // panel keeps no state between display cycles beyond the last text.
    //
    fn present(&mut self, snapshot: &SceneSnapshot) {
        debug!("Rendering text panel for scene '{}'", snapshot.title());

        let mut out = String::new();

        let _ = writeln!(out, "=== {} ===", snapshot.title());
        let _ = writeln!(out);

        if !snapshot.status().is_empty() {
            let _ = writeln!(out, "Battlefield Status");
            for line in snapshot.status().lines() {
                let _ = writeln!(out, "  {} {}", line.icon(), line.label());
            }
            let _ = writeln!(out);
        }

        let _ = writeln!(out, "Vitals");
        Self::render_vitals(&mut out, snapshot.vitals());
        let _ = writeln!(out);

        if !snapshot.inventory().is_empty() {
            let _ = writeln!(out, "Inventory");
            for entry in snapshot.inventory().entries() {
                let _ = writeln!(out, "  {} {}", entry.icon(), entry.name());
            }
            let _ = writeln!(out);
        }

        if !snapshot.mission().is_empty() {
            let _ = writeln!(out, "Current Mission");
            let _ = writeln!(out, "  {}", snapshot.mission().text());
        }

        if snapshot.view_markup().is_some() {
            let _ = writeln!(out);
            let _ = writeln!(out, "[scene view markup attached]");
        }

        self.output = out;
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SnapshotBuilder;

    fn sample_snapshot() -> SceneSnapshot {
        SnapshotBuilder::new()
            .title("Reach Surface - Entering ONI Facility")
            .mission("Enter ONI facility. Secure interior position.")
            .status_line("🔓", "Facility Access: Hatch Open, Team Entering")
            .vitals(Vitals::new(95, 75, 45, 12).with_shield_recharging())
            .inventory_entry("🔪", "Combat Knife")
            .build()
            .unwrap()
    }

    #[test]
    fn bar_geometry_scales_with_value() {
        assert_eq!(TextPanel::render_bar(0), format!("[{}]", "-".repeat(20)));
        assert_eq!(TextPanel::render_bar(100), format!("[{}]", "#".repeat(20)));
        assert_eq!(TextPanel::render_bar(50), format!("[{}{}]", "#".repeat(10), "-".repeat(10)));
    }

    #[test]
    fn present_includes_every_section() {
        let mut panel = TextPanel::new();
        panel.present(&sample_snapshot());

        let out = panel.output();
        assert!(out.contains("=== Reach Surface - Entering ONI Facility ==="));
        assert!(out.contains("Battlefield Status"));
        assert!(out.contains("🔓 Facility Access: Hatch Open, Team Entering"));
        assert!(out.contains("Health"));
        assert!(out.contains("75 (Recharging)"));
        assert!(out.contains("Ammo: 45 / 12"));
        assert!(out.contains("🔪 Combat Knife"));
        assert!(out.contains("Current Mission"));
    }

    #[test]
    fn present_skips_empty_sections() {
        let snapshot = SnapshotBuilder::new().title("Bare").build().unwrap();

        let mut panel = TextPanel::new();
        panel.present(&snapshot);

        let out = panel.output();
        assert!(!out.contains("Battlefield Status"));
        assert!(!out.contains("Inventory"));
        assert!(!out.contains("Current Mission"));
        assert!(out.contains("Vitals"));
    }

    #[test]
    fn present_is_deterministic() {
        let snapshot = sample_snapshot();

        let mut first = TextPanel::new();
        let mut second = TextPanel::new();
        first.present(&snapshot);
        second.present(&snapshot);

        assert_eq!(first.output(), second.output());
    }

    #[test]
    fn present_replaces_previous_output() {
        let mut panel = TextPanel::new();
        panel.present(&sample_snapshot());

        let other = SnapshotBuilder::new().title("Other").build().unwrap();
        panel.present(&other);

        assert!(panel.output().contains("=== Other ==="));
        assert!(!panel.output().contains("ONI Facility"));
    }
}
