//=========================================================================
// Vitals
//=========================================================================
//
// Numeric health/shield/ammo readout.
//
// Health and shield are percentages (0–100). Ammo is a magazine/reserve
// pair with no upper bound. The 0–100 cap is the model's only numeric
// invariant and is enforced once, when the snapshot is built.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::error::ModelError;

//=== Constants ===========================================================

/// Upper bound for health and shield percentages.
pub const MAX_VITAL: u32 = 100;

//=== Vitals ==============================================================

/// Numeric vitals readout: health, shield, and ammo.
///
/// Plain data with no derived state. `shield_recharging` is a display
/// hint only; it does not affect validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vitals {
    health: u32,
    shield: u32,
    shield_recharging: bool,
    ammo_magazine: u32,
    ammo_reserve: u32,
}

impl Vitals {
    //--- Construction -----------------------------------------------------

    /// Creates a vitals readout.
    ///
    /// Values are accepted as-is here; range checking happens when the
    /// snapshot is built, so a builder can be assembled field by field
    /// without intermediate failures.
    pub fn new(health: u32, shield: u32, ammo_magazine: u32, ammo_reserve: u32) -> Self {
        Self {
            health,
            shield,
            shield_recharging: false,
            ammo_magazine,
            ammo_reserve,
        }
    }

    /// Marks the shield as recharging.
    pub fn with_shield_recharging(mut self) -> Self {
        self.shield_recharging = true;
        self
    }

    //--- Validation -------------------------------------------------------

    /// Checks the 0–100 cap on health and shield.
    ///
    /// Ammo is unsigned and cannot be out of range.
    pub(crate) fn validate(&self) -> Result<(), ModelError> {
        if self.health > MAX_VITAL {
            return Err(ModelError::HealthOutOfRange {
                value: self.health,
                max: MAX_VITAL,
            });
        }
        if self.shield > MAX_VITAL {
            return Err(ModelError::ShieldOutOfRange {
                value: self.shield,
                max: MAX_VITAL,
            });
        }
        Ok(())
    }

    //--- Accessors --------------------------------------------------------

    /// Health percentage (0–100).
    pub fn health(&self) -> u32 {
        self.health
    }

    /// Shield percentage (0–100).
    pub fn shield(&self) -> u32 {
        self.shield
    }

    /// Whether the shield is currently recharging.
    pub fn shield_recharging(&self) -> bool {
        self.shield_recharging
    }

    /// Rounds in the current magazine.
    pub fn ammo_magazine(&self) -> u32 {
        self.ammo_magazine
    }

    /// Rounds held in reserve.
    pub fn ammo_reserve(&self) -> u32 {
        self.ammo_reserve
    }
}

impl Default for Vitals {
    /// Full health and shield, empty weapon.
    fn default() -> Self {
        Self::new(MAX_VITAL, MAX_VITAL, 0, 0)
    }
}

//=== Tests ===============================================================
