//=========================================================================
// Errors
//=========================================================================
//
// Error types for snapshot construction and scene configuration.
//
// The model itself can only fail one way: out-of-range vitals at build
// time. Config loading adds I/O and parse failures on top.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== ModelError ==========================================================

/// Validation failures raised when building a [`SceneSnapshot`].
///
/// Health and shield are percentages capped at 100; ammo is unsigned and
/// cannot fail. There is no recovery path — a rejected snapshot is simply
/// not constructed.
///
/// [`SceneSnapshot`]: crate::model::SceneSnapshot
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("health out of range: {value} (max {max})")]
    HealthOutOfRange { value: u32, max: u32 },

    #[error("shield out of range: {value} (max {max})")]
    ShieldOutOfRange { value: u32, max: u32 },
}

//=== ConfigError =========================================================

/// Failures while loading, parsing, or saving a scene configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scene file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scene file: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("failed to serialize scene: {0}")]
    Serialize(#[from] ron::Error),

    #[error("scene rejected by validation: {0}")]
    Invalid(#[from] ModelError),
}
