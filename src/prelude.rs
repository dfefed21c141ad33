//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use sitrep_panel::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Snapshot model
pub use crate::model::{
    Inventory, InventoryEntry, MissionBrief, SceneSnapshot, SceneStatus, SnapshotBuilder,
    StatusLine, Vitals,
};

// Scene configuration
pub use crate::config::SceneConfig;

// Rendering seam
pub use crate::panel::{RenderSurface, TextPanel};

// Errors
pub use crate::error::{ConfigError, ModelError};
