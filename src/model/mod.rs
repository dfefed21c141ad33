//=========================================================================
// Presentation Model
//=========================================================================
//
// Immutable scene-state types feeding the display.
//
// Architecture:
//   SceneSnapshot
//     ├─ status: SceneStatus        (ordered icon/label lines)
//     ├─ vitals: Vitals             (health, shield, ammo)
//     ├─ inventory: Inventory       (ordered icon/name entries)
//     └─ mission: MissionBrief      (objective text)
//
// Flow:
//   SnapshotBuilder ──build()──> SceneSnapshot ──> RenderSurface
//
// Nothing here is mutated after construction; a new scene means a new
// snapshot built wholesale.
//
//=========================================================================

//=== Module Declarations =================================================

mod inventory;
mod mission;
mod snapshot;
mod status;
mod vitals;

//=== Public API ==========================================================

pub use inventory::{Inventory, InventoryEntry};
pub use mission::MissionBrief;
pub use snapshot::{SceneSnapshot, SnapshotBuilder};
pub use status::{SceneStatus, StatusLine};
pub use vitals::{Vitals, MAX_VITAL};
