//=========================================================================
// Sitrep Panel — Library Root
//
// This crate defines the public API surface of the scene presentation
// model: an immutable snapshot of battlefield status (mission text,
// status flags, vitals, inventory) that a rendering collaborator reads
// and displays.
//
// Responsibilities:
// - Expose the snapshot types and their fluent builder
// - Expose the scene configuration record (RON-backed)
// - Expose the rendering seam (`RenderSurface`) and the built-in
//   plain-text surface (`TextPanel`)
//
// Typical usage:
// ```no_run
// use sitrep_panel::{SceneConfig, TextPanel, RenderSurface};
//
// fn main() {
//     let snapshot = SceneConfig::load("scenes/oni_facility.ron")
//         .expect("scene file")
//         .build()
//         .expect("valid scene");
//
//     let mut panel = TextPanel::new();
//     panel.present(&snapshot);
//     println!("{}", panel.output());
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `model` contains the presentation data types (snapshot, vitals, status,
// inventory, mission) and the builder. `config` holds the serde-backed
// scene record, `panel` the rendering seam. `error` carries the crate's
// error types.
//
pub mod config;
pub mod error;
pub mod model;
pub mod panel;

pub mod prelude;

//--- Public Exports ------------------------------------------------------
//
// Re-exports the types most applications need, so users can write
// `use sitrep_panel::SceneSnapshot;` without knowing the module tree.
//
pub use config::SceneConfig;
pub use error::{ConfigError, ModelError};
pub use model::{
    Inventory, InventoryEntry, MissionBrief, SceneSnapshot, SceneStatus, SnapshotBuilder,
    StatusLine, Vitals,
};
pub use panel::{RenderSurface, TextPanel};
