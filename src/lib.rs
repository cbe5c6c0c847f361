//! # Infinite Canvas
//!
//! A draggable canvas that wraps around on both axes, populated with a few
//! hundred randomly placed image tiles. Clicking a tile opens a detail dialog.
//!
//! ## How the wrap works
//! - The plane keeps a single pan offset, free to move while a drag is active
//! - When the drag ends the offset is folded back into `[-S, 0)` for tile size `S`
//!   (`[-(S + gap), 0)` when replicas are spaced apart)
//! - The base items are drawn nine times in a 3x3 grid of tiles around the
//!   offset, so content leaving one edge is already visible at the other
//!
//! ## Features
//! - Drag panning with optional momentum
//! - Per-replica hover, selection and bring-to-front
//! - Item detail dialog
//! - Lazily loaded image assets with placeholders

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod assets;
mod config;
mod constants;
mod interaction;
mod momentum;
mod plane;
mod types;
mod ui;

// Re-export public types and functions
pub use assets::{decode_image, load_image, AssetCache, AssetError};
pub use config::CanvasConfig;
pub use constants::*;
pub use interaction::{DialogState, InteractionState, ReplicaKey, ReplicaLayer};
pub use momentum::{GlideStep, Momentum};
pub use plane::{replica_displacements, wrap_axis, PannableWrapPlane, PlacedReplica, TilePlacement};
pub use types::*;
pub use ui::{CanvasApp, CanvasState};

/// Runs the canvas application with default settings.
///
/// This function initializes the egui application window and starts the main event loop.
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an `eframe::Error` if
/// initialization fails.
///
/// # Example
///
/// ```no_run
/// use infinite_canvas::run_app;
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app()
/// }
/// ```
pub fn run_app() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("Infinite Canvas")
            .with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Infinite Canvas",
        options,
        Box::new(|cc| Ok(Box::new(CanvasApp::new(cc)))),
    )
}
