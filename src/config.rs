//! Runtime configuration for the canvas.
//!
//! Values default to the constants in [`crate::constants`]. The whole struct is
//! persisted with the UI preferences, but the layout it describes is
//! regenerated every launch.

use crate::constants::{ITEM_COUNT, TILE_GAP, TILE_SIZE};
use serde::{Deserialize, Serialize};

/// Settings for a canvas session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Torus period on both axes
    pub tile_size: f32,
    /// Spacing added between neighbouring tile replicas
    pub gap: f32,
    /// Number of base items to generate
    pub item_count: usize,
    /// Side length of the square region items are placed in, centred at the origin
    pub region: f32,
    /// Whether released drags keep gliding
    pub momentum: bool,
    /// Fixed seed for the item layout; random when `None`
    pub seed: Option<u64>,
    /// Directory that item source references are resolved against
    pub asset_dir: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            tile_size: TILE_SIZE,
            gap: TILE_GAP,
            item_count: ITEM_COUNT,
            region: TILE_SIZE,
            momentum: true,
            seed: None,
            asset_dir: "assets".to_string(),
        }
    }
}

impl CanvasConfig {
    /// Replaces geometry values the plane cannot work with by their defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.tile_size.is_finite() && self.tile_size > 0.0) {
            log::warn!("Ignoring invalid tile size {}", self.tile_size);
            self.tile_size = defaults.tile_size;
        }
        if !(self.gap.is_finite() && self.gap >= 0.0) {
            log::warn!("Ignoring invalid tile gap {}", self.gap);
            self.gap = defaults.gap;
        }
        if !(self.region.is_finite() && self.region > 0.0) {
            log::warn!("Ignoring invalid placement region {}", self.region);
            self.region = self.tile_size;
        }
        self
    }
}
