//! Shared application-wide constants.
//! Centralizes tweakable values used across the plane, rendering and interactions.

// Plane geometry
/// Side length of one torus tile, in canvas units.
pub const TILE_SIZE: f32 = 12000.0;
/// Extra spacing inserted between neighbouring tile replicas.
pub const TILE_GAP: f32 = 0.0;
/// Number of tile replicas rendered around the current offset (3x3 neighbourhood).
pub const REPLICA_COUNT: usize = 9;
/// Index of the centre replica in the row-major 3x3 grid.
pub const CENTER_REPLICA: usize = 4;

// Item seeding
/// Number of base items generated at startup.
pub const ITEM_COUNT: usize = 350;
/// Lower bound of the random size multiplier applied to catalog sizes.
pub const MIN_SCALE: f32 = 1.2;
/// Width of the random size multiplier range (scale is in `MIN_SCALE..MIN_SCALE + SCALE_SPREAD`).
pub const SCALE_SPREAD: f32 = 2.0;

// Z-order layers
/// Rank of the hovered replica.
pub const Z_HOVERED: u8 = 100;
/// Rank of replicas in the front set.
pub const Z_FRONT: u8 = 50;
/// Rank of every other replica.
pub const Z_BASE: u8 = 10;

// Momentum
/// Fraction of glide velocity kept after one second.
pub const MOMENTUM_DECAY_PER_SECOND: f32 = 0.02;
/// Glide stops once speed (points per second) drops below this.
pub const MOMENTUM_MIN_SPEED: f32 = 20.0;
/// Upper bound for a single frame's time step when integrating a glide.
pub const MOMENTUM_MAX_DT: f32 = 0.05;
/// A release this long (seconds) after the last drag sample does not glide.
pub const MOMENTUM_RELEASE_WINDOW: f64 = 0.1;

// Item drawing
/// Corner radius of item frames (in screen pixels).
pub const ITEM_CORNER_RADIUS: f32 = 8.0;
/// Border width of item frames (in screen pixels).
pub const ITEM_BORDER_WIDTH: f32 = 4.0;
/// Height of the darkening gradient at the top of each item.
pub const ITEM_TOP_SHADE_HEIGHT: f32 = 40.0;
/// Width of the selection ring drawn around selected replicas.
pub const SELECTION_RING_WIDTH: f32 = 2.0;
/// Blur extent of the drop shadow under the hovered replica.
pub const HOVER_SHADOW_BLUR: u8 = 24;

// Background
/// Spacing between background dots (in screen pixels).
pub const DOT_SPACING: f32 = 20.0;
/// Radius of background dots (in screen pixels).
pub const DOT_RADIUS: f32 = 1.0;

// Dialog
/// Height of the image preview inside the detail dialog.
pub const DIALOG_PREVIEW_HEIGHT: f32 = 256.0;
/// Fixed width of the detail dialog.
pub const DIALOG_WIDTH: f32 = 420.0;
