//! The pannable, wrapping plane.
//!
//! A finite set of base items lives inside one square tile of side `S`. The
//! plane keeps a single pan offset, lets drags move it freely, and folds it
//! back into `[-P, 0)` when a drag ends, where `P = S + gap` is the distance
//! between neighbouring replicas. Nine copies of the tile are drawn around the
//! offset, so whatever leaves one edge of the view is already present at the
//! opposite edge and the wrap is invisible.

use crate::constants::REPLICA_COUNT;
use crate::interaction::{InteractionState, ReplicaKey};
use crate::momentum::{GlideStep, Momentum};
use crate::types::{Item, ItemId};
use crate::CanvasConfig;
use eframe::egui;
use std::collections::HashMap;

/// Folds `value` into the half-open range `[-period, 0)`.
///
/// Uses Euclidean remainder, so negative inputs wrap the same way as positive
/// ones. Values already in range are returned untouched. Non-finite input
/// yields `-period / 2`.
pub fn wrap_axis(value: f32, period: f32) -> f32 {
    if !value.is_finite() {
        return -period * 0.5;
    }
    if (-period..0.0).contains(&value) {
        return value;
    }
    let r = value.rem_euclid(period);
    // rem_euclid may round up to `period` for tiny negative inputs
    if r <= 0.0 || r >= period {
        -period
    } else {
        r - period
    }
}

/// Displacements of the nine tile replicas, row-major (top row first).
pub fn replica_displacements(tile_size: f32, gap: f32) -> [egui::Vec2; REPLICA_COUNT] {
    let step = tile_size + gap;
    let mut out = [egui::Vec2::ZERO; REPLICA_COUNT];
    for (i, slot) in out.iter_mut().enumerate() {
        let col = (i % 3) as f32 - 1.0;
        let row = (i / 3) as f32 - 1.0;
        *slot = egui::vec2(col * step, row * step);
    }
    out
}

/// Where one tile replica is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePlacement {
    /// Replica index, `0..9`
    pub replica: usize,
    /// Tile origin in plane space (offset plus the replica's displacement)
    pub origin: egui::Vec2,
}

/// One replica of one item, positioned in plane space.
#[derive(Debug, Clone, Copy)]
pub struct PlacedReplica<'a> {
    /// Interaction key of this replica
    pub key: ReplicaKey,
    /// The base item
    pub item: &'a Item,
    /// Origin of the tile replica this copy belongs to
    pub origin: egui::Vec2,
    /// Bounds in plane space
    pub rect: egui::Rect,
    /// Z rank at the time of placement
    pub rank: u8,
}

impl PlacedReplica<'_> {
    /// Half-open containment test for a plane-space point.
    pub fn contains(&self, point: egui::Pos2) -> bool {
        let local = point - self.origin;
        self.item.contains((local.x, local.y))
    }
}

/// The infinite canvas model: offset, base items, and interaction state.
///
/// Plane space has its origin at the top-left of the viewport; screen
/// positions are obtained by adding the canvas rect's origin.
pub struct PannableWrapPlane {
    tile_size: f32,
    gap: f32,
    offset: egui::Vec2,
    items: Vec<Item>,
    index: HashMap<ItemId, usize>,
    interaction: InteractionState,
    momentum: Momentum,
}

impl PannableWrapPlane {
    /// Creates a plane over `items` with the offset centred on the tile.
    ///
    /// # Arguments
    ///
    /// * `tile_size` - Tile side `S` (must be positive)
    /// * `gap` - Spacing added between replicas; the wrap period is `S + gap`
    /// * `items` - The base items, in tile-local coordinates
    pub fn new(tile_size: f32, gap: f32, items: Vec<Item>) -> Self {
        let index = items
            .iter()
            .enumerate()
            .map(|(i, item)| (item.id, i))
            .collect();
        Self {
            tile_size,
            gap,
            offset: egui::Vec2::splat(-0.5 * tile_size),
            items,
            index,
            interaction: InteractionState::new(),
            momentum: Momentum::new(),
        }
    }

    /// Builds a plane with freshly generated items as described by `config`.
    pub fn from_config(config: &CanvasConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        let items = crate::generate_items(&mut rng, config.item_count, config.region);
        log::info!(
            "Generated {} items on a {} x {} tile",
            items.len(),
            config.tile_size,
            config.tile_size
        );
        Self::new(config.tile_size, config.gap, items)
    }

    /// Distance between neighbouring replicas, which is the wrap period.
    pub fn period(&self) -> f32 {
        self.tile_size + self.gap
    }

    /// The live offset.
    pub fn offset(&self) -> egui::Vec2 {
        self.offset
    }

    /// Overrides the live offset without wrapping.
    pub fn set_offset(&mut self, offset: egui::Vec2) {
        self.offset = offset;
    }

    /// The base items.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Looks up a base item by id.
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.index.get(&id).map(|&i| &self.items[i])
    }

    /// Selection, hover and dialog state.
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    /// Applies one drag delta to the live offset. No wrapping happens here.
    pub fn on_drag_delta(&mut self, dx: f32, dy: f32) {
        self.offset += egui::vec2(dx, dy);
    }

    /// Folds the offset into `[-P, 0)` on both axes, `P` being [`Self::period`].
    /// With no gap this is `[-S, 0)`.
    pub fn on_drag_end(&mut self) {
        let period = self.period();
        let wrapped = egui::vec2(
            wrap_axis(self.offset.x, period),
            wrap_axis(self.offset.y, period),
        );
        if wrapped != self.offset {
            log::debug!("Wrapped offset {:?} -> {:?}", self.offset, wrapped);
        }
        self.offset = wrapped;
    }

    /// Starts a drag gesture, cancelling any glide still running.
    pub fn begin_drag(&mut self) {
        self.momentum.stop();
    }

    /// Applies a drag delta and feeds the velocity tracker.
    ///
    /// `dt` is the frame time and `now` the input time, both in seconds.
    pub fn drag(&mut self, delta: egui::Vec2, dt: f32, now: f64) {
        self.on_drag_delta(delta.x, delta.y);
        self.momentum.track(delta, dt, now);
    }

    /// Ends a drag gesture: wraps the offset and, if `momentum` is set and the
    /// release was fast enough, starts a glide. Returns true if gliding.
    pub fn release_drag(&mut self, momentum: bool, now: f64) -> bool {
        self.on_drag_end();
        if momentum {
            self.momentum.release(now)
        } else {
            self.momentum.stop();
            false
        }
    }

    /// Advances an active glide by `dt` seconds. The glide counts as part of the
    /// gesture, so the offset is wrapped again once it comes to rest.
    /// Returns true while the glide is still moving.
    pub fn advance_glide(&mut self, dt: f32) -> bool {
        match self.momentum.step(dt) {
            GlideStep::Idle => false,
            GlideStep::Moved(delta) => {
                self.on_drag_delta(delta.x, delta.y);
                true
            }
            GlideStep::Finished(delta) => {
                self.on_drag_delta(delta.x, delta.y);
                self.on_drag_end();
                false
            }
        }
    }

    /// Returns true while a released drag is still gliding.
    pub fn is_gliding(&self) -> bool {
        self.momentum.is_gliding()
    }

    /// Puts the offset back at the tile centre and stops any glide.
    pub fn recenter(&mut self) {
        self.momentum.stop();
        self.offset = egui::Vec2::splat(-0.5 * self.tile_size);
    }

    /// The nine tile placements for the current offset, row-major.
    pub fn render_tiles(&self) -> [TilePlacement; REPLICA_COUNT] {
        let displacements = replica_displacements(self.tile_size, self.gap);
        std::array::from_fn(|replica| TilePlacement {
            replica,
            origin: self.offset + displacements[replica],
        })
    }

    /// Activates a replica: selects it, raises it to the front set and opens the
    /// dialog on the base item. Unknown items and out-of-grid replicas are
    /// ignored. Returns true if the activation was applied.
    pub fn on_item_activate(&mut self, item: ItemId, replica: usize) -> bool {
        let key = ReplicaKey::new(item, replica);
        if !key.is_valid() || !self.index.contains_key(&item) {
            log::debug!("Ignoring activation of {item} replica {replica}");
            return false;
        }
        self.interaction.activate(key);
        log::debug!("Activated {item} replica {replica}");
        true
    }

    /// Marks a replica as hovered. Invalid keys clear the hover instead.
    pub fn on_item_hover(&mut self, item: ItemId, replica: usize) {
        let key = ReplicaKey::new(item, replica);
        if key.is_valid() && self.index.contains_key(&item) {
            self.interaction.hover(key);
        } else {
            self.interaction.unhover();
        }
    }

    /// Clears the hovered replica.
    pub fn on_item_unhover(&mut self) {
        self.interaction.unhover();
    }

    /// Dismisses the detail dialog.
    pub fn close_dialog(&mut self) {
        self.interaction.close_dialog();
    }

    /// The item shown in the dialog, if it is open.
    pub fn dialog_item(&self) -> Option<&Item> {
        let dialog = self.interaction.dialog();
        if !dialog.open {
            return None;
        }
        dialog.item.and_then(|id| self.item(id))
    }

    /// Z rank of a replica under the current hover and front set.
    pub fn z_rank(&self, item: ItemId, replica: usize) -> u8 {
        self.interaction.z_rank(ReplicaKey::new(item, replica))
    }

    /// Every replica of every item, in base paint order (tile-major).
    pub fn replicas(&self) -> impl Iterator<Item = PlacedReplica<'_>> + '_ {
        self.render_tiles().into_iter().flat_map(move |tile| {
            self.items.iter().map(move |item| {
                let key = ReplicaKey::new(item.id, tile.replica);
                let min = egui::pos2(
                    tile.origin.x + item.position.0,
                    tile.origin.y + item.position.1,
                );
                PlacedReplica {
                    key,
                    item,
                    origin: tile.origin,
                    rect: egui::Rect::from_min_size(min, egui::vec2(item.size.0, item.size.1)),
                    rank: self.interaction.z_rank(key),
                }
            })
        })
    }

    /// Replicas that intersect `viewport`, sorted back to front.
    pub fn draw_order(&self, viewport: egui::Rect) -> Vec<PlacedReplica<'_>> {
        let mut visible: Vec<_> = self
            .replicas()
            .filter(|r| r.rect.intersects(viewport))
            .collect();
        // Stable sort keeps tile-major order within a layer
        visible.sort_by_key(|r| r.rank);
        visible
    }

    /// The top-most replica containing `point`, using the same ordering as
    /// [`Self::draw_order`].
    pub fn hit_test(&self, point: egui::Pos2) -> Option<ReplicaKey> {
        self.replicas()
            .filter(|r| r.contains(point))
            .max_by_key(|r| r.rank)
            .map(|r| r.key)
    }
}
