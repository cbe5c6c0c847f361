//! Per-replica interaction bookkeeping.
//!
//! Every base item is drawn nine times, and each copy can be hovered and
//! clicked on its own. State is therefore keyed by [`ReplicaKey`] rather than
//! by item alone. This module also owns the detail dialog state and the
//! z-order policy: hovered above front set above everything else.

use crate::constants::{REPLICA_COUNT, Z_BASE, Z_FRONT, Z_HOVERED};
use crate::types::ItemId;
use std::collections::HashSet;

/// Identifies one on-screen copy of a base item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReplicaKey {
    /// The base item
    pub item: ItemId,
    /// Index into the 3x3 replica grid, row-major, `0..9`
    pub replica: usize,
}

impl ReplicaKey {
    /// Creates a key for `item` drawn in tile `replica`.
    pub fn new(item: ItemId, replica: usize) -> Self {
        Self { item, replica }
    }

    /// Returns true if the replica index addresses one of the nine tiles.
    pub fn is_valid(&self) -> bool {
        self.replica < REPLICA_COUNT
    }
}

/// The layer a replica is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReplicaLayer {
    /// Never activated and not hovered
    Base,
    /// Activated at least once
    Front,
    /// Currently under the pointer
    Hovered,
}

impl ReplicaLayer {
    /// Numeric z rank; larger values are drawn later.
    pub fn rank(&self) -> u8 {
        match self {
            ReplicaLayer::Base => Z_BASE,
            ReplicaLayer::Front => Z_FRONT,
            ReplicaLayer::Hovered => Z_HOVERED,
        }
    }
}

/// State of the item detail dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogState {
    /// Whether the dialog is shown
    pub open: bool,
    /// Base item the dialog describes
    pub item: Option<ItemId>,
}

/// Selection, hover and front-set state for all replicas.
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    selected: Option<ReplicaKey>,
    hovered: Option<ReplicaKey>,
    front: HashSet<ReplicaKey>,
    dialog: DialogState,
}

impl InteractionState {
    /// Creates an empty interaction state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `key`, raises it into the front set and opens the dialog on its item.
    pub fn activate(&mut self, key: ReplicaKey) {
        self.selected = Some(key);
        if self.front.insert(key) {
            log::debug!("{} (replica {}) raised to front", key.item, key.replica);
        }
        self.dialog = DialogState {
            open: true,
            item: Some(key.item),
        };
    }

    /// Marks `key` as the single hovered replica.
    pub fn hover(&mut self, key: ReplicaKey) {
        self.hovered = Some(key);
    }

    /// Clears the hovered replica.
    pub fn unhover(&mut self) {
        self.hovered = None;
    }

    /// Closes the dialog and forgets its item.
    pub fn close_dialog(&mut self) {
        self.dialog = DialogState::default();
    }

    /// The currently selected replica, if any.
    pub fn selected(&self) -> Option<ReplicaKey> {
        self.selected
    }

    /// The currently hovered replica, if any.
    pub fn hovered(&self) -> Option<ReplicaKey> {
        self.hovered
    }

    /// Returns true if `key` was ever activated.
    pub fn is_front(&self, key: ReplicaKey) -> bool {
        self.front.contains(&key)
    }

    /// Number of replicas in the front set.
    pub fn front_len(&self) -> usize {
        self.front.len()
    }

    /// The dialog state.
    pub fn dialog(&self) -> &DialogState {
        &self.dialog
    }

    /// Layer `key` is drawn on. Hover wins over front-set membership.
    pub fn layer(&self, key: ReplicaKey) -> ReplicaLayer {
        if self.hovered == Some(key) {
            ReplicaLayer::Hovered
        } else if self.front.contains(&key) {
            ReplicaLayer::Front
        } else {
            ReplicaLayer::Base
        }
    }

    /// Z rank of `key`.
    pub fn z_rank(&self, key: ReplicaKey) -> u8 {
        self.layer(key).rank()
    }
}
