//! Core data types for the canvas items.
//!
//! This module defines the immutable item records placed on the plane, the
//! catalog they are drawn from, and the random layout used to seed a session.

use crate::constants::{MIN_SCALE, SCALE_SPREAD};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a base item. Displays as `item-<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item-{}", self.0)
    }
}

/// The closed set of item kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// A photo-like item
    Image,
    /// A smaller decorative item
    Icon,
}

impl ItemKind {
    /// Lower-case name shown in the detail dialog.
    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::Image => "image",
            ItemKind::Icon => "icon",
        }
    }
}

/// A single item placed on the plane.
///
/// Items never change after generation; everything interactive lives in
/// [`crate::InteractionState`], keyed per replica.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier for this item
    pub id: ItemId,
    /// Kind of item
    pub kind: ItemKind,
    /// Asset reference resolved by the asset source (e.g. `cabin.jpg`)
    pub source: String,
    /// Top-left position in tile-local coordinates
    pub position: (f32, f32),
    /// Width and height in canvas units
    pub size: (f32, f32),
    /// Display label
    pub label: String,
    /// Optional cosmetic colour tag as a `#rrggbb` string
    #[serde(default)]
    pub color: Option<String>,
}

impl Item {
    /// Returns true if `point` (tile-local) lies inside this item's bounds.
    pub fn contains(&self, point: (f32, f32)) -> bool {
        point.0 >= self.position.0
            && point.0 < self.position.0 + self.size.0
            && point.1 >= self.position.1
            && point.1 < self.position.1 + self.size.1
    }
}

/// A catalog entry used as the template for generated items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemTemplate {
    /// Kind given to items built from this template
    pub kind: ItemKind,
    /// Asset reference
    pub source: &'static str,
    /// Display label
    pub label: &'static str,
    /// Unscaled width
    pub width: f32,
    /// Unscaled height
    pub height: f32,
}

/// The fixed catalog every generated item is drawn from.
pub const CATALOG: [ItemTemplate; 5] = [
    ItemTemplate {
        kind: ItemKind::Image,
        source: "cabin.jpg",
        label: "Cabin",
        width: 140.0,
        height: 100.0,
    },
    ItemTemplate {
        kind: ItemKind::Image,
        source: "chicken.jpg",
        label: "Chicken",
        width: 90.0,
        height: 130.0,
    },
    ItemTemplate {
        kind: ItemKind::Icon,
        source: "china.jpg",
        label: "China",
        width: 120.0,
        height: 200.0,
    },
    ItemTemplate {
        kind: ItemKind::Icon,
        source: "glasses.jpg",
        label: "Glasses",
        width: 100.0,
        height: 130.0,
    },
    ItemTemplate {
        kind: ItemKind::Icon,
        source: "old-guy.jpg",
        label: "Old Guy",
        width: 140.0,
        height: 130.0,
    },
];

/// Generates `count` items placed uniformly in the square `[-region/2, region/2)`
/// on both axes, each sized from a random catalog entry scaled by a factor in
/// `MIN_SCALE..MIN_SCALE + SCALE_SPREAD`.
///
/// # Arguments
///
/// * `rng` - Random source; seed it for a reproducible layout
/// * `count` - Number of items to create
/// * `region` - Side length of the square placement region
pub fn generate_items(rng: &mut fastrand::Rng, count: usize, region: f32) -> Vec<Item> {
    let half = region * 0.5;
    (0..count)
        .map(|i| {
            let template = CATALOG[rng.usize(..CATALOG.len())];
            let scale = MIN_SCALE + rng.f32() * SCALE_SPREAD;
            Item {
                id: ItemId(i as u32),
                kind: template.kind,
                source: template.source.to_string(),
                position: (rng.f32() * region - half, rng.f32() * region - half),
                size: (template.width * scale, template.height * scale),
                label: template.label.to_string(),
                color: None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_id_displays_with_prefix() {
        assert_eq!(ItemId(7).to_string(), "item-7");
    }

    #[test]
    fn generated_items_fit_region_and_catalog() {
        let mut rng = fastrand::Rng::with_seed(42);
        let items = generate_items(&mut rng, 500, 12000.0);
        assert_eq!(items.len(), 500);
        for (i, item) in items.iter().enumerate() {
            assert_eq!(item.id, ItemId(i as u32));
            assert!((-6000.0..6000.0).contains(&item.position.0));
            assert!((-6000.0..6000.0).contains(&item.position.1));

            let template = CATALOG
                .iter()
                .find(|t| t.source == item.source)
                .expect("source comes from the catalog");
            assert_eq!(template.kind, item.kind);
            assert_eq!(template.label, item.label);
            let scale = item.size.0 / template.width;
            assert!(scale >= MIN_SCALE - 1e-4 && scale < MIN_SCALE + SCALE_SPREAD + 1e-4);
            assert!((item.size.1 / template.height - scale).abs() < 1e-3);
        }
    }

    #[test]
    fn same_seed_gives_same_layout() {
        let a = generate_items(&mut fastrand::Rng::with_seed(3), 20, 1000.0);
        let b = generate_items(&mut fastrand::Rng::with_seed(3), 20, 1000.0);
        assert_eq!(a, b);
    }

    #[test]
    fn contains_is_half_open() {
        let item = Item {
            id: ItemId(0),
            kind: ItemKind::Icon,
            source: "china.jpg".into(),
            position: (10.0, 20.0),
            size: (5.0, 5.0),
            label: "China".into(),
            color: None,
        };
        assert!(item.contains((10.0, 20.0)));
        assert!(item.contains((14.9, 24.9)));
        assert!(!item.contains((15.0, 22.0)));
        assert!(!item.contains((12.0, 19.9)));
    }
}
