//! Nearest-object queries over a zone's catalog.
//!
//! Distances are measured on the horizontal plane only; elevation never
//! disqualifies an object. Per-category object counts are small, so a linear
//! scan is the baseline here.

use crate::model::{Category, Vec3, Zone};

/// Horizontal-plane Euclidean distance.
pub fn distance2d(a: Vec3, b: Vec3) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Position of the nearest object of `category` in `zone`, or `None` when
/// the category is unknown or has no objects - callers treat both the same.
///
/// Ties keep the first object in storage order, so results are deterministic
/// for a given data load.
pub fn nearest(zone: &Zone, category: &Category, origin: Vec3) -> Option<Vec3> {
    let mut best: Option<(f64, Vec3)> = None;
    for object in zone.of_category(category) {
        let distance = distance2d(origin, object.position);
        match best {
            Some((shortest, _)) if distance >= shortest => {}
            _ => best = Some((distance, object.position)),
        }
    }
    best.map(|(_, position)| position)
}
