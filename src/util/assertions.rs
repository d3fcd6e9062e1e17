use crate::cspace::{ObstacleCollection, ObstacleKind};
use log::error;

/// Checks that every flattened index resolves, that the kinds appear in fixed bucket
/// order and that local indices run sequentially within each bucket.
pub fn collection_indices_resolvable(collection: &ObstacleCollection) -> bool {
    let mut expected = vec![];
    for kind in [
        ObstacleKind::Rect,
        ObstacleKind::OrientedRect,
        ObstacleKind::Triangle,
        ObstacleKind::Circle,
    ] {
        let len = match kind {
            ObstacleKind::Rect => collection.rects().len(),
            ObstacleKind::OrientedRect => collection.boxes().len(),
            ObstacleKind::Triangle => collection.triangles().len(),
            ObstacleKind::Circle => collection.circles().len(),
        };
        expected.extend((0..len).map(|i| (kind, i)));
    }

    if expected.len() != collection.num_obstacles() {
        error!("num_obstacles does not match the sum of the buckets");
        return false;
    }
    for (index, &(kind, local)) in expected.iter().enumerate() {
        if collection.resolve(index) != (kind, local) {
            error!("flattened index {index} resolved inconsistently");
            return false;
        }
    }
    true
}
