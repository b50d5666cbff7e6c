//! Perception system - which prey an actor can see

use crate::core::types::Position;
use crate::entity::Located;
use crate::spatial::grid::is_within_sight;

/// Nearest candidate within `radius` of `origin`.
///
/// Ties on squared distance keep the earliest candidate in slice order.
pub fn nearest_visible<T: Located>(origin: Position, radius: u32, candidates: &[T]) -> Option<&T> {
    let mut nearest: Option<(&T, i64)> = None;

    for candidate in candidates {
        let pos = candidate.position();
        if !is_within_sight(origin, pos, radius) {
            continue;
        }

        let dist_sq = origin.distance_sq(&pos);
        match nearest {
            Some((_, best)) if dist_sq >= best => {}
            _ => nearest = Some((candidate, dist_sq)),
        }
    }

    nearest.map(|(candidate, _)| candidate)
}
