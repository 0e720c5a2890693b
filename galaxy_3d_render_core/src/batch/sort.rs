/// Ready-made comparators for `BatchAccumulator::with_sort`.
///
/// Comparators must be total orders: `slice::sort_by` may panic otherwise.
/// Nested accumulators carry no key of their own, so these comparators
/// keep them after every leaf, in commit order.

use std::cmp::Ordering;
use super::render_batch::BatchEntry;

/// Group leaves by render mode to minimize state changes.
pub fn by_render_mode(a: &BatchEntry, b: &BatchEntry) -> Ordering {
    match (a.as_batch(), b.as_batch()) {
        (Some(a), Some(b)) => a.render_mode().cmp(&b.render_mode()),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Farthest leaves first, for blended passes.
pub fn back_to_front(a: &BatchEntry, b: &BatchEntry) -> Ordering {
    match (a.as_batch(), b.as_batch()) {
        (Some(a), Some(b)) => b.sort_depth().total_cmp(&a.sort_depth()),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Nearest leaves first, for early depth rejection in opaque passes.
pub fn front_to_back(a: &BatchEntry, b: &BatchEntry) -> Ordering {
    match (a.as_batch(), b.as_batch()) {
        (Some(a), Some(b)) => a.sort_depth().total_cmp(&b.sort_depth()),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
