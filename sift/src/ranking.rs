//! Ranking order for autocomplete suggestions.
//!
//! Importance always dominates; insertion order only decides between
//! candidates of equal importance, earlier first.

use std::cmp::Reverse;

/// Rank tuple — derived Ord gives lexicographic comparison.
/// All components: higher = better.
///
/// Tuple order (most to least important):
/// 1. importance — caller-supplied weight
/// 2. order — reversed insertion position, so earlier candidates rank higher
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RankKey {
    pub importance: i64,
    pub order: Reverse<usize>,
}

impl RankKey {
    pub fn new(importance: i64, position: usize) -> Self {
        Self {
            importance,
            order: Reverse(position),
        }
    }
}

/// Positions of `keys` sorted best-first.
///
/// Positions are unique, so the order is total and identical to a stable
/// sort by descending importance.
pub fn rank_order(keys: &[RankKey]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..keys.len()).collect();
    order.sort_by(|&a, &b| keys[b].cmp(&keys[a]));
    order
}
