//! Ranking rubric and bounded top-K selection.

use crate::search::Component;
use serde::Serialize;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

const NO_FEE_POINTS: i32 = 1000;
const SAME_PACKAGE_POINTS: i32 = 20;
const SAME_MANUFACTURER_POINTS: i32 = 10;
const MAX_PRICE_POINTS: i32 = 10;

/// Points per rubric line. `total()` is the ranking score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub fee_tier: i32,
    pub availability: i32,
    pub package: i32,
    pub same_manufacturer: i32,
    pub price: i32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> i32 {
        self.fee_tier + self.availability + self.package + self.same_manufacturer + self.price
    }
}

fn availability(stock: u64) -> i32 {
    match stock {
        10_000.. => 70,
        1_000.. => 50,
        100.. => 30,
        _ => -10,
    }
}

/// Score `candidate` as a replacement for `original`. `cheapest` is the
/// lowest positive price among the candidates being ranked.
pub(crate) fn score(candidate: &Component, original: &Component, cheapest: Option<f64>) -> ScoreBreakdown {
    let price = match (candidate.price, cheapest) {
        (Some(price), Some(cheapest)) if price > 0.0 && cheapest > 0.0 => {
            ((10.0 * cheapest / price).floor() as i32).min(MAX_PRICE_POINTS)
        }
        _ => 0,
    };
    ScoreBreakdown {
        fee_tier: if candidate.fee_tier.is_no_fee() { NO_FEE_POINTS } else { 0 },
        availability: availability(candidate.stock),
        package: if candidate.package == original.package { SAME_PACKAGE_POINTS } else { 0 },
        same_manufacturer: if candidate.manufacturer == original.manufacturer { SAME_MANUFACTURER_POINTS } else { 0 },
        price,
    }
}

/// Lowest positive price, if any part has one.
pub(crate) fn cheapest<'a>(parts: impl IntoIterator<Item = &'a Component>) -> Option<f64> {
    parts.into_iter().filter_map(|c| c.price).filter(|p| *p > 0.0).min_by(f64::total_cmp)
}

/// Heap entry: higher score first, then lower id.
struct Ranked<T> {
    score: i32,
    id: String,
    item: T,
}

impl<T> Ord for Ranked<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score.cmp(&other.score).then_with(|| other.id.cmp(&self.id))
    }
}

impl<T> PartialOrd for Ranked<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> PartialEq for Ranked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Ranked<T> {}

/// The `k` best items, best first; ties go to the lower id.
///
/// Keeps a min-heap of at most `k` entries, so the pool is never sorted as
/// a whole.
pub(crate) fn top_k<T>(items: impl IntoIterator<Item = (i32, String, T)>, k: usize) -> Vec<(i32, T)> {
    if k == 0 {
        return Vec::new();
    }
    let mut heap: BinaryHeap<Reverse<Ranked<T>>> = BinaryHeap::with_capacity(k + 1);
    for (score, id, item) in items {
        heap.push(Reverse(Ranked { score, id, item }));
        if heap.len() > k {
            heap.pop();
        }
    }
    heap.into_sorted_vec().into_iter().map(|Reverse(ranked)| (ranked.score, ranked.item)).collect()
}
