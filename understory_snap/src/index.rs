// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered collection of snap points.

use alloc::vec::Vec;
use core::cmp::Ordering;

/// A single snap target.
///
/// `SnapPoint` pairs the host's identifier for a marked element with the
/// optional rank taken from its marker value. Geometry is not stored here; it
/// is queried from the [`SnapContainer`](crate::SnapContainer) by `id`.
#[derive(Clone, Debug, PartialEq)]
pub struct SnapPoint<K, R = i32> {
    /// Identifier for the marked element.
    pub id: K,
    /// Explicit ordering key, consulted only when the index is built unordered.
    pub rank: Option<R>,
}

impl<K, R> SnapPoint<K, R> {
    /// Creates a snap point without a rank.
    #[must_use]
    pub const fn new(id: K) -> Self {
        Self { id, rank: None }
    }

    /// Creates a snap point with an explicit rank.
    #[must_use]
    pub const fn ranked(id: K, rank: R) -> Self {
        Self {
            id,
            rank: Some(rank),
        }
    }
}

/// Ordered, read-only sequence of [`SnapPoint`]s.
///
/// The order is fixed at construction: either the order in which the host
/// discovered the points, or ascending rank.
#[derive(Clone, Debug)]
pub struct SnapIndex<K, R = i32> {
    points: Vec<SnapPoint<K, R>>,
}

impl<K, R: PartialOrd> SnapIndex<K, R> {
    /// Builds an index from `points`.
    ///
    /// With `ordered == true` the input order is kept as is. Otherwise points
    /// are stably sorted by [`SnapPoint::rank`]: equal or incomparable ranks
    /// keep their relative input order, and unranked points come first.
    pub fn build(points: impl IntoIterator<Item = SnapPoint<K, R>>, ordered: bool) -> Self {
        let mut points: Vec<_> = points.into_iter().collect();
        if !ordered {
            sort_by_rank(&mut points);
        }
        Self { points }
    }
}

impl<K, R> SnapIndex<K, R> {
    /// Number of snap points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if there are no snap points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The point at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SnapPoint<K, R>> {
        self.points.get(index)
    }

    /// All points in index order.
    #[must_use]
    pub fn as_slice(&self) -> &[SnapPoint<K, R>] {
        &self.points
    }

    /// Iterates over the points in index order.
    pub fn iter(&self) -> core::slice::Iter<'_, SnapPoint<K, R>> {
        self.points.iter()
    }

    /// Position of the point with identifier `id`.
    #[must_use]
    pub fn position(&self, id: &K) -> Option<usize>
    where
        K: PartialEq,
    {
        self.points.iter().position(|p| p.id == *id)
    }
}

impl<'a, K, R> IntoIterator for &'a SnapIndex<K, R> {
    type Item = &'a SnapPoint<K, R>;
    type IntoIter = core::slice::Iter<'a, SnapPoint<K, R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Stable insertion sort by rank.
///
/// `slice::sort_by` may panic on comparators that are not total orders, which
/// `PartialOrd` ranks (for example `f64::NAN`) are not.
fn sort_by_rank<K, R: PartialOrd>(points: &mut [SnapPoint<K, R>]) {
    for i in 1..points.len() {
        let mut j = i;
        while j > 0
            && compare_rank(points[j - 1].rank.as_ref(), points[j].rank.as_ref())
                == Ordering::Greater
        {
            points.swap(j - 1, j);
            j -= 1;
        }
    }
}

fn compare_rank<R: PartialOrd>(a: Option<&R>, b: Option<&R>) -> Ordering {
    if a < b {
        Ordering::Less
    } else if a > b {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn ids<R>(index: &SnapIndex<char, R>) -> Vec<char> {
        index.iter().map(|p| p.id).collect()
    }

    #[test]
    fn ordered_keeps_discovery_order() {
        let index = SnapIndex::build(
            vec![
                SnapPoint::ranked('A', 3),
                SnapPoint::ranked('B', 1),
                SnapPoint::ranked('C', 2),
            ],
            true,
        );
        assert_eq!(ids(&index), vec!['A', 'B', 'C']);
    }

    #[test]
    fn unordered_sorts_by_rank() {
        let index = SnapIndex::build(
            vec![
                SnapPoint::ranked('A', 3),
                SnapPoint::ranked('B', 1),
                SnapPoint::ranked('C', 2),
            ],
            false,
        );
        assert_eq!(ids(&index), vec!['B', 'C', 'A']);
        assert_eq!(index.position(&'A'), Some(2));
    }

    #[test]
    fn equal_and_incomparable_ranks_are_stable() {
        let index = SnapIndex::build(
            vec![
                SnapPoint::ranked('A', 2.0),
                SnapPoint::ranked('B', f64::NAN),
                SnapPoint::ranked('C', 1.0),
                SnapPoint::ranked('D', 2.0),
            ],
            false,
        );
        // NaN compares equal to everything, so it acts as a barrier: C cannot
        // move past B, and D cannot move past B either.
        assert_eq!(ids(&index), vec!['A', 'B', 'C', 'D']);

        let index = SnapIndex::build(
            vec![
                SnapPoint::ranked('A', 2),
                SnapPoint::ranked('B', 1),
                SnapPoint::ranked('C', 2),
                SnapPoint::ranked('D', 1),
            ],
            false,
        );
        assert_eq!(ids(&index), vec!['B', 'D', 'A', 'C']);
    }

    #[test]
    fn unranked_points_sort_first() {
        let index = SnapIndex::build(
            vec![
                SnapPoint::ranked('A', 1),
                SnapPoint::new('B'),
                SnapPoint::new('C'),
            ],
            false,
        );
        assert_eq!(ids(&index), vec!['B', 'C', 'A']);
    }

    #[test]
    fn empty_index() {
        let index: SnapIndex<char> = SnapIndex::build(Vec::new(), false);
        assert!(index.is_empty());
        assert_eq!(index.get(0), None);
    }
}
