// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nearest-point resolution.

use crate::geometry::{SnapContainer, center_of, viewport_center};
use crate::index::SnapPoint;

/// Index of the snap point whose vertical center is closest to the viewport center.
///
/// Points without geometry are skipped. On exact ties the earlier index wins.
/// Returns `None` if `points` is empty or no point currently has geometry.
#[must_use]
pub fn nearest_point<K, R, C>(points: &[SnapPoint<K, R>], container: &C) -> Option<usize>
where
    C: SnapContainer<K> + ?Sized,
{
    let middle = viewport_center(container);

    let mut best: Option<usize> = None;
    let mut min_diff = f64::INFINITY;

    for (i, point) in points.iter().enumerate() {
        let Some(center) = center_of(container, &point.id) else {
            continue;
        };
        let diff = (center - middle).abs();
        if diff < min_diff {
            min_diff = diff;
            best = Some(i);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use kurbo::Rect;

    /// Points stacked in content space, viewed through a 400-high window.
    struct Column {
        scroll: f64,
        rects: Vec<Option<Rect>>,
    }

    impl SnapContainer<usize> for Column {
        fn viewport_extent(&self) -> f64 {
            400.0
        }
        fn scroll_extent(&self) -> f64 {
            2000.0
        }
        fn scroll_offset(&self) -> f64 {
            self.scroll
        }
        fn bounds_of(&self, id: &usize) -> Option<Rect> {
            self.rects
                .get(*id)
                .copied()
                .flatten()
                .map(|r| r - kurbo::Vec2::new(0.0, self.scroll))
        }
    }

    fn points(n: usize) -> Vec<SnapPoint<usize>> {
        (0..n).map(SnapPoint::new).collect()
    }

    #[test]
    fn picks_point_closest_to_viewport_center() {
        let column = Column {
            scroll: 0.0,
            rects: vec![
                Some(Rect::new(0.0, 0.0, 10.0, 100.0)),
                Some(Rect::new(0.0, 150.0, 10.0, 250.0)),
                Some(Rect::new(0.0, 500.0, 10.0, 600.0)),
            ],
        };
        assert_eq!(nearest_point(&points(3), &column), Some(1));

        let column = Column {
            scroll: 400.0,
            ..column
        };
        assert_eq!(nearest_point(&points(3), &column), Some(2));
    }

    #[test]
    fn ties_keep_the_earlier_point() {
        let column = Column {
            scroll: 0.0,
            rects: vec![
                Some(Rect::new(0.0, 100.0, 10.0, 200.0)),
                Some(Rect::new(0.0, 200.0, 10.0, 300.0)),
            ],
        };
        // Both centers are 50 away from 200.
        assert_eq!(nearest_point(&points(2), &column), Some(0));
    }

    #[test]
    fn skips_points_without_geometry() {
        let column = Column {
            scroll: 0.0,
            rects: vec![
                None,
                Some(Rect::new(0.0, f64::NAN, 10.0, 10.0)),
                Some(Rect::new(0.0, 900.0, 10.0, 1000.0)),
            ],
        };
        assert_eq!(nearest_point(&points(3), &column), Some(2));
    }

    #[test]
    fn empty_or_unmeasurable_sets_have_no_nearest_point() {
        let column = Column {
            scroll: 0.0,
            rects: vec![None, None],
        };
        assert_eq!(nearest_point(&points(0), &column), None);
        assert_eq!(nearest_point(&points(2), &column), None);
    }
}
