// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry probe: vertical centers of snap points and of the viewport.
//!
//! All values live in the viewport coordinate space of the container: `0.0` is
//! the top edge of the visible area and `viewport_extent()` its bottom edge.

use kurbo::Rect;

/// A scrollable container that hosts snap points.
///
/// The container is the only source of geometry. Snap points are referred to
/// by a host-chosen identifier `K`, and their bounds are queried on demand so
/// that they always reflect the current scroll offset.
pub trait SnapContainer<K> {
    /// Visible height of the container.
    fn viewport_extent(&self) -> f64;

    /// Total scrollable height of the content.
    ///
    /// A window-level container should report the document's scroll height
    /// here rather than the height of the window itself.
    fn scroll_extent(&self) -> f64;

    /// Current vertical scroll offset.
    fn scroll_offset(&self) -> f64;

    /// Bounds of the snap point `id` in viewport coordinates.
    ///
    /// Returns `None` when the point is detached, hidden, or otherwise has no
    /// layout. Such points are skipped by the nearest-point search.
    fn bounds_of(&self, id: &K) -> Option<Rect>;

    /// Shows or hides the container's native scroll bar.
    ///
    /// Called once during [`SnapScroll::init`](crate::SnapScroll::init). The
    /// default implementation does nothing.
    fn set_scroll_bar_visible(&mut self, _visible: bool) {}
}

/// Vertical center of `bounds`, or `None` if it is not a finite number.
#[must_use]
pub fn point_center(bounds: Rect) -> Option<f64> {
    let center = (bounds.y0 + bounds.y1) / 2.0;
    center.is_finite().then_some(center)
}

/// Half of the container's visible height.
#[must_use]
pub fn viewport_center<K, C>(container: &C) -> f64
where
    C: SnapContainer<K> + ?Sized,
{
    container.viewport_extent() / 2.0
}

/// Vertical center of the snap point `id`, if it currently has geometry.
#[must_use]
pub fn center_of<K, C>(container: &C, id: &K) -> Option<f64>
where
    C: SnapContainer<K> + ?Sized,
{
    container.bounds_of(id).and_then(point_center)
}
