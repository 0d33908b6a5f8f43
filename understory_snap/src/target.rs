// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll target calculation and boundary clamping.

use crate::geometry::{SnapContainer, center_of, viewport_center};

/// Scroll offset that centers the snap point `id`, clamped to the container.
///
/// Returns `None` if the point has no geometry.
#[must_use]
pub fn target_offset<K, C>(container: &C, id: &K) -> Option<f64>
where
    C: SnapContainer<K> + ?Sized,
{
    let center = center_of(container, id)?;
    let raw = container.scroll_offset() + (center - viewport_center(container));
    Some(clamp_offset(
        raw,
        container.viewport_extent(),
        container.scroll_extent(),
    ))
}

/// Clamps a raw scroll offset to the scrollable range.
///
/// The lower bound snaps anything closer to the start than half a viewport to
/// `0`; the upper bound caps at `scroll_extent - viewport_extent`. Points near
/// either edge are therefore left off-center.
#[must_use]
pub fn clamp_offset(raw: f64, viewport_extent: f64, scroll_extent: f64) -> f64 {
    let max_offset = scroll_extent - viewport_extent;
    if raw < viewport_extent / 2.0 {
        0.0
    } else if raw > max_offset {
        max_offset
    } else {
        raw
    }
}
