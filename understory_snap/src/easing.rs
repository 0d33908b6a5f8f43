// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built-in easing curves.
//!
//! Animators are free to bring their own easing registry (see
//! [`ScrollAnimator::resolve_easing`](crate::ScrollAnimator::resolve_easing)).
//! [`Easing`] covers the two curves every registry is expected to know,
//! `"linear"` and `"swing"`, and is a ready-made registry for animators that
//! need nothing more.

use core::f64::consts::PI;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Name of the default easing curve.
pub const DEFAULT_EASING: &str = "swing";

/// A named easing curve.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Slow at both ends: `0.5 - cos(t·π) / 2`.
    #[default]
    Swing,
}

impl Easing {
    /// Looks up a curve by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "linear" => Some(Self::Linear),
            "swing" => Some(Self::Swing),
            _ => None,
        }
    }

    /// The registry name of this curve.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Swing => "swing",
        }
    }

    /// Eased progress for linear progress `t`, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn sample(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Swing => 0.5 - (t * PI).cos() / 2.0,
        }
    }

    /// Interpolates between `from` and `to` at linear progress `t`.
    #[must_use]
    pub fn interpolate(self, from: f64, to: f64, t: f64) -> f64 {
        from + (to - from) * self.sample(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_the_registry() {
        for easing in [Easing::Linear, Easing::Swing] {
            assert_eq!(Easing::from_name(easing.name()), Some(easing));
        }
        assert_eq!(Easing::from_name(DEFAULT_EASING), Some(Easing::default()));
        assert_eq!(Easing::from_name("easeOutBounce"), None);
    }

    #[test]
    fn curves_hit_their_endpoints() {
        for easing in [Easing::Linear, Easing::Swing] {
            assert!(easing.sample(0.0).abs() < 1e-12);
            assert!((easing.sample(1.0) - 1.0).abs() < 1e-12);
            assert!((easing.sample(0.5) - 0.5).abs() < 1e-12);
        }
        // Swing starts slower than linear.
        assert!(Easing::Swing.sample(0.1) < Easing::Linear.sample(0.1));
        assert_eq!(Easing::Linear.interpolate(100.0, 300.0, 2.0), 300.0);
    }
}
