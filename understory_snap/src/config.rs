// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller configuration, per-call overrides, and leave decisions.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;
use core::time::Duration;

use crate::easing::DEFAULT_EASING;

/// Default animation duration.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(600);

/// Callback invoked before a transition starts, with `(current, target)`.
pub type LeaveCallback = Box<dyn FnMut(Option<usize>, usize) -> LeaveDecision>;

/// Callback invoked after a transition completes, with `(previous, current)`.
pub type ArriveCallback = Box<dyn FnMut(Option<usize>, usize)>;

/// One-shot leave callback supplied with a single scroll request.
pub type LeaveOnce = Box<dyn FnOnce(Option<usize>, usize) -> LeaveDecision>;

/// One-shot arrive callback supplied with a single scroll request.
pub type ArriveOnce = Box<dyn FnOnce(Option<usize>, usize)>;

/// What a leave callback wants to happen to the pending transition.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LeaveDecision {
    /// Start the transition as configured.
    #[default]
    Proceed,
    /// Start the transition with these options layered on top.
    ///
    /// Adjustments take precedence over both the base configuration and any
    /// per-call overrides.
    Adjust(TransitionOptions),
    /// Do not scroll.
    Cancel,
}

/// Animation parameters that can be overridden for a single transition.
///
/// `None` fields defer to the layer below.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionOptions {
    /// Animation duration.
    pub duration: Option<Duration>,
    /// Easing curve name, resolved by the animator.
    pub easing: Option<Cow<'static, str>>,
}

impl TransitionOptions {
    /// Layers `over` on top of `self`; fields set in `over` win.
    #[must_use]
    pub fn merged(self, over: Self) -> Self {
        Self {
            duration: over.duration.or(self.duration),
            easing: over.easing.or(self.easing),
        }
    }
}

/// Resolved configuration for a [`SnapScroll`](crate::SnapScroll) controller.
///
/// Build it with struct update syntax over [`SnapConfig::default`]:
///
/// ```rust
/// use core::time::Duration;
/// use understory_snap::{LeaveDecision, SnapConfig};
///
/// let config = SnapConfig {
///     arrow_keys: true,
///     duration: Duration::from_millis(400),
///     ..SnapConfig::default()
/// }
/// .with_on_leave(|_current, target| {
///     if target == 3 {
///         LeaveDecision::Cancel
///     } else {
///         LeaveDecision::Proceed
///     }
/// });
/// assert_eq!(config.easing, "swing");
/// ```
pub struct SnapConfig {
    /// Whether up/down arrow keys navigate between points.
    pub arrow_keys: bool,
    /// Animation duration.
    pub duration: Duration,
    /// Easing curve name. Must be known to the animator.
    pub easing: Cow<'static, str>,
    /// Keep discovery order (`true`) or sort points by rank (`false`).
    pub ordered: bool,
    /// Whether the container shows its native scroll bar.
    pub scroll_bar: bool,
    /// Called before every transition; may cancel or adjust it.
    pub on_leave: LeaveCallback,
    /// Called after every completed transition.
    pub on_arrive: ArriveCallback,
}

impl SnapConfig {
    /// Replaces the leave callback.
    #[must_use]
    pub fn with_on_leave(
        mut self,
        on_leave: impl FnMut(Option<usize>, usize) -> LeaveDecision + 'static,
    ) -> Self {
        self.on_leave = Box::new(on_leave);
        self
    }

    /// Replaces the arrive callback.
    #[must_use]
    pub fn with_on_arrive(mut self, on_arrive: impl FnMut(Option<usize>, usize) + 'static) -> Self {
        self.on_arrive = Box::new(on_arrive);
        self
    }

    /// The base layer that per-call overrides are merged onto.
    pub(crate) fn base_options(&self) -> TransitionOptions {
        TransitionOptions {
            duration: Some(self.duration),
            easing: Some(self.easing.clone()),
        }
    }
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            arrow_keys: false,
            duration: DEFAULT_DURATION,
            easing: Cow::Borrowed(DEFAULT_EASING),
            ordered: true,
            scroll_bar: true,
            on_leave: Box::new(|_, _| LeaveDecision::Proceed),
            on_arrive: Box::new(|_, _| {}),
        }
    }
}

impl fmt::Debug for SnapConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapConfig")
            .field("arrow_keys", &self.arrow_keys)
            .field("duration", &self.duration)
            .field("easing", &self.easing)
            .field("ordered", &self.ordered)
            .field("scroll_bar", &self.scroll_bar)
            .finish_non_exhaustive()
    }
}

/// Overrides for a single [`scroll_to_point_with`](crate::SnapScroll::scroll_to_point_with) call.
///
/// Nothing here is persisted into the controller's [`SnapConfig`].
#[derive(Default)]
pub struct ScrollOverrides {
    /// Animation parameters layered over the configuration.
    pub options: TransitionOptions,
    /// Used instead of [`SnapConfig::on_leave`] for this call.
    pub on_leave: Option<LeaveOnce>,
    /// Used instead of [`SnapConfig::on_arrive`] when this transition completes.
    pub on_arrive: Option<ArriveOnce>,
}

impl ScrollOverrides {
    /// Overrides the animation duration.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.options.duration = Some(duration);
        self
    }

    /// Overrides the easing curve name.
    #[must_use]
    pub fn easing(mut self, easing: impl Into<Cow<'static, str>>) -> Self {
        self.options.easing = Some(easing.into());
        self
    }

    /// Overrides the leave callback.
    #[must_use]
    pub fn on_leave(
        mut self,
        on_leave: impl FnOnce(Option<usize>, usize) -> LeaveDecision + 'static,
    ) -> Self {
        self.on_leave = Some(Box::new(on_leave));
        self
    }

    /// Overrides the arrive callback.
    #[must_use]
    pub fn on_arrive(mut self, on_arrive: impl FnOnce(Option<usize>, usize) + 'static) -> Self {
        self.on_arrive = Some(Box::new(on_arrive));
        self
    }
}

impl fmt::Debug for ScrollOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollOverrides")
            .field("options", &self.options)
            .field("on_leave", &self.on_leave.is_some())
            .field("on_arrive", &self.on_arrive.is_some())
            .finish()
    }
}

/// Errors raised while constructing a controller.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The configured easing name is not known to the animator.
    #[error("unknown easing `{name}`")]
    UnknownEasing {
        /// The name that failed to resolve.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = SnapConfig::default();
        assert!(!config.arrow_keys);
        assert_eq!(config.duration, Duration::from_millis(600));
        assert_eq!(config.easing, "swing");
        assert!(config.ordered);
        assert!(config.scroll_bar);
    }

    #[test]
    fn later_layers_win_when_merging() {
        let base = TransitionOptions {
            duration: Some(Duration::from_millis(600)),
            easing: Some("swing".into()),
        };
        let call = TransitionOptions {
            duration: Some(Duration::from_millis(100)),
            easing: None,
        };
        let leave = TransitionOptions {
            duration: None,
            easing: Some("linear".into()),
        };
        let merged = base.merged(call).merged(leave);
        assert_eq!(merged.duration, Some(Duration::from_millis(100)));
        assert_eq!(merged.easing.as_deref(), Some("linear"));
    }

    #[test]
    fn overrides_builder_sets_fields() {
        let overrides = ScrollOverrides::default()
            .duration(Duration::from_millis(50))
            .easing("linear")
            .on_arrive(|_, _| {});
        assert_eq!(overrides.options.duration, Some(Duration::from_millis(50)));
        assert_eq!(overrides.options.easing.as_deref(), Some("linear"));
        assert!(overrides.on_leave.is_none());
        assert!(overrides.on_arrive.is_some());
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::UnknownEasing {
            name: "bounce".into(),
        };
        assert_eq!(alloc::format!("{err}"), "unknown easing `bounce`");
    }
}
