// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The snap-scroll controller.

use core::fmt;

use tracing::{debug, trace, warn};

use crate::config::{ConfigError, LeaveDecision, ScrollOverrides, SnapConfig};
use crate::geometry::SnapContainer;
use crate::index::{SnapIndex, SnapPoint};
use crate::input::{Direction, InputEvent, InputNormalizer, ListenerHost};
use crate::resolve::nearest_point;
use crate::target::target_offset;
use crate::transition::{
    ScrollAnimation, ScrollAnimator, ScrollOutcome, TransitionTicket, Transitions,
};

/// What happened in response to one input event.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputResponse {
    /// Intent the event was normalized into.
    pub direction: Option<Direction>,
    /// Result of acting on that intent.
    pub outcome: Option<ScrollOutcome>,
    /// Whether the host should suppress the event's default action.
    pub prevent_default: bool,
}

/// Scroll-snapping controller for one container.
///
/// Owns the container, the animator, the ordered snap points, the resolved
/// configuration, and the single-flight transition state. Independent
/// controllers share nothing.
pub struct SnapScroll<K, C, A, R = i32>
where
    A: ScrollAnimator,
{
    container: C,
    animator: A,
    points: SnapIndex<K, R>,
    config: SnapConfig,
    easing: A::Easing,
    transitions: Transitions,
    input: InputNormalizer,
}

impl<K, C, A, R> SnapScroll<K, C, A, R>
where
    C: SnapContainer<K>,
    A: ScrollAnimator,
    R: PartialOrd,
{
    /// Creates a controller without registering input listeners.
    ///
    /// Resolves the configured easing first: an unknown name fails before the
    /// container is touched. On success the points are indexed (in discovery
    /// or rank order per [`SnapConfig::ordered`]) and the scroll bar visibility
    /// is applied.
    pub fn new(
        mut container: C,
        points: impl IntoIterator<Item = SnapPoint<K, R>>,
        animator: A,
        config: SnapConfig,
    ) -> Result<Self, ConfigError> {
        let easing =
            animator
                .resolve_easing(&config.easing)
                .ok_or_else(|| ConfigError::UnknownEasing {
                    name: config.easing.clone().into_owned(),
                })?;
        let points = SnapIndex::build(points, config.ordered);
        container.set_scroll_bar_visible(config.scroll_bar);
        debug!(
            points = points.len(),
            ordered = config.ordered,
            easing = %config.easing,
            "snap scroll initialized"
        );
        Ok(Self {
            container,
            animator,
            points,
            easing,
            transitions: Transitions::default(),
            input: InputNormalizer::new(config.arrow_keys),
            config,
        })
    }

    /// Creates a controller and registers its input listeners with `host`.
    pub fn init(
        container: C,
        points: impl IntoIterator<Item = SnapPoint<K, R>>,
        animator: A,
        config: SnapConfig,
        host: &mut (impl ListenerHost + ?Sized),
    ) -> Result<Self, ConfigError> {
        let mut this = Self::new(container, points, animator, config)?;
        this.enable(host);
        Ok(this)
    }
}

impl<K, C, A, R> SnapScroll<K, C, A, R>
where
    C: SnapContainer<K>,
    A: ScrollAnimator,
{
    /// Index of the snap point nearest the viewport center.
    #[must_use]
    pub fn current_point(&self) -> Option<usize> {
        nearest_point(self.points.as_slice(), &self.container)
    }

    /// Returns `true` while a transition is in flight.
    #[must_use]
    pub const fn is_scrolling(&self) -> bool {
        self.transitions.is_animating()
    }

    /// Scrolls to the point before the current one.
    pub fn scroll_prev(&mut self) -> ScrollOutcome {
        self.scroll(Direction::Previous)
    }

    /// Scrolls to the point after the current one.
    pub fn scroll_next(&mut self) -> ScrollOutcome {
        self.scroll(Direction::Next)
    }

    /// Scrolls one point in `direction`.
    ///
    /// Stops silently at the first and last points.
    pub fn scroll(&mut self, direction: Direction) -> ScrollOutcome {
        let Some(current) = self.current_point() else {
            return ScrollOutcome::NoSnapPoint;
        };
        let target = match direction {
            Direction::Previous => current.checked_sub(1),
            Direction::Next => Some(current + 1).filter(|&next| next < self.points.len()),
        };
        match target {
            Some(target) => self.scroll_to_point(target),
            None => ScrollOutcome::AtBoundary,
        }
    }

    /// Scrolls to the point at `target` using the configured options.
    pub fn scroll_to_point(&mut self, target: usize) -> ScrollOutcome {
        self.scroll_to_point_with(target, ScrollOverrides::default())
    }

    /// Scrolls to the point at `target`, layering `overrides` over the configuration.
    ///
    /// The leave callback runs before anything is armed, so a cancellation
    /// leaves the controller idle. Scrolling to the current point is allowed.
    pub fn scroll_to_point_with(
        &mut self,
        target: usize,
        overrides: ScrollOverrides,
    ) -> ScrollOutcome {
        if self.transitions.is_animating() {
            trace!(point = target, "scroll request dropped while animating");
            return ScrollOutcome::AlreadyScrolling;
        }
        let Some(point) = self.points.get(target) else {
            return ScrollOutcome::OutOfRange;
        };
        let current = self.current_point();
        let Some(offset) = target_offset(&self.container, &point.id) else {
            debug!(point = target, "snap point has no geometry");
            return ScrollOutcome::Unmeasurable;
        };

        let ScrollOverrides {
            options,
            on_leave,
            on_arrive,
        } = overrides;
        let decision = match on_leave {
            Some(on_leave) => on_leave(current, target),
            None => (self.config.on_leave)(current, target),
        };
        let options = match decision {
            LeaveDecision::Proceed => options,
            LeaveDecision::Adjust(adjust) => options.merged(adjust),
            LeaveDecision::Cancel => {
                debug!(?current, point = target, "transition cancelled by leave callback");
                return ScrollOutcome::Cancelled;
            }
        };
        let options = self.config.base_options().merged(options);
        let duration = options.duration.unwrap_or(self.config.duration);
        let easing = self.resolve_call_easing(options.easing.as_deref());

        let ticket = self.transitions.begin(current, target, on_arrive);
        let from = self.container.scroll_offset();
        debug!(
            ?current,
            point = target,
            from,
            to = offset,
            generation = ticket.generation(),
            "transition started"
        );
        self.animator.animate(ScrollAnimation {
            from,
            to: offset,
            duration,
            easing,
            ticket,
        });
        ScrollOutcome::Started {
            from: current,
            target,
            offset,
        }
    }

    /// Completes the animation identified by `ticket`.
    ///
    /// Releases the scrolling flag, then runs the arrive callback. Returns
    /// `false` and changes nothing if the ticket is not for the animation in
    /// flight.
    pub fn complete(&mut self, ticket: TransitionTicket) -> bool {
        let generation = ticket.generation();
        let Some(flight) = self.transitions.finish(ticket) else {
            warn!(generation, "ignoring completion for a transition not in flight");
            return false;
        };
        debug!(
            from = ?flight.from,
            point = flight.target,
            generation,
            "transition finished"
        );
        match flight.on_arrive {
            Some(on_arrive) => on_arrive(flight.from, flight.target),
            None => (self.config.on_arrive)(flight.from, flight.target),
        }
        true
    }

    /// Feeds one raw input event through the normalizer and acts on it.
    pub fn handle_input(&mut self, event: InputEvent) -> InputResponse {
        let normalized = self.input.normalize(event);
        let outcome = normalized.direction.map(|direction| {
            trace!(?direction, ?event, "input normalized");
            self.scroll(direction)
        });
        InputResponse {
            direction: normalized.direction,
            outcome,
            prevent_default: normalized.prevent_default,
        }
    }

    /// Registers the input listeners with `host`.
    pub fn enable(&mut self, host: &mut (impl ListenerHost + ?Sized)) {
        self.input.enable(host);
    }

    /// Unregisters the input listeners from `host`.
    pub fn disable(&mut self, host: &mut (impl ListenerHost + ?Sized)) {
        self.input.disable(host);
    }

    /// The input normalizer and its registration state.
    #[must_use]
    pub const fn input(&self) -> &InputNormalizer {
        &self.input
    }

    /// The snap points in index order.
    #[must_use]
    pub const fn points(&self) -> &SnapIndex<K, R> {
        &self.points
    }

    /// The resolved configuration.
    #[must_use]
    pub const fn config(&self) -> &SnapConfig {
        &self.config
    }

    /// The container.
    #[must_use]
    pub const fn container(&self) -> &C {
        &self.container
    }

    /// Mutable access to the container, for applying animated scroll offsets.
    pub fn container_mut(&mut self) -> &mut C {
        &mut self.container
    }

    /// The animator.
    #[must_use]
    pub const fn animator(&self) -> &A {
        &self.animator
    }

    /// Mutable access to the animator.
    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }

    fn resolve_call_easing(&self, name: Option<&str>) -> A::Easing {
        match name {
            Some(name) if name != self.config.easing => {
                self.animator.resolve_easing(name).unwrap_or_else(|| {
                    warn!(easing = name, "unknown easing override, using configured easing");
                    self.easing.clone()
                })
            }
            _ => self.easing.clone(),
        }
    }
}

impl<K, C, A, R> fmt::Debug for SnapScroll<K, C, A, R>
where
    K: fmt::Debug,
    R: fmt::Debug,
    C: fmt::Debug,
    A: ScrollAnimator + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapScroll")
            .field("container", &self.container)
            .field("animator", &self.animator)
            .field("points", &self.points)
            .field("config", &self.config)
            .field("easing", &self.easing)
            .field("transitions", &self.transitions)
            .field("input", &self.input)
            .finish()
    }
}
