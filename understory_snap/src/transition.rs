// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-flight transition state and the animation seam.
//!
//! A transition moves the container's scroll offset from where it is to the
//! offset that centers a target point. The controller never interpolates by
//! itself: it hands a [`ScrollAnimation`] to a [`ScrollAnimator`] and waits for
//! the host to return the animation's [`TransitionTicket`] through
//! [`SnapScroll::complete`](crate::SnapScroll::complete).
//!
//! ## Lifecycle
//!
//! ```text
//! Idle --scroll_to_point--> (leave callback) --Cancel--> Idle
//!                                 |
//!                                 +--Proceed/Adjust--> Animating --complete(ticket)--> Idle
//! ```
//!
//! Requests made while `Animating` are dropped. Tickets are move-only, so each
//! animation can complete at most once.

use core::fmt;
use core::time::Duration;

use crate::config::ArriveOnce;

/// The external tween engine.
pub trait ScrollAnimator {
    /// Resolved easing curve handle.
    type Easing: Clone + fmt::Debug;

    /// Resolves an easing curve by name, or `None` if it is unknown.
    fn resolve_easing(&self, name: &str) -> Option<Self::Easing>;

    /// Starts animating the container's scroll offset.
    ///
    /// Implementations must eventually pass `animation.ticket` back to
    /// [`SnapScroll::complete`](crate::SnapScroll::complete) exactly once.
    fn animate(&mut self, animation: ScrollAnimation<Self::Easing>);
}

/// A request to animate the scroll offset.
#[derive(Debug)]
pub struct ScrollAnimation<E> {
    /// Scroll offset at the start of the animation.
    pub from: f64,
    /// Scroll offset to reach.
    pub to: f64,
    /// Total animation time.
    pub duration: Duration,
    /// Interpolation curve.
    pub easing: E,
    /// Completion token; hand it back when the animation finishes.
    pub ticket: TransitionTicket,
}

/// Proof that a specific animation is still owed a completion.
///
/// Deliberately neither `Clone` nor `Copy`.
#[derive(Debug, PartialEq, Eq)]
pub struct TransitionTicket {
    generation: u64,
}

impl TransitionTicket {
    pub(crate) const fn new(generation: u64) -> Self {
        Self { generation }
    }

    /// Sequence number of the transition this ticket belongs to.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

/// Result of a scroll request.
#[derive(Clone, Debug, PartialEq)]
pub enum ScrollOutcome {
    /// An animation was handed to the animator.
    Started {
        /// Point that was current when the request was made.
        from: Option<usize>,
        /// Point being scrolled to.
        target: usize,
        /// Clamped scroll offset the animation ends at.
        offset: f64,
    },
    /// Another transition is in flight; the request was dropped.
    AlreadyScrolling,
    /// The leave callback vetoed the transition.
    Cancelled,
    /// Already at the first (for previous) or last (for next) point.
    AtBoundary,
    /// No snap point currently has geometry.
    NoSnapPoint,
    /// The requested index does not name a snap point.
    OutOfRange,
    /// The requested point has no geometry to scroll to.
    Unmeasurable,
}

impl ScrollOutcome {
    /// Returns `true` if an animation was started.
    #[must_use]
    pub const fn is_started(&self) -> bool {
        matches!(self, Self::Started { .. })
    }
}

/// Bookkeeping for the animation currently in flight.
pub(crate) struct InFlight {
    generation: u64,
    pub(crate) from: Option<usize>,
    pub(crate) target: usize,
    pub(crate) on_arrive: Option<ArriveOnce>,
}

impl fmt::Debug for InFlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InFlight")
            .field("generation", &self.generation)
            .field("from", &self.from)
            .field("target", &self.target)
            .field("on_arrive", &self.on_arrive.is_some())
            .finish()
    }
}

/// Per-controller transition state.
#[derive(Debug, Default)]
pub(crate) struct Transitions {
    in_flight: Option<InFlight>,
    next_generation: u64,
}

impl Transitions {
    pub(crate) const fn is_animating(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Arms the scrolling flag and issues the ticket for the new animation.
    pub(crate) fn begin(
        &mut self,
        from: Option<usize>,
        target: usize,
        on_arrive: Option<ArriveOnce>,
    ) -> TransitionTicket {
        debug_assert!(self.in_flight.is_none(), "transition already in flight");
        let generation = self.next_generation;
        self.next_generation = self.next_generation.wrapping_add(1);
        self.in_flight = Some(InFlight {
            generation,
            from,
            target,
            on_arrive,
        });
        TransitionTicket::new(generation)
    }

    /// Releases the scrolling flag if `ticket` belongs to the animation in flight.
    pub(crate) fn finish(&mut self, ticket: TransitionTicket) -> Option<InFlight> {
        match &self.in_flight {
            Some(flight) if flight.generation == ticket.generation => self.in_flight.take(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_and_finish_toggle_the_flag() {
        let mut transitions = Transitions::default();
        assert!(!transitions.is_animating());

        let ticket = transitions.begin(Some(0), 1, None);
        assert!(transitions.is_animating());
        assert_eq!(ticket.generation(), 0);

        let flight = transitions.finish(ticket).unwrap();
        assert_eq!((flight.from, flight.target), (Some(0), 1));
        assert!(!transitions.is_animating());
    }

    #[test]
    fn stale_tickets_are_rejected() {
        let mut transitions = Transitions::default();
        let first = transitions.begin(None, 0, None);
        assert!(transitions.finish(first).is_some());

        let _second = transitions.begin(Some(0), 2, None);
        assert!(transitions.finish(TransitionTicket::new(0)).is_none());
        assert!(transitions.is_animating());
    }

    #[test]
    fn outcome_started_predicate() {
        let started = ScrollOutcome::Started {
            from: None,
            target: 0,
            offset: 0.0,
        };
        assert!(started.is_started());
        assert!(!ScrollOutcome::Cancelled.is_started());
    }
}
