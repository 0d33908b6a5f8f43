// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_snap --heading-base-level=0

//! Understory Snap: headless scroll snapping.
//!
//! This crate turns a vertically scrolling container with a handful of marked
//! "snap points" into a sequence of discrete stops. It finds the point nearest
//! the viewport center, computes the clamped offset that centers another
//! point, and runs at most one scroll transition at a time, with leave/arrive
//! callbacks around it. Wheel, touch, and keyboard input are normalized into a
//! single [`Direction`] that drives those transitions.
//!
//! The core concepts are:
//!
//! - [`SnapContainer`]: the host's scroll container. It answers geometry
//!   queries (viewport extent, scroll extent, scroll offset, point bounds).
//! - [`SnapPoint`] / [`SnapIndex`]: the ordered snap targets, in discovery
//!   order or sorted by an explicit rank.
//! - [`nearest_point`] and [`target_offset`]: the pure geometry underneath.
//! - [`ScrollAnimator`]: the host's tween engine. The controller hands it a
//!   [`ScrollAnimation`] and the host returns its [`TransitionTicket`] when the
//!   animation ends.
//! - [`InputNormalizer`]: maps [`InputEvent`]s to [`Direction`]s and manages
//!   listener registration through a [`ListenerHost`].
//! - [`SnapScroll`]: the controller tying all of the above together.
//!
//! This crate does **not** render, interpolate, or listen to anything by
//! itself. Host frameworks are responsible for:
//!
//! - Collecting marked elements into [`SnapPoint`]s.
//! - Forwarding raw events to [`SnapScroll::handle_input`] and honoring
//!   [`InputResponse::prevent_default`].
//! - Driving each [`ScrollAnimation`] and calling [`SnapScroll::complete`].
//!
//! ## Minimal example
//!
//! Three full-height sections, with an animator that finishes instantly:
//!
//! ```rust
//! use kurbo::{Rect, Vec2};
//! use understory_snap::{
//!     Easing, ScrollAnimation, ScrollAnimator, SnapConfig, SnapContainer, SnapPoint, SnapScroll,
//! };
//!
//! struct Page {
//!     scroll: f64,
//! }
//!
//! impl SnapContainer<usize> for Page {
//!     fn viewport_extent(&self) -> f64 { 100.0 }
//!     fn scroll_extent(&self) -> f64 { 300.0 }
//!     fn scroll_offset(&self) -> f64 { self.scroll }
//!     fn bounds_of(&self, id: &usize) -> Option<Rect> {
//!         let top = *id as f64 * 100.0;
//!         Some(Rect::new(0.0, top, 100.0, top + 100.0) - Vec2::new(0.0, self.scroll))
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Queue(Vec<ScrollAnimation<Easing>>);
//!
//! impl ScrollAnimator for Queue {
//!     type Easing = Easing;
//!     fn resolve_easing(&self, name: &str) -> Option<Easing> { Easing::from_name(name) }
//!     fn animate(&mut self, animation: ScrollAnimation<Easing>) { self.0.push(animation); }
//! }
//!
//! let points: Vec<SnapPoint<usize>> = (0..3).map(SnapPoint::new).collect();
//! let mut snap = SnapScroll::new(Page { scroll: 0.0 }, points, Queue::default(), SnapConfig::default())
//!     .unwrap();
//! assert_eq!(snap.current_point(), Some(0));
//!
//! assert!(snap.scroll_next().is_started());
//! assert!(snap.is_scrolling());
//!
//! // The host's frame loop would interpolate; here we jump to the end.
//! let animation = snap.animator_mut().0.pop().unwrap();
//! snap.container_mut().scroll = animation.to;
//! assert!(snap.complete(animation.ticket));
//!
//! assert_eq!(snap.current_point(), Some(1));
//! assert!(!snap.is_scrolling());
//! ```
//!
//! ## Cancelling and adjusting transitions
//!
//! The leave callback returns a [`LeaveDecision`]. It can veto the transition,
//! or adjust its duration and easing on top of the configuration and any
//! per-call [`ScrollOverrides`]. Nothing is armed until the callback has
//! decided, so a cancelled request leaves the controller idle.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod easing;
mod geometry;
mod index;
mod input;
mod resolve;
mod target;
mod transition;

pub use config::{
    ArriveCallback, ArriveOnce, ConfigError, DEFAULT_DURATION, LeaveCallback, LeaveDecision,
    LeaveOnce, ScrollOverrides, SnapConfig, TransitionOptions,
};
pub use controller::{InputResponse, SnapScroll};
pub use easing::{DEFAULT_EASING, Easing};
pub use geometry::{SnapContainer, center_of, point_center, viewport_center};
pub use index::{SnapIndex, SnapPoint};
pub use input::{
    Direction, InputChannels, InputEvent, InputNormalizer, Key, ListenerHost, ListenerTarget,
    Normalized, WheelDelta,
};
pub use resolve::nearest_point;
pub use target::{clamp_offset, target_offset};
pub use transition::{ScrollAnimation, ScrollAnimator, ScrollOutcome, TransitionTicket};
