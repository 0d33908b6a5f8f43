// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input normalization: wheel, touch, and keyboard into one [`Direction`].
//!
//! The host forwards raw events as [`InputEvent`]s; the normalizer turns each
//! into at most one directional intent and reports whether the event's default
//! action (native scrolling) should be suppressed. It also owns which channels
//! are registered with the host's event loop, through a [`ListenerHost`].
//!
//! ## Sign conventions
//!
//! - Wheel: `delta = -delta_y`, falling back to `wheel_delta`, then to
//!   `-detail`. A positive delta means "towards the start".
//! - Touch: `delta = y - last_y` per move. Dragging down (positive delta)
//!   means "towards the start".
//! - Keyboard: `ArrowUp` is previous, `ArrowDown` is next.

use bitflags::bitflags;

/// Normalized directional intent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the first snap point.
    Previous,
    /// Towards the last snap point.
    Next,
}

impl Direction {
    /// Positive deltas point backwards; zero and negative deltas point forwards.
    #[must_use]
    pub fn from_delta(delta: f64) -> Self {
        if delta > 0.0 { Self::Previous } else { Self::Next }
    }
}

/// Raw wheel deltas as reported by the platform.
///
/// Different platforms report wheel motion through different fields; fill in
/// whichever are available.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct WheelDelta {
    /// Vertical pixel delta; positive scrolls content down.
    pub delta_y: Option<f64>,
    /// Legacy wheel delta; positive scrolls content up.
    pub wheel_delta: Option<f64>,
    /// Legacy line-based detail; positive scrolls content down.
    pub detail: Option<f64>,
}

impl WheelDelta {
    /// A wheel event carrying only a vertical pixel delta.
    #[must_use]
    pub const fn from_delta_y(delta_y: f64) -> Self {
        Self {
            delta_y: Some(delta_y),
            wheel_delta: None,
            detail: None,
        }
    }

    /// Signed delta where positive means "towards the start".
    ///
    /// The first non-zero, non-NaN candidate wins; `0.0` if none qualifies.
    #[must_use]
    pub fn normalized(&self) -> f64 {
        [
            self.delta_y.map(|d| -d),
            self.wheel_delta,
            self.detail.map(|d| -d),
        ]
        .into_iter()
        .flatten()
        .find(|d| *d != 0.0 && !d.is_nan())
        .unwrap_or(0.0)
    }
}

/// Keys the normalizer cares about.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Anything else.
    Other,
}

impl Key {
    /// Maps a legacy DOM key code (`38` up, `40` down).
    #[must_use]
    pub const fn from_key_code(code: u32) -> Self {
        match code {
            38 => Self::ArrowUp,
            40 => Self::ArrowDown,
            _ => Self::Other,
        }
    }
}

/// A raw input event forwarded by the host.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Mouse wheel or trackpad scroll.
    Wheel(WheelDelta),
    /// A touch began at vertical position `y`.
    TouchStart {
        /// Vertical position of the first touch.
        y: f64,
    },
    /// The first touch moved to vertical position `y`.
    TouchMove {
        /// Vertical position of the first touch.
        y: f64,
    },
    /// A key was pressed.
    Key(Key),
}

impl InputEvent {
    /// The channel this event is delivered on.
    #[must_use]
    pub const fn channel(&self) -> InputChannels {
        match self {
            Self::Wheel(_) => InputChannels::WHEEL,
            Self::TouchStart { .. } => InputChannels::TOUCH_START,
            Self::TouchMove { .. } => InputChannels::TOUCH_MOVE,
            Self::Key(_) => InputChannels::KEYBOARD,
        }
    }
}

bitflags! {
    /// Event channels the normalizer subscribes to.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct InputChannels: u8 {
        /// Wheel events on the container.
        const WHEEL = 1 << 0;
        /// Touch-start events on the container.
        const TOUCH_START = 1 << 1;
        /// Touch-move events on the container.
        const TOUCH_MOVE = 1 << 2;
        /// Key-down events on the window.
        const KEYBOARD = 1 << 3;

        /// Every channel delivered to the container itself.
        const POINTER = Self::WHEEL.bits() | Self::TOUCH_START.bits() | Self::TOUCH_MOVE.bits();
    }
}

impl InputChannels {
    /// Where listeners for this channel are attached.
    ///
    /// For a combination of channels, the keyboard channel decides.
    #[must_use]
    pub const fn target(self) -> ListenerTarget {
        if self.contains(Self::KEYBOARD) {
            ListenerTarget::Window
        } else {
            ListenerTarget::Container
        }
    }
}

/// Object a listener is attached to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    /// The scroll container.
    Container,
    /// The window-level event target.
    Window,
}

/// Host-side listener registration.
///
/// Each call names exactly one channel.
pub trait ListenerHost {
    /// Starts delivering events for `channel` from `target`.
    fn listen(&mut self, channel: InputChannels, target: ListenerTarget);
    /// Stops delivering events for `channel` from `target`.
    fn unlisten(&mut self, channel: InputChannels, target: ListenerTarget);
}

/// Result of normalizing one event.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Normalized {
    /// Intent produced by the event, if any.
    pub direction: Option<Direction>,
    /// Whether the host should suppress the event's default action.
    pub prevent_default: bool,
}

/// Turns raw input into directional intents and tracks listener registration.
#[derive(Clone, Debug)]
pub struct InputNormalizer {
    wanted: InputChannels,
    registered: InputChannels,
    last_touch_y: Option<f64>,
}

impl InputNormalizer {
    /// Creates a normalizer; the keyboard channel is used only if `arrow_keys`.
    #[must_use]
    pub fn new(arrow_keys: bool) -> Self {
        let mut wanted = InputChannels::POINTER;
        wanted.set(InputChannels::KEYBOARD, arrow_keys);
        Self {
            wanted,
            registered: InputChannels::empty(),
            last_touch_y: None,
        }
    }

    /// Channels this normalizer listens to when enabled.
    #[must_use]
    pub const fn wanted(&self) -> InputChannels {
        self.wanted
    }

    /// Channels currently registered with the host.
    #[must_use]
    pub const fn registered(&self) -> InputChannels {
        self.registered
    }

    /// Returns `true` if any channel is registered.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        !self.registered.is_empty()
    }

    /// Registers every wanted channel that is not registered yet.
    pub fn enable(&mut self, host: &mut (impl ListenerHost + ?Sized)) {
        for channel in self.wanted.difference(self.registered).iter() {
            host.listen(channel, channel.target());
        }
        self.registered |= self.wanted;
    }

    /// Unregisters every registered channel and forgets any touch in progress.
    pub fn disable(&mut self, host: &mut (impl ListenerHost + ?Sized)) {
        for channel in self.registered.iter() {
            host.unlisten(channel, channel.target());
        }
        self.registered = InputChannels::empty();
        self.last_touch_y = None;
    }

    /// Normalizes `event`. Events on unregistered channels are ignored.
    pub fn normalize(&mut self, event: InputEvent) -> Normalized {
        if !self.registered.contains(event.channel()) {
            return Normalized::default();
        }
        match event {
            InputEvent::Wheel(delta) => Normalized {
                direction: Some(Direction::from_delta(delta.normalized())),
                prevent_default: true,
            },
            InputEvent::TouchStart { y } => {
                self.last_touch_y = Some(y);
                Normalized::default()
            }
            InputEvent::TouchMove { y } => {
                let direction = self
                    .last_touch_y
                    .map(|last| Direction::from_delta(y - last));
                self.last_touch_y = Some(y);
                Normalized {
                    direction,
                    prevent_default: true,
                }
            }
            InputEvent::Key(key) => Normalized {
                direction: match key {
                    Key::ArrowUp => Some(Direction::Previous),
                    Key::ArrowDown => Some(Direction::Next),
                    Key::Other => None,
                },
                prevent_default: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[derive(Default)]
    struct Host {
        active: Vec<(InputChannels, ListenerTarget)>,
        calls: usize,
    }

    impl ListenerHost for Host {
        fn listen(&mut self, channel: InputChannels, target: ListenerTarget) {
            self.calls += 1;
            self.active.push((channel, target));
        }
        fn unlisten(&mut self, channel: InputChannels, target: ListenerTarget) {
            self.calls += 1;
            self.active.retain(|&entry| entry != (channel, target));
        }
    }

    fn enabled(arrow_keys: bool) -> InputNormalizer {
        let mut input = InputNormalizer::new(arrow_keys);
        input.enable(&mut Host::default());
        input
    }

    #[test]
    fn wheel_delta_sign_selects_direction() {
        let mut input = enabled(false);
        let up = input.normalize(InputEvent::Wheel(WheelDelta::from_delta_y(-10.0)));
        assert_eq!(up.direction, Some(Direction::Previous));
        assert!(up.prevent_default);

        let down = input.normalize(InputEvent::Wheel(WheelDelta::from_delta_y(10.0)));
        assert_eq!(down.direction, Some(Direction::Next));
    }

    #[test]
    fn wheel_falls_back_through_legacy_fields() {
        let legacy = WheelDelta {
            delta_y: Some(0.0),
            wheel_delta: Some(120.0),
            detail: Some(3.0),
        };
        assert_eq!(legacy.normalized(), 120.0);

        let detail_only = WheelDelta {
            detail: Some(3.0),
            ..WheelDelta::default()
        };
        assert_eq!(detail_only.normalized(), -3.0);

        let nan = WheelDelta {
            delta_y: Some(f64::NAN),
            ..WheelDelta::default()
        };
        assert_eq!(nan.normalized(), 0.0);
        assert_eq!(Direction::from_delta(nan.normalized()), Direction::Next);
    }

    #[test]
    fn touch_direction_follows_incremental_movement() {
        let mut input = enabled(false);
        assert_eq!(
            input.normalize(InputEvent::TouchStart { y: 300.0 }),
            Normalized::default()
        );

        let drag_down = input.normalize(InputEvent::TouchMove { y: 320.0 });
        assert_eq!(drag_down.direction, Some(Direction::Previous));
        assert!(drag_down.prevent_default);

        // Still below the start, but moving up since the last move.
        let drag_up = input.normalize(InputEvent::TouchMove { y: 310.0 });
        assert_eq!(drag_up.direction, Some(Direction::Next));
    }

    #[test]
    fn touch_move_without_start_only_records_position() {
        let mut input = enabled(false);
        let first = input.normalize(InputEvent::TouchMove { y: 100.0 });
        assert_eq!(first.direction, None);
        assert!(first.prevent_default);
        let second = input.normalize(InputEvent::TouchMove { y: 150.0 });
        assert_eq!(second.direction, Some(Direction::Previous));
    }

    #[test]
    fn keyboard_requires_arrow_keys() {
        let mut input = enabled(false);
        assert_eq!(
            input.normalize(InputEvent::Key(Key::ArrowUp)).direction,
            None
        );

        let mut input = enabled(true);
        assert_eq!(
            input.normalize(InputEvent::Key(Key::from_key_code(38))).direction,
            Some(Direction::Previous)
        );
        assert_eq!(
            input.normalize(InputEvent::Key(Key::from_key_code(40))).direction,
            Some(Direction::Next)
        );
        assert_eq!(
            input.normalize(InputEvent::Key(Key::from_key_code(13))),
            Normalized::default()
        );
    }

    #[test]
    fn enable_and_disable_never_duplicate_registrations() {
        let mut host = Host::default();
        let mut input = InputNormalizer::new(true);

        input.enable(&mut host);
        input.enable(&mut host);
        assert_eq!(host.active.len(), 4);
        assert_eq!(host.calls, 4);
        assert!(
            host.active
                .contains(&(InputChannels::KEYBOARD, ListenerTarget::Window))
        );
        assert!(
            host.active
                .contains(&(InputChannels::WHEEL, ListenerTarget::Container))
        );

        input.disable(&mut host);
        input.disable(&mut host);
        assert!(host.active.is_empty());
        assert!(!input.is_enabled());

        input.enable(&mut host);
        assert_eq!(host.active.len(), 4);
        assert_eq!(input.registered(), input.wanted());
    }

    #[test]
    fn disabled_channels_are_ignored() {
        let mut input = InputNormalizer::new(false);
        let response = input.normalize(InputEvent::Wheel(WheelDelta::from_delta_y(5.0)));
        assert_eq!(response, Normalized::default());
    }
}
