// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A slide deck driven by `understory_snap` and a simulated frame loop.
//!
//! This example shows how a host wires up:
//! - a [`SnapContainer`] over its own layout (slides of different heights),
//! - a [`ScrollAnimator`] that interpolates offsets frame by frame,
//! - a [`ListenerHost`] that records which channels are live,
//! - a scripted stream of wheel, touch, and key events.
//!
//! Run:
//! - `RUST_LOG=understory_snap=debug cargo run -p understory_snap_demos --example snap_deck`

use std::time::Duration;

use kurbo::{Rect, Vec2};
use tracing::info;
use tracing_subscriber::EnvFilter;
use understory_snap::{
    Easing, InputChannels, InputEvent, Key, LeaveDecision, ListenerHost, ListenerTarget,
    ScrollAnimation, ScrollAnimator, SnapConfig, SnapContainer, SnapPoint, SnapScroll,
    TransitionOptions, WheelDelta,
};

const FRAME: Duration = Duration::from_millis(16);

/// Slides stacked top to bottom, viewed through a 600px tall window.
#[derive(Debug)]
struct Deck {
    slides: Vec<Rect>,
    scroll: f64,
}

impl Deck {
    fn new(heights: &[f64]) -> Self {
        let mut top = 0.0;
        let slides = heights
            .iter()
            .map(|h| {
                let rect = Rect::new(0.0, top, 800.0, top + h);
                top += h;
                rect
            })
            .collect();
        Self {
            slides,
            scroll: 0.0,
        }
    }
}

impl SnapContainer<&'static str> for Deck {
    fn viewport_extent(&self) -> f64 {
        600.0
    }

    fn scroll_extent(&self) -> f64 {
        self.slides.last().map_or(0.0, |r| r.y1)
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll
    }

    fn bounds_of(&self, id: &&'static str) -> Option<Rect> {
        let index = SLIDES.iter().position(|s| s == id)?;
        self.slides
            .get(index)
            .map(|r| *r - Vec2::new(0.0, self.scroll))
    }

    fn set_scroll_bar_visible(&mut self, visible: bool) {
        info!(visible, "scroll bar");
    }
}

/// One running tween.
#[derive(Debug)]
struct Tween {
    animation: ScrollAnimation<Easing>,
    elapsed: Duration,
}

/// Animator that advances by fixed frames when the host asks it to.
#[derive(Debug, Default)]
struct FrameAnimator {
    running: Option<Tween>,
}

impl FrameAnimator {
    /// Advances one frame. Returns the new offset and, once finished, the tween.
    fn tick(&mut self) -> Option<(f64, Option<Tween>)> {
        let tween = self.running.as_mut()?;
        tween.elapsed += FRAME;
        let t = tween.elapsed.as_secs_f64() / tween.animation.duration.as_secs_f64().max(1e-9);
        let a = &tween.animation;
        let offset = a.easing.interpolate(a.from, a.to, t);
        if t >= 1.0 {
            Some((offset, self.running.take()))
        } else {
            Some((offset, None))
        }
    }
}

impl ScrollAnimator for FrameAnimator {
    type Easing = Easing;

    fn resolve_easing(&self, name: &str) -> Option<Easing> {
        Easing::from_name(name)
    }

    fn animate(&mut self, animation: ScrollAnimation<Easing>) {
        self.running = Some(Tween {
            animation,
            elapsed: Duration::ZERO,
        });
    }
}

/// Listener registry standing in for a real event loop.
#[derive(Debug, Default)]
struct Listeners {
    live: Vec<(InputChannels, ListenerTarget)>,
}

impl ListenerHost for Listeners {
    fn listen(&mut self, channel: InputChannels, target: ListenerTarget) {
        info!(?channel, ?target, "listen");
        self.live.push((channel, target));
    }

    fn unlisten(&mut self, channel: InputChannels, target: ListenerTarget) {
        info!(?channel, ?target, "unlisten");
        self.live.retain(|&entry| entry != (channel, target));
    }
}

const SLIDES: [&str; 5] = ["title", "agenda", "details", "chart", "questions"];

type Snap = SnapScroll<&'static str, Deck, FrameAnimator>;

/// Runs frames until the current transition completes.
fn settle(snap: &mut Snap) {
    while let Some((offset, finished)) = snap.animator_mut().tick() {
        snap.container_mut().scroll = offset;
        if let Some(tween) = finished {
            snap.complete(tween.animation.ticket);
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Ranks put "questions" last even though the host discovered it second.
    let points = vec![
        SnapPoint::ranked("title", 1),
        SnapPoint::ranked("questions", 5),
        SnapPoint::ranked("agenda", 2),
        SnapPoint::ranked("details", 3),
        SnapPoint::ranked("chart", 4),
    ];
    let layout = Deck::new(&[600.0, 600.0, 900.0, 600.0, 600.0]);
    // The layout order is SLIDES; points are looked up by name.

    let config = SnapConfig {
        arrow_keys: true,
        ordered: false,
        duration: Duration::from_millis(300),
        ..SnapConfig::default()
    }
    .with_on_leave(|current, target| {
        println!("leaving {current:?} for {target}");
        if target == 3 {
            // Linger on the chart.
            LeaveDecision::Adjust(TransitionOptions {
                duration: Some(Duration::from_millis(800)),
                easing: Some("linear".into()),
            })
        } else {
            LeaveDecision::Proceed
        }
    })
    .with_on_arrive(|previous, current| {
        println!("arrived at {current} (from {previous:?})");
    });

    let mut listeners = Listeners::default();
    let mut snap: Snap = match SnapScroll::init(
        layout,
        points,
        FrameAnimator::default(),
        config,
        &mut listeners,
    ) {
        Ok(snap) => snap,
        Err(err) => {
            eprintln!("failed to initialize: {err}");
            return;
        }
    };

    let script = [
        InputEvent::Wheel(WheelDelta::from_delta_y(40.0)),
        InputEvent::Key(Key::ArrowDown),
        InputEvent::TouchStart { y: 400.0 },
        InputEvent::TouchMove { y: 340.0 },
        InputEvent::Key(Key::ArrowDown),
        InputEvent::Key(Key::ArrowDown),
        InputEvent::Wheel(WheelDelta {
            wheel_delta: Some(120.0),
            ..WheelDelta::default()
        }),
    ];

    for event in script {
        let response = snap.handle_input(event);
        println!(
            "{event:?} -> {:?} (prevent default: {})",
            response.outcome, response.prevent_default
        );
        // A second event arriving mid-animation is dropped.
        let echo = snap.handle_input(event);
        if let Some(outcome) = echo.outcome {
            println!("  repeated mid-flight -> {outcome:?}");
        }
        settle(&mut snap);
        let current = snap.current_point();
        let name = current.and_then(|i| snap.points().get(i)).map(|p| p.id);
        println!("  now at {current:?} {name:?}, offset {}", snap.container().scroll);
    }

    snap.disable(&mut listeners);
    println!("listeners left: {}", listeners.live.len());
}
