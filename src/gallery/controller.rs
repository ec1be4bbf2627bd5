// SPDX-License-Identifier: MPL-2.0
//! Lightbox controller: the single owner of gallery state.
//!
//! Every input channel ends up in [`Lightbox::request_navigate`], which is
//! where the throttle and the no-op rules live. The controller never arms
//! timers itself; it returns an [`Effect`] and the host delivers the
//! [`Continuation`] back through [`Lightbox::on_timer`] when the delay elapsed.
//! Callers pass the current [`Instant`] so tests can drive a logical clock.

use super::item::ImageRef;
use super::scroll_lock::ScrollLock;
use super::transition::{Continuation, Direction, Effect, Phase, Stage, Step};
use crate::config::defaults::{ENTER_DURATION, EXIT_DURATION, THROTTLE_WINDOW};
use log::debug;
use std::fmt;
use std::time::{Duration, Instant};

/// A navigation request as produced by an input channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRequest {
    /// One step forward or backward.
    Relative(Direction),
    /// Jump to an explicit index (clamped).
    Absolute(usize),
}

impl From<Direction> for NavRequest {
    fn from(direction: Direction) -> Self {
        NavRequest::Relative(direction)
    }
}

/// Position counter shown next to the image (`position / total`, 1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    pub position: usize,
    pub total: usize,
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.position, self.total)
    }
}

/// Mutable gallery state.
#[derive(Debug, Clone, Default)]
struct GalleryState {
    is_open: bool,
    items: Vec<ImageRef>,
    /// Valid whenever `items` is non-empty.
    current_index: usize,
    last_navigation: Option<Instant>,
    pending_direction: Option<Direction>,
}

/// Modal image viewer state machine.
#[derive(Debug)]
pub struct Lightbox {
    state: GalleryState,
    stage: Stage,
    /// Bumped on open, close and every accepted navigation.
    generation: u64,
    scroll_lock: ScrollLock,
}

impl Lightbox {
    /// Creates a closed lightbox bound to the page's scroll lock.
    pub fn new(scroll_lock: ScrollLock) -> Self {
        Self {
            state: GalleryState::default(),
            stage: Stage::Idle,
            generation: 0,
            scroll_lock,
        }
    }

    /// Opens the lightbox on `items[index]` and plays the enter phase.
    ///
    /// `items` is always taken as the new navigable sequence. Does nothing
    /// when `items` is empty.
    pub fn open(&mut self, index: usize, items: Vec<ImageRef>, now: Instant) -> Effect {
        if items.is_empty() {
            debug!("Lightbox open ignored: no items");
            return Effect::None;
        }

        let index = index.min(items.len() - 1);
        debug!("Opening lightbox at {} of {}", index + 1, items.len());

        self.state.items = items;
        self.state.current_index = index;
        self.state.is_open = true;
        self.state.last_navigation = Some(now);
        self.state.pending_direction = None;
        self.scroll_lock.engage();

        self.generation += 1;
        self.stage = Stage::Entering { direction: None };
        self.schedule(Step::Settle, ENTER_DURATION)
    }

    /// Single ingress for every input channel.
    ///
    /// Requests are dropped while closed, inside the throttle window, or when
    /// they resolve to the index already shown. Otherwise the exit phase
    /// starts; the index itself only changes when the swap continuation runs.
    pub fn request_navigate(&mut self, request: impl Into<NavRequest>, now: Instant) -> Effect {
        let request = request.into();
        if !self.state.is_open || self.state.items.is_empty() {
            return Effect::None;
        }

        if let Some(last) = self.state.last_navigation {
            if now.saturating_duration_since(last) < THROTTLE_WINDOW {
                debug!("Navigation {:?} throttled", request);
                return Effect::None;
            }
        }

        let current = self.state.current_index;
        let target = self.resolve(request);
        if target == current {
            debug!("Navigation {:?} resolves to current index {}", request, current);
            return Effect::None;
        }

        let direction = match request {
            NavRequest::Relative(direction) => direction,
            NavRequest::Absolute(_) if target > current => Direction::Next,
            NavRequest::Absolute(_) => Direction::Prev,
        };
        debug!("Navigating {:?} from {} to {}", direction, current, target);

        self.state.last_navigation = Some(now);
        self.state.pending_direction = Some(direction);
        self.generation += 1;
        self.stage = Stage::Exiting { target, direction };
        self.schedule(Step::Swap, EXIT_DURATION)
    }

    /// Hides the lightbox immediately, whatever phase is in flight.
    ///
    /// Keeps `items` and the current index; pending continuations go stale.
    pub fn close(&mut self) {
        if !self.state.is_open {
            return;
        }
        debug!("Closing lightbox at index {}", self.state.current_index);

        self.state.is_open = false;
        self.state.pending_direction = None;
        self.scroll_lock.release();
        self.generation += 1;
        self.stage = Stage::Idle;
    }

    /// Runs a deferred step. Stale tokens are ignored.
    pub fn on_timer(&mut self, token: Continuation) -> Effect {
        if token.generation != self.generation {
            debug!(
                "Ignoring stale {:?} continuation (generation {} < {})",
                token.step, token.generation, self.generation
            );
            return Effect::None;
        }

        match (token.step, self.stage) {
            (Step::Swap, Stage::Exiting { target, direction }) => {
                self.state.current_index = target;
                self.stage = Stage::Entering {
                    direction: Some(direction),
                };
                self.schedule(Step::Settle, ENTER_DURATION)
            }
            (Step::Settle, Stage::Entering { .. }) => {
                self.stage = Stage::Idle;
                self.state.pending_direction = None;
                Effect::None
            }
            _ => Effect::None,
        }
    }

    fn resolve(&self, request: NavRequest) -> usize {
        let last = self.state.items.len().saturating_sub(1);
        let current = self.state.current_index;
        match request {
            NavRequest::Relative(Direction::Next) => current.saturating_add(1).min(last),
            NavRequest::Relative(Direction::Prev) => current.saturating_sub(1),
            NavRequest::Absolute(index) => index.min(last),
        }
    }

    fn schedule(&self, step: Step, delay: Duration) -> Effect {
        Effect::Schedule {
            delay,
            token: Continuation {
                generation: self.generation,
                step,
            },
        }
    }

    // ---------------------------------------------------------------------
    // Observable state
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    #[must_use]
    pub fn items(&self) -> &[ImageRef] {
        &self.state.items
    }

    /// Index of the displayed image, `None` until something was opened.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        (!self.state.items.is_empty()).then_some(self.state.current_index)
    }

    #[must_use]
    pub fn current_item(&self) -> Option<&ImageRef> {
        self.state.items.get(self.state.current_index)
    }

    #[must_use]
    pub fn counter(&self) -> Option<Counter> {
        self.current_index().map(|index| Counter {
            position: index + 1,
            total: self.state.items.len(),
        })
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.stage.phase()
    }

    /// Direction of the transition currently animating.
    #[must_use]
    pub fn pending_direction(&self) -> Option<Direction> {
        self.state.pending_direction
    }

    /// Whether a step in `direction` would move away from the current index.
    #[must_use]
    pub fn can_navigate(&self, direction: Direction) -> bool {
        match (self.current_index(), direction) {
            (Some(index), Direction::Prev) => index > 0,
            (Some(index), Direction::Next) => index + 1 < self.state.items.len(),
            (None, _) => false,
        }
    }
}
