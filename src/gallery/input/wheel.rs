// SPDX-License-Identifier: MPL-2.0
//! Wheel and trackpad gesture accumulation.
//!
//! Trackpads emit long streams of small deltas; a single mouse notch emits one
//! large delta. Both are summed until the magnitude crosses
//! [`WHEEL_THRESHOLD`], which fires exactly one navigation and empties the
//! accumulator. A pause of [`WHEEL_IDLE_RESET`] also empties it so leftovers
//! from one burst never bias the next.
//!
//! Deltas use the DOM convention: positive values scroll down/right and map
//! to [`Direction::Next`].

use crate::config::defaults::{WHEEL_IDLE_RESET, WHEEL_THRESHOLD};
use crate::gallery::Direction;
use std::time::Instant;

/// Picks the delta of the axis with the larger magnitude.
///
/// Ties favor the vertical axis.
#[must_use]
pub fn dominant_delta(delta_x: f32, delta_y: f32) -> f32 {
    if delta_x.abs() > delta_y.abs() {
        delta_x
    } else {
        delta_y
    }
}

/// Running sum of wheel deltas.
#[derive(Debug, Clone, Default)]
pub struct WheelAccumulator {
    accumulated: f32,
    last_event: Option<Instant>,
}

impl WheelAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one wheel event and returns a direction once the threshold is
    /// exceeded.
    pub fn feed(&mut self, delta_x: f32, delta_y: f32, now: Instant) -> Option<Direction> {
        if self
            .last_event
            .is_some_and(|last| now.saturating_duration_since(last) >= WHEEL_IDLE_RESET)
        {
            self.accumulated = 0.0;
        }
        self.last_event = Some(now);

        let delta = dominant_delta(delta_x, delta_y);
        if !delta.is_finite() {
            return None;
        }
        self.accumulated += delta;

        if self.accumulated.abs() > WHEEL_THRESHOLD {
            let direction = Direction::from_sign(self.accumulated);
            self.accumulated = 0.0;
            direction
        } else {
            None
        }
    }

    /// Current signed sum, after the last event.
    #[must_use]
    pub fn accumulated(&self) -> f32 {
        self.accumulated
    }

    pub fn reset(&mut self) {
        self.accumulated = 0.0;
        self.last_event = None;
    }
}
