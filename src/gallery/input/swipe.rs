// SPDX-License-Identifier: MPL-2.0
//! Horizontal touch swipe detection.

use crate::config::defaults::SWIPE_THRESHOLD;
use crate::gallery::Direction;

/// Classifies a finished swipe by its horizontal travel.
///
/// A leftward swipe (finger ends left of where it started) advances to the
/// next image; a rightward one goes back. Travel up to [`SWIPE_THRESHOLD`]
/// counts as a tap.
#[must_use]
pub fn swipe_direction(start_x: f32, end_x: f32) -> Option<Direction> {
    let travel = start_x - end_x;
    if !travel.is_finite() || travel.abs() <= SWIPE_THRESHOLD {
        return None;
    }
    if travel > 0.0 {
        Some(Direction::Next)
    } else {
        Some(Direction::Prev)
    }
}

/// Follows the first finger of a gesture from touch start to touch end.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start: Option<(u64, f32)>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records where `finger` touched down. Extra fingers are ignored while
    /// one is already tracked.
    pub fn begin(&mut self, finger: u64, x: f32) {
        if self.start.is_none() {
            self.start = Some((finger, x));
        }
    }

    /// Completes the gesture for `finger` and classifies it.
    pub fn finish(&mut self, finger: u64, x: f32) -> Option<Direction> {
        match self.start {
            Some((tracked, start_x)) if tracked == finger => {
                self.start = None;
                swipe_direction(start_x, x)
            }
            _ => None,
        }
    }

    /// Drops the gesture (finger lost, lightbox closed).
    pub fn cancel(&mut self) {
        self.start = None;
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}
