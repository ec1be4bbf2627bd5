// SPDX-License-Identifier: MPL-2.0
//! Transition state machine for the lightbox.
//!
//! A navigation runs `Exiting -> (swap) -> Entering -> Idle`. The first open
//! skips straight to `Entering`. Each step after the first is driven by a
//! [`Continuation`] that the host delivers back once its delay elapsed.

use std::time::Duration;

/// Navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Next,
    Prev,
}

impl Direction {
    /// Direction implied by a signed magnitude: positive is `Next`.
    ///
    /// Returns `None` for zero and non-finite values.
    #[must_use]
    pub fn from_sign(value: f32) -> Option<Self> {
        if !value.is_finite() || value == 0.0 {
            None
        } else if value > 0.0 {
            Some(Self::Next)
        } else {
            Some(Self::Prev)
        }
    }
}

/// Observable transition phase, mapped to visuals by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// The displayed image is on its way out.
    Leaving,
    /// The new image comes in, biased for forward navigation.
    Entering,
    /// The new image comes in from the opposite side (backward navigation).
    EnteringReversed,
}

/// Internal stage of the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Stage {
    #[default]
    Idle,
    Exiting {
        target: usize,
        direction: Direction,
    },
    /// `direction` is `None` for the enter-only animation played on open.
    Entering { direction: Option<Direction> },
}

impl Stage {
    pub(crate) fn phase(self) -> Phase {
        match self {
            Stage::Idle => Phase::Idle,
            Stage::Exiting { .. } => Phase::Leaving,
            Stage::Entering {
                direction: Some(Direction::Prev),
            } => Phase::EnteringReversed,
            Stage::Entering { .. } => Phase::Entering,
        }
    }
}

/// Which deferred step a continuation performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// End of the exit phase: swap the displayed image.
    Swap,
    /// End of the enter phase: return to idle.
    Settle,
}

/// Token for a deferred step.
///
/// Carries the generation it was issued under; once the controller moves to
/// a newer generation (new navigation, close, reopen) the token is stale and
/// delivering it has no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Continuation {
    pub(crate) generation: u64,
    pub(crate) step: Step,
}

impl Continuation {
    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }
}

/// What the host must do after a controller operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to schedule.
    None,
    /// Deliver `token` back to the controller once `delay` has elapsed.
    Schedule {
        delay: Duration,
        token: Continuation,
    },
}

impl Effect {
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Effect::None)
    }

    /// The scheduled continuation, if any.
    #[must_use]
    pub fn continuation(&self) -> Option<Continuation> {
        match self {
            Effect::Schedule { token, .. } => Some(*token),
            Effect::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_sign_maps_positive_to_next() {
        assert_eq!(Direction::from_sign(85.0), Some(Direction::Next));
        assert_eq!(Direction::from_sign(-0.5), Some(Direction::Prev));
        assert_eq!(Direction::from_sign(0.0), None);
        assert_eq!(Direction::from_sign(f32::NAN), None);
    }

    #[test]
    fn stage_maps_to_observable_phase() {
        assert_eq!(Stage::Idle.phase(), Phase::Idle);
        assert_eq!(
            Stage::Exiting {
                target: 1,
                direction: Direction::Prev
            }
            .phase(),
            Phase::Leaving
        );
        assert_eq!(
            Stage::Entering {
                direction: Some(Direction::Next)
            }
            .phase(),
            Phase::Entering
        );
        assert_eq!(
            Stage::Entering {
                direction: Some(Direction::Prev)
            }
            .phase(),
            Phase::EnteringReversed
        );
        assert_eq!(Stage::Entering { direction: None }.phase(), Phase::Entering);
    }

    #[test]
    fn effect_exposes_its_continuation() {
        let token = Continuation {
            generation: 3,
            step: Step::Swap,
        };
        let effect = Effect::Schedule {
            delay: Duration::from_millis(300),
            token,
        };
        assert_eq!(effect.continuation(), Some(token));
        assert!(Effect::None.continuation().is_none());
        assert!(Effect::None.is_none());
    }
}
