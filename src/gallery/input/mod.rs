// SPDX-License-Identifier: MPL-2.0
//! Pure input-channel parsers.
//!
//! Each parser turns raw device data into a [`Direction`](crate::gallery::Direction)
//! or a command without touching the lightbox. The caller forwards the result
//! to [`Lightbox::request_navigate`](crate::gallery::Lightbox::request_navigate),
//! so every channel goes through the same throttle.

pub mod keyboard;
pub mod swipe;
pub mod wheel;

pub use keyboard::{command_for, KeyCommand, LightboxKey};
pub use swipe::{swipe_direction, SwipeTracker};
pub use wheel::{dominant_delta, WheelAccumulator};
