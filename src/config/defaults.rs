// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Lightbox**: Transition timings and navigation throttle
//! - **Input**: Wheel and swipe thresholds
//! - **Grid**: Column count and thumbnail size bounds
//!
//! The lightbox and input values are fixed at compile time; only the grid
//! values can be overridden from `settings.toml`.

use std::time::Duration;

// ==========================================================================
// Lightbox Defaults
// ==========================================================================

/// Minimum delay between two accepted navigations.
pub const THROTTLE_WINDOW: Duration = Duration::from_millis(600);

/// Duration of the exit phase, before the displayed image is swapped.
pub const EXIT_DURATION: Duration = Duration::from_millis(300);

/// Duration of the enter phase, after the displayed image is swapped.
pub const ENTER_DURATION: Duration = Duration::from_millis(600);

// ==========================================================================
// Input Defaults
// ==========================================================================

/// Accumulated wheel magnitude that must be exceeded to fire one navigation.
pub const WHEEL_THRESHOLD: f32 = 80.0;

/// Idle gap after which a partially accumulated wheel burst is discarded.
pub const WHEEL_IDLE_RESET: Duration = Duration::from_millis(200);

/// Pixel distance a wheel "line" counts for when the device reports lines.
pub const WHEEL_PIXELS_PER_LINE: f32 = 100.0;

/// Horizontal distance a touch swipe must exceed to navigate.
pub const SWIPE_THRESHOLD: f32 = 50.0;

// ==========================================================================
// Grid Defaults
// ==========================================================================

/// Default number of thumbnails per grid row.
pub const DEFAULT_GRID_COLUMNS: u16 = 4;

/// Minimum number of thumbnails per grid row.
pub const MIN_GRID_COLUMNS: u16 = 1;

/// Maximum number of thumbnails per grid row.
pub const MAX_GRID_COLUMNS: u16 = 12;

/// Default thumbnail edge length in logical pixels.
pub const DEFAULT_THUMBNAIL_SIZE: f32 = 180.0;

/// Minimum thumbnail edge length.
pub const MIN_THUMBNAIL_SIZE: f32 = 64.0;

/// Maximum thumbnail edge length.
pub const MAX_THUMBNAIL_SIZE: f32 = 512.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // A transition must be able to swap before the next one is accepted
    assert!(EXIT_DURATION.as_millis() < THROTTLE_WINDOW.as_millis());
    assert!(ENTER_DURATION.as_millis() > 0);
    assert!(WHEEL_IDLE_RESET.as_millis() > 0);

    // Input thresholds
    assert!(WHEEL_THRESHOLD > 0.0);
    assert!(WHEEL_PIXELS_PER_LINE > 0.0);
    assert!(SWIPE_THRESHOLD > 0.0);

    // Grid validation
    assert!(MIN_GRID_COLUMNS > 0);
    assert!(MAX_GRID_COLUMNS >= MIN_GRID_COLUMNS);
    assert!(DEFAULT_GRID_COLUMNS >= MIN_GRID_COLUMNS);
    assert!(DEFAULT_GRID_COLUMNS <= MAX_GRID_COLUMNS);
    assert!(MIN_THUMBNAIL_SIZE > 0.0);
    assert!(MAX_THUMBNAIL_SIZE >= MIN_THUMBNAIL_SIZE);
    assert!(DEFAULT_THUMBNAIL_SIZE >= MIN_THUMBNAIL_SIZE);
    assert!(DEFAULT_THUMBNAIL_SIZE <= MAX_THUMBNAIL_SIZE);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lightbox_timings_match_expected_values() {
        assert_eq!(THROTTLE_WINDOW, Duration::from_millis(600));
        assert_eq!(EXIT_DURATION, Duration::from_millis(300));
        assert_eq!(ENTER_DURATION, Duration::from_millis(600));
    }

    #[test]
    fn exit_phase_fits_inside_throttle_window() {
        assert!(EXIT_DURATION < THROTTLE_WINDOW);
    }

    #[test]
    fn input_thresholds_are_valid() {
        assert_eq!(WHEEL_THRESHOLD, 80.0);
        assert_eq!(SWIPE_THRESHOLD, 50.0);
        assert_eq!(WHEEL_IDLE_RESET, Duration::from_millis(200));
    }

    #[test]
    fn grid_defaults_are_valid() {
        assert_eq!(DEFAULT_GRID_COLUMNS, 4);
        assert!(DEFAULT_GRID_COLUMNS >= MIN_GRID_COLUMNS);
        assert!(DEFAULT_GRID_COLUMNS <= MAX_GRID_COLUMNS);
        assert!(DEFAULT_THUMBNAIL_SIZE >= MIN_THUMBNAIL_SIZE);
        assert!(DEFAULT_THUMBNAIL_SIZE <= MAX_THUMBNAIL_SIZE);
    }
}
