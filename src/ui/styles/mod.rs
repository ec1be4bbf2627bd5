// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the UI components.

pub mod button;
pub mod overlay;

pub use button::{overlay as button_overlay, thumbnail as button_thumbnail};
