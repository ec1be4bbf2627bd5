// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`grid_view`] - Thumbnail grid of the opened directory
//! - [`lightbox`] - Modal image viewer layered over the grid
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (scroll lock wrapper)
//! - [`styles`] - Centralized styling (buttons, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod grid_view;
pub mod lightbox;
pub mod styles;
pub mod widgets;
