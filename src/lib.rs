// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` shows a directory of images as a thumbnail grid and opens
//! them in a lightbox built with the Iced GUI framework.
//!
//! The lightbox logic in [`gallery`] is toolkit-independent; [`ui`] and
//! [`app`] wire it to Iced widgets, events and tasks.

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod grid;
pub mod i18n;
pub mod icon;
pub mod ui;
