// SPDX-License-Identifier: MPL-2.0
//! Gallery lightbox core.
//!
//! Toolkit-independent: the [`Lightbox`] controller, its transition state
//! machine, the shared [`ScrollLock`], and the input parsers in [`input`].
//!
//! ```
//! use iced_gallery::gallery::{Direction, ImageRef, Lightbox, Phase, ScrollLock};
//! use std::time::{Duration, Instant};
//!
//! let items = vec![ImageRef::new("a.jpg", "a"), ImageRef::new("b.jpg", "b")];
//! let mut lightbox = Lightbox::new(ScrollLock::new());
//! let t0 = Instant::now();
//!
//! lightbox.open(0, items, t0);
//! let exit = lightbox.request_navigate(Direction::Next, t0 + Duration::from_secs(1));
//! assert_eq!(lightbox.phase(), Phase::Leaving);
//!
//! // The host delivers the continuation once its delay has elapsed
//! let token = exit.continuation().unwrap();
//! lightbox.on_timer(token);
//! assert_eq!(lightbox.current_index(), Some(1));
//! ```

pub mod controller;
pub mod input;
pub mod item;
pub mod scroll_lock;
pub mod transition;

pub use controller::{Counter, Lightbox, NavRequest};
pub use item::ImageRef;
pub use scroll_lock::ScrollLock;
pub use transition::{Continuation, Direction, Effect, Phase, Step};
