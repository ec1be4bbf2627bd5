// SPDX-License-Identifier: MPL-2.0
//! Shared page-scroll lock.
//!
//! The lock is owned by whoever renders the page behind the lightbox. The
//! lightbox only engages it on open and releases it on close; the grid reads
//! it to decide whether it may scroll.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable handle to a single shared boolean.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    locked: Arc<AtomicBool>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppresses page scrolling.
    pub fn engage(&self) {
        self.locked.store(true, Ordering::Relaxed);
    }

    /// Restores page scrolling.
    pub fn release(&self) {
        self.locked.store(false, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_engaged(&self) -> bool {
        self.locked.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_lock_is_released() {
        assert!(!ScrollLock::new().is_engaged());
    }

    #[test]
    fn clones_share_the_same_flag() {
        let lock = ScrollLock::new();
        let page_view = lock.clone();

        lock.engage();
        assert!(page_view.is_engaged());

        page_view.release();
        assert!(!lock.is_engaged());
    }
}
