// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcuts for the open lightbox.

use crate::gallery::Direction;

/// Keys the lightbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    ArrowLeft,
    ArrowRight,
    Escape,
}

/// Action bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Navigate(Direction),
    Close,
}

/// Maps a key to its command. Only meaningful while the lightbox is open.
#[must_use]
pub fn command_for(key: LightboxKey) -> KeyCommand {
    match key {
        LightboxKey::ArrowLeft => KeyCommand::Navigate(Direction::Prev),
        LightboxKey::ArrowRight => KeyCommand::Navigate(Direction::Next),
        LightboxKey::Escape => KeyCommand::Close,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_navigate_and_escape_closes() {
        assert_eq!(
            command_for(LightboxKey::ArrowLeft),
            KeyCommand::Navigate(Direction::Prev)
        );
        assert_eq!(
            command_for(LightboxKey::ArrowRight),
            KeyCommand::Navigate(Direction::Next)
        );
        assert_eq!(command_for(LightboxKey::Escape), KeyCommand::Close);
    }
}
