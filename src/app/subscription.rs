// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard and touch input only matters to the open lightbox, so the
//! listener exists only while it is open. Wheel input is delivered by the
//! lightbox overlay itself.

use super::Message;
use crate::ui::lightbox;
use iced::{event, keyboard, touch, Event, Subscription};

/// Creates the event subscription for the current lightbox visibility.
pub fn create_event_subscription(lightbox_open: bool) -> Subscription<Message> {
    if lightbox_open {
        event::listen_with(route_lightbox_event)
    } else {
        Subscription::none()
    }
}

fn route_lightbox_event(
    event: Event,
    status: event::Status,
    _window: iced::window::Id,
) -> Option<Message> {
    let forward = match &event {
        // Keys already consumed by a focused widget are left alone
        Event::Keyboard(keyboard::Event::KeyPressed { .. }) => {
            matches!(status, event::Status::Ignored)
        }
        Event::Touch(
            touch::Event::FingerPressed { .. }
            | touch::Event::FingerLifted { .. }
            | touch::Event::FingerLost { .. },
        ) => true,
        _ => false,
    };

    forward.then(|| Message::Lightbox(lightbox::Message::RawEvent(event)))
}
