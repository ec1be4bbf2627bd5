// SPDX-License-Identifier: MPL-2.0
//! Lightbox component: adapts Iced events to the gallery controller.
//!
//! Buttons, backdrop clicks and the wheel arrive as widget messages from the
//! overlay; keys and touches arrive as [`Message::RawEvent`] from the app
//! subscription, which only listens while the lightbox is open. Deferred
//! transition steps come back as [`Message::TransitionElapsed`].

mod view;

pub use view::{phase_visual, view, PhaseVisual, ViewContext};

use crate::config::defaults::WHEEL_PIXELS_PER_LINE;
use crate::gallery::input::{
    command_for, KeyCommand, LightboxKey, SwipeTracker, WheelAccumulator,
};
use crate::gallery::{Continuation, Direction, Effect, ImageRef, Lightbox, ScrollLock};
use iced::keyboard::{self, key::Named};
use iced::{mouse, touch, Event, Task};
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    PreviousPressed,
    NextPressed,
    ClosePressed,
    /// Press on the backdrop around the image.
    BackdropPressed,
    /// Release on the backdrop; closes unless the gesture was a swipe.
    BackdropReleased,
    /// Click on the image itself; swallowed so it does not close the lightbox.
    ContentPressed,
    Wheel(mouse::ScrollDelta),
    RawEvent(Event),
    TransitionElapsed(Continuation),
}

/// Tap-versus-swipe bookkeeping for presses that started on the backdrop.
///
/// The backdrop's press/release messages and the subscription's touch events
/// reach `update` in no guaranteed order, so either side may settle the
/// gesture.
#[derive(Debug, Default, Clone, Copy)]
struct BackdropGesture {
    armed: bool,
    /// Released while the finger was still tracked; the lift decides.
    close_on_lift: bool,
    /// The current touch ended as a swipe.
    swiped: bool,
}

/// Lightbox component state.
#[derive(Debug)]
pub struct State {
    lightbox: Lightbox,
    wheel: WheelAccumulator,
    swipe: SwipeTracker,
    backdrop: BackdropGesture,
}

impl State {
    pub fn new(scroll_lock: ScrollLock) -> Self {
        Self {
            lightbox: Lightbox::new(scroll_lock),
            wheel: WheelAccumulator::new(),
            swipe: SwipeTracker::new(),
            backdrop: BackdropGesture::default(),
        }
    }

    #[must_use]
    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.lightbox.is_open()
    }

    /// Opens the lightbox on `items[index]`.
    pub fn open(&mut self, index: usize, items: Vec<ImageRef>) -> Task<Message> {
        schedule(self.open_at(index, items, Instant::now()))
    }

    /// Handles a message with the current time.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        schedule(self.handle(message, Instant::now()))
    }

    pub(crate) fn open_at(&mut self, index: usize, items: Vec<ImageRef>, now: Instant) -> Effect {
        self.reset_gestures();
        self.lightbox.open(index, items, now)
    }

    /// Handles a message against an explicit clock.
    pub fn handle(&mut self, message: Message, now: Instant) -> Effect {
        match message {
            Message::PreviousPressed => self.lightbox.request_navigate(Direction::Prev, now),
            Message::NextPressed => self.lightbox.request_navigate(Direction::Next, now),
            Message::ClosePressed => {
                self.close();
                Effect::None
            }
            Message::BackdropPressed => {
                self.backdrop = BackdropGesture {
                    armed: self.lightbox.is_open(),
                    ..BackdropGesture::default()
                };
                Effect::None
            }
            Message::BackdropReleased => {
                self.handle_backdrop_release();
                Effect::None
            }
            Message::ContentPressed => Effect::None,
            Message::Wheel(delta) => self.handle_wheel(delta, now),
            Message::RawEvent(event) => self.handle_raw_event(&event, now),
            Message::TransitionElapsed(token) => self.lightbox.on_timer(token),
        }
    }

    fn close(&mut self) {
        self.lightbox.close();
        self.reset_gestures();
    }

    fn reset_gestures(&mut self) {
        self.wheel.reset();
        self.swipe.cancel();
        self.backdrop = BackdropGesture::default();
    }

    fn handle_backdrop_release(&mut self) {
        let gesture = std::mem::take(&mut self.backdrop);
        if !gesture.armed || gesture.swiped {
            return;
        }
        if self.swipe.is_tracking() {
            self.backdrop.close_on_lift = true;
        } else {
            self.close();
        }
    }

    fn handle_wheel(&mut self, delta: mouse::ScrollDelta, now: Instant) -> Effect {
        if !self.lightbox.is_open() {
            return Effect::None;
        }
        let (delta_x, delta_y) = wheel_pixels(delta);
        match self.wheel.feed(delta_x, delta_y, now) {
            Some(direction) => self.lightbox.request_navigate(direction, now),
            None => Effect::None,
        }
    }

    fn handle_key(&mut self, key: &keyboard::Key, now: Instant) -> Effect {
        if !self.lightbox.is_open() {
            return Effect::None;
        }
        match lightbox_key(key).map(command_for) {
            Some(KeyCommand::Navigate(direction)) => self.lightbox.request_navigate(direction, now),
            Some(KeyCommand::Close) => {
                self.close();
                Effect::None
            }
            None => Effect::None,
        }
    }

    fn handle_raw_event(&mut self, event: &Event, now: Instant) -> Effect {
        if !self.lightbox.is_open() {
            return Effect::None;
        }
        match event {
            Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => self.handle_key(key, now),
            Event::Touch(touch::Event::FingerPressed { id, position }) => {
                self.backdrop.swiped = false;
                self.backdrop.close_on_lift = false;
                self.swipe.begin(id.0, position.x);
                Effect::None
            }
            Event::Touch(touch::Event::FingerLifted { id, position }) => {
                match self.swipe.finish(id.0, position.x) {
                    Some(direction) => {
                        self.backdrop.swiped = true;
                        self.backdrop.close_on_lift = false;
                        self.lightbox.request_navigate(direction, now)
                    }
                    None if self.backdrop.close_on_lift => {
                        self.close();
                        Effect::None
                    }
                    None => Effect::None,
                }
            }
            Event::Touch(touch::Event::FingerLost { .. }) => {
                self.swipe.cancel();
                self.backdrop = BackdropGesture::default();
                Effect::None
            }
            _ => Effect::None,
        }
    }
}

/// Turns a controller effect into a runtime task.
pub fn schedule(effect: Effect) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::Schedule { delay, token } => Task::perform(
            async move { tokio::time::sleep(delay).await },
            move |()| Message::TransitionElapsed(token),
        ),
    }
}

/// Converts an Iced scroll delta to pixels where positive means down/right.
///
/// Iced reports scrolling down as a negative `y`, so both axes are flipped.
#[must_use]
pub fn wheel_pixels(delta: mouse::ScrollDelta) -> (f32, f32) {
    match delta {
        mouse::ScrollDelta::Lines { x, y } => {
            (-x * WHEEL_PIXELS_PER_LINE, -y * WHEEL_PIXELS_PER_LINE)
        }
        mouse::ScrollDelta::Pixels { x, y } => (-x, -y),
    }
}

fn lightbox_key(key: &keyboard::Key) -> Option<LightboxKey> {
    match key {
        keyboard::Key::Named(Named::ArrowLeft) => Some(LightboxKey::ArrowLeft),
        keyboard::Key::Named(Named::ArrowRight) => Some(LightboxKey::ArrowRight),
        keyboard::Key::Named(Named::Escape) => Some(LightboxKey::Escape),
        _ => None,
    }
}
