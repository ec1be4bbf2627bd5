// SPDX-License-Identifier: MPL-2.0
//! Lightbox rendering.

use super::{Message, State};
use crate::gallery::{Direction, Phase};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{motion, opacity, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, image, mouse_area, tooltip, Column, Container, Row, Space, Text};
use iced::{ContentFit, Element, Length, Padding};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Static appearance of the image for a transition phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseVisual {
    pub opacity: f32,
    /// Horizontal shift of the image; negative moves it left.
    pub offset_x: f32,
}

/// Maps the controller phase to the image's appearance.
///
/// A forward navigation pushes the old image out to the left and brings the
/// new one in from the right; a backward one mirrors both.
#[must_use]
pub fn phase_visual(phase: Phase, pending: Option<Direction>) -> PhaseVisual {
    let leaving_shift = match pending {
        Some(Direction::Prev) => motion::SLIDE_OFFSET,
        _ => -motion::SLIDE_OFFSET,
    };
    match phase {
        Phase::Idle => PhaseVisual {
            opacity: opacity::OPAQUE,
            offset_x: 0.0,
        },
        Phase::Leaving => PhaseVisual {
            opacity: motion::LEAVING_OPACITY,
            offset_x: leaving_shift,
        },
        Phase::Entering => PhaseVisual {
            opacity: motion::ENTERING_OPACITY,
            offset_x: motion::SLIDE_OFFSET / 2.0,
        },
        Phase::EnteringReversed => PhaseVisual {
            opacity: motion::ENTERING_OPACITY,
            offset_x: -motion::SLIDE_OFFSET / 2.0,
        },
    }
}

fn nav_button<'a>(
    label: &'a str,
    hint: String,
    message: Option<Message>,
) -> Element<'a, Message> {
    let content = Container::new(Text::new(label).size(typography::TITLE_MD))
        .width(Length::Fixed(sizing::NAV_BUTTON))
        .height(Length::Fixed(sizing::NAV_BUTTON))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    let control = button(content)
        .padding(0)
        .style(styles::button_overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .on_press_maybe(message);

    let with_hint = tooltip(
        control,
        Container::new(Text::new(hint).size(typography::BODY))
            .padding(spacing::XS)
            .style(styles::overlay::indicator(radius::SM)),
        tooltip::Position::Bottom,
    );

    // A disabled arrow does not capture the press; keep it off the backdrop.
    mouse_area(with_hint)
        .on_press(Message::ContentPressed)
        .into()
}

/// Renders the open lightbox. Callers only show it while it is open.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let lightbox = state.lightbox();

    let counter_text = lightbox
        .counter()
        .map(|counter| {
            let current = counter.position.to_string();
            let total = counter.total.to_string();
            ctx.i18n.tr_with_args(
                "lightbox-counter",
                &[("current", current.as_str()), ("total", total.as_str())],
            )
        })
        .unwrap_or_default();

    let counter = Container::new(Text::new(counter_text).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::overlay::indicator(radius::FULL));

    let close = nav_button(
        "✕",
        ctx.i18n.tr("lightbox-close"),
        Some(Message::ClosePressed),
    );

    let top_bar = Row::new()
        .align_y(Vertical::Center)
        .push(counter)
        .push(Space::new().width(Length::Fill))
        .push(close);

    let previous = nav_button(
        "◀",
        ctx.i18n.tr("lightbox-prev"),
        lightbox
            .can_navigate(Direction::Prev)
            .then_some(Message::PreviousPressed),
    );
    let next = nav_button(
        "▶",
        ctx.i18n.tr("lightbox-next"),
        lightbox
            .can_navigate(Direction::Next)
            .then_some(Message::NextPressed),
    );

    let visual = phase_visual(lightbox.phase(), lightbox.pending_direction());
    let picture: Element<'a, Message> = match lightbox.current_item() {
        Some(item) => {
            let picture = image(image::Handle::from_path(item.source()))
                .content_fit(ContentFit::Contain)
                .opacity(visual.opacity);
            // Clicks on the picture itself must not reach the backdrop.
            mouse_area(picture).on_press(Message::ContentPressed).into()
        }
        None => Space::new().into(),
    };

    let stage = Container::new(picture)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            left: visual.offset_x.max(0.0),
            right: (-visual.offset_x).max(0.0),
            ..Padding::ZERO
        })
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    let middle = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .height(Length::Fill)
        .push(previous)
        .push(stage)
        .push(next);

    let mut content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(top_bar)
        .push(middle);

    if let Some(item) = lightbox.current_item().filter(|item| item.has_caption()) {
        content = content.push(
            Container::new(Text::new(item.caption()).size(typography::BODY))
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        );
    }

    let backdrop = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::overlay::backdrop);

    mouse_area(backdrop)
        .on_press(Message::BackdropPressed)
        .on_release(Message::BackdropReleased)
        .on_scroll(Message::Wheel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_image_is_opaque_and_centered() {
        let visual = phase_visual(Phase::Idle, None);
        assert_eq!(visual.opacity, opacity::OPAQUE);
        assert_eq!(visual.offset_x, 0.0);
    }

    #[test]
    fn leaving_slides_against_the_navigation_direction() {
        let forward = phase_visual(Phase::Leaving, Some(Direction::Next));
        let backward = phase_visual(Phase::Leaving, Some(Direction::Prev));

        assert!(forward.offset_x < 0.0);
        assert!(backward.offset_x > 0.0);
        assert_eq!(forward.opacity, motion::LEAVING_OPACITY);
    }

    #[test]
    fn reversed_entry_mirrors_forward_entry() {
        let forward = phase_visual(Phase::Entering, Some(Direction::Next));
        let backward = phase_visual(Phase::EnteringReversed, Some(Direction::Prev));

        assert_eq!(forward.offset_x, -backward.offset_x);
        assert_eq!(forward.opacity, backward.opacity);
    }
}
