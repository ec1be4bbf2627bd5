// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for lightbox overlay buttons (arrows, close).
///
/// Disabled buttons fade out so the boundary reads at a glance.
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (alpha, text_color) = match status {
            button::Status::Hovered => (alpha_hover, text_color),
            button::Status::Pressed => (opacity::OVERLAY_PRESSED, text_color),
            button::Status::Disabled => (
                opacity::OVERLAY_SUBTLE,
                Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..text_color
                },
            ),
            button::Status::Active => (alpha_normal, text_color),
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Style for grid thumbnails: borderless until hovered.
pub fn thumbnail(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let idle_background = if is_light {
        palette::GRAY_200
    } else {
        palette::GRAY_900
    };

    let (border_color, shadow) = match status {
        button::Status::Hovered | button::Status::Pressed => (palette::PRIMARY_400, shadow::SM),
        button::Status::Active | button::Status::Disabled => (Color::TRANSPARENT, shadow::NONE),
    };

    button::Style {
        background: Some(Background::Color(idle_background)),
        text_color: if is_light { BLACK } else { WHITE },
        border: Border {
            color: border_color,
            width: 2.0,
            radius: radius::MD.into(),
        },
        shadow,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_overlay_button_is_fainter_than_active() {
        let style = overlay(WHITE, opacity::OVERLAY_MEDIUM, opacity::OVERLAY_HOVER);
        let active = style(&Theme::Dark, button::Status::Active);
        let disabled = style(&Theme::Dark, button::Status::Disabled);

        assert!(disabled.text_color.a < active.text_color.a);
    }

    #[test]
    fn hovered_thumbnail_gets_accent_border() {
        let style = thumbnail(&Theme::Dark, button::Status::Hovered);
        assert_eq!(style.border.color, palette::PRIMARY_400);
        let style = thumbnail(&Theme::Dark, button::Status::Active);
        assert_eq!(style.border.color, Color::TRANSPARENT);
    }
}
