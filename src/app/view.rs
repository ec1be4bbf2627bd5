// SPDX-License-Identifier: MPL-2.0
//! Root view: the grid with the lightbox layered on top while open.

use super::{Gallery, Message};
use crate::config::GridConfig;
use crate::gallery::ScrollLock;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::{grid_view, lightbox};
use iced::widget::{Column, Container, Stack, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a Gallery,
    pub grid_config: &'a GridConfig,
    pub scroll_lock: &'a ScrollLock,
    pub lightbox: &'a lightbox::State,
    pub warning: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let status = match ctx.gallery {
        Gallery::NoDirectory => grid_view::Status::NoDirectory,
        Gallery::Loading => grid_view::Status::Loading,
        Gallery::Ready(items) => grid_view::Status::Ready(items),
        Gallery::Failed(error) => grid_view::Status::Failed(error),
    };

    let grid = grid_view::view(grid_view::ViewContext {
        i18n: ctx.i18n,
        status,
        columns: ctx.grid_config.effective_columns(),
        thumbnail_size: ctx.grid_config.effective_thumbnail_size(),
        scroll_lock: ctx.scroll_lock.clone(),
    })
    .map(Message::Grid);

    let mut page = Column::new().width(Length::Fill).height(Length::Fill);
    if let Some(key) = ctx.warning {
        page = page.push(
            Container::new(
                Text::new(ctx.i18n.tr(key))
                    .size(typography::BODY)
                    .color(palette::ERROR_500),
            )
            .padding([spacing::XS, spacing::LG]),
        );
    }
    page = page.push(grid);

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page);

    if ctx.lightbox.is_open() {
        stack = stack.push(
            lightbox::view(ctx.lightbox, lightbox::ViewContext { i18n: ctx.i18n })
                .map(Message::Lightbox),
        );
    }

    stack.into()
}
