// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid of the scanned directory.

use crate::error::Error;
use crate::gallery::{ImageRef, ScrollLock};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::scroll_locked;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, image, Column, Container, Row, Scrollable, Space, Text};
use iced::{ContentFit, Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    /// A thumbnail was clicked; carries its index in the grid order.
    ThumbnailPressed(usize),
}

/// What the grid currently has to show.
#[derive(Debug, Clone, Copy)]
pub enum Status<'a> {
    /// Launched without a directory argument.
    NoDirectory,
    Loading,
    Ready(&'a [ImageRef]),
    Failed(&'a Error),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub status: Status<'a>,
    pub columns: u16,
    pub thumbnail_size: f32,
    pub scroll_lock: ScrollLock,
}

/// Splits `len` items into rows of `columns` (at least one per row).
#[must_use]
pub fn row_ranges(len: usize, columns: u16) -> Vec<std::ops::Range<usize>> {
    let columns = usize::from(columns.max(1));
    (0..len)
        .step_by(columns)
        .map(|start| start..(start + columns).min(len))
        .collect()
}

fn centered_message<'a>(text: String, color: Option<iced::Color>) -> Element<'a, Message> {
    let mut label = Text::new(text).size(typography::TITLE_MD);
    if let Some(color) = color {
        label = label.color(color);
    }
    Container::new(label)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn thumbnail<'a>(index: usize, item: &'a ImageRef, size: f32) -> Element<'a, Message> {
    let picture = image(image::Handle::from_path(item.source()))
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .content_fit(ContentFit::Cover);

    let label = Text::new(item.alt())
        .size(typography::CAPTION)
        .width(Length::Fixed(size));

    let content = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(picture)
        .push(label);

    button(content)
        .padding(spacing::XXS)
        .style(styles::button_thumbnail)
        .on_press(Message::ThumbnailPressed(index))
        .into()
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let items = match ctx.status {
        Status::NoDirectory => return centered_message(ctx.i18n.tr("grid-no-directory"), None),
        Status::Loading => return centered_message(ctx.i18n.tr("grid-loading"), None),
        Status::Failed(error) => {
            return centered_message(ctx.i18n.tr(error.i18n_key()), Some(palette::ERROR_500))
        }
        Status::Ready([]) => return centered_message(ctx.i18n.tr("grid-empty"), None),
        Status::Ready(items) => items,
    };

    let count = items.len().to_string();
    let header = Text::new(
        ctx.i18n
            .tr_with_args("grid-image-count", &[("count", count.as_str())]),
    )
    .size(typography::BODY);

    let mut grid = Column::new().spacing(spacing::MD).push(header);
    for range in row_ranges(items.len(), ctx.columns) {
        let row = range.fold(Row::new().spacing(spacing::MD), |row, index| {
            row.push(thumbnail(index, &items[index], ctx.thumbnail_size))
        });
        grid = grid.push(row);
    }
    grid = grid.push(Space::new().height(Length::Fixed(spacing::XL)));

    let scrollable = Scrollable::new(
        Container::new(grid)
            .width(Length::Fill)
            .padding(spacing::LG)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    scroll_locked(ctx.scroll_lock, scrollable).into()
}
