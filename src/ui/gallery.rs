// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid of the capture library.
//!
//! The grid lives in a scrollable with a stable id. Its relative offset is
//! tracked so the preview can hand it back when the dialog closes.

use crate::app::config::{THUMBNAIL_SIZE, THUMBNAIL_SPACING};
use crate::app::i18n::fluent::I18n;
use crate::capture::CaptureLibrary;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::scrollable::{RelativeOffset, Viewport};
use iced::widget::{button, operation, Column, Container, Id, Image, Row, Scrollable, Text};
use iced::{alignment, ContentFit, Element, Length, Task};

pub const SCROLLABLE_ID: &str = "capture-gallery";

#[derive(Debug, Clone)]
pub enum Message {
    Open(usize),
    Scrolled(RelativeOffset),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    OpenPreview { index: usize },
}

#[derive(Debug, Clone)]
pub struct State {
    offset: RelativeOffset,
}

impl Default for State {
    fn default() -> Self {
        Self {
            offset: RelativeOffset::START,
        }
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last relative scroll offset reported by the grid.
    #[must_use]
    pub fn offset(&self) -> RelativeOffset {
        self.offset
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::Open(index) => Effect::OpenPreview { index },
            Message::Scrolled(offset) => {
                self.offset = offset;
                Effect::None
            }
        }
    }

    /// Scrolls the grid back to `offset`.
    pub fn restore_scroll<T: Send + 'static>(&mut self, offset: RelativeOffset) -> Task<T> {
        self.offset = offset;
        operation::snap_to(Id::new(SCROLLABLE_ID), offset)
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub library: &'a CaptureLibrary,
    pub window_width: f32,
    pub opacity: f32,
}

/// Number of thumbnails per row for a window of `width`.
#[must_use]
pub fn columns_for_width(width: f32) -> usize {
    let usable = width - 2.0 * spacing::LG + THUMBNAIL_SPACING;
    let columns = (usable / (THUMBNAIL_SIZE + THUMBNAIL_SPACING)).floor();
    if columns.is_finite() && columns >= 1.0 {
        columns as usize
    } else {
        1
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if ctx.library.is_empty() {
        return empty_state(ctx.i18n, ctx.library);
    }

    let collection = ctx.library.collection();
    let columns = columns_for_width(ctx.window_width);

    let mut grid = Column::new().spacing(THUMBNAIL_SPACING);
    for (row_index, chunk) in collection.chunks(columns).enumerate() {
        let mut row = Row::new().spacing(THUMBNAIL_SPACING);
        for (column_index, id) in chunk.iter().enumerate() {
            let index = row_index * columns + column_index;
            let thumbnail = Image::new(ctx.library.thumbnail(id))
                .width(Length::Fixed(THUMBNAIL_SIZE))
                .height(Length::Fixed(THUMBNAIL_SIZE))
                .content_fit(ContentFit::Cover)
                .opacity(ctx.opacity);

            row = row.push(
                button(thumbnail)
                    .on_press(Message::Open(index))
                    .padding(0)
                    .style(styles::button::thumbnail),
            );
        }
        grid = grid.push(row);
    }

    let centered = Container::new(grid)
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center);

    Scrollable::new(centered)
        .id(Id::new(SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::Scrolled(viewport.relative_offset()))
        .into()
}

fn empty_state<'a>(i18n: &I18n, library: &CaptureLibrary) -> Element<'a, Message> {
    let directory = library.root().display().to_string();

    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(i18n.tr("gallery-empty-title")).size(typography::TITLE_MD))
        .push(
            Text::new(i18n.tr_with_args("gallery-empty-hint", &[("directory", directory.as_str())]))
                .size(typography::BODY),
        );

    Container::new(Container::new(content).padding(spacing::XL).style(styles::container::panel))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_press_requests_preview() {
        let mut state = State::new();
        assert_eq!(
            state.handle_message(Message::Open(4)),
            Effect::OpenPreview { index: 4 }
        );
    }

    #[test]
    fn scroll_offset_is_tracked() {
        let mut state = State::new();
        state.handle_message(Message::Scrolled(RelativeOffset { x: 0.0, y: 0.4 }));
        assert_eq!(state.offset().y, 0.4);
    }

    #[test]
    fn restoring_scroll_updates_tracked_offset() {
        let mut state = State::new();
        let _task: Task<()> = state.restore_scroll(RelativeOffset { x: 0.0, y: 0.6 });
        assert_eq!(state.offset().y, 0.6);
    }

    #[test]
    fn columns_scale_with_width() {
        assert_eq!(columns_for_width(0.0), 1);
        assert_eq!(columns_for_width(300.0), 1);
        // 2 * 24 padding, each column takes 160 + 12
        assert_eq!(columns_for_width(48.0 + 172.0 * 4.0 - 12.0), 4);
    }
}
