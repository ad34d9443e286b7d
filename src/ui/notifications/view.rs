// SPDX-License-Identifier: MPL-2.0
use super::notice::Notice;
use super::tray::{Message, ToastId, Tray};
use crate::app::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length, Theme};

/// Bottom-right column of the visible toasts.
pub fn overlay<'a>(tray: &Tray, i18n: &I18n) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right);
    let mut any = false;

    for (id, notice) in tray.visible() {
        column = column.push(card(id, notice, i18n));
        any = true;
    }

    if !any {
        return Space::new().into();
    }

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .into()
}

fn card<'a>(id: ToastId, notice: &Notice, i18n: &I18n) -> Element<'a, Message> {
    let accent = notice.severity().accent();

    let glyph = Text::new(notice.severity().glyph())
        .size(typography::TITLE_SM)
        .style(move |_theme: &Theme| text::Style {
            color: Some(accent),
        });

    let dismiss = button(Text::new("×").size(typography::BODY_LG))
        .on_press(Message::Dismiss(id))
        .padding(spacing::XXS)
        .style(styles::button::dismiss);

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(glyph)
        .push(
            Text::new(notice.text(i18n))
                .size(typography::BODY)
                .width(Length::Fill),
        )
        .push(dismiss);

    Container::new(row)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(styles::container::toast(accent))
        .into()
}
