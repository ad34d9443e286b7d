// SPDX-License-Identifier: MPL-2.0
//! Rendering of the preview dialog: header controls and the fitted capture.

use super::component::{Message, State};
use crate::app::i18n::fluent::I18n;
use crate::error::Error;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::progress::ProgressIndicator;
use crate::ui::styles;
use crate::ui::widgets::DotRing;
use iced::widget::{button, mouse_area, Column, Container, Image, Row, Space, Stack, Text};
use iced::{alignment, mouse, Color, ContentFit, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub progress: &'a ProgressIndicator,
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let alpha = state.opacities().dialog;

    let content = Column::new()
        .push(header(state, &ctx, alpha))
        .push(body(state, &ctx, alpha));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::dialog_backdrop(alpha))
        .into()
}

fn header<'a>(state: &'a State, ctx: &ViewContext<'a>, alpha: f32) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let controls = state.controls();

    let gallery_button = button(Text::new(i18n.tr("preview-button-gallery")))
        .on_press(Message::ClosePressed)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::secondary);

    let previous_button = button(Text::new(i18n.tr("preview-button-previous")))
        .on_press_maybe(controls.previous_enabled.then_some(Message::PreviousPressed))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::secondary);

    let next_button = button(Text::new(i18n.tr("preview-button-next")))
        .on_press_maybe(controls.next_enabled.then_some(Message::NextPressed))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::secondary);

    let save_button = button(Text::new(i18n.tr("preview-button-save")))
        .on_press_maybe(state.current_capture().map(|_| Message::SavePressed))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    let title = state.session().map_or_else(String::new, |session| {
        let current = (session.index() + 1).to_string();
        let total = session.total().to_string();
        i18n.tr_with_args(
            "preview-position",
            &[("current", current.as_str()), ("total", total.as_str())],
        )
    });

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(gallery_button)
        .push(Space::new().width(Length::Fill))
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fill))
        .push(previous_button)
        .push(next_button)
        .push(save_button);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(state.header_height()))
        .padding([0.0, spacing::LG])
        .align_y(alignment::Vertical::Center)
        .style(styles::container::dialog_header(alpha))
        .into()
}

fn body<'a>(state: &'a State, ctx: &ViewContext<'a>, alpha: f32) -> Element<'a, Message> {
    let content: Element<'a, Message> = if let Some(error) = state.load_failure() {
        failure(error, ctx.i18n)
    } else if let (Some(capture), Some(fitted), Some(placement)) = (
        state.current_capture(),
        state.fitted_size(),
        state.placement(),
    ) {
        let image = Image::new(capture.handle.clone())
            .width(Length::Fixed(fitted.width))
            .height(Length::Fixed(fitted.height))
            .content_fit(ContentFit::Fill)
            .opacity(alpha);

        let clickable = mouse_area(image)
            .on_press(Message::ImagePressed)
            .interaction(mouse::Interaction::Pointer);

        Column::new()
            .push(Space::new().height(Length::Fixed(placement.top)))
            .push(
                Row::new()
                    .push(Space::new().width(Length::Fixed(placement.left)))
                    .push(clickable),
            )
            .into()
    } else {
        Space::new().width(Length::Fill).into()
    };

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(content);

    if ctx.progress.is_busy() {
        layers = layers.push(loader(state, ctx.progress, alpha));
    }

    layers.into()
}

/// Spinner centered on the budget rectangle.
fn loader<'a>(state: &State, progress: &ProgressIndicator, alpha: f32) -> Element<'a, Message> {
    let center = state.budget().center();
    let half = sizing::ICON_XL / 2.0;
    let color = Color {
        a: alpha,
        ..palette::PRIMARY_400
    };

    Column::new()
        .push(Space::new().height(Length::Fixed((center.y - half).max(0.0))))
        .push(
            Row::new()
                .push(Space::new().width(Length::Fixed((center.x - half).max(0.0))))
                .push(DotRing::new(color, progress.spinner_rotation()).into_element()),
        )
        .into()
}

fn failure<'a>(error: &Error, i18n: &I18n) -> Element<'a, Message> {
    let detail = match error {
        Error::CaptureNotFound(id) => {
            i18n.tr_with_args("preview-load-missing", &[("name", id.as_str())])
        }
        other => i18n.tr(other.i18n_key()),
    };

    let message = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(i18n.tr("preview-load-failed")).size(typography::TITLE_SM))
        .push(Text::new(detail).size(typography::BODY));

    Container::new(Container::new(message).padding(spacing::LG).style(styles::container::panel))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
