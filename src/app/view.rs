// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: the gallery, the preview dialog, toasts. The gallery
//! and the dialog are only part of the tree while their transition stage makes
//! them visible.

use super::Message;
use crate::app::i18n::fluent::I18n;
use crate::capture::CaptureLibrary;
use crate::ui::gallery;
use crate::ui::notifications::{self, Tray};
use crate::ui::preview;
use crate::ui::progress::ProgressIndicator;
use iced::widget::{Container, Stack};
use iced::{Element, Length, Size};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub library: &'a CaptureLibrary,
    pub gallery: &'a gallery::State,
    pub preview: &'a preview::State,
    pub progress: &'a ProgressIndicator,
    pub notifications: &'a Tray,
    pub window_size: Size,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let dialog = ctx.preview.dialog();
    let opacities = ctx.preview.opacities();

    let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);

    if dialog.gallery_visible() {
        layers = layers.push(
            gallery::view(gallery::ViewContext {
                i18n: ctx.i18n,
                library: ctx.library,
                window_width: ctx.window_size.width,
                opacity: opacities.gallery,
            })
            .map(Message::Gallery),
        );
    }

    if dialog.dialog_visible() {
        layers = layers.push(
            preview::view::view(
                ctx.preview,
                preview::view::ViewContext {
                    i18n: ctx.i18n,
                    progress: ctx.progress,
                },
            )
            .map(Message::Preview),
        );
    }

    layers = layers.push(notifications::overlay(ctx.notifications, ctx.i18n).map(Message::Notification));

    Container::new(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
