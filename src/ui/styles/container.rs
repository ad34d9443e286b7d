// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Full-window backdrop behind the preview dialog.
///
/// `alpha` follows the dialog fade so the backdrop appears and disappears
/// together with the image.
pub fn dialog_backdrop(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let base = theme.extended_palette().background.base.color;

        container::Style {
            background: Some(Background::Color(Color {
                a: alpha * opacity::SURFACE,
                ..base
            })),
            text_color: Some(Color {
                a: alpha,
                ..theme.palette().text
            }),
            ..Default::default()
        }
    }
}

/// Header strip holding the dialog controls.
pub fn dialog_header(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let weak = theme.extended_palette().background.weak.color;

        container::Style {
            background: Some(Background::Color(Color { a: alpha, ..weak })),
            ..Default::default()
        }
    }
}

/// Generic panel surface (empty states, failure messages).
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Toast card outlined in its severity color.
pub fn toast(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_alpha_follows_fade() {
        let style = dialog_backdrop(0.5)(&Theme::Dark);

        match style.background {
            Some(Background::Color(color)) => {
                assert!((color.a - 0.5 * opacity::SURFACE).abs() < 1e-6);
            }
            other => panic!("expected color background, got {other:?}"),
        }
    }

    #[test]
    fn hidden_backdrop_is_transparent() {
        let style = dialog_backdrop(0.0)(&Theme::Light);
        assert!(matches!(style.background, Some(Background::Color(c)) if c.a == 0.0));
    }

    #[test]
    fn toast_is_outlined_in_accent() {
        let accent = Color::from_rgb(0.9, 0.2, 0.2);
        let style = toast(accent)(&Theme::Dark);
        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }
}
