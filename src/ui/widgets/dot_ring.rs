// SPDX-License-Identifier: MPL-2.0
//! Busy indicator: a ring of dots whose brightness chases the rotation angle
//! supplied by [`crate::ui::progress::ProgressIndicator::spinner_rotation`].

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Canvas, Geometry, Path};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::TAU;

const DOTS: usize = 8;
/// Alpha of the dimmest dot.
const TAIL_ALPHA: f32 = 0.15;

pub struct DotRing {
    color: Color,
    rotation: f32,
}

impl DotRing {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self { color, rotation }
    }

    pub fn into_element<'a, Message: 'a>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fixed(sizing::ICON_XL))
            .height(Length::Fixed(sizing::ICON_XL))
            .into()
    }
}

/// Brightness of dot `index` for a ring turned by `rotation` radians.
/// The dot under the rotation angle is fully lit; the rest fade behind it.
fn dot_alpha(index: usize, rotation: f32) -> f32 {
    let step = TAU / DOTS as f32;
    let head = (rotation.rem_euclid(TAU) / step).floor() as usize % DOTS;
    let behind = (head + DOTS - index) % DOTS;
    let fade = behind as f32 / DOTS as f32;
    1.0 - fade * (1.0 - TAIL_ALPHA)
}

impl<Message> canvas::Program<Message> for DotRing {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let center = frame.center();
        let dot_radius = frame.width().min(frame.height()) / 10.0;
        let ring_radius = frame.width().min(frame.height()) / 2.0 - dot_radius;

        for index in 0..DOTS {
            let angle = index as f32 * TAU / DOTS as f32 - TAU / 4.0;
            let position = Point::new(
                center.x + ring_radius * angle.cos(),
                center.y + ring_radius * angle.sin(),
            );
            frame.fill(
                &Path::circle(position, dot_radius),
                Color {
                    a: self.color.a * dot_alpha(index, self.rotation),
                    ..self.color
                },
            );
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_dot_follows_rotation() {
        assert_eq!(dot_alpha(0, 0.0), 1.0);
        assert_eq!(dot_alpha(2, 2.0 * TAU / DOTS as f32 + 0.01), 1.0);
    }

    #[test]
    fn trailing_dots_get_dimmer() {
        let alphas: Vec<f32> = (0..DOTS)
            .map(|behind| dot_alpha((DOTS - behind) % DOTS, 0.0))
            .collect();
        assert!(alphas.windows(2).all(|pair| pair[0] > pair[1]));
        assert!(alphas[DOTS - 1] >= TAIL_ALPHA);
    }

    #[test]
    fn full_turn_wraps_around() {
        assert_eq!(dot_alpha(0, TAU), dot_alpha(0, 0.0));
        assert_eq!(dot_alpha(3, -0.01), dot_alpha(3, TAU - 0.01));
    }
}
