// SPDX-License-Identifier: MPL-2.0
//! Fitting a capture into the space the preview dialog leaves for it.

use crate::app::config::FitMode;
use iced::{Point, Size};

/// Smallest budget edge; keeps the fit ratios finite on tiny windows.
const MIN_BUDGET: f32 = 1.0;

/// Area available to the image: the window minus the reserved margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportBudget {
    pub max_width: f32,
    pub max_height: f32,
}

impl ViewportBudget {
    #[must_use]
    pub fn new(max_width: f32, max_height: f32) -> Self {
        Self {
            max_width: max_width.max(MIN_BUDGET),
            max_height: max_height.max(MIN_BUDGET),
        }
    }

    /// Budget for a window of `window` size with `preview_margin` reserved
    /// horizontally and `header_height` reserved vertically.
    #[must_use]
    pub fn from_window(window: Size, preview_margin: f32, header_height: f32) -> Self {
        Self::new(window.width - preview_margin, window.height - header_height)
    }

    /// Where the busy spinner is centered while a capture loads.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.max_width / 2.0, self.max_height / 2.0)
    }
}

/// Computes the on-screen size of an image of `intrinsic` size.
///
/// Never upscales. Degenerate intrinsic sizes are returned unchanged.
#[must_use]
pub fn adjust_resolution(intrinsic: Size, budget: ViewportBudget, mode: FitMode) -> Size {
    if intrinsic.width <= 0.0 || intrinsic.height <= 0.0 {
        return intrinsic;
    }

    match mode {
        FitMode::TwoPass => two_pass(intrinsic, budget),
        FitMode::MinRatio => min_ratio(intrinsic, budget),
    }
}

// Width is clamped first; the height check then works on the scaled height.
fn two_pass(intrinsic: Size, budget: ViewportBudget) -> Size {
    let mut width = intrinsic.width;
    let mut height = intrinsic.height;

    if width > budget.max_width {
        let ratio = budget.max_width / width;
        width = budget.max_width;
        height *= ratio;
    }

    if height > budget.max_height {
        width *= budget.max_height / height;
        height = budget.max_height;
    }

    Size::new(width, height)
}

fn min_ratio(intrinsic: Size, budget: ViewportBudget) -> Size {
    let ratio = (budget.max_width / intrinsic.width)
        .min(budget.max_height / intrinsic.height)
        .min(1.0);

    Size::new(intrinsic.width * ratio, intrinsic.height * ratio)
}

/// Offsets that center a fitted image in the dialog body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Distance from the window's left edge.
    pub left: f32,
    /// Distance from the top of the dialog body (below the header).
    pub top: f32,
}

impl Placement {
    /// Horizontal offset centers on the whole window; vertical offset centers
    /// on the budget height.
    #[must_use]
    pub fn centered(fitted: Size, window: Size, budget: ViewportBudget) -> Self {
        Self {
            left: ((window.width - fitted.width) / 2.0).max(0.0),
            top: ((budget.max_height - fitted.height) / 2.0).max(0.0),
        }
    }
}
