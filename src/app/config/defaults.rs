// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Layout**: Space reserved around the preview image
//! - **Transitions**: Durations of the gallery and dialog fades
//! - **Gallery**: Thumbnail grid geometry

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Vertical space reserved for the dialog header, in logical pixels.
pub const DEFAULT_HEADER_HEIGHT: u32 = 90;

/// Horizontal space reserved around the preview image, in logical pixels.
pub const DEFAULT_PREVIEW_MARGIN: u32 = 200;

/// Upper bound for either reserved dimension.
pub const MAX_RESERVED_SPACE: u32 = 800;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Duration of the gallery fade (first phase of opening, second of closing).
pub const DEFAULT_GALLERY_TRANSITION_MS: u64 = 500;

/// Duration of the dialog fade (second phase of opening, first of closing).
pub const DEFAULT_DIALOG_TRANSITION_MS: u64 = 250;

/// Upper bound for any transition duration.
pub const MAX_TRANSITION_MS: u64 = 5_000;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Edge length of one thumbnail cell.
pub const THUMBNAIL_SIZE: f32 = 160.0;

/// Gap between thumbnail cells.
pub const THUMBNAIL_SPACING: f32 = 12.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_defaults_fit_within_bounds() {
        assert!(DEFAULT_HEADER_HEIGHT <= MAX_RESERVED_SPACE);
        assert!(DEFAULT_PREVIEW_MARGIN <= MAX_RESERVED_SPACE);
    }

    #[test]
    fn transition_defaults_fit_within_bounds() {
        assert!(DEFAULT_GALLERY_TRANSITION_MS <= MAX_TRANSITION_MS);
        assert!(DEFAULT_DIALOG_TRANSITION_MS <= MAX_TRANSITION_MS);
    }
}
