// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns its state, turns messages into effects, and renders from `&self`.
//!
//! # Screens
//!
//! - [`gallery`] - Thumbnail grid of the capture library
//! - [`preview`] - Lightbox dialog over the gallery with navigation and export
//!
//! # Shared Infrastructure
//!
//! - [`progress`] - Balanced busy indicator driving the loading spinner
//! - [`notifications`] - Toast notification system for user feedback
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery;
pub mod notifications;
pub mod preview;
pub mod progress;
pub mod styles;
pub mod theming;
pub mod widgets;
