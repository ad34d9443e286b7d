// SPDX-License-Identifier: MPL-2.0
//! Lightbox preview dialog shown over the capture gallery.
//!
//! - [`component`] - controller state, messages and effects
//! - [`session`] - collection, index and load state of one `show`
//! - [`dialog`] - two-phase open/close transitions
//! - [`fit`] - sizing a capture into the available space
//! - [`view`] - widget tree

pub mod component;
pub mod dialog;
pub mod fit;
pub mod session;
pub mod view;

pub use component::{Effect, Message, State};
pub use session::RequestTag;
