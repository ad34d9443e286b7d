// SPDX-License-Identifier: MPL-2.0
//! Toasts stacked in the bottom-right corner of the window.
//!
//! Every toast is one of the [`Notice`]s the application can raise. At most
//! three are on screen; the rest wait their turn.

mod notice;
mod tray;
mod view;

pub use notice::{Notice, Severity};
pub use tray::{Message, ToastId, Tray};
pub use view::overlay;
