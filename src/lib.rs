// SPDX-License-Identifier: MPL-2.0
//! `capture_viewer` browses a directory of captures as a thumbnail gallery and
//! presents them one at a time in a lightbox preview built with the Iced GUI
//! framework.
//!
//! The preview controller ([`ui::preview`]) owns the dialog transitions, the
//! navigation session and the fit algorithm. It talks to the rest of the
//! application only through effects, which [`app`] turns into tasks against
//! the [`capture`] library and downloader.

#![doc(html_root_url = "https://docs.rs/capture_viewer/0.1.0")]

pub mod app;
pub mod capture;
pub mod error;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
