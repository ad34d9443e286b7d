// SPDX-License-Identifier: MPL-2.0
//! What a toast says and how urgently.

use crate::app::config::CONFIG_LOAD_WARNING;
use crate::app::i18n::fluent::I18n;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    /// Stays until dismissed.
    Error,
}

impl Severity {
    #[must_use]
    pub fn accent(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Warning | Severity::Error => "!",
        }
    }

    /// How long a toast stays on screen once shown.
    #[must_use]
    pub fn lifetime(self) -> Option<Duration> {
        match self {
            Severity::Success => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    CaptureLoadFailed { name: String },
    ExportSaved { path: String },
    ExportFailed,
    ConfigUnreadable,
    LibraryUnavailable,
}

impl Notice {
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Notice::ExportSaved { .. } => Severity::Success,
            Notice::CaptureLoadFailed { .. }
            | Notice::ConfigUnreadable
            | Notice::LibraryUnavailable => Severity::Warning,
            Notice::ExportFailed => Severity::Error,
        }
    }

    #[must_use]
    pub fn message_key(&self) -> &'static str {
        match self {
            Notice::CaptureLoadFailed { .. } => "notification-capture-load-error",
            Notice::ExportSaved { .. } => "notification-export-success",
            Notice::ExportFailed => "notification-export-error",
            Notice::ConfigUnreadable => CONFIG_LOAD_WARNING,
            Notice::LibraryUnavailable => "notification-library-error",
        }
    }

    /// Localized text of the toast.
    pub fn text(&self, i18n: &I18n) -> String {
        match self {
            Notice::CaptureLoadFailed { name } => {
                i18n.tr_with_args(self.message_key(), &[("name", name.as_str())])
            }
            Notice::ExportSaved { path } => {
                i18n.tr_with_args(self.message_key(), &[("path", path.as_str())])
            }
            _ => i18n.tr(self.message_key()),
        }
    }

    /// Load failures of earlier captures go stale once a capture shows up.
    #[must_use]
    pub fn is_load_failure(&self) -> bool {
        matches!(self, Notice::CaptureLoadFailed { .. })
    }
}
