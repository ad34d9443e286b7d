// SPDX-License-Identifier: MPL-2.0
//! Preview controller: session, dialog transitions, and input handling.
//!
//! The controller performs no I/O. Every interaction with the capture
//! library, the busy indicator, the downloader or the gallery scrollable is
//! returned as an [`Effect`] for the application to execute.

use super::dialog::{DialogState, Milestone, Opacities, Transitions};
use super::fit::{adjust_resolution, Placement, ViewportBudget};
use super::session::{Controls, RequestTag, Session, Step};
use crate::app::config::{FitMode, PreviewConfig};
use crate::capture::{CaptureData, CaptureId, Collection};
use crate::error::Error;
use iced::keyboard::{self, key::Named};
use iced::widget::scrollable::RelativeOffset;
use iced::Size;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    PreviousPressed,
    NextPressed,
    /// The displayed image was clicked.
    ImagePressed,
    SavePressed,
    /// The "back to gallery" button was pressed.
    ClosePressed,
    KeyPressed(keyboard::Key),
    CaptureLoaded {
        tag: RequestTag,
        result: Result<CaptureData, Error>,
    },
    Tick(Instant),
    WindowResized(Size),
}

/// Requests for the application.
#[derive(Debug, Clone)]
pub enum Effect {
    /// Look up `id` and answer with [`Message::CaptureLoaded`] carrying `tag`.
    FindCapture { id: CaptureId, tag: RequestTag },
    BeginProgress,
    EndProgress,
    SaveCapture(CaptureData),
    RestoreGalleryScroll(RelativeOffset),
    ShowLoadFailure { id: CaptureId },
}

#[derive(Debug, Clone)]
pub struct State {
    dialog: DialogState,
    transitions: Transitions,
    opacities: Opacities,
    session: Option<Session>,
    fit_mode: FitMode,
    preview_margin: f32,
    header_height: f32,
    window_size: Size,
    fitted: Option<Size>,
    next_tag: u64,
}

impl Default for State {
    fn default() -> Self {
        Self::new(&PreviewConfig::default())
    }
}

impl State {
    #[must_use]
    pub fn new(config: &PreviewConfig) -> Self {
        Self {
            dialog: DialogState::Closed,
            transitions: Transitions::from_millis(
                config.gallery_transition_ms,
                config.dialog_transition_ms,
            ),
            opacities: Opacities {
                gallery: 1.0,
                dialog: 0.0,
            },
            session: None,
            fit_mode: config.fit_mode,
            preview_margin: config.preview_margin as f32,
            header_height: config.header_height as f32,
            window_size: Size::new(
                crate::app::WINDOW_DEFAULT_WIDTH as f32,
                crate::app::WINDOW_DEFAULT_HEIGHT as f32,
            ),
            fitted: None,
            next_tag: 0,
        }
    }

    /// Opens the dialog on `collection[index]`.
    ///
    /// `scroll_offset` is the gallery position to restore once the dialog
    /// closes. An empty collection is ignored; an out-of-range index is
    /// clamped to the last capture.
    pub fn show(
        &mut self,
        index: usize,
        collection: Collection,
        scroll_offset: RelativeOffset,
        now: Instant,
    ) -> Vec<Effect> {
        let len = collection.len();
        let Some(session) = Session::new(collection, index, scroll_offset) else {
            tracing::warn!("preview requested for an empty collection");
            return Vec::new();
        };

        if session.index() != index {
            tracing::warn!(index, len, "preview index out of range, clamped");
        }

        self.session = Some(session);
        self.fitted = None;
        self.open_dialog(now);
        self.preview_image()
    }

    fn open_dialog(&mut self, now: Instant) {
        self.dialog.open(now);
        self.refresh_opacities(now);
    }

    /// Starts the close transition. The gallery scroll offset is restored
    /// as soon as the gallery is shown again.
    pub fn close_dialog(&mut self, now: Instant) -> Vec<Effect> {
        let Some(milestones) = self.dialog.close(now, self.transitions) else {
            return Vec::new();
        };

        tracing::debug!("preview closing");
        self.refresh_opacities(now);
        self.on_milestones(milestones)
    }

    /// Requests the capture at the current index under a fresh tag.
    fn preview_image(&mut self) -> Vec<Effect> {
        let tag = self.issue_tag();
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };

        session.set_pending(tag);
        let id = session.current_id().clone();
        tracing::debug!(capture = %id, tag = tag.value(), "requesting capture");

        vec![Effect::BeginProgress, Effect::FindCapture { id, tag }]
    }

    fn issue_tag(&mut self) -> RequestTag {
        self.next_tag += 1;
        RequestTag::new(self.next_tag)
    }

    fn on_previous_preview(&mut self) -> Vec<Effect> {
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        if session.step_previous() == Step::AtBoundary {
            tracing::trace!("already at first capture");
        }
        self.preview_image()
    }

    fn on_next_preview(&mut self) -> Vec<Effect> {
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        if session.step_next() == Step::AtBoundary {
            tracing::trace!("already at last capture");
        }
        self.preview_image()
    }

    fn on_save_image(&self) -> Vec<Effect> {
        self.current_capture()
            .map(|capture| vec![Effect::SaveCapture(capture.clone())])
            .unwrap_or_default()
    }

    fn on_key_pressed(&mut self, key: &keyboard::Key, now: Instant) -> Vec<Effect> {
        if !self.dialog.is_open() {
            return Vec::new();
        }

        match key {
            keyboard::Key::Named(Named::Escape) => self.close_dialog(now),
            keyboard::Key::Named(Named::ArrowLeft) => self.on_previous_preview(),
            keyboard::Key::Named(Named::ArrowRight) => self.on_next_preview(),
            _ => Vec::new(),
        }
    }

    fn on_capture_loaded(
        &mut self,
        tag: RequestTag,
        result: Result<CaptureData, Error>,
    ) -> Vec<Effect> {
        let mut effects = vec![Effect::EndProgress];

        let Some(session) = self.session.as_mut() else {
            return effects;
        };

        if !session.accept(tag) {
            tracing::debug!(tag = tag.value(), "discarding stale capture result");
            return effects;
        }

        match result {
            Ok(capture) => {
                tracing::debug!(
                    capture = %capture.id,
                    width = capture.active_width,
                    height = capture.active_height,
                    "capture shown"
                );
                session.set_loaded(capture);
            }
            Err(error) => {
                let id = session.current_id().clone();
                tracing::warn!(capture = %id, %error, "capture failed to load");
                session.set_failed(error);
                effects.push(Effect::ShowLoadFailure { id });
            }
        }

        self.refit();
        effects
    }

    fn on_tick(&mut self, now: Instant) -> Vec<Effect> {
        let milestones = self.dialog.advance(now, self.transitions);
        self.refresh_opacities(now);
        self.on_milestones(milestones)
    }

    fn on_milestones(&self, milestones: Vec<Milestone>) -> Vec<Effect> {
        let mut effects = Vec::new();

        for milestone in milestones {
            match milestone {
                Milestone::GalleryRevealed => {
                    if let Some(session) = &self.session {
                        effects.push(Effect::RestoreGalleryScroll(session.scroll_offset()));
                    }
                }
                Milestone::Opened => tracing::debug!("preview opened"),
                Milestone::Closed => tracing::debug!("preview closed"),
            }
        }

        effects
    }

    pub fn handle_message(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::PreviousPressed => self.on_previous_preview(),
            Message::NextPressed | Message::ImagePressed => self.on_next_preview(),
            Message::SavePressed => self.on_save_image(),
            Message::ClosePressed => self.close_dialog(Instant::now()),
            Message::KeyPressed(key) => self.on_key_pressed(&key, Instant::now()),
            Message::CaptureLoaded { tag, result } => self.on_capture_loaded(tag, result),
            Message::Tick(now) => self.on_tick(now),
            Message::WindowResized(size) => {
                self.window_size = size;
                self.refit();
                Vec::new()
            }
        }
    }

    fn refresh_opacities(&mut self, now: Instant) {
        self.opacities = self.dialog.opacities(now, self.transitions);
    }

    fn refit(&mut self) {
        let budget = self.budget();
        self.fitted = self
            .current_capture()
            .map(|capture| adjust_resolution(capture.intrinsic_size(), budget, self.fit_mode));
    }

    #[must_use]
    pub fn dialog(&self) -> DialogState {
        self.dialog
    }

    /// True while the dialog is opening or open and owns keyboard input.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.dialog.is_open()
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.dialog.is_transitioning()
    }

    #[must_use]
    pub fn opacities(&self) -> Opacities {
        self.opacities
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.session.as_ref().map(Session::index)
    }

    #[must_use]
    pub fn current_capture(&self) -> Option<&CaptureData> {
        self.session.as_ref().and_then(Session::capture)
    }

    #[must_use]
    pub fn load_failure(&self) -> Option<&Error> {
        self.session.as_ref().and_then(Session::failure)
    }

    #[must_use]
    pub fn controls(&self) -> Controls {
        self.session.as_ref().map_or(
            Controls {
                previous_enabled: false,
                next_enabled: false,
            },
            Session::controls,
        )
    }

    #[must_use]
    pub fn window_size(&self) -> Size {
        self.window_size
    }

    #[must_use]
    pub fn header_height(&self) -> f32 {
        self.header_height
    }

    #[must_use]
    pub fn budget(&self) -> ViewportBudget {
        ViewportBudget::from_window(self.window_size, self.preview_margin, self.header_height)
    }

    /// On-screen size of the current capture.
    #[must_use]
    pub fn fitted_size(&self) -> Option<Size> {
        self.fitted
    }

    #[must_use]
    pub fn placement(&self) -> Option<Placement> {
        self.fitted
            .map(|fitted| Placement::centered(fitted, self.window_size, self.budget()))
    }
}
