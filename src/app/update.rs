// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! Component messages are forwarded to their owners; the effects they return
//! are executed here, in order.

use super::Message;
use crate::capture::{CaptureDownloader, CaptureLibrary};
use crate::error::Error;
use crate::ui::gallery;
use crate::ui::notifications::{Notice, Tray};
use crate::ui::preview::{self, Effect};
use crate::ui::progress::ProgressIndicator;
use iced::{Size, Task};
use std::path::PathBuf;
use std::time::Instant;

/// Mutable view of the application state shared by the handlers.
pub(super) struct UpdateContext<'a> {
    pub library: &'a mut CaptureLibrary,
    pub downloader: &'a CaptureDownloader,
    pub gallery: &'a mut gallery::State,
    pub preview: &'a mut preview::State,
    pub progress: &'a mut ProgressIndicator,
    pub notifications: &'a mut Tray,
    pub window_size: &'a mut Size,
}

pub(super) fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    match ctx.gallery.handle_message(message) {
        gallery::Effect::None => Task::none(),
        gallery::Effect::OpenPreview { index } => {
            let effects = ctx.preview.show(
                index,
                ctx.library.collection(),
                ctx.gallery.offset(),
                Instant::now(),
            );
            execute_effects(ctx, effects)
        }
    }
}

pub(super) fn handle_preview_message(
    ctx: &mut UpdateContext<'_>,
    message: preview::Message,
) -> Task<Message> {
    let loaded = matches!(
        &message,
        preview::Message::CaptureLoaded { result: Ok(_), .. }
    );

    let effects = ctx.preview.handle_message(message);

    // A capture that made it on screen supersedes earlier load failures.
    if loaded && ctx.preview.current_capture().is_some() {
        ctx.notifications.clear_load_failures(Instant::now());
    }

    execute_effects(ctx, effects)
}

pub(super) fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.progress.tick();
    ctx.notifications.tick(now);

    let effects = ctx.preview.handle_message(preview::Message::Tick(now));
    execute_effects(ctx, effects)
}

pub(super) fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    *ctx.window_size = size;
    let effects = ctx
        .preview
        .handle_message(preview::Message::WindowResized(size));
    execute_effects(ctx, effects)
}

pub(super) fn handle_library_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<CaptureLibrary, Error>,
) {
    match result {
        Ok(library) => {
            tracing::info!(
                directory = %library.root().display(),
                captures = library.len(),
                "capture library loaded"
            );
            *ctx.library = library;
        }
        Err(error) => {
            tracing::warn!(%error, "capture library could not be scanned");
            ctx.notifications
                .push(Notice::LibraryUnavailable, Instant::now());
        }
    }
}

pub(super) fn handle_download_finished(
    ctx: &mut UpdateContext<'_>,
    result: Result<Option<PathBuf>, Error>,
) {
    match result {
        Ok(Some(path)) => {
            let path = path.display().to_string();
            ctx.notifications
                .push(Notice::ExportSaved { path }, Instant::now());
        }
        Ok(None) => {}
        Err(error) => {
            tracing::error!(%error, "capture export failed");
            ctx.notifications
                .push(Notice::ExportFailed, Instant::now());
        }
    }
}

/// Runs preview effects in order. State changes apply immediately; async
/// work is batched into the returned task.
pub(super) fn execute_effects(ctx: &mut UpdateContext<'_>, effects: Vec<Effect>) -> Task<Message> {
    let tasks: Vec<Task<Message>> = effects
        .into_iter()
        .map(|effect| execute_effect(ctx, effect))
        .collect();

    Task::batch(tasks)
}

fn execute_effect(ctx: &mut UpdateContext<'_>, effect: Effect) -> Task<Message> {
    match effect {
        Effect::FindCapture { id, tag } => {
            Task::perform(ctx.library.find_capture(id), move |result| {
                Message::CaptureFound { tag, result }
            })
        }
        Effect::BeginProgress => {
            ctx.progress.begin();
            Task::none()
        }
        Effect::EndProgress => {
            ctx.progress.end();
            Task::none()
        }
        Effect::SaveCapture(data) => {
            tracing::info!(capture = %data.id, "exporting capture");
            Task::perform(
                ctx.downloader.prepare_download(&data),
                Message::DownloadFinished,
            )
        }
        Effect::RestoreGalleryScroll(offset) => ctx.gallery.restore_scroll(offset),
        Effect::ShowLoadFailure { id } => {
            let name = id.as_str().to_string();
            ctx.notifications
                .push(Notice::CaptureLoadFailed { name }, Instant::now());
            Task::none()
        }
    }
}
