// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery and the
//! preview dialog.
//!
//! The `App` struct owns the capture library and the UI components, and
//! translates component effects into tasks: capture lookups, exports, scroll
//! restoration and toasts.

pub mod config;
pub mod i18n;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::capture::{CaptureDownloader, CaptureLibrary};
use crate::error::Error;
use crate::ui::gallery;
use crate::ui::notifications::{Notice, Tray};
use crate::ui::preview;
use crate::ui::progress::ProgressIndicator;
use crate::ui::theming::ThemeMode;
use config::SortOrder;
use i18n::fluent::I18n;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    library: CaptureLibrary,
    downloader: CaptureDownloader,
    gallery: gallery::State,
    preview: preview::State,
    progress: ProgressIndicator,
    notifications: Tray,
    window_size: Size,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("library", &self.library.root())
            .field("captures", &self.library.len())
            .field("preview_open", &self.preview.is_open())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot closure; flags are only consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            theme_mode: ThemeMode::System,
            library: CaptureLibrary::empty(),
            downloader: CaptureDownloader::default(),
            gallery: gallery::State::new(),
            preview: preview::State::default(),
            progress: ProgressIndicator::new(),
            notifications: Tray::new(),
            window_size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        }
    }
}

impl App {
    /// Loads the configuration and starts scanning the capture directory.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            downloader: CaptureDownloader::from_config(&config.export),
            preview: preview::State::new(&config.preview),
            ..Self::default()
        };

        if config_warning.is_some() {
            app.notifications
                .push(Notice::ConfigUnreadable, Instant::now());
        }

        let directory = flags
            .directory
            .or(config.library.directory)
            .or_else(paths::default_library_dir);

        let task = match directory {
            Some(root) => scan_library(root, config.library.sort_order),
            None => {
                tracing::warn!("no capture directory available");
                app.notifications
                    .push(Notice::LibraryUnavailable, Instant::now());
                Task::none()
            }
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match self.preview.current_capture() {
            Some(capture) if self.preview.is_open() => format!("{} - {app_name}", capture.id),
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![subscription::create_window_subscription()];

        if self.preview.is_open() {
            subscriptions.push(subscription::create_keyboard_subscription());
        }

        subscriptions.push(subscription::create_tick_subscription(
            self.preview.is_transitioning(),
            self.progress.is_busy(),
            !self.notifications.is_empty(),
        ));

        Subscription::batch(subscriptions)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            library: &mut self.library,
            downloader: &self.downloader,
            gallery: &mut self.gallery,
            preview: &mut self.preview,
            progress: &mut self.progress,
            notifications: &mut self.notifications,
            window_size: &mut self.window_size,
        };

        match message {
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Preview(preview_message) => {
                update::handle_preview_message(&mut ctx, preview_message)
            }
            Message::CaptureFound { tag, result } => update::handle_preview_message(
                &mut ctx,
                preview::Message::CaptureLoaded { tag, result },
            ),
            Message::DownloadFinished(result) => {
                update::handle_download_finished(&mut ctx, result);
                Task::none()
            }
            Message::Notification(notification_message) => {
                self.notifications
                    .handle_message(notification_message, Instant::now());
                Task::none()
            }
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
            Message::LibraryLoaded(result) => {
                update::handle_library_loaded(&mut ctx, result);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            library: &self.library,
            gallery: &self.gallery,
            preview: &self.preview,
            progress: &self.progress,
            notifications: &self.notifications,
            window_size: self.window_size,
        })
    }
}

/// Scans `root` on the blocking pool.
fn scan_library(root: PathBuf, sort_order: SortOrder) -> Task<Message> {
    tracing::info!(directory = %root.display(), "scanning capture library");

    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || CaptureLibrary::open(&root, sort_order))
                .await
                .map_err(|e| Error::Io(format!("library scan task failed: {e}")))?
        },
        Message::LibraryLoaded,
    )
}
