// SPDX-License-Identifier: MPL-2.0
use approx::assert_abs_diff_eq;
use capture_viewer::app::config::{self, Config, FitMode, SortOrder};
use capture_viewer::app::i18n::fluent::I18n;
use capture_viewer::capture::CaptureLibrary;
use capture_viewer::ui::preview::{self, Effect};
use iced::widget::scrollable::RelativeOffset;
use iced::Size;
use image_rs::{Rgba, RgbaImage};
use std::path::Path;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn write_png(dir: &Path, name: &str, width: u32, height: u32) {
    RgbaImage::from_pixel(width, height, Rgba([200, 100, 50, 255]))
        .save(dir.join(name))
        .expect("write test png");
}

/// Runs the lookup requested by `effects` the way the application does and
/// returns the message that would come back.
async fn resolve_lookup(library: &CaptureLibrary, effects: &[Effect]) -> preview::Message {
    let (id, tag) = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::FindCapture { id, tag } => Some((id.clone(), *tag)),
            _ => None,
        })
        .expect("a lookup was requested");

    preview::Message::CaptureLoaded {
        tag,
        result: library.find_capture(id).await,
    }
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "fr");

    // CLI wins over config
    let i18n = I18n::new(Some("en-US".to_string()), &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_invalid_config_falls_back_to_defaults_with_warning() {
    let dir = tempdir().expect("temp dir");
    std::fs::write(dir.path().join("settings.toml"), "[preview\nbroken").expect("write");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some(config::CONFIG_LOAD_WARNING));
}

#[tokio::test]
async fn test_browse_library_in_preview() {
    let dir = tempdir().expect("temp dir");
    write_png(dir.path(), "a.png", 2000, 1000);
    write_png(dir.path(), "b.png", 100, 2000);
    write_png(dir.path(), "c.png", 400, 300);

    let library = CaptureLibrary::open(dir.path(), SortOrder::Alphabetical).expect("scan");
    assert_eq!(library.len(), 3);

    let mut config = Config::default();
    config.preview.fit_mode = FitMode::TwoPass;
    let mut state = preview::State::new(&config.preview);
    state.handle_message(preview::Message::WindowResized(Size::new(1000.0, 690.0)));

    let gallery_offset = RelativeOffset { x: 0.0, y: 0.35 };
    let now = Instant::now();
    let effects = state.show(0, library.collection(), gallery_offset, now);
    assert!(matches!(effects.first(), Some(Effect::BeginProgress)));

    let loaded = resolve_lookup(&library, &effects).await;
    let effects = state.handle_message(loaded);
    assert!(matches!(effects.as_slice(), [Effect::EndProgress]));

    // Budget is 800x600 for a 1000x690 window
    let fitted = state.fitted_size().expect("capture fitted");
    assert_abs_diff_eq!(fitted.width, 800.0, epsilon = 1e-3);
    assert_abs_diff_eq!(fitted.height, 400.0, epsilon = 1e-3);
    assert!(!state.controls().previous_enabled);
    assert!(state.controls().next_enabled);

    let effects = state.handle_message(preview::Message::NextPressed);
    let loaded = resolve_lookup(&library, &effects).await;
    state.handle_message(loaded);

    assert_eq!(state.current_index(), Some(1));
    let fitted = state.fitted_size().expect("capture fitted");
    assert_abs_diff_eq!(fitted.width, 30.0, epsilon = 1e-3);
    assert_abs_diff_eq!(fitted.height, 600.0, epsilon = 1e-3);

    let effects = state.handle_message(preview::Message::NextPressed);
    let loaded = resolve_lookup(&library, &effects).await;
    state.handle_message(loaded);

    assert_eq!(state.current_index(), Some(2));
    assert!(!state.controls().next_enabled);

    // Let the open transition finish, then close and wait for the gallery.
    let opened = now + Duration::from_secs(2);
    state.handle_message(preview::Message::Tick(opened));
    assert!(state.is_open());

    state.close_dialog(opened);
    let effects = state.handle_message(preview::Message::Tick(opened + Duration::from_secs(2)));

    assert!(effects
        .iter()
        .any(|effect| matches!(effect, Effect::RestoreGalleryScroll(offset) if offset.y == 0.35)));
    assert!(!state.is_open());
    assert!(!state.is_transitioning());
}

#[tokio::test]
async fn test_capture_removed_after_scan_shows_failure() {
    let dir = tempdir().expect("temp dir");
    write_png(dir.path(), "only.png", 10, 10);

    let library = CaptureLibrary::open(dir.path(), SortOrder::Alphabetical).expect("scan");
    std::fs::remove_file(dir.path().join("only.png")).expect("remove");

    let mut state = preview::State::default();
    let effects = state.show(0, library.collection(), RelativeOffset::START, Instant::now());
    let loaded = resolve_lookup(&library, &effects).await;
    let effects = state.handle_message(loaded);

    assert!(state.load_failure().is_some());
    assert!(state.current_capture().is_none());
    assert!(effects
        .iter()
        .any(|effect| matches!(effect, Effect::ShowLoadFailure { .. })));
    assert!(effects
        .iter()
        .any(|effect| matches!(effect, Effect::EndProgress)));
}
