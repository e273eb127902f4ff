// SPDX-License-Identifier: MPL-2.0
//! Cross-module integration tests: scanning a real directory into the
//! gallery, driving a full lightbox session, and round-tripping settings
//! through an override config directory.

use calico_gallery::app::config::{self, Config};
use calico_gallery::gallery::{self, lightbox};
use calico_gallery::hours::{ShopStatus, WeeklySchedule};
use calico_gallery::media::{self, PrefetchConfig};
use chrono::Weekday;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn write_fake_image(dir: &std::path::Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"fake").expect("failed to write fixture");
    path
}

#[test]
fn scanned_directory_flows_into_gallery_state() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    write_fake_image(temp_dir.path(), "b-tang.jpg");
    write_fake_image(temp_dir.path(), "a-guppy.png");
    write_fake_image(temp_dir.path(), "notes.txt");

    let paths = media::scan_gallery_dir(temp_dir.path()).expect("scan should succeed");
    assert_eq!(paths.len(), 2, "non-image files must be skipped");
    assert!(paths[0].ends_with("a-guppy.png"), "scan must sort by name");

    let (mut state, _task) =
        gallery::State::new(temp_dir.path().to_path_buf(), PrefetchConfig::default());
    let _ = state.handle(gallery::Message::ScanCompleted(Ok(paths)));

    assert_eq!(state.image_set().len(), 2);
    assert_eq!(
        state.image_set().get(0).unwrap().caption,
        "A guppy",
        "captions derive from file names"
    );
}

#[test]
fn full_lightbox_session_keeps_grid_lock_consistent() {
    let (mut state, _task) =
        gallery::State::new(PathBuf::from("/nowhere"), PrefetchConfig::default());
    let paths = ["/g/a.jpg", "/g/b.jpg", "/g/c.jpg"]
        .iter()
        .map(PathBuf::from)
        .collect();
    let _ = state.handle(gallery::Message::ScanCompleted(Ok(paths)));

    // Open, walk forward past the end, walk back, then dismiss.
    let _ = state.handle(gallery::Message::Lightbox(lightbox::Message::Open(2)));
    assert!(state.grid_scroll_locked());

    let _ = state.handle(gallery::Message::Lightbox(lightbox::Message::Next));
    assert_eq!(state.lightbox_index(), Some(0), "next wraps to the start");

    let _ = state.handle(gallery::Message::Lightbox(lightbox::Message::Previous));
    let _ = state.handle(gallery::Message::Lightbox(lightbox::Message::Previous));
    assert_eq!(state.lightbox_index(), Some(1));

    let _ = state.handle(gallery::Message::Lightbox(
        lightbox::Message::BackdropPressed,
    ));
    assert!(!state.is_lightbox_open());
    assert!(
        !state.grid_scroll_locked(),
        "dismiss must unlock grid scrolling"
    );
}

#[test]
fn settings_round_trip_through_override_directory() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let override_dir = temp_dir.path().to_path_buf();

    let mut config = Config::default();
    config.shop.seller = "reef-and-river".to_owned();
    config.gallery.prefetch_cache_mb = 64;

    config::save_with_override(&config, Some(override_dir.clone())).expect("save should succeed");

    let (loaded, warning) = config::load_with_override(Some(override_dir));
    assert!(warning.is_none());
    assert_eq!(loaded.shop.seller, "reef-and-river");
    assert_eq!(loaded.gallery.prefetch_cache_mb(), 64);
}

#[test]
fn default_schedule_matches_shop_week() {
    let schedule = WeeklySchedule::default();

    assert!(schedule.day(Weekday::Mon).is_some());
    assert!(schedule.day(Weekday::Tue).is_none());
    assert!(schedule.day(Weekday::Sat).is_some());
    assert!(schedule.day(Weekday::Sun).is_none());

    // Saturday at noon is open; the same minute on Sunday is not.
    assert_eq!(schedule.status_at(Weekday::Sat, 12 * 60), ShopStatus::Open);
    assert_eq!(schedule.status_at(Weekday::Sun, 12 * 60), ShopStatus::Closed);
}
