// SPDX-License-Identifier: MPL-2.0
//! Gallery screen component encapsulating state and update logic.
//!
//! Owns the image set, the lightbox controller, the reveal scheduler, and
//! the prefetch cache. The app shell forwards messages here and runs the
//! returned tasks; keyboard events are routed in only while the lightbox is
//! open.

use crate::error::Error;
use crate::gallery::grid::GridLayout;
use crate::gallery::image_set::ImageSet;
use crate::gallery::{lightbox, reveal};
use crate::media::{self, ImageData, ImagePrefetchCache, PrefetchConfig};
use crate::ui::design_tokens::spacing;
use iced::keyboard::Key;
use iced::widget::scrollable::AbsoluteOffset;
use iced::{Rectangle, Task};
use std::path::PathBuf;

/// Identifier used for the grid scrollable widget.
pub const SCROLLABLE_ID: &str = "gallery-grid-scrollable";

/// Padding around the grid content, all sides.
pub const GRID_PADDING: f32 = spacing::LG;

/// Messages handled by the gallery screen.
#[derive(Debug, Clone)]
pub enum Message {
    ScanCompleted(Result<Vec<PathBuf>, Error>),
    ThumbnailDecoded {
        index: usize,
        result: Result<ImageData, Error>,
    },
    Lightbox(lightbox::Message),
    GridScrolled {
        bounds: Rectangle,
        offset: AbsoluteOffset,
    },
    RevealTick,
    /// The image requested for display in the lightbox finished decoding.
    FullImageLoaded(PathBuf, Result<ImageData, Error>),
    /// A speculative neighbour prefetch finished.
    Prefetched(PathBuf, Result<ImageData, Error>),
}

/// Side effects the application should perform after handling a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Show a warning notification.
    Warn(String),
}

/// Complete gallery screen state.
pub struct State {
    image_set: ImageSet,
    lightbox: lightbox::State,
    reveal: reveal::Scheduler,
    layout: GridLayout,
    prefetch: ImagePrefetchCache,

    grid_scroll_locked: bool,
    scroll_offset: f32,
    viewport_height: f32,
    content_width: f32,
    scanning: bool,

    /// Full-resolution image currently shown in the lightbox, once a decode
    /// or cache hit has delivered it. Until then the view falls back to the
    /// thumbnail so the visible swap never waits.
    full_image: Option<(PathBuf, ImageData)>,
}

impl State {
    /// Builds the gallery screen and kicks off the one-time directory scan.
    pub fn new(gallery_dir: PathBuf, prefetch_config: PrefetchConfig) -> (Self, Task<Message>) {
        let state = Self {
            image_set: ImageSet::default(),
            lightbox: lightbox::State::new(0),
            reveal: reveal::Scheduler::new(0),
            layout: GridLayout::compute(0.0, 0),
            prefetch: ImagePrefetchCache::new(prefetch_config),
            grid_scroll_locked: false,
            scroll_offset: 0.0,
            viewport_height: 0.0,
            content_width: 0.0,
            scanning: true,
            full_image: None,
        };

        let task = Task::perform(
            async move {
                tokio::task::spawn_blocking(move || media::scan_gallery_dir(&gallery_dir))
                    .await
                    .unwrap_or_else(|e| Err(Error::Io(e.to_string())))
            },
            Message::ScanCompleted,
        );

        (state, task)
    }

    pub fn image_set(&self) -> &ImageSet {
        &self.image_set
    }

    #[must_use]
    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    #[must_use]
    pub fn is_scanning(&self) -> bool {
        self.scanning
    }

    #[must_use]
    pub fn is_lightbox_open(&self) -> bool {
        self.lightbox.is_open()
    }

    #[must_use]
    pub fn lightbox_index(&self) -> Option<usize> {
        self.lightbox.current_index()
    }

    #[must_use]
    pub fn grid_scroll_locked(&self) -> bool {
        self.grid_scroll_locked
    }

    /// Whether the frame-tick subscription should be running.
    #[must_use]
    pub fn reveal_pass_pending(&self) -> bool {
        self.reveal.is_pass_pending()
    }

    /// Reveal progress of a grid image, for the view.
    #[must_use]
    pub fn reveal_progress(&self, index: usize) -> f32 {
        self.reveal.progress_of(index)
    }

    /// Best-available image for the lightbox slot: the decoded
    /// full-resolution image when it has landed, the thumbnail otherwise.
    #[must_use]
    pub fn lightbox_image(&self) -> Option<&ImageData> {
        let index = self.lightbox.current_index()?;
        let entry = self.image_set.get(index)?;

        if let Some((path, data)) = &self.full_image {
            if *path == entry.path {
                return Some(data);
            }
        }

        entry.thumbnail.as_ref()
    }

    /// Handles a gallery message.
    pub fn handle(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::ScanCompleted(result) => self.on_scan_completed(result),
            Message::ThumbnailDecoded { index, result } => {
                match result {
                    Ok(thumbnail) => self.image_set.set_thumbnail(index, thumbnail),
                    Err(_) => self.image_set.mark_decode_failed(index),
                }
                (Effect::None, Task::none())
            }
            Message::Lightbox(msg) => {
                let effect = self.lightbox.handle(msg, &mut self.grid_scroll_locked);
                (Effect::None, self.run_lightbox_effect(effect))
            }
            Message::GridScrolled { bounds, offset } => {
                self.scroll_offset = offset.y;
                self.viewport_height = bounds.height;
                self.set_content_width(bounds.width - 2.0 * GRID_PADDING);
                self.reveal.request_pass();
                (Effect::None, Task::none())
            }
            Message::RevealTick => {
                self.run_reveal_pass();
                (Effect::None, Task::none())
            }
            Message::FullImageLoaded(path, result) => {
                if let Ok(data) = result {
                    self.deliver_full_image(path, data);
                }
                (Effect::None, Task::none())
            }
            Message::Prefetched(path, result) => {
                if let Ok(data) = result {
                    self.deliver_full_image(path, data);
                }
                (Effect::None, Task::none())
            }
        }
    }

    /// Routes a keyboard key to the lightbox. Returns the follow-up task and
    /// whether the key was consumed; keys are never consumed while the
    /// lightbox is closed.
    pub fn handle_key(&mut self, key: &Key) -> (bool, Task<Message>) {
        match self.lightbox.handle_key(key, &mut self.grid_scroll_locked) {
            Some(effect) => (true, self.run_lightbox_effect(effect)),
            None => (false, Task::none()),
        }
    }

    /// The window was resized; recompute the grid and schedule a reveal pass.
    pub fn handle_resize(&mut self, width: f32, height: f32) {
        self.viewport_height = (height - 2.0 * GRID_PADDING).max(0.0);
        self.set_content_width(width - 2.0 * GRID_PADDING);
        self.reveal.request_pass();
    }

    fn set_content_width(&mut self, width: f32) {
        let width = width.max(0.0);
        if (width - self.content_width).abs() > f32::EPSILON {
            self.content_width = width;
            self.layout = GridLayout::compute(width, self.image_set.len());
        }
    }

    fn on_scan_completed(
        &mut self,
        result: Result<Vec<PathBuf>, Error>,
    ) -> (Effect, Task<Message>) {
        self.scanning = false;

        let paths = match result {
            Ok(paths) => paths,
            Err(e) => {
                return (
                    Effect::Warn(format!("Could not read the gallery directory: {e}")),
                    Task::none(),
                );
            }
        };

        if paths.is_empty() {
            return (
                Effect::Warn("The gallery directory contains no images.".to_owned()),
                Task::none(),
            );
        }

        self.image_set = ImageSet::from_paths(paths);
        let len = self.image_set.len();
        self.lightbox = lightbox::State::new(len);
        self.reveal = reveal::Scheduler::new(len);
        self.layout = GridLayout::compute(self.content_width, len);

        // Above-the-fold images must reveal without a first scroll event.
        self.reveal.request_pass();

        let decodes = self
            .image_set
            .paths()
            .into_iter()
            .enumerate()
            .map(|(index, path)| {
                Task::perform(
                    async move {
                        tokio::task::spawn_blocking(move || media::load_thumbnail(&path))
                            .await
                            .unwrap_or_else(|e| Err(Error::Io(e.to_string())))
                    },
                    move |result| Message::ThumbnailDecoded { index, result },
                )
            });

        (Effect::None, Task::batch(decodes))
    }

    fn run_reveal_pass(&mut self) {
        if !self.reveal.is_pass_pending() {
            return;
        }

        let layout = self.layout;
        let scroll_offset = self.scroll_offset;
        self.reveal.run_pass(self.viewport_height, |index| {
            (
                layout.item_top(index) - scroll_offset + GRID_PADDING,
                layout.item_height(),
            )
        });
    }

    /// Interprets a lightbox effect: resolve the requested image from the
    /// prefetch cache or decode it, and fire the neighbour preloads.
    fn run_lightbox_effect(&mut self, effect: lightbox::Effect) -> Task<Message> {
        match effect {
            lightbox::Effect::None => {
                if !self.lightbox.is_open() {
                    self.full_image = None;
                }
                Task::none()
            }
            lightbox::Effect::ShowImage { index, preload } => {
                let mut tasks = Vec::new();

                if let Some(entry) = self.image_set.get(index) {
                    let path = entry.path.clone();
                    if let Some(data) = self.prefetch.get(&path) {
                        self.full_image = Some((path, data));
                    } else {
                        self.full_image = None;
                        tasks.push(Task::perform(
                            media::prefetch::load_image_for_prefetch(path),
                            |(p, r)| Message::FullImageLoaded(p, r),
                        ));
                    }
                }

                let preload_paths: Vec<PathBuf> = preload
                    .iter()
                    .filter_map(|&i| self.image_set.get(i))
                    .map(|entry| entry.path.clone())
                    .collect();

                for path in self.prefetch.paths_to_prefetch(&preload_paths) {
                    tasks.push(Task::perform(
                        media::prefetch::load_image_for_prefetch(path),
                        |(p, r)| Message::Prefetched(p, r),
                    ));
                }

                Task::batch(tasks)
            }
        }
    }

    /// A decode landed: populate the cache and, if the lightbox still shows
    /// that path, upgrade the displayed image. A late result for a
    /// superseded index only warms the cache.
    fn deliver_full_image(&mut self, path: PathBuf, data: ImageData) {
        let current_path = self
            .lightbox
            .current_index()
            .and_then(|i| self.image_set.get(i))
            .map(|entry| entry.path.clone());

        self.prefetch.insert(path.clone(), data.clone());

        if current_path.as_deref() == Some(path.as_path()) {
            self.full_image = Some((path, data));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::key::Named;

    fn scanned_state(paths: &[&str]) -> State {
        let (mut state, _task) = State::new(PathBuf::from("/nowhere"), PrefetchConfig::default());
        let paths = paths.iter().map(PathBuf::from).collect();
        let _ = state.handle(Message::ScanCompleted(Ok(paths)));
        state
    }

    fn sample_image() -> ImageData {
        ImageData::from_rgba(2, 2, vec![0u8; 16])
    }

    #[test]
    fn scan_success_builds_gallery() {
        let state = scanned_state(&["/g/a.jpg", "/g/b.jpg", "/g/c.jpg"]);

        assert!(!state.is_scanning());
        assert_eq!(state.image_set().len(), 3);
        assert!(!state.is_lightbox_open());
        assert!(
            state.reveal_pass_pending(),
            "a startup reveal pass must be requested"
        );
    }

    #[test]
    fn scan_failure_warns_and_leaves_empty_gallery() {
        let (mut state, _task) = State::new(PathBuf::from("/nowhere"), PrefetchConfig::default());
        let (effect, _task) = state.handle(Message::ScanCompleted(Err(Error::Io("denied".into()))));

        assert!(matches!(effect, Effect::Warn(_)));
        assert!(state.image_set().is_empty());
        assert!(!state.is_scanning());
    }

    #[test]
    fn empty_scan_warns() {
        let (mut state, _task) = State::new(PathBuf::from("/nowhere"), PrefetchConfig::default());
        let (effect, _task) = state.handle(Message::ScanCompleted(Ok(Vec::new())));

        assert!(matches!(effect, Effect::Warn(_)));
        assert!(state.image_set().is_empty());
    }

    #[test]
    fn open_locks_grid_and_close_restores() {
        let mut state = scanned_state(&["/g/a.jpg", "/g/b.jpg"]);

        let _ = state.handle(Message::Lightbox(lightbox::Message::Open(1)));
        assert!(state.is_lightbox_open());
        assert_eq!(state.lightbox_index(), Some(1));
        assert!(state.grid_scroll_locked());

        let _ = state.handle(Message::Lightbox(lightbox::Message::Dismiss));
        assert!(!state.is_lightbox_open());
        assert!(!state.grid_scroll_locked());
    }

    #[test]
    fn thumbnail_failure_keeps_entry() {
        let mut state = scanned_state(&["/g/a.jpg", "/g/b.jpg"]);

        let _ = state.handle(Message::ThumbnailDecoded {
            index: 0,
            result: Err(Error::Image("truncated".into())),
        });

        assert_eq!(state.image_set().len(), 2);
        assert!(state.image_set().get(0).unwrap().decode_failed);
    }

    #[test]
    fn scroll_requests_reveal_pass_and_tick_runs_it() {
        let mut state = scanned_state(&["/g/a.jpg"]);
        // Drain the startup request first.
        let _ = state.handle(Message::RevealTick);
        assert!(!state.reveal_pass_pending());

        let _ = state.handle(Message::GridScrolled {
            bounds: Rectangle::new(iced::Point::ORIGIN, iced::Size::new(800.0, 600.0)),
            offset: AbsoluteOffset { x: 0.0, y: 120.0 },
        });
        let _ = state.handle(Message::GridScrolled {
            bounds: Rectangle::new(iced::Point::ORIGIN, iced::Size::new(800.0, 600.0)),
            offset: AbsoluteOffset { x: 0.0, y: 140.0 },
        });
        assert!(state.reveal_pass_pending());

        let _ = state.handle(Message::RevealTick);
        assert!(!state.reveal_pass_pending());
    }

    #[test]
    fn keyboard_ignored_while_closed() {
        let mut state = scanned_state(&["/g/a.jpg", "/g/b.jpg"]);

        let (consumed, _task) = state.handle_key(&Key::Named(Named::ArrowRight));
        assert!(!consumed);
        assert!(!state.is_lightbox_open());
    }

    #[test]
    fn escape_closes_open_lightbox() {
        let mut state = scanned_state(&["/g/a.jpg", "/g/b.jpg"]);
        let _ = state.handle(Message::Lightbox(lightbox::Message::Open(0)));

        let (consumed, _task) = state.handle_key(&Key::Named(Named::Escape));
        assert!(consumed);
        assert!(!state.is_lightbox_open());
        assert!(!state.grid_scroll_locked());
    }

    #[test]
    fn late_decode_for_superseded_image_only_warms_cache() {
        let mut state = scanned_state(&["/g/a.jpg", "/g/b.jpg"]);
        let _ = state.handle(Message::Lightbox(lightbox::Message::Open(0)));
        let _ = state.handle(Message::Lightbox(lightbox::Message::Next));

        // A decode for the previous image arrives after navigating away.
        let _ = state.handle(Message::FullImageLoaded(
            PathBuf::from("/g/a.jpg"),
            Ok(sample_image()),
        ));

        assert_eq!(state.lightbox_index(), Some(1));
        assert!(state.full_image.is_none());
        assert!(state.prefetch.contains(std::path::Path::new("/g/a.jpg")));
    }

    #[test]
    fn decode_for_current_image_upgrades_display() {
        let mut state = scanned_state(&["/g/a.jpg", "/g/b.jpg"]);
        let _ = state.handle(Message::Lightbox(lightbox::Message::Open(0)));

        let _ = state.handle(Message::FullImageLoaded(
            PathBuf::from("/g/a.jpg"),
            Ok(sample_image()),
        ));

        assert!(state.lightbox_image().is_some());
    }

    #[test]
    fn failed_preload_leaves_visible_state_untouched() {
        let mut state = scanned_state(&["/g/a.jpg", "/g/b.jpg"]);
        let _ = state.handle(Message::Lightbox(lightbox::Message::Open(0)));

        let (effect, _task) = state.handle(Message::Prefetched(
            PathBuf::from("/g/b.jpg"),
            Err(Error::Image("corrupt".into())),
        ));

        assert_eq!(effect, Effect::None);
        assert_eq!(state.lightbox_index(), Some(0));
        assert!(state.is_lightbox_open());
    }

    #[test]
    fn image_pressed_inside_overlay_does_not_close() {
        let mut state = scanned_state(&["/g/a.jpg", "/g/b.jpg"]);
        let _ = state.handle(Message::Lightbox(lightbox::Message::Open(0)));

        let _ = state.handle(Message::Lightbox(lightbox::Message::ImagePressed));
        assert!(state.is_lightbox_open());
        assert_eq!(state.lightbox_index(), Some(0));
    }

    #[test]
    fn resize_recomputes_layout_and_requests_pass() {
        let mut state = scanned_state(&["/g/a.jpg"; 9]);
        let _ = state.handle(Message::RevealTick);

        state.handle_resize(848.0, 600.0);
        assert_eq!(state.layout().columns, 3);
        assert!(state.reveal_pass_pending());
    }
}
