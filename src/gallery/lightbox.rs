// SPDX-License-Identifier: MPL-2.0
//! Full-screen lightbox controller for the gallery.
//!
//! Owns which image (if any) is shown in the overlay and the saved state of
//! the grid's wheel lock. All transitions are synchronous; anything async
//! (decoding the full-resolution image, prefetching neighbours) is returned
//! as an [`Effect`] for the gallery screen to run.
//!
//! One overlay surface is rendered for every image; opening never rebuilds
//! the widget tree, it only changes which image the single slot shows.

use iced::keyboard::key::Named;
use iced::keyboard::Key;

/// Messages emitted by the lightbox overlay and thumbnail grid.
#[derive(Debug, Clone)]
pub enum Message {
    /// A thumbnail was activated.
    Open(usize),
    /// The dismiss control was activated.
    Dismiss,
    /// The backdrop itself was pressed (not one of the overlay controls).
    BackdropPressed,
    /// The image slot was pressed. Consumed so the press never falls
    /// through to the backdrop underneath.
    ImagePressed,
    /// The previous-image control was activated.
    Previous,
    /// The next-image control was activated.
    Next,
}

/// Side effects the gallery screen should perform after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Show `index` in the overlay and opportunistically prefetch the
    /// adjacent `preload` indices in the background.
    ShowImage { index: usize, preload: Vec<usize> },
}

/// Lightbox state. `current` doubles as the open flag: the overlay is open
/// exactly when an index is set, so "open with no index" cannot be
/// represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    len: usize,
    current: Option<usize>,
    saved_scroll_lock: Option<bool>,
}

impl State {
    /// Builds the controller for a gallery of `len` images. With an empty
    /// set every operation is a no-op.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: None,
            saved_scroll_lock: None,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Handles a lightbox message, updating the grid's wheel-lock flag in
    /// place and returning the effect to run.
    pub fn handle(&mut self, message: Message, grid_scroll_locked: &mut bool) -> Effect {
        match message {
            Message::Open(index) => self.open(index, grid_scroll_locked),
            Message::Dismiss | Message::BackdropPressed => self.close(grid_scroll_locked),
            Message::ImagePressed => Effect::None,
            Message::Previous => self.navigate(-1),
            Message::Next => self.navigate(1),
        }
    }

    /// Handles a keyboard key. Returns `None` when the key is not consumed
    /// (closed lightbox, or an unbound key), so the caller can let the event
    /// fall through to the grid.
    pub fn handle_key(&mut self, key: &Key, grid_scroll_locked: &mut bool) -> Option<Effect> {
        if !self.is_open() {
            return None;
        }

        match key {
            Key::Named(Named::Escape) => Some(self.close(grid_scroll_locked)),
            Key::Named(Named::ArrowLeft) => Some(self.navigate(-1)),
            Key::Named(Named::ArrowRight) => Some(self.navigate(1)),
            _ => None,
        }
    }

    /// Opens the overlay on `index`. Out-of-range indices (including any
    /// index into an empty set) are no-ops.
    ///
    /// The grid's wheel-lock flag is captured on the closed-to-open
    /// transition only, so re-opening while already open (or opening while
    /// the grid was locked for some other reason) never clobbers the saved
    /// value.
    pub fn open(&mut self, index: usize, grid_scroll_locked: &mut bool) -> Effect {
        if index >= self.len {
            return Effect::None;
        }

        if self.current.is_none() {
            self.saved_scroll_lock = Some(*grid_scroll_locked);
            *grid_scroll_locked = true;
        }

        self.current = Some(index);
        self.show_effect(index)
    }

    /// Closes the overlay, restoring the wheel-lock flag captured at open.
    /// No-op while closed.
    pub fn close(&mut self, grid_scroll_locked: &mut bool) -> Effect {
        if self.current.is_none() {
            return Effect::None;
        }

        self.current = None;
        if let Some(saved) = self.saved_scroll_lock.take() {
            *grid_scroll_locked = saved;
        }

        Effect::None
    }

    /// Steps `delta` images from the current one, wrapping in both
    /// directions. Any integer delta works. No-op while closed.
    pub fn navigate(&mut self, delta: i64) -> Effect {
        let Some(current) = self.current else {
            return Effect::None;
        };

        if self.len == 0 {
            return Effect::None;
        }

        let len = self.len as i64;
        let next = (current as i64 + delta).rem_euclid(len) as usize;
        self.current = Some(next);
        self.show_effect(next)
    }

    fn show_effect(&self, index: usize) -> Effect {
        Effect::ShowImage {
            index,
            preload: self.adjacent_indices(index),
        }
    }

    /// Previous and next neighbours of `index` with wraparound, deduplicated
    /// and excluding `index` itself (relevant for one- and two-image sets).
    fn adjacent_indices(&self, index: usize) -> Vec<usize> {
        if self.len < 2 {
            return Vec::new();
        }

        let len = self.len;
        let prev = (index + len - 1) % len;
        let next = (index + 1) % len;

        let mut indices = Vec::with_capacity(2);
        for candidate in [prev, next] {
            if candidate != index && !indices.contains(&candidate) {
                indices.push(candidate);
            }
        }
        indices
    }
}
