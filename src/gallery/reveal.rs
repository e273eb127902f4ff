// SPDX-License-Identifier: MPL-2.0
//! Scroll-driven reveal animation for the thumbnail grid.
//!
//! Each image fades in as it scrolls into view: its progress goes from 0 at
//! 98% of the viewport height to 1 at 70%, measured at a pivot point 30%
//! into the image. Progress is a one-way latch: once an image reaches 1 it
//! is complete and never recomputed, so scrolling back up does not re-hide
//! revealed images.
//!
//! Scroll and resize events do not recompute anything themselves. They only
//! request a pass; the app runs at most one pass per frame tick while a
//! request is pending, so a burst of raw events between two ticks costs a
//! single recompute.

use std::time::Duration;

/// Pivot point within an image, as a fraction of its rendered height.
pub const PIVOT_RATIO: f32 = 0.3;

/// Reveal starts when the pivot crosses this fraction of viewport height.
pub const START_RATIO: f32 = 0.98;

/// Reveal completes when the pivot crosses this fraction of viewport height.
pub const END_RATIO: f32 = 0.70;

/// Interval of the frame tick that drives pending passes.
pub const FRAME_TICK: Duration = Duration::from_millis(16);

/// Reveal progress for a pivot at `pivot` pixels from the viewport top,
/// in a viewport of `viewport_height` pixels. Clamped to [0, 1].
#[must_use]
pub fn progress(pivot: f32, viewport_height: f32) -> f32 {
    let start = START_RATIO * viewport_height;
    let end = END_RATIO * viewport_height;

    if pivot <= end {
        return 1.0;
    }
    if pivot >= start {
        return 0.0;
    }

    (1.0 - (pivot - end) / (start - end)).clamp(0.0, 1.0)
}

/// Per-image reveal state. A completed image has no live value; the view
/// switches to the terminal style and the scheduler skips it in passes.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Reveal {
    Pending(f32),
    Complete,
}

/// Coalescing reveal scheduler for the whole image set.
#[derive(Debug, Clone)]
pub struct Scheduler {
    images: Vec<Reveal>,
    pass_pending: bool,
}

impl Scheduler {
    /// Builds the scheduler for a gallery of `len` images, all hidden.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            images: vec![Reveal::Pending(0.0); len],
            pass_pending: false,
        }
    }

    /// Requests a recompute pass. Cheap and idempotent; called from every
    /// scroll and resize event.
    pub fn request_pass(&mut self) {
        self.pass_pending = true;
    }

    /// Whether a pass is pending. The frame-tick subscription runs only
    /// while this is true.
    #[must_use]
    pub fn is_pass_pending(&self) -> bool {
        self.pass_pending
    }

    /// Runs one recompute pass and clears the pending flag.
    ///
    /// `geometry` maps an image index to its (viewport-relative top,
    /// rendered height) in pixels. Completed images are skipped entirely.
    pub fn run_pass(
        &mut self,
        viewport_height: f32,
        geometry: impl Fn(usize) -> (f32, f32),
    ) {
        self.pass_pending = false;

        for (index, reveal) in self.images.iter_mut().enumerate() {
            if *reveal == Reveal::Complete {
                continue;
            }

            let (top, height) = geometry(index);
            let pivot = top + PIVOT_RATIO * height;
            let p = progress(pivot, viewport_height);

            *reveal = if p >= 1.0 {
                Reveal::Complete
            } else {
                Reveal::Pending(p)
            };
        }
    }

    /// Current progress of an image: the live value while pending, pinned
    /// at 1 once complete. Unknown indices read as 0.
    #[must_use]
    pub fn progress_of(&self, index: usize) -> f32 {
        match self.images.get(index) {
            Some(Reveal::Pending(p)) => *p,
            Some(Reveal::Complete) => 1.0,
            None => 0.0,
        }
    }

    /// Whether an image has latched complete.
    #[must_use]
    pub fn is_complete(&self, index: usize) -> bool {
        matches!(self.images.get(index), Some(Reveal::Complete))
    }
}
