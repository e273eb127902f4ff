// SPDX-License-Identifier: MPL-2.0
//! The gallery screen: thumbnail grid, scroll-driven reveal, and the
//! full-screen lightbox overlay.

pub mod component;
pub mod grid;
pub mod image_set;
pub mod lightbox;
pub mod pane;
pub mod reveal;

pub use component::{Effect, Message, State};
