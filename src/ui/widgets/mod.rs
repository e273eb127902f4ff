// SPDX-License-Identifier: MPL-2.0
//! Custom widgets.

pub mod wheel_blocking_scrollable;

pub use wheel_blocking_scrollable::wheel_blocking_scrollable;
