// SPDX-License-Identifier: MPL-2.0
//! User interface building blocks shared across screens.

pub mod about;
pub mod design_tokens;
pub mod navbar;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod widgets;
