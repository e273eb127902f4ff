// SPDX-License-Identifier: MPL-2.0
//! The used-equipment screen: marketplace proxy client and listing cards.

pub mod client;
pub mod component;
pub mod pane;

pub use client::{clamp_limit, Listing, SellerItems, DEFAULT_LIMIT, MAX_LIMIT, MIN_LIMIT};
pub use component::{Message, State};
