// SPDX-License-Identifier: MPL-2.0
//! `calico_gallery` is the desktop showcase app for the Calico Aquatics
//! shop, built with the Iced GUI framework.
//!
//! It presents the photo gallery with a full-screen lightbox, the live
//! marketplace listings, opening hours, and a contact form.

#![doc(html_root_url = "https://docs.rs/calico_gallery/0.2.0")]

pub mod app;
pub mod contact;
pub mod error;
pub mod gallery;
pub mod hours;
pub mod media;
pub mod shop;
pub mod ui;
