// SPDX-License-Identifier: MPL-2.0
//! Shop screen component: fetch lifecycle and keep-fallback semantics.
//!
//! The screen starts on static fallback content. A fetch replaces it only
//! on success; any failure keeps whatever is currently shown, fallback or
//! previously loaded listings. A generation counter makes late responses
//! for superseded requests inert.

use crate::error::Error;
use crate::shop::client::{self, SellerItems};
use iced::Task;

/// Messages handled by the shop screen.
#[derive(Debug, Clone)]
pub enum Message {
    /// Issue a (re)fetch of the seller's listings.
    Refresh,
    Fetched {
        generation: u64,
        result: Result<SellerItems, Error>,
    },
}

/// Complete shop screen state.
pub struct State {
    base_url: String,
    seller: String,
    limit: u32,

    listings: Option<SellerItems>,
    fetching: bool,
    generation: u64,
}

impl State {
    #[must_use]
    pub fn new(base_url: String, seller: String, limit: u32) -> Self {
        Self {
            base_url,
            seller,
            limit: client::clamp_limit(limit),
            listings: None,
            fetching: false,
            generation: 0,
        }
    }

    /// Loaded listings, `None` while still on fallback content.
    #[must_use]
    pub fn listings(&self) -> Option<&SellerItems> {
        self.listings.as_ref()
    }

    #[must_use]
    pub fn is_fetching(&self) -> bool {
        self.fetching
    }

    #[must_use]
    pub fn seller(&self) -> &str {
        &self.seller
    }

    /// Kicks off the first fetch when the screen is shown. No-op while a
    /// fetch is already in flight or once listings have loaded.
    pub fn fetch_if_needed(&mut self) -> Task<Message> {
        if self.fetching || self.listings.is_some() {
            return Task::none();
        }
        self.start_fetch()
    }

    pub fn handle(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Refresh => self.start_fetch(),
            Message::Fetched { generation, result } => {
                if generation != self.generation {
                    // A newer request superseded this one.
                    return Task::none();
                }

                self.fetching = false;
                if let Ok(items) = result {
                    self.listings = Some(items);
                }
                // On failure the current content stays, fallback included.
                Task::none()
            }
        }
    }

    fn start_fetch(&mut self) -> Task<Message> {
        self.generation += 1;
        self.fetching = true;

        let generation = self.generation;
        let base_url = self.base_url.clone();
        let seller = self.seller.clone();
        let limit = self.limit;

        Task::perform(
            client::fetch_seller_items(base_url, seller, limit),
            move |result| Message::Fetched { generation, result },
        )
    }
}
