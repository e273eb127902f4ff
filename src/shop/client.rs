// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the marketplace proxy.
//!
//! The proxy exposes `GET /api/ebay/seller-items?seller=...&limit=...` and
//! returns a fixed JSON shape. The proxy clamps `limit` server-side; the
//! same clamp is applied here before the request is built so the two agree.

use crate::error::Result;
use serde::Deserialize;

/// Smallest accepted listing count per request.
pub const MIN_LIMIT: u32 = 1;

/// Largest accepted listing count per request.
pub const MAX_LIMIT: u32 = 50;

/// Default listing count per request.
pub const DEFAULT_LIMIT: u32 = 24;

/// Clamps a requested listing count to the proxy's accepted range.
#[must_use]
pub fn clamp_limit(limit: u32) -> u32 {
    limit.clamp(MIN_LIMIT, MAX_LIMIT)
}

/// One marketplace listing. Every field except `id` and `title` may be
/// missing from the wire; the view degrades to placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default, rename = "listingType")]
    pub listing_type: Option<String>,
}

impl Listing {
    /// `"12.50 GBP"`, or a placeholder when the price is missing.
    #[must_use]
    pub fn price_label(&self) -> String {
        match (&self.price, &self.currency) {
            (Some(price), Some(currency)) => format!("{price} {currency}"),
            (Some(price), None) => price.clone(),
            _ => "Price on request".to_owned(),
        }
    }
}

/// The proxy's response payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SellerItems {
    pub seller: String,
    pub count: u32,
    pub items: Vec<Listing>,
}

/// Fetches the seller's current listings from the proxy.
///
/// # Errors
///
/// Returns [`crate::error::Error::Http`] on transport failures, non-success
/// status codes, and malformed payloads.
pub async fn fetch_seller_items(
    base_url: String,
    seller: String,
    limit: u32,
) -> Result<SellerItems> {
    let limit = clamp_limit(limit);
    let url = format!("{}/api/ebay/seller-items", base_url.trim_end_matches('/'));

    let response = reqwest::Client::new()
        .get(&url)
        .query(&[("seller", seller.as_str()), ("limit", &limit.to_string())])
        .send()
        .await?
        .error_for_status()?;

    let items = response.json::<SellerItems>().await?;
    Ok(items)
}
