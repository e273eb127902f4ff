// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module is the single source of truth for defaults and the clamp
//! bounds applied to out-of-range values loaded from `settings.toml`.

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default prefetch cache size in megabytes for the lightbox.
pub const DEFAULT_PREFETCH_CACHE_MB: u32 = 32;

/// Minimum prefetch cache size in megabytes.
pub const MIN_PREFETCH_CACHE_MB: u32 = 8;

/// Maximum prefetch cache size in megabytes.
pub const MAX_PREFETCH_CACHE_MB: u32 = 128;

/// Default maximum number of images held in the prefetch cache.
pub const DEFAULT_PREFETCH_MAX_IMAGES: u32 = 16;

/// Minimum number of images held in the prefetch cache.
pub const MIN_PREFETCH_MAX_IMAGES: u32 = 4;

/// Maximum number of images held in the prefetch cache.
pub const MAX_PREFETCH_MAX_IMAGES: u32 = 32;

// ==========================================================================
// Shop Defaults
// ==========================================================================

/// Default marketplace proxy base URL.
pub const DEFAULT_PROXY_BASE_URL: &str = "http://localhost:8787";

/// Default marketplace seller account.
pub const DEFAULT_SELLER: &str = "calico-aquatics";

/// Default listing count per fetch.
pub const DEFAULT_SHOP_LIMIT: u32 = 24;

/// Minimum listing count per fetch (the proxy's clamp floor).
pub const MIN_SHOP_LIMIT: u32 = 1;

/// Maximum listing count per fetch (the proxy's clamp ceiling).
pub const MAX_SHOP_LIMIT: u32 = 50;

// ==========================================================================
// Contact Defaults
// ==========================================================================

/// Default form submission endpoint.
pub const DEFAULT_CONTACT_ENDPOINT: &str = "http://localhost:8787/api/contact";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Prefetch cache validation
    assert!(MIN_PREFETCH_CACHE_MB > 0);
    assert!(MAX_PREFETCH_CACHE_MB >= MIN_PREFETCH_CACHE_MB);
    assert!(DEFAULT_PREFETCH_CACHE_MB >= MIN_PREFETCH_CACHE_MB);
    assert!(DEFAULT_PREFETCH_CACHE_MB <= MAX_PREFETCH_CACHE_MB);

    // Prefetch image count validation
    assert!(MIN_PREFETCH_MAX_IMAGES > 0);
    assert!(MAX_PREFETCH_MAX_IMAGES >= MIN_PREFETCH_MAX_IMAGES);
    assert!(DEFAULT_PREFETCH_MAX_IMAGES >= MIN_PREFETCH_MAX_IMAGES);
    assert!(DEFAULT_PREFETCH_MAX_IMAGES <= MAX_PREFETCH_MAX_IMAGES);

    // Shop limit validation
    assert!(MIN_SHOP_LIMIT > 0);
    assert!(MAX_SHOP_LIMIT >= MIN_SHOP_LIMIT);
    assert!(DEFAULT_SHOP_LIMIT >= MIN_SHOP_LIMIT);
    assert!(DEFAULT_SHOP_LIMIT <= MAX_SHOP_LIMIT);
};
