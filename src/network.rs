//! Network defaults for the storefront SDK.

/// Default REST API base URL (local development backend).
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";

/// Default per-request timeout, in seconds (native only).
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default TTL for cached catalog items, in seconds.
pub const DEFAULT_ITEM_CACHE_TTL_SECS: u64 = 60;
