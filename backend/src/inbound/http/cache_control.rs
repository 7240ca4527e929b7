//! Shared cache-control policies for HTTP handlers.

/// Responses that must never be stored by any cache.
pub const NO_STORE: &str = "no-store";

/// Build the cache-control header tuple for non-cacheable responses.
pub const fn no_store_header() -> (&'static str, &'static str) {
    ("Cache-Control", NO_STORE)
}
