//! Process-wide configuration knobs (§2a).
//!
//! There is exactly one: `cache_capacity`, read on every [`crate::sanitize`]
//! call and written rarely (typically once at process start, or from tests
//! and benchmarks that need a known cache size).

use std::sync::atomic::{AtomicI64, Ordering};

/// `cache_capacity` values `<= 0` disable the cache entirely (§6).
static CACHE_CAPACITY: AtomicI64 = AtomicI64::new(0);

/// Returns the currently configured cache capacity.
pub fn cache_capacity() -> i64 {
    CACHE_CAPACITY.load(Ordering::Relaxed)
}

/// Sets the process-wide cache capacity. Exposed for tests and benchmarks
/// that need a deterministic cache size; production callers typically set
/// this once during startup.
pub fn set_cache_capacity(capacity: i64) {
    #[cfg(feature = "tracing")]
    tracing::debug!(capacity, "sql_sanitizer cache capacity updated");
    CACHE_CAPACITY.store(capacity, Ordering::Relaxed);
}

/// Whether the cache is currently enabled (`cache_capacity > 0`).
pub fn cache_enabled() -> bool {
    cache_capacity() > 0
}
