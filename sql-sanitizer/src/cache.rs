//! Process-wide result cache (the other half of component C4, §5's only
//! *long-lived* shared state).
//!
//! Keyed by the raw SQL text, gated by [`crate::config::cache_capacity`].
//! Lookup is always attempted (even with the cache disabled it's simply
//! always empty); insertion is best-effort and may race past `capacity`
//! under concurrent writers, which §4.1 calls out as acceptable.

use dashmap::DashMap;
use once_cell::sync::Lazy;

use crate::config;
use crate::SqlStatementInfo;

static CACHE: Lazy<DashMap<String, SqlStatementInfo>> = Lazy::new(|| {
    #[cfg(feature = "tracing")]
    tracing::debug!("sql_sanitizer result cache initialized");
    DashMap::new()
});

/// Returns a cached result for `sql`, if present.
pub fn get(sql: &str) -> Option<SqlStatementInfo> {
    CACHE.get(sql).map(|entry| entry.value().clone())
}

/// Inserts `info` for `sql` if the cache is enabled and not (yet) at
/// capacity. A fast-size check happens before the insert-if-absent so a
/// full cache doesn't pay for a map entry lookup on every call; per §4.1
/// this can still let concurrent writers push size marginally past
/// `capacity`, which is acceptable.
pub fn insert_if_room(sql: &str, info: SqlStatementInfo) {
    let capacity = config::cache_capacity();
    if capacity <= 0 {
        return;
    }
    if CACHE.len() as i64 >= capacity {
        return;
    }
    CACHE.entry(sql.to_owned()).or_insert(info);
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use std::sync::Mutex;

    static SERIAL: Mutex<()> = Mutex::new(());

    fn info(summary: &str) -> SqlStatementInfo {
        SqlStatementInfo {
            sanitized_sql: summary.to_owned(),
            summary: summary.to_owned(),
        }
    }

    #[test]
    fn disabled_cache_never_inserts() {
        let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
        config::set_cache_capacity(0);
        let key = "cache::disabled_cache_never_inserts";
        insert_if_room(key, info("x"));
        assert!(get(key).is_none());
    }

    #[test]
    fn enabled_cache_inserts_and_serves() {
        let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
        config::set_cache_capacity(1000);
        let key = "cache::enabled_cache_inserts_and_serves";
        insert_if_room(key, info("y"));
        assert_eq!(get(key), Some(info("y")));
        config::set_cache_capacity(0);
    }

    #[test]
    fn capacity_zero_after_enabling_stops_new_inserts_but_keeps_old() {
        let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
        config::set_cache_capacity(1000);
        let key = "cache::capacity_zero_after_enabling_stops_new_inserts_but_keeps_old";
        insert_if_room(key, info("z"));
        config::set_cache_capacity(0);
        assert_eq!(get(key), Some(info("z")));
        let key2 = "cache::capacity_zero_after_enabling_stops_new_inserts_but_keeps_old::2";
        insert_if_room(key2, info("w"));
        assert!(get(key2).is_none());
    }
}
