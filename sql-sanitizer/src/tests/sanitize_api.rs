//! Tests against the public `sanitize` entry point: absent-input
//! handling and cache transparency, as opposed to scan-pipeline shape
//! (`scenarios.rs`) or universal properties (`invariants.rs`).

use crate::{sanitize, set_cache_capacity, MAX_SUMMARY_LENGTH};

#[test]
fn none_input_is_empty() {
    assert!(sanitize(None).is_empty());
}

#[test]
fn empty_string_input_is_empty() {
    assert!(sanitize(Some("")).is_empty());
}

#[test]
fn repeated_calls_are_idempotent_through_the_cache() {
    set_cache_capacity(100);
    let first = sanitize(Some("SELECT * FROM t WHERE id = 1"));
    let second = sanitize(Some("SELECT * FROM t WHERE id = 1"));
    assert_eq!(first, second);
    set_cache_capacity(0);
}

#[test]
fn summary_never_exceeds_max_length() {
    let long_name = "x".repeat(1000);
    let sql = format!("SELECT * FROM {long_name}");
    let info = sanitize(Some(&sql));
    assert!(info.summary.len() <= MAX_SUMMARY_LENGTH);
}
