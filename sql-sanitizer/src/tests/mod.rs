//! Integration-style tests exercising `sanitize` end to end, as opposed
//! to the per-module unit tests living alongside each scanner.
#![allow(clippy::unwrap_used, clippy::expect_used)]

mod sanitize_api;
