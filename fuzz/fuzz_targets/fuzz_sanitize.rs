#![no_main]

use libfuzzer_sys::fuzz_target;

// `sanitize` must never panic (§7) and must always produce a summary
// within the documented bound, for any input including invalid UTF-8.
fuzz_target!(|data: &[u8]| {
    let Ok(sql) = std::str::from_utf8(data) else {
        return;
    };
    let info = sql_sanitizer::sanitize(Some(sql));
    assert!(info.summary.len() <= sql_sanitizer::MAX_SUMMARY_LENGTH);
    assert!(info.sanitized_sql.len() <= sql.len());
});
