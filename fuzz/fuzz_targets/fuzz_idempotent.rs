#![no_main]

use libfuzzer_sys::fuzz_target;

// Sanitizing an already-sanitized statement must be a no-op: there are no
// literals left to mask and no comments left to strip (§8 invariant 3).
fuzz_target!(|data: &[u8]| {
    let Ok(sql) = std::str::from_utf8(data) else {
        return;
    };
    let first = sql_sanitizer::sanitize(Some(sql));
    let second = sql_sanitizer::sanitize(Some(&first.sanitized_sql));
    assert_eq!(first.sanitized_sql, second.sanitized_sql);
});
