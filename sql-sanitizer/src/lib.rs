#![doc = include_str!("../README.md")]

mod cache;
mod comment;
mod config;
mod keyword;
mod literal;
mod pool;
mod scan;

pub use config::{cache_capacity, cache_enabled, set_cache_capacity};
pub use keyword::MAX_SUMMARY_LENGTH;

/// The result of [`sanitize`]: the input statement with every literal
/// value masked out, and a short summary of its shape.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SqlStatementInfo {
    /// The input SQL with every string, hex, and numeric literal replaced
    /// by a single `?`, and every comment stripped.
    pub sanitized_sql: String,
    /// A bounded (`<= MAX_SUMMARY_LENGTH` bytes) description of the
    /// statement's shape: its leading verb and the identifiers it
    /// targets, space-separated.
    pub summary: String,
}

impl SqlStatementInfo {
    /// True when both `sanitized_sql` and `summary` are empty, which is
    /// exactly the result `sanitize` returns for `None` or empty input.
    pub fn is_empty(&self) -> bool {
        self.sanitized_sql.is_empty() && self.summary.is_empty()
    }
}

/// Sanitizes a SQL statement: masks out literal values and strips
/// comments, and produces a short summary of the statement's shape.
///
/// Total over its input (§7): `None` and the empty string both produce an
/// empty [`SqlStatementInfo`], and there is no malformed input this
/// function can refuse — unterminated literals and comments simply
/// consume to the end of the statement. Results are served from (and, if
/// the cache is enabled via [`set_cache_capacity`], written back to) a
/// process-wide cache keyed on the exact input text.
pub fn sanitize(sql: Option<&str>) -> SqlStatementInfo {
    let Some(sql) = sql else {
        return SqlStatementInfo::default();
    };
    if sql.is_empty() {
        return SqlStatementInfo::default();
    }

    if let Some(cached) = cache::get(sql) {
        #[cfg(feature = "tracing")]
        tracing::trace!(len = sql.len(), "sql_sanitizer cache hit");
        return cached;
    }

    let info = scan::scan(sql);
    cache::insert_if_room(sql, info.clone());
    info
}

#[cfg(test)]
mod tests;
