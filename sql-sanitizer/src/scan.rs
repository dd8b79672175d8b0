//! The tokenizer dispatch loop and scan driver (component C3, with the
//! inner loop of C4 wired in): walks the input once, left to right,
//! writing the sanitized statement and its summary into a rented
//! [`pool::ScratchBuffer`] as it goes.
//!
//! `prev_keyword` is sticky: it only changes when a keyword from
//! [`keyword::KEYWORDS`] matches, never when a literal, identifier, or
//! punctuation byte is consumed. That's what lets `SELECT col FROM t`
//! still find `FROM` in `SELECT`'s follow-on set despite the identifier
//! sitting in between — there is no parser, just a two-state walk
//! (current keyword chain position, whether the next token should be
//! copied into the summary).

use crate::comment;
use crate::keyword::{self, Category, KeywordInfo, MAX_SUMMARY_LENGTH};
use crate::literal;
use crate::pool::{self, ScratchBuffer};
use crate::SqlStatementInfo;

struct ParseState {
    parse_pos: usize,
    san_pos: usize,
    sum_pos: usize,
    prev_keyword: Category,
    capture_next_token_in_summary: bool,
    prev_is_open_paren: bool,
    summary_cap: usize,
}

impl ParseState {
    fn new(sql_len: usize) -> Self {
        ParseState {
            parse_pos: 0,
            san_pos: 0,
            sum_pos: 0,
            prev_keyword: Category::Unknown,
            capture_next_token_in_summary: false,
            prev_is_open_paren: false,
            summary_cap: sql_len.min(MAX_SUMMARY_LENGTH),
        }
    }

    /// Copies `bytes` into the sanitized half at the current write cursor,
    /// silently truncating at the half's capacity (never reached in
    /// practice: the sanitized stream is never longer than the input).
    fn write_sanitized(&mut self, buffer: &mut ScratchBuffer, bytes: &[u8]) {
        let half = buffer.sanitized_half_mut();
        let end = (self.san_pos + bytes.len()).min(half.len());
        let n = end - self.san_pos;
        half[self.san_pos..end].copy_from_slice(&bytes[..n]);
        self.san_pos = end;
    }

    /// Appends `token` to the summary, space-separated from whatever came
    /// before, truncating at `summary_cap` (§8 invariant: summary is
    /// bounded to [`MAX_SUMMARY_LENGTH`]).
    fn write_summary_token(&mut self, buffer: &mut ScratchBuffer, token: &[u8]) {
        let half = buffer.summary_half_mut();
        let cap = self.summary_cap.min(half.len());
        if self.sum_pos >= cap {
            return;
        }
        if self.sum_pos > 0 {
            half[self.sum_pos] = b' ';
            self.sum_pos += 1;
            if self.sum_pos >= cap {
                return;
            }
        }
        let remaining = cap - self.sum_pos;
        let n = token.len().min(remaining);
        half[self.sum_pos..self.sum_pos + n].copy_from_slice(&token[..n]);
        self.sum_pos += n;
    }

    /// The candidate keyword set for a token starting at the current
    /// position, per the priority order: sub-query rule, then the active
    /// follow-on chain, then the top-level statement verbs (§4.4 step 3).
    fn candidates(&self) -> Vec<&'static KeywordInfo> {
        if self.prev_is_open_paren {
            return vec![keyword::subquery_candidate()];
        }
        if let Some(prev) = keyword::by_category(self.prev_keyword) {
            if !prev.follow_on_set.is_empty() {
                return keyword::candidates_in(prev.follow_on_set).collect();
            }
        }
        keyword::top_level_verbs().collect()
    }
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'.'
}

fn matches_keyword(token: &[u8], text: &str) -> bool {
    let text = text.as_bytes();
    token.len() == text.len() && token.iter().zip(text).all(|(a, b)| a.to_ascii_uppercase() == *b)
}

/// Runs the full scan pipeline over `sql` (assumed non-empty) and returns
/// the sanitized statement and its summary. Never panics (§7): every
/// sub-scanner is total over its input, and buffer writes are
/// capacity-checked rather than indexed unconditionally.
pub fn scan(sql: &str) -> SqlStatementInfo {
    let input = sql.as_bytes();
    let len = input.len();
    let mut buffer = pool::rent(len);
    let mut state = ParseState::new(len);

    while state.parse_pos < len {
        if let Some(c) = comment::skip_block_comment(input, state.parse_pos) {
            state.parse_pos += c.len;
            continue;
        }
        if let Some(c) = comment::skip_line_comment(input, state.parse_pos) {
            state.parse_pos += c.len;
            continue;
        }
        if let Some(lit) = literal::scan_string_literal(input, state.parse_pos) {
            state.write_sanitized(&mut buffer, b"?");
            state.parse_pos += lit.len;
            state.prev_is_open_paren = false;
            continue;
        }
        if let Some(lit) = literal::scan_hex_literal(input, state.parse_pos) {
            state.write_sanitized(&mut buffer, b"?");
            state.parse_pos += lit.len;
            state.prev_is_open_paren = false;
            continue;
        }
        if let Some(num) = literal::scan_numeric_literal(input, state.parse_pos, state.prev_is_open_paren) {
            if num.paren_digits {
                let bytes = &input[state.parse_pos..state.parse_pos + num.len];
                state.write_sanitized(&mut buffer, bytes);
            } else {
                state.write_sanitized(&mut buffer, b"?");
            }
            state.parse_pos += num.len;
            state.prev_is_open_paren = false;
            continue;
        }

        let b = input[state.parse_pos];

        if b.is_ascii_whitespace() {
            state.write_sanitized(&mut buffer, &[b]);
            state.parse_pos += 1;
            continue;
        }

        if b == b'(' {
            state.write_sanitized(&mut buffer, &[b]);
            state.parse_pos += 1;
            state.prev_is_open_paren = true;
            continue;
        }

        if is_ident_start(b) {
            let start = state.parse_pos;
            let mut end = start + 1;
            while end < len && is_ident_continue(input[end]) {
                end += 1;
            }
            let token = &input[start..end];
            let matched = state
                .candidates()
                .into_iter()
                .find(|k| matches_keyword(token, k.text));

            match matched {
                Some(kw) => {
                    if kw.capture_in_summary(state.prev_keyword) {
                        state.write_summary_token(&mut buffer, token);
                    }
                    state.write_sanitized(&mut buffer, token);
                    state.prev_keyword = kw.category;
                    state.capture_next_token_in_summary = kw.followed_by_identifier;
                }
                None => {
                    state.write_sanitized(&mut buffer, token);
                    if state.capture_next_token_in_summary {
                        state.write_summary_token(&mut buffer, token);
                        state.capture_next_token_in_summary = false;
                    }
                }
            }
            state.parse_pos = end;
            state.prev_is_open_paren = false;
            continue;
        }

        // A `,` right after a FROM-list table name re-arms capture for the
        // next one (`FROM Orders o, OrderDetails od`): the alias token in
        // between is deliberately never captured, only the comma is.
        if b == b',' && state.prev_keyword == Category::From {
            state.capture_next_token_in_summary = true;
        }

        state.write_sanitized(&mut buffer, &[b]);
        state.parse_pos += 1;
        state.prev_is_open_paren = false;
    }

    let sanitized_sql = String::from_utf8(buffer.sanitized_half_mut()[..state.san_pos].to_vec())
        .unwrap_or_default();
    let summary = String::from_utf8(buffer.summary_half_mut()[..state.sum_pos].to_vec()).unwrap_or_default();
    pool::recycle(buffer);

    SqlStatementInfo { sanitized_sql, summary }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn simple_select_is_copied_through_with_summary() {
        let info = scan("SELECT name FROM users");
        assert_eq!(info.sanitized_sql, "SELECT name FROM users");
        assert_eq!(info.summary, "SELECT users");
    }

    #[test]
    fn string_literal_is_replaced_with_placeholder() {
        let info = scan("SELECT * FROM users WHERE name = 'bobby'");
        assert_eq!(info.sanitized_sql, "SELECT * FROM users WHERE name = ?");
        assert_eq!(info.summary, "SELECT users");
    }

    #[test]
    fn numeric_literal_is_replaced_with_placeholder() {
        let info = scan("SELECT * FROM t WHERE id = 42");
        assert_eq!(info.sanitized_sql, "SELECT * FROM t WHERE id = ?");
    }

    #[test]
    fn block_comment_is_removed_entirely() {
        let info = scan("SELECT /* naughty */ * FROM t");
        assert_eq!(info.sanitized_sql, "SELECT  * FROM t");
    }

    #[test]
    fn line_comment_preserves_trailing_newline() {
        let info = scan("SELECT 1 -- drop everything\nFROM t");
        assert_eq!(info.sanitized_sql, "SELECT ? \nFROM t");
    }

    #[test]
    fn create_table_summary_captures_verb_object_and_identifier() {
        let info = scan("CREATE TABLE accounts (id INT)");
        assert_eq!(info.summary, "CREATE TABLE accounts");
    }

    #[test]
    fn from_list_captures_every_table_name() {
        let info = scan("SELECT * FROM a, b, c");
        assert_eq!(info.summary, "SELECT a b c");
    }

    #[test]
    fn varchar_length_passes_through_unmasked() {
        let info = scan("CREATE TABLE t (name VARCHAR(50))");
        assert_eq!(info.sanitized_sql, "CREATE TABLE t (name VARCHAR(50))");
    }

    #[test]
    fn subquery_select_is_recognized_after_open_paren() {
        let info = scan("SELECT * FROM (SELECT id FROM t) sub");
        assert!(info.sanitized_sql.contains("(SELECT id FROM t)"));
    }

    #[test]
    fn empty_input_produces_empty_output() {
        let info = scan("");
        assert_eq!(info.sanitized_sql, "");
        assert_eq!(info.summary, "");
    }

    #[test]
    fn scan_never_panics_on_unterminated_literal() {
        let info = scan("SELECT * FROM t WHERE name = 'unterminated");
        assert!(info.sanitized_sql.ends_with('?'));
    }
}
