//! String, hexadecimal, and numeric literal scanners (component C1).
//!
//! Each scanner looks only at the character(s) at the current position; on a
//! match it advances the cursor past the literal and reports how far it
//! went. The driver (`scan::ParseState::advance`) is the one that actually
//! writes the single `?` placeholder to the sanitized buffer — these
//! functions never touch the output buffers themselves.

/// Outcome of a literal scan attempt: either nothing matched, or the
/// literal consumed `len` bytes starting at the scan's start position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal {
    pub len: usize,
}

/// Attempts to scan a single-quoted string literal starting at `input[pos]`.
///
/// `''` inside the literal is the SQL escape for a literal quote and does
/// not close it. An unterminated literal consumes to end of input — this is
/// the documented benign failure mode for malformed SQL.
pub fn scan_string_literal(input: &[u8], pos: usize) -> Option<Literal> {
    if input.get(pos) != Some(&b'\'') {
        return None;
    }
    let mut i = pos + 1;
    loop {
        match input.get(i) {
            None => return Some(Literal { len: i - pos }),
            Some(b'\'') => {
                if input.get(i + 1) == Some(&b'\'') {
                    i += 2; // escaped quote, keep scanning
                } else {
                    return Some(Literal { len: i + 1 - pos });
                }
            }
            Some(_) => i += 1,
        }
    }
}

/// Attempts to scan a `0x`/`0X` hexadecimal literal starting at `input[pos]`.
///
/// The literal is terminated before the first byte outside `[0-9A-Fa-f]`;
/// `0x` with zero following hex digits still counts as a match (an empty
/// hex run), consistent with never erroring on malformed input.
pub fn scan_hex_literal(input: &[u8], pos: usize) -> Option<Literal> {
    let lead = *input.get(pos)?;
    if lead != b'0' {
        return None;
    }
    let marker = *input.get(pos + 1)?;
    if marker != b'x' && marker != b'X' {
        return None;
    }
    let mut i = pos + 2;
    while input.get(i).is_some_and(|b| b.is_ascii_hexdigit()) {
        i += 1;
    }
    Some(Literal { len: i - pos })
}

/// Attempts to scan a numeric literal starting at `input[pos]`, per the
/// grammar in the crate's module docs: an optional sign (only before a
/// digit or `.`), an optional leading `.` (only before a digit), one or
/// more digits with at most one embedded `.` and at most one `e`/`E`
/// exponent (itself optionally signed).
///
/// Also recognizes the `(123)` passthrough carve-out for things like
/// `VARCHAR(50)`: when `prev_is_open_paren` is set and the run starting at
/// `pos` is digits-then-`)`, it reports that whole span as a "literal" so
/// the driver can copy it through unchanged rather than masking it — see
/// `scan::ParseState::try_literal`, which special-cases `paren_digits` to
/// skip the placeholder substitution.
pub fn scan_numeric_literal(input: &[u8], pos: usize, prev_is_open_paren: bool) -> Option<NumericMatch> {
    if prev_is_open_paren {
        if let Some(len) = scan_paren_digits(input, pos) {
            return Some(NumericMatch { len, paren_digits: true });
        }
    }

    let mut i = pos;
    if matches!(input.get(i), Some(b'+') | Some(b'-')) {
        match input.get(i + 1) {
            Some(b) if b.is_ascii_digit() || *b == b'.' => i += 1,
            _ => return None,
        }
    }

    let mut seen_digit = false;
    let mut seen_dot = false;
    let mut seen_exp = false;

    if input.get(i) == Some(&b'.') {
        match input.get(i + 1) {
            Some(b) if b.is_ascii_digit() => {
                seen_dot = true;
                i += 1;
            }
            _ => return None,
        }
    }

    loop {
        match input.get(i) {
            Some(b) if b.is_ascii_digit() => {
                seen_digit = true;
                i += 1;
            }
            Some(b'.') if !seen_dot && !seen_exp => {
                seen_dot = true;
                i += 1;
            }
            Some(b'e') | Some(b'E') if !seen_exp && seen_digit => {
                let mut j = i + 1;
                if matches!(input.get(j), Some(b'+') | Some(b'-')) {
                    j += 1;
                }
                if input.get(j).is_some_and(u8::is_ascii_digit) {
                    seen_exp = true;
                    i = j;
                } else {
                    break;
                }
            }
            _ => break,
        }
    }

    if !seen_digit {
        return None;
    }

    Some(NumericMatch { len: i - pos, paren_digits: false })
}

/// A matched numeric literal, distinguishing the `(123)` passthrough
/// carve-out from an ordinary numeric literal so the driver knows whether
/// to mask it with `?` or copy it through verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericMatch {
    pub len: usize,
    pub paren_digits: bool,
}

/// Matches a digit-only run followed by `)`, e.g. the `123)` in `(123)`.
/// Returns `None` (falls through to the normal numeric rule) when the run
/// isn't exactly digits-then-close-paren.
fn scan_paren_digits(input: &[u8], pos: usize) -> Option<usize> {
    let mut i = pos;
    while input.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    if i == pos {
        return None;
    }
    if input.get(i) == Some(&b')') {
        Some(i + 1 - pos)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn string_literal_simple() {
        let lit = scan_string_literal(b"'abc' rest", 0).expect("literal matches");
        assert_eq!(lit.len, 5);
    }

    #[test]
    fn string_literal_escaped_quote_does_not_close() {
        let lit = scan_string_literal(b"'abc''def' rest", 0).expect("literal matches");
        assert_eq!(lit.len, 10);
    }

    #[test]
    fn string_literal_unterminated_consumes_to_end() {
        let input = b"'abc def";
        let lit = scan_string_literal(input, 0).expect("literal matches");
        assert_eq!(lit.len, input.len());
    }

    #[test]
    fn not_a_string_literal() {
        assert!(scan_string_literal(b"abc", 0).is_none());
    }

    #[test]
    fn hex_literal_upper_and_lower() {
        assert_eq!(scan_hex_literal(b"0xFF,", 0).unwrap().len, 4);
        assert_eq!(scan_hex_literal(b"0Xff,", 0).unwrap().len, 4);
    }

    #[test]
    fn hex_literal_empty_digit_run_still_matches_marker() {
        assert_eq!(scan_hex_literal(b"0x ", 0).unwrap().len, 2);
    }

    #[test]
    fn hex_literal_requires_0x_prefix() {
        assert!(scan_hex_literal(b"123", 0).is_none());
        assert!(scan_hex_literal(b"x123", 0).is_none());
    }

    #[test]
    fn numeric_literal_integer() {
        let m = scan_numeric_literal(b"42 ", 0, false).unwrap();
        assert_eq!(m.len, 2);
        assert!(!m.paren_digits);
    }

    #[test]
    fn numeric_literal_with_sign_and_exponent() {
        let m = scan_numeric_literal(b"1.23e-5)", 0, false).unwrap();
        assert_eq!(m.len, 7);
    }

    #[test]
    fn numeric_literal_leading_dot() {
        let m = scan_numeric_literal(b".5 ", 0, false).unwrap();
        assert_eq!(m.len, 2);
    }

    #[test]
    fn numeric_literal_leading_sign_requires_digit_or_dot() {
        assert!(scan_numeric_literal(b"-x", 0, false).is_none());
        assert!(scan_numeric_literal(b"- 5", 0, false).is_none());
    }

    #[test]
    fn paren_digits_pass_through_unchanged() {
        let m = scan_numeric_literal(b"50)", 0, true).unwrap();
        assert!(m.paren_digits);
        assert_eq!(m.len, 3);
    }

    #[test]
    fn paren_digits_falls_through_when_not_closed_by_paren() {
        let m = scan_numeric_literal(b"50, next", 0, true).unwrap();
        assert!(!m.paren_digits);
        assert_eq!(m.len, 2);
    }

    #[test]
    fn not_a_numeric_literal() {
        assert!(scan_numeric_literal(b"abc", 0, false).is_none());
    }
}
