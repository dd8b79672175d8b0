//! Block and line comment skipper (component C2).
//!
//! Both forms are removed from the sanitized stream entirely: no
//! placeholder is emitted, unlike literals. A line comment stops just
//! short of its terminating `\r`/`\n` so the following whitespace pass
//! copies that terminator through, preserving line breaks in the
//! sanitized output (§9 OQ3).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comment {
    pub len: usize,
}

/// Attempts to skip a `/* ... */` block comment starting at `input[pos]`.
/// An unterminated comment consumes to end of input.
pub fn skip_block_comment(input: &[u8], pos: usize) -> Option<Comment> {
    if input.get(pos) != Some(&b'/') || input.get(pos + 1) != Some(&b'*') {
        return None;
    }
    let mut i = pos + 2;
    loop {
        match (input.get(i), input.get(i + 1)) {
            (Some(b'*'), Some(b'/')) => return Some(Comment { len: i + 2 - pos }),
            (None, _) => return Some(Comment { len: i - pos }),
            _ => i += 1,
        }
    }
}

/// Attempts to skip a `-- ...` line comment starting at `input[pos]`,
/// stopping just before the first `\r` or `\n`. An unterminated comment
/// (no following newline) consumes to end of input.
pub fn skip_line_comment(input: &[u8], pos: usize) -> Option<Comment> {
    if input.get(pos) != Some(&b'-') || input.get(pos + 1) != Some(&b'-') {
        return None;
    }
    let mut i = pos + 2;
    while let Some(b) = input.get(i) {
        if *b == b'\r' || *b == b'\n' {
            break;
        }
        i += 1;
    }
    Some(Comment { len: i - pos })
}
