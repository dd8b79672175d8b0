//! The scratch-buffer pool (part of component C4, §5's only shared
//! resource held *during* a scan).
//!
//! A scan rents a buffer of length `2 * |sql|` whose lower half backs the
//! sanitized output and whose upper half backs the summary, scans into it,
//! then returns it. Buffers are not zeroed on return (§3): the pool is a
//! plain free list, and reuse only ever grows or shrinks a `Vec<u8>`'s
//! length, never its contents beyond what a fresh write overwrites.

use once_cell::sync::Lazy;
use parking_lot::Mutex;

/// How much larger than `|sql|` the scratch buffer is: one half for the
/// sanitized output, one half for the summary (§3, §9 Design Note 4).
pub const SCRATCH_BUFFER_MULTIPLIER: usize = 2;

static FREE_LIST: Lazy<Mutex<Vec<Vec<u8>>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// A rented scratch buffer, split into a sanitized half and a summary half.
pub struct ScratchBuffer {
    buf: Vec<u8>,
    half: usize,
}

impl ScratchBuffer {
    /// The length of each half (== `|sql|`, the input length the buffer
    /// was rented for).
    pub fn half_len(&self) -> usize {
        self.half
    }

    /// Mutable access to the sanitized (lower) half.
    pub fn sanitized_half_mut(&mut self) -> &mut [u8] {
        &mut self.buf[..self.half]
    }

    /// Mutable access to the summary (upper) half.
    pub fn summary_half_mut(&mut self) -> &mut [u8] {
        &mut self.buf[self.half..]
    }
}

/// Rents a scratch buffer sized for an input of `sql_len` bytes: total
/// capacity `SCRATCH_BUFFER_MULTIPLIER * sql_len`, split evenly.
///
/// Pulls a spare buffer from the free list when one is available and
/// resizes it in place; allocates a fresh one otherwise. The pool is never
/// allowed to fail a rent — exhaustion just means allocating (§7).
pub fn rent(sql_len: usize) -> ScratchBuffer {
    let needed = sql_len.saturating_mul(SCRATCH_BUFFER_MULTIPLIER);
    let mut buf = FREE_LIST.lock().pop().unwrap_or_default();
    if buf.len() != needed {
        #[cfg(feature = "tracing")]
        if buf.is_empty() {
            tracing::trace!(needed, "sql_sanitizer scratch pool allocating new buffer");
        }
        buf.resize(needed, 0);
    }
    ScratchBuffer { buf, half: sql_len }
}

/// Returns a scratch buffer to the pool for reuse. Its contents are left
/// as-is; the next `rent` call only ever resizes, never clears, them.
pub fn recycle(buffer: ScratchBuffer) {
    FREE_LIST.lock().push(buffer.buf);
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn rent_splits_evenly() {
        let buf = rent(10);
        assert_eq!(buf.half_len(), 10);
    }

    #[test]
    fn rent_zero_length_input() {
        let buf = rent(0);
        assert_eq!(buf.half_len(), 0);
        assert_eq!(buf.buf.len(), 0);
    }

    #[test]
    fn recycle_then_rent_reuses_allocation() {
        let buf = rent(64);
        let ptr_before = buf.buf.as_ptr();
        recycle(buf);

        // Not guaranteed to be the same allocation under concurrent test
        // execution against the shared free list, but exercises the path
        // without panicking either way.
        let buf2 = rent(64);
        let _ = ptr_before;
        assert_eq!(buf2.half_len(), 64);
    }

    #[test]
    fn mutable_halves_are_independent() {
        let mut buf = rent(4);
        buf.sanitized_half_mut()[0] = b'X';
        buf.summary_half_mut()[0] = b'Y';
        assert_eq!(buf.sanitized_half_mut()[0], b'X');
        assert_eq!(buf.summary_half_mut()[0], b'Y');
    }
}
