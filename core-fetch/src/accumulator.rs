//! Byte Accumulator
//!
//! Append-only buffer filled exclusively by the worker thread during one
//! active call. Single-writer discipline is structural rather than policed:
//! the bridge moves the accumulator into the worker closure and gets it back
//! through the thread join, so no other thread can touch it while the call
//! is running.

use bytes::{Bytes, BytesMut};

/// Growable, append-only byte buffer with amortized growth.
#[derive(Debug, Default)]
pub struct ByteAccumulator {
    buf: BytesMut,
}

impl ByteAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
        }
    }

    /// Append one chunk. Total length after N appends equals the sum of the
    /// appended chunk lengths; byte order is preserved.
    pub fn append(&mut self, chunk: &[u8]) {
        self.buf.extend_from_slice(chunk);
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Freeze into the exact-length, immutable byte sequence.
    pub fn finalize(self) -> Bytes {
        self.buf.freeze()
    }
}
