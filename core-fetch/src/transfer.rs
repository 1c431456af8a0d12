//! Blocking Transfer Contract
//!
//! The bridge treats the network layer as an external collaborator behind
//! the [`Transfer`] trait: a blocking `perform` call that streams response
//! chunks into a [`WriteSink`].
//!
//! The sink's contract carries the cancellation mechanism: a return value
//! smaller than the offered chunk means "stop"; the transfer implementation
//! must abort the operation at its next opportunity and report
//! [`TransferStatus::Aborted`]. Any substitute network layer must preserve
//! this partial-acceptance convention, or cancellation latency degrades to
//! waiting for natural completion.

use std::time::Duration;

use thiserror::Error;

use crate::accumulator::ByteAccumulator;
use crate::token::CancellationToken;

/// Target locator plus transfer configuration, immutable for one call.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub url: String,
    pub follow_redirects: bool,
    pub timeout: Option<Duration>,
    pub headers: Vec<(String, String)>,
}

impl FetchRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            follow_redirects: true,
            timeout: None,
            headers: Vec::new(),
        }
    }

    pub fn follow_redirects(mut self, follow: bool) -> Self {
        self.follow_redirects = follow;
        self
    }

    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }
}

/// How a transfer ended, short of a library-level error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferStatus {
    /// The transfer ran to natural completion.
    Completed,
    /// The sink refused a chunk and the transfer stopped early.
    Aborted,
}

/// A library-level transfer error, carrying a non-empty reason.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct TransferError(String);

impl TransferError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Streaming write sink handed to [`Transfer::perform`].
///
/// Holds the accumulator and token of exactly one call; never shared across
/// calls; invoked only by the worker thread.
pub struct WriteSink<'a> {
    buffer: &'a mut ByteAccumulator,
    token: CancellationToken,
}

impl<'a> WriteSink<'a> {
    pub fn new(buffer: &'a mut ByteAccumulator, token: CancellationToken) -> Self {
        Self { buffer, token }
    }

    /// Offer one chunk; returns the number of bytes accepted.
    ///
    /// Accepts the whole chunk unless cancellation has been requested, in
    /// which case zero bytes are accepted and the transfer must abort.
    pub fn accept(&mut self, chunk: &[u8]) -> usize {
        if self.token.is_cancelled() {
            return 0;
        }
        self.buffer.append(chunk);
        chunk.len()
    }
}

/// A blocking transfer operation.
///
/// `perform` runs on the bridge's dedicated worker thread and may block for
/// the transfer's full duration. Implementations stream every received chunk
/// through `sink.accept` and must honor the partial-acceptance abort
/// convention documented on [`WriteSink`].
pub trait Transfer: Send + Sync {
    /// # Errors
    ///
    /// A [`TransferError`] for any library-level failure unrelated to the
    /// sink refusing data (resolution failure, connect failure, broken
    /// stream, ...).
    fn perform(
        &self,
        request: &FetchRequest,
        sink: &mut WriteSink<'_>,
    ) -> std::result::Result<TransferStatus, TransferError>;
}
