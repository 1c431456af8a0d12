//! Blocking-Call Bridge
//!
//! Owns the worker thread's lifetime for one fetch attempt: start, poll,
//! cancel, join, result retrieval. The bridge instance outlives individual
//! calls and may be reused sequentially; a single instance must only ever be
//! driven by one logical task at a time.
//!
//! State machine per call:
//!
//! ```text
//! Idle -> Running -> Completed
//!              \--> (cancel, joins worker) -> Cancelled
//! ```
//!
//! `Completed` and `Cancelled` are reported through a [`FetchOutcome`] and
//! the bridge returns to `Idle`, with the worker thread already joined. No
//! worker ever outlives the terminal outcome of its call.

use std::any::Any;
use std::sync::Arc;
use std::task::Poll;
use std::thread::{self, JoinHandle};

use bytes::Bytes;
use tracing::{debug, warn};

use crate::accumulator::ByteAccumulator;
use crate::error::{FetchError, Result};
use crate::token::CancellationToken;
use crate::transfer::{FetchRequest, Transfer, TransferError, TransferStatus, WriteSink};

/// Terminal result of one fetch attempt, produced exactly once per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The transfer completed naturally; the accumulated body.
    Success(Bytes),
    /// Cancellation was requested and the worker has stopped.
    Cancelled,
    /// The transfer failed, or the worker faulted.
    Failed(FetchError),
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, FetchOutcome::Cancelled)
    }

    /// The body bytes, if the fetch succeeded.
    pub fn into_bytes(self) -> Option<Bytes> {
        match self {
            FetchOutcome::Success(bytes) => Some(bytes),
            _ => None,
        }
    }
}

/// What the worker thread hands back through the join.
struct WorkerResult {
    buffer: ByteAccumulator,
    status: std::result::Result<TransferStatus, TransferError>,
}

/// One in-flight call: the shared token plus the worker's join handle.
struct Worker {
    token: CancellationToken,
    handle: JoinHandle<WorkerResult>,
}

/// Bridges one blocking transfer at a time onto a dedicated worker thread.
pub struct FetchBridge {
    transfer: Arc<dyn Transfer>,
    worker: Option<Worker>,
}

impl FetchBridge {
    pub fn new(transfer: Arc<dyn Transfer>) -> Self {
        Self {
            transfer,
            worker: None,
        }
    }

    /// Whether no call is currently in flight.
    pub fn is_idle(&self) -> bool {
        self.worker.is_none()
    }

    /// Begin a fetch. Valid only while idle; never blocks the caller.
    ///
    /// Spawns exactly one worker thread running the blocking transfer with a
    /// sink bound to a fresh accumulator and a fresh cancellation token.
    ///
    /// # Errors
    ///
    /// [`FetchError::Busy`] if a call is already running on this bridge;
    /// [`FetchError::Internal`] if the worker thread could not be spawned
    /// (fatal to this attempt only).
    pub fn start(&mut self, request: FetchRequest) -> Result<()> {
        if self.worker.is_some() {
            return Err(FetchError::Busy);
        }

        debug!(url = %request.url, "starting fetch worker");

        let token = CancellationToken::new();
        let worker_token = token.clone();
        let transfer = Arc::clone(&self.transfer);

        let handle = thread::Builder::new()
            .name("fetch-worker".to_string())
            .spawn(move || {
                let mut buffer = ByteAccumulator::new();
                let status = {
                    let mut sink = WriteSink::new(&mut buffer, worker_token);
                    transfer.perform(&request, &mut sink)
                };
                WorkerResult { buffer, status }
            })
            .map_err(|e| FetchError::Internal(format!("failed to spawn worker thread: {e}")))?;

        self.worker = Some(Worker { token, handle });
        Ok(())
    }

    /// Non-blocking completion check.
    ///
    /// Returns `Pending` while the worker is still running, or the terminal
    /// [`FetchOutcome`] once it has finished. Completes in near-constant
    /// time regardless of transfer duration: the only join performed here is
    /// on an already-finished thread.
    pub fn poll(&mut self) -> Poll<FetchOutcome> {
        match self.worker.take() {
            None => Poll::Ready(FetchOutcome::Failed(FetchError::Internal(
                "poll on an idle bridge".to_string(),
            ))),
            Some(worker) if !worker.handle.is_finished() => {
                self.worker = Some(worker);
                Poll::Pending
            }
            Some(worker) => Poll::Ready(Self::conclude(worker)),
        }
    }

    /// Request cancellation and block until the worker has actually stopped.
    ///
    /// Intentionally synchronous: a cancelling bridge must not return
    /// control with a live worker. The worker observes the token at its next
    /// sink invocation, so latency is bounded by the transfer library's
    /// callback cadence. Calling on an idle bridge is a no-op yielding
    /// `Cancelled`.
    pub fn cancel(&mut self) -> FetchOutcome {
        match self.worker.take() {
            None => FetchOutcome::Cancelled,
            Some(worker) => {
                debug!("canceling fetch, waiting for worker to stop");
                worker.token.cancel();
                Self::conclude(worker)
            }
        }
    }

    /// Join the worker and compute the terminal outcome.
    ///
    /// Outcome priority: a set token wins over everything else, including a
    /// transport error that raced the cancellation.
    fn conclude(worker: Worker) -> FetchOutcome {
        let cancelled = worker.token.is_cancelled();

        let result = match worker.handle.join() {
            Ok(result) => result,
            Err(panic) => {
                let reason = panic_reason(&panic);
                if cancelled {
                    warn!(reason, "worker panicked during cancellation");
                    return FetchOutcome::Cancelled;
                }
                return FetchOutcome::Failed(FetchError::Internal(format!(
                    "worker thread panicked: {reason}"
                )));
            }
        };

        if cancelled {
            return FetchOutcome::Cancelled;
        }

        match result.status {
            Ok(TransferStatus::Completed) => {
                let body = result.buffer.finalize();
                debug!(bytes = body.len(), "fetch completed");
                FetchOutcome::Success(body)
            }
            // The sink only refuses under a set token, so an abort without
            // one still means the owner asked this call to stop.
            Ok(TransferStatus::Aborted) => FetchOutcome::Cancelled,
            Err(err) => {
                warn!(error = %err, "transfer failed");
                FetchOutcome::Failed(FetchError::Transport(err.to_string()))
            }
        }
    }
}

fn panic_reason(panic: &(dyn Any + Send)) -> &str {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s
    } else {
        "unknown panic payload"
    }
}
