//! Cancellation Token
//!
//! A cheaply clonable handle over one shared atomic flag. The scheduler-side
//! clone requests cancellation; the worker-side clone observes it from inside
//! the transfer's streaming write callback. The flag is the only field the
//! two threads intentionally share while a call is in flight.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A shared, monotonic cancellation flag.
///
/// The transition is strictly false→true: once [`cancel`](Self::cancel) has
/// been called the token never reads false again for that call's lifetime.
/// A fresh token is created for every call.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// Whether cancellation has been requested.
    ///
    /// Safe to call from either thread at any time; a `cancel()` on the
    /// other thread becomes visible with ordinary atomic latency.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}
