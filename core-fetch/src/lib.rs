//! # Cancellable Blocking-Call Bridge
//!
//! Integrates a blocking, long-running transfer into the host engine's
//! cooperative single-threaded scheduler without stalling it, and without
//! leaking the worker thread if the owning task is torn down mid-transfer.
//!
//! # Architecture
//!
//! One fetch occupies two threads:
//!
//! - the scheduler's own thread runs the polling loop ([`drive`]), suspending
//!   the owning task between polls
//! - a dedicated worker thread runs the blocking [`Transfer::perform`] call,
//!   streaming chunks into a [`WriteSink`]
//!
//! The only state shared between the two while the call is in flight is the
//! [`CancellationToken`], a monotonic atomic flag. The accumulator is owned
//! by the worker and handed back through the thread join, so the terminal
//! outcome transition is also the happens-before edge that makes the bytes
//! safely readable on the scheduler side.
//!
//! Cancellation is cooperative: [`FetchBridge::cancel`] sets the token and
//! then blocks until the worker has actually exited. The sink refuses every
//! chunk offered after the token is set (reporting zero bytes accepted),
//! which is the documented convention for forcing the transfer library to
//! abort at its next opportunity.
//!
//! # Modules
//!
//! - `token`: shared cancellation flag
//! - `accumulator`: append-only byte buffer filled by the worker
//! - `transfer`: the blocking transfer contract and its streaming sink
//! - `bridge`: worker lifetime management (start, poll, cancel, join)
//! - `adapter`: the suspension loop run on the scheduler's thread
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use core_fetch::{drive, FetchBridge, FetchOutcome, FetchRequest, Transfer};
//! use engine_traits::YieldScheduler;
//!
//! fn fetch(transfer: Arc<dyn Transfer>) {
//!     let mut bridge = FetchBridge::new(transfer);
//!     bridge.start(FetchRequest::new("https://example.com")).unwrap();
//!
//!     let mut scheduler = YieldScheduler;
//!     match drive(&mut bridge, &mut scheduler) {
//!         FetchOutcome::Success(body) => println!("{} bytes", body.len()),
//!         FetchOutcome::Cancelled => println!("cancelled"),
//!         FetchOutcome::Failed(err) => eprintln!("failed: {err}"),
//!     }
//! }
//! ```

pub mod accumulator;
pub mod adapter;
pub mod bridge;
pub mod error;
pub mod token;
pub mod transfer;

pub use error::FetchError;

// Re-export commonly used types
pub use accumulator::ByteAccumulator;
pub use adapter::drive;
pub use bridge::{FetchBridge, FetchOutcome};
pub use token::CancellationToken;
pub use transfer::{FetchRequest, Transfer, TransferError, TransferStatus, WriteSink};
