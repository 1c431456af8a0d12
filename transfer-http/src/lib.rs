//! # HTTP Transfer Implementation
//!
//! Blocking [`Transfer`](core_fetch::Transfer) implementation over reqwest's
//! blocking client, intended to run on the fetch bridge's dedicated worker
//! thread.
//!
//! ## Overview
//!
//! - [`HttpTransfer`] - streams a response body into the bridge's write
//!   sink, honoring the partial-acceptance abort convention
//! - [`TransferStack`] - owner-counted, process-wide lifecycle for the
//!   shared client pools: initialized on first acquire, torn down when the
//!   last owner releases
//!
//! ## Redirects
//!
//! Redirect policy is fixed at client-build time by the HTTP library, while
//! requests carry a per-call follow flag. The stack therefore keeps two
//! prebuilt clients (following and direct) and `HttpTransfer` picks one per
//! request.

pub mod client;
pub mod error;
pub mod global;

pub use client::{HttpConfig, HttpTransfer};
pub use error::HttpError;
pub use global::{StackHandle, TransferStack};
