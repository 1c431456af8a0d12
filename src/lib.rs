//! Workspace placeholder crate.
//!
//! This crate exists to expose shared feature flags that map to the
//! individual workspace crates (e.g., `core-blocks`, `core-runtime`,
//! `transfer-http`). Host applications can depend on `webblocks` and enable
//! the documented features without needing to wire each crate individually.

#[cfg(feature = "http")]
pub use core_blocks;
#[cfg(feature = "http")]
pub use core_runtime;
#[cfg(feature = "http")]
pub use transfer_http;
