//! # Core Runtime Module
//!
//! Foundational runtime infrastructure for the webblocks workspace:
//! - Logging and tracing initialization
//! - Runtime configuration with fail-fast capability validation
//! - Assembly of the block set against a concrete transfer
//!
//! ## Overview
//!
//! A host embeds the workspace by building a [`RuntimeConfig`] with the
//! transfer implementation it wants, then using the resulting [`Runtime`]
//! to hand bridges to tasks and register the block set with its engine.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{Runtime, RuntimeConfig};
pub use error::{Error, Result};
pub use logging::{init_logging, LogFormat, LogLevel, LoggingConfig};
