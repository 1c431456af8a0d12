//! # Runtime Configuration
//!
//! Builder-pattern assembly of the webblocks runtime with fail-fast
//! validation: a [`Runtime`] cannot be constructed without the transfer
//! capability, and the error says exactly what is missing and how to
//! provide it.
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use core_runtime::config::RuntimeConfig;
//! use transfer_http::{HttpConfig, HttpTransfer};
//!
//! let transfer = Arc::new(HttpTransfer::new(HttpConfig::default())?);
//! let runtime = RuntimeConfig::builder()
//!     .transfer(transfer)
//!     .build()?;
//!
//! let mut registry = engine_traits::BlockRegistry::new();
//! runtime.register_blocks(&mut registry);
//! ```

use std::sync::Arc;

use core_fetch::{FetchBridge, Transfer};
use engine_traits::BlockRegistry;
use tracing::info;

use crate::error::{Error, Result};
use crate::logging::LoggingConfig;

/// Validated runtime configuration. Use [`RuntimeConfig::builder`].
#[derive(Clone)]
pub struct RuntimeConfig {
    transfer: Arc<dyn Transfer>,
    pub logging: LoggingConfig,
}

impl std::fmt::Debug for RuntimeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuntimeConfig")
            .field("transfer", &"<dyn Transfer>")
            .field("logging", &self.logging)
            .finish()
    }
}

impl RuntimeConfig {
    pub fn builder() -> RuntimeConfigBuilder {
        RuntimeConfigBuilder::default()
    }
}

/// Builder for [`RuntimeConfig`].
#[derive(Default)]
pub struct RuntimeConfigBuilder {
    transfer: Option<Arc<dyn Transfer>>,
    logging: LoggingConfig,
}

impl RuntimeConfigBuilder {
    /// The transfer implementation backing every fetch.
    pub fn transfer(mut self, transfer: Arc<dyn Transfer>) -> Self {
        self.transfer = Some(transfer);
        self
    }

    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = logging;
        self
    }

    /// # Errors
    ///
    /// [`Error::CapabilityMissing`] when no transfer has been provided.
    pub fn build(self) -> Result<RuntimeConfig> {
        let transfer = self.transfer.ok_or_else(|| Error::CapabilityMissing {
            capability: "Transfer".to_string(),
            message: "No transfer implementation provided. \
                      Use transfer-http's HttpTransfer, or inject your own."
                .to_string(),
        })?;

        Ok(RuntimeConfig {
            transfer,
            logging: self.logging,
        })
    }
}

/// The assembled runtime: hands out bridges and registers the block set.
pub struct Runtime {
    transfer: Arc<dyn Transfer>,
}

impl Runtime {
    pub fn new(config: RuntimeConfig) -> Self {
        info!("webblocks runtime assembled");
        Self {
            transfer: config.transfer,
        }
    }

    /// A fresh bridge bound to the configured transfer, for one logical
    /// task to drive.
    pub fn bridge(&self) -> FetchBridge {
        FetchBridge::new(Arc::clone(&self.transfer))
    }

    /// Register the full web block set with the host engine's registry.
    pub fn register_blocks(&self, registry: &mut BlockRegistry) {
        core_blocks::register_blocks(registry, Arc::clone(&self.transfer));
    }
}
