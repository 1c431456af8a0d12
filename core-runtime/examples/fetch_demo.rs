//! Fetch a URL through the cooperative bridge from a plain binary.
//!
//! Run with:
//! ```bash
//! cargo run --example fetch_demo -- https://example.com/
//! ```

use std::env;
use std::sync::Arc;

use anyhow::Context;
use core_runtime::{init_logging, LogLevel, LoggingConfig, Runtime, RuntimeConfig};
use engine_traits::{BlockRegistry, Value, YieldScheduler};
use transfer_http::{HttpConfig, HttpTransfer};

fn main() -> anyhow::Result<()> {
    let url = env::args()
        .nth(1)
        .unwrap_or_else(|| "https://example.com/".to_string());

    init_logging(LoggingConfig::default().with_level(LogLevel::Debug))
        .context("Failed to initialize logging")?;

    let transfer = Arc::new(HttpTransfer::new(HttpConfig::default())?);
    let runtime = Runtime::new(RuntimeConfig::builder().transfer(transfer).build()?);

    let mut registry = BlockRegistry::new();
    runtime.register_blocks(&mut registry);

    let mut block = registry.create("Web.Get")?;
    let mut scheduler = YieldScheduler;
    let output = block.activate(&mut scheduler, &Value::from(url.as_str()))?;

    println!("fetched {} bytes from {url}", output.as_bytes()?.len());
    Ok(())
}
