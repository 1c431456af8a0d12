//! Blocking HTTP Transfer
//!
//! Runs one GET transfer to completion on the calling thread (the bridge's
//! worker), streaming the body into the write sink as chunks arrive.

use std::io::Read;
use std::time::Duration;

use core_fetch::{FetchRequest, Transfer, TransferError, TransferStatus, WriteSink};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;
use crate::global::{SharedClients, StackHandle, TransferStack};

/// Read-buffer size for streaming response bodies.
const CHUNK_SIZE: usize = 16 * 1024;

/// Configuration for the shared HTTP clients.
///
/// Applied by the first [`TransferStack::acquire`] of the process; there is
/// no intrinsic whole-transfer timeout unless one is configured here or on
/// the individual request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Whole-request timeout; `None` lets transfers run indefinitely.
    pub timeout: Option<Duration>,
    pub connect_timeout: Duration,
    pub pool_max_idle_per_host: usize,
    pub user_agent: String,
    /// Redirect hop limit for requests that follow redirects.
    pub max_redirects: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            connect_timeout: Duration::from_secs(10),
            pool_max_idle_per_host: 10,
            user_agent: concat!("webblocks/", env!("CARGO_PKG_VERSION")).to_string(),
            max_redirects: 10,
        }
    }
}

/// Blocking [`Transfer`] over the process-wide client pools.
///
/// Holding an `HttpTransfer` keeps the transfer stack alive. The response
/// status is deliberately not inspected: the body is delivered for any
/// status, and only transport-level failures surface as errors.
pub struct HttpTransfer {
    _stack: StackHandle,
    clients: SharedClients,
}

impl HttpTransfer {
    /// Acquire the transfer stack and bind to its client pools.
    ///
    /// # Errors
    ///
    /// [`crate::HttpError::Init`] if this is the first acquire and the
    /// clients cannot be built.
    pub fn new(config: HttpConfig) -> Result<Self> {
        let stack = TransferStack::acquire(&config)?;
        let clients = stack.clients();
        Ok(Self {
            _stack: stack,
            clients,
        })
    }
}

impl Transfer for HttpTransfer {
    fn perform(
        &self,
        request: &FetchRequest,
        sink: &mut WriteSink<'_>,
    ) -> std::result::Result<TransferStatus, TransferError> {
        let client = if request.follow_redirects {
            &self.clients.following
        } else {
            &self.clients.direct
        };

        let mut builder = client.get(&request.url);
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        debug!(url = %request.url, "executing blocking fetch");

        let mut response = builder
            .send()
            .map_err(|e| TransferError::new(describe(&e)))?;

        let mut buf = [0u8; CHUNK_SIZE];
        loop {
            let n = response
                .read(&mut buf)
                .map_err(|e| TransferError::new(format!("body read failed: {e}")))?;
            if n == 0 {
                return Ok(TransferStatus::Completed);
            }
            if sink.accept(&buf[..n]) < n {
                debug!(url = %request.url, "sink refused chunk, aborting transfer");
                return Ok(TransferStatus::Aborted);
            }
        }
    }
}

fn describe(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        warn!(error = %err, "request timed out");
        format!("request timed out: {err}")
    } else if err.is_connect() {
        warn!(error = %err, "connection failed");
        format!("connection failed: {err}")
    } else {
        err.to_string()
    }
}
