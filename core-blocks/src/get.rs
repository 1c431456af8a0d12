//! Web.Get Block
//!
//! Fetches a URL's body without stalling the engine: the blocking transfer
//! runs on the bridge's worker thread while this block suspends the owning
//! task once per poll. Engine-driven tear-down cancels the in-flight
//! transfer and joins the worker before the abort propagates.

use std::sync::Arc;

use engine_traits::{
    Block, BlockDescriptor, EngineError, Scheduler, Value, ValueKind,
};
use core_fetch::{drive, FetchBridge, FetchOutcome, FetchRequest, Transfer};
use tracing::debug;

pub const BLOCK_NAME: &str = "Web.Get";

/// String URL in, response body bytes out.
pub struct WebGet {
    bridge: FetchBridge,
    follow_redirects: bool,
}

impl WebGet {
    pub fn new(transfer: Arc<dyn Transfer>) -> Self {
        Self {
            bridge: FetchBridge::new(transfer),
            follow_redirects: true,
        }
    }

    pub fn follow_redirects(mut self, follow: bool) -> Self {
        self.follow_redirects = follow;
        self
    }
}

impl Block for WebGet {
    fn descriptor(&self) -> BlockDescriptor {
        BlockDescriptor::new(BLOCK_NAME, ValueKind::String, ValueKind::Bytes)
    }

    fn activate(
        &mut self,
        scheduler: &mut dyn Scheduler,
        input: &Value,
    ) -> engine_traits::error::Result<Value> {
        let url = input.as_str()?;
        let request = FetchRequest::new(url).follow_redirects(self.follow_redirects);

        self.bridge
            .start(request)
            .map_err(|e| EngineError::Activation(e.to_string()))?;

        match drive(&mut self.bridge, scheduler) {
            FetchOutcome::Success(body) => {
                debug!(url, bytes = body.len(), "Web.Get finished");
                Ok(Value::Bytes(body))
            }
            FetchOutcome::Cancelled => Err(EngineError::Aborted),
            FetchOutcome::Failed(err) => Err(EngineError::Activation(err.to_string())),
        }
    }
}
