//! Suspension Adapter
//!
//! The loop that runs on the scheduler's own thread: poll the bridge once
//! per scheduler tick, suspending the owning task between polls. The adapter
//! owns neither the buffer nor the token; it only observes terminal
//! outcomes.

use std::task::Poll;

use engine_traits::{Scheduler, SuspendDecision};
use tracing::debug;

use crate::bridge::{FetchBridge, FetchOutcome};

/// Drive a started bridge to a terminal outcome without stalling the
/// scheduler.
///
/// Each iteration polls once and, if the call is still pending, yields the
/// current task through [`Scheduler::suspend_current_task`] — the loop never
/// busy-waits. When the engine answers the suspension with
/// [`SuspendDecision::Abort`], the bridge is cancelled; `cancel` blocks on
/// the scheduler's thread, deliberately, until the worker has stopped (the
/// task is already terminating), and the abort propagates upward as
/// [`FetchOutcome::Cancelled`].
pub fn drive(bridge: &mut FetchBridge, scheduler: &mut dyn Scheduler) -> FetchOutcome {
    loop {
        if let Poll::Ready(outcome) = bridge.poll() {
            return outcome;
        }
        match scheduler.suspend_current_task() {
            SuspendDecision::Continue => {}
            SuspendDecision::Abort => {
                debug!("task tear-down requested, canceling fetch");
                return bridge.cancel();
            }
        }
    }
}
