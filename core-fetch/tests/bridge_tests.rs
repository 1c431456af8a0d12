//! Integration tests for the blocking-call bridge.
//!
//! Scenarios are driven against a scripted in-process transfer so they are
//! deterministic and need no network: success, immediate cancel,
//! mid-transfer cancel, transport failure, poll boundedness, and bridge
//! reuse after every terminal outcome.

use std::sync::mpsc::{channel, Sender};
use std::sync::{Arc, Mutex};
use std::task::Poll;
use std::time::{Duration, Instant};

use core_fetch::{
    drive, FetchBridge, FetchError, FetchOutcome, FetchRequest, Transfer, TransferError,
    TransferStatus, WriteSink,
};
use engine_traits::YieldScheduler;

/// Scripted transfer: waits, then offers chunks one by one, mirroring every
/// fully accepted chunk so tests can observe what reached the accumulator
/// even when the outcome discards the buffer.
struct ScriptedTransfer {
    initial_delay: Duration,
    chunk_delay: Duration,
    chunks: Vec<Vec<u8>>,
    error: Option<String>,
    accepted: Arc<Mutex<Vec<u8>>>,
    notify: Option<Sender<usize>>,
}

impl ScriptedTransfer {
    fn new(chunks: Vec<Vec<u8>>) -> Self {
        Self {
            initial_delay: Duration::ZERO,
            chunk_delay: Duration::ZERO,
            chunks,
            error: None,
            accepted: Arc::new(Mutex::new(Vec::new())),
            notify: None,
        }
    }

    fn accepted_mirror(&self) -> Arc<Mutex<Vec<u8>>> {
        Arc::clone(&self.accepted)
    }
}

impl Transfer for ScriptedTransfer {
    fn perform(
        &self,
        _request: &FetchRequest,
        sink: &mut WriteSink<'_>,
    ) -> Result<TransferStatus, TransferError> {
        std::thread::sleep(self.initial_delay);
        for (index, chunk) in self.chunks.iter().enumerate() {
            std::thread::sleep(self.chunk_delay);
            if sink.accept(chunk) < chunk.len() {
                return Ok(TransferStatus::Aborted);
            }
            self.accepted.lock().unwrap().extend_from_slice(chunk);
            if let Some(notify) = &self.notify {
                let _ = notify.send(index);
            }
        }
        match &self.error {
            Some(reason) => Err(TransferError::new(reason.clone())),
            None => Ok(TransferStatus::Completed),
        }
    }
}

#[test]
fn success_returns_exact_body() {
    let transfer = ScriptedTransfer::new(vec![b"hello".to_vec(), b" ".to_vec(), b"world".to_vec()]);
    let mut bridge = FetchBridge::new(Arc::new(transfer));
    bridge.start(FetchRequest::new("test://hello")).unwrap();

    let mut scheduler = YieldScheduler;
    let outcome = drive(&mut bridge, &mut scheduler);

    let body = outcome.into_bytes().expect("fetch should succeed");
    assert_eq!(body.as_ref(), b"hello world");
    assert_eq!(body.len(), 11);
}

#[test]
fn immediate_cancel_stops_worker_with_empty_buffer() {
    let mut transfer = ScriptedTransfer::new(vec![b"never delivered".to_vec()]);
    transfer.initial_delay = Duration::from_millis(100);
    let accepted = transfer.accepted_mirror();

    let mut bridge = FetchBridge::new(Arc::new(transfer));
    bridge.start(FetchRequest::new("test://cancel-now")).unwrap();

    // Cancel before the first chunk is offered; blocks until the worker has
    // observed the token and exited.
    let outcome = bridge.cancel();

    assert_eq!(outcome, FetchOutcome::Cancelled);
    assert!(accepted.lock().unwrap().is_empty());
    assert!(bridge.is_idle());
}

#[test]
fn mid_transfer_cancel_keeps_only_prior_bytes() {
    let (tx, rx) = channel();
    let mut transfer = ScriptedTransfer::new(vec![b"hello ".to_vec(), b"world".to_vec()]);
    transfer.chunk_delay = Duration::from_millis(50);
    transfer.notify = Some(tx);
    let accepted = transfer.accepted_mirror();

    let mut bridge = FetchBridge::new(Arc::new(transfer));
    bridge.start(FetchRequest::new("test://cancel-mid")).unwrap();

    // Wait until the first chunk has been accumulated, then cancel. The
    // second chunk is offered ~50ms later and must be refused.
    rx.recv_timeout(Duration::from_secs(5))
        .expect("first chunk should arrive");
    let outcome = bridge.cancel();

    assert_eq!(outcome, FetchOutcome::Cancelled);
    assert_eq!(accepted.lock().unwrap().as_slice(), b"hello ");
    assert!(bridge.is_idle());
}

#[test]
fn transport_failure_yields_reason_and_bridge_stays_reusable() {
    let mut failing = ScriptedTransfer::new(vec![]);
    failing.error = Some("could not resolve host".to_string());

    let mut bridge = FetchBridge::new(Arc::new(failing));
    bridge.start(FetchRequest::new("test://unreachable")).unwrap();

    let mut scheduler = YieldScheduler;
    match drive(&mut bridge, &mut scheduler) {
        FetchOutcome::Failed(FetchError::Transport(reason)) => {
            assert!(!reason.is_empty());
            assert!(reason.contains("resolve"));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }

    // The same instance accepts a subsequent start.
    assert!(bridge.is_idle());
    bridge.start(FetchRequest::new("test://retry")).unwrap();
    assert!(matches!(
        drive(&mut bridge, &mut scheduler),
        FetchOutcome::Failed(FetchError::Transport(_))
    ));
    assert!(bridge.is_idle());
}

#[test]
fn failed_then_restarted_on_same_instance() {
    // Reuse across sequential calls on one bridge: fail first, succeed next,
    // against the same transfer whose error is cleared by the script shape.
    struct FailOnce {
        failed: Mutex<bool>,
    }
    impl Transfer for FailOnce {
        fn perform(
            &self,
            _request: &FetchRequest,
            sink: &mut WriteSink<'_>,
        ) -> Result<TransferStatus, TransferError> {
            let mut failed = self.failed.lock().unwrap();
            if !*failed {
                *failed = true;
                return Err(TransferError::new("transient failure"));
            }
            sink.accept(b"recovered");
            Ok(TransferStatus::Completed)
        }
    }

    let mut bridge = FetchBridge::new(Arc::new(FailOnce {
        failed: Mutex::new(false),
    }));
    let mut scheduler = YieldScheduler;

    bridge.start(FetchRequest::new("test://flaky")).unwrap();
    assert!(matches!(
        drive(&mut bridge, &mut scheduler),
        FetchOutcome::Failed(_)
    ));

    bridge.start(FetchRequest::new("test://flaky")).unwrap();
    let outcome = drive(&mut bridge, &mut scheduler);
    assert_eq!(outcome.into_bytes().unwrap().as_ref(), b"recovered");
}

#[test]
fn poll_is_bounded_regardless_of_transfer_duration() {
    let mut transfer = ScriptedTransfer::new(vec![b"slow".to_vec()]);
    transfer.initial_delay = Duration::from_millis(300);

    let mut bridge = FetchBridge::new(Arc::new(transfer));
    bridge.start(FetchRequest::new("test://slow")).unwrap();

    // Every poll during the 300ms transfer must return quickly.
    let mut pending_polls = 0;
    loop {
        let started = Instant::now();
        let result = bridge.poll();
        assert!(
            started.elapsed() < Duration::from_millis(50),
            "poll took too long"
        );
        match result {
            Poll::Pending => {
                pending_polls += 1;
                std::thread::sleep(Duration::from_millis(10));
            }
            Poll::Ready(outcome) => {
                assert!(outcome.is_success());
                break;
            }
        }
    }
    assert!(pending_polls > 0, "transfer finished before any pending poll");
}

#[test]
fn no_worker_outlives_a_terminal_outcome() {
    // After each terminal outcome the handle has been consumed by a join and
    // the bridge accepts a fresh start immediately.
    let mut scheduler = YieldScheduler;

    let success = ScriptedTransfer::new(vec![b"done".to_vec()]);
    let mut bridge = FetchBridge::new(Arc::new(success));

    for _ in 0..3 {
        bridge.start(FetchRequest::new("test://again")).unwrap();
        assert!(drive(&mut bridge, &mut scheduler).is_success());
        assert!(bridge.is_idle());
    }

    let mut slow = ScriptedTransfer::new(vec![b"x".to_vec(); 100]);
    slow.chunk_delay = Duration::from_millis(10);
    let mut bridge = FetchBridge::new(Arc::new(slow));

    for _ in 0..3 {
        bridge.start(FetchRequest::new("test://cancel")).unwrap();
        assert_eq!(bridge.cancel(), FetchOutcome::Cancelled);
        assert!(bridge.is_idle());
    }
}
