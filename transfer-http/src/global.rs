//! Process-Wide Transfer Stack
//!
//! The HTTP library's shared state (client pools, TLS configuration) is a
//! single process-wide resource with an owner-counted lifecycle: the first
//! [`TransferStack::acquire`] initializes it, every holder keeps it alive
//! through its [`StackHandle`], and dropping the last handle tears it down.
//! It is explicitly not tied to individual bridge construction.

use std::sync::Mutex;

use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use tracing::debug;

use crate::client::HttpConfig;
use crate::error::{HttpError, Result};

/// The shared clients built once per stack lifetime.
#[derive(Clone)]
pub(crate) struct SharedClients {
    /// Follows redirects up to the configured hop limit.
    pub(crate) following: Client,
    /// Never follows redirects.
    pub(crate) direct: Client,
}

struct StackState {
    owners: usize,
    shared: Option<SharedClients>,
}

static STACK: Mutex<StackState> = Mutex::new(StackState {
    owners: 0,
    shared: None,
});

/// Entry point to the process-wide stack.
pub struct TransferStack;

impl TransferStack {
    /// Acquire shared ownership of the stack.
    ///
    /// The first acquire initializes the client pools from `config`; later
    /// acquires share the already-built pools and their configuration, in
    /// the manner of a library-global init whose first caller wins.
    ///
    /// # Errors
    ///
    /// [`HttpError::Init`] if the clients cannot be built.
    pub fn acquire(config: &HttpConfig) -> Result<StackHandle> {
        let mut state = STACK.lock().expect("transfer stack poisoned");
        if state.shared.is_none() {
            debug!("initializing process-wide transfer stack");
            state.shared = Some(SharedClients {
                following: build_client(config, true)?,
                direct: build_client(config, false)?,
            });
        }
        state.owners += 1;
        Ok(StackHandle { _priv: () })
    }
}

/// Shared ownership of the process-wide stack. Cloning a handle is another
/// acquire; dropping the last one tears the stack down.
pub struct StackHandle {
    _priv: (),
}

impl StackHandle {
    pub(crate) fn clients(&self) -> SharedClients {
        STACK
            .lock()
            .expect("transfer stack poisoned")
            .shared
            .clone()
            .expect("stack held by a handle is initialized")
    }
}

impl Clone for StackHandle {
    fn clone(&self) -> Self {
        let mut state = STACK.lock().expect("transfer stack poisoned");
        state.owners += 1;
        Self { _priv: () }
    }
}

impl Drop for StackHandle {
    fn drop(&mut self) {
        let mut state = STACK.lock().expect("transfer stack poisoned");
        state.owners -= 1;
        if state.owners == 0 {
            debug!("tearing down process-wide transfer stack");
            state.shared = None;
        }
    }
}

fn build_client(config: &HttpConfig, follow: bool) -> Result<Client> {
    let redirect = if follow {
        Policy::limited(config.max_redirects)
    } else {
        Policy::none()
    };

    Client::builder()
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .pool_max_idle_per_host(config.pool_max_idle_per_host)
        .user_agent(&config.user_agent)
        .redirect(redirect)
        .build()
        .map_err(|e| HttpError::Init(e.to_string()))
}
