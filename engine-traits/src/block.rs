//! Block Abstraction and Registry
//!
//! A block is one activatable operation the engine can place in a task. Each
//! block declares the kind of value it consumes and produces so the engine
//! can type-check task graphs without knowing any block's internals.
//!
//! Blocks are registered by name into a [`BlockRegistry`]; the engine
//! instantiates them through the registered factory whenever a task graph
//! references the name.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{EngineError, Result};
use crate::scheduler::Scheduler;
use crate::value::{Value, ValueKind};

/// Static interface declaration for a block: its name and the value kinds it
/// accepts and produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockDescriptor {
    pub name: String,
    pub input: ValueKind,
    pub output: ValueKind,
}

impl BlockDescriptor {
    pub fn new(name: impl Into<String>, input: ValueKind, output: ValueKind) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }
}

/// An activatable engine operation.
///
/// `activate` runs on the scheduler's thread. A block that needs to wait for
/// something slow must suspend through the provided [`Scheduler`] rather than
/// blocking, so the engine keeps servicing other tasks.
pub trait Block: Send {
    /// The block's declared interface.
    fn descriptor(&self) -> BlockDescriptor;

    /// Run the block against one input value.
    ///
    /// # Errors
    ///
    /// [`EngineError::Aborted`] when the engine tore the owning task down
    /// mid-activation; any other variant for block-specific failures.
    fn activate(&mut self, scheduler: &mut dyn Scheduler, input: &Value) -> Result<Value>;
}

impl std::fmt::Debug for dyn Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Block")
            .field("descriptor", &self.descriptor())
            .finish()
    }
}

type BlockFactory = Box<dyn Fn() -> Box<dyn Block> + Send + Sync>;

/// Name-keyed table of block factories.
#[derive(Default)]
pub struct BlockRegistry {
    factories: HashMap<String, BlockFactory>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a block factory under `name`, replacing any previous entry.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Box<dyn Block> + Send + Sync + 'static,
    {
        self.factories.insert(name.into(), Box::new(factory));
    }

    /// Instantiate the block registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownBlock`] if nothing is registered there.
    pub fn create(&self, name: &str) -> Result<Box<dyn Block>> {
        self.factories
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| EngineError::UnknownBlock(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Descriptors of every registered block, in no particular order.
    pub fn descriptors(&self) -> Vec<BlockDescriptor> {
        self.factories
            .values()
            .map(|factory| factory().descriptor())
            .collect()
    }
}
