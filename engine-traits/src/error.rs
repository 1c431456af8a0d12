use thiserror::Error;

use crate::value::ValueKind;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Type mismatch: expected {expected:?}, got {actual:?}")]
    TypeMismatch {
        expected: ValueKind,
        actual: ValueKind,
    },

    #[error("Unknown block: {0}")]
    UnknownBlock(String),

    #[error("Block activation failed: {0}")]
    Activation(String),

    #[error("Task aborted during activation")]
    Aborted,
}

pub type Result<T> = std::result::Result<T, EngineError>;
