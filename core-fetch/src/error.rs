use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("Internal fault: {0}")]
    Internal(String),

    #[error("A fetch is already in progress on this bridge")]
    Busy,
}

pub type Result<T> = std::result::Result<T, FetchError>;
