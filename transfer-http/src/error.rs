use thiserror::Error;

#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Failed to initialize transfer stack: {0}")]
    Init(String),
}

pub type Result<T> = std::result::Result<T, HttpError>;
