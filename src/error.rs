use thiserror::Error;

#[derive(Debug, Error)]
pub enum SidewaysError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SidewaysError>;
