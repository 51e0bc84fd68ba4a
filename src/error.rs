use thiserror::Error;

/// Engine error types.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("empty bar series for {0}")]
    EmptySeries(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("computation failed: {0}")]
    Compute(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
