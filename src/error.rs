use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("invalid timer state: {0}")]
    InvalidState(&'static str),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("report i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type BenchResult<T> = Result<T, BenchError>;
