use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArfError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: cannot parse '{token}' as a number")]
    Parse { line: usize, token: String },

    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    #[error("{0} not implemented")]
    NotImplemented(&'static str),
}

pub type ArfResult<T> = Result<T, ArfError>;
