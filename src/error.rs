use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures at the edges of the crate. List operations themselves never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(String),
}

// ParseIntError carries no token, callers that know it should build Error::Parse themselves
impl From<std::num::ParseIntError> for Error {
    fn from(value: std::num::ParseIntError) -> Self {
        Error::Parse(value.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::Io(value.to_string())
    }
}
