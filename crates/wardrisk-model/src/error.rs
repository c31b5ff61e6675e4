use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown data source '{0}'")]
    UnknownSource(String),
    #[error("invalid merge suffix policy: {0}")]
    InvalidSuffixPolicy(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
