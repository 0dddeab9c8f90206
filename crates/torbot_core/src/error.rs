use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A selection that is not one of the fixed operations.
    #[error("invalid operation: {0:?}")]
    InvalidOperation(String),
}
