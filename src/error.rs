use thiserror::Error as ThisError;

/// Error type for the calcengine crate
#[derive(ThisError, Debug, Clone, PartialEq)]
pub enum Error {
    /// An operation was given input outside of its mathematical domain
    #[error("DomainError: {0}")]
    DomainError(String),
    /// The divisor of a division was exactly zero
    #[error("DivisionByZero: arithmetic operation resulted in dividing by zero")]
    DivisionByZero,
    /// The result of an operation does not fit in a finite `f64`
    #[error("Overflow: {0}")]
    Overflow(String),
    /// Error while parsing or evaluating an expression
    #[error("ParseError: {0}")]
    ParseError(String),
}

impl Error {
    pub(crate) fn domain(message: impl Into<String>) -> Self {
        Self::DomainError(message.into())
    }

    pub(crate) fn overflow(message: impl Into<String>) -> Self {
        Self::Overflow(message.into())
    }

    pub(crate) fn parse(message: impl Into<String>) -> Self {
        Self::ParseError(message.into())
    }
}
