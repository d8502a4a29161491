//! Error types for argument checks

use thiserror::Error;

/// Rejection reported as a plain message
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct CheckError {
    message: String,
}

impl CheckError {
    /// Create an error from a rejection message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The rejection message
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Rejection that keeps the offending argument and the reason as fields
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{arg} - {problem}")]
pub struct ArgError {
    /// The argument that was rejected
    pub arg: i64,
    /// Why the argument was rejected
    pub problem: String,
}

impl ArgError {
    /// Create an error for a rejected argument
    pub fn new(arg: i64, problem: impl Into<String>) -> Self {
        Self {
            arg,
            problem: problem.into(),
        }
    }
}
