//! Custom error types for paycheck-planner
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for paycheck-planner operations
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Configuration-related errors (bad start date, year bound, income)
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Grocery template import errors
    #[error("Template error: {0}")]
    Template(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl PlannerError {
    /// Check if this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for PlannerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for PlannerError {
    fn from(err: csv::Error) -> Self {
        Self::Template(err.to_string())
    }
}

/// Result type alias for paycheck-planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;
