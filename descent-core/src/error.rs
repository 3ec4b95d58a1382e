//! Structured errors
//!
//! Failures from matrix and optimizer code are values. They carry a
//! machine-readable code alongside the human-readable message.

use crate::{MatrixError, OptimError};
use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const OUT_OF_RANGE: &str = "OUT_OF_RANGE";
    pub const SHAPE_MISMATCH: &str = "SHAPE_MISMATCH";
    pub const INCOMPATIBLE_DIMENSIONS: &str = "INCOMPATIBLE_DIMENSIONS";
    pub const INVALID_SHAPE: &str = "INVALID_SHAPE";
    pub const RAGGED_ROWS: &str = "RAGGED_ROWS";
    // Optimizer-specific error codes
    pub const LINE_SEARCH_EXHAUSTED: &str = "LINE_SEARCH_EXHAUSTED";
    pub const NOT_DESCENT: &str = "NOT_DESCENT";
    pub const NOT_CONVERGED: &str = "NOT_CONVERGED";
    pub const INVALID_PARAMETER: &str = "INVALID_PARAMETER";
    pub const NON_FINITE: &str = "NON_FINITE";
}

/// Structured error with a stable code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescentError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Propagation notes
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub notes: Vec<String>,
}

impl DescentError {
    /// Create a new error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            notes: Vec::new(),
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: add propagation note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl std::fmt::Display for DescentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for DescentError {}

impl From<MatrixError> for DescentError {
    fn from(err: MatrixError) -> Self {
        let message = err.to_string();
        match err {
            MatrixError::OutOfRange { .. } | MatrixError::LinearOutOfRange { .. } => {
                Self::new(codes::OUT_OF_RANGE, message)
                    .with_suggestion("Indices are 1-based: use 1..=rows and 1..=cols")
            }
            MatrixError::ShapeMismatch { .. } => Self::new(codes::SHAPE_MISMATCH, message)
                .with_suggestion("Both operands must have the same number of rows and columns"),
            MatrixError::IncompatibleDimensions { .. } => Self::new(codes::INCOMPATIBLE_DIMENSIONS, message)
                .with_suggestion("Left operand columns must equal right operand rows"),
            MatrixError::InvalidShape { .. } => Self::new(codes::INVALID_SHAPE, message),
            MatrixError::RaggedRows { .. } => Self::new(codes::RAGGED_ROWS, message)
                .with_suggestion("Every row must have the same length"),
        }
    }
}

impl From<OptimError> for DescentError {
    fn from(err: OptimError) -> Self {
        let message = err.to_string();
        match err {
            OptimError::Matrix(inner) => Self::from(inner).with_note("raised during optimization"),
            OptimError::LineSearchExhausted { .. } => Self::new(codes::LINE_SEARCH_EXHAUSTED, message)
                .with_suggestion("Check that the search direction is a descent direction"),
            OptimError::NotDescent { .. } => Self::new(codes::NOT_DESCENT, message)
                .with_suggestion("Use a direction d with gradient(x)ᵀd < 0, such as the negative gradient"),
            OptimError::NotConverged { .. } => Self::new(codes::NOT_CONVERGED, message)
                .with_suggestion("Raise max_iterations or loosen epsilon"),
            OptimError::InvalidParameter { .. } => Self::new(codes::INVALID_PARAMETER, message)
                .with_suggestion("Require s > 0 and beta, sigma in (0, 1)"),
            OptimError::NonFinite { .. } => Self::new(codes::NON_FINITE, message)
                .with_suggestion("Check the objective and gradient for overflow or NaN"),
        }
    }
}
