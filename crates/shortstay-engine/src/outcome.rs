//! Structured results for presentation layers.
//!
//! An [`Outcome`] carries a symbolic [`ErrorCode`] plus ordered string
//! parameters instead of formatted text. Whoever shows the result to a person
//! looks up a template by [`ErrorCode::key`] and substitutes the parameters.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, StayError};

/// Symbolic result code, stable across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// No error.
    None,
    /// End date before start date.
    Order,
    /// A single stay longer than the maximum.
    Length,
    /// Candidate overlaps a planned stay.
    Overlap,
    /// Candidate breaks the 90/180 rule; the first param is the excess in days.
    Limit,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 5] = [
        ErrorCode::None,
        ErrorCode::Order,
        ErrorCode::Length,
        ErrorCode::Overlap,
        ErrorCode::Limit,
    ];

    /// Lookup key for message catalogs. Matches the serde representation.
    pub fn key(self) -> &'static str {
        match self {
            ErrorCode::None => "none",
            ErrorCode::Order => "order",
            ErrorCode::Length => "length",
            ErrorCode::Overlap => "overlap",
            ErrorCode::Limit => "limit",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The result of a plan operation as seen across the engine boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub success: bool,
    pub code: ErrorCode,
    /// Substitution values for the message template, in placeholder order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<String>,
}

impl Outcome {
    /// A candidate that passed every check.
    pub fn accepted() -> Self {
        Self {
            success: true,
            code: ErrorCode::None,
            params: Vec::new(),
        }
    }

    /// A committed insert, reporting the position the stay landed at.
    pub fn inserted(index: usize) -> Self {
        Self {
            success: true,
            code: ErrorCode::None,
            params: vec![index.to_string()],
        }
    }

    fn rejected(code: ErrorCode, params: Vec<String>) -> Self {
        Self {
            success: false,
            code,
            params,
        }
    }

    /// The position reported by [`Outcome::inserted`], if this is one.
    pub fn inserted_index(&self) -> Option<usize> {
        if !self.success {
            return None;
        }
        self.params.first().and_then(|p| p.parse().ok())
    }
}

impl From<StayError> for Outcome {
    fn from(err: StayError) -> Self {
        Outcome::rejected(err.code(), Vec::new())
    }
}

impl From<PlanError> for Outcome {
    fn from(err: PlanError) -> Self {
        let params = match err {
            PlanError::Limit { excess } => vec![excess.to_string()],
            PlanError::Overlap | PlanError::Restore { .. } => Vec::new(),
        };
        Outcome::rejected(err.code(), params)
    }
}
