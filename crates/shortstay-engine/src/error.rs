//! Error types for stay construction and plan operations.

use chrono::NaiveDate;
use thiserror::Error;

use crate::outcome::ErrorCode;

/// A candidate interval that cannot form a [`Stay`](crate::Stay).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StayError {
    /// The end date falls before the start date.
    #[error("stay ends on {end} before it starts on {start}")]
    Order { start: NaiveDate, end: NaiveDate },

    /// The interval is longer than the maximum permitted single stay.
    #[error("stay lasts {days} days, more than the {max} allowed", max = crate::SCHENGEN_MAXSTAY)]
    Length { days: i64 },
}

impl StayError {
    /// The symbolic code reported to presentation layers.
    pub fn code(&self) -> ErrorCode {
        match self {
            StayError::Order { .. } => ErrorCode::Order,
            StayError::Length { .. } => ErrorCode::Length,
        }
    }
}

/// A stay rejected by a [`Plan`](crate::Plan), or a stored sequence that
/// cannot be restored into one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// The candidate shares at least one day with a planned stay.
    #[error("stay overlaps a planned stay")]
    Overlap,

    /// The candidate would exceed the allowance inside its lookback window.
    #[error("stay exceeds the 90/180-day limit by {excess} days")]
    Limit { excess: i64 },

    /// A restored sequence has an entry overlapping an earlier one.
    #[error("stored stay at position {index} overlaps an earlier stay")]
    Restore { index: usize },
}

impl PlanError {
    /// The symbolic code reported to presentation layers.
    ///
    /// Restore failures are not part of the rule taxonomy and report as an
    /// overlap, which is what they are.
    pub fn code(&self) -> ErrorCode {
        match self {
            PlanError::Overlap | PlanError::Restore { .. } => ErrorCode::Overlap,
            PlanError::Limit { .. } => ErrorCode::Limit,
        }
    }
}

pub type Result<T> = std::result::Result<T, PlanError>;
