//! A single continuous stay: a labelled, inclusive range of calendar days.
//!
//! A `Stay` can only exist in a valid state. [`Stay::new`] rejects reversed
//! ranges and ranges longer than [`SCHENGEN_MAXSTAY`], and deserialization
//! goes through the same constructor.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::StayError;
use crate::plan::SCHENGEN_MAXSTAY;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "StayRecord", into = "StayRecord")]
pub struct Stay {
    name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl Stay {
    /// Build a stay covering `start_date..=end_date`.
    ///
    /// The name is an opaque display label and is not checked here.
    ///
    /// # Errors
    /// Returns `StayError::Order` if `end_date` is before `start_date`.
    /// Returns `StayError::Length` if the stay spans more than 90 days.
    pub fn new(
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self, StayError> {
        if end_date < start_date {
            return Err(StayError::Order {
                start: start_date,
                end: end_date,
            });
        }
        let days = inclusive_days(start_date, end_date);
        if days > SCHENGEN_MAXSTAY {
            return Err(StayError::Length { days });
        }
        Ok(Self {
            name: name.into(),
            start_date,
            end_date,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Number of days in the stay, counting both the first and the last.
    pub fn length(&self) -> i64 {
        inclusive_days(self.start_date, self.end_date)
    }

    /// True if this stay ends strictly before `other` begins.
    pub fn precedes(&self, other: &Stay) -> bool {
        self.end_date < other.start_date
    }

    /// True if this stay begins strictly after `other` ends.
    pub fn follows(&self, other: &Stay) -> bool {
        self.start_date > other.end_date
    }

    /// True if the two stays share no day. A stay ending the day before
    /// another begins is disjoint from it; one ending on the same day is not.
    pub fn is_disjoint(&self, other: &Stay) -> bool {
        self.precedes(other) || self.follows(other)
    }
}

fn inclusive_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// Unvalidated wire shape of a [`Stay`].
#[derive(Serialize, Deserialize)]
struct StayRecord {
    name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl TryFrom<StayRecord> for Stay {
    type Error = StayError;

    fn try_from(record: StayRecord) -> Result<Self, Self::Error> {
        Stay::new(record.name, record.start_date, record.end_date)
    }
}

impl From<Stay> for StayRecord {
    fn from(stay: Stay) -> Self {
        Self {
            name: stay.name,
            start_date: stay.start_date,
            end_date: stay.end_date,
        }
    }
}
