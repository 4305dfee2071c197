//! The ordered collection of stays and the 90/180-day rule.
//!
//! A candidate stay is accepted when it shares no day with any planned stay
//! and when the days of planned stays inside its lookback window, plus its
//! own days, stay within [`SCHENGEN_MAXSTAY`].
//!
//! The lookback window for a candidate ending on day `E` is `(E - 180, E]`.
//! Its lower bound is open: a stay starting exactly on `E - 180` is not
//! counted. Only stays starting before the candidate are counted, so a
//! candidate is checked against its past, not its future.

use chrono::{Days, NaiveDate};
use tracing::{debug, trace};

use crate::error::{PlanError, Result};
use crate::outcome::Outcome;
use crate::stay::Stay;

/// Length of the rolling window, in days.
pub const SCHENGEN_PERIOD: i64 = 180;

/// Days allowed inside any window, and the longest a single stay may be.
pub const SCHENGEN_MAXSTAY: i64 = 90;

/// Every stay a traveler has made or intends to make.
///
/// No two stays share a day. The sequence is only ever changed through
/// [`Plan::insert_stay`] and [`Plan::remove_stay`]; readers get a slice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    stays: Vec<Stay>,
}

impl Plan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a plan from a previously stored sequence, keeping its order.
    ///
    /// # Errors
    /// Returns `PlanError::Restore` naming the first entry that overlaps an
    /// earlier one.
    pub fn restore(stays: Vec<Stay>) -> Result<Self> {
        for (index, stay) in stays.iter().enumerate() {
            if stays[..index].iter().any(|earlier| !earlier.is_disjoint(stay)) {
                return Err(PlanError::Restore { index });
            }
        }
        debug!(count = stays.len(), "restored plan");
        Ok(Self { stays })
    }

    /// Read-only view of the planned stays in plan order.
    pub fn stays(&self) -> &[Stay] {
        &self.stays
    }

    pub fn into_stays(self) -> Vec<Stay> {
        self.stays
    }

    pub fn len(&self) -> usize {
        self.stays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stays.is_empty()
    }

    /// Total days across all stays. Informational; not a rule check.
    pub fn days(&self) -> i64 {
        total_days(&self.stays)
    }

    /// Days of planned stays that count against `candidate`'s lookback window.
    pub fn window_days(&self, candidate: &Stay) -> i64 {
        self.window(candidate).map(Stay::length).sum()
    }

    /// Check whether `candidate` could be inserted, without inserting it.
    ///
    /// # Errors
    /// Returns `PlanError::Overlap` if the candidate shares a day with any
    /// planned stay, checked before the limit. Returns `PlanError::Limit`
    /// with the number of days over the allowance otherwise.
    pub fn check(&self, candidate: &Stay) -> Result<()> {
        if self.stays.iter().any(|s| !s.is_disjoint(candidate)) {
            return Err(PlanError::Overlap);
        }
        let excess = self.window_days(candidate) + candidate.length() - SCHENGEN_MAXSTAY;
        if excess > 0 {
            return Err(PlanError::Limit { excess });
        }
        Ok(())
    }

    /// Insert `candidate` if it passes [`Plan::check`], returning its position.
    ///
    /// The position follows three cases, in order:
    /// 1. nothing planned follows the candidate: append;
    /// 2. nothing planned falls in its lookback window: put it first;
    /// 3. otherwise: put it just before the first stay that follows it.
    ///
    /// Case 2 is what keeps a stay older than everything planned at the
    /// front. It does not search, so an older stay that lands between two
    /// planned stays separated by more than a window goes first as well.
    pub fn try_insert(&mut self, candidate: Stay) -> Result<usize> {
        if let Err(err) = self.check(&candidate) {
            trace!(name = candidate.name(), %err, "rejected stay");
            return Err(err);
        }
        let next = self.stays.iter().position(|s| s.follows(&candidate));
        let index = match next {
            None => self.stays.len(),
            Some(_) if self.window(&candidate).next().is_none() => 0,
            Some(next) => next,
        };
        debug!(
            name = candidate.name(),
            start = %candidate.start_date(),
            end = %candidate.end_date(),
            index,
            "inserted stay"
        );
        self.stays.insert(index, candidate);
        Ok(index)
    }

    /// Non-mutating feasibility check, as a structured outcome.
    pub fn can_insert(&self, candidate: &Stay) -> Outcome {
        match self.check(candidate) {
            Ok(()) => Outcome::accepted(),
            Err(err) => err.into(),
        }
    }

    /// Insert `candidate`, as a structured outcome. On success the single
    /// parameter is the position it was inserted at. On failure the plan is
    /// unchanged and the outcome is the one [`Plan::can_insert`] reports.
    pub fn insert_stay(&mut self, candidate: Stay) -> Outcome {
        match self.try_insert(candidate) {
            Ok(index) => Outcome::inserted(index),
            Err(err) => err.into(),
        }
    }

    /// Remove and return the stay at `index`.
    ///
    /// Removal never re-checks the rule: dropping a stay can only free days.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn remove_stay(&mut self, index: usize) -> Stay {
        let removed = self.stays.remove(index);
        debug!(name = removed.name(), index, "removed stay");
        removed
    }

    /// Remove the stay at `index`, or return `None` if there is none.
    pub fn try_remove_stay(&mut self, index: usize) -> Option<Stay> {
        (index < self.stays.len()).then(|| self.remove_stay(index))
    }

    /// Planned stays that start inside the candidate's lookback window and
    /// before the candidate itself.
    fn window<'a>(&'a self, candidate: &'a Stay) -> impl Iterator<Item = &'a Stay> + 'a {
        let window_start = window_start(candidate.end_date());
        self.stays.iter().filter(move |s| {
            s.start_date() > window_start && s.start_date() < candidate.start_date()
        })
    }
}

/// Exclusive lower bound of the window ending on `end`. Saturates at the
/// earliest representable date.
fn window_start(end: NaiveDate) -> NaiveDate {
    end.checked_sub_days(Days::new(SCHENGEN_PERIOD as u64))
        .unwrap_or(NaiveDate::MIN)
}

fn total_days(stays: &[Stay]) -> i64 {
    stays.iter().map(Stay::length).sum()
}
