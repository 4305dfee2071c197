//! One user's plan together with the store it is persisted to.
//!
//! The plan is written back after every successful change and never after a
//! rejected one.

use std::path::PathBuf;

use shortstay_engine::{Outcome, Plan, PlanError, Stay};
use thiserror::Error;
use tracing::info;

use crate::store::{JsonStore, StoreError};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("stored plan in {path} cannot be restored: {source}")]
    Restore {
        path: PathBuf,
        #[source]
        source: PlanError,
    },
}

#[derive(Debug)]
pub struct Session {
    plan: Plan,
    store: JsonStore,
}

impl Session {
    /// Restore the plan held in `store`, or start an empty one.
    pub fn open(store: JsonStore) -> Result<Self, SessionError> {
        let plan = match store.load()? {
            Some(stays) => Plan::restore(stays).map_err(|source| SessionError::Restore {
                path: store.path().to_path_buf(),
                source,
            })?,
            None => Plan::new(),
        };
        Ok(Self { plan, store })
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    pub fn check(&self, candidate: &Stay) -> Outcome {
        self.plan.can_insert(candidate)
    }

    /// Insert `candidate` and persist the plan if it was accepted.
    ///
    /// If saving fails the session keeps the plan it had before the call.
    pub fn add(&mut self, candidate: Stay) -> Result<Outcome, SessionError> {
        let mut next = self.plan.clone();
        let outcome = next.insert_stay(candidate);
        if outcome.success {
            self.commit(next)?;
            info!(position = ?outcome.inserted_index(), "stay added");
        }
        Ok(outcome)
    }

    /// Remove the stay at `index` and persist the plan. `None` if there is
    /// no stay there; nothing is written in that case.
    ///
    /// If saving fails the stay stays in the plan.
    pub fn remove(&mut self, index: usize) -> Result<Option<Stay>, SessionError> {
        let mut next = self.plan.clone();
        let Some(removed) = next.try_remove_stay(index) else {
            return Ok(None);
        };
        self.commit(next)?;
        info!(index, name = removed.name(), "stay removed");
        Ok(Some(removed))
    }

    /// Persist `next`, then make it the current plan.
    fn commit(&mut self, next: Plan) -> Result<(), SessionError> {
        self.store.save(next.stays())?;
        self.plan = next;
        Ok(())
    }
}
