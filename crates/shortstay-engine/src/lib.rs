//! # shortstay-engine
//!
//! Enforcement of the Schengen short-stay rule: a traveler may spend at most
//! 90 days inside any rolling 180-day window.
//!
//! The engine tracks a [`Plan`] of disjoint [`Stay`] intervals and answers two
//! questions about a candidate stay: does it overlap anything already planned,
//! and would it push the 180-day lookback window ending on its last day past
//! the 90-day allowance? It performs no I/O and formats no text; rejections are
//! reported as symbolic [`ErrorCode`]s with parameters so callers can localize.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use shortstay_engine::{ErrorCode, Plan, Stay};
//!
//! let date = |m, d| NaiveDate::from_ymd_opt(2026, m, d).unwrap();
//! let mut plan = Plan::new();
//!
//! let spring = Stay::new("Lisbon", date(3, 1), date(4, 29)).unwrap();
//! assert!(plan.insert_stay(spring).success);
//!
//! // 60 days already used; another 31 days inside the window is one too many.
//! let summer = Stay::new("Rome", date(5, 1), date(5, 31)).unwrap();
//! let outcome = plan.can_insert(&summer);
//! assert_eq!(outcome.code, ErrorCode::Limit);
//! assert_eq!(outcome.params, vec!["1".to_string()]);
//! ```
//!
//! ## Modules
//!
//! - [`stay`] — a single validated, labelled date interval
//! - [`plan`] — the ordered collection of stays and the 90/180 rule
//! - [`outcome`] — structured, localizable results
//! - [`error`] — Error types

pub mod error;
pub mod outcome;
pub mod plan;
pub mod stay;

pub use error::{PlanError, StayError};
pub use outcome::{ErrorCode, Outcome};
pub use plan::{Plan, SCHENGEN_MAXSTAY, SCHENGEN_PERIOD};
pub use stay::Stay;
