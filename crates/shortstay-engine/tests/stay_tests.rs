//! Tests for stay construction and the interval relations.

use chrono::NaiveDate;
use shortstay_engine::{ErrorCode, Stay, StayError};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Construction
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn valid_stay_keeps_its_fields() {
    let stay = Stay::new("Vienna", date(2026, 4, 1), date(2026, 4, 10)).unwrap();
    assert_eq!(stay.name(), "Vienna");
    assert_eq!(stay.start_date(), date(2026, 4, 1));
    assert_eq!(stay.end_date(), date(2026, 4, 10));
}

#[test]
fn length_counts_both_ends() {
    let stay = Stay::new("a", date(2026, 4, 1), date(2026, 4, 10)).unwrap();
    assert_eq!(stay.length(), 10);
}

#[test]
fn single_day_stay_has_length_one() {
    let stay = Stay::new("day trip", date(2026, 4, 1), date(2026, 4, 1)).unwrap();
    assert_eq!(stay.length(), 1);
}

#[test]
fn length_spans_leap_day() {
    let stay = Stay::new("a", date(2024, 2, 1), date(2024, 3, 1)).unwrap();
    assert_eq!(stay.length(), 30);
}

#[test]
fn reversed_range_is_order_error() {
    let err = Stay::new("a", date(2026, 4, 10), date(2026, 4, 9)).unwrap_err();
    assert_eq!(
        err,
        StayError::Order {
            start: date(2026, 4, 10),
            end: date(2026, 4, 9),
        }
    );
    assert_eq!(err.code(), ErrorCode::Order);
}

#[test]
fn ninety_days_is_allowed() {
    // Jan 31 + Feb 28 + Mar 31 = 90
    let stay = Stay::new("a", date(2026, 1, 1), date(2026, 3, 31)).unwrap();
    assert_eq!(stay.length(), 90);
}

#[test]
fn ninety_one_days_is_length_error() {
    let err = Stay::new("a", date(2026, 1, 1), date(2026, 4, 1)).unwrap_err();
    assert_eq!(err, StayError::Length { days: 91 });
    assert_eq!(err.code(), ErrorCode::Length);
}

#[test]
fn order_is_checked_before_length() {
    let err = Stay::new("a", date(2027, 1, 1), date(2026, 1, 1)).unwrap_err();
    assert!(matches!(err, StayError::Order { .. }));
}

#[test]
fn empty_name_is_not_validated() {
    assert!(Stay::new("", date(2026, 1, 1), date(2026, 1, 2)).is_ok());
}

// ─────────────────────────────────────────────────────────────────────────────
// Relations
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn earlier_stay_precedes_later() {
    let a = Stay::new("a", date(2026, 1, 1), date(2026, 1, 5)).unwrap();
    let b = Stay::new("b", date(2026, 1, 10), date(2026, 1, 12)).unwrap();
    assert!(a.precedes(&b));
    assert!(b.follows(&a));
    assert!(!a.follows(&b));
    assert!(!b.precedes(&a));
    assert!(a.is_disjoint(&b));
    assert!(b.is_disjoint(&a));
}

#[test]
fn back_to_back_stays_are_disjoint() {
    let a = Stay::new("a", date(2026, 1, 1), date(2026, 1, 5)).unwrap();
    let b = Stay::new("b", date(2026, 1, 6), date(2026, 1, 8)).unwrap();
    assert!(a.precedes(&b));
    assert!(a.is_disjoint(&b));
}

#[test]
fn shared_boundary_day_is_overlap() {
    let a = Stay::new("a", date(2026, 1, 1), date(2026, 1, 5)).unwrap();
    let b = Stay::new("b", date(2026, 1, 5), date(2026, 1, 8)).unwrap();
    assert!(!a.precedes(&b));
    assert!(!a.follows(&b));
    assert!(!a.is_disjoint(&b));
}

#[test]
fn contained_stay_is_overlap() {
    let outer = Stay::new("outer", date(2026, 1, 1), date(2026, 1, 31)).unwrap();
    let inner = Stay::new("inner", date(2026, 1, 10), date(2026, 1, 12)).unwrap();
    assert!(!outer.is_disjoint(&inner));
    assert!(!inner.is_disjoint(&outer));
}

#[test]
fn stay_overlaps_itself() {
    let a = Stay::new("a", date(2026, 1, 1), date(2026, 1, 1)).unwrap();
    assert!(!a.is_disjoint(&a));
}
