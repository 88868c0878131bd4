//! Calendar dates for export runs.
//!
//! # Design
//!
//! An export run visits every calendar date in an inclusive range, ascending.
//! [`DateRange`] is a plain value implementing `Iterator<Item = NaiveDate>`:
//! finite, deterministic, and side-effect-free.  It is `Clone`, so restarting
//! a run means cloning the range and iterating again.
//!
//! Construction validates the bounds: an inverted range is an error, never an
//! empty iteration.  Callers decide whether that aborts the process or is
//! reported and ignored.

use chrono::{Duration, Local, NaiveDate};

use crate::error::{CoreError, CoreResult};

/// Timestamp format used both in the store's TEXT column and in archive rows.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Inclusive, ascending range of calendar dates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateRange {
    next: Option<NaiveDate>,
    end:  NaiveDate,
}

impl DateRange {
    /// Build the range `[start, end]`.
    ///
    /// Fails with [`CoreError::InvalidRange`] when `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> CoreResult<Self> {
        if start > end {
            return Err(CoreError::InvalidRange { start, end });
        }
        Ok(Self { next: Some(start), end })
    }

    /// Range covering exactly one date.
    pub fn single(date: NaiveDate) -> Self {
        Self { next: Some(date), end: date }
    }

    /// Number of dates the iterator has yet to yield.
    pub fn remaining(&self) -> u64 {
        match self.next {
            Some(next) => (self.end - next).num_days() as u64 + 1,
            None => 0,
        }
    }
}

impl Iterator for DateRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        self.next = if current < self.end { current.succ_opt() } else { None };
        Some(current)
    }
}

/// The default export date: yesterday, local time.
pub fn yesterday() -> NaiveDate {
    Local::now().date_naive() - Duration::days(1)
}

/// Parse an ISO `YYYY-MM-DD` date argument.
pub fn parse_date(s: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| CoreError::Parse(format!("invalid date {s:?}, expected YYYY-MM-DD")))
}
