// src/domain/dates.rs

use chrono::{Local, NaiveDate};
use std::error::Error;
use std::fmt;

/// Format of every date typed into the form.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Source of "today" for the host tenure computation.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local calendar date of the machine running the server.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always answers the same date. Used by tests and reproducible runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    Malformed {
        field: &'static str,
        text: String,
        reason: String,
    },
    InFuture {
        field: &'static str,
        date: NaiveDate,
        today: NaiveDate,
    },
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateError::Malformed { field, text, reason } => write!(
                f,
                "{field}: '{text}' is not a valid date (expected YYYY-MM-DD: {reason})"
            ),
            DateError::InFuture { field, date, today } => {
                write!(f, "{field}: {date} is after today ({today})")
            }
        }
    }
}

impl Error for DateError {}

/// The two numeric features computed from the form's date inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Durations {
    /// Days between `host_since` and today.
    pub host_duration: i64,
    /// Days between first and last review, 0 when either is missing.
    pub review_period: i64,
}

pub fn parse_date(field: &'static str, text: &str) -> Result<NaiveDate, DateError> {
    let trimmed = text.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|e| DateError::Malformed {
        field,
        text: trimmed.to_string(),
        reason: e.to_string(),
    })
}

/// Blank text is treated the same as no value at all.
pub fn parse_optional_date(
    field: &'static str,
    text: Option<&str>,
) -> Result<Option<NaiveDate>, DateError> {
    match text.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => parse_date(field, s).map(Some),
        None => Ok(None),
    }
}

/// Computes `host_duration` and `review_period`.
///
/// Both review dates are parsed even when only one is present, so a typo in
/// either one is reported rather than quietly producing a zero period.
pub fn derive_durations(
    host_since: &str,
    first_review: Option<&str>,
    last_review: Option<&str>,
    today: NaiveDate,
) -> Result<Durations, DateError> {
    let host_since_date = parse_date("host_since", host_since)?;
    if host_since_date > today {
        return Err(DateError::InFuture {
            field: "host_since",
            date: host_since_date,
            today,
        });
    }
    let host_duration = today.signed_duration_since(host_since_date).num_days();

    let first = parse_optional_date("first_review", first_review)?;
    let last = parse_optional_date("last_review", last_review)?;

    let review_period = match (first, last) {
        (Some(first), Some(last)) => last.signed_duration_since(first).num_days(),
        _ => 0,
    };

    Ok(Durations {
        host_duration,
        review_period,
    })
}
