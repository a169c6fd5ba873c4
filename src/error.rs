use chrono::{DateTime, Utc};

/// Errors raised while configuring a mining run or assembling its results.
///
/// Every variant is a caller error detected at a construction boundary;
/// mining itself never fails on well-formed input. [`Error::OutOfRange`] is
/// the invalid-argument case for numeric thresholds, so both it and
/// [`Error::InvalidArgument`] count as [`is_invalid_argument`](Error::is_invalid_argument).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{name} must be in [{min}, {max}], got {value}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("end time {end} precedes start time {start}")]
    InvalidTimeRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("rule generation was requested but no rule set was supplied")]
    MissingRuleSet,

    #[error("a rule set was supplied but rule generation was not requested")]
    UnexpectedRuleSet,
}

impl Error {
    /// Whether a caller-supplied argument was rejected.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_) | Error::OutOfRange { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Fails unless `min <= value <= max`. NaN is always rejected.
pub(crate) fn ensure_in_range(name: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(Error::OutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}

/// Minimum support must lie in `(0, 1]`.
pub(crate) fn ensure_min_support(value: f64) -> Result<()> {
    ensure_in_range("min support", value, 0.0, 1.0)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidArgument(
            "min support must be greater than 0".to_string(),
        ))
    }
}

pub(crate) fn ensure_positive_count(name: &str, count: Option<usize>) -> Result<()> {
    match count {
        Some(0) => Err(Error::InvalidArgument(format!("{} must be at least 1", name))),
        _ => Ok(()),
    }
}
