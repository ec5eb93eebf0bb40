//! Error types for ambience.

use thiserror::Error;

/// Result type alias for ambience operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Configuration problems found by `validate()`.
///
/// Everything at runtime is infallible; these only come out of config checks at startup.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A sampling range is empty, reversed or not finite.
    #[error("invalid range for `{field}`: {start}..{end}")]
    InvalidRange {
        field: &'static str,
        start: f32,
        end: f32,
    },

    /// A value that must be strictly positive is not.
    #[error("`{field}` must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("`{field}` must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },

    /// A value that must lie in `[0, 1]` does not.
    #[error("`{field}` must lie in [0, 1], got {value}")]
    OutOfUnitInterval { field: &'static str, value: f32 },
}

impl Error {
    pub(crate) fn check_range(field: &'static str, range: &std::ops::Range<f32>) -> Result<()> {
        let ok = range.start.is_finite() && range.end.is_finite() && range.start < range.end;
        if ok {
            Ok(())
        } else {
            Err(Error::InvalidRange {
                field,
                start: range.start,
                end: range.end,
            })
        }
    }

    pub(crate) fn check_positive(field: &'static str, value: f32) -> Result<()> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(Error::NonPositive { field, value })
        }
    }

    pub(crate) fn check_finite(field: &'static str, value: f32) -> Result<()> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(Error::NotFinite { field, value })
        }
    }

    pub(crate) fn check_unit(field: &'static str, value: f32) -> Result<()> {
        if (0.0..=1.0).contains(&value) {
            Ok(())
        } else {
            Err(Error::OutOfUnitInterval { field, value })
        }
    }
}
