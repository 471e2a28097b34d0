use thiserror::Error;

/// `Result<_, SimulateError>`
pub type SimulateResult<T> = Result<T, SimulateError>;

/// Anything that could go wrong while simulating a play.
#[derive(Copy, Clone, Debug, Error, PartialEq)]
pub enum SimulateError {
    /// The accuracy was not a finite value between `0.0` and `100.0`.
    #[error("accuracy must be between 0 and 100, got {0}")]
    InvalidAccuracy(f64),
    /// The combo percentage was not a finite value between `0.0` and `100.0`.
    #[error("combo percentage must be between 0 and 100, got {0}")]
    InvalidComboPercent(f64),
    /// More misses than objects.
    #[error("{misses} misses exceed the total of {total} objects")]
    TooManyMisses { misses: u32, total: u32 },
    /// More goods than objects that were not missed.
    #[error("{goods} goods exceed the {remaining} objects that were not missed")]
    TooManyGoods { goods: u32, remaining: u32 },
    /// Accuracy was requested on a play without any scorable objects.
    #[error("accuracy is undefined for a play without objects")]
    DivisionUndefined,
    /// The requested accuracy cannot be reached with the given misses.
    ///
    /// Only returned for [`UnrealizablePolicy::Reject`].
    ///
    /// [`UnrealizablePolicy::Reject`]: crate::taiko::UnrealizablePolicy::Reject
    #[error(
        "accuracy of {}% is unreachable with {misses} misses out of {total} objects",
        .requested * 100.0
    )]
    UnrealizableAccuracy {
        requested: f64,
        misses: u32,
        total: u32,
    },
}

impl SimulateError {
    /// Whether the error stems from invalid input that was rejected before
    /// any computation took place.
    pub const fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidAccuracy(_)
                | Self::InvalidComboPercent(_)
                | Self::TooManyMisses { .. }
                | Self::TooManyGoods { .. }
        )
    }
}
