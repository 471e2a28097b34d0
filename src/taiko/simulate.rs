use std::cmp;

use crate::{
    error::{SimulateError, SimulateResult},
    model::hit_result::{GREAT_WEIGHT, MISS_WEIGHT, OK_WEIGHT},
    util::round_half_even,
};

use super::{attributes::TaikoSimulateAttributes, statistics::TaikoStatistics};

/// How to handle an accuracy that cannot be reached with the given amount
/// of misses, e.g. 100% accuracy with a miss.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum UnrealizablePolicy {
    /// Clamp the amount of 300s to the nearest reachable value.
    #[default]
    Clamp,
    /// Return [`SimulateError::UnrealizableAccuracy`].
    Reject,
}

/// Simulated play on an osu!taiko map.
///
/// Holds all settings of the simulation. Unspecified values fall back to a
/// full combo SS, i.e. 100% accuracy, no misses, and the maximum combo.
#[derive(Copy, Clone, Debug, PartialEq)]
#[must_use]
pub struct TaikoSimulate {
    total_objects: u32,
    max_combo: Option<u32>,
    accuracy: f64,
    misses: u32,
    n100: Option<u32>,
    combo: Option<u32>,
    percent_combo: f64,
    policy: UnrealizablePolicy,
}

impl TaikoSimulate {
    /// Create a new simulation for a map with the given amount of
    /// scorable objects.
    ///
    /// For osu!taiko these are all circles; drumrolls and swells do not
    /// produce any of the simulated hitresults.
    pub const fn new(total_objects: u32) -> Self {
        Self {
            total_objects,
            max_combo: None,
            accuracy: 100.0,
            misses: 0,
            n100: None,
            combo: None,
            percent_combo: 100.0,
            policy: UnrealizablePolicy::Clamp,
        }
    }

    /// Specify the accuracy of the play between `0.0` and `100.0`.
    /// This will be used to generate matching hitresults.
    ///
    /// The resulting accuracy is rounded to the nearest value that is
    /// possible for the amount of objects.
    pub const fn accuracy(mut self, acc: f64) -> Self {
        self.accuracy = acc;

        self
    }

    /// Specify the amount of misses of the play.
    pub const fn misses(mut self, n_misses: u32) -> Self {
        self.misses = n_misses;

        self
    }

    /// Specify the amount of 100s of the play.
    ///
    /// If set, the accuracy is ignored and the 300s fill the remaining
    /// objects.
    pub const fn n100(mut self, n100: u32) -> Self {
        self.n100 = Some(n100);

        self
    }

    /// Specify the max combo of the play.
    pub const fn combo(mut self, combo: u32) -> Self {
        self.combo = Some(combo);

        self
    }

    /// Specify the max combo as percentage between `0.0` and `100.0` of
    /// the map's maximum combo.
    ///
    /// Ignored if [`TaikoSimulate::combo`] is set.
    pub const fn percent_combo(mut self, percent_combo: f64) -> Self {
        self.percent_combo = percent_combo;

        self
    }

    /// Override the map's maximum combo.
    ///
    /// Defaults to the amount of objects.
    pub const fn max_combo(mut self, max_combo: u32) -> Self {
        self.max_combo = Some(max_combo);

        self
    }

    /// Specify how to handle an unreachable accuracy.
    ///
    /// Defaults to [`UnrealizablePolicy::Clamp`].
    pub const fn unrealizable_policy(mut self, policy: UnrealizablePolicy) -> Self {
        self.policy = policy;

        self
    }

    /// Create the [`TaikoStatistics`] of the simulated play.
    pub fn generate_statistics(&self) -> SimulateResult<TaikoStatistics> {
        self.validate()?;

        let total_result_count = self.total_objects;
        let misses = self.misses;
        let n_remaining = total_result_count - misses;

        if let Some(n100) = self.n100 {
            #[cfg(feature = "tracing")]
            tracing::debug!(n100, misses, "Generating 300s from fixed 100s");

            return Ok(TaikoStatistics::new(n_remaining - n100, n100, misses));
        }

        let acc = self.accuracy / 100.0;
        let target_total =
            round_half_even(acc * f64::from(total_result_count) * f64::from(GREAT_WEIGHT)) as i64;

        // Every hit counts as 100 at first, each 300 adds the difference.
        let baseline = i64::from(OK_WEIGHT) * i64::from(n_remaining)
            + i64::from(MISS_WEIGHT) * i64::from(misses);
        let raw_n300 = (target_total - baseline) / i64::from(GREAT_WEIGHT - OK_WEIGHT);

        #[cfg(feature = "tracing")]
        tracing::debug!(target_total, raw_n300, misses, "Generating hitresults from accuracy");

        let n300 = if (0..=i64::from(n_remaining)).contains(&raw_n300) {
            raw_n300 as u32
        } else {
            self.resolve_unrealizable(raw_n300, n_remaining)?
        };

        Ok(TaikoStatistics::new(n300, n_remaining - n300, misses))
    }

    /// Simulate the play, including its accuracy and combo.
    pub fn calculate(&self) -> SimulateResult<TaikoSimulateAttributes> {
        if !(self.percent_combo.is_finite() && (0.0..=100.0).contains(&self.percent_combo)) {
            return Err(SimulateError::InvalidComboPercent(self.percent_combo));
        }

        let statistics = self.generate_statistics()?;
        let accuracy = statistics.accuracy()?;

        let max_combo = self.max_combo.unwrap_or(self.total_objects);
        let max_possible_combo = max_combo.saturating_sub(self.misses);

        let combo = self.combo.unwrap_or_else(|| {
            round_half_even(self.percent_combo / 100.0 * f64::from(max_combo)) as u32
        });

        Ok(TaikoSimulateAttributes {
            statistics,
            accuracy,
            combo: cmp::min(combo, max_possible_combo),
            max_combo,
        })
    }

    fn validate(&self) -> SimulateResult<()> {
        // Fixed 100s make the accuracy irrelevant.
        if self.n100.is_none()
            && !(self.accuracy.is_finite() && (0.0..=100.0).contains(&self.accuracy))
        {
            return Err(SimulateError::InvalidAccuracy(self.accuracy));
        }

        if self.misses > self.total_objects {
            return Err(SimulateError::TooManyMisses {
                misses: self.misses,
                total: self.total_objects,
            });
        }

        let remaining = self.total_objects - self.misses;

        match self.n100 {
            Some(goods) if goods > remaining => {
                Err(SimulateError::TooManyGoods { goods, remaining })
            }
            _ => Ok(()),
        }
    }

    fn resolve_unrealizable(&self, raw_n300: i64, n_remaining: u32) -> SimulateResult<u32> {
        match self.policy {
            UnrealizablePolicy::Clamp => {
                let n300 = raw_n300.clamp(0, i64::from(n_remaining)) as u32;

                #[cfg(feature = "tracing")]
                tracing::warn!(
                    accuracy = self.accuracy,
                    misses = self.misses,
                    raw_n300,
                    n300,
                    "Accuracy is unreachable, clamping 300s"
                );

                Ok(n300)
            }
            UnrealizablePolicy::Reject => Err(SimulateError::UnrealizableAccuracy {
                requested: self.accuracy / 100.0,
                misses: self.misses,
                total: self.total_objects,
            }),
        }
    }
}

impl Default for TaikoSimulate {
    fn default() -> Self {
        Self::new(0)
    }
}
