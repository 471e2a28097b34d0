use crate::{
    error::{SimulateError, SimulateResult},
    model::hit_result::{HitResult, GREAT_WEIGHT, MISS_WEIGHT, OK_WEIGHT},
};

/// Hitresult counts of a simulated osu!taiko play.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TaikoStatistics {
    /// Amount of 300s.
    pub n300: u32,
    /// Amount of 100s.
    pub n100: u32,
    /// Amount of 50s. Not used by osu!taiko and hence always `0` for
    /// generated statistics.
    pub n50: u32,
    /// Amount of misses.
    pub misses: u32,
}

impl TaikoStatistics {
    /// Create new statistics from the osu!taiko relevant counts.
    pub const fn new(n300: u32, n100: u32, misses: u32) -> Self {
        Self {
            n300,
            n100,
            n50: 0,
            misses,
        }
    }

    /// The count of the given [`HitResult`].
    pub const fn get(&self, result: HitResult) -> u32 {
        match result {
            HitResult::Great => self.n300,
            HitResult::Ok => self.n100,
            HitResult::Meh => self.n50,
            HitResult::Miss => self.misses,
        }
    }

    /// Iterate over all hitresults and their counts.
    pub fn iter(&self) -> impl Iterator<Item = (HitResult, u32)> + '_ {
        HitResult::ALL
            .into_iter()
            .map(move |result| (result, self.get(result)))
    }

    /// Return the total amount of hits by adding up all hitresults that
    /// are weighted by osu!taiko, i.e. everything but 50s.
    pub fn total_hits(&self) -> u64 {
        self.iter()
            .filter(|(result, _)| result.taiko_weight().is_some())
            .map(|(_, count)| u64::from(count))
            .sum()
    }

    /// Sum of all hitresults multiplied by their weight.
    pub fn weighted_total(&self) -> u64 {
        u64::from(GREAT_WEIGHT) * u64::from(self.n300)
            + u64::from(OK_WEIGHT) * u64::from(self.n100)
            + u64::from(MISS_WEIGHT) * u64::from(self.misses)
    }

    /// Calculate the accuracy between `0.0` and `1.0` for these statistics.
    ///
    /// Returns [`SimulateError::DivisionUndefined`] if there are no hits.
    pub fn accuracy(&self) -> SimulateResult<f64> {
        let total_hits = self.total_hits();

        if total_hits == 0 {
            return Err(SimulateError::DivisionUndefined);
        }

        let numerator = self.weighted_total();
        let denominator = u64::from(GREAT_WEIGHT) * total_hits;

        Ok(numerator as f64 / denominator as f64)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn accuracy_mixed() {
        let stats = TaikoStatistics::new(180, 20, 0);

        assert_eq!(stats.weighted_total(), 380);
        assert!((stats.accuracy().unwrap() - 0.95).abs() < f64::EPSILON);
    }

    #[test]
    fn accuracy_all_misses() {
        let stats = TaikoStatistics::new(0, 0, 100);

        assert_eq!(stats.accuracy(), Ok(0.0));
    }

    #[test]
    fn accuracy_no_objects() {
        let stats = TaikoStatistics::default();

        assert_eq!(stats.accuracy(), Err(SimulateError::DivisionUndefined));
    }

    #[test]
    fn accuracy_large_counts() {
        let stats = TaikoStatistics::new(u32::MAX, 1, 0);

        assert_eq!(stats.total_hits(), u64::from(u32::MAX) + 1);

        let expected = (2.0 * f64::from(u32::MAX) + 1.0) / (2.0 * (f64::from(u32::MAX) + 1.0));
        assert!((stats.accuracy().unwrap() - expected).abs() < f64::EPSILON);

        let stats = TaikoStatistics::new(u32::MAX, 0, 1);

        assert!(stats.accuracy().is_ok());
    }

    #[test]
    fn n50_does_not_count() {
        let stats = TaikoStatistics {
            n300: 10,
            n100: 0,
            n50: 10,
            misses: 0,
        };

        assert_eq!(stats.total_hits(), 10);
        assert_eq!(stats.accuracy(), Ok(1.0));
    }

    #[test]
    fn iter_order() {
        let stats = TaikoStatistics::new(3, 2, 1);
        let collected: Vec<_> = stats.iter().collect();

        assert_eq!(
            collected,
            [
                (HitResult::Great, 3),
                (HitResult::Ok, 2),
                (HitResult::Meh, 0),
                (HitResult::Miss, 1),
            ]
        );
    }

    proptest! {
        #[test]
        fn accuracy_is_pure(n300 in 0_u32..5000, n100 in 0_u32..5000, misses in 0_u32..5000) {
            let stats = TaikoStatistics::new(n300, n100, misses);

            prop_assert_eq!(stats.accuracy(), stats.accuracy());

            if let Ok(acc) = stats.accuracy() {
                prop_assert!((0.0..=1.0).contains(&acc));
            }
        }
    }
}
