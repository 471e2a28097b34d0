use crate::{report::PlayInfo, util::round_half_even_to};

use super::statistics::TaikoStatistics;

/// The result of simulating an osu!taiko play.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TaikoSimulateAttributes {
    /// The generated hitresults.
    pub statistics: TaikoStatistics,
    /// The accuracy between `0.0` and `1.0` of the generated hitresults.
    ///
    /// Might differ slightly from the requested accuracy since hitresults
    /// are whole numbers.
    pub accuracy: f64,
    /// Maximum combo of the play.
    pub combo: u32,
    /// Maximum possible combo of the map.
    pub max_combo: u32,
}

impl TaikoSimulateAttributes {
    /// Return the accuracy between `0.0` and `100.0`.
    pub fn accuracy_percent(&self) -> f64 {
        self.accuracy * 100.0
    }

    /// The combo as percentage of the maximum combo, rounded to two
    /// decimal places.
    ///
    /// Maps without any combo return `0.0`.
    pub fn combo_percent(&self) -> f64 {
        if self.max_combo == 0 {
            return 0.0;
        }

        round_half_even_to(
            100.0 * f64::from(self.combo) / f64::from(self.max_combo),
            2,
        )
    }

    /// Summary of the play in a printable format.
    pub fn play_info(&self) -> PlayInfo {
        PlayInfo::from(*self)
    }
}

impl From<TaikoSimulateAttributes> for TaikoStatistics {
    fn from(attributes: TaikoSimulateAttributes) -> Self {
        attributes.statistics
    }
}
