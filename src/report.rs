use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::{model::hit_result::HitResult, taiko::TaikoSimulateAttributes};

/// Printable summary of a simulated play.
///
/// Its [`Display`] implementation lists the accuracy, the combo, and each
/// relevant hitresult, one attribute per line.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlayInfo {
    /// Accuracy between `0.0` and `100.0`.
    pub accuracy: f64,
    /// Maximum combo of the play.
    pub combo: u32,
    /// Maximum possible combo of the map.
    pub max_combo: u32,
    /// Combo in percent of the maximum combo, rounded to two decimals.
    pub combo_percent: f64,
    /// Amount of misses.
    pub misses: u32,
    /// Amount of 100s.
    pub n100: u32,
    /// Amount of 300s.
    pub n300: u32,
}

impl PlayInfo {
    /// The attributes as name-value pairs in the order they're displayed.
    pub fn attributes(&self) -> [(&'static str, String); 5] {
        [
            ("Accuracy", format!("{}%", self.accuracy)),
            (
                "Combo",
                format!("{} ({}%)", self.combo, self.combo_percent),
            ),
            (HitResult::Miss.name(), self.misses.to_string()),
            (HitResult::Ok.name(), self.n100.to_string()),
            (HitResult::Great.name(), self.n300.to_string()),
        ]
    }
}

impl From<TaikoSimulateAttributes> for PlayInfo {
    fn from(attrs: TaikoSimulateAttributes) -> Self {
        Self {
            accuracy: attrs.accuracy_percent(),
            combo: attrs.combo,
            max_combo: attrs.max_combo,
            combo_percent: attrs.combo_percent(),
            misses: attrs.statistics.misses,
            n100: attrs.statistics.n100,
            n300: attrs.statistics.n300,
        }
    }
}

impl Display for PlayInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (i, (name, value)) in self.attributes().iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }

            write!(f, "{name:<10}: {value}")?;
        }

        Ok(())
    }
}
