use std::fmt::{Display, Formatter, Result as FmtResult};

/// The judgement a single hit object can receive.
///
/// Weights are matched exhaustively, every variant states its weight
/// explicitly.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum HitResult {
    /// A hit within the great hit window, i.e. a 300.
    Great,
    /// A hit within the ok hit window, i.e. a 100.
    Ok,
    /// Unused in osu!taiko, always `0` for simulated plays.
    Meh,
    /// A missed object.
    Miss,
}

impl HitResult {
    /// All hitresults in the order they are stored.
    pub const ALL: [Self; 4] = [Self::Great, Self::Ok, Self::Meh, Self::Miss];

    /// The weight of the hitresult in osu!taiko's accuracy formula.
    ///
    /// Returns `None` if the hitresult is not part of osu!taiko scoring and
    /// must neither count towards the numerator nor the denominator.
    pub const fn taiko_weight(self) -> Option<u32> {
        match self {
            Self::Great => Some(2),
            Self::Ok => Some(1),
            Self::Meh => None,
            Self::Miss => Some(0),
        }
    }

    /// The name used when displaying hitresults.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Great => "Great",
            Self::Ok => "Ok",
            Self::Meh => "Meh",
            Self::Miss => "Miss",
        }
    }
}

impl Display for HitResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

/// Weight of a [`HitResult::Great`], the maximum per object.
pub const GREAT_WEIGHT: u32 = unwrap_weight(HitResult::Great);

/// Weight of a [`HitResult::Ok`].
pub const OK_WEIGHT: u32 = unwrap_weight(HitResult::Ok);

/// Weight of a [`HitResult::Miss`].
pub const MISS_WEIGHT: u32 = unwrap_weight(HitResult::Miss);

const fn unwrap_weight(result: HitResult) -> u32 {
    match result.taiko_weight() {
        Some(weight) => weight,
        None => panic!("hitresult has no osu!taiko weight"),
    }
}
