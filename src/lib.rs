//! Library to simulate hitresults of [osu!taiko] plays.
//!
//! ## Description
//!
//! Given the amount of objects of a map, a target accuracy, and an amount of
//! misses, `rosu-sim` generates the hitresults a play with that accuracy
//! would have had. The accuracy of the generated hitresults is then
//! calculated again since whole hitresults can only approximate the
//! requested value.
//!
//! The weights follow osu!taiko: a 300 is worth two, a 100 is worth one, and
//! a miss is worth nothing.
//!
//! ## Usage
//!
//! ```
//! use rosu_sim::taiko::{TaikoSimulate, TaikoStatistics};
//!
//! let attrs = TaikoSimulate::new(200)
//!     .accuracy(95.0)
//!     .calculate()
//!     .unwrap();
//!
//! assert_eq!(attrs.statistics, TaikoStatistics::new(180, 20, 0));
//! assert!((attrs.accuracy - 0.95).abs() < f64::EPSILON);
//!
//! // Specifying 100s overrides the accuracy
//! let stats = TaikoSimulate::new(300)
//!     .misses(5)
//!     .n100(20)
//!     .generate_statistics()
//!     .unwrap();
//!
//! assert_eq!(stats.n300, 275);
//!
//! println!("{}", attrs.play_info());
//! ```
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | No features |
//! | `tracing` | Decisions during hitresult generation, e.g. clamping an unreachable accuracy, will be logged through `tracing`. | [`tracing`]
//! | `serde` | Result types implement `serde::Serialize`. | [`serde`]
//!
//! [osu!taiko]: https://osu.ppy.sh/wiki/en/Game_mode/osu%21taiko
//! [`tracing`]: https://docs.rs/tracing
//! [`serde`]: https://docs.rs/serde

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]

#[doc(inline)]
pub use self::{
    error::{SimulateError, SimulateResult},
    model::hit_result::HitResult,
    report::PlayInfo,
    taiko::{TaikoSimulate, TaikoSimulateAttributes, TaikoStatistics},
};

/// Types for osu!taiko simulations.
pub mod taiko;

/// Types used in and around this crate.
pub mod model;

mod error;
mod report;
mod util;
