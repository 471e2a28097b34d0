pub use self::{
    attributes::TaikoSimulateAttributes,
    simulate::{TaikoSimulate, UnrealizablePolicy},
    statistics::TaikoStatistics,
};

mod attributes;
mod simulate;
mod statistics;
