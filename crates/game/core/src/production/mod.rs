//! City production accumulation.
//!
//! The only mutable state in the crate: callers own one [`ProductionBreakdown`]
//! per production type, city and turn, and hand it to the classifier
//! explicitly.
mod breakdown;

pub use breakdown::{CityProduction, ProductionBreakdown, ResolvedProduction};
