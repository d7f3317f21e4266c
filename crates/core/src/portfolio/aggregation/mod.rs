//! Portfolio aggregation - joins market listings with holdings.

mod aggregation_model;
mod aggregator;

pub use aggregation_model::*;
pub use aggregator::*;
