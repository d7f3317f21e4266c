//! Market listing views that need no holdings.

mod movers;

pub use movers::{top_movers, TopMovers, DEFAULT_MOVERS_LIMIT};
