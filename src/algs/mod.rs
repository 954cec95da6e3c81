//! Re-export public algorithms.

pub mod advance;

pub use advance::{Advance, AdvanceStrategy, Tier, advance, distance, next, prev, tier_of};
