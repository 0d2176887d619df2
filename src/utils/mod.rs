//! Additional data structures used by the algorithms.

mod disjoint;
mod external_ids;

pub use disjoint::*;
pub use external_ids::*;
