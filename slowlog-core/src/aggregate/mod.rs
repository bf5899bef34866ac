//! Aggregation engine
//!
//! Buckets [`QueryRecord`](crate::log::QueryRecord)s by signature and
//! derives per-bucket order statistics:
//!
//! QueryRecord
//! Normalizer (signature)
//! Aggregator (signature → QueryGroup, discovery order)
//! sorted(SortKey)
//!

mod aggregator;
mod group;
mod sort;
#[cfg(test)]
mod tests;

pub use aggregator::Aggregator;
pub use group::{GroupSummary, QueryGroup};
pub use sort::{SortKey, sorted};
