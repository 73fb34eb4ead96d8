pub mod builder;
pub mod candidates;
pub mod expand;
pub mod filter;
pub mod flatten;
pub mod stats;

pub use builder::{build, build_detached, build_flat};
pub use candidates::{parent_candidates, ParentCandidate};
pub use expand::ExpandController;
pub use filter::{filter, CategoryFilter};
pub use flatten::{flatten, FlatRow};
pub use stats::CategoryStats;
