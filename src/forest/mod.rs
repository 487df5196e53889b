//! The genealogical tree engine
//!
//! Members linked by a single parent reference form a forest. This module
//! owns the derived index over that forest, the lineage resolver, search,
//! statistics, and the mutation guard that keeps the forest invariants
//! intact.

pub mod guard;
pub mod index;
pub mod lineage;
pub mod search;
pub mod service;
pub mod stats;

pub use index::ForestIndex;
pub use service::FamilyService;
pub use stats::TreeStats;
