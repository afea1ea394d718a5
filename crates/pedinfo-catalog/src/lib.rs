//! pedinfo-catalog — Static disease catalog and its query surface.
//!   - Reference dataset (symptoms, diseases)
//!   - Synthetic seasonal statistics
//!   - Filtering and lookup operations

pub mod catalog;
pub mod dataset;
pub mod query;
pub mod statistics;

pub use catalog::Catalog;
pub use query::{DiseaseFilter, IntArg, StatisticsFilter};
