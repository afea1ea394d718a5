//! pedinfo-common — Shared record types and errors used across all pedinfo crates.

pub mod error;
pub mod entities;

// Re-export commonly used types
pub use entities::{
    AgeGroup, Disease, DiseaseSummary, DiseaseWithStats, FilterMeta, Season, StatisticItem,
    Symptom,
};
pub use error::{ApiError, PedinfoError};
