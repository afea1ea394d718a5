//! pedinfo-web — HTTP service for the childhood infectious disease catalog.
//! Provides:
//!   - JSON query endpoints (diseases, symptoms, statistics, filter metadata)
//!   - A single-page browser UI with static assets

pub mod config;
pub mod router;
pub mod handlers;
pub mod state;
