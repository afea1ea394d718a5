//! HTTP handlers for all web routes.

pub mod dashboard;
pub mod diseases;
pub mod symptoms;
pub mod search;
pub mod statistics;
pub mod meta;
