//! Aggregation and report shaping over stored entries

pub mod aggregate;
pub mod merge;
mod service;

pub use service::{ReportingService, TargetComparison};
