//! # Zeitlog Domain
//!
//! Business domain types and models for Zeitlog.
//!
//! This crate contains:
//! - Domain data types (TimeEntry, Project, Task, Appointment, TimerState)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants and the leaf algorithms (time arithmetic, period
//!   resolution, ICS parsing)
//!
//! ## Architecture
//! - No dependencies on other Zeitlog crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
// Re-export the leaf algorithms
pub use utils::ics::{parse_ics, ParsedEvent};
pub use utils::period::resolve_range;
pub use utils::time::{hours_between, minutes_of};
