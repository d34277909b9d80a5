//! Time entry lifecycle: validation, exclusivity rules, collision handling

pub mod ports;
pub mod rules;
mod service;

pub use service::EntryService;
