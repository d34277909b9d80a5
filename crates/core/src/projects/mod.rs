//! Project catalogue: named categories for time entries

pub mod ports;
mod service;

pub use service::ProjectService;
