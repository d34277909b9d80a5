//! Export sinks for entry lists

pub mod csv;
