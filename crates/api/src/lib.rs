//! # Zeitlog App
//!
//! HTTP application layer - routes and the application context.
//!
//! This crate contains:
//! - axum routes (HTTP surface over the core services)
//! - Application context (dependency injection)
//! - Main entry point and setup
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Exposes the services over HTTP

pub mod context;
pub mod routes;
pub mod utils;

// Re-export for convenience
pub use context::AppContext;
pub use routes::router;
