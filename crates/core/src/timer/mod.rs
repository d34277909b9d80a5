//! Countdown/stopwatch timer with a durable cloud-style mirror

pub mod ports;
mod service;

pub use service::TimerService;
