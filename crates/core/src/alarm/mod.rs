//! Alarm sweep: fires push notifications for expired countdown timers

pub mod ports;
mod service;

pub use service::{AlarmService, AlarmSweep};
