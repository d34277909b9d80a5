//! Appointments: manual entries plus destructive ICS import

pub mod ports;
mod service;

pub use service::{CalendarService, NewAppointment};
