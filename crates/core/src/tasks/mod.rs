//! Task list: to-dos with due dates and render-time bucketing

pub mod ports;
mod service;

pub use service::{bucket_of, NewTask, TaskService};
