//! Push notification delivery over HTTP

mod client;

pub use client::HttpPushNotifier;
