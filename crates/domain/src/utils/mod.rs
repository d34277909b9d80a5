//! Domain-level utilities: the leaf algorithms every service builds on.

pub mod ics;
pub mod period;
pub mod time;
