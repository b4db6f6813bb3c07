//! HTTP handlers.

pub mod heroes;
