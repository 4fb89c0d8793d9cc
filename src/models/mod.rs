//! Storage-facing models and their domain conversions.

#[cfg(feature = "server")]
pub mod config;
pub mod item;
pub mod local;
pub mod room;
