//! Form structs received from the web UI and their validated payloads.

pub mod items;
pub mod rooms;
