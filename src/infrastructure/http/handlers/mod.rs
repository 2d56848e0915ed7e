//! HTTP Handlers

mod articles;
mod heartbeat;

pub use articles::*;
pub use heartbeat::*;
