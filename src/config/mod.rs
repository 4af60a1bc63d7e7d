//! Configuration module for the dashboard.

pub mod api;

mod debug; // Private: files use crate::config::DEBUG_FLAGS, not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod persistence;

// Re-export commonly used items
pub use api::{API, ApiSettings};
pub use persistence::APP_STATE_PATH;
