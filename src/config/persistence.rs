//! File persistence configuration

// App state persistence
/// Path for saving/loading application UI state
pub const APP_STATE_PATH: &str = ".realticker_state.json";
