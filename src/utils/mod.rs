// Small helpers shared by the engine and the UI
pub mod app_time;
pub mod time_utils;

pub use time_utils::TimeUtils;
