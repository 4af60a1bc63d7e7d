use chrono::{DateTime, Local};
use std::time::Duration;

pub struct TimeUtils;

impl TimeUtils {
    pub const CLOCK_FORMAT: &'static str = "%H:%M:%S";
    pub const STANDARD_TIME_FORMAT: &'static str = "%Y-%m-%d";

    /// "2026-10-16 14:02:11" style stamp for when a snapshot arrived.
    pub fn format_local_stamp(datetime: &DateTime<Local>) -> String {
        format!(
            "{} {}",
            datetime.format(Self::STANDARD_TIME_FORMAT),
            datetime.format(Self::CLOCK_FORMAT)
        )
    }

    /// Compact human duration: `850ms`, `2.4s`, `1.5m`, `2.0h`.
    pub fn format_duration_short(duration: Duration) -> String {
        if duration.is_zero() {
            return "0s".to_string();
        }

        let millis = duration.as_millis();
        if millis < 1_000 {
            return format!("{}ms", millis);
        }

        let seconds = duration.as_secs_f64();
        if seconds < 60.0 {
            format!("{:.1}s", seconds)
        } else if seconds < 3_600.0 {
            format!("{:.1}m", seconds / 60.0)
        } else {
            format!("{:.1}h", seconds / 3_600.0)
        }
    }
}
