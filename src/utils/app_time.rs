// src/utils/app_time.rs
// std::time::Instant panics in the browser, so wasm goes through web_time.

use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
pub type AppInstant = std::time::Instant;

#[cfg(target_arch = "wasm32")]
pub type AppInstant = web_time::Instant;

#[cfg(not(target_arch = "wasm32"))]
pub fn now() -> AppInstant {
    std::time::Instant::now()
}

#[cfg(target_arch = "wasm32")]
pub fn now() -> AppInstant {
    web_time::Instant::now()
}

/// Time elapsed between `earlier` and `later`, zero if the clock went backwards.
pub fn elapsed_between(earlier: AppInstant, later: AppInstant) -> Duration {
    later.checked_duration_since(earlier).unwrap_or_default()
}
