//! Backend API configuration constants and types.

use std::time::Duration;

/// Configuration for the backend HTTP client
/// (This is the runtime struct the dashboard client is built from)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub base_url: String,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: API.base_url.to_string(),
            request_timeout: Duration::from_secs(API.client.request_timeout_secs),
            connect_timeout: Duration::from_secs(API.client.connect_timeout_secs),
        }
    }
}

impl ApiSettings {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout = Duration::from_secs(secs.max(1));
        self
    }
}

/// Path segments of the REST endpoints, joined onto the base URL.
pub struct ApiPaths {
    /// GET, returns the snapshot list
    pub top_stocks: &'static [&'static str],
    /// POST, `<prefix>/{ticker}/<suffix>?months=N`
    pub analyze_prefix: &'static [&'static str],
    pub analyze_suffix: &'static str,
    /// Query parameter carrying the window length
    pub months_param: &'static str,
}

/// Default values for the HTTP client
pub struct ClientDefaults {
    // The analysis endpoint runs a language model, so this is generous
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    /// Non-2xx bodies are kept for diagnostics, truncated to this many chars
    pub max_error_body_chars: usize,
}

/// The Master API Configuration Struct
pub struct ApiDefaults {
    pub base_url: &'static str,
    pub paths: ApiPaths,
    pub client: ClientDefaults,
    /// Environment variable overriding the base URL (native)
    pub base_url_env: &'static str,
    /// Environment variable overriding the request timeout (native)
    pub timeout_env: &'static str,
    /// Global JS variable overriding the base URL (wasm)
    pub base_url_js_global: &'static str,
}

pub const API: ApiDefaults = ApiDefaults {
    base_url: "http://127.0.0.1:8000",
    paths: ApiPaths {
        top_stocks: &["api", "stocks", "top10"],
        analyze_prefix: &["api", "stocks"],
        analyze_suffix: "analyze",
        months_param: "months",
    },
    client: ClientDefaults {
        request_timeout_secs: 60,
        connect_timeout_secs: 5,
        max_error_body_chars: 512,
    },
    base_url_env: "REALTICKER_API_URL",
    timeout_env: "REALTICKER_TIMEOUT_SECS",
    base_url_js_global: "REALTICKER_API_BASE",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_point_at_local_backend() {
        let settings = ApiSettings::default();
        assert_eq!(settings.base_url, "http://127.0.0.1:8000");
        assert_eq!(settings.request_timeout, Duration::from_secs(60));
    }

    #[test]
    fn zero_timeout_is_clamped_to_one_second() {
        let settings = ApiSettings::default().with_request_timeout_secs(0);
        assert_eq!(settings.request_timeout, Duration::from_secs(1));
    }
}
