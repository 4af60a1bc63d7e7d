#![allow(clippy::collapsible_if)]

// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod ui;
pub mod utils;

// The engine
pub mod engine;

// Re-export commonly used types
pub use config::{API, APP_STATE_PATH, ApiSettings};
pub use data::{ApiError, DashboardApi, HttpDashboardClient};
pub use domain::{AnalysisResult, AnalysisWindow, StockSnapshot};
pub use engine::{DashboardEngine, TaskSpawner};
pub use ui::RealTickerApp;
pub use utils::app_time;

use std::sync::Arc;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "RealTicker stock dashboard", long_about = None)]
pub struct Cli {
    /// Base URL of the RealTicker backend
    #[arg(long, env = API.base_url_env, default_value = API.base_url)]
    pub api_base_url: String,

    /// Per-request timeout in seconds (analysis calls can be slow)
    #[arg(long, env = API.timeout_env, default_value_t = API.client.request_timeout_secs)]
    pub request_timeout_secs: u64,

    /// Preselect the analysis window: 1, 3 or 6 months
    #[arg(long)]
    pub months: Option<AnalysisWindow>,
}

impl Cli {
    pub fn api_settings(&self) -> ApiSettings {
        ApiSettings::default()
            .with_base_url(self.api_base_url.clone())
            .with_request_timeout_secs(self.request_timeout_secs)
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    settings: &ApiSettings,
    spawner: TaskSpawner,
    initial_window: Option<AnalysisWindow>,
) -> anyhow::Result<Box<dyn eframe::App>> {
    // 1. The backend client
    let client = HttpDashboardClient::new(settings)?;
    let api: Arc<dyn DashboardApi> = Arc::new(client);

    // 2. The engine (owns every outstanding request)
    let engine = DashboardEngine::new(api, spawner);

    let app = RealTickerApp::new(cc, engine, initial_window);
    Ok(Box::new(app))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn cli_defaults_match_api_config() {
        let cli = Cli::try_parse_from(["realticker"]).unwrap();
        let settings = cli.api_settings();
        assert_eq!(settings.base_url, API.base_url);
        assert_eq!(
            settings.request_timeout,
            Duration::from_secs(API.client.request_timeout_secs)
        );
        assert_eq!(cli.months, None);
    }

    #[test]
    fn cli_accepts_overrides() {
        let cli = Cli::try_parse_from([
            "realticker",
            "--api-base-url",
            "https://stocks.example.com/v2",
            "--request-timeout-secs",
            "0",
            "--months",
            "3",
        ])
        .unwrap();
        let settings = cli.api_settings();
        assert_eq!(settings.base_url, "https://stocks.example.com/v2");
        assert_eq!(settings.request_timeout, Duration::from_secs(1));
        assert_eq!(cli.months, Some(AnalysisWindow::ThreeMonths));
    }

    #[test]
    fn cli_rejects_unsupported_window() {
        assert!(Cli::try_parse_from(["realticker", "--months", "12"]).is_err());
    }
}
