// Backend access: the REST client and its error taxonomy
pub mod api_error;
pub mod http_client;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{AnalysisResult, AnalysisWindow, StockSnapshot};

// Re-export commonly used types
pub use api_error::ApiError;
pub use http_client::HttpDashboardClient;

/// Body of the backend's root endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BackendHealth {
    pub message: String,
}

/// Everything the dashboard asks of its backend.
/// The engine only sees this trait, so tests can script the backend.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait DashboardApi: Send + Sync {
    /// GET the top-stocks snapshot.
    async fn top_stocks(&self) -> Result<Vec<StockSnapshot>, ApiError>;

    /// POST an analysis request for `ticker` over `window`.
    async fn analyze(
        &self,
        ticker: &str,
        window: AnalysisWindow,
    ) -> Result<AnalysisResult, ApiError>;

    /// GET the backend root. Used for the status bar only.
    async fn health(&self) -> Result<BackendHealth, ApiError>;

    /// A unique identifier for this implementation (shown in logs)
    fn signature(&self) -> String;
}
