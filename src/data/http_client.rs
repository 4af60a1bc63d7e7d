use anyhow::{Context, bail};
use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;

use super::{ApiError, BackendHealth, DashboardApi};
use crate::config::{API, ApiSettings};
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::domain::{AnalysisResult, AnalysisWindow, StockSnapshot};

/// REST client for the RealTicker backend.
#[derive(Debug, Clone)]
pub struct HttpDashboardClient {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpDashboardClient {
    pub fn new(settings: &ApiSettings) -> anyhow::Result<Self> {
        let base_url = Url::parse(settings.base_url.trim())
            .with_context(|| format!("invalid backend base URL '{}'", settings.base_url))?;
        if base_url.cannot_be_a_base() {
            bail!("backend base URL '{}' cannot carry a path", settings.base_url);
        }

        let builder = reqwest::Client::builder();
        // Timeouts are enforced by the browser on wasm
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder
            .timeout(settings.request_timeout)
            .connect_timeout(settings.connect_timeout);
        let http = builder.build().context("failed to build reqwest client")?;

        Ok(Self { http, base_url })
    }

    pub(crate) fn top_stocks_url(&self) -> Result<Url, ApiError> {
        self.endpoint(API.paths.top_stocks.iter().copied())
    }

    pub(crate) fn analyze_url(&self, ticker: &str, window: AnalysisWindow) -> Result<Url, ApiError> {
        let ticker = ticker.trim();
        if ticker.is_empty() {
            return Err(ApiError::InvalidUrl("empty ticker".to_string()));
        }

        let mut segments: Vec<&str> = API.paths.analyze_prefix.to_vec();
        segments.push(ticker);
        segments.push(API.paths.analyze_suffix);
        let mut url = self.endpoint(segments)?;
        url.query_pairs_mut()
            .append_pair(API.paths.months_param, &window.months().to_string());
        Ok(url)
    }

    /// Appends percent-encoded segments to the base path (keeps any prefix like `/backend/`).
    fn endpoint<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::status(status.as_u16(), &text));
        }
        Ok(serde_json::from_str(&text)?)
    }

    fn log_request(method: &str, url: &Url) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_request_lifecycle {
            log::info!("→ {} {}", method, url);
        }
        #[cfg(not(debug_assertions))]
        let _ = (method, url);
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl DashboardApi for HttpDashboardClient {
    async fn top_stocks(&self) -> Result<Vec<StockSnapshot>, ApiError> {
        let url = self.top_stocks_url()?;
        Self::log_request("GET", &url);
        let response = self.http.get(url).send().await?;
        Self::read_json(response).await
    }

    async fn analyze(
        &self,
        ticker: &str,
        window: AnalysisWindow,
    ) -> Result<AnalysisResult, ApiError> {
        let url = self.analyze_url(ticker, window)?;
        Self::log_request("POST", &url);
        let response = self.http.post(url).send().await?;
        Self::read_json(response).await
    }

    async fn health(&self) -> Result<BackendHealth, ApiError> {
        let url = self.base_url.clone();
        Self::log_request("GET", &url);
        let response = self.http.get(url).send().await?;
        Self::read_json(response).await
    }

    fn signature(&self) -> String {
        format!("HTTP {}", self.base_url)
    }
}
