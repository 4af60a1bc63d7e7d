use std::sync::Arc;

use crate::domain::{AnalysisResult, AnalysisWindow, MarketSnapshot, StockSnapshot};

use super::messages::{RequestToken, Transition};

/// Where the snapshot list is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListStatus {
    #[default]
    NotLoaded,
    Loading(RequestToken),
    Loaded,
    /// The last request failed; whatever list we had before is still shown
    Failed,
}

/// The single analysis slot of the dashboard.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AnalysisSlot {
    #[default]
    Absent,
    Pending {
        token: RequestToken,
        ticker: String,
        window: AnalysisWindow,
    },
    Present {
        token: RequestToken,
        ticker: String,
        window: AnalysisWindow,
        result: Arc<AnalysisResult>,
    },
}

/// Everything the view renders, as one value.
/// Never mutated in place: `apply` hands back the next state, or `None` when the
/// transition belongs to a request that is no longer the latest.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    snapshot: MarketSnapshot,
    list_status: ListStatus,
    analysis: AnalysisSlot,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&self, transition: Transition) -> Option<DashboardState> {
        match transition {
            Transition::ListRequested { token } => Some(Self {
                list_status: ListStatus::Loading(token),
                ..self.clone()
            }),
            Transition::ListLoaded {
                token,
                stocks,
                received_at,
            } => self.awaits_list(token).then(|| Self {
                snapshot: MarketSnapshot::new(stocks, received_at),
                list_status: ListStatus::Loaded,
                ..self.clone()
            }),
            Transition::ListFailed { token } => self.awaits_list(token).then(|| Self {
                list_status: ListStatus::Failed,
                ..self.clone()
            }),
            Transition::AnalysisRequested {
                token,
                ticker,
                window,
            } => Some(Self {
                analysis: AnalysisSlot::Pending {
                    token,
                    ticker,
                    window,
                },
                ..self.clone()
            }),
            Transition::AnalysisSucceeded { token, result } => match &self.analysis {
                AnalysisSlot::Pending {
                    token: pending,
                    ticker,
                    window,
                } if *pending == token => Some(Self {
                    analysis: AnalysisSlot::Present {
                        token,
                        ticker: ticker.clone(),
                        window: *window,
                        result,
                    },
                    ..self.clone()
                }),
                _ => None,
            },
            Transition::AnalysisFailed { token } => self.awaits_analysis(token).then(|| Self {
                analysis: AnalysisSlot::Absent,
                ..self.clone()
            }),
        }
    }

    fn awaits_list(&self, token: RequestToken) -> bool {
        self.list_status == ListStatus::Loading(token)
    }

    fn awaits_analysis(&self, token: RequestToken) -> bool {
        matches!(&self.analysis, AnalysisSlot::Pending { token: pending, .. } if *pending == token)
    }

    // --- Accessors for the UI ---

    pub fn stocks(&self) -> &[StockSnapshot] {
        &self.snapshot.stocks
    }

    pub fn snapshot(&self) -> &MarketSnapshot {
        &self.snapshot
    }

    pub fn list_status(&self) -> ListStatus {
        self.list_status
    }

    pub fn is_list_loading(&self) -> bool {
        matches!(self.list_status, ListStatus::Loading(_))
    }

    pub fn analysis_slot(&self) -> &AnalysisSlot {
        &self.analysis
    }

    /// The in-flight flag: true while an analysis request is outstanding.
    pub fn is_analysis_pending(&self) -> bool {
        matches!(self.analysis, AnalysisSlot::Pending { .. })
    }

    pub fn analysis(&self) -> Option<&AnalysisResult> {
        match &self.analysis {
            AnalysisSlot::Present { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn pending_ticker(&self) -> Option<&str> {
        match &self.analysis {
            AnalysisSlot::Pending { ticker, .. } => Some(ticker),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    fn sample_result() -> Arc<AnalysisResult> {
        Arc::new(AnalysisResult {
            ticker: None,
            analysis_period: "6 months".into(),
            trend: "Bullish".into(),
            risk_level: "Medium".into(),
            suggested_action: "Hold".into(),
            reason: "Earnings beat".into(),
            disclaimer: "Not financial advice".into(),
        })
    }

    fn request_analysis(state: &DashboardState, token: u64, ticker: &str) -> DashboardState {
        state
            .apply(Transition::AnalysisRequested {
                token: RequestToken(token),
                ticker: ticker.into(),
                window: AnalysisWindow::SixMonths,
            })
            .unwrap()
    }

    #[test]
    fn initial_state_is_empty_and_idle() {
        let state = DashboardState::new();
        assert!(state.stocks().is_empty());
        assert_eq!(state.list_status(), ListStatus::NotLoaded);
        assert!(!state.is_analysis_pending());
        assert!(state.analysis().is_none());
    }

    #[test]
    fn list_load_replaces_stocks_wholesale() {
        let state = DashboardState::new()
            .apply(Transition::ListRequested { token: RequestToken(1) })
            .unwrap();
        assert!(state.is_list_loading());

        let stocks = vec![
            StockSnapshot::new("AAPL", "Apple Inc", 185.4, "+1.2%", "78M"),
            StockSnapshot::new("MSFT", "Microsoft", 412.3, "+0.8%", "45M"),
        ];
        let state = state
            .apply(Transition::ListLoaded {
                token: RequestToken(1),
                stocks: stocks.clone(),
                received_at: Local::now(),
            })
            .unwrap();

        assert_eq!(state.list_status(), ListStatus::Loaded);
        assert_eq!(state.stocks(), stocks.as_slice());
        assert!(state.snapshot().received_at.is_some());
    }

    #[test]
    fn failed_refresh_keeps_previous_list() {
        let loaded = DashboardState::new()
            .apply(Transition::ListRequested { token: RequestToken(1) })
            .and_then(|s| {
                s.apply(Transition::ListLoaded {
                    token: RequestToken(1),
                    stocks: vec![StockSnapshot::new("NVDA", "NVIDIA", 875.6, "+2.4%", "64M")],
                    received_at: Local::now(),
                })
            })
            .unwrap();

        let failed = loaded
            .apply(Transition::ListRequested { token: RequestToken(2) })
            .and_then(|s| s.apply(Transition::ListFailed { token: RequestToken(2) }))
            .unwrap();

        assert_eq!(failed.list_status(), ListStatus::Failed);
        assert_eq!(failed.stocks().len(), 1);
    }

    #[test]
    fn superseded_list_response_is_discarded() {
        let state = DashboardState::new()
            .apply(Transition::ListRequested { token: RequestToken(1) })
            .and_then(|s| s.apply(Transition::ListRequested { token: RequestToken(2) }))
            .unwrap();

        let stale = state.apply(Transition::ListLoaded {
            token: RequestToken(1),
            stocks: vec![StockSnapshot::new("OLD", "Stale Co", 1.0, "0%", "1")],
            received_at: Local::now(),
        });
        assert!(stale.is_none());
        assert!(state.apply(Transition::ListFailed { token: RequestToken(1) }).is_none());
    }

    #[test]
    fn analysis_request_clears_previous_result() {
        let state = request_analysis(&DashboardState::new(), 1, "AAPL");
        let state = state
            .apply(Transition::AnalysisSucceeded {
                token: RequestToken(1),
                result: sample_result(),
            })
            .unwrap();
        assert!(state.analysis().is_some());

        let state = request_analysis(&state, 2, "MSFT");
        assert!(state.analysis().is_none());
        assert!(state.is_analysis_pending());
        assert_eq!(state.pending_ticker(), Some("MSFT"));
    }

    #[test]
    fn success_stores_result_verbatim_and_clears_in_flight() {
        let state = request_analysis(&DashboardState::new(), 7, "AAPL")
            .apply(Transition::AnalysisSucceeded {
                token: RequestToken(7),
                result: sample_result(),
            })
            .unwrap();

        assert!(!state.is_analysis_pending());
        assert_eq!(state.analysis(), Some(sample_result().as_ref()));
        match state.analysis_slot() {
            AnalysisSlot::Present { ticker, window, .. } => {
                assert_eq!(ticker, "AAPL");
                assert_eq!(*window, AnalysisWindow::SixMonths);
            }
            other => panic!("expected present slot, got {other:?}"),
        }
    }

    #[test]
    fn failure_leaves_slot_absent() {
        let state = request_analysis(&DashboardState::new(), 3, "TSLA")
            .apply(Transition::AnalysisFailed { token: RequestToken(3) })
            .unwrap();

        assert_eq!(state.analysis_slot(), &AnalysisSlot::Absent);
        assert!(!state.is_analysis_pending());
    }

    #[test]
    fn late_response_from_older_request_never_overwrites_newer_one() {
        let state = request_analysis(&DashboardState::new(), 1, "AAPL");
        let state = request_analysis(&state, 2, "MSFT");

        // Newer resolves first
        let state = state
            .apply(Transition::AnalysisSucceeded {
                token: RequestToken(2),
                result: sample_result(),
            })
            .unwrap();

        // Older resolves late and must be dropped, success or failure
        assert!(
            state
                .apply(Transition::AnalysisSucceeded {
                    token: RequestToken(1),
                    result: sample_result(),
                })
                .is_none()
        );
        assert!(state.apply(Transition::AnalysisFailed { token: RequestToken(1) }).is_none());
    }

    #[test]
    fn analysis_and_list_are_independent() {
        let state = request_analysis(&DashboardState::new(), 1, "AAPL")
            .apply(Transition::ListRequested { token: RequestToken(2) })
            .unwrap();

        assert!(state.is_analysis_pending());
        assert!(state.is_list_loading());
    }
}
