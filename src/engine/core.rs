use chrono::Local;
use std::sync::Arc;
use std::time::Duration;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::data::{ApiError, BackendHealth, DashboardApi};
use crate::domain::{AnalysisResult, AnalysisWindow, StockSnapshot};
use crate::utils::app_time::{AppInstant, now};

use super::messages::{Notice, NoticeKind, RequestToken, Transition};
use super::spawner::{TaskHandle, TaskSpawner};
use super::state::DashboardState;

type ListOutcome = Result<Vec<StockSnapshot>, ApiError>;
type AnalysisOutcome = Result<AnalysisResult, ApiError>;
type HealthOutcome = Result<BackendHealth, ApiError>;

/// One outstanding request and the token that owns it.
struct InFlight<T: Send + 'static> {
    token: RequestToken,
    started_at: AppInstant,
    task: TaskHandle<T>,
}

/// What we know about the backend from its root endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BackendStatus {
    #[default]
    Unknown,
    Checking,
    Online(String),
    Offline(String),
}

pub struct DashboardEngine {
    /// The backend (HTTP in production, scripted in tests)
    api: Arc<dyn DashboardApi>,
    spawner: TaskSpawner,

    /// The value the UI renders. Replaced, never edited.
    state: DashboardState,
    next_token: u64,

    /// Worker Communication
    list_task: Option<InFlight<ListOutcome>>,
    analysis_task: Option<InFlight<AnalysisOutcome>>,
    health_task: Option<InFlight<HealthOutcome>>,

    backend_status: BackendStatus,
    last_analysis_latency: Option<Duration>,
    notices: Vec<Notice>,
}

impl DashboardEngine {
    pub fn new(api: Arc<dyn DashboardApi>, spawner: TaskSpawner) -> Self {
        log::info!("Dashboard engine using backend: {}", api.signature());
        Self {
            api,
            spawner,
            state: DashboardState::new(),
            next_token: 0,
            list_task: None,
            analysis_task: None,
            health_task: None,
            backend_status: BackendStatus::Unknown,
            last_analysis_latency: None,
            notices: Vec::new(),
        }
    }

    /// THE FRAME LOOP.
    /// Applies every finished request and returns TRUE while anything is still in flight,
    /// which tells the UI to keep repainting.
    pub fn update(&mut self) -> bool {
        self.poll_list();
        self.poll_analysis();
        self.poll_health();
        self.is_busy()
    }

    pub fn is_busy(&self) -> bool {
        self.list_task.is_some() || self.analysis_task.is_some() || self.health_task.is_some()
    }

    // --- OPERATIONS ---

    /// Fetch the snapshot list. A newer call supersedes an older one.
    pub fn load_snapshot(&mut self) -> RequestToken {
        if let Some(previous) = self.list_task.take() {
            previous.task.cancel();
        }

        let token = self.issue_token();
        self.transition(Transition::ListRequested { token });

        let api = Arc::clone(&self.api);
        let task = self
            .spawner
            .spawn("top_stocks", async move { api.top_stocks().await });
        self.list_task = Some(InFlight {
            token,
            started_at: now(),
            task,
        });
        token
    }

    /// Ask the backend to analyse `ticker` over `window`.
    /// Clears the current result, and aborts any request still outstanding so that only
    /// the most recently initiated one can land.
    pub fn request_analysis(&mut self, ticker: &str, window: AnalysisWindow) -> RequestToken {
        if let Some(previous) = self.analysis_task.take() {
            log::info!(
                "Analysis {} superseded by a new request for {}",
                previous.token,
                ticker
            );
            previous.task.cancel();
        }

        let token = self.issue_token();
        self.transition(Transition::AnalysisRequested {
            token,
            ticker: ticker.to_string(),
            window,
        });

        let api = Arc::clone(&self.api);
        let owned_ticker = ticker.to_string();
        let task = self.spawner.spawn("analyze", async move {
            api.analyze(&owned_ticker, window).await
        });
        self.analysis_task = Some(InFlight {
            token,
            started_at: now(),
            task,
        });

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_request_lifecycle {
            log::info!("Analysis {} issued: {} over {}", token, ticker, window);
        }
        token
    }

    /// Check the backend root for the status bar. Failures are never notified.
    pub fn check_health(&mut self) {
        if self.health_task.is_some() {
            return;
        }
        let token = self.issue_token();
        self.backend_status = BackendStatus::Checking;

        let api = Arc::clone(&self.api);
        let task = self
            .spawner
            .spawn("health", async move { api.health().await });
        self.health_task = Some(InFlight {
            token,
            started_at: now(),
            task,
        });
    }

    /// Abort everything outstanding. After this no completion can reach the state.
    pub fn shutdown(&mut self) {
        if let Some(in_flight) = self.list_task.take() {
            Self::abort(in_flight);
        }
        if let Some(in_flight) = self.analysis_task.take() {
            Self::abort(in_flight);
        }
        if let Some(in_flight) = self.health_task.take() {
            Self::abort(in_flight);
        }
    }

    fn abort<T: Send + 'static>(in_flight: InFlight<T>) {
        in_flight.task.cancel();
        log::debug!(
            "Aborted outstanding '{}' task {}",
            in_flight.task.name(),
            in_flight.token
        );
    }

    // --- ACCESSORS FOR UI ---

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn backend_status(&self) -> &BackendStatus {
        &self.backend_status
    }

    pub fn last_analysis_latency(&self) -> Option<Duration> {
        self.last_analysis_latency
    }

    pub fn backend_signature(&self) -> String {
        self.api.signature()
    }

    /// Hands over the notices raised since the last call.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    // --- INTERNAL LOGIC ---

    fn issue_token(&mut self) -> RequestToken {
        self.next_token += 1;
        RequestToken(self.next_token)
    }

    fn transition(&mut self, transition: Transition) -> bool {
        let label = transition.label();
        let token = transition.token();
        match self.state.apply(transition) {
            Some(next) => {
                self.state = next;
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_transitions {
                    log::info!("[state] applied {} {}", label, token);
                }
                true
            }
            None => {
                log::debug!("[state] discarded stale {} {}", label, token);
                false
            }
        }
    }

    fn raise(&mut self, kind: NoticeKind, operation: &str, error: &ApiError) {
        log::error!(
            "{} failed (kind={}): {}",
            operation,
            error.kind(),
            error
        );
        self.notices.push(Notice::new(kind, error.to_string()));
    }

    fn poll_list(&mut self) {
        let Some(in_flight) = self.list_task.take() else {
            return;
        };
        let InFlight {
            token,
            started_at,
            task,
        } = in_flight;

        match task.try_take() {
            Err(task) => {
                self.list_task = Some(InFlight {
                    token,
                    started_at,
                    task,
                });
            }
            Ok(None) => {}
            Ok(Some(Ok(stocks))) => {
                log::info!(
                    "Snapshot {} loaded: {} rows in {:.2}s",
                    token,
                    stocks.len(),
                    started_at.elapsed().as_secs_f32()
                );
                self.transition(Transition::ListLoaded {
                    token,
                    stocks,
                    received_at: Local::now(),
                });
            }
            Ok(Some(Err(error))) => {
                if self.transition(Transition::ListFailed { token }) {
                    self.raise(NoticeKind::BackendUnreachable, "Snapshot fetch", &error);
                }
            }
        }
    }

    fn poll_analysis(&mut self) {
        let Some(in_flight) = self.analysis_task.take() else {
            return;
        };
        let InFlight {
            token,
            started_at,
            task,
        } = in_flight;

        match task.try_take() {
            Err(task) => {
                self.analysis_task = Some(InFlight {
                    token,
                    started_at,
                    task,
                });
            }
            Ok(None) => {}
            Ok(Some(outcome)) => {
                let elapsed = started_at.elapsed();
                match outcome {
                    Ok(result) => {
                        if self.transition(Transition::AnalysisSucceeded {
                            token,
                            result: Arc::new(result),
                        }) {
                            self.last_analysis_latency = Some(elapsed);
                            #[cfg(debug_assertions)]
                            if DEBUG_FLAGS.print_request_lifecycle {
                                log::info!(
                                    "✅ Analysis {} completed in {:.2}s",
                                    token,
                                    elapsed.as_secs_f32()
                                );
                            }
                        }
                    }
                    Err(error) => {
                        if self.transition(Transition::AnalysisFailed { token }) {
                            self.raise(NoticeKind::AnalysisFailed, "Analysis", &error);
                        }
                    }
                }
            }
        }
    }

    fn poll_health(&mut self) {
        let Some(in_flight) = self.health_task.take() else {
            return;
        };
        let InFlight {
            token,
            started_at,
            task,
        } = in_flight;

        match task.try_take() {
            Err(task) => {
                self.health_task = Some(InFlight {
                    token,
                    started_at,
                    task,
                });
            }
            Ok(None) => self.backend_status = BackendStatus::Unknown,
            Ok(Some(Ok(health))) => {
                self.backend_status = BackendStatus::Online(health.message);
            }
            Ok(Some(Err(error))) => {
                log::warn!(
                    "Health check {} failed after {:.2}s (kind={}): {}",
                    token,
                    started_at.elapsed().as_secs_f32(),
                    error.kind(),
                    error
                );
                self.backend_status = BackendStatus::Offline(error.to_string());
            }
        }
    }
}

impl Drop for DashboardEngine {
    fn drop(&mut self) {
        self.shutdown();
    }
}
