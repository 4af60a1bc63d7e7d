use chrono::{DateTime, Local};
use std::fmt;
use std::sync::Arc;

use crate::domain::{AnalysisResult, AnalysisWindow, StockSnapshot};

/// Identifies one issued request. Strictly increasing per engine,
/// so "latest" is simply the largest token handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(pub u64);

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Every way the dashboard state may change.
#[derive(Debug, Clone)]
pub enum Transition {
    ListRequested {
        token: RequestToken,
    },
    ListLoaded {
        token: RequestToken,
        stocks: Vec<StockSnapshot>,
        received_at: DateTime<Local>,
    },
    ListFailed {
        token: RequestToken,
    },
    AnalysisRequested {
        token: RequestToken,
        ticker: String,
        window: AnalysisWindow,
    },
    AnalysisSucceeded {
        token: RequestToken,
        result: Arc<AnalysisResult>,
    },
    AnalysisFailed {
        token: RequestToken,
    },
}

impl Transition {
    pub fn token(&self) -> RequestToken {
        match self {
            Transition::ListRequested { token }
            | Transition::ListLoaded { token, .. }
            | Transition::ListFailed { token }
            | Transition::AnalysisRequested { token, .. }
            | Transition::AnalysisSucceeded { token, .. }
            | Transition::AnalysisFailed { token } => *token,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Transition::ListRequested { .. } => "list requested",
            Transition::ListLoaded { .. } => "list loaded",
            Transition::ListFailed { .. } => "list failed",
            Transition::AnalysisRequested { .. } => "analysis requested",
            Transition::AnalysisSucceeded { .. } => "analysis succeeded",
            Transition::AnalysisFailed { .. } => "analysis failed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    BackendUnreachable,
    AnalysisFailed,
}

impl NoticeKind {
    pub fn headline(self) -> &'static str {
        match self {
            NoticeKind::BackendUnreachable => "Backend not reachable",
            NoticeKind::AnalysisFailed => "Analysis failed",
        }
    }
}

/// A user-facing failure report raised by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub detail: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }

    pub fn headline(&self) -> &'static str {
        self.kind.headline()
    }
}
