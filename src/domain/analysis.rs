use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum_macros::EnumIter;

use super::stock::{display_text, optional_display_text};

/// How far back the backend looks when analysing a ticker.
/// Closed set: the backend only understands these month counts.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize, EnumIter,
)]
pub enum AnalysisWindow {
    OneMonth,
    ThreeMonths,
    #[default]
    SixMonths,
}

impl AnalysisWindow {
    pub const fn months(self) -> u8 {
        match self {
            AnalysisWindow::OneMonth => 1,
            AnalysisWindow::ThreeMonths => 3,
            AnalysisWindow::SixMonths => 6,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            AnalysisWindow::OneMonth => "1 Month",
            AnalysisWindow::ThreeMonths => "3 Months",
            AnalysisWindow::SixMonths => "6 Months",
        }
    }
}

impl fmt::Display for AnalysisWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowParseError(pub String);

impl fmt::Display for WindowParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid analysis window '{}' (expected 1, 3 or 6 months)", self.0)
    }
}

impl std::error::Error for WindowParseError {}

impl TryFrom<u8> for AnalysisWindow {
    type Error = WindowParseError;

    fn try_from(months: u8) -> Result<Self, Self::Error> {
        match months {
            1 => Ok(AnalysisWindow::OneMonth),
            3 => Ok(AnalysisWindow::ThreeMonths),
            6 => Ok(AnalysisWindow::SixMonths),
            other => Err(WindowParseError(other.to_string())),
        }
    }
}

impl FromStr for AnalysisWindow {
    type Err = WindowParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let months: u8 = s
            .trim()
            .parse()
            .map_err(|_| WindowParseError(s.to_string()))?;
        AnalysisWindow::try_from(months)
    }
}

/// The backend's verdict for one ticker. Every field is an opaque display string;
/// the backend's vocabulary ("Upward", "Short-term Watch", ...) is not a contract.
/// Missing or `null` fields render blank rather than failing the whole verdict.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct AnalysisResult {
    /// Upper-cased echo of the requested ticker (older backends omit it)
    #[serde(default, deserialize_with = "optional_display_text")]
    pub ticker: Option<String>,
    #[serde(default, deserialize_with = "display_text")]
    pub analysis_period: String,
    #[serde(default, deserialize_with = "display_text")]
    pub trend: String,
    #[serde(default, deserialize_with = "display_text")]
    pub risk_level: String,
    #[serde(default, deserialize_with = "display_text")]
    pub suggested_action: String,
    #[serde(default, deserialize_with = "display_text")]
    pub reason: String,
    #[serde(default, deserialize_with = "display_text")]
    pub disclaimer: String,
}
