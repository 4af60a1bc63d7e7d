use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// A display-only figure as the backend sent it.
/// The backend mixes raw numbers (`185.4`) with pre-formatted text (`"+1.2%"`, `"78M"`),
/// so we never coerce one into the other. Any JSON is accepted: booleans and nested
/// values become their JSON text, `null` renders blank.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(untagged)]
pub enum DisplayValue {
    Number(serde_json::Number),
    Text(String),
    #[default]
    Empty,
}

impl DisplayValue {
    pub fn is_empty(&self) -> bool {
        match self {
            DisplayValue::Empty => true,
            DisplayValue::Text(text) => text.is_empty(),
            DisplayValue::Number(_) => false,
        }
    }
}

impl From<Value> for DisplayValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => DisplayValue::Empty,
            Value::Number(n) => DisplayValue::Number(n),
            Value::String(text) => DisplayValue::Text(text),
            other => DisplayValue::Text(other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for DisplayValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(DisplayValue::from)
    }
}

impl std::fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayValue::Number(n) => write!(f, "{}", n),
            DisplayValue::Text(text) => f.write_str(text),
            DisplayValue::Empty => Ok(()),
        }
    }
}

impl From<&str> for DisplayValue {
    fn from(text: &str) -> Self {
        DisplayValue::Text(text.to_string())
    }
}

impl From<f64> for DisplayValue {
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value)
            .map(DisplayValue::Number)
            .unwrap_or_default()
    }
}

/// Field decoder for display strings: any scalar is kept as its text, `null` is blank.
/// Use with `#[serde(default, deserialize_with = "display_text")]`.
pub fn display_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    DisplayValue::deserialize(deserializer).map(|value| value.to_string())
}

/// Like [`display_text`], but a blank value is `None`.
pub fn optional_display_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let value = DisplayValue::deserialize(deserializer)?;
    Ok((!value.is_empty()).then(|| value.to_string()))
}

/// One row of the market snapshot.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StockSnapshot {
    /// Unique within a list (assumed, not enforced). Numeric tickers keep their digits.
    #[serde(default, deserialize_with = "display_text")]
    pub ticker: String,
    #[serde(default, deserialize_with = "display_text")]
    pub company: String,
    #[serde(default)]
    pub price: DisplayValue,
    #[serde(default)]
    pub change_percent: DisplayValue,
    #[serde(default)]
    pub volume: DisplayValue,
}

impl StockSnapshot {
    pub fn new(
        ticker: impl Into<String>,
        company: impl Into<String>,
        price: impl Into<DisplayValue>,
        change_percent: impl Into<DisplayValue>,
        volume: impl Into<DisplayValue>,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            company: company.into(),
            price: price.into(),
            change_percent: change_percent.into(),
            volume: volume.into(),
        }
    }

    /// Cell texts in table column order (Ticker, Company, Price, Today %, Volume)
    pub fn cells(&self) -> [String; 5] {
        [
            self.ticker.clone(),
            self.company.clone(),
            self.price.to_string(),
            self.change_percent.to_string(),
            self.volume.to_string(),
        ]
    }
}

/// A received list plus the local time it arrived. Replaced wholesale, never edited.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MarketSnapshot {
    pub stocks: Arc<Vec<StockSnapshot>>,
    pub received_at: Option<DateTime<Local>>,
}

impl MarketSnapshot {
    pub fn new(stocks: Vec<StockSnapshot>, received_at: DateTime<Local>) -> Self {
        Self {
            stocks: Arc::new(stocks),
            received_at: Some(received_at),
        }
    }
}
