// Domain types and value objects
pub mod analysis;
pub mod stock;

// Re-export commonly used types
pub use analysis::{AnalysisResult, AnalysisWindow, WindowParseError};
pub use stock::{DisplayValue, MarketSnapshot, StockSnapshot};
