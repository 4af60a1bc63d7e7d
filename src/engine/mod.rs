pub mod core;
pub mod messages;
pub mod spawner;
pub mod state;

// Re-export key components
pub use self::core::{BackendStatus, DashboardEngine};
pub use messages::{Notice, NoticeKind, RequestToken, Transition};
pub use spawner::{TaskHandle, TaskSpawner};
pub use state::{AnalysisSlot, DashboardState, ListStatus};
