/// Every user-visible string in one place.
pub struct UiText {
    pub app_title: &'static str,
    pub snapshot_heading: &'static str,
    pub snapshot_received_prefix: &'static str,
    pub refresh_button: &'static str,
    pub loading_snapshot: &'static str,
    pub empty_snapshot: &'static str,

    // Table
    pub col_ticker: &'static str,
    pub col_company: &'static str,
    pub col_price: &'static str,
    pub col_change: &'static str,
    pub col_volume: &'static str,
    pub col_ai: &'static str,
    pub analyze_button: &'static str,
    pub analyze_disabled_hint: &'static str,

    // Window selector
    pub window_selector_label: &'static str,

    // Analysis panel
    pub analyzing: &'static str,
    pub analysis_heading_prefix: &'static str,
    pub label_trend: &'static str,
    pub label_risk: &'static str,
    pub label_action: &'static str,
    pub label_reason: &'static str,

    // Status bar
    pub status_backend: &'static str,
    pub status_checking: &'static str,
    pub status_online: &'static str,
    pub status_offline: &'static str,
    pub status_unknown: &'static str,
    pub status_rows: &'static str,
    pub status_latency: &'static str,

    // Notifications
    pub dismiss: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    app_title: "RealTicker Dashboard",
    snapshot_heading: "Market Snapshot (Today)",
    snapshot_received_prefix: "as of",
    refresh_button: "⟳ Refresh",
    loading_snapshot: "Loading market snapshot…",
    empty_snapshot: "No stocks to show.",

    col_ticker: "Ticker",
    col_company: "Company",
    col_price: "Price",
    col_change: "Today %",
    col_volume: "Volume",
    col_ai: "AI",
    analyze_button: "Analyze",
    analyze_disabled_hint: "An analysis is already running",

    window_selector_label: "Analyze trend for:",

    analyzing: "AI analyzing... please wait",
    analysis_heading_prefix: "AI Analysis",
    label_trend: "Trend:",
    label_risk: "Risk Level:",
    label_action: "Suggested Action:",
    label_reason: "Reason:",

    status_backend: "Backend",
    status_checking: "checking…",
    status_online: "online",
    status_offline: "offline",
    status_unknown: "unknown",
    status_rows: "Rows",
    status_latency: "Last analysis",

    dismiss: "✖",
};
