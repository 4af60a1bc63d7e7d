use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub loading: Color32,
    pub disclaimer: Color32,
    pub notice_fill: Color32,
    pub notice_border: Color32,
    pub gain: Color32,
    pub loss: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    /// Seconds a notification stays up unless dismissed
    pub notice_lifetime_secs: u64,
    /// Older notifications are dropped beyond this count
    pub max_visible_notices: usize,
    pub table_min_col_width: f32,
    pub table_spacing: [f32; 2],
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::YELLOW,
        subsection_heading: Color32::ORANGE,
        central_panel: Color32::from_rgb(30, 30, 36),
        side_panel: Color32::from_rgb(25, 25, 25),
        loading: Color32::from_rgb(100, 160, 255),
        disclaimer: Color32::from_rgb(230, 80, 80),
        notice_fill: Color32::from_rgb(70, 25, 25),
        notice_border: Color32::from_rgb(220, 90, 90),
        gain: Color32::from_rgb(100, 200, 100),
        loss: Color32::from_rgb(230, 100, 100),
    },
    notice_lifetime_secs: 8,
    max_visible_notices: 4,
    table_min_col_width: 70.0,
    table_spacing: [24.0, 10.0],
};
