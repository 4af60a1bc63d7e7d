use eframe::egui::{Color32, Context, RichText, Ui, Visuals};

use crate::domain::DisplayValue;
use crate::ui::config::UI_CONFIG;

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;

    // Make the widgets stand out a bit more
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}

/// Creates a section heading with standard spacing
pub fn section_heading(ui: &mut Ui, text: impl Into<String>) {
    ui.add_space(10.0);
    ui.label(
        RichText::new(text.into())
            .strong()
            .color(UI_CONFIG.colors.subsection_heading),
    );
    ui.add_space(5.0);
}

/// Creates a separator with standard spacing
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);
}

/// Tint for a "Today %" cell. Numbers tint by sign; text only by an explicit leading
/// sign. The text itself is always shown as received.
pub fn change_color(change: &DisplayValue) -> Option<Color32> {
    match change {
        DisplayValue::Number(n) => {
            let value = n.as_f64()?;
            if value > 0.0 {
                Some(UI_CONFIG.colors.gain)
            } else if value < 0.0 {
                Some(UI_CONFIG.colors.loss)
            } else {
                None
            }
        }
        DisplayValue::Text(text) => match text.trim_start().chars().next()? {
            '+' => Some(UI_CONFIG.colors.gain),
            '-' => Some(UI_CONFIG.colors.loss),
            _ => None,
        },
        DisplayValue::Empty => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_change_is_tinted() {
        assert_eq!(change_color(&"+1.2%".into()), Some(UI_CONFIG.colors.gain));
        assert_eq!(change_color(&"-0.4%".into()), Some(UI_CONFIG.colors.loss));
        assert_eq!(change_color(&DisplayValue::from(-1.1)), Some(UI_CONFIG.colors.loss));
    }

    #[test]
    fn unsigned_or_blank_text_is_left_alone() {
        assert_eq!(change_color(&"flat".into()), None);
        assert_eq!(change_color(&"0.5%".into()), None);
        assert_eq!(change_color(&DisplayValue::Empty), None);
    }

    #[test]
    fn numeric_change_tints_by_sign_and_zero_stays_plain() {
        assert_eq!(change_color(&DisplayValue::from(0.8)), Some(UI_CONFIG.colors.gain));
        assert_eq!(change_color(&DisplayValue::from(0.0)), None);
        assert_eq!(change_color(&DisplayValue::from(-0.0)), None);
        let zero: DisplayValue = serde_json::from_str("0").unwrap();
        assert_eq!(change_color(&zero), None);
    }
}
