use eframe::egui::{Button, ComboBox, Grid, RichText, Spinner, Ui};
use strum::IntoEnumIterator;

use crate::domain::{AnalysisResult, AnalysisWindow, StockSnapshot};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::change_color;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// What the user asked for this frame.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    Analyze(String),
    WindowChanged(AnalysisWindow),
    Refresh,
}

/// The market snapshot table, one row per stock plus an Analyze button.
pub struct SnapshotTablePanel<'a> {
    stocks: &'a [StockSnapshot],
    /// Analyze buttons are disabled while a request is outstanding
    analysis_in_flight: bool,
}

impl<'a> SnapshotTablePanel<'a> {
    pub fn new(stocks: &'a [StockSnapshot], analysis_in_flight: bool) -> Self {
        Self {
            stocks,
            analysis_in_flight,
        }
    }

    fn header_row(ui: &mut Ui) {
        for title in [
            UI_TEXT.col_ticker,
            UI_TEXT.col_company,
            UI_TEXT.col_price,
            UI_TEXT.col_change,
            UI_TEXT.col_volume,
            UI_TEXT.col_ai,
        ] {
            ui.label(RichText::new(title).strong());
        }
        ui.end_row();
    }
}

impl<'a> Panel for SnapshotTablePanel<'a> {
    type Event = DashboardEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        Grid::new("snapshot_table")
            .striped(true)
            .num_columns(6)
            .min_col_width(UI_CONFIG.table_min_col_width)
            .spacing(UI_CONFIG.table_spacing)
            .show(ui, |ui| {
                Self::header_row(ui);

                for stock in self.stocks {
                    let [ticker, company, price, change, volume] = stock.cells();
                    ui.label(RichText::new(ticker).monospace().strong());
                    ui.label(company);
                    ui.label(price);
                    match change_color(&stock.change_percent) {
                        Some(color) => ui.label(RichText::new(change).color(color)),
                        None => ui.label(change),
                    };
                    ui.label(volume);

                    let response = ui
                        .add_enabled(
                            !self.analysis_in_flight,
                            Button::new(UI_TEXT.analyze_button),
                        )
                        .on_disabled_hover_text(UI_TEXT.analyze_disabled_hint);
                    if response.clicked() {
                        #[cfg(debug_assertions)]
                        if DEBUG_FLAGS.print_ui_interactions {
                            log::info!("Analyze clicked for {}", stock.ticker);
                        }
                        events.push(DashboardEvent::Analyze(stock.ticker.clone()));
                    }
                    ui.end_row();
                }
            });

        events
    }
}

/// The 1 / 3 / 6 month selector. Changing it only affects the next request.
pub struct WindowSelectorPanel {
    selected: AnalysisWindow,
}

impl WindowSelectorPanel {
    pub fn new(selected: AnalysisWindow) -> Self {
        Self { selected }
    }
}

impl Panel for WindowSelectorPanel {
    type Event = DashboardEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let before = self.selected;

        ui.horizontal(|ui| {
            ui.label(UI_TEXT.window_selector_label);
            ComboBox::from_id_salt("analysis_window")
                .selected_text(self.selected.label())
                .show_ui(ui, |ui| {
                    for window in AnalysisWindow::iter() {
                        ui.selectable_value(&mut self.selected, window, window.label());
                    }
                });
        });

        if self.selected != before {
            vec![DashboardEvent::WindowChanged(self.selected)]
        } else {
            Vec::new()
        }
    }
}

/// Spinner while pending, otherwise the latest verdict (or nothing).
pub struct AnalysisPanel<'a> {
    pending_ticker: Option<&'a str>,
    result: Option<&'a AnalysisResult>,
}

impl<'a> AnalysisPanel<'a> {
    pub fn new(pending_ticker: Option<&'a str>, result: Option<&'a AnalysisResult>) -> Self {
        Self {
            pending_ticker,
            result,
        }
    }
}

impl<'a> Panel for AnalysisPanel<'a> {
    type Event = DashboardEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        if let Some(ticker) = self.pending_ticker {
            ui.horizontal(|ui| {
                ui.add(Spinner::new().color(UI_CONFIG.colors.loading));
                ui.label(
                    RichText::new(format!("{} ({})", UI_TEXT.analyzing, ticker))
                        .color(UI_CONFIG.colors.loading),
                );
            });
            return Vec::new();
        }

        let Some(result) = self.result else {
            return Vec::new();
        };

        ui.label_subheader(format!(
            "{} ({})",
            UI_TEXT.analysis_heading_prefix, result.analysis_period
        ));
        ui.add_space(4.0);
        ui.field(UI_TEXT.label_trend, &result.trend);
        ui.field(UI_TEXT.label_risk, &result.risk_level);
        ui.field(UI_TEXT.label_action, &result.suggested_action);
        ui.field(UI_TEXT.label_reason, &result.reason);
        ui.add_space(6.0);
        ui.label_error(&result.disclaimer);

        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{
        CentralPanel, Context, Event, Modifiers, PointerButton, Pos2, RawInput, Rect, Shape, pos2,
        vec2,
    };

    fn stocks() -> Vec<StockSnapshot> {
        vec![
            StockSnapshot::new("AAPL", "Apple Inc", 185.4, "+1.2%", "78M"),
            StockSnapshot::new("MSFT", "Microsoft", 412.3, "+0.8%", "45M"),
            StockSnapshot::new("GOOGL", "Alphabet", 152.1, "-0.4%", "32M"),
        ]
    }

    /// One headless frame. Returns the panel's events, the texts painted and the
    /// area the panel used.
    fn frame<P: Panel>(
        ctx: &Context,
        make_panel: &impl Fn() -> P,
        events: Vec<Event>,
    ) -> (Vec<P::Event>, Vec<String>, Rect) {
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(1024.0, 768.0))),
            events,
            ..Default::default()
        };
        let mut emitted = Vec::new();
        let mut used = Rect::NOTHING;
        let output = ctx.run(input, |ctx| {
            CentralPanel::default().show(ctx, |ui| {
                emitted.extend(make_panel().render(ui));
                used = ui.min_rect();
            });
        });

        let mut texts = Vec::new();
        for clipped in output.shapes {
            collect_texts(&clipped.shape, &mut texts);
        }
        (emitted, texts, used)
    }

    fn collect_texts(shape: &Shape, out: &mut Vec<String>) {
        match shape {
            Shape::Text(text) => out.push(text.galley.text().to_string()),
            Shape::Vec(shapes) => shapes.iter().for_each(|s| collect_texts(s, out)),
            _ => {}
        }
    }

    /// Settle the layout, then return what a fresh frame paints.
    fn painted<P: Panel>(make_panel: &impl Fn() -> P) -> (Vec<String>, Rect) {
        let ctx = Context::default();
        let mut last = (Vec::new(), Rect::NOTHING);
        for _ in 0..3 {
            let (_, texts, used) = frame(&ctx, make_panel, Vec::new());
            last = (texts, used);
        }
        last
    }

    fn pointer(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::default(),
        }
    }

    /// Press and release the mouse across the Analyze column of every row.
    fn click_across_table(rows: &[StockSnapshot], busy: bool) -> Vec<DashboardEvent> {
        let make_panel = || SnapshotTablePanel::new(rows, busy);
        let ctx = Context::default();
        let mut used = Rect::NOTHING;
        for _ in 0..3 {
            used = frame(&ctx, &make_panel, Vec::new()).2;
        }

        let mut events = Vec::new();
        let mut y = used.top() + 1.0;
        while y < used.bottom() {
            for step in 0..12 {
                let pos = pos2(used.right() - 3.0 - 6.0 * step as f32, y);
                frame(&ctx, &make_panel, vec![Event::PointerMoved(pos)]);
                events.extend(frame(&ctx, &make_panel, vec![pointer(pos, true)]).0);
                events.extend(frame(&ctx, &make_panel, vec![pointer(pos, false)]).0);
            }
            y += 3.0;
        }
        events
    }

    #[test]
    fn every_stock_gets_one_row_with_verbatim_cells() {
        let rows = stocks();
        let (texts, _) = painted(&|| SnapshotTablePanel::new(&rows, false));

        for stock in &rows {
            for cell in stock.cells() {
                assert!(texts.contains(&cell), "missing cell {cell:?} in {texts:?}");
            }
        }
        let buttons = texts.iter().filter(|t| *t == UI_TEXT.analyze_button).count();
        assert_eq!(buttons, rows.len());
    }

    #[test]
    fn empty_table_renders_header_and_no_rows() {
        let (texts, _) = painted(&|| SnapshotTablePanel::new(&[], false));

        for title in [
            UI_TEXT.col_ticker,
            UI_TEXT.col_company,
            UI_TEXT.col_price,
            UI_TEXT.col_change,
            UI_TEXT.col_volume,
            UI_TEXT.col_ai,
        ] {
            assert!(texts.iter().any(|t| t == title), "missing header {title:?}");
        }
        assert!(!texts.iter().any(|t| t == UI_TEXT.analyze_button));
    }

    #[test]
    fn clicking_analyze_emits_that_rows_ticker() {
        let rows = stocks();
        let events = click_across_table(&rows, false);

        for stock in &rows {
            assert!(
                events.contains(&DashboardEvent::Analyze(stock.ticker.clone())),
                "no Analyze for {} in {events:?}",
                stock.ticker
            );
        }
        assert!(events.iter().all(|e| matches!(e, DashboardEvent::Analyze(_))));
    }

    #[test]
    fn analyze_is_disabled_on_every_row_while_in_flight() {
        let events = click_across_table(&stocks(), true);
        assert!(events.is_empty(), "got {events:?}");
    }

    #[test]
    fn analysis_heading_shows_only_the_period() {
        let result = AnalysisResult {
            ticker: Some("AAPL".into()),
            analysis_period: "Last 6 month(s)".into(),
            trend: "Upward".into(),
            risk_level: "Low".into(),
            suggested_action: "Long-term Investment".into(),
            reason: "Consistent upward movement".into(),
            disclaimer: "Not financial advice".into(),
        };
        let (texts, _) = painted(&|| AnalysisPanel::new(None, Some(&result)));

        assert!(texts.iter().any(|t| t == "AI Analysis (Last 6 month(s))"), "{texts:?}");
        for value in ["Upward", "Low", "Long-term Investment", "Not financial advice"] {
            assert!(texts.iter().any(|t| t == value), "missing {value:?}");
        }
    }

    #[test]
    fn pending_analysis_shows_waiting_text_instead_of_verdict() {
        let (texts, _) = painted(&|| AnalysisPanel::new(Some("AAPL"), None));
        let waiting = format!("{} (AAPL)", UI_TEXT.analyzing);
        assert!(texts.contains(&waiting), "{texts:?}");
    }

    #[test]
    fn picking_the_current_window_emits_nothing() {
        let ctx = Context::default();
        let (events, _, _) = frame(
            &ctx,
            &|| WindowSelectorPanel::new(AnalysisWindow::SixMonths),
            Vec::new(),
        );
        assert!(events.is_empty());
    }
}
