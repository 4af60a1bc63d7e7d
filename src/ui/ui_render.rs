use eframe::egui::{
    Align, Button, CentralPanel, Context, Frame, Layout, Margin, RichText, ScrollArea,
    TopBottomPanel,
};

use crate::engine::{BackendStatus, ListStatus};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{
    AnalysisPanel, DashboardEvent, Panel, SnapshotTablePanel, WindowSelectorPanel,
};
use crate::ui::utils::{section_heading, spaced_separator};
use crate::utils::TimeUtils;

use super::app::RealTickerApp;

impl RealTickerApp {
    pub(super) fn render_top_panel(&mut self, ctx: &Context) -> Vec<DashboardEvent> {
        let mut events = Vec::new();
        TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label_header(UI_TEXT.app_title);
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let loading = self.engine.state().is_list_loading();
                    if ui
                        .add_enabled(!loading, Button::new(UI_TEXT.refresh_button))
                        .clicked()
                    {
                        events.push(DashboardEvent::Refresh);
                    }
                });
            });
        });
        events
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) -> Vec<DashboardEvent> {
        let mut events = Vec::new();
        let central_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::same(12));

        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    let state = self.engine.state();

                    ui.horizontal(|ui| {
                        section_heading(ui, UI_TEXT.snapshot_heading);
                        if let Some(received_at) = state.snapshot().received_at {
                            ui.label_subdued(format!(
                                "{} {}",
                                UI_TEXT.snapshot_received_prefix,
                                TimeUtils::format_local_stamp(&received_at)
                            ));
                        }
                    });

                    match state.list_status() {
                        ListStatus::Loading(_) if state.stocks().is_empty() => {
                            ui.label(
                                RichText::new(UI_TEXT.loading_snapshot)
                                    .color(UI_CONFIG.colors.loading),
                            );
                        }
                        ListStatus::Loaded | ListStatus::Failed if state.stocks().is_empty() => {
                            ui.label_subdued(UI_TEXT.empty_snapshot);
                        }
                        _ => {}
                    }

                    events.extend(
                        SnapshotTablePanel::new(state.stocks(), state.is_analysis_pending())
                            .render(ui),
                    );

                    spaced_separator(ui);
                    events.extend(WindowSelectorPanel::new(self.window).render(ui));
                    ui.add_space(8.0);
                    events.extend(
                        AnalysisPanel::new(state.pending_ticker(), state.analysis()).render(ui),
                    );
                });
            });
        events
    }

    pub(super) fn render_status_panel(&self, ctx: &Context) {
        TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let (status_text, color) = match self.engine.backend_status() {
                    BackendStatus::Unknown => {
                        (UI_TEXT.status_unknown.to_string(), UI_CONFIG.colors.label)
                    }
                    BackendStatus::Checking => {
                        (UI_TEXT.status_checking.to_string(), UI_CONFIG.colors.loading)
                    }
                    BackendStatus::Online(message) => (
                        format!("{} ({})", UI_TEXT.status_online, message),
                        UI_CONFIG.colors.gain,
                    ),
                    BackendStatus::Offline(reason) => (
                        format!("{} ({})", UI_TEXT.status_offline, reason),
                        UI_CONFIG.colors.loss,
                    ),
                };
                ui.metric(UI_TEXT.status_backend, &status_text, color);
                ui.separator();
                ui.label_subdued(&self.backend_label);
                ui.separator();
                ui.metric(
                    UI_TEXT.status_rows,
                    &self.engine.state().stocks().len().to_string(),
                    UI_CONFIG.colors.label,
                );
                if let Some(latency) = self.engine.last_analysis_latency() {
                    ui.separator();
                    ui.metric(
                        UI_TEXT.status_latency,
                        &TimeUtils::format_duration_short(latency),
                        UI_CONFIG.colors.label,
                    );
                }
            });
        });
    }
}
