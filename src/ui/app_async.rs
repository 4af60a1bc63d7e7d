use eframe::egui;
use std::time::Duration;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::ui::app::RealTickerApp;
use crate::ui::ui_panels::DashboardEvent;
use crate::utils::app_time::now;

/// How often we look at outstanding requests while something is in flight.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

impl RealTickerApp {
    /// Pull finished requests into state and surface any new notices.
    /// Keeps the UI ticking while work is outstanding, since no input event will wake it.
    pub(super) fn poll_engine(&mut self, ctx: &egui::Context) {
        let busy = self.engine.update();

        let raised_at = now();
        for notice in self.engine.take_notices() {
            self.notifications.push(notice, raised_at);
        }

        if busy {
            ctx.request_repaint_after(POLL_INTERVAL);
        }
    }

    pub(super) fn handle_event(&mut self, event: DashboardEvent) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("UI event: {:?}", event);
        }

        match event {
            DashboardEvent::Analyze(ticker) => {
                // A click can land in the same frame a request was issued
                if self.engine.state().is_analysis_pending() {
                    return;
                }
                self.engine.request_analysis(&ticker, self.window);
            }
            DashboardEvent::WindowChanged(window) => {
                self.window = window;
            }
            DashboardEvent::Refresh => {
                self.engine.load_snapshot();
                self.engine.check_health();
            }
        }
    }
}
