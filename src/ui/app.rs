use eframe::{Frame, egui};
use serde::{Deserialize, Serialize};

use crate::domain::AnalysisWindow;
use crate::engine::DashboardEngine;
use crate::ui::notifications::NotificationCenter;
use crate::ui::utils::setup_custom_visuals;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// The part of the UI that survives a restart.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
#[serde(default)]
struct PersistedUi {
    window: AnalysisWindow,
}

pub struct RealTickerApp {
    /// Applied to the next Analyze click only
    pub(super) window: AnalysisWindow,
    pub(super) engine: DashboardEngine,
    pub(super) notifications: NotificationCenter,
    /// Shown in the status bar
    pub(super) backend_label: String,
}

impl RealTickerApp {
    /// `initial_window` (from the command line) wins over the persisted choice.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        mut engine: DashboardEngine,
        initial_window: Option<AnalysisWindow>,
    ) -> Self {
        let persisted = cc
            .storage
            .and_then(|storage| eframe::get_value::<PersistedUi>(storage, eframe::APP_KEY));

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_state_serde {
            match &persisted {
                Some(value) => log::info!("Loaded persisted UI state: {:?}", value),
                None => log::info!("No persisted UI state. Starting with defaults."),
            }
        }

        let window = initial_window
            .or(persisted.map(|p| p.window))
            .unwrap_or_default();

        // Loading starts as soon as the dashboard appears
        engine.load_snapshot();
        engine.check_health();

        let backend_label = engine.backend_signature();
        Self {
            window,
            engine,
            notifications: NotificationCenter::default(),
            backend_label,
        }
    }
}

impl eframe::App for RealTickerApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Nothing may land after teardown
        self.engine.shutdown();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(
            storage,
            eframe::APP_KEY,
            &PersistedUi {
                window: self.window,
            },
        );
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        self.poll_engine(ctx);

        let mut events = self.render_top_panel(ctx);
        self.render_status_panel(ctx);
        events.extend(self.render_central_panel(ctx));
        self.notifications.show(ctx);

        for event in events {
            self.handle_event(event);
        }
    }
}
