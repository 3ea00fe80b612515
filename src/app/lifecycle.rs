//! Application lifecycle - initialization and per-frame upkeep.

use super::state::{DrawerUi, LedgerState, SettingsState, SystemState};
use super::BudgetBoard;
use crate::constants::DRAWER_WIDTH;
use crate::data::SAMPLE_LEDGER;
use crate::drawer::DrawerController;
use crate::input::PointerState;
use crate::perf::PerfMonitor;
use crate::settings::Settings;
use crate::settings_watcher::{SettingsEvent, SettingsWatcher};
use gpui::*;

impl BudgetBoard {
    pub fn new(_cx: &mut Context<Self>) -> Self {
        let settings = Settings::load();
        tracing::info!(
            user = %settings.display_name,
            theme = ?settings.theme_mode,
            "starting budgetboard"
        );

        Self {
            drawer: DrawerUi {
                controller: DrawerController::new(DRAWER_WIDTH),
                pointer: PointerState::default(),
                backdrop_pressed: false,
            },
            ledger: LedgerState {
                transactions: SAMPLE_LEDGER.clone(),
                list_scroll: ScrollHandle::new(),
            },
            settings: SettingsState {
                data: settings,
                watcher: crate::settings_watcher::default_settings_path()
                    .and_then(|p| SettingsWatcher::new(p).ok()),
            },
            system: SystemState {
                perf: PerfMonitor::new(),
            },
        }
    }

    /// Check for settings file changes and reload if needed. Called once
    /// per render; the watcher channel is drained non-blockingly.
    pub fn check_settings_reload(&mut self, cx: &mut Context<Self>) {
        if let Some(ref mut watcher) = self.settings.watcher {
            if let Some(event) = watcher.poll() {
                match event {
                    SettingsEvent::Modified | SettingsEvent::Created => {
                        tracing::info!("settings file changed, reloading");
                        self.settings.data = Settings::load();
                        cx.notify();
                    }
                    SettingsEvent::Deleted => {
                        tracing::warn!("settings file deleted, keeping current values");
                    }
                    SettingsEvent::Error(e) => {
                        tracing::error!("settings watch error: {}", e);
                    }
                }
            }
        }
    }
}
