//! Application state - the BudgetBoard struct definition and sub-structs.

use crate::drawer::DrawerController;
use crate::input::PointerState;
use crate::perf::PerfMonitor;
use crate::settings::Settings;
use crate::settings_watcher::SettingsWatcher;
use crate::types::Transaction;
use gpui::ScrollHandle;

/// Drawer interaction state - the controller plus pointer tracking.
pub struct DrawerUi {
    /// State machine, offset, and animation for the sidebar drawer
    pub controller: DrawerController,
    /// Pressed-pointer tracking feeding the controller
    pub pointer: PointerState,
    /// Set on backdrop mouse down; the matching mouse up closes the
    /// drawer only if the press started on the backdrop
    pub backdrop_pressed: bool,
}

/// Transaction list state.
pub struct LedgerState {
    pub transactions: Vec<Transaction>,
    pub list_scroll: ScrollHandle,
}

/// Settings plus the hot-reload watcher.
pub struct SettingsState {
    pub data: Settings,
    pub watcher: Option<SettingsWatcher>,
}

/// Cross-cutting system services.
pub struct SystemState {
    pub perf: PerfMonitor,
}

/// The root application entity for the home screen.
pub struct BudgetBoard {
    pub drawer: DrawerUi,
    pub ledger: LedgerState,
    pub settings: SettingsState,
    pub system: SystemState,
}
