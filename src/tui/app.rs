//! Application state for the TUI
//!
//! The App struct owns the session's record store and holds all state needed
//! for rendering and handling events.

use chrono::{Local, NaiveDate};
use ratatui::widgets::TableState;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::{CabinetPaths, Settings};
use crate::export::{export_records, ExportFormat};
use crate::models::{CabinetRecord, RecordId};
use crate::services::{summarize, CabinetService, StatisticsSummary};
use crate::storage::{demo_store, RecordStore};

use super::dialogs::record_form::RecordFormState;
use super::widgets::{Notification, NotificationQueue};

/// Which tab is currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTab {
    #[default]
    Dashboard,
    Cabinets,
    Statistics,
}

impl ActiveTab {
    pub const ALL: [ActiveTab; 3] = [Self::Dashboard, Self::Cabinets, Self::Statistics];

    /// Tab title
    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Cabinets => "Cabinets",
            Self::Statistics => "Statistics",
        }
    }

    /// Position in the tab bar
    pub fn index(&self) -> usize {
        match self {
            Self::Dashboard => 0,
            Self::Cabinets => 1,
            Self::Statistics => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddRecord,
    EditRecord(RecordId),
    ConfirmDelete(RecordId),
    Help,
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Paths configuration
    pub paths: &'a CabinetPaths,

    /// Records of this session
    pub store: RecordStore,

    /// Audit log, when enabled in settings
    pub audit: Option<AuditLogger>,

    /// Pinned "today"; the local clock is read when unset
    pub fixed_date: Option<NaiveDate>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently shown tab
    pub active_tab: ActiveTab,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selection in the cabinets table
    pub table_state: TableState,

    /// First card shown on the statistics tab
    pub stats_offset: usize,

    /// Add/edit form state
    pub record_form: RecordFormState,

    /// Pending toasts
    pub notifications: NotificationQueue,
}

impl<'a> App<'a> {
    /// Create a new App instance that follows the local clock
    pub fn new(settings: &'a Settings, paths: &'a CabinetPaths) -> Self {
        Self::build(settings, paths, None)
    }

    /// Create an App whose "today" never changes
    pub fn with_date(settings: &'a Settings, paths: &'a CabinetPaths, date: NaiveDate) -> Self {
        Self::build(settings, paths, Some(date))
    }

    fn build(
        settings: &'a Settings,
        paths: &'a CabinetPaths,
        fixed_date: Option<NaiveDate>,
    ) -> Self {
        let today = fixed_date.unwrap_or_else(|| Local::now().date_naive());
        let store = if settings.seed_demo_data {
            demo_store(today)
        } else {
            RecordStore::new()
        };
        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        let mut app = Self {
            settings,
            paths,
            store,
            audit,
            fixed_date,
            should_quit: false,
            active_tab: ActiveTab::default(),
            active_dialog: ActiveDialog::default(),
            table_state: TableState::default(),
            stats_offset: 0,
            record_form: RecordFormState::for_add(),
            notifications: NotificationQueue::new(),
        };
        app.clamp_selection();
        app
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Service over this session's store
    pub fn service(&mut self) -> CabinetService<'_> {
        CabinetService::new(&mut self.store, self.settings.baseline_strategy)
            .with_audit(self.audit.as_ref())
    }

    /// Current summary, recomputed from the store
    pub fn summary(&self) -> StatisticsSummary {
        summarize(self.store.list())
    }

    /// Records in display order
    pub fn records(&self) -> &[CabinetRecord] {
        self.store.list()
    }

    /// Show a toast
    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn switch_tab(&mut self, tab: ActiveTab) {
        self.active_tab = tab;
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match dialog {
            ActiveDialog::AddRecord => self.record_form = RecordFormState::for_add(),
            ActiveDialog::EditRecord(id) => match self.store.get(id) {
                Some(record) => self.record_form = RecordFormState::for_edit(record),
                None => return,
            },
            _ => {}
        }
        self.active_dialog = dialog;
    }

    /// Close the active dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is open
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Record under the table cursor
    pub fn selected_record(&self) -> Option<&CabinetRecord> {
        self.table_state
            .selected()
            .and_then(|index| self.store.list().get(index))
    }

    pub fn move_up(&mut self) {
        if let Some(index) = self.table_state.selected() {
            self.table_state.select(Some(index.saturating_sub(1)));
        }
    }

    pub fn move_down(&mut self) {
        if let Some(index) = self.table_state.selected() {
            let last = self.store.len().saturating_sub(1);
            self.table_state.select(Some((index + 1).min(last)));
        }
    }

    /// Keep the table cursor on an existing row after the list changed
    pub fn clamp_selection(&mut self) {
        let len = self.store.len();
        let selected = match (len, self.table_state.selected()) {
            (0, _) => None,
            (_, None) => Some(0),
            (_, Some(index)) => Some(index.min(len - 1)),
        };
        self.table_state.select(selected);
        self.stats_offset = self.stats_offset.min(len.saturating_sub(1));
    }

    /// Ask for confirmation before deleting the selected record
    pub fn request_delete(&mut self) {
        if let Some(id) = self.selected_record().map(|r| r.id) {
            self.open_dialog(ActiveDialog::ConfirmDelete(id));
        }
    }

    /// Delete the record after the user confirmed
    pub fn confirm_delete(&mut self, id: RecordId) {
        self.close_dialog();
        let result = self.service().remove(id);
        // An id that is already gone is not worth a toast
        if let Some(outcome) = result.transpose() {
            self.notify(Notification::from_outcome(
                outcome.map(|record| format!("Deleted {}", record)),
            ));
        }
        self.clamp_selection();
    }

    /// Date given to new records and export file names, read at call time
    pub fn today(&self) -> NaiveDate {
        self.fixed_date.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Export all records in the configured default format
    pub fn export(&mut self) {
        self.export_as(self.settings.export.default_format);
    }

    /// Export all records in `format`
    ///
    /// Failures become error notifications; the store is never touched.
    pub fn export_as(&mut self, format: ExportFormat) {
        let dir = self.settings.export_dir(self.paths);
        let records = self.store.list();
        let result = export_records(records, &dir, format, self.today()).and_then(|path| {
            if let Some(logger) = &self.audit {
                logger.log(&AuditEntry::export(
                    path.display().to_string(),
                    format.extension(),
                    records.len(),
                ))?;
            }
            Ok(path)
        });

        self.notify(Notification::from_outcome(
            result.map(|path| format!("Exported to {}", path.display())),
        ));
    }
}
