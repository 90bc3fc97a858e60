//! Event handler for the TUI
//!
//! Routes keyboard events to the open dialog or the active tab.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, ActiveTab, App};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.notifications.remove_expired();
            Ok(())
        }
        Event::Mouse(_) | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
        return Ok(());
    }

    handle_normal_key(app, key);
    Ok(())
}

/// Handle keys when a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog {
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::AddRecord | ActiveDialog::EditRecord(_) => {
            dialogs::record_form::handle_key(app, key);
        }
        ActiveDialog::ConfirmDelete(id) => {
            dialogs::confirm::handle_key(app, id, key);
        }
        ActiveDialog::None => {}
    }
}

/// Handle keys with no dialog open
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Tab => app.switch_tab(app.active_tab.next()),
        KeyCode::BackTab => app.switch_tab(app.active_tab.prev()),
        KeyCode::Char('1') => app.switch_tab(ActiveTab::Dashboard),
        KeyCode::Char('2') => app.switch_tab(ActiveTab::Cabinets),
        KeyCode::Char('3') => app.switch_tab(ActiveTab::Statistics),
        KeyCode::Char('a') | KeyCode::Char('n') => app.open_dialog(ActiveDialog::AddRecord),
        KeyCode::Char('x') => app.export(),
        _ => match app.active_tab {
            ActiveTab::Dashboard => {}
            ActiveTab::Cabinets => handle_cabinets_key(app, key),
            ActiveTab::Statistics => handle_statistics_key(app, key),
        },
    }
}

fn handle_cabinets_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => {
            let first = (!app.store.is_empty()).then_some(0);
            app.table_state.select(first);
        }
        KeyCode::Char('G') | KeyCode::End => {
            let last = app.store.len().checked_sub(1);
            app.table_state.select(last);
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(id) = app.selected_record().map(|r| r.id) {
                app.open_dialog(ActiveDialog::EditRecord(id));
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),
        _ => {}
    }
}

fn handle_statistics_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            let last = app.store.len().saturating_sub(1);
            app.stats_offset = (app.stats_offset + 2).min(last);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.stats_offset = app.stats_offset.saturating_sub(2);
        }
        _ => {}
    }
}
