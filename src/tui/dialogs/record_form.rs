//! Cabinet entry/edit dialog
//!
//! Modal form for adding a cabinet snapshot or editing one in place. Adding
//! goes through the reconciler; editing replaces the fields directly and
//! exposes daily revenue for manual correction.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{CabinetDraft, CabinetRecord, Money, RecordId};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::{Notification, TextInput};

/// Which field is currently focused in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordField {
    #[default]
    LastName,
    FirstName,
    Cabinet,
    TotalRevenue,
    DailyRevenue,
    Balance,
    DealsBefore,
    DealsAfter,
}

const ADD_FIELDS: &[RecordField] = &[
    RecordField::LastName,
    RecordField::FirstName,
    RecordField::Cabinet,
    RecordField::TotalRevenue,
    RecordField::Balance,
    RecordField::DealsBefore,
    RecordField::DealsAfter,
];

const EDIT_FIELDS: &[RecordField] = &[
    RecordField::LastName,
    RecordField::FirstName,
    RecordField::Cabinet,
    RecordField::TotalRevenue,
    RecordField::DailyRevenue,
    RecordField::Balance,
    RecordField::DealsBefore,
    RecordField::DealsAfter,
];

/// State for the record form dialog
#[derive(Debug, Clone)]
pub struct RecordFormState {
    /// Record being edited; `None` when adding
    pub editing: Option<RecordId>,
    pub focused_field: RecordField,
    pub last_name: TextInput,
    pub first_name: TextInput,
    pub cabinet: TextInput,
    pub total_revenue: TextInput,
    pub daily_revenue: TextInput,
    pub balance: TextInput,
    pub deals_before: TextInput,
    pub deals_after: TextInput,
    /// Error message to display
    pub error_message: Option<String>,
}

impl RecordFormState {
    /// Empty form for a new entry
    pub fn for_add() -> Self {
        let mut form = Self {
            editing: None,
            focused_field: RecordField::LastName,
            last_name: TextInput::new().label("Last name").placeholder("Ivanov"),
            first_name: TextInput::new().label("First name").placeholder("Petr"),
            cabinet: TextInput::new().label("Cabinet").placeholder("Cabinet A"),
            total_revenue: TextInput::new().label("Total revenue").placeholder("150000"),
            daily_revenue: TextInput::new().label("Daily revenue"),
            balance: TextInput::new().label("Balance").placeholder("45000"),
            deals_before: TextInput::new().label("Deals before 00:00").placeholder("0"),
            deals_after: TextInput::new().label("Deals after 00:00").placeholder("0"),
            error_message: None,
        };
        form.update_focus();
        form
    }

    /// Form prefilled from `record`
    pub fn for_edit(record: &CabinetRecord) -> Self {
        let draft = CabinetDraft::from_record(record);
        let mut form = Self::for_add();
        form.editing = Some(record.id);
        form.last_name.set_content(draft.last_name);
        form.first_name.set_content(draft.first_name);
        form.cabinet.set_content(draft.cabinet);
        form.total_revenue.set_content(draft.total_revenue);
        form.daily_revenue
            .set_content(draft.daily_revenue.unwrap_or_default());
        form.balance.set_content(draft.balance);
        form.deals_before.set_content(draft.deals_before_midnight);
        form.deals_after.set_content(draft.deals_after_midnight);
        form
    }

    /// Fields shown in the current mode, in tab order
    pub fn fields(&self) -> &'static [RecordField] {
        if self.editing.is_some() {
            EDIT_FIELDS
        } else {
            ADD_FIELDS
        }
    }

    /// Move focus to the next field (Tab)
    pub fn next_field(&mut self) {
        let fields = self.fields();
        let index = fields
            .iter()
            .position(|f| *f == self.focused_field)
            .unwrap_or(0);
        self.focused_field = fields[(index + 1) % fields.len()];
        self.update_focus();
    }

    /// Move focus to the previous field (Shift+Tab)
    pub fn prev_field(&mut self) {
        let fields = self.fields();
        let index = fields
            .iter()
            .position(|f| *f == self.focused_field)
            .unwrap_or(0);
        self.focused_field = fields[(index + fields.len() - 1) % fields.len()];
        self.update_focus();
    }

    fn update_focus(&mut self) {
        for field in EDIT_FIELDS {
            let focused = *field == self.focused_field;
            self.input_mut(*field).focused = focused;
        }
    }

    pub fn input(&self, field: RecordField) -> &TextInput {
        match field {
            RecordField::LastName => &self.last_name,
            RecordField::FirstName => &self.first_name,
            RecordField::Cabinet => &self.cabinet,
            RecordField::TotalRevenue => &self.total_revenue,
            RecordField::DailyRevenue => &self.daily_revenue,
            RecordField::Balance => &self.balance,
            RecordField::DealsBefore => &self.deals_before,
            RecordField::DealsAfter => &self.deals_after,
        }
    }

    pub fn input_mut(&mut self, field: RecordField) -> &mut TextInput {
        match field {
            RecordField::LastName => &mut self.last_name,
            RecordField::FirstName => &mut self.first_name,
            RecordField::Cabinet => &mut self.cabinet,
            RecordField::TotalRevenue => &mut self.total_revenue,
            RecordField::DailyRevenue => &mut self.daily_revenue,
            RecordField::Balance => &mut self.balance,
            RecordField::DealsBefore => &mut self.deals_before,
            RecordField::DealsAfter => &mut self.deals_after,
        }
    }

    /// The input that receives typed characters
    pub fn focused_input(&mut self) -> &mut TextInput {
        self.input_mut(self.focused_field)
    }

    /// Raw text of the form as a draft
    pub fn to_draft(&self) -> CabinetDraft {
        CabinetDraft {
            last_name: self.last_name.value().to_string(),
            first_name: self.first_name.value().to_string(),
            cabinet: self.cabinet.value().to_string(),
            total_revenue: self.total_revenue.value().to_string(),
            daily_revenue: self
                .editing
                .map(|_| self.daily_revenue.value().to_string()),
            balance: self.balance.value().to_string(),
            deals_before_midnight: self.deals_before.value().to_string(),
            deals_after_midnight: self.deals_after.value().to_string(),
            date: None,
        }
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

/// Render the form dialog
pub fn render(frame: &mut Frame, app: &App) {
    let form = &app.record_form;
    let fields = form.fields();
    let height = fields.len() as u16 + 8;
    let area = centered_rect_fixed(64, height, frame.area());

    frame.render_widget(Clear, area);

    let title = if form.editing.is_some() {
        " Edit cabinet "
    } else {
        " Add cabinet "
    };
    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(1)];
    constraints.extend(fields.iter().map(|_| Constraint::Length(1)));
    constraints.extend([
        Constraint::Length(1), // spacer
        Constraint::Length(1), // reconciliation hint
        Constraint::Length(1), // error
        Constraint::Min(1),    // key hints
    ]);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, field) in fields.iter().enumerate() {
        let row = rows[i + 1];
        let padded = Rect::new(row.x + 1, row.y, row.width.saturating_sub(2), 1);
        frame.render_widget(form.input(*field), padded);
    }

    let hint_row = rows[fields.len() + 2];
    frame.render_widget(Paragraph::new(hint_line(app)), hint_row);

    if let Some(error) = &form.error_message {
        let error_row = rows[fields.len() + 3];
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {}", error),
                Style::default().fg(Color::Red),
            )),
            error_row,
        );
    }

    let keys = Line::from(vec![
        Span::styled(" [Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next field  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(keys), rows[fields.len() + 4]);
}

/// Daily revenue preview for a new entry, or a reminder for edits
fn hint_line(app: &App) -> Line<'static> {
    let form = &app.record_form;
    let style = Style::default().fg(Color::DarkGray);

    if form.editing.is_some() {
        return Line::from(Span::styled(
            " Edits are applied as typed; daily revenue is not recomputed.",
            style,
        ));
    }

    let label = form.cabinet.value().trim();
    let Ok(total) = Money::parse(form.total_revenue.value()) else {
        return Line::from(Span::styled(
            " Daily revenue is computed from the previous total.",
            style,
        ));
    };

    let symbol = app.settings.currency_symbol.as_str();
    let daily = crate::services::compute_daily_revenue_with(
        app.settings.baseline_strategy,
        label,
        total,
        app.records(),
    );
    let previous = crate::services::reconciliation::find_baseline(
        app.settings.baseline_strategy,
        label,
        app.records(),
    )
    .map(|r| r.total_revenue.format_with_symbol(symbol))
    .unwrap_or_else(|| "none".to_string());

    Line::from(vec![
        Span::styled(format!(" Previous total: {}  ", previous), style),
        Span::styled(
            format!(
                "Daily revenue: {}",
                crate::display::format_signed(daily, symbol)
            ),
            Style::default().fg(if daily.is_negative() {
                Color::Red
            } else {
                Color::Green
            }),
        ),
    ])
}

/// Handle key input for the form dialog
///
/// Returns true when the key was consumed.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
        }
        KeyCode::Enter => {
            save_record(app);
        }
        KeyCode::Tab | KeyCode::Down => {
            app.record_form.next_field();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.record_form.prev_field();
        }
        KeyCode::Backspace => {
            app.record_form.focused_input().backspace();
            app.record_form.clear_error();
        }
        KeyCode::Delete => {
            app.record_form.focused_input().delete();
            app.record_form.clear_error();
        }
        KeyCode::Left => app.record_form.focused_input().move_left(),
        KeyCode::Right => app.record_form.focused_input().move_right(),
        KeyCode::Home => app.record_form.focused_input().move_start(),
        KeyCode::End => app.record_form.focused_input().move_end(),
        KeyCode::Char(c) => {
            app.record_form.focused_input().insert(c);
            app.record_form.clear_error();
        }
        _ => return false,
    }
    true
}

/// Validate the form and apply it to the store
///
/// Validation errors stay in the form; the dialog only closes on success.
pub fn save_record(app: &mut App) {
    let draft = app.record_form.to_draft();

    let outcome = match app.record_form.editing {
        None => match draft.parse() {
            Ok(entry) => {
                let today = app.today();
                let settings = app.settings;
                let created = app.service().create(entry, today);
                created.map(|record| {
                    format!(
                        "Added {} (daily revenue {})",
                        record,
                        crate::display::format_signed(
                            record.daily_revenue,
                            &settings.currency_symbol,
                        )
                    )
                })
            }
            Err(e) => Err(e),
        },
        Some(id) => match app.store.get(id).cloned() {
            Some(current) => draft.apply_to(&current).and_then(|edited| {
                let label = edited.to_string();
                app.service()
                    .update(id, edited)
                    .map(|_| format!("Updated {}", label))
            }),
            None => Ok("Record no longer exists; nothing changed".to_string()),
        },
    };

    match outcome {
        Ok(message) => {
            app.close_dialog();
            app.clamp_selection();
            app.notify(Notification::success(message));
        }
        Err(e) if e.is_validation() => app.record_form.set_error(e.to_string()),
        Err(e) => {
            app.close_dialog();
            app.clamp_selection();
            app.notify(Notification::error(e.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CabinetPaths, Settings};
    use crate::tui::app::ActiveDialog;
    use chrono::NaiveDate;
    use crossterm::event::KeyModifiers;
    use tempfile::TempDir;

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_key(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn fill_add_form(app: &mut App, label: &str, total: &str) {
        app.open_dialog(ActiveDialog::AddRecord);
        for value in ["Ivanov", "Petr", label, total, "45000", "12", "8"] {
            type_text(app, value);
            press(app, KeyCode::Tab);
        }
    }

    #[test]
    fn test_field_cycle_skips_daily_revenue_when_adding() {
        let mut form = RecordFormState::for_add();
        for _ in 0..4 {
            form.next_field();
        }
        assert_eq!(form.focused_field, RecordField::Balance);
        assert!(form.balance.focused);
        assert!(!form.total_revenue.focused);

        form.prev_field();
        form.prev_field();
        form.prev_field();
        form.prev_field();
        form.prev_field();
        assert_eq!(form.focused_field, RecordField::DealsAfter);
    }

    #[test]
    fn test_add_through_form() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CabinetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let mut app = App::with_date(&settings, &paths, NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());

        fill_add_form(&mut app, "A", "100");
        press(&mut app, KeyCode::Enter);
        fill_add_form(&mut app, "A", "150");
        press(&mut app, KeyCode::Enter);

        assert!(!app.has_dialog());
        assert_eq!(app.records().len(), 2);
        assert_eq!(app.records()[1].daily_revenue, Money::from_major(50));
        assert!(app
            .notifications
            .latest()
            .unwrap()
            .message
            .contains("+50.00"));
    }

    #[test]
    fn test_invalid_form_stays_open() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CabinetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let mut app = App::with_date(&settings, &paths, NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());

        fill_add_form(&mut app, "A", "lots");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.active_dialog, ActiveDialog::AddRecord);
        assert!(app.records().is_empty());
        assert!(app
            .record_form
            .error_message
            .as_deref()
            .unwrap()
            .contains("totalRevenue"));
    }

    #[test]
    fn test_edit_keeps_daily_revenue_unless_changed() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CabinetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            seed_demo_data: true,
            ..Settings::default()
        };
        let mut app = App::with_date(&settings, &paths, NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
        let id = app.records()[0].id;

        app.open_dialog(ActiveDialog::EditRecord(id));
        assert_eq!(app.record_form.daily_revenue.value(), "5000.00");

        // Jump to total revenue and replace it
        for _ in 0..3 {
            press(&mut app, KeyCode::Tab);
        }
        app.record_form.total_revenue.clear();
        type_text(&mut app, "175000");
        press(&mut app, KeyCode::Enter);

        let record = &app.records()[0];
        assert_eq!(record.id, id);
        assert_eq!(record.total_revenue, Money::from_major(175_000));
        assert_eq!(record.daily_revenue, Money::from_major(5_000));
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_escape_cancels() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CabinetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let mut app = App::with_date(&settings, &paths, NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());

        fill_add_form(&mut app, "A", "100");
        press(&mut app, KeyCode::Esc);

        assert!(!app.has_dialog());
        assert!(app.records().is_empty());
    }
}
