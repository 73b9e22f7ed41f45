use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use crossterm::event::{self, Event, KeyEvent};
use ledger::{Currency, Ledger, LedgerError, Money, MovementKind, Summary, export};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
    ui,
};

const TOAST_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Resumen,
    Historial,
}

impl Section {
    pub fn label(self) -> &'static str {
        match self {
            Self::Resumen => "Resumen",
            Self::Historial => "Historial",
        }
    }
}

/// What the keyboard currently drives: the shell or one of the two forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browse,
    AddMovement,
    EditGoal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementField {
    Concept,
    Kind,
    Amount,
}

#[derive(Debug)]
pub struct MovementForm {
    pub concept: String,
    pub amount: String,
    pub kind: MovementKind,
    pub focus: MovementField,
}

impl MovementForm {
    fn empty() -> Self {
        Self {
            concept: String::new(),
            amount: String::new(),
            kind: MovementKind::Income,
            focus: MovementField::Concept,
        }
    }

    fn advance_focus(&mut self) {
        self.focus = match self.focus {
            MovementField::Concept => MovementField::Kind,
            MovementField::Kind => MovementField::Amount,
            MovementField::Amount => MovementField::Concept,
        };
    }

    /// The text buffer under the cursor, or `None` on the kind toggle.
    fn active_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            MovementField::Concept => Some(&mut self.concept),
            MovementField::Amount => Some(&mut self.amount),
            MovementField::Kind => None,
        }
    }
}

#[derive(Debug)]
pub struct GoalForm {
    pub amount: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug)]
pub struct ToastState {
    pub message: String,
    pub level: ToastLevel,
    created: Instant,
}

impl ToastState {
    fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            message: message.into(),
            level,
            created: Instant::now(),
        }
    }

    fn is_expired(&self) -> bool {
        self.created.elapsed() > TOAST_TTL
    }
}

#[derive(Debug)]
pub struct AppState {
    pub ledger: Ledger,
    pub summary: Summary,
    pub currency: Currency,
    pub section: Section,
    pub mode: Mode,
    pub movement_form: MovementForm,
    pub goal_form: GoalForm,
    pub selected: usize,
    pub toast: Option<ToastState>,
    pub last_action: Option<DateTime<Local>>,
    confirm_clear: bool,
}

pub struct App {
    config: AppConfig,
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let ledger = Ledger::new();
        let summary = ledger.summary();
        let state = AppState {
            ledger,
            summary,
            currency: Currency::default(),
            section: Section::Resumen,
            mode: Mode::Browse,
            movement_form: MovementForm::empty(),
            goal_form: GoalForm {
                amount: String::new(),
            },
            selected: 0,
            toast: None,
            last_action: None,
            confirm_clear: false,
        };

        Self {
            config,
            state,
            should_quit: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        ui::restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            self.expire_toast();
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match crate::ui::keymap::map_key(key) {
            crate::ui::keymap::AppAction::Quit => {
                self.should_quit = true;
            }
            crate::ui::keymap::AppAction::Cancel => {
                self.state.mode = Mode::Browse;
                self.state.confirm_clear = false;
            }
            crate::ui::keymap::AppAction::NextField => {
                if self.state.mode == Mode::AddMovement {
                    self.state.movement_form.advance_focus();
                }
            }
            crate::ui::keymap::AppAction::Submit => match self.state.mode {
                Mode::AddMovement => self.submit_movement(),
                Mode::EditGoal => self.submit_goal(),
                Mode::Browse => {}
            },
            crate::ui::keymap::AppAction::Backspace => match self.state.mode {
                Mode::AddMovement => {
                    if let Some(text) = self.state.movement_form.active_text_mut() {
                        text.pop();
                    }
                }
                Mode::EditGoal => {
                    self.state.goal_form.amount.pop();
                }
                Mode::Browse => {}
            },
            crate::ui::keymap::AppAction::Up => self.handle_up(),
            crate::ui::keymap::AppAction::Down => self.handle_down(),
            crate::ui::keymap::AppAction::Input(ch) => self.handle_char(ch),
            crate::ui::keymap::AppAction::None => {}
        }
    }

    fn handle_up(&mut self) {
        match self.state.mode {
            Mode::Browse => {
                if self.state.section == Section::Historial {
                    self.select_prev();
                }
            }
            Mode::AddMovement => {
                if self.state.movement_form.focus == MovementField::Kind {
                    self.state.movement_form.kind = self.state.movement_form.kind.toggled();
                }
            }
            Mode::EditGoal => {}
        }
    }

    fn handle_down(&mut self) {
        match self.state.mode {
            Mode::Browse => {
                if self.state.section == Section::Historial {
                    self.select_next();
                }
            }
            Mode::AddMovement => {
                if self.state.movement_form.focus == MovementField::Kind {
                    self.state.movement_form.kind = self.state.movement_form.kind.toggled();
                }
            }
            Mode::EditGoal => {}
        }
    }

    fn handle_char(&mut self, ch: char) {
        match self.state.mode {
            Mode::AddMovement => match self.state.movement_form.focus {
                MovementField::Kind => match ch {
                    'i' | 'I' => self.state.movement_form.kind = MovementKind::Income,
                    'g' | 'G' => self.state.movement_form.kind = MovementKind::Expense,
                    ' ' => {
                        self.state.movement_form.kind = self.state.movement_form.kind.toggled();
                    }
                    _ => {}
                },
                MovementField::Concept | MovementField::Amount => {
                    if let Some(text) = self.state.movement_form.active_text_mut() {
                        text.push(ch);
                    }
                }
            },
            Mode::EditGoal => self.state.goal_form.amount.push(ch),
            Mode::Browse => self.handle_browse_key(ch),
        }
    }

    fn handle_browse_key(&mut self, ch: char) {
        // A pending clear confirmation dies on any other key.
        if !matches!(ch, 'c' | 'C') {
            self.state.confirm_clear = false;
        }

        match ch {
            'q' | 'Q' => self.should_quit = true,
            'r' | 'R' => self.state.section = Section::Resumen,
            'h' | 'H' => self.state.section = Section::Historial,
            'a' | 'A' => {
                self.state.movement_form = MovementForm::empty();
                self.state.mode = Mode::AddMovement;
            }
            'g' | 'G' => {
                let goal = self.state.ledger.goal();
                self.state.goal_form.amount = if goal.is_positive() {
                    goal.to_string()
                } else {
                    String::new()
                };
                self.state.mode = Mode::EditGoal;
            }
            'e' | 'E' => self.export_history(),
            'c' | 'C' => self.clear_all(),
            'j' | 'J' => {
                if self.state.section == Section::Historial {
                    self.select_next();
                }
            }
            'k' | 'K' => {
                if self.state.section == Section::Historial {
                    self.select_prev();
                }
            }
            _ => {}
        }
    }

    fn submit_movement(&mut self) {
        let amount =
            match Money::parse_major(&self.state.movement_form.amount, self.state.currency) {
                Ok(amount) => amount,
                Err(err) => {
                    tracing::debug!("rejected amount input: {err}");
                    self.toast("Monto no válido.", ToastLevel::Error);
                    return;
                }
            };
        let kind = self.state.movement_form.kind;
        let concept = self.state.movement_form.concept.clone();

        match self.state.ledger.add_movement(&concept, kind, amount) {
            Ok(()) => {
                tracing::info!(kind = kind.as_str(), amount = %amount, "movement recorded");
                self.state.mode = Mode::Browse;
                self.state.selected = 0;
                self.touch();
                self.toast("Movimiento agregado correctamente.", ToastLevel::Success);
            }
            Err(err) => {
                tracing::debug!("rejected movement: {err}");
                self.toast(message_for_error(&err), ToastLevel::Error);
            }
        }
    }

    fn submit_goal(&mut self) {
        let raw = self.state.goal_form.amount.trim();
        let goal = if raw.is_empty() {
            // Leaving the field empty drops the goal.
            Money::ZERO
        } else {
            match Money::parse_major(raw, self.state.currency) {
                Ok(goal) => goal,
                Err(err) => {
                    tracing::debug!("rejected goal input: {err}");
                    self.toast("Monto no válido.", ToastLevel::Error);
                    return;
                }
            }
        };

        match self.state.ledger.set_goal(goal) {
            Ok(()) => {
                tracing::info!(goal = %goal, "goal updated");
                self.state.mode = Mode::Browse;
                self.touch();
                self.toast("Meta guardada.", ToastLevel::Success);
            }
            Err(err) => {
                tracing::debug!("rejected goal: {err}");
                self.toast(message_for_error(&err), ToastLevel::Error);
            }
        }
    }

    fn export_history(&mut self) {
        if self.state.ledger.movements().is_empty() {
            self.toast("Aún no hay movimientos registrados.", ToastLevel::Info);
            return;
        }

        match export::export_to_path(&self.config.export_path, self.state.ledger.movements()) {
            Ok(()) => {
                tracing::info!(
                    path = %self.config.export_path,
                    rows = self.state.ledger.movements().len(),
                    "history exported"
                );
                self.touch();
                self.toast(
                    format!("Historial exportado a {}.", self.config.export_path),
                    ToastLevel::Success,
                );
            }
            Err(err) => {
                tracing::error!("export failed: {err}");
                self.toast("Error al exportar el historial.", ToastLevel::Error);
            }
        }
    }

    fn clear_all(&mut self) {
        if !self.state.confirm_clear {
            self.state.confirm_clear = true;
            self.toast("Presiona c de nuevo para limpiar todo.", ToastLevel::Warning);
            return;
        }

        self.state.confirm_clear = false;
        self.state.ledger.clear_all();
        self.state.selected = 0;
        self.touch();
        tracing::info!("history cleared");
        self.toast("Datos eliminados.", ToastLevel::Success);
    }

    /// Recomputes derived figures after a mutation and stamps the change time.
    fn touch(&mut self) {
        self.state.summary = self.state.ledger.summary();
        let len = self.state.ledger.movements().len();
        if len == 0 {
            self.state.selected = 0;
        } else if self.state.selected >= len {
            self.state.selected = len - 1;
        }
        self.state.last_action = Some(Local::now());
    }

    fn toast(&mut self, message: impl Into<String>, level: ToastLevel) {
        self.state.toast = Some(ToastState::new(message, level));
    }

    fn expire_toast(&mut self) {
        if self.state.toast.as_ref().is_some_and(ToastState::is_expired) {
            self.state.toast = None;
        }
    }

    fn select_next(&mut self) {
        let len = self.state.ledger.movements().len();
        if len == 0 {
            return;
        }
        self.state.selected = (self.state.selected + 1).min(len - 1);
    }

    fn select_prev(&mut self) {
        self.state.selected = self.state.selected.saturating_sub(1);
    }
}

fn message_for_error(err: &LedgerError) -> String {
    match err {
        LedgerError::EmptyConcept => "El concepto no puede estar vacío.".to_string(),
        LedgerError::InvalidAmount(_) => "El monto debe ser mayor a 0.".to_string(),
        LedgerError::NegativeGoal => "La meta no puede ser negativa.".to_string(),
        LedgerError::InvalidKind(_) => "Tipo de movimiento no válido.".to_string(),
        LedgerError::Csv(_) | LedgerError::Io(_) => "Error al exportar el historial.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    fn app() -> App {
        App::new(AppConfig::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    fn add_movement(app: &mut App, concept: &str, amount: &str, expense: bool) {
        type_text(app, "a");
        type_text(app, concept);
        press(app, KeyCode::Tab);
        if expense {
            type_text(app, "g");
        }
        press(app, KeyCode::Tab);
        type_text(app, amount);
        press(app, KeyCode::Enter);
    }

    #[test]
    fn add_movement_form_records_income() {
        let mut app = app();
        add_movement(&mut app, "Sueldo", "10000", false);

        assert_eq!(app.state.mode, Mode::Browse);
        assert_eq!(app.state.ledger.movements().len(), 1);
        assert_eq!(app.state.summary.income_total, Money::new(10_000_00));
        assert_eq!(app.state.summary.savings_rate, 100.0);
        let toast = app.state.toast.as_ref().unwrap();
        assert_eq!(toast.level, ToastLevel::Success);
        assert!(app.state.last_action.is_some());
    }

    #[test]
    fn add_movement_form_records_expense() {
        let mut app = app();
        add_movement(&mut app, "Sueldo", "10000", false);
        add_movement(&mut app, "Renta", "4000", true);

        assert_eq!(app.state.ledger.movements()[0].concept(), "Renta");
        assert_eq!(app.state.summary.balance, Money::new(6_000_00));
        assert_eq!(app.state.summary.savings_rate, 60.0);
    }

    #[test]
    fn empty_concept_keeps_the_form_open() {
        let mut app = app();
        type_text(&mut app, "a");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "100");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state.mode, Mode::AddMovement);
        assert!(app.state.ledger.movements().is_empty());
        let toast = app.state.toast.as_ref().unwrap();
        assert_eq!(toast.level, ToastLevel::Error);
        assert_eq!(toast.message, "El concepto no puede estar vacío.");
    }

    #[test]
    fn bad_amount_keeps_the_form_open() {
        let mut app = app();
        add_movement(&mut app, "Cafe", "mucho", false);

        assert_eq!(app.state.mode, Mode::AddMovement);
        assert!(app.state.ledger.movements().is_empty());
        assert_eq!(app.state.toast.as_ref().unwrap().message, "Monto no válido.");
    }

    #[test]
    fn typing_q_inside_a_field_does_not_quit() {
        let mut app = app();
        type_text(&mut app, "a");
        type_text(&mut app, "quincena");

        assert!(!app.should_quit);
        assert_eq!(app.state.movement_form.concept, "quincena");
    }

    #[test]
    fn kind_field_accepts_toggle_keys() {
        let mut app = app();
        type_text(&mut app, "a");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.state.movement_form.focus, MovementField::Kind);

        type_text(&mut app, "g");
        assert_eq!(app.state.movement_form.kind, MovementKind::Expense);
        type_text(&mut app, "i");
        assert_eq!(app.state.movement_form.kind, MovementKind::Income);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.state.movement_form.kind, MovementKind::Expense);
    }

    #[test]
    fn escape_cancels_without_recording() {
        let mut app = app();
        type_text(&mut app, "a");
        type_text(&mut app, "Renta");
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.state.mode, Mode::Browse);
        assert!(app.state.ledger.movements().is_empty());
    }

    #[test]
    fn goal_form_sets_and_prefills() {
        let mut app = app();
        type_text(&mut app, "g");
        type_text(&mut app, "5000");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state.ledger.goal(), Money::new(5_000_00));
        assert_eq!(app.state.toast.as_ref().unwrap().message, "Meta guardada.");

        // Reopening shows the stored goal ready for editing.
        type_text(&mut app, "g");
        assert_eq!(app.state.goal_form.amount, "5000.00");
    }

    #[test]
    fn empty_goal_input_drops_the_goal() {
        let mut app = app();
        type_text(&mut app, "g");
        type_text(&mut app, "5000");
        press(&mut app, KeyCode::Enter);

        type_text(&mut app, "g");
        for _ in 0.."5000.00".len() {
            press(&mut app, KeyCode::Backspace);
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state.ledger.goal(), Money::ZERO);
    }

    #[test]
    fn clearing_needs_a_second_press() {
        let mut app = app();
        add_movement(&mut app, "Sueldo", "10000", false);

        type_text(&mut app, "c");
        assert_eq!(app.state.ledger.movements().len(), 1);
        assert_eq!(app.state.toast.as_ref().unwrap().level, ToastLevel::Warning);

        type_text(&mut app, "c");
        assert!(app.state.ledger.movements().is_empty());
        assert_eq!(app.state.summary.balance, Money::ZERO);
    }

    #[test]
    fn other_keys_disarm_a_pending_clear() {
        let mut app = app();
        add_movement(&mut app, "Sueldo", "10000", false);

        type_text(&mut app, "c");
        type_text(&mut app, "h");
        type_text(&mut app, "c");

        // Second press landed after a section switch, so it only re-arms.
        assert_eq!(app.state.ledger.movements().len(), 1);
    }

    #[test]
    fn export_with_no_movements_only_informs() {
        let mut app = app();
        type_text(&mut app, "e");

        let toast = app.state.toast.as_ref().unwrap();
        assert_eq!(toast.level, ToastLevel::Info);
        assert_eq!(toast.message, "Aún no hay movimientos registrados.");
    }

    #[test]
    fn export_writes_the_configured_path() {
        let path = std::env::temp_dir().join(format!("alcancia_tui_{}.csv", std::process::id()));
        let config = AppConfig {
            export_path: path.to_string_lossy().into_owned(),
            ..AppConfig::default()
        };
        let mut app = App::new(config);
        add_movement(&mut app, "Sueldo", "10000", false);

        type_text(&mut app, "e");
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(text, "concept,kind,amount\nSueldo,income,10000.00\n");
        assert_eq!(app.state.toast.as_ref().unwrap().level, ToastLevel::Success);
    }

    #[test]
    fn historial_selection_moves_within_bounds() {
        let mut app = app();
        add_movement(&mut app, "Sueldo", "10000", false);
        add_movement(&mut app, "Renta", "4000", true);
        type_text(&mut app, "h");

        assert_eq!(app.state.selected, 0);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.state.selected, 1);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.state.selected, 1);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.state.selected, 0);
    }
}
