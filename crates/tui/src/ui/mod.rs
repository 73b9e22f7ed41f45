pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{AppState, Mode, Section};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

/// Draws one full frame: chrome, the active section and any overlays.
pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let theme = Theme::default();
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info bar
            Constraint::Length(2), // Tab bar
            Constraint::Min(0),    // Section content
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    render_info_bar(frame, layout[0], state, &theme);
    components::tabs::render_tabs(frame, layout[1], state.section, &theme);

    match state.section {
        Section::Resumen => screens::resumen::render(frame, layout[2], state),
        Section::Historial => screens::historial::render(frame, layout[2], state),
    }

    render_bottom_bar(frame, layout[3], state, &theme);

    // Overlays paint over the section, the toast over everything.
    components::forms::render(frame, area, state);
    components::toast::render(frame, area, state.toast.as_ref());
}

fn render_info_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let goal = state.ledger.goal();
    let goal_text = if goal.is_positive() {
        goal.format(state.currency)
    } else {
        "-".to_string()
    };
    let changed = state
        .last_action
        .map_or_else(|| "-".to_string(), |at| at.format("%H:%M:%S").to_string());

    let line = Line::from(vec![
        Span::styled(
            " Alcancía ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled("Movimientos", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}   ", state.ledger.movements().len())),
        Span::styled("Meta", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {goal_text}   ")),
        Span::styled("Último cambio", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {changed}")),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let parts = match state.mode {
        Mode::Browse => {
            let mut parts = components::tabs::tab_shortcuts(theme);
            parts.push(separator(theme));
            parts.extend(browse_hints(state.section, theme));
            parts.push(separator(theme));
            parts.push(Span::styled("q", Style::default().fg(theme.accent)));
            parts.push(Span::raw(" salir"));
            parts
        }
        Mode::AddMovement => vec![
            Span::styled("Tab", Style::default().fg(theme.accent)),
            Span::raw(" siguiente campo   "),
            Span::styled("Enter", Style::default().fg(theme.accent)),
            Span::raw(" guardar   "),
            Span::styled("Esc", Style::default().fg(theme.accent)),
            Span::raw(" cancelar"),
        ],
        Mode::EditGoal => vec![
            Span::styled("Enter", Style::default().fg(theme.accent)),
            Span::raw(" guardar   "),
            Span::styled("Esc", Style::default().fg(theme.accent)),
            Span::raw(" cancelar"),
        ],
    };

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

fn browse_hints(section: Section, theme: &Theme) -> Vec<Span<'static>> {
    let accent = Style::default().fg(theme.accent);
    let mut hints = vec![
        Span::styled("a", accent),
        Span::raw(" agregar  "),
        Span::styled("g", accent),
        Span::raw(" meta  "),
        Span::styled("e", accent),
        Span::raw(" exportar  "),
        Span::styled("c", accent),
        Span::raw(" limpiar"),
    ];
    if section == Section::Historial {
        hints.push(Span::raw("  "));
        hints.push(Span::styled("j/k", accent));
        hints.push(Span::raw(" mover"));
    }
    hints
}

fn separator(theme: &Theme) -> Span<'static> {
    Span::styled("  │  ", Style::default().fg(theme.border))
}
