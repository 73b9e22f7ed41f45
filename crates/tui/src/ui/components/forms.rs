use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use ledger::MovementKind;

use crate::{
    app::{AppState, Mode, MovementField},
    ui::theme::Theme,
};

/// Calculates a centered rect for an overlay box.
fn centered_box(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1]);

    horizontal[1]
}

/// Draws the active form overlay, if any, on top of the current section.
pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    match state.mode {
        Mode::Browse => {}
        Mode::AddMovement => render_movement_form(frame, area, state),
        Mode::EditGoal => render_goal_form(frame, area, state),
    }
}

fn render_movement_form(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let card_area = centered_box(44, 9, area);

    frame.render_widget(Clear, card_area);

    let block = Block::default()
        .title(" Registrar movimiento ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_focused));

    let inner = block.inner(card_area);
    frame.render_widget(block, card_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Concept
            Constraint::Length(1),
            Constraint::Length(1), // Kind
            Constraint::Length(1),
            Constraint::Length(1), // Amount
        ])
        .margin(1)
        .split(inner);

    let form = &state.movement_form;

    render_text_field(
        frame,
        rows[0],
        "Concepto",
        &form.concept,
        form.focus == MovementField::Concept,
        &theme,
    );
    render_kind_field(
        frame,
        rows[2],
        form.kind,
        form.focus == MovementField::Kind,
        &theme,
    );
    render_text_field(
        frame,
        rows[4],
        "Monto",
        &form.amount,
        form.focus == MovementField::Amount,
        &theme,
    );
}

fn render_goal_form(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let card_area = centered_box(40, 5, area);

    frame.render_widget(Clear, card_area);

    let block = Block::default()
        .title(" Meta de ahorro ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_focused));

    let inner = block.inner(card_area);
    frame.render_widget(block, card_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1)])
        .margin(1)
        .split(inner);

    render_text_field(
        frame,
        rows[0],
        "Objetivo",
        &state.goal_form.amount,
        true,
        &theme,
    );
}

/// One labeled input row; the focused field shows a cursor bar.
fn render_text_field(
    frame: &mut Frame<'_>,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    theme: &Theme,
) {
    let cursor = if focused { "│" } else { "" };
    let value_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text)
    };

    let line = Line::from(vec![
        Span::styled(
            format!("{label:<10}"),
            Style::default().fg(theme.text_muted),
        ),
        Span::styled(format!("{value}{cursor}"), value_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_kind_field(
    frame: &mut Frame<'_>,
    area: Rect,
    kind: MovementKind,
    focused: bool,
    theme: &Theme,
) {
    let mut spans = vec![
        Span::styled(
            format!("{:<10}", "Tipo"),
            Style::default().fg(theme.text_muted),
        ),
        super::money::kind_marker(kind, theme),
    ];
    if focused {
        spans.push(Span::styled("  i/g cambia", Style::default().fg(theme.dim)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
