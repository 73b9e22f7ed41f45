use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::{
    app::{AppState, Mode},
    ui::{
        components::{card::Card, money},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_header(frame, layout[0], state, &theme);
    render_list(frame, layout[1], state, &theme);
}

fn render_header(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let summary = state.summary;
    let line = Line::from(vec![
        Span::styled("Movimientos", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}   ", state.ledger.movements().len())),
        Span::styled("Ingresos", Style::default().fg(theme.text_muted)),
        Span::raw(": "),
        money::styled_amount(summary.income_total, state.currency, theme),
        Span::raw("   "),
        Span::styled("Gastos", Style::default().fg(theme.text_muted)),
        Span::raw(": "),
        money::styled_movement_amount(
            summary.expense_total,
            ledger::MovementKind::Expense,
            state.currency,
            theme,
        ),
        Span::raw("   "),
        Span::styled("Balance", Style::default().fg(theme.text_muted)),
        Span::raw(": "),
        money::styled_amount_bold(summary.balance, state.currency, theme),
    ]);

    Card::new("Historial", theme).render_with(frame, area, Paragraph::new(line));
}

fn render_list(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    // The list only takes keys while no form overlay is open.
    let card = Card::new("Movimientos", theme).focused(state.mode == Mode::Browse);

    let movements = state.ledger.movements();
    if movements.is_empty() {
        let inner = card.inner(area);
        card.render_frame(frame, area);
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Aún no hay movimientos registrados.",
                Style::default().fg(theme.dim),
            ))
            .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let items: Vec<ListItem> = movements
        .iter()
        .map(|movement| {
            ListItem::new(Line::from(vec![
                money::kind_marker(movement.kind(), theme),
                Span::raw("  "),
                Span::styled(
                    format!("{:<24}", movement.concept()),
                    Style::default().fg(theme.text),
                ),
                money::styled_movement_amount(
                    movement.amount(),
                    movement.kind(),
                    state.currency,
                    theme,
                ),
            ]))
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));

    let list = List::new(items)
        .block(card.block())
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, area, &mut list_state);
}
