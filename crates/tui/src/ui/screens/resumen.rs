use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};

use ledger::metrics;

use crate::{
    app::AppState,
    ui::{
        components::{
            card::{Card, StatCard},
            money,
        },
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Headline figures
            Constraint::Length(5), // Goal progress
            Constraint::Min(5),    // Recent movements
            Constraint::Length(3), // Quick actions
        ])
        .split(area);

    render_headline(frame, layout[0], state, &theme);
    render_goal_card(frame, layout[1], state, &theme);
    render_recent_movements(frame, layout[2], state, &theme);
    render_quick_actions(frame, layout[3], &theme);
}

fn render_headline(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let summary = state.summary;
    let currency = state.currency;

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(area);

    StatCard::new(
        "Ingresos",
        format!("+{}", summary.income_total.format(currency)),
        theme,
    )
    .value_style(Style::default().fg(theme.positive))
    .render(frame, cols[0]);

    StatCard::new(
        "Gastos",
        format!("-{}", summary.expense_total.format(currency)),
        theme,
    )
    .value_style(Style::default().fg(theme.negative))
    .render(frame, cols[1]);

    let balance = summary.balance;
    let balance_value = if balance.is_positive() {
        format!("+{}", balance.format(currency))
    } else {
        balance.format(currency)
    };
    let balance_color = if balance.is_positive() {
        theme.positive
    } else if balance.is_negative() {
        theme.negative
    } else {
        theme.text
    };
    StatCard::new("Balance", balance_value, theme)
        .value_style(Style::default().fg(balance_color))
        .render(frame, cols[2]);

    let rate_color = if summary.savings_rate > 0.0 {
        theme.positive
    } else if summary.savings_rate < 0.0 {
        theme.negative
    } else {
        theme.text
    };
    StatCard::new(
        "Ahorro estimado",
        format!("{:.1}%", summary.savings_rate),
        theme,
    )
    .value_style(Style::default().fg(rate_color))
    .subtitle("del ingreso")
    .render(frame, cols[3]);
}

fn render_goal_card(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let card = Card::new("Meta de ahorro", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let goal = state.ledger.goal();
    let Some(progress) = metrics::compute_goal_progress(state.summary.balance, goal) else {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Define una meta para ver tu progreso.",
                Style::default().fg(theme.dim),
            )),
            inner,
        );
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let header = Line::from(vec![
        Span::styled("Meta: ", Style::default().fg(theme.text_muted)),
        Span::styled(
            goal.format(state.currency),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), rows[0]);

    let label = format!("Progreso: {:.1}%", progress.fraction * 100.0);
    frame.render_widget(
        money::goal_gauge(progress.fraction, progress.met, label, theme),
        rows[1],
    );

    let shortfall = metrics::compute_goal_shortfall(state.summary.balance, goal);
    let (status, status_style) = if progress.met {
        (
            format!("¡Meta cumplida! Superaste {}.", goal.format(state.currency)),
            Style::default().fg(theme.positive),
        )
    } else {
        (
            format!(
                "Te faltan {} para cumplir tu meta.",
                shortfall.format(state.currency)
            ),
            Style::default().fg(theme.warning),
        )
    };
    frame.render_widget(Paragraph::new(Span::styled(status, status_style)), rows[2]);
}

fn render_recent_movements(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let card = Card::new("Movimientos recientes", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let items: Vec<ListItem> = state
        .ledger
        .movements()
        .iter()
        .take(inner.height as usize)
        .map(|movement| {
            ListItem::new(Line::from(vec![
                money::kind_marker(movement.kind(), theme),
                Span::raw("  "),
                Span::styled(
                    format!("{:<20}", movement.concept()),
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

    if items.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Aún no hay movimientos registrados.",
                Style::default().fg(theme.dim),
            )),
            inner,
        );
    } else {
        frame.render_widget(List::new(items), inner);
    }
}

fn render_quick_actions(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let actions = Line::from(vec![
        Span::styled("[a]", Style::default().fg(theme.accent)),
        Span::raw(" Registrar movimiento   "),
        Span::styled("[g]", Style::default().fg(theme.accent)),
        Span::raw(" Meta de ahorro   "),
        Span::styled("[e]", Style::default().fg(theme.accent)),
        Span::raw(" Exportar CSV   "),
        Span::styled("[c]", Style::default().fg(theme.accent)),
        Span::raw(" Limpiar todo"),
    ]);

    Card::new("Acciones", theme).render_with(frame, area, Paragraph::new(actions));
}
