use ledger::{Currency, Money, MovementKind};
use ratatui::{
    style::{Modifier, Style},
    text::Span,
    widgets::Gauge,
};

use crate::ui::theme::Theme;

/// Styled money span: income green with a `+`, expenses red with a `-`,
/// derived amounts colored by their own sign.
#[must_use]
pub fn styled_amount(amount: Money, currency: Currency, theme: &Theme) -> Span<'static> {
    let formatted = amount.format(currency);

    let (color, prefix) = if amount.is_positive() {
        (theme.positive, "+")
    } else if amount.is_negative() {
        (theme.negative, "")
    } else {
        (theme.text, "")
    };

    Span::styled(format!("{prefix}{formatted}"), Style::default().fg(color))
}

/// Movement amount with the sign implied by its kind.
#[must_use]
pub fn styled_movement_amount(
    amount: Money,
    kind: MovementKind,
    currency: Currency,
    theme: &Theme,
) -> Span<'static> {
    let formatted = amount.format(currency);
    match kind {
        MovementKind::Income => {
            Span::styled(format!("+{formatted}"), Style::default().fg(theme.positive))
        }
        MovementKind::Expense => {
            Span::styled(format!("-{formatted}"), Style::default().fg(theme.negative))
        }
    }
}

/// Bold variant for headline totals.
#[must_use]
pub fn styled_amount_bold(amount: Money, currency: Currency, theme: &Theme) -> Span<'static> {
    let mut span = styled_amount(amount, currency, theme);
    span.style = span.style.add_modifier(Modifier::BOLD);
    span
}

/// `▲ Ingreso` / `▼ Gasto` marker with the matching color.
///
/// The label is padded so markers line up when stacked in a list.
#[must_use]
pub fn kind_marker(kind: MovementKind, theme: &Theme) -> Span<'static> {
    let (arrow, color) = match kind {
        MovementKind::Income => ("▲", theme.positive),
        MovementKind::Expense => ("▼", theme.negative),
    };
    Span::styled(
        format!("{arrow} {:<7}", kind.display_label()),
        Style::default().fg(color),
    )
}

/// Progress gauge toward the savings goal.
///
/// `fraction` is already clamped to `0.0..=1.0` by the metrics layer, so it
/// can drive the gauge directly.
#[must_use]
pub fn goal_gauge(fraction: f64, met: bool, label: String, theme: &Theme) -> Gauge<'static> {
    let gauge_color = if met {
        theme.positive
    } else if fraction >= 0.5 {
        theme.accent
    } else {
        theme.warning
    };

    Gauge::default()
        .gauge_style(Style::default().fg(gauge_color))
        .ratio(fraction)
        .label(label)
}
