//! Derived figures over the movement history.
//!
//! All functions here are pure: they take slices and amounts and return
//! values, so callers can recompute after every mutation without worrying
//! about hidden state. Percentages come back as `f64` in `0.0..=100.0`
//! (`savings_rate`) or fractions in `0.0..=1.0` (`GoalProgress`); everything
//! else stays in integer centavos.

use crate::{Money, Movement, MovementKind};

/// Snapshot of the headline figures: totals, balance and savings rate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Summary {
    pub income_total: Money,
    pub expense_total: Money,
    pub balance: Money,
    /// Percent of income kept, `0.0` when there is no income.
    pub savings_rate: f64,
}

/// Progress toward a configured goal.
///
/// `fraction` is clamped to `0.0..=1.0` so it can drive a gauge directly;
/// `met` is the unclamped signal that the balance actually reached the goal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GoalProgress {
    pub fraction: f64,
    pub met: bool,
}

/// Sums movement amounts per kind into `(income_total, expense_total)`.
///
/// Both totals are non-negative because movement amounts are validated to be
/// strictly positive on entry.
#[must_use]
pub fn compute_totals(movements: &[Movement]) -> (Money, Money) {
    movements
        .iter()
        .fold((Money::ZERO, Money::ZERO), |(income, expense), m| {
            match m.kind() {
                MovementKind::Income => (income + m.amount(), expense),
                MovementKind::Expense => (income, expense + m.amount()),
            }
        })
}

/// Balance = income total minus expense total. May be negative.
#[must_use]
pub fn compute_balance(income_total: Money, expense_total: Money) -> Money {
    income_total - expense_total
}

/// Share of income kept, as a percentage.
///
/// Returns `0.0` when there is no income, including the expenses-only case;
/// goes negative when expenses exceed income.
#[must_use]
pub fn compute_savings_rate(income_total: Money, balance: Money) -> f64 {
    if income_total.is_positive() {
        balance.minor() as f64 / income_total.minor() as f64 * 100.0
    } else {
        0.0
    }
}

/// Progress toward `goal`, or `None` when no positive goal is set.
#[must_use]
pub fn compute_goal_progress(balance: Money, goal: Money) -> Option<GoalProgress> {
    if !goal.is_positive() {
        return None;
    }
    let fraction = (balance.minor() as f64 / goal.minor() as f64).clamp(0.0, 1.0);
    Some(GoalProgress {
        fraction,
        met: balance >= goal,
    })
}

/// Amount still missing to reach `goal`.
///
/// A negative balance does not inflate the shortfall beyond the goal itself:
/// the balance is floored at zero first. Zero once the goal is met.
#[must_use]
pub fn compute_goal_shortfall(balance: Money, goal: Money) -> Money {
    let floored = balance.max(Money::ZERO);
    if floored >= goal {
        Money::ZERO
    } else {
        goal - floored
    }
}

/// Computes the full [`Summary`] in one pass over the history.
#[must_use]
pub fn summarize(movements: &[Movement]) -> Summary {
    let (income_total, expense_total) = compute_totals(movements);
    let balance = compute_balance(income_total, expense_total);
    Summary {
        income_total,
        expense_total,
        balance,
        savings_rate: compute_savings_rate(income_total, balance),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movement(concept: &str, kind: MovementKind, minor: i64) -> Movement {
        Movement::new(concept, kind, Money::new(minor)).unwrap()
    }

    #[test]
    fn totals_split_by_kind() {
        let history = vec![
            movement("Renta", MovementKind::Expense, 4_000_00),
            movement("Sueldo", MovementKind::Income, 10_000_00),
            movement("Super", MovementKind::Expense, 1_500_00),
        ];
        let (income, expense) = compute_totals(&history);
        assert_eq!(income, Money::new(10_000_00));
        assert_eq!(expense, Money::new(5_500_00));
        assert_eq!(compute_balance(income, expense), Money::new(4_500_00));
    }

    #[test]
    fn empty_history_yields_zeros() {
        let summary = summarize(&[]);
        assert_eq!(summary.income_total, Money::ZERO);
        assert_eq!(summary.expense_total, Money::ZERO);
        assert_eq!(summary.balance, Money::ZERO);
        assert_eq!(summary.savings_rate, 0.0);
    }

    #[test]
    fn savings_rate_handles_no_income() {
        let history = vec![movement("Renta", MovementKind::Expense, 4_000_00)];
        let summary = summarize(&history);
        assert_eq!(summary.balance, Money::new(-4_000_00));
        assert_eq!(summary.savings_rate, 0.0);
    }

    #[test]
    fn savings_rate_can_go_negative_with_income() {
        let history = vec![
            movement("Sueldo", MovementKind::Income, 1_000_00),
            movement("Renta", MovementKind::Expense, 1_500_00),
        ];
        let summary = summarize(&history);
        assert_eq!(summary.savings_rate, -50.0);
    }

    #[test]
    fn goal_progress_requires_positive_goal() {
        assert_eq!(compute_goal_progress(Money::new(100), Money::ZERO), None);
        assert_eq!(compute_goal_progress(Money::new(100), Money::new(-1)), None);
    }

    #[test]
    fn goal_progress_clamps_fraction() {
        let under = compute_goal_progress(Money::new(-500), Money::new(1_000)).unwrap();
        assert_eq!(under.fraction, 0.0);
        assert!(!under.met);

        let over = compute_goal_progress(Money::new(9_000), Money::new(1_000)).unwrap();
        assert_eq!(over.fraction, 1.0);
        assert!(over.met);

        let exact = compute_goal_progress(Money::new(1_000), Money::new(1_000)).unwrap();
        assert_eq!(exact.fraction, 1.0);
        assert!(exact.met);

        let half = compute_goal_progress(Money::new(500), Money::new(1_000)).unwrap();
        assert_eq!(half.fraction, 0.5);
        assert!(!half.met);
    }

    #[test]
    fn shortfall_floors_negative_balance() {
        assert_eq!(
            compute_goal_shortfall(Money::new(-2_000), Money::new(5_000)),
            Money::new(5_000)
        );
        assert_eq!(
            compute_goal_shortfall(Money::new(1_000), Money::new(5_000)),
            Money::new(4_000)
        );
        assert_eq!(
            compute_goal_shortfall(Money::new(7_000), Money::new(5_000)),
            Money::ZERO
        );
    }
}
