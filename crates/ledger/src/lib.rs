pub use currency::Currency;
pub use error::LedgerError;
pub use metrics::{GoalProgress, Summary};
pub use money::Money;
pub use movement::{Movement, MovementKind};

mod currency;
mod error;
pub mod export;
pub mod metrics;
mod money;
mod movement;

type ResultLedger<T> = Result<T, LedgerError>;

/// In-memory store of movements plus the configured savings goal.
///
/// Movements are kept newest first: [`Ledger::add_movement`] prepends, so
/// index 0 is always the most recent entry and the CSV export preserves the
/// same order. All mutations validate first and leave the store untouched on
/// error.
#[derive(Debug, Default)]
pub struct Ledger {
    movements: Vec<Movement>,
    goal: Money,
}

impl Ledger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and records a movement at the front of the history.
    pub fn add_movement(
        &mut self,
        concept: &str,
        kind: MovementKind,
        amount: Money,
    ) -> ResultLedger<()> {
        let movement = Movement::new(concept, kind, amount)?;
        self.movements.insert(0, movement);
        Ok(())
    }

    /// Sets the savings goal. Zero clears it; negative values are rejected.
    pub fn set_goal(&mut self, goal: Money) -> ResultLedger<()> {
        if goal.is_negative() {
            return Err(LedgerError::NegativeGoal);
        }
        self.goal = goal;
        Ok(())
    }

    /// Removes every movement. The goal is kept.
    pub fn clear_all(&mut self) {
        self.movements.clear();
    }

    /// The full history, newest first.
    #[must_use]
    pub fn movements(&self) -> &[Movement] {
        &self.movements
    }

    #[must_use]
    pub const fn goal(&self) -> Money {
        self.goal
    }

    /// Recomputes the headline figures from the current history.
    #[must_use]
    pub fn summary(&self) -> Summary {
        metrics::summarize(&self.movements)
    }
}
