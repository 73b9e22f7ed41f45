use crate::{LedgerError, Money, ResultLedger};

/// Direction of a movement: money coming in or going out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MovementKind {
    #[default]
    Income,
    Expense,
}

impl MovementKind {
    /// Stable wire tag, used by the CSV export.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Human-facing label.
    #[must_use]
    pub const fn display_label(self) -> &'static str {
        match self {
            Self::Income => "Ingreso",
            Self::Expense => "Gasto",
        }
    }

    /// Returns the other kind. Used by the add-movement form to toggle.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Income,
        }
    }
}

impl TryFrom<&str> for MovementKind {
    type Error = LedgerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(LedgerError::InvalidKind(other.to_string())),
        }
    }
}

/// A single validated income or expense entry.
///
/// Construction goes through [`Movement::new`], which enforces a non-empty
/// (trimmed) concept and a strictly positive amount. The amount carries no
/// sign; [`MovementKind`] decides how it counts toward the balance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Movement {
    concept: String,
    kind: MovementKind,
    amount: Money,
}

impl Movement {
    /// Validates and builds a movement.
    ///
    /// The concept is trimmed before the emptiness check, so whitespace-only
    /// input is rejected the same as an empty string.
    pub fn new(concept: &str, kind: MovementKind, amount: Money) -> ResultLedger<Self> {
        let concept = concept.trim();
        if concept.is_empty() {
            return Err(LedgerError::EmptyConcept);
        }
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount(format!(
                "amount must be > 0, got {amount}"
            )));
        }

        Ok(Self {
            concept: concept.to_string(),
            kind,
            amount,
        })
    }

    #[must_use]
    pub fn concept(&self) -> &str {
        &self.concept
    }

    #[must_use]
    pub const fn kind(&self) -> MovementKind {
        self.kind
    }

    #[must_use]
    pub const fn amount(&self) -> Money {
        self.amount
    }
}
