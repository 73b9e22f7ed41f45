use thiserror::Error;

/// Errors produced by ledger operations.
///
/// Every rejected mutation maps to one of the validation variants; the store
/// never panics on bad input. `Csv` and `Io` only surface from the export
/// module.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("concept must not be empty")]
    EmptyConcept,

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("goal must not be negative")]
    NegativeGoal,

    #[error("invalid movement kind: {0}")]
    InvalidKind(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl PartialEq for LedgerError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::EmptyConcept, Self::EmptyConcept)
            | (Self::NegativeGoal, Self::NegativeGoal) => true,
            (Self::InvalidAmount(a), Self::InvalidAmount(b))
            | (Self::InvalidKind(a), Self::InvalidKind(b)) => a == b,
            (Self::Csv(a), Self::Csv(b)) => a.to_string() == b.to_string(),
            (Self::Io(a), Self::Io(b)) => a.kind() == b.kind(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_stable() {
        assert_eq!(
            LedgerError::EmptyConcept.to_string(),
            "concept must not be empty"
        );
        assert_eq!(
            LedgerError::InvalidAmount("too many decimals".to_string()).to_string(),
            "invalid amount: too many decimals"
        );
        assert_eq!(
            LedgerError::NegativeGoal.to_string(),
            "goal must not be negative"
        );
        assert_eq!(
            LedgerError::InvalidKind("transfer".to_string()).to_string(),
            "invalid movement kind: transfer"
        );
    }
}
