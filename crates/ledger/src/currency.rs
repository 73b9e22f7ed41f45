/// Currency of the ledger and of every money value it holds.
///
/// Alcancía is mono-currency (`MXN`), but the unit is modelled explicitly so
/// amounts never travel as bare integers.
///
/// ## Minor units
///
/// Monetary values are stored as an `i64` number of **minor units** (see
/// [`Money`]). `minor_units()` returns how many decimal digits sit between:
/// - major units (human input/output, e.g. `10.50 MXN`)
/// - minor units (stored integers, e.g. `1050`)
///
/// [`Money`]: crate::Money
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Currency {
    #[default]
    Mxn,
}

impl Currency {
    /// Canonical currency code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Mxn => "MXN",
        }
    }

    /// Number of fraction digits used when formatting/parsing amounts.
    ///
    /// MXN uses 2 fraction digits (centavos).
    #[must_use]
    pub const fn minor_units(self) -> u8 {
        match self {
            Currency::Mxn => 2,
        }
    }
}
