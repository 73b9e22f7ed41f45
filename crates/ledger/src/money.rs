use std::{
    fmt,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

use crate::{Currency, LedgerError};

/// Signed money amount represented as **integer centavos**.
///
/// Use this type for **all** monetary values in the ledger (movement amounts,
/// goals, derived totals) to avoid floating-point drift.
///
/// The value is signed: movement amounts are always positive (direction lives
/// in the movement kind), while derived balances may go negative.
///
/// # Examples
///
/// ```rust
/// use ledger::{Currency, Money};
///
/// let amount = Money::new(12_34);
/// assert_eq!(amount.minor(), 1234);
/// assert_eq!(amount.to_string(), "12.34");
/// assert_eq!(amount.format(Currency::Mxn), "$12.34 MXN");
/// ```
///
/// Parsing from user input (accepts `.` or `,` as decimal separator; rejects
/// more than 2 decimals):
///
/// ```rust
/// use ledger::{Currency, Money};
///
/// assert_eq!(Money::parse_major("10", Currency::Mxn).unwrap().minor(), 1000);
/// assert_eq!(Money::parse_major("10,5", Currency::Mxn).unwrap().minor(), 1050);
/// assert!(Money::parse_major("12.345", Currency::Mxn).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Creates a new amount from integer minor units.
    #[must_use]
    pub const fn new(minor: i64) -> Self {
        Self(minor)
    }

    /// Returns the raw value in minor units.
    #[must_use]
    pub const fn minor(self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is 0.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the amount is positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Returns `true` if the amount is negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Checked addition (returns `None` on overflow).
    #[must_use]
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// Checked subtraction (returns `None` on overflow).
    #[must_use]
    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.0.checked_sub(rhs.0).map(Money)
    }

    /// Parses a major-unit decimal string into minor units.
    ///
    /// Accepts `.` or `,` as decimal separator and an optional leading
    /// `+`/`-`. Rejects empty strings, non-digit text, more fraction digits
    /// than the currency carries, and values that overflow `i64`.
    pub fn parse_major(s: &str, currency: Currency) -> Result<Self, LedgerError> {
        let empty = || LedgerError::InvalidAmount("empty amount".to_string());
        let invalid = || LedgerError::InvalidAmount("invalid amount".to_string());
        let overflow = || LedgerError::InvalidAmount("amount too large".to_string());

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(empty());
        }

        let (sign, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (-1i64, stripped)
        } else if let Some(stripped) = trimmed.strip_prefix('+') {
            (1i64, stripped)
        } else {
            (1i64, trimmed)
        };

        let rest = rest.trim();
        if rest.is_empty() {
            return Err(empty());
        }

        let rest = rest.replace(',', ".");
        let mut parts = rest.split('.');
        let major_str = parts.next().ok_or_else(invalid)?;
        let frac_str = parts.next();

        if parts.next().is_some() {
            return Err(invalid());
        }

        if major_str.is_empty() || !major_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let major: i64 = major_str.parse().map_err(|_| invalid())?;

        let max_frac = usize::from(currency.minor_units());
        let frac: i64 = match frac_str {
            None | Some("") => 0,
            Some(frac) => {
                if !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                if frac.len() > max_frac {
                    return Err(LedgerError::InvalidAmount(
                        "too many decimals".to_string(),
                    ));
                }
                let parsed: i64 = frac.parse().map_err(|_| invalid())?;
                parsed * 10i64.pow((max_frac - frac.len()) as u32)
            }
        };

        let scale = 10i64.pow(u32::from(currency.minor_units()));
        let total = major
            .checked_mul(scale)
            .and_then(|v| v.checked_add(frac))
            .ok_or_else(overflow)?;

        let signed = if sign < 0 {
            total.checked_neg().ok_or_else(overflow)?
        } else {
            total
        };

        Ok(Money(signed))
    }

    /// Formats the amount for display: `$1,234.56 MXN`.
    ///
    /// Thousands are grouped with commas and the sign precedes the `$`.
    #[must_use]
    pub fn format(self, currency: Currency) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = 10u64.pow(u32::from(currency.minor_units()));
        let major = group_thousands(abs / scale);
        let frac = abs % scale;
        let width = usize::from(currency.minor_units());
        format!("{sign}${major}.{frac:0width$} {}", currency.code())
    }
}

/// The plain wire rendering (`1234.56`, no grouping, no symbol), used by the
/// CSV export.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let major = abs / 100;
        let frac = abs % 100;
        write!(f, "{sign}{major}.{frac:02}")
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Money> for i64 {
    fn from(value: Money) -> Self {
        value.0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Self::Output {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Self::Output {
        Money(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_plain_decimal() {
        assert_eq!(Money::new(0).to_string(), "0.00");
        assert_eq!(Money::new(1).to_string(), "0.01");
        assert_eq!(Money::new(10).to_string(), "0.10");
        assert_eq!(Money::new(1050).to_string(), "10.50");
        assert_eq!(Money::new(-1050).to_string(), "-10.50");
    }

    #[test]
    fn format_groups_thousands_with_mxn_code() {
        assert_eq!(Money::new(0).format(Currency::Mxn), "$0.00 MXN");
        assert_eq!(Money::new(1050).format(Currency::Mxn), "$10.50 MXN");
        assert_eq!(
            Money::new(1_000_000).format(Currency::Mxn),
            "$10,000.00 MXN"
        );
        assert_eq!(
            Money::new(123_456_789).format(Currency::Mxn),
            "$1,234,567.89 MXN"
        );
        assert_eq!(
            Money::new(-400_000).format(Currency::Mxn),
            "-$4,000.00 MXN"
        );
    }

    #[test]
    fn parse_accepts_dot_or_comma() {
        assert_eq!(Money::parse_major("10", Currency::Mxn).unwrap().minor(), 1000);
        assert_eq!(Money::parse_major("10.5", Currency::Mxn).unwrap().minor(), 1050);
        assert_eq!(Money::parse_major("10,50", Currency::Mxn).unwrap().minor(), 1050);
        assert_eq!(Money::parse_major("-0.01", Currency::Mxn).unwrap().minor(), -1);
        assert_eq!(Money::parse_major("+1.00", Currency::Mxn).unwrap().minor(), 100);
        assert_eq!(Money::parse_major("  2.30 ", Currency::Mxn).unwrap().minor(), 230);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Money::parse_major("", Currency::Mxn).is_err());
        assert!(Money::parse_major("  ", Currency::Mxn).is_err());
        assert!(Money::parse_major("abc", Currency::Mxn).is_err());
        assert!(Money::parse_major("1.2.3", Currency::Mxn).is_err());
        assert!(Money::parse_major("12.345", Currency::Mxn).is_err());
        assert!(Money::parse_major("1,000.50", Currency::Mxn).is_err());
    }

    #[test]
    fn parse_round_trips_display() {
        for minor in [0i64, 1, 99, 100, 1050, 1_000_000, -4_000_00] {
            let money = Money::new(minor);
            let parsed = Money::parse_major(&money.to_string(), Currency::Mxn).unwrap();
            assert_eq!(parsed, money);
        }
    }
}
