//! CSV export of the movement history.
//!
//! The wire format is three columns with a header row, one movement per line,
//! in the same order the store holds them (newest first):
//!
//! ```csv
//! concept,kind,amount
//! Renta,expense,4000.00
//! Sueldo,income,10000.00
//! ```
//!
//! `kind` uses the stable wire tags (`income`/`expense`), never the display
//! labels, and `amount` is the plain major-unit decimal with two decimals.

use std::{fs::File, io, path::Path};

use serde::{Deserialize, Serialize};

use crate::{Currency, Money, Movement, MovementKind, ResultLedger};

#[derive(Debug, Serialize, Deserialize)]
struct Row {
    concept: String,
    kind: String,
    amount: String,
}

/// Writes the history as CSV into `writer`.
///
/// The header row is written even when the history is empty.
pub fn write_csv<W: io::Write>(writer: W, movements: &[Movement]) -> ResultLedger<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(["concept", "kind", "amount"])?;
    for movement in movements {
        csv_writer.serialize(Row {
            concept: movement.concept().to_string(),
            kind: movement.kind().as_str().to_string(),
            amount: movement.amount().to_string(),
        })?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Reads a CSV produced by [`write_csv`] back into movements.
///
/// Rows pass through the same validation as interactive entry, so a tampered
/// file with an empty concept, a bad amount or an unknown kind is rejected
/// with the matching [`LedgerError`].
pub fn read_csv<R: io::Read>(reader: R) -> ResultLedger<Vec<Movement>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut movements = Vec::new();
    for row in csv_reader.deserialize::<Row>() {
        let row = row?;
        let kind = MovementKind::try_from(row.kind.as_str())?;
        let amount = Money::parse_major(&row.amount, Currency::Mxn)?;
        movements.push(Movement::new(&row.concept, kind, amount)?);
    }
    Ok(movements)
}

/// Writes the history to a file at `path`, creating or truncating it.
pub fn export_to_path<P: AsRef<Path>>(path: P, movements: &[Movement]) -> ResultLedger<()> {
    let file = File::create(path)?;
    write_csv(file, movements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LedgerError;

    fn sample() -> Vec<Movement> {
        vec![
            Movement::new("Renta", MovementKind::Expense, Money::new(4_000_00)).unwrap(),
            Movement::new("Sueldo", MovementKind::Income, Money::new(10_000_00)).unwrap(),
        ]
    }

    #[test]
    fn writes_header_and_rows_in_order() {
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &sample()).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            text,
            "concept,kind,amount\nRenta,expense,4000.00\nSueldo,income,10000.00\n"
        );
    }

    #[test]
    fn empty_history_still_writes_header() {
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &[]).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "concept,kind,amount\n");
    }

    #[test]
    fn quotes_concepts_containing_commas() {
        let movements =
            vec![Movement::new("Luz, agua y gas", MovementKind::Expense, Money::new(750_00))
                .unwrap()];
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &movements).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            text,
            "concept,kind,amount\n\"Luz, agua y gas\",expense,750.00\n"
        );

        let back = read_csv(text.as_bytes()).unwrap();
        assert_eq!(back, movements);
    }

    #[test]
    fn read_rejects_unknown_kind() {
        let text = "concept,kind,amount\nRenta,transfer,4000.00\n";
        let err = read_csv(text.as_bytes()).unwrap_err();
        assert_eq!(err, LedgerError::InvalidKind("transfer".to_string()));
    }

    #[test]
    fn read_rejects_bad_amount() {
        let text = "concept,kind,amount\nRenta,expense,mucho\n";
        assert!(matches!(
            read_csv(text.as_bytes()),
            Err(LedgerError::InvalidAmount(_))
        ));
    }
}
