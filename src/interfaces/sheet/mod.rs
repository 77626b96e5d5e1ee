//! Loading participant records from a tabular source.
//!
//! Both readers reduce their input to rows of [`Cell`]s in absolute sheet
//! coordinates, and [`decode_row`] turns those into records. Columns are
//! located by position, not by header text.

pub mod csv_source;
pub mod xlsx_source;

use crate::domain::record::{ParticipantRecord, StudentId};
use crate::error::{PayoutError, Result};
use log::{debug, info};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

/// Number of columns a record spans.
pub const RECORD_WIDTH: usize = 11;

const COLUMN_NAMES: [&str; RECORD_WIDTH] = [
    "student_id",
    "name",
    "base",
    "debt",
    "shift",
    "shopping",
    "prep",
    "leader",
    "insta",
    "chief",
    "accountant",
];

/// Where the records sit inside the sheet (zero-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    /// Row holding the column headers; data starts on the row after it.
    pub header_row: usize,
    /// Column holding the student id; the other ten follow it in order.
    pub first_column: usize,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            header_row: 1,
            first_column: 2,
        }
    }
}

impl SheetLayout {
    pub fn first_data_row(&self) -> usize {
        self.header_row + 1
    }

    /// Index one past the last column a record uses.
    pub fn end_column(&self) -> usize {
        self.first_column + RECORD_WIDTH
    }
}

/// A single cell as read from any source.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    /// Anything else the source can hold (booleans, error values, dates).
    Other(String),
}

impl Cell {
    fn as_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) | Cell::Other(s) => s.clone(),
            Cell::Number(n) if n.fract() == 0.0 && n.is_finite() => format!("{:.0}", n),
            Cell::Number(n) => n.to_string(),
        }
    }
}

/// Decodes one data row. `cells` holds the record's eleven columns in order.
///
/// Returns `Ok(None)` for rows without a student id.
pub fn decode_row(row: usize, cells: &[Cell]) -> Result<Option<ParticipantRecord>> {
    if cells.len() < RECORD_WIDTH {
        return Err(PayoutError::SourceMalformed(format!(
            "row {} has {} of the {} required columns",
            row + 1,
            cells.len(),
            RECORD_WIDTH
        )));
    }

    let Some(student_id) = StudentId::parse(&cells[0].as_text()) else {
        debug!("row {}: no student id, skipping", row + 1);
        return Ok(None);
    };

    let count = |idx: usize| -> Result<Decimal> { decode_count(row, idx, &cells[idx]) };

    Ok(Some(ParticipantRecord {
        student_id,
        name: cells[1].as_text().trim().to_string(),
        base_units: count(2)?,
        debt_units: count(3)?,
        shift_hours: count(4)?,
        shopping_count: count(5)?,
        prep_count: count(6)?,
        leader: count(7)?,
        insta: count(8)?,
        chief: count(9)?,
        accountant: count(10)?,
    }))
}

fn decode_count(row: usize, idx: usize, cell: &Cell) -> Result<Decimal> {
    let malformed = |what: &str| {
        PayoutError::SourceMalformed(format!(
            "row {}, column {}: expected a number, found {}",
            row + 1,
            COLUMN_NAMES[idx],
            what
        ))
    };
    match cell {
        Cell::Empty => Ok(Decimal::ZERO),
        Cell::Number(n) => Decimal::try_from(*n).map_err(|_| malformed(&n.to_string())),
        Cell::Text(s) if s.trim().is_empty() => Ok(Decimal::ZERO),
        Cell::Text(s) => Decimal::from_str(s.trim())
            .or_else(|_| Decimal::from_scientific(s.trim()))
            .map_err(|_| malformed(&format!("{:?}", s))),
        Cell::Other(s) => Err(malformed(s.as_str())),
    }
}

/// Loads every record from `path`.
///
/// `.csv` files go through the CSV reader; anything else is opened as an
/// Excel workbook. `sheet` picks a worksheet by name (first sheet otherwise)
/// and is ignored for CSV.
pub fn load_records(
    path: &Path,
    layout: &SheetLayout,
    sheet: Option<&str>,
) -> Result<Vec<ParticipantRecord>> {
    if !path.is_file() {
        return Err(PayoutError::SourceUnavailable {
            path: path.to_path_buf(),
        });
    }
    info!("loading records from {}", path.display());

    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

    let records = if is_csv {
        csv_source::read_records(path, layout)?
    } else {
        xlsx_source::read_records(path, layout, sheet)?
    };
    info!("loaded {} records", records.len());
    Ok(records)
}
