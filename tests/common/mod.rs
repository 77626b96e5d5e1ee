#![allow(dead_code)]

use std::io::Error;
use std::path::Path;

pub const HEADER: [&str; 13] = [
    "no",
    "group",
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

/// Writes a payout sheet as CSV: a title row, the header row, then one line
/// per entry of `rows` (the eleven record columns, student id first).
pub fn write_sheet(path: &Path, rows: &[[&str; 11]]) -> Result<(), Error> {
    let mut wtr = csv::WriterBuilder::new().flexible(true).from_path(path)?;

    wtr.write_record(["Festival payout sheet"])?;
    wtr.write_record(HEADER)?;
    for (i, row) in rows.iter().enumerate() {
        let no = (i + 1).to_string();
        let mut line = vec![no.as_str(), "Food"];
        line.extend_from_slice(row);
        wtr.write_record(&line)?;
    }

    wtr.flush()?;
    Ok(())
}
