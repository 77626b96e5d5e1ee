use super::{decode_row, Cell, SheetLayout};
use crate::domain::record::ParticipantRecord;
use crate::error::{PayoutError, Result};
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads records from a CSV file laid out like the payout workbook.
pub fn read_records(path: &Path, layout: &SheetLayout) -> Result<Vec<ParticipantRecord>> {
    let file = File::open(path)?;
    read_records_from(file, layout)
}

/// Reads records from any CSV source (e.g. an in-memory buffer).
pub fn read_records_from<R: Read>(source: R, layout: &SheetLayout) -> Result<Vec<ParticipantRecord>> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut records = Vec::new();
    let mut saw_header = false;

    for (row, line) in reader.into_records().enumerate() {
        let line = line.map_err(|e| PayoutError::SourceMalformed(e.to_string()))?;

        if row < layout.header_row {
            continue;
        }
        if row == layout.header_row {
            if line.len() < layout.end_column() {
                return Err(PayoutError::SourceMalformed(format!(
                    "header row has {} columns, at least {} are required",
                    line.len(),
                    layout.end_column()
                )));
            }
            debug!("header: {:?}", line);
            saw_header = true;
            continue;
        }

        let cells: Vec<Cell> = (layout.first_column..layout.end_column())
            .map(|col| match line.get(col) {
                None | Some("") => Cell::Empty,
                Some(s) => Cell::Text(s.to_string()),
            })
            .collect();

        if let Some(record) = decode_row(row, &cells)? {
            records.push(record);
        }
    }

    if !saw_header {
        return Err(PayoutError::SourceMalformed(format!(
            "no header row at line {}",
            layout.header_row + 1
        )));
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const SHEET: &str = "\
Festival payout,,,,,,,,,,,,
no,group,student_id,name,base,debt,shift,shopping,prep,leader,insta,chief,accountant
1,A,25B12345,Yamada Taro,1,,3,2,,1,,,
2,A,25012345.0,Sato Hanako,1,1,1.5,,2,,1,,
3,B,,,,,,,,,,,
4,B, 25c00007 ,Suzuki,0,0,0,0,0,0,0,2,0
";

    #[test]
    fn test_reader_valid_sheet() {
        let records = read_records_from(SHEET.as_bytes(), &SheetLayout::default()).unwrap();
        assert_eq!(records.len(), 3);

        let first = &records[0];
        assert_eq!(first.student_id.as_str(), "25B12345");
        assert_eq!(first.name, "Yamada Taro");
        assert_eq!(first.base_units, dec!(1));
        assert_eq!(first.debt_units, dec!(0));
        assert_eq!(first.shift_hours, dec!(3));
        assert_eq!(first.shopping_count, dec!(2));
        assert_eq!(first.leader, dec!(1));

        let second = &records[1];
        assert_eq!(second.student_id.as_str(), "25012345");
        assert_eq!(second.shift_hours, dec!(1.5));
        assert_eq!(second.prep_count, dec!(2));
        assert_eq!(second.insta, dec!(1));

        assert_eq!(records[2].student_id.as_str(), "25C00007");
        assert_eq!(records[2].chief, dec!(2));
    }

    #[test]
    fn test_short_data_rows_are_padded() {
        let data = "title\nh0,h1,h2,h3,h4,h5,h6,h7,h8,h9,h10,h11,h12\n1,A,25B1,Ito,1\n";
        let records = read_records_from(data.as_bytes(), &SheetLayout::default()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].base_units, dec!(1));
        assert_eq!(records[0].accountant, dec!(0));
    }

    #[test]
    fn test_read_records_from_file() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        std::io::Write::write_all(&mut file, SHEET.as_bytes()).unwrap();

        let records = read_records(file.path(), &SheetLayout::default()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].name, "Yamada Taro");
    }

    #[test]
    fn test_narrow_header_is_malformed() {
        let data = "title\nstudent_id,name\n25B1,Ito\n";
        let result = read_records_from(data.as_bytes(), &SheetLayout::default());
        assert!(matches!(result, Err(PayoutError::SourceMalformed(_))));
    }

    #[test]
    fn test_missing_header_is_malformed() {
        let data = "only a title row\n";
        let result = read_records_from(data.as_bytes(), &SheetLayout::default());
        assert!(matches!(result, Err(PayoutError::SourceMalformed(_))));
    }

    #[test]
    fn test_non_numeric_count_is_malformed() {
        let data = "t\nh0,h1,h2,h3,h4,h5,h6,h7,h8,h9,h10,h11,h12\n1,A,25B1,Ito,yes,,,,,,,,\n";
        let result = read_records_from(data.as_bytes(), &SheetLayout::default());
        assert!(matches!(result, Err(PayoutError::SourceMalformed(_))));
    }
}
