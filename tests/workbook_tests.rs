use rust_decimal_macros::dec;
use staffpay::application::lookup::Statement;
use staffpay::domain::money::Yen;
use staffpay::domain::rates::RateTable;
use staffpay::domain::record::ParticipantRecord;
use staffpay::error::PayoutError;
use staffpay::interfaces::sheet::{load_records, SheetLayout};
use std::path::PathBuf;

fn workbook() -> PathBuf {
    PathBuf::from("tests/fixtures/participants.xlsx")
}

fn load(sheet: Option<&str>) -> Result<Vec<ParticipantRecord>, PayoutError> {
    load_records(&workbook(), &SheetLayout::default(), sheet)
}

fn total_of(record: &ParticipantRecord) -> Yen {
    Statement::for_record(record.clone(), &RateTable::default())
        .breakdown
        .total
}

#[test]
fn test_first_sheet_is_read_by_default() {
    let records = load(None).unwrap();

    // The title row and the header are skipped, and so is the row without an id.
    let ids: Vec<&str> = records.iter().map(|r| r.student_id.as_str()).collect();
    assert_eq!(ids, vec!["25B12345", "25B20001", "25012345"]);

    let yamada = &records[0];
    assert_eq!(yamada.name, "Yamada Taro");
    assert_eq!(yamada.shift_hours, dec!(3));
    assert_eq!(yamada.shopping_count, dec!(2));
    assert_eq!(yamada.leader, dec!(1));
    assert_eq!(total_of(yamada), Yen::new(dec!(7700)));

    let sato = &records[1];
    assert_eq!(sato.shift_hours, dec!(4.5));
    assert_eq!(total_of(sato), Yen::new(dec!(8400)));
}

#[test]
fn test_numeric_id_cell_loses_its_fraction() {
    let records = load(None).unwrap();
    let suzuki = &records[2];
    assert_eq!(suzuki.student_id.as_str(), "25012345");
    assert_eq!(suzuki.name, "Suzuki Ichiro");
    assert_eq!(suzuki.chief, dec!(2));
    assert_eq!(total_of(suzuki), Yen::new(dec!(3100)));
}

#[test]
fn test_sheet_picked_by_name_with_absolute_positions() {
    // This sheet's used range starts at C2; ids still sit in column C.
    let records = load(Some("Annex")).unwrap();
    assert_eq!(records.len(), 1);

    let tanaka = &records[0];
    assert_eq!(tanaka.student_id.as_str(), "25B30003");
    assert_eq!(tanaka.name, "Tanaka Jiro");
    assert_eq!(tanaka.shift_hours, dec!(1.5));
    assert_eq!(tanaka.shopping_count, dec!(1));
    assert_eq!(tanaka.chief, dec!(1));
    assert_eq!(total_of(tanaka), Yen::new(dec!(3500)));
}

#[test]
fn test_narrow_sheet_is_malformed() {
    match load(Some("Narrow")) {
        Err(PayoutError::SourceMalformed(msg)) => assert!(msg.contains("columns")),
        other => panic!("expected SourceMalformed, got {:?}", other),
    }
}

#[test]
fn test_empty_sheet_is_malformed() {
    match load(Some("Blank")) {
        Err(PayoutError::SourceMalformed(msg)) => assert!(msg.contains("empty")),
        other => panic!("expected SourceMalformed, got {:?}", other),
    }
}

#[test]
fn test_unknown_sheet_is_malformed() {
    match load(Some("Missing")) {
        Err(PayoutError::SourceMalformed(msg)) => assert!(msg.contains("\"Missing\" not found")),
        other => panic!("expected SourceMalformed, got {:?}", other),
    }
}
