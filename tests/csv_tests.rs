use flightlog::core::aggregate::totals;
use flightlog::core::sequencing::next_load_number;
use flightlog::core::sheet::Sheet;
use flightlog::errors::AppError;
use flightlog::export::csv_format::{read_csv, write_csv};
use flightlog::models::field::RowField;
use flightlog::models::log_row::FERRY_ID;

const HEADER: &str = "Load,T/O,L/D,FLT/T,BLK/T,FOB,F/B,PAX,LDG,F/UP,REMARKS";

fn sample_sheet() -> Sheet {
    let mut sheet = Sheet::new();
    sheet.add_load_row().unwrap();
    sheet.add_load_row().unwrap();
    sheet.add_ferry_row().unwrap();
    for (load, field, value) in [
        ("FERRY", RowField::Takeoff, "07:00"),
        ("FERRY", RowField::Landing, "07:40"),
        ("1", RowField::Takeoff, "10:10"),
        ("1", RowField::Landing, "11:40"),
        ("1", RowField::Passengers, "4"),
        ("1", RowField::Landings, "0"),
        ("2", RowField::Remarks, "wind hold"),
    ] {
        sheet.update_field(load, field, value).unwrap();
    }
    sheet
}

fn to_csv(sheet: &Sheet) -> String {
    let mut buf = Vec::new();
    write_csv(&mut buf, &sheet.rows).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_write_csv_layout() {
    let text = to_csv(&sample_sheet());
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], HEADER);
    assert_eq!(lines[1], "FERRY,07:00,07:40,00:40,,,,,,,");
    assert_eq!(lines[2], "1,10:10,11:40,01:30,,,,4,0,,");
    assert_eq!(lines[3], "2,,,,,,,,,,wind hold");
    assert_eq!(lines.len(), 4);
    assert!(!text.contains('\r'));
}

#[test]
fn test_write_csv_header_only_when_empty() {
    let text = to_csv(&Sheet::new());
    assert_eq!(text, format!("{HEADER}\n"));
}

#[test]
fn test_csv_round_trip_restores_rows() {
    let sheet = sample_sheet();
    let rows = read_csv(to_csv(&sheet).as_bytes()).unwrap();

    assert_eq!(rows.len(), 3);
    let ferry = rows.ferry.as_ref().unwrap();
    assert_eq!(ferry.id, FERRY_ID);
    assert_eq!(ferry.flight_time, "00:40");

    let one = rows.find("1").unwrap();
    assert_eq!(one.passengers, Some(4));
    assert_eq!(one.landings, Some(0));
    assert_eq!(rows.find("2").unwrap().passengers, None);
    assert_eq!(rows.find("2").unwrap().remarks, "wind hold");

    // imported rows get new identifiers
    assert_ne!(one.id, sheet.rows.find("1").unwrap().id);
}

#[test]
fn test_read_csv_rejects_wrong_header() {
    let input = "Load,Takeoff,L/D,FLT/T,BLK/T,FOB,F/B,PAX,LDG,F/UP,REMARKS\n1,,,,,,,,,,\n";
    let err = read_csv(input.as_bytes()).unwrap_err();
    assert!(matches!(err, AppError::CsvHeader(m) if m.contains("column 2")));

    let short = "Load,T/O,L/D\n";
    assert!(matches!(
        read_csv(short.as_bytes()).unwrap_err(),
        AppError::CsvHeader(_)
    ));
}

#[test]
fn test_read_csv_rejects_empty_file() {
    assert!(matches!(
        read_csv("".as_bytes()).unwrap_err(),
        AppError::CsvHeader(_)
    ));
}

#[test]
fn test_read_csv_header_is_case_sensitive() {
    let input = HEADER.to_lowercase() + "\n";
    assert!(read_csv(input.as_bytes()).is_err());
}

#[test]
fn test_read_csv_rejects_extra_header_column() {
    let input = format!("{HEADER},EXTRA\n1,,,,,,,,,,,junk\n");
    let err = read_csv(input.as_bytes()).unwrap_err();
    assert!(matches!(err, AppError::CsvHeader(m) if m.contains("12 columns")));
}

#[test]
fn test_imported_huge_load_label_keeps_numbering_usable() {
    let input = format!("{HEADER}\n9223372036854775807,,,,,,,,,,\n2,,,,,,,,,,\n");
    let rows = read_csv(input.as_bytes()).unwrap();
    assert_eq!(next_load_number(&rows), 3);
}

#[test]
fn test_imported_max_counts_total_without_overflow() {
    let input = format!("{HEADER}\n1,,,,,,,4294967295,,,\n2,,,,,,,1,,,\n");
    let rows = read_csv(input.as_bytes()).unwrap();
    assert_eq!(totals(rows.iter()).pax, 4_294_967_296);
}

#[test]
fn test_read_csv_short_lines_fill_blanks() {
    let input = format!("{HEADER}\n5,09:00\n");
    let rows = read_csv(input.as_bytes()).unwrap();
    let r = rows.find("5").unwrap();
    assert_eq!(r.takeoff, "09:00");
    assert_eq!(r.landing, "");
    assert_eq!(r.remarks, "");
}

#[test]
fn test_read_csv_two_ferry_rows() {
    let input = format!("{HEADER}\nFERRY,,,,,,,,,,\n1,,,,,,,,,,\nFERRY,,,,,,,,,,\n");
    assert!(matches!(
        read_csv(input.as_bytes()).unwrap_err(),
        AppError::DuplicateFerry
    ));
}

#[test]
fn test_read_csv_bad_count_names_line() {
    let input = format!("{HEADER}\n1,,,,,,,4,,,\n2,,,,,,,lots,,,\n");
    let err = read_csv(input.as_bytes()).unwrap_err();
    assert!(matches!(err, AppError::CsvRow { line: 3, .. }));
}

#[test]
fn test_read_csv_keeps_imported_flight_time() {
    let input = format!("{HEADER}\n1,10:00,10:30,09:99,,,,,,,\n");
    let rows = read_csv(input.as_bytes()).unwrap();
    assert_eq!(rows.find("1").unwrap().flight_time, "09:99");
}
