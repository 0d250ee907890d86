mod common;
use common::row;
use flightlog::core::aggregate::{ending_fuel, filter_rows, matches_query, seed_start_fuel, totals};
use flightlog::core::sequencing::{create_ferry_row, update_field};
use flightlog::models::field::RowField;
use flightlog::models::log_row::LogRow;
use flightlog::models::row_set::RowSet;

fn timed(load: &str, takeoff: &str, landing: &str, pax: &str, ldg: &str) -> LogRow {
    let mut r = row(load);
    update_field(&mut r, RowField::Takeoff, takeoff).unwrap();
    update_field(&mut r, RowField::Landing, landing).unwrap();
    update_field(&mut r, RowField::Passengers, pax).unwrap();
    update_field(&mut r, RowField::Landings, ldg).unwrap();
    r
}

fn sample() -> RowSet {
    let mut ferry = create_ferry_row("1500");
    update_field(&mut ferry, RowField::Takeoff, "07:00").unwrap();
    update_field(&mut ferry, RowField::Landing, "07:40").unwrap();
    update_field(&mut ferry, RowField::Remarks, "from base").unwrap();

    let mut second = timed("2", "11:00", "11:20", "", "1");
    update_field(&mut second, RowField::Remarks, "Tandem").unwrap();

    RowSet {
        ferry: Some(ferry),
        loads: vec![
            timed("1", "10:10", "11:40", "4", "1"),
            second,
            timed("3", "", "", "14", ""),
        ],
    }
}

#[test]
fn test_totals_over_all_rows() {
    let rows = sample();
    let t = totals(rows.iter());

    assert_eq!(t.flights, 4);
    assert_eq!(t.pax, 18);
    assert_eq!(t.ldg, 2);
    // 00:40 + 01:30 + 00:20
    assert_eq!(t.flight_time, "02:30");
}

#[test]
fn test_totals_empty() {
    let t = totals(RowSet::new().iter());
    assert_eq!(t.flights, 0);
    assert_eq!(t.pax, 0);
    assert_eq!(t.ldg, 0);
    assert_eq!(t.flight_time, "00:00");
}

#[test]
fn test_totals_follow_the_filter() {
    let rows = sample();

    let tandem = filter_rows(&rows, "tandem");
    assert_eq!(tandem.len(), 1);
    let t = totals(tandem);
    assert_eq!(t.flights, 1);
    assert_eq!(t.pax, 0);
    assert_eq!(t.ldg, 1);
    assert_eq!(t.flight_time, "00:20");

    let ferry = filter_rows(&rows, "FERRY");
    let t = totals(ferry);
    assert_eq!(t.flights, 1);
    assert_eq!(t.flight_time, "00:40");

    let none = filter_rows(&rows, "nothing like this");
    assert_eq!(totals(none).flights, 0);

    let all = filter_rows(&rows, "");
    assert_eq!(totals(all).flights, 4);
}

#[test]
fn test_filter_matches_any_column_case_insensitively() {
    let rows = sample();
    let r = rows.find("1").unwrap();
    assert!(matches_query(r, "11:40"));
    assert!(matches_query(r, "01:30"));
    assert!(!matches_query(r, "tandem"));
    assert!(matches_query(rows.find("2").unwrap(), "TAND"));
    // counts are searched as text
    assert!(matches_query(rows.find("3").unwrap(), "14"));
}

#[test]
fn test_filter_does_not_touch_storage() {
    let rows = sample();
    let before = rows.clone();
    let _ = filter_rows(&rows, "tandem");
    assert_eq!(rows, before);
}

#[test]
fn test_seed_start_fuel_targets_first_load() {
    let mut rows = sample();
    rows.loads[0].fuel_on_board.clear();

    assert!(seed_start_fuel(&mut rows, "1300"));
    assert_eq!(rows.loads[0].fuel_on_board, "1300");
    assert_eq!(rows.loads[1].fuel_on_board, "");
    // ferry keeps its own value
    assert_eq!(rows.ferry.as_ref().unwrap().fuel_on_board, "1500");
}

#[test]
fn test_seed_start_fuel_never_overwrites() {
    let mut rows = sample();
    rows.loads[0].fuel_on_board.clear();

    seed_start_fuel(&mut rows, "1300");
    assert!(!seed_start_fuel(&mut rows, "1400"));
    assert_eq!(rows.loads[0].fuel_on_board, "1300");
}

#[test]
fn test_seed_start_fuel_falls_back_to_ferry() {
    let mut rows = RowSet {
        ferry: Some(create_ferry_row("")),
        loads: vec![],
    };
    assert!(seed_start_fuel(&mut rows, "800"));
    assert_eq!(rows.ferry.as_ref().unwrap().fuel_on_board, "800");
}

#[test]
fn test_seed_start_fuel_noop_cases() {
    let mut empty = RowSet::new();
    assert!(!seed_start_fuel(&mut empty, "800"));

    let mut rows = RowSet {
        ferry: None,
        loads: vec![row("1")],
    };
    assert!(!seed_start_fuel(&mut rows, ""));
    assert_eq!(rows.loads[0].fuel_on_board, "");
}

#[test]
fn test_ending_fuel_reads_last_load_row() {
    let mut rows = sample();
    assert_eq!(ending_fuel(&rows), "");

    rows.loads[2].fuel_on_board = "950".into();
    assert_eq!(ending_fuel(&rows), "950");

    rows.loads[1].fuel_on_board = "1020".into();
    assert_eq!(ending_fuel(&rows), "950");
}

#[test]
fn test_ending_fuel_ignores_ferry() {
    let rows = RowSet {
        ferry: Some(create_ferry_row("1500")),
        loads: vec![],
    };
    assert_eq!(ending_fuel(&rows), "");
}

#[test]
fn test_totals_with_counts_at_the_limit() {
    let rows = RowSet {
        ferry: None,
        loads: vec![
            timed("1", "", "", "4294967295", "4294967295"),
            timed("2", "", "", "1", "2"),
        ],
    };

    let t = totals(rows.iter());
    assert_eq!(t.pax, 4_294_967_296);
    assert_eq!(t.ldg, 4_294_967_297);
}
