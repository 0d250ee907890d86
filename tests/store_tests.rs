mod common;
use common::row;
use flightlog::core::logic::SheetLogic;
use flightlog::core::migrate::{LEGACY_SCAFFOLD_ROWS, is_legacy_scaffold, migrate_legacy_rows};
use flightlog::core::store::{SheetStore, decode_rows, encode_rows};
use flightlog::db::migrate::applied_count;
use flightlog::db::pool::DbPool;
use flightlog::db::storage::{self, DUTY_KEY, META_KEY, ROWS_KEY};
use flightlog::errors::AppError;
use flightlog::models::field::RowField;
use flightlog::models::log_row::{FERRY_ID, LogRow};

fn ferry_like(label: &str, id: &str) -> LogRow {
    LogRow {
        id: id.into(),
        load: label.into(),
        remarks: "old ferry".into(),
        ..LogRow::default()
    }
}

#[test]
fn test_fresh_database_has_migrations_and_empty_sheet() {
    let pool = DbPool::in_memory().unwrap();
    assert_eq!(applied_count(&pool.conn).unwrap(), 2);

    let sheet = SheetLogic::snapshot(&pool);
    assert!(sheet.rows.is_empty());
    assert!(!sheet.is_closed());
    assert_eq!(sheet.meta.pilot, "");
}

#[test]
fn test_sheet_round_trip_keeps_ferry() {
    let mut pool = DbPool::in_memory().unwrap();

    SheetLogic::apply(&mut pool, |sheet| {
        sheet.add_ferry_row()?;
        sheet.add_load_row()?;
        sheet.update_field("1", RowField::Passengers, "0")?;
        sheet.update_field("FERRY", RowField::Remarks, "from base")?;
        sheet.meta.pilot = "J. Doe".into();
        sheet.set_duty(Some("07:00".into()), None);
        sheet.close();
        Ok(())
    })
    .unwrap();

    let sheet = SheetLogic::snapshot(&pool);
    let ferry = sheet.rows.ferry.as_ref().unwrap();
    assert_eq!(ferry.id, FERRY_ID);
    assert_eq!(ferry.remarks, "from base");
    assert_eq!(sheet.rows.loads.len(), 1);
    assert_eq!(sheet.rows.loads[0].passengers, Some(0));
    assert_eq!(sheet.rows.loads[0].landings, None);
    assert_eq!(sheet.meta.pilot, "J. Doe");
    assert!(sheet.is_closed());
    assert_eq!(sheet.duty.duty_start, "07:00");
}

#[test]
fn test_failed_operation_writes_nothing() {
    let mut pool = DbPool::in_memory().unwrap();
    SheetLogic::apply(&mut pool, |sheet| {
        sheet.add_load_row()?;
        sheet.update_field("1", RowField::Passengers, "3")
    })
    .unwrap();

    let res = SheetLogic::apply(&mut pool, |sheet| {
        sheet.add_load_row()?;
        sheet.update_field("1", RowField::Passengers, "many")
    });
    assert!(matches!(res, Err(AppError::InvalidCount(_))));

    let sheet = SheetLogic::snapshot(&pool);
    assert_eq!(sheet.rows.len(), 1);
    assert_eq!(sheet.rows.loads[0].passengers, Some(3));
}

#[test]
fn test_save_is_all_or_nothing() {
    let mut pool = DbPool::in_memory().unwrap();
    pool.conn
        .execute_batch(
            "CREATE TRIGGER reject_meta BEFORE INSERT ON storage
             WHEN NEW.key = 'flightlog.meta'
             BEGIN SELECT RAISE(ABORT, 'meta write rejected'); END;",
        )
        .unwrap();

    let res = SheetLogic::apply(&mut pool, |sheet| {
        sheet.add_load_row()?;
        Ok(())
    });
    assert!(matches!(res, Err(AppError::Db(_))));

    // the rows slot was written before the failure and must be rolled back
    assert_eq!(storage::get(&pool.conn, ROWS_KEY).unwrap(), None);
    assert!(SheetLogic::snapshot(&pool).rows.is_empty());
}

#[test]
fn test_unreadable_rows_blob_starts_empty_without_touching_header() {
    let mut pool = DbPool::in_memory().unwrap();
    SheetLogic::apply(&mut pool, |sheet| {
        sheet.meta.pilot = "J. Doe".into();
        sheet.add_load_row()?;
        Ok(())
    })
    .unwrap();

    storage::put(&pool.conn, ROWS_KEY, "{ not json").unwrap();

    let sheet = SheetStore::load(&pool.conn);
    assert!(sheet.rows.is_empty());
    assert_eq!(sheet.meta.pilot, "J. Doe");
}

#[test]
fn test_unreadable_meta_and_duty_fall_back_to_defaults() {
    let pool = DbPool::in_memory().unwrap();
    storage::put(&pool.conn, META_KEY, "[1,2,3]").unwrap();
    storage::put(&pool.conn, DUTY_KEY, "nonsense").unwrap();

    let sheet = SheetStore::load(&pool.conn);
    assert_eq!(sheet.meta, Default::default());
    assert_eq!(sheet.duty, Default::default());
}

#[test]
fn test_put_overwrites_slot() {
    let pool = DbPool::in_memory().unwrap();
    storage::put(&pool.conn, "k", "one").unwrap();
    storage::put(&pool.conn, "k", "two").unwrap();
    storage::put(&pool.conn, "k", "two").unwrap();
    assert_eq!(storage::get(&pool.conn, "k").unwrap().as_deref(), Some("two"));
    assert_eq!(storage::get(&pool.conn, "missing").unwrap(), None);
}

#[test]
fn test_encoded_rows_decode_to_same_set() {
    let mut sheet = flightlog::core::sheet::Sheet::new();
    sheet.add_ferry_row().unwrap();
    sheet.add_load_row().unwrap();
    sheet.update_field("1", RowField::Landings, "2").unwrap();

    let json = encode_rows(&sheet.rows).unwrap();
    assert!(json.contains("\"version\":2"));
    assert_eq!(decode_rows(&json).unwrap(), sheet.rows);
}

#[test]
fn test_legacy_blob_drops_ferry_rows() {
    let legacy = vec![
        ferry_like("FERRY", "ferry"),
        row("1"),
        ferry_like("FERRY", "abc123"),
        row("2"),
    ];
    let json = serde_json::to_string(&legacy).unwrap();

    let rows = decode_rows(&json).unwrap();
    assert!(rows.ferry.is_none());
    let labels: Vec<&str> = rows.iter().map(|r| r.load.as_str()).collect();
    assert_eq!(labels, vec!["1", "2"]);
}

#[test]
fn test_legacy_blob_with_string_and_null_counts() {
    let json = r#"[
        {"id":"a","load":"1","passengers":"4","landings":null},
        {"id":"b","load":"2","passengers":3,"landings":""}
    ]"#;

    let rows = decode_rows(json).unwrap();
    assert_eq!(rows.loads[0].passengers, Some(4));
    assert_eq!(rows.loads[0].landings, None);
    assert_eq!(rows.loads[1].passengers, Some(3));
    assert_eq!(rows.loads[1].landings, None);
}

#[test]
fn test_legacy_scaffold_is_discarded() {
    let scaffold: Vec<LogRow> = (1..=LEGACY_SCAFFOLD_ROWS).map(|n| row(&n.to_string())).collect();
    assert!(is_legacy_scaffold(&scaffold));
    assert!(migrate_legacy_rows(scaffold.clone()).is_empty());

    let mut touched = scaffold;
    touched[4].remarks = "used".into();
    assert!(!is_legacy_scaffold(&touched));
    assert_eq!(migrate_legacy_rows(touched).len(), LEGACY_SCAFFOLD_ROWS);
}

#[test]
fn test_legacy_blob_through_storage() {
    let pool = DbPool::in_memory().unwrap();
    let legacy = vec![ferry_like("FERRY", "ferry"), row("1")];
    storage::put(
        &pool.conn,
        ROWS_KEY,
        &serde_json::to_string(&legacy).unwrap(),
    )
    .unwrap();

    let sheet = SheetStore::load(&pool.conn);
    assert!(!sheet.rows.has_ferry());
    assert_eq!(sheet.rows.len(), 1);
}
