//! # Table Lifecycle Test Suite
//!
//! Covers table creation and removal, schema validation and the
//! database-level bookkeeping queries.
//!
//! ```sh
//! cargo test --test table_lifecycle
//! ```

use emberdb::{describe_error, Column, ColumnType, Database, StoreError, Value};

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn create_test_db() -> Database {
    Database::builder().heap_probe(|| 1usize << 30).open()
}

fn kind<T: std::fmt::Debug>(result: eyre::Result<T>) -> StoreError {
    StoreError::of(&result.unwrap_err()).expect("error should carry a StoreError")
}

fn device_columns() -> Vec<Column> {
    vec![
        Column::new("id", ColumnType::Int32),
        Column::new("mac", ColumnType::MacAddress),
        Column::new("name", ColumnType::String),
        Column::new("last_seen", ColumnType::Epoch),
        Column::new("online", ColumnType::Bool),
        Column::new("rssi", ColumnType::Float32),
    ]
}

// ============================================================================
// CREATE / DROP
// ============================================================================

mod create_drop_tests {
    use super::*;

    #[test]
    fn second_create_fails_until_drop() {
        let db = create_test_db();
        db.create_table(&device_columns()).unwrap();

        for cols in [device_columns(), vec![Column::new("x", ColumnType::Bool)]] {
            assert_eq!(kind(db.create_table(&cols)), StoreError::TableExists);
        }

        db.drop_table().unwrap();
        assert!(!db.has_table());
        db.create_table(&[Column::new("x", ColumnType::Bool)]).unwrap();
        assert_eq!(db.schema().unwrap().len(), 1);
    }

    #[test]
    fn operations_without_table_fail() {
        let db = create_test_db();
        assert_eq!(kind(db.drop_table()), StoreError::NoTable);
        assert_eq!(kind(db.insert(&[Value::Int32(1)], 0)), StoreError::NoTable);
        assert_eq!(kind(db.count()), StoreError::NoTable);
        assert_eq!(kind(db.select_all("id", 1)), StoreError::NoTable);
        assert_eq!(kind(db.min("id")), StoreError::NoTable);
        assert_eq!(kind(db.purge_expired()), StoreError::NoTable);
        assert_eq!(db.record_count(), 0);
        assert_eq!(db.memory_usage(), 0);
    }

    #[test]
    fn invalid_schemas_are_rejected() {
        let db = create_test_db();
        assert_eq!(kind(db.create_table(&[])), StoreError::InvalidValue);
        assert_eq!(
            kind(db.create_table(&[Column::new("n".repeat(32), ColumnType::Int32)])),
            StoreError::InvalidValue
        );
        assert_eq!(
            kind(db.create_table(&[Column::new("", ColumnType::Int32)])),
            StoreError::InvalidValue
        );
        assert!(!db.has_table());
    }

    #[test]
    fn drop_releases_records() {
        let db = create_test_db();
        db.create_table(&[Column::new("id", ColumnType::Int32)]).unwrap();
        for i in 0..25 {
            db.insert(&[Value::Int32(i)], 0).unwrap();
        }
        assert_eq!(db.record_count(), 25);
        db.drop_table().unwrap();
        assert_eq!(db.record_count(), 0);
    }
}

// ============================================================================
// BOOKKEEPING
// ============================================================================

mod bookkeeping_tests {
    use super::*;

    #[test]
    fn memory_usage_grows_with_records() {
        let db = create_test_db();
        db.create_table(&device_columns()).unwrap();
        let empty = db.memory_usage();
        assert!(empty > 0);

        for i in 0..20 {
            db.insert(
                &[
                    Value::Int32(i),
                    Value::MacAddress([0, 1, 2, 3, 4, i as u8]),
                    Value::text("sensor-node"),
                    Value::Epoch(1_700_000_000),
                    Value::Bool(true),
                    Value::Float32(-60.5),
                ],
                0,
            )
            .unwrap();
        }
        assert!(db.memory_usage() > empty);
    }

    #[test]
    fn describe_error_strings() {
        let db = create_test_db();
        assert_eq!(describe_error(&db.drop_table()), "No table exists");

        db.create_table(&[Column::new("id", ColumnType::Int32)]).unwrap();
        assert_eq!(describe_error(&db.insert(&[Value::Int32(1)], 0)), "OK");
        assert_eq!(
            describe_error(&db.insert(&[Value::Int32(1), Value::Int32(2)], 0)),
            "Column count mismatch"
        );
    }

    #[test]
    fn thread_safety_flag() {
        assert!(create_test_db().is_thread_safe());
    }
}
