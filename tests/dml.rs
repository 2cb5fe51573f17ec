//! # Insert, Update, Delete and Query Test Suite
//!
//! Exercises the data operations end to end through `Database`.
//!
//! ```sh
//! cargo test --test dml
//! ```

use emberdb::{
    Column, ColumnType, CompareOp, Database, FieldValue, Filter, MathOp, StoreError, Value,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn create_test_db() -> Database {
    Database::builder().heap_probe(|| 1usize << 30).open()
}

fn kind<T: std::fmt::Debug>(result: eyre::Result<T>) -> StoreError {
    StoreError::of(&result.unwrap_err()).expect("error should carry a StoreError")
}

fn values_db(values: &[i32]) -> Database {
    let db = create_test_db();
    db.create_table(&[
        Column::new("id", ColumnType::Int32),
        Column::new("value", ColumnType::Int32),
    ])
    .unwrap();
    for (i, v) in values.iter().enumerate() {
        db.insert(&[Value::Int32(i as i32), Value::Int32(*v)], 0)
            .unwrap();
    }
    db
}

fn ids(db: &Database) -> Vec<i32> {
    db.top(usize::MAX)
        .unwrap()
        .iter()
        .map(|row| row.get_int32(0).unwrap())
        .collect()
}

// ============================================================================
// INSERT
// ============================================================================

mod insert_tests {
    use super::*;

    #[test]
    fn insert_validates_values() {
        let db = values_db(&[]);
        assert_eq!(
            kind(db.insert(&[Value::Int32(1)], 0)),
            StoreError::ColumnCountMismatch
        );
        assert_eq!(
            kind(db.insert(&[Value::Int32(1), Value::Null], 0)),
            StoreError::InvalidValue
        );
        assert_eq!(
            kind(db.insert(&[Value::Int32(1), Value::text("7")], 0)),
            StoreError::InvalidType
        );
        assert_eq!(db.count().unwrap(), 0);
    }

    #[test]
    fn insert_rejects_ttl_over_thirty_days() {
        let db = values_db(&[]);
        let month = emberdb::config::MAX_TTL_MS;
        assert_eq!(
            kind(db.insert(&[Value::Int32(1), Value::Int32(1)], month + 1)),
            StoreError::InvalidValue
        );
        assert_eq!(db.record_count(), 0);
    }

    #[test]
    fn growth_keeps_order() {
        let values: Vec<i32> = (0..100).collect();
        let db = values_db(&values);
        assert_eq!(db.count().unwrap(), 100);
        assert_eq!(ids(&db), values);
    }

    #[test]
    fn long_strings_are_truncated() {
        let db = create_test_db();
        db.create_table(&[Column::new("s", ColumnType::String)]).unwrap();
        db.insert(&[Value::text(&"q".repeat(400))], 0).unwrap();

        let rows = db.top(1).unwrap();
        assert_eq!(rows[0].get_text(0).unwrap().len(), 255);
    }

    #[test]
    fn heap_limit_blocks_insert_without_side_effects() {
        let free = Arc::new(AtomicUsize::new(100_000));
        let probe = Arc::clone(&free);
        let db = Database::builder()
            .heap_probe(move || probe.load(Ordering::SeqCst))
            .min_free_heap(30_000)
            .open();
        db.create_table(&[Column::new("id", ColumnType::Int32)]).unwrap();
        db.insert(&[Value::Int32(1)], 0).unwrap();

        free.store(30_000, Ordering::SeqCst);
        assert_eq!(kind(db.insert(&[Value::Int32(2)], 0)), StoreError::HeapLimit);
        assert_eq!(db.record_count(), 1);

        free.store(30_001, Ordering::SeqCst);
        db.insert(&[Value::Int32(2)], 0).unwrap();
        assert_eq!(db.record_count(), 2);
    }
}

// ============================================================================
// UPDATE
// ============================================================================

mod update_tests {
    use super::*;

    #[test]
    fn math_scenario() {
        let db = values_db(&[5, 2, 9]);
        assert_eq!(db.min("value").unwrap(), FieldValue::Int32(2));
        assert_eq!(db.max("value").unwrap(), FieldValue::Int32(9));

        assert_eq!(
            db.update_with_math("value", 2, "value", MathOp::Add, 10)
                .unwrap(),
            1
        );
        assert_eq!(
            db.select_one("id", "value", 12).unwrap(),
            FieldValue::Int32(1)
        );
    }

    #[test]
    fn divide_by_zero_mutates_nothing() {
        let db = values_db(&[4, 4, 4]);
        for op in [MathOp::Divide, MathOp::Modulo] {
            assert_eq!(
                kind(db.update_with_math("value", 4, "value", op, 0)),
                StoreError::InvalidOperation
            );
        }
        assert_eq!(db.count_where("value", 4).unwrap(), 3);
    }

    #[test]
    fn update_same_column_tests_old_value() {
        // rows holding 1 become 2; the row already holding 2 is untouched
        let db = values_db(&[1, 2, 1]);
        assert_eq!(db.update("value", 1, "value", 2).unwrap(), 2);
        assert_eq!(db.count_where("value", 2).unwrap(), 3);
        assert_eq!(kind(db.update("value", 1, "value", 2)), StoreError::NoRecords);
    }

    #[test]
    fn update_errors() {
        let db = values_db(&[1]);
        assert_eq!(kind(db.update("nope", 1, "value", 2)), StoreError::ColumnNotFound);
        assert_eq!(kind(db.update("id", 0, "nope", 2)), StoreError::ColumnNotFound);
        assert_eq!(
            kind(db.update("id", 0, "value", Value::Null)),
            StoreError::InvalidValue
        );
        assert_eq!(kind(db.update("id", 9, "value", 2)), StoreError::NoRecords);
    }

    #[test]
    fn update_string_column() {
        let db = create_test_db();
        db.create_table(&[
            Column::new("mac", ColumnType::MacAddress),
            Column::new("name", ColumnType::String),
        ])
        .unwrap();
        let mac = emberdb::parse_mac_address("aa:bb:cc:dd:ee:ff").unwrap();
        db.insert(&[Value::MacAddress(mac), Value::text("old")], 0)
            .unwrap();

        db.update("mac", mac, "name", "new").unwrap();
        let name = db.select_one("name", "mac", mac).unwrap();
        assert_eq!(name.as_text(), Some("new"));
    }

    #[test]
    fn math_rejects_non_numeric_column() {
        let db = create_test_db();
        db.create_table(&[
            Column::new("id", ColumnType::Int32),
            Column::new("on", ColumnType::Bool),
        ])
        .unwrap();
        db.insert(&[Value::Int32(1), Value::Bool(true)], 0).unwrap();
        assert_eq!(
            kind(db.update_with_math("id", 1, "on", MathOp::Add, 1)),
            StoreError::InvalidType
        );
    }
}

// ============================================================================
// DELETE
// ============================================================================

mod delete_tests {
    use super::*;

    #[test]
    fn delete_preserves_relative_order() {
        let db = values_db(&[10, 11, 12, 13, 14, 15]);
        assert_eq!(db.delete("id", 3).unwrap(), 1);
        assert_eq!(ids(&db), vec![0, 1, 2, 4, 5]);
        assert_eq!(db.record_count(), 5);
    }

    #[test]
    fn delete_all_matches() {
        let db = values_db(&[7, 8, 7, 7]);
        assert_eq!(db.delete("value", 7).unwrap(), 3);
        assert_eq!(ids(&db), vec![1]);
        assert_eq!(kind(db.delete("value", 7)), StoreError::NoRecords);
    }

    #[test]
    fn delete_with_operator_filter() {
        let db = values_db(&[1, 5, 9, 3]);
        let removed = db
            .delete_filtered(&Filter::new("value", CompareOp::GreaterEqual, 5))
            .unwrap();
        assert_eq!(removed, 2);
        assert_eq!(ids(&db), vec![0, 3]);
    }
}

// ============================================================================
// QUERIES
// ============================================================================

mod query_tests {
    use super::*;

    #[test]
    fn select_all_returns_full_rows() {
        let db = values_db(&[3, 4, 3]);
        let rows = db.select_all("value", 3).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].values, vec![FieldValue::Int32(0), FieldValue::Int32(3)]);
        assert_eq!(rows[1].get_int32(0).unwrap(), 2);
        assert_eq!(kind(db.select_all("value", 99)), StoreError::NoRecords);
    }

    #[test]
    fn ordering_on_equality_only_types_is_rejected() {
        let db = create_test_db();
        db.create_table(&[Column::new("name", ColumnType::String)]).unwrap();
        db.insert(&[Value::text("a")], 0).unwrap();

        let f = Filter::new("name", CompareOp::Greater, "a");
        assert_eq!(kind(db.count_filtered(&f)), StoreError::InvalidOperation);
        assert_eq!(kind(db.select_all_filtered(&f)), StoreError::InvalidOperation);
    }

    #[test]
    fn filtered_queries() {
        let db = values_db(&[1, 5, 9, 3]);
        let f = Filter::new("value", CompareOp::Less, 5);
        assert_eq!(db.count_filtered(&f).unwrap(), 2);
        let rows = db.select_all_filtered(&f).unwrap();
        let values: Vec<i32> = rows.iter().map(|r| r.get_int32(1).unwrap()).collect();
        assert_eq!(values, vec![1, 3]);
    }

    #[test]
    fn top_is_insertion_order_not_largest() {
        let db = values_db(&[1, 100, 50]);
        let rows = db.top(2).unwrap();
        let values: Vec<i32> = rows.iter().map(|r| r.get_int32(1).unwrap()).collect();
        assert_eq!(values, vec![1, 100]);
    }

    #[test]
    fn min_max_edge_cases() {
        let db = values_db(&[]);
        assert_eq!(kind(db.min("value")), StoreError::NoRecords);
        assert_eq!(kind(db.top(3)), StoreError::NoRecords);

        let db = create_test_db();
        db.create_table(&[Column::new("t", ColumnType::Float32)]).unwrap();
        for v in [1.5f32, -2.25, 8.0] {
            db.insert(&[Value::Float32(v)], 0).unwrap();
        }
        assert_eq!(db.min("t").unwrap(), FieldValue::Float32(-2.25));
        assert_eq!(db.max("t").unwrap(), FieldValue::Float32(8.0));
    }

    #[test]
    fn select_one_missing_column() {
        let db = values_db(&[1]);
        assert_eq!(
            kind(db.select_one("nope", "id", 0)),
            StoreError::ColumnNotFound
        );
    }
}
