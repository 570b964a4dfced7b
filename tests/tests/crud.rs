use chrono::{DateTime, Utc};
use pretty_assertions::assert_eq;
use rowmap::{Fields, Mapper, Record, Value};
use std_util::prelude::*;
use tests::setup;

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct Student {
    #[sql("id,varchar(50),pk")]
    id: String,

    #[sql("name,text,not_null")]
    #[sqlindex("student_name")]
    name: String,

    #[sql("grade,integer")]
    grade: i32,

    #[sql("created_at,timestamp")]
    created_at: Option<DateTime<Utc>>,

    #[sql("updated_at,timestamp")]
    updated_at: Option<DateTime<Utc>>,
}

fn jack() -> Student {
    Student {
        id: "1234".into(),
        name: "Jack".into(),
        grade: 3,
        ..Student::default()
    }
}

#[tokio::test]
async fn insert_then_load() {
    let (mut exec, _log) = setup();
    let mapper = Mapper::new();

    assert_ok!(mapper.create_table::<Student, _>(&mut exec).await);

    let mut record = jack();
    assert_eq!(assert_ok!(mapper.insert(&mut exec, &mut record).await), 1);

    let created = assert_some!(record.created_at);
    assert_eq!(record.updated_at, Some(created));

    let mut loaded = Student {
        id: "1234".into(),
        ..Student::default()
    };
    assert_ok!(mapper.query_row(&mut exec, &mut loaded).await);

    assert_eq!(loaded, record);
}

#[tokio::test]
async fn update_refreshes_updated_at_only() {
    let (mut exec, log) = setup();
    let mapper = Mapper::new();

    assert_ok!(mapper.create_table::<Student, _>(&mut exec).await);

    let mut record = jack();
    assert_ok!(mapper.insert(&mut exec, &mut record).await);
    let created = assert_some!(record.created_at);

    record.name = "John".into();
    record.grade = 4;
    log.clear();
    assert_eq!(assert_ok!(mapper.update(&mut exec, &mut record).await), 1);

    let update = log.pop();
    assert_eq!(
        update.sql,
        "UPDATE student SET name = ?, grade = ?, created_at = ?, updated_at = ? WHERE id = ?"
    );
    assert_eq!(update.params[2], Value::DateTime(created));

    let updated = assert_some!(record.updated_at);
    assert!(updated >= created);

    let mut loaded = Student {
        id: "1234".into(),
        ..Student::default()
    };
    assert_ok!(mapper.query_row(&mut exec, &mut loaded).await);
    assert_eq!(loaded.name, "John");
    assert_eq!(loaded.grade, 4);
    assert_eq!(loaded.created_at, Some(created));
    assert_eq!(loaded.updated_at, Some(updated));
}

#[tokio::test]
async fn partial_update_leaves_other_columns() {
    let (mut exec, log) = setup();
    let mapper = Mapper::new();

    assert_ok!(mapper.create_table::<Student, _>(&mut exec).await);

    let mut record = jack();
    assert_ok!(mapper.insert(&mut exec, &mut record).await);

    // The in-memory value is not what gets written for a partial update.
    record.grade = 9;
    log.clear();
    let overlay = [Fields::new().set("name", "John")];
    assert_ok!(mapper.update_with(&mut exec, &mut record, &overlay).await);

    assert_eq!(
        log.statements(),
        ["UPDATE student SET name = ?, updated_at = ? WHERE id = ?"]
    );

    let mut loaded = Student {
        id: "1234".into(),
        ..Student::default()
    };
    assert_ok!(mapper.query_row(&mut exec, &mut loaded).await);
    assert_eq!(loaded.name, "John");
    assert_eq!(loaded.grade, 3);
    assert_eq!(loaded.updated_at, record.updated_at);
}

#[tokio::test]
async fn delete_then_load_is_not_found() {
    let (mut exec, _log) = setup();
    let mapper = Mapper::new();

    assert_ok!(mapper.create_table::<Student, _>(&mut exec).await);

    let mut record = jack();
    assert_ok!(mapper.insert(&mut exec, &mut record).await);
    assert_eq!(assert_ok!(mapper.delete(&mut exec, &mut record).await), 1);

    assert_err_is!(
        mapper.query_row(&mut exec, &mut record).await,
        is_record_not_found
    );

    // Deleting again affects nothing but is not an error.
    assert_eq!(assert_ok!(mapper.delete(&mut exec, &mut record).await), 0);
}

#[tokio::test]
async fn duplicate_key_is_a_driver_failure() {
    let (mut exec, _log) = setup();
    let mapper = Mapper::new();

    assert_ok!(mapper.create_table::<Student, _>(&mut exec).await);
    assert_ok!(mapper.insert(&mut exec, &mut jack()).await);

    assert_err_is!(
        mapper.insert(&mut exec, &mut jack()).await,
        is_driver_operation_failed
    );
}
