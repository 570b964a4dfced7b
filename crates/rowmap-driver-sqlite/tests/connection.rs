use rowmap_core::{driver::Executor, Value};
use rowmap_driver_sqlite::{Connection, Sqlite};
use std::path::PathBuf;

async fn people() -> Connection {
    let mut conn = Sqlite::in_memory().connect().unwrap();
    conn.execute(
        "CREATE TABLE people (id INTEGER PRIMARY KEY, name TEXT, active INTEGER)",
        &[],
    )
    .await
    .unwrap();
    conn
}

#[test]
fn parses_connection_urls() {
    assert_eq!(Sqlite::new("sqlite::memory:").unwrap(), Sqlite::InMemory);
    assert_eq!(
        Sqlite::new("sqlite:///tmp/rowmap.db").unwrap(),
        Sqlite::File(PathBuf::from("/tmp/rowmap.db"))
    );

    let err = Sqlite::new("postgres://localhost/db").unwrap_err();
    assert!(err.is_invalid_connection_url());

    let err = Sqlite::new("not a url").unwrap_err();
    assert!(err.is_driver_operation_failed());
}

#[tokio::test]
async fn execute_reports_affected_rows() {
    let mut conn = people().await;

    let count = conn
        .execute(
            "INSERT INTO people (id, name, active) VALUES (?, ?, ?)",
            &[Value::I64(1), Value::from("Ada"), Value::Bool(true)],
        )
        .await
        .unwrap();
    assert_eq!(count, 1);

    let count = conn
        .execute("DELETE FROM people WHERE id = ?", &[Value::I64(2)])
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn query_one_returns_named_columns() {
    let mut conn = people().await;
    conn.execute(
        "INSERT INTO people (id, name, active) VALUES (?, ?, ?)",
        &[Value::I64(7), Value::from("Grace"), Value::Bool(false)],
    )
    .await
    .unwrap();

    let row = conn
        .query_one("SELECT * FROM people WHERE id = ?", &[Value::I64(7)])
        .await
        .unwrap()
        .unwrap();

    assert_eq!(row.get("name"), Some(&Value::from("Grace")));
    assert_eq!(row.get("active"), Some(&Value::I64(0)));

    let missing = conn
        .query_one("SELECT * FROM people WHERE id = ?", &[Value::I64(8)])
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn query_many_returns_every_row() {
    let mut conn = people().await;
    for (id, name) in [(1, "a"), (2, "b"), (3, "c")] {
        conn.execute(
            "INSERT INTO people (id, name) VALUES (?, ?)",
            &[Value::I64(id), Value::from(name)],
        )
        .await
        .unwrap();
    }

    let rows = conn
        .query_many("SELECT id, name FROM people ORDER BY id", &[])
        .await
        .unwrap();
    assert_eq!(rows.column_names(), ["id", "name"]);

    let names: Vec<_> = rows.map(|row| row.values()[1].clone()).collect();
    assert_eq!(names, [Value::from("a"), Value::from("b"), Value::from("c")]);
}

#[tokio::test]
async fn sql_errors_surface_as_driver_failures() {
    let mut conn = people().await;
    let err = conn.execute("INSERT INTO nowhere VALUES (1)", &[]).await.unwrap_err();
    assert!(err.is_driver_operation_failed());
}

#[tokio::test]
async fn undecodable_text_is_returned_as_bytes() {
    let mut conn = people().await;

    let row = conn
        .query_one("SELECT CAST(x'636166e9' AS TEXT) AS word", &[])
        .await
        .unwrap()
        .unwrap();

    assert_eq!(row.get("word"), Some(&Value::Bytes(b"caf\xe9".to_vec())));
}
