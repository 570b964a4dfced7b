use pretty_assertions::assert_eq;
use rowmap::{driver::Executor, Mapper, Record, Value};
use std_util::prelude::*;
use tests::setup;

#[derive(Debug, Default, Record)]
#[table = "authors"]
struct Author {
    #[sql("id,integer,pk")]
    id: i64,

    #[sql("name,text,not_null,unique")]
    name: String,
}

#[derive(Debug, Default, Record)]
#[table = "posts"]
struct Post {
    #[sql("id,integer,pk")]
    id: i64,

    #[sql("author_id,integer,not_null")]
    #[sqlindex("posts_author")]
    #[sqlforeignkey("authors(id)")]
    author_id: i64,

    #[sql("slug,text")]
    #[sqlindex("posts_slug:posts_lookup")]
    slug: String,

    #[sql("lang,text")]
    #[sqlindex("posts_slug:posts_lookup")]
    lang: String,
}

async fn names(exec: &mut impl Executor, kind: &str) -> Vec<String> {
    let rows = assert_ok!(
        exec.query_many(
            "SELECT name FROM sqlite_master WHERE type = ? AND name NOT LIKE 'sqlite_%' ORDER BY name",
            &[Value::from(kind)],
        )
        .await
    );

    rows.map(|row| row.values()[0].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn creates_tables_and_indexes() {
    let (mut exec, log) = setup();
    let mapper = Mapper::new();

    assert_ok!(mapper.create_table::<Author, _>(&mut exec).await);
    assert_ok!(mapper.create_table::<Post, _>(&mut exec).await);

    assert_eq!(
        log.statements()[1..],
        [
            "CREATE TABLE IF NOT EXISTS posts (\n \
             id integer,\n \
             author_id integer NOT NULL,\n \
             slug text,\n \
             lang text,\n \
             CONSTRAINT posts_pk PRIMARY KEY(id),\n \
             FOREIGN KEY (author_id) REFERENCES authors(id)\n\
             )",
            "CREATE INDEX posts_author ON posts (author_id)",
            "CREATE INDEX posts_lookup ON posts (slug, lang)",
        ]
    );

    assert_eq!(names(&mut exec, "table").await, ["authors", "posts"]);
    assert_eq!(names(&mut exec, "index").await, ["posts_author", "posts_lookup"]);
}

#[tokio::test]
async fn create_table_is_idempotent_for_tables() {
    let (mut exec, _log) = setup();
    let mapper = Mapper::new();

    assert_ok!(mapper.create_table::<Author, _>(&mut exec).await);
    assert_ok!(mapper.create_table::<Author, _>(&mut exec).await);

    assert_eq!(names(&mut exec, "table").await, ["authors"]);
}

#[tokio::test]
async fn unique_constraint_is_enforced() {
    let (mut exec, _log) = setup();
    let mapper = Mapper::new();

    assert_ok!(mapper.create_table::<Author, _>(&mut exec).await);

    let mut first = Author {
        id: 1,
        name: "Le Guin".into(),
    };
    let mut second = Author {
        id: 2,
        name: "Le Guin".into(),
    };
    assert_ok!(mapper.insert(&mut exec, &mut first).await);
    assert_err_is!(
        mapper.insert(&mut exec, &mut second).await,
        is_driver_operation_failed
    );
}

#[derive(Debug, Default, Record)]
#[table = "tagged"]
struct Tagged {
    #[sql("id,integer,pk")]
    id: i64,

    #[sql("label,text")]
    #[sqlindex("first_idx")]
    label: String,

    #[sql("color,text")]
    #[sqlindex("second_idx")]
    color: String,
}

#[tokio::test]
async fn failing_index_stops_the_sequence() {
    let (mut exec, log) = setup();
    let mapper = Mapper::new();

    assert_ok!(mapper.create_table::<Tagged, _>(&mut exec).await);
    log.clear();

    assert_err_is!(
        mapper.create_table::<Tagged, _>(&mut exec).await,
        is_driver_operation_failed
    );

    let statements = log.statements();
    assert_eq!(statements.len(), 2);
    assert!(statements[0].starts_with("CREATE TABLE IF NOT EXISTS tagged"));
    assert_eq!(statements[1], "CREATE INDEX first_idx ON tagged (label)");

    assert_eq!(names(&mut exec, "index").await, ["first_idx", "second_idx"]);
}

#[tokio::test]
async fn created_indexes_are_not_rolled_back() {
    let (mut exec, _log) = setup();
    let mapper = Mapper::new();

    assert_ok!(exec.execute("CREATE TABLE other (x integer)", &[]).await);
    assert_ok!(exec.execute("CREATE INDEX second_idx ON other (x)", &[]).await);

    assert_err_is!(
        mapper.create_table::<Tagged, _>(&mut exec).await,
        is_driver_operation_failed
    );

    assert_eq!(names(&mut exec, "table").await, ["other", "tagged"]);
    assert_eq!(names(&mut exec, "index").await, ["first_idx", "second_idx"]);
}
