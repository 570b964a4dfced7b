use pretty_assertions::assert_eq;
use rowmap::{driver::Executor, Mapper, Record, Value};
use std_util::prelude::*;
use tests::setup;

#[derive(Debug, Default, Clone, PartialEq, Record)]
#[table = "books"]
struct Book {
    #[sql("isbn,text,pk")]
    isbn: String,

    #[sql("title,text")]
    title: String,

    #[sql("pages,integer")]
    pages: i64,

    #[sql("in_print,boolean")]
    in_print: bool,
}

async fn seed(exec: &mut tests::LoggingExecutor<rowmap_driver_sqlite::Connection>) {
    let mapper = Mapper::new();
    assert_ok!(mapper.create_table::<Book, _>(exec).await);

    for (isbn, title, pages) in [("1", "Dune", 412), ("2", "Emma", 474), ("3", "Ubik", 202)] {
        let mut book = Book {
            isbn: isbn.into(),
            title: title.into(),
            pages,
            in_print: pages > 300,
        };
        assert_ok!(mapper.insert(exec, &mut book).await);
    }
}

#[tokio::test]
async fn query_all_collects_rows() {
    let (mut exec, _log) = setup();
    seed(&mut exec).await;

    let mapper = Mapper::new();
    let books: Vec<Book> = assert_ok!(
        mapper
            .query_all(
                &mut exec,
                "SELECT * FROM books WHERE pages > ? ORDER BY isbn",
                &[Value::I64(300)],
            )
            .await
    );

    let titles: Vec<_> = books.iter().map(|book| book.title.as_str()).collect();
    assert_eq!(titles, ["Dune", "Emma"]);
    assert!(books.iter().all(|book| book.in_print));
}

#[tokio::test]
async fn scan_tolerates_extra_and_missing_columns() {
    let (mut exec, _log) = setup();
    seed(&mut exec).await;

    let mapper = Mapper::new();
    let books: Vec<Book> = assert_ok!(
        mapper
            .query_all(
                &mut exec,
                "SELECT title, isbn, length(title) AS len FROM books ORDER BY isbn",
                &[],
            )
            .await
    );

    assert_eq!(
        books[2],
        Book {
            isbn: "3".into(),
            title: "Ubik".into(),
            ..Book::default()
        }
    );
}

#[tokio::test]
async fn scan_a_single_row() {
    let (mut exec, _log) = setup();
    seed(&mut exec).await;

    let mut row = assert_some!(assert_ok!(
        exec.query_one("SELECT * FROM books WHERE isbn = ?", &[Value::from("2")])
            .await
    ));

    let mapper = Mapper::new();
    let mut book = Book::default();
    assert_ok!(mapper.scan(&mut row, &mut book));
    assert_eq!(book.title, "Emma");
    assert_eq!(book.pages, 474);
}

#[tokio::test]
async fn scan_reports_conversion_failures() {
    let (mut exec, _log) = setup();
    seed(&mut exec).await;

    let mapper = Mapper::new();
    let result: rowmap::Result<Vec<Book>> = mapper
        .query_all(&mut exec, "SELECT title AS pages FROM books", &[])
        .await;

    assert_err_is!(result, is_type_conversion);
}
