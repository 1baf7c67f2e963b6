use book_store_core::db::open_db_in_memory;
use book_store_core::db::seed::{apply_seed_sql, reset_book_store};
use book_store_core::{Book, BookRepository, BookService, SqliteBookRepository};

#[test]
fn returns_all_seeded_books_in_id_order() {
    let conn = open_db_in_memory().unwrap();
    reset_book_store(&conn).unwrap();
    let repo = SqliteBookRepository::new(&conn);

    let books = repo.all().unwrap();

    assert_eq!(books.len(), 5);
    let expected = [
        ("1", "Nineteen Eighty-Four", "George Orwell"),
        ("2", "Mrs Dalloway", "Virginia Woolf"),
        ("3", "Emma", "Jane Austen"),
        ("4", "Dracula", "Bram Stoker"),
        ("5", "The Age of Innocence", "Edith Wharton"),
    ];
    for (book, (id, title, author_name)) in books.iter().zip(expected) {
        assert_eq!(book.id(), id);
        assert_eq!(book.title(), title);
        assert_eq!(book.author_name(), author_name);
    }
}

#[test]
fn first_book_matches_seed_row() {
    let conn = open_db_in_memory().unwrap();
    reset_book_store(&conn).unwrap();

    let books = SqliteBookRepository::new(&conn).all().unwrap();
    assert_eq!(
        books[0],
        Book::new("1", "Nineteen Eighty-Four", "George Orwell")
    );
}

#[test]
fn empty_catalog_returns_empty_vec() {
    let conn = open_db_in_memory().unwrap();

    let books = SqliteBookRepository::new(&conn).all().unwrap();
    assert!(books.is_empty());
}

#[test]
fn repeated_reads_are_identical() {
    let conn = open_db_in_memory().unwrap();
    reset_book_store(&conn).unwrap();
    let repo = SqliteBookRepository::new(&conn);

    let first = repo.all().unwrap();
    let second = repo.all().unwrap();
    assert_eq!(first, second);
}

#[test]
fn order_follows_primary_key_not_insertion() {
    let conn = open_db_in_memory().unwrap();
    apply_seed_sql(
        &conn,
        "INSERT INTO authors (id, name) VALUES (1, 'Jane Austen');
         INSERT INTO books (id, title, author_id) VALUES (3, 'Persuasion', 1);
         INSERT INTO books (id, title, author_id) VALUES (1, 'Emma', 1);
         INSERT INTO books (id, title, author_id) VALUES (2, 'Sense and Sensibility', 1);",
    )
    .unwrap();

    let ids: Vec<String> = SqliteBookRepository::new(&conn)
        .all()
        .unwrap()
        .iter()
        .map(|book| book.id().to_string())
        .collect();
    assert_eq!(ids, ["1", "2", "3"]);
}

#[test]
fn text_is_returned_exactly_as_stored() {
    let conn = open_db_in_memory().unwrap();
    apply_seed_sql(
        &conn,
        "INSERT INTO authors (id, name) VALUES (1, '  bell hooks ');
         INSERT INTO books (id, title, author_id) VALUES (1, 'all about love ', 1);",
    )
    .unwrap();

    let books = SqliteBookRepository::new(&conn).all().unwrap();
    assert_eq!(books[0].title(), "all about love ");
    assert_eq!(books[0].author_name(), "  bell hooks ");
}

#[test]
fn shared_author_is_joined_on_every_book() {
    let conn = open_db_in_memory().unwrap();
    apply_seed_sql(
        &conn,
        "INSERT INTO authors (id, name) VALUES (1, 'Jane Austen'), (2, 'Bram Stoker');
         INSERT INTO books (id, title, author_id) VALUES
            (1, 'Emma', 1), (2, 'Dracula', 2), (3, 'Persuasion', 1);",
    )
    .unwrap();

    let authors: Vec<String> = SqliteBookRepository::new(&conn)
        .all()
        .unwrap()
        .into_iter()
        .map(|book| book.author_name().to_string())
        .collect();
    assert_eq!(authors, ["Jane Austen", "Bram Stoker", "Jane Austen"]);
}

#[test]
fn service_lists_same_books_as_repository() {
    let conn = open_db_in_memory().unwrap();
    reset_book_store(&conn).unwrap();

    let direct = SqliteBookRepository::new(&conn).all().unwrap();
    let service = BookService::new(SqliteBookRepository::new(&conn));
    assert_eq!(service.all_books().unwrap(), direct);
}

#[test]
fn book_serializes_with_string_id() {
    let book = Book::new("3", "Emma", "Jane Austen");

    let value = serde_json::to_value(&book).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"id": "3", "title": "Emma", "author_name": "Jane Austen"})
    );

    let decoded: Book = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, book);
}
