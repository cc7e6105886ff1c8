//! ORM book store backed by Diesel with async connections.
//!
//! Reads detect not-found through Diesel's distinguished `NotFound` signal
//! (surfaced here via `.optional()`); writes use attribute-matching queries
//! and affected-row counts.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use super::pool::{DbPool, PoolError};
use super::schema::books;
use crate::{
    error::{AppError, AppResult},
    models::{Book, NewBook},
};

/// Queryable row for books.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = books)]
#[diesel(check_for_backend(diesel::pg::Pg))]
struct BookRow {
    id: i32,
    title: String,
    author: String,
    description: String,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Book {
            id: row.id,
            title: row.title,
            author: row.author,
            description: row.description,
        }
    }
}

/// Insertable and updatable column set for books.
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = books)]
struct BookChangeset<'a> {
    title: &'a str,
    author: &'a str,
    description: &'a str,
}

impl<'a> From<&'a NewBook> for BookChangeset<'a> {
    fn from(book: &'a NewBook) -> Self {
        Self {
            title: &book.title,
            author: &book.author,
            description: &book.description,
        }
    }
}

fn map_pool_error(error: PoolError) -> AppError {
    AppError::Pool(error.to_string())
}

#[derive(Clone)]
pub struct OrmBookStore {
    pool: DbPool,
}

impl OrmBookStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create the `books` table if it does not exist yet.
    ///
    /// Called once at startup; stands in for external migration tooling on
    /// this backend.
    pub async fn ensure_schema(&self) -> AppResult<()> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::sql_query(
            r#"
            CREATE TABLE IF NOT EXISTS books (
                id SERIAL PRIMARY KEY,
                title TEXT NOT NULL,
                author TEXT NOT NULL,
                description TEXT NOT NULL
            )
            "#,
        )
        .execute(&mut conn)
        .await?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl super::BookStore for OrmBookStore {
    async fn create(&self, book: &NewBook) -> AppResult<Book> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: BookRow = diesel::insert_into(books::table)
            .values(&BookChangeset::from(book))
            .returning(BookRow::as_returning())
            .get_result(&mut conn)
            .await?;

        Ok(row.into())
    }

    async fn list(&self) -> AppResult<Vec<Book>> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<BookRow> = books::table
            .order(books::id.asc())
            .select(BookRow::as_select())
            .load(&mut conn)
            .await?;

        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn get(&self, id: i32) -> AppResult<Book> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<BookRow> = books::table
            .filter(books::id.eq(id))
            .select(BookRow::as_select())
            .first(&mut conn)
            .await
            .optional()?;

        row.map(Book::from)
            .ok_or_else(|| AppError::book_not_found(id))
    }

    async fn update(&self, id: i32, book: &NewBook) -> AppResult<Book> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<BookRow> = diesel::update(books::table.filter(books::id.eq(id)))
            .set(&BookChangeset::from(book))
            .returning(BookRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()?;

        row.map(Book::from)
            .ok_or_else(|| AppError::book_not_found(id))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(books::table.filter(books::id.eq(id)))
            .execute(&mut conn)
            .await?;

        if deleted == 0 {
            return Err(AppError::book_not_found(id));
        }

        Ok(())
    }
}
