//! Raw-SQL book store backed by sqlx.
//!
//! Not-found detection uses `fetch_optional` for statements that return the
//! row (get, update) and affected-row counts for delete. Each operation is a
//! single statement.

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{Book, NewBook},
};

#[derive(Clone)]
pub struct SqlBookStore {
    pool: Pool<Postgres>,
}

impl SqlBookStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl super::BookStore for SqlBookStore {
    async fn create(&self, book: &NewBook) -> AppResult<Book> {
        let created = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, description)
            VALUES ($1, $2, $3)
            RETURNING id, title, author, description
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn list(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT id, title, author, description FROM books ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    async fn get(&self, id: i32) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            "SELECT id, title, author, description FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::book_not_found(id))
    }

    async fn update(&self, id: i32, book: &NewBook) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET title = $2, author = $3, description = $4
            WHERE id = $1
            RETURNING id, title, author, description
            "#,
        )
        .bind(id)
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.description)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::book_not_found(id))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::book_not_found(id));
        }

        Ok(())
    }
}
