//! PostgreSQL-backed book store

use async_trait::async_trait;
use sqlx::{Connection, Pool, Postgres};

use super::BookStore;
use crate::{
    error::{RepositoryError, RepositoryResult},
    models::book::{Book, BookInput},
};

#[derive(Clone)]
pub struct PgBookStore {
    pool: Pool<Postgres>,
}

impl PgBookStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for PgBookStore {
    async fn create(&self, book: &BookInput) -> RepositoryResult<Book> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, isbn, status)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, author, isbn, status
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.isbn)
        .bind(&book.status)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list(&self) -> RepositoryResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>("SELECT id, title, author, isbn, status FROM books")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i32) -> RepositoryResult<Book> {
        sqlx::query_as::<_, Book>("SELECT id, title, author, isbn, status FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn update(&self, id: i32, book: &BookInput) -> RepositoryResult<()> {
        // Zero affected rows is not reported
        sqlx::query("UPDATE books SET title = $1, author = $2, isbn = $3, status = $4 WHERE id = $5")
            .bind(&book.title)
            .bind(&book.author)
            .bind(&book.isbn)
            .bind(&book.status)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn ping(&self) -> RepositoryResult<()> {
        let mut conn = self.pool.acquire().await?;
        conn.ping().await?;
        Ok(())
    }
}
