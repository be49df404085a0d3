//! In-memory book store used as a test double

use std::sync::Mutex;

use async_trait::async_trait;

use super::BookStore;
use crate::{
    error::{RepositoryError, RepositoryResult},
    models::book::{Book, BookInput},
};

#[derive(Default)]
pub struct MemoryBookStore {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    next_id: i32,
    rows: Vec<Book>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn create(&self, book: &BookInput) -> RepositoryResult<Book> {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let row = Book::from_input(state.next_id, book.clone());
        state.rows.push(row.clone());
        Ok(row)
    }

    async fn list(&self) -> RepositoryResult<Vec<Book>> {
        Ok(self.state.lock().unwrap().rows.clone())
    }

    async fn get_by_id(&self, id: i32) -> RepositoryResult<Book> {
        self.state
            .lock()
            .unwrap()
            .rows
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn update(&self, id: i32, book: &BookInput) -> RepositoryResult<()> {
        let mut state = self.state.lock().unwrap();
        if let Some(row) = state.rows.iter_mut().find(|b| b.id == id) {
            *row = Book::from_input(id, book.clone());
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        self.state.lock().unwrap().rows.retain(|b| b.id != id);
        Ok(())
    }

    async fn ping(&self) -> RepositoryResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune(status: &str) -> BookInput {
        BookInput {
            title: "Dune".into(),
            author: "Herbert".into(),
            isbn: "123".into(),
            status: status.into(),
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_input_with_id() {
        let store = MemoryBookStore::new();
        let created = store.create(&dune("available")).await.unwrap();
        let fetched = store.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, Book::from_input(created.id, dune("available")));
    }

    #[tokio::test]
    async fn list_is_empty_without_creates() {
        let store = MemoryBookStore::new();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found_even_for_unknown_id() {
        let store = MemoryBookStore::new();
        let created = store.create(&dune("available")).await.unwrap();

        store.delete(created.id).await.unwrap();
        store.delete(1234).await.unwrap();

        assert!(matches!(store.get_by_id(created.id).await, Err(RepositoryError::NotFound(_))));
        assert!(matches!(store.get_by_id(1234).await, Err(RepositoryError::NotFound(1234))));
    }

    #[tokio::test]
    async fn update_of_unknown_id_succeeds_without_inserting() {
        let store = MemoryBookStore::new();
        store.update(77, &dune("checked_out")).await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }
}
