//! Book registration service
//!
//! Registering a book grants its owner one extra unit of concurrent-loan
//! capacity; book and owner are committed together.

use validator::Validate;

use crate::{
    error::{LendingError, LendingResult},
    models::book::{Book, CreateBook},
    repository::{Repository, WriteBatch},
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a new book and credit the owner's loan capacity
    pub async fn register_book(&self, request: CreateBook) -> LendingResult<Book> {
        request
            .validate()
            .map_err(|e| LendingError::Validation(e.to_string()))?;

        let mut owner = self.repository.users.get(request.owner_id).await?;
        owner.loan_limit += 1;

        let book = Book::new(request.owner_id, request.title);

        self.repository
            .tx
            .commit(WriteBatch {
                users: vec![owner],
                books: vec![book.clone()],
                ..Default::default()
            })
            .await?;

        tracing::info!("Book {} registered by user {}", book.id, book.owner_id);

        Ok(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{enums::Reputation, user::User},
        repository::{MockBookStore, MockLoanStore, MockUnitOfWork, MockUserStore},
    };
    use std::sync::Arc;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_register_book_credits_owner_capacity() {
        let owner = User::new("Ada", Reputation::Neutral, 1);
        let owner_id = owner.id;

        let mut users = MockUserStore::new();
        users.expect_get().returning(move |_| Ok(owner.clone()));
        let mut tx = MockUnitOfWork::new();
        tx.expect_commit()
            .withf(move |batch| {
                batch.users.len() == 1
                    && batch.users[0].loan_limit == 2
                    && batch.books.len() == 1
                    && batch.books[0].is_available
                    && batch.books[0].owner_id == owner_id
            })
            .returning(|_| Ok(()));

        let repository = Repository::new(
            Arc::new(users),
            Arc::new(MockBookStore::new()),
            Arc::new(MockLoanStore::new()),
            Arc::new(tx),
        );
        let service = CatalogService::new(repository);

        let book = service
            .register_book(CreateBook {
                owner_id,
                title: "A Wizard of Earthsea".to_string(),
            })
            .await
            .expect("register_book failed");

        assert!(book.is_available);
    }

    #[tokio::test]
    async fn test_register_book_rejects_empty_title() {
        let mut users = MockUserStore::new();
        users.expect_get().never();
        let repository = Repository::new(
            Arc::new(users),
            Arc::new(MockBookStore::new()),
            Arc::new(MockLoanStore::new()),
            Arc::new(MockUnitOfWork::new()),
        );
        let service = CatalogService::new(repository);

        let result = service
            .register_book(CreateBook {
                owner_id: Uuid::new_v4(),
                title: String::new(),
            })
            .await;

        assert!(matches!(result, Err(LendingError::Validation(_))));
    }
}
