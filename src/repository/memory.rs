//! In-memory reference store
//!
//! Backs tests and embedding hosts that do not bring their own storage.
//! One struct implements all four collaborator contracts over shared maps;
//! `commit` takes the three table locks in a fixed order (users, books,
//! loans) so a batch is applied atomically and concurrent commits are
//! serialized.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::{LendingError, LendingResult},
    models::{book::Book, loan::Loan, user::User},
};

use super::{BookStore, LoanStore, UnitOfWork, UserStore, WriteBatch};

#[derive(Clone, Default)]
pub struct InMemoryStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
    books: Arc<RwLock<HashMap<Uuid, Book>>>,
    loans: Arc<RwLock<HashMap<Uuid, Loan>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn get(&self, id: Uuid) -> LendingResult<User> {
        self.users
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| LendingError::EntityNotFound(format!("User with id {} not found", id)))
    }

    async fn get_many(&self, ids: &[Uuid]) -> LendingResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(ids.iter().filter_map(|id| users.get(id).cloned()).collect())
    }

    async fn put(&self, user: User) -> LendingResult<User> {
        self.users.write().await.insert(user.id, user.clone());
        Ok(user)
    }

    async fn put_many(&self, users: Vec<User>) -> (Vec<User>, Vec<(Uuid, LendingError)>) {
        let mut table = self.users.write().await;
        for user in &users {
            table.insert(user.id, user.clone());
        }
        (users, Vec::new())
    }
}

#[async_trait]
impl BookStore for InMemoryStore {
    async fn get(&self, id: Uuid) -> LendingResult<Book> {
        self.books
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| LendingError::EntityNotFound(format!("Book with id {} not found", id)))
    }

    async fn put(&self, book: Book) -> LendingResult<Book> {
        self.books.write().await.insert(book.id, book.clone());
        Ok(book)
    }
}

#[async_trait]
impl LoanStore for InMemoryStore {
    async fn get(&self, id: Uuid) -> LendingResult<Loan> {
        self.loans
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(LendingError::LoanNotFound(id))
    }

    async fn create(&self, loan: Loan) -> LendingResult<Loan> {
        let mut loans = self.loans.write().await;
        if loans.contains_key(&loan.id) {
            return Err(LendingError::Persistence(format!(
                "Loan with id {} already exists",
                loan.id
            )));
        }
        loans.insert(loan.id, loan.clone());
        Ok(loan)
    }

    async fn put(&self, loan: Loan) -> LendingResult<Loan> {
        self.loans.write().await.insert(loan.id, loan.clone());
        Ok(loan)
    }

    async fn find_open_past_due(&self, now: DateTime<Utc>) -> LendingResult<Vec<Loan>> {
        let loans = self.loans.read().await;
        Ok(loans
            .values()
            .filter(|l| !l.is_returned && l.due_date < now)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl UnitOfWork for InMemoryStore {
    async fn commit(&self, batch: WriteBatch) -> LendingResult<()> {
        // Fixed lock order keeps concurrent commits deadlock-free.
        let mut users = self.users.write().await;
        let mut books = self.books.write().await;
        let mut loans = self.loans.write().await;

        for loan in &batch.new_loans {
            if loans.contains_key(&loan.id) {
                return Err(LendingError::Persistence(format!(
                    "Loan with id {} already exists",
                    loan.id
                )));
            }
        }

        for user in batch.users {
            users.insert(user.id, user);
        }
        for book in batch.books {
            books.insert(book.id, book);
        }
        for loan in batch.new_loans.into_iter().chain(batch.loans) {
            loans.insert(loan.id, loan);
        }

        Ok(())
    }
}
