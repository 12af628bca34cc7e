//! Storage collaborator contracts
//!
//! The engine never talks to a database directly: it reads and writes
//! entity snapshots through these traits. Implementors own the
//! transactional discipline: a committed [`WriteBatch`] must be atomic,
//! and read-modify-write cycles on the same entity must be serialized
//! against each other (optimistic versioning, row locks, or a single lock
//! as the in-memory store does).

pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    error::{LendingError, LendingResult},
    models::{book::Book, loan::Loan, user::User},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Get user by ID; `EntityNotFound` if absent.
    async fn get(&self, id: Uuid) -> LendingResult<User>;

    /// Get the users for the given IDs. Missing IDs are simply absent
    /// from the result, not an error.
    async fn get_many(&self, ids: &[Uuid]) -> LendingResult<Vec<User>>;

    /// Upsert a single user.
    async fn put(&self, user: User) -> LendingResult<User>;

    /// Upsert a batch of users, best-effort: applies what it can and
    /// reports the rest as per-item failures.
    async fn put_many(&self, users: Vec<User>) -> (Vec<User>, Vec<(Uuid, LendingError)>);
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Get book by ID; `EntityNotFound` if absent.
    async fn get(&self, id: Uuid) -> LendingResult<Book>;

    /// Upsert a single book.
    async fn put(&self, book: Book) -> LendingResult<Book>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoanStore: Send + Sync {
    /// Get loan by ID; `LoanNotFound` if absent.
    async fn get(&self, id: Uuid) -> LendingResult<Loan>;

    /// Persist a new loan record.
    async fn create(&self, loan: Loan) -> LendingResult<Loan>;

    /// Update an existing loan record.
    async fn put(&self, loan: Loan) -> LendingResult<Loan>;

    /// All loans not yet returned whose due date has passed as of `now`.
    async fn find_open_past_due(&self, now: DateTime<Utc>) -> LendingResult<Vec<Loan>>;
}

/// Cross-entity write set committed as one unit.
#[derive(Debug, Clone, Default)]
pub struct WriteBatch {
    pub users: Vec<User>,
    pub books: Vec<Book>,
    pub new_loans: Vec<Loan>,
    pub loans: Vec<Loan>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Apply the whole batch or none of it. A `Persistence` failure means
    /// no part of the batch is externally observable.
    async fn commit(&self, batch: WriteBatch) -> LendingResult<()>;
}

/// Main repository struct bundling the storage collaborators
#[derive(Clone)]
pub struct Repository {
    pub users: Arc<dyn UserStore>,
    pub books: Arc<dyn BookStore>,
    pub loans: Arc<dyn LoanStore>,
    pub tx: Arc<dyn UnitOfWork>,
}

impl Repository {
    /// Create a repository from the given collaborators
    pub fn new(
        users: Arc<dyn UserStore>,
        books: Arc<dyn BookStore>,
        loans: Arc<dyn LoanStore>,
        tx: Arc<dyn UnitOfWork>,
    ) -> Self {
        Self {
            users,
            books,
            loans,
            tx,
        }
    }

    /// Repository backed by the in-memory reference store.
    pub fn in_memory() -> Self {
        let store = Arc::new(memory::InMemoryStore::new());
        Self {
            users: store.clone(),
            books: store.clone(),
            loans: store.clone(),
            tx: store,
        }
    }
}
