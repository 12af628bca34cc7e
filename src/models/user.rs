//! User model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::Reputation;

/// User snapshot as read from and written back to the user store.
///
/// `loan_limit` is the remaining concurrent-loan capacity, not a duration:
/// it drops by one on each borrow, returns on each return, and grows when
/// the user registers a book. It never goes negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub reputation: Reputation,
    pub loan_limit: i32,
}

impl User {
    pub fn new(name: impl Into<String>, reputation: Reputation, loan_limit: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            reputation,
            loan_limit,
        }
    }
}
