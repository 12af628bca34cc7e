//! Book model and related types

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Book snapshot.
///
/// A book is available exactly when it has no open loan; the engine flips
/// `is_available` together with the loan writes so the two never diverge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub is_available: bool,
}

impl Book {
    /// New book, available for borrowing.
    pub fn new(owner_id: Uuid, title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            title: title.into(),
            is_available: true,
        }
    }
}

/// Register book request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBook {
    pub owner_id: Uuid,
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
}
