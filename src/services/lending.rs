//! Loan lifecycle service
//!
//! Orchestrates a single lifecycle transition (borrow or return) by
//! combining the pure policy rules with collaborator reads, then handing
//! every mutated snapshot to the unit of work as one batch. On any
//! failure nothing has been written.

use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::{
    clock::Clock,
    error::{LendingError, LendingResult},
    models::loan::{CreateLoan, Loan},
    repository::{Repository, WriteBatch},
    services::{eligibility::LoanEligibility, rating::RatingPolicy},
};

#[derive(Clone)]
pub struct LendingService {
    repository: Repository,
    clock: Arc<dyn Clock>,
}

impl LendingService {
    pub fn new(repository: Repository, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Create a new loan (borrow a book)
    pub async fn create_loan(&self, request: CreateLoan) -> LendingResult<Loan> {
        request
            .validate()
            .map_err(|e| LendingError::Validation(e.to_string()))?;

        let mut user = self.repository.users.get(request.user_id).await?;
        let mut book = self.repository.books.get(request.book_id).await?;

        LoanEligibility::can_borrow(&book, &user, request.duration_days)?;

        book.is_available = false;
        user.loan_limit -= 1;

        let loan = Loan::new(
            request.user_id,
            request.book_id,
            self.clock.now(),
            request.duration_days,
        );

        self.repository
            .tx
            .commit(WriteBatch {
                users: vec![user],
                books: vec![book],
                new_loans: vec![loan.clone()],
                loans: Vec::new(),
            })
            .await?;

        tracing::info!(
            "Loan {} created: user {} borrowed book {} for {} days",
            loan.id,
            loan.user_id,
            loan.book_id,
            loan.duration_days
        );

        Ok(loan)
    }

    /// Return a borrowed book
    ///
    /// Marks the loan returned (exactly once), adjusts the user's
    /// reputation from the actual lateness, restores the user's loan
    /// capacity and makes the book borrowable again.
    pub async fn return_loan(&self, loan_id: Uuid, returning_user_id: Uuid) -> LendingResult<Loan> {
        let mut loan = self.repository.loans.get(loan_id).await?;

        if loan.is_returned {
            return Err(LendingError::AlreadyReturned(loan_id));
        }

        let mut user = self.repository.users.get(returning_user_id).await?;
        let mut book = self.repository.books.get(loan.book_id).await?;

        let now = self.clock.now();
        loan.returned_date = Some(now);
        loan.is_returned = true;

        // Lateness is measured against the actual return time, zero or
        // positive when on schedule, negative once past due.
        let late_days = loan.late_days(now);
        let old_reputation = user.reputation;
        user.reputation = RatingPolicy::penalize(user.reputation, late_days);
        user.loan_limit += 1;
        book.is_available = true;

        self.repository
            .tx
            .commit(WriteBatch {
                users: vec![user.clone()],
                books: vec![book],
                new_loans: Vec::new(),
                loans: vec![loan.clone()],
            })
            .await?;

        tracing::info!(
            "Loan {} returned with lateness {} days: user {} rating {} -> {}",
            loan.id,
            late_days,
            user.id,
            old_reputation,
            user.reputation
        );

        Ok(loan)
    }
}
