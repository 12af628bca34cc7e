//! Loan eligibility rules

use crate::{
    error::{LendingError, LendingResult},
    models::{book::Book, user::User},
    services::rating::RatingPolicy,
};

pub struct LoanEligibility;

impl LoanEligibility {
    /// Decide whether `user` may borrow `book` for the requested duration.
    ///
    /// Checks run in a fixed order so the reported failure is
    /// deterministic when several conditions fail at once: book
    /// availability first, then the rating-derived duration limit, then
    /// the concurrent-loan quota.
    pub fn can_borrow(book: &Book, user: &User, requested_duration_days: i64) -> LendingResult<()> {
        if !book.is_available {
            return Err(LendingError::BookUnavailable(book.id));
        }

        let limit = RatingPolicy::loan_limit_days(user.reputation);
        if requested_duration_days > limit {
            return Err(LendingError::DurationExceedsRatingLimit {
                requested: requested_duration_days,
                limit,
            });
        }

        if user.loan_limit <= 0 {
            return Err(LendingError::LoanLimitReached(user.id));
        }

        Ok(())
    }
}
