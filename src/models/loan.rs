//! Loan (borrow) model and related types

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::enums::LatenessBracket;

/// Loan record.
///
/// `borrow_date`, `due_date` and `duration_days` are fixed at creation.
/// `is_returned` flips false to true exactly once, together with
/// `returned_date`. `penalized_bracket` records the deepest overdue
/// bracket the sweeper has already penalized, so repeat sweeps at the
/// same depth apply nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    pub id: Uuid,
    pub user_id: Uuid,
    pub book_id: Uuid,
    pub borrow_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub returned_date: Option<DateTime<Utc>>,
    pub duration_days: i64,
    pub is_returned: bool,
    pub penalized_bracket: Option<LatenessBracket>,
}

impl Loan {
    /// New open loan starting at `borrow_date` for `duration_days` days.
    pub fn new(user_id: Uuid, book_id: Uuid, borrow_date: DateTime<Utc>, duration_days: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            book_id,
            borrow_date,
            due_date: borrow_date + Duration::days(duration_days),
            returned_date: None,
            duration_days,
            is_returned: false,
            penalized_bracket: None,
        }
    }

    /// Lateness in whole days as of `as_of`: zero or positive while on
    /// time, increasingly negative past the due date.
    pub fn late_days(&self, as_of: DateTime<Utc>) -> i64 {
        (self.due_date - as_of).num_days()
    }

    /// Whether the sweeper has already penalized this loan at `bracket`
    /// depth or deeper.
    pub fn is_processed_for(&self, bracket: LatenessBracket) -> bool {
        self.penalized_bracket.map_or(false, |b| b >= bracket)
    }
}

/// Create loan request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLoan {
    pub user_id: Uuid,
    pub book_id: Uuid,
    #[validate(range(min = 1, message = "duration must be at least one day"))]
    pub duration_days: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_due_date_from_duration() {
        let start = Utc::now();
        let loan = Loan::new(Uuid::new_v4(), Uuid::new_v4(), start, 10);
        assert_eq!(loan.due_date, start + Duration::days(10));
        assert!(!loan.is_returned);
        assert!(loan.returned_date.is_none());
        assert!(loan.penalized_bracket.is_none());
    }

    #[test]
    fn test_late_days_sign() {
        let start = Utc::now();
        let loan = Loan::new(Uuid::new_v4(), Uuid::new_v4(), start, 10);
        assert_eq!(loan.late_days(start + Duration::days(8)), 2);
        assert_eq!(loan.late_days(start + Duration::days(12)), -2);
    }

    #[test]
    fn test_is_processed_for_depth() {
        let mut loan = Loan::new(Uuid::new_v4(), Uuid::new_v4(), Utc::now(), 5);
        assert!(!loan.is_processed_for(LatenessBracket::OneDay));

        loan.penalized_bracket = Some(LatenessBracket::OneWeek);
        assert!(loan.is_processed_for(LatenessBracket::OneDay));
        assert!(loan.is_processed_for(LatenessBracket::OneWeek));
        assert!(!loan.is_processed_for(LatenessBracket::TwoWeeks));
    }
}
