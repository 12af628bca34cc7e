//! Reputation rating policy
//!
//! Pure rules: no state, no I/O. Everything else in the engine funnels
//! its reputation decisions through these two functions.

use crate::models::enums::Reputation;

pub struct RatingPolicy;

impl RatingPolicy {
    /// Maximum loan duration, in days, a user at this reputation may
    /// request. Bad and VeryBad users may not borrow at all.
    pub fn loan_limit_days(reputation: Reputation) -> i64 {
        match reputation {
            Reputation::Excellent => 180,
            Reputation::Good => 61,
            Reputation::Neutral => 31,
            Reputation::Bad | Reputation::VeryBad => 0,
        }
    }

    /// New reputation after completing a loan with the given lateness.
    ///
    /// `late_days` is `(due_date - completion).num_days()`: zero or
    /// positive when on time, negative when late. On-time returns improve
    /// the rating one step; lateness worsens it by one step under a week,
    /// two steps under two weeks, three beyond that. The result clamps to
    /// the [VeryBad, Excellent] scale.
    pub fn penalize(reputation: Reputation, late_days: i64) -> Reputation {
        let steps = if late_days >= 0 {
            1
        } else if late_days > -7 {
            -1
        } else if late_days > -14 {
            -2
        } else {
            -3
        };
        reputation.stepped(steps)
    }
}
