//! Shared domain enums

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Reputation
// ---------------------------------------------------------------------------

/// User trust level, an ordered discrete scale.
///
/// Governs the maximum loan duration a user may request. Adjustments move
/// one or more steps along the scale and clamp at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(i16)]
pub enum Reputation {
    VeryBad = 0,
    Bad = 1,
    Neutral = 2,
    Good = 3,
    Excellent = 4,
}

impl Reputation {
    /// Move `steps` along the scale (positive improves), clamped at
    /// VeryBad and Excellent.
    pub fn stepped(self, steps: i16) -> Reputation {
        Reputation::from((self as i16).saturating_add(steps))
    }
}

impl From<i16> for Reputation {
    fn from(v: i16) -> Self {
        match v {
            v if v <= 0 => Reputation::VeryBad,
            1 => Reputation::Bad,
            2 => Reputation::Neutral,
            3 => Reputation::Good,
            _ => Reputation::Excellent,
        }
    }
}

impl From<Reputation> for i16 {
    fn from(r: Reputation) -> Self {
        r as i16
    }
}

impl std::fmt::Display for Reputation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Reputation::VeryBad => "Very bad",
            Reputation::Bad => "Bad",
            Reputation::Neutral => "Neutral",
            Reputation::Good => "Good",
            Reputation::Excellent => "Excellent",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// LatenessBracket
// ---------------------------------------------------------------------------

/// Overdue thresholds (days past due) at which a penalty step is applied.
///
/// Ordered by severity: a loan 16 days overdue sits in the `TwoWeeks`
/// bracket and has necessarily passed through `OneDay` and `OneWeek`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(i16)]
pub enum LatenessBracket {
    OneDay = 1,
    OneWeek = 7,
    TwoWeeks = 14,
    OneMonth = 31,
}

impl LatenessBracket {
    /// Deepest bracket entered for the given lateness.
    ///
    /// `late_days` is `(due_date - now).num_days()`: zero or positive while
    /// on time, increasingly negative as lateness grows. Returns `None`
    /// until the loan is at least one full day overdue.
    pub fn for_late_days(late_days: i64) -> Option<LatenessBracket> {
        match late_days {
            d if d <= -31 => Some(LatenessBracket::OneMonth),
            d if d <= -14 => Some(LatenessBracket::TwoWeeks),
            d if d <= -7 => Some(LatenessBracket::OneWeek),
            d if d <= -1 => Some(LatenessBracket::OneDay),
            _ => None,
        }
    }
}

impl From<LatenessBracket> for i16 {
    fn from(b: LatenessBracket) -> Self {
        b as i16
    }
}

impl std::fmt::Display for LatenessBracket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} days overdue", *self as i16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stepped_clamps_at_both_ends() {
        assert_eq!(Reputation::Excellent.stepped(1), Reputation::Excellent);
        assert_eq!(Reputation::Excellent.stepped(5), Reputation::Excellent);
        assert_eq!(Reputation::VeryBad.stepped(-1), Reputation::VeryBad);
        assert_eq!(Reputation::Bad.stepped(-3), Reputation::VeryBad);
        assert_eq!(Reputation::Neutral.stepped(1), Reputation::Good);
        assert_eq!(Reputation::Neutral.stepped(-2), Reputation::VeryBad);
    }

    #[test]
    fn test_reputation_ordering() {
        assert!(Reputation::VeryBad < Reputation::Bad);
        assert!(Reputation::Bad < Reputation::Neutral);
        assert!(Reputation::Neutral < Reputation::Good);
        assert!(Reputation::Good < Reputation::Excellent);
    }

    #[test]
    fn test_bracket_for_late_days() {
        assert_eq!(LatenessBracket::for_late_days(3), None);
        assert_eq!(LatenessBracket::for_late_days(0), None);
        assert_eq!(LatenessBracket::for_late_days(-1), Some(LatenessBracket::OneDay));
        assert_eq!(LatenessBracket::for_late_days(-6), Some(LatenessBracket::OneDay));
        assert_eq!(LatenessBracket::for_late_days(-7), Some(LatenessBracket::OneWeek));
        assert_eq!(LatenessBracket::for_late_days(-13), Some(LatenessBracket::OneWeek));
        assert_eq!(LatenessBracket::for_late_days(-14), Some(LatenessBracket::TwoWeeks));
        assert_eq!(LatenessBracket::for_late_days(-30), Some(LatenessBracket::TwoWeeks));
        assert_eq!(LatenessBracket::for_late_days(-31), Some(LatenessBracket::OneMonth));
        assert_eq!(LatenessBracket::for_late_days(-365), Some(LatenessBracket::OneMonth));
    }

    #[test]
    fn test_bracket_ordering() {
        assert!(LatenessBracket::OneDay < LatenessBracket::OneWeek);
        assert!(LatenessBracket::OneWeek < LatenessBracket::TwoWeeks);
        assert!(LatenessBracket::TwoWeeks < LatenessBracket::OneMonth);
    }
}
