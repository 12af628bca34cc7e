//! Overdue loan sweeper
//!
//! Scans open past-due loans and applies reputation penalties exactly
//! once per lateness bracket a loan has entered. The marker on the loan
//! is written before the user penalty is staged, so a sweep interrupted
//! by storage failures can be re-run without double-penalizing anyone.

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::{
    clock::Clock,
    error::{LendingError, LendingResult},
    models::{enums::LatenessBracket, user::User},
    repository::Repository,
    services::rating::RatingPolicy,
};

/// Outcome of one sweep run
#[derive(Debug, Default)]
pub struct SweepReport {
    /// Open past-due loans inspected
    pub scanned: usize,
    /// Penalty applications staged (one per loan crossing a new bracket)
    pub penalties_applied: usize,
    /// Users whose updated reputation was persisted
    pub users_updated: usize,
    /// Per-item failures; the rest of the batch was still applied
    pub failures: Vec<SweepFailure>,
}

impl SweepReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// One failed write during a sweep
#[derive(Debug)]
pub struct SweepFailure {
    pub loan_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub error: LendingError,
}

#[derive(Clone)]
pub struct OverdueSweeper {
    repository: Repository,
    clock: Arc<dyn Clock>,
}

impl OverdueSweeper {
    pub fn new(repository: Repository, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Run a single sweep over all open past-due loans
    pub async fn run(&self) -> LendingResult<SweepReport> {
        let now = self.clock.now();
        let overdue = self.repository.loans.find_open_past_due(now).await?;

        let mut report = SweepReport {
            scanned: overdue.len(),
            ..Default::default()
        };

        // Working snapshots, one per user, so several overdue loans fold
        // their penalties into a single write.
        let mut user_ids: Vec<Uuid> = overdue.iter().map(|l| l.user_id).collect();
        user_ids.sort_unstable();
        user_ids.dedup();
        let mut pending: HashMap<Uuid, User> = self
            .repository
            .users
            .get_many(&user_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();
        let mut touched: Vec<Uuid> = Vec::new();

        for loan in overdue {
            let late_days = loan.late_days(now);
            let bracket = match LatenessBracket::for_late_days(late_days) {
                Some(bracket) => bracket,
                None => continue,
            };
            if loan.is_processed_for(bracket) {
                continue;
            }

            let user = match pending.get_mut(&loan.user_id) {
                Some(user) => user,
                None => {
                    report.failures.push(SweepFailure {
                        loan_id: Some(loan.id),
                        user_id: Some(loan.user_id),
                        error: LendingError::EntityNotFound(format!(
                            "User with id {} not found",
                            loan.user_id
                        )),
                    });
                    continue;
                }
            };

            // Marker first: a loan whose marker write fails is skipped and
            // picked up again by the next sweep.
            let mut marked = loan.clone();
            marked.penalized_bracket = Some(bracket);
            match self.repository.loans.put(marked).await {
                Ok(_) => {
                    user.reputation = RatingPolicy::penalize(user.reputation, late_days);
                    report.penalties_applied += 1;
                    if !touched.contains(&loan.user_id) {
                        touched.push(loan.user_id);
                    }
                    tracing::debug!(
                        "Loan {} entered bracket {}: user {} now {}",
                        loan.id,
                        bracket,
                        loan.user_id,
                        user.reputation
                    );
                }
                Err(e) => {
                    tracing::warn!("Failed to mark loan {}: {}", loan.id, e);
                    report.failures.push(SweepFailure {
                        loan_id: Some(loan.id),
                        user_id: None,
                        error: e,
                    });
                }
            }
        }

        if !touched.is_empty() {
            let updates: Vec<User> = touched
                .iter()
                .filter_map(|id| pending.get(id).cloned())
                .collect();
            let (updated, failed) = self.repository.users.put_many(updates).await;
            report.users_updated = updated.len();
            for (user_id, error) in failed {
                tracing::warn!("Failed to persist user {}: {}", user_id, error);
                report.failures.push(SweepFailure {
                    loan_id: None,
                    user_id: Some(user_id),
                    error,
                });
            }
        }

        if report.is_clean() {
            tracing::info!(
                "Sweep complete: {} loans scanned, {} penalties, {} users updated",
                report.scanned,
                report.penalties_applied,
                report.users_updated
            );
        } else {
            tracing::warn!(
                "Sweep complete with {} failures: {} loans scanned, {} penalties, {} users updated",
                report.failures.len(),
                report.scanned,
                report.penalties_applied,
                report.users_updated
            );
        }

        Ok(report)
    }

    /// Run sweeps forever on a fixed period; intended for `tokio::spawn`
    pub async fn run_on_schedule(&self, period: std::time::Duration) {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            if let Err(e) = self.run().await {
                tracing::error!("Sweep run failed: {}", e);
            }
        }
    }
}
