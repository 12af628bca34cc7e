//! Business logic services

pub mod catalog;
pub mod eligibility;
pub mod lending;
pub mod rating;
pub mod sweeper;

use std::sync::Arc;

use crate::{clock::Clock, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub lending: lending::LendingService,
    pub catalog: catalog::CatalogService,
    pub sweeper: sweeper::OverdueSweeper,
}

impl Services {
    /// Create all services over the given repository and clock
    pub fn new(repository: Repository, clock: Arc<dyn Clock>) -> Self {
        Self {
            lending: lending::LendingService::new(repository.clone(), clock.clone()),
            catalog: catalog::CatalogService::new(repository.clone()),
            sweeper: sweeper::OverdueSweeper::new(repository, clock),
        }
    }
}
