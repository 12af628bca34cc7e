//! Lending Engine
//!
//! The policy core of a book lending system: whether a borrow may
//! proceed, how a user's reputation evolves when a loan completes, and
//! how overdue loans are retroactively penalized. Storage and transport
//! stay behind the collaborator contracts in [`repository`]; hosts wire
//! those up (or use the in-memory reference store) and drive the
//! [`services::Services`] container.

pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod telemetry;

pub use config::AppConfig;
pub use error::{ErrorCode, LendingError, LendingResult};
