//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod compare;
mod inspect;

pub use compare::run_compare;
pub use inspect::run_inspect;

// Re-export config types used by handlers
pub use crate::config::{CompareConfig, InspectConfig};
