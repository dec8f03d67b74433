//! Pipeline orchestration for document comparison.
//!
//! This module provides shared orchestration logic for load → validate →
//! compare → report workflows, reducing duplication across CLI command
//! handlers.

mod compare_stage;
mod inspect_stage;
mod load;
mod output;

pub use compare_stage::{compare_documents, NarrativeMode};
pub use inspect_stage::inspect_document;
pub use load::{load_document, LoadedDocument};
pub use output::{should_use_color, write_output, OutputTarget};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - no changes detected (or fail-on-change disabled)
    pub const SUCCESS: i32 = 0;
    /// Changes were detected
    pub const CHANGES_DETECTED: i32 = 1;
    /// Comparison integrity fell below the reliable band
    pub const LOW_INTEGRITY: i32 = 2;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_values() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::CHANGES_DETECTED, 1);
        assert_eq!(exit_codes::LOW_INTEGRITY, 2);
        assert_eq!(exit_codes::ERROR, 3);
    }
}
