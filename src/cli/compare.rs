//! Compare command handler.
//!
//! Implements the `compare` subcommand for comparing two policy documents.

use crate::config::CompareConfig;
use crate::diff::StructureDiffEngine;
use crate::extract::PlainTextExtractor;
use crate::integrity::IntegrityLevel;
use crate::pipeline::{
    compare_documents, exit_codes, load_document, should_use_color, write_output, NarrativeMode,
    OutputTarget,
};
use crate::reports::{create_reporter_with_options, CompareResponse};
use anyhow::Result;

/// Run the compare command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
#[allow(clippy::needless_pass_by_value)]
pub fn run_compare(config: CompareConfig) -> Result<i32> {
    let quiet = config.behavior.quiet;
    let extractor = PlainTextExtractor::with_max_bytes(config.limits.max_document_bytes);

    let document_a = load_document(&config.paths.old, &extractor)?;
    let document_b = load_document(&config.paths.new, &extractor)?;

    if !quiet {
        tracing::info!(
            "Loaded {} words from old document, {} from new document",
            document_a.stats.word_count,
            document_b.stats.word_count
        );
    }

    let narrative_mode = if config.behavior.narrative {
        NarrativeMode::Enabled(config.narrative.to_runtime())
    } else {
        NarrativeMode::Disabled
    };

    let engine = StructureDiffEngine::new();
    let response = compare_documents(&engine, &document_a, &document_b, &narrative_mode);

    let exit_code = determine_exit_code(&config, &response);

    let target = OutputTarget::from_option(config.output.file.clone());
    let use_color = should_use_color(config.output.no_color) && target.is_terminal();
    let reporter = create_reporter_with_options(config.output.format, use_color);
    let rendered = reporter.generate_compare_report(&response)?;
    write_output(&rendered, &target, quiet)?;

    Ok(exit_code)
}

/// Determine the appropriate exit code based on comparison results and config flags.
fn determine_exit_code(config: &CompareConfig, response: &CompareResponse) -> i32 {
    if config.behavior.fail_on_low_integrity
        && response.analysis.integrity_assessment.level == IntegrityLevel::Low
    {
        return exit_codes::LOW_INTEGRITY;
    }
    if config.behavior.fail_on_change && response.analysis.has_changes() {
        return exit_codes::CHANGES_DETECTED;
    }
    exit_codes::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompareConfigBuilder;
    use crate::pipeline::{compare_documents, LoadedDocument, NarrativeMode};
    use crate::stats::DocumentStats;
    use std::path::PathBuf;

    fn loaded(label: &str, text: &str) -> LoadedDocument {
        LoadedDocument {
            label: label.to_string(),
            stats: DocumentStats::measure(text),
            preview: crate::extract::preview(text),
            text: text.to_string(),
        }
    }

    fn response_for(text_a: &str, text_b: &str) -> CompareResponse {
        let engine = StructureDiffEngine::new();
        compare_documents(
            &engine,
            &loaded("a.txt", text_a),
            &loaded("b.txt", text_b),
            &NarrativeMode::Disabled,
        )
    }

    fn config_with(fail_on_change: bool, fail_on_low_integrity: bool) -> CompareConfig {
        CompareConfigBuilder::new()
            .old_path(PathBuf::from("a.txt"))
            .new_path(PathBuf::from("b.txt"))
            .fail_on_change(fail_on_change)
            .fail_on_low_integrity(fail_on_low_integrity)
            .build()
            .unwrap()
    }

    const DOC: &str = "1. Scope\nThis policy applies to all staff members of the organization.\n\n2. Definitions\nTerms used throughout this policy are defined in this section.\n";

    #[test]
    fn test_exit_code_success_when_identical() {
        let response = response_for(DOC, DOC);
        let config = config_with(true, true);
        assert_eq!(determine_exit_code(&config, &response), exit_codes::SUCCESS);
    }

    #[test]
    fn test_exit_code_changes_detected() {
        let changed = DOC.replace("all staff members", "permanent staff members only");
        let response = response_for(DOC, &changed);
        assert!(response.analysis.has_changes());

        let config = config_with(true, false);
        assert_eq!(
            determine_exit_code(&config, &response),
            exit_codes::CHANGES_DETECTED
        );

        // Without the flag the same response exits cleanly
        let config = config_with(false, false);
        assert_eq!(determine_exit_code(&config, &response), exit_codes::SUCCESS);
    }

    #[test]
    fn test_exit_code_low_integrity_takes_priority() {
        // Shrinking the document to a stub drives the integrity score down
        let response = response_for(DOC, "1. Scope\nGutted.\n");
        assert_eq!(
            response.analysis.integrity_assessment.level,
            IntegrityLevel::Low
        );

        let config = config_with(true, true);
        assert_eq!(
            determine_exit_code(&config, &response),
            exit_codes::LOW_INTEGRITY
        );
    }
}
