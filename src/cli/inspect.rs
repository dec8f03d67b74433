//! Inspect command handler.
//!
//! Implements the `inspect` subcommand for viewing the recognized structure
//! of a single policy document.

use crate::config::InspectConfig;
use crate::extract::PlainTextExtractor;
use crate::pipeline::{
    exit_codes, inspect_document, load_document, should_use_color, write_output, OutputTarget,
};
use crate::reports::create_reporter_with_options;
use anyhow::Result;

/// Run the inspect command, returning the desired exit code.
#[allow(clippy::needless_pass_by_value)]
pub fn run_inspect(config: InspectConfig) -> Result<i32> {
    let quiet = config.behavior.quiet;
    let extractor = PlainTextExtractor::with_max_bytes(config.limits.max_document_bytes);

    let document = load_document(&config.path, &extractor)?;
    let inspection = inspect_document(&document);

    if !quiet {
        tracing::info!(
            "Recognized {} sections in {}",
            inspection.section_count,
            inspection.label
        );
    }

    let target = OutputTarget::from_option(config.output.file.clone());
    let use_color = should_use_color(config.output.no_color) && target.is_terminal();
    let reporter = create_reporter_with_options(config.output.format, use_color);
    let rendered = reporter.generate_inspect_report(&inspection)?;
    write_output(&rendered, &target, quiet)?;

    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use crate::pipeline::OutputTarget;
    use std::path::PathBuf;

    #[test]
    fn test_output_target_conversion() {
        let none_target = OutputTarget::from_option(None);
        assert!(matches!(none_target, OutputTarget::Stdout));

        let some_target = OutputTarget::from_option(Some(PathBuf::from("/tmp/report.json")));
        assert!(matches!(some_target, OutputTarget::File(_)));
    }
}
