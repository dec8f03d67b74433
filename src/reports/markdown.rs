//! Markdown report generator.
//!
//! Produces a shareable document: summary bullets up top, then the change
//! detail tables, the integrity verdict, and the narrative when one was
//! generated.

use super::{CompareResponse, DocumentInspection, ReportError, ReportFormat, ReportGenerator};
use std::fmt::Write;

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate_compare_report(
        &self,
        response: &CompareResponse,
    ) -> Result<String, ReportError> {
        let mut out = String::new();
        let analysis = &response.analysis;

        writeln!(out, "# Document Comparison Report")?;
        writeln!(out)?;
        writeln!(
            out,
            "**Old:** {} ({} words)  ",
            response.label_a, response.document_a.word_count
        )?;
        writeln!(
            out,
            "**New:** {} ({} words)  ",
            response.label_b, response.document_b.word_count
        )?;
        writeln!(
            out,
            "**Generated:** {}",
            response.timestamp.format("%Y-%m-%d %H:%M UTC")
        )?;

        writeln!(out)?;
        writeln!(out, "## Summary")?;
        writeln!(out)?;
        for line in &analysis.change_summary {
            writeln!(out, "- {line}")?;
        }

        if let Some(warning) = &response.validation.warning {
            writeln!(out)?;
            writeln!(out, "> {warning}")?;
        }

        let changes = &analysis.content_changes;
        if !changes.added_sections.is_empty() {
            writeln!(out)?;
            writeln!(out, "## Added sections")?;
            writeln!(out)?;
            for title in &changes.added_sections {
                writeln!(out, "- {title}")?;
            }
        }

        if !changes.removed_sections.is_empty() {
            writeln!(out)?;
            writeln!(out, "## Removed sections")?;
            writeln!(out)?;
            for title in &changes.removed_sections {
                writeln!(out, "- {title}")?;
            }
        }

        if !changes.modified_sections.is_empty() {
            writeln!(out)?;
            writeln!(out, "## Modified sections")?;
            writeln!(out)?;
            writeln!(out, "| Section | Similarity | Words |")?;
            writeln!(out, "|---------|-----------|-------|")?;
            for modified in &changes.modified_sections {
                writeln!(
                    out,
                    "| {} | {:.0}% | {} → {} |",
                    modified.title,
                    modified.similarity_ratio * 100.0,
                    modified.old_word_count,
                    modified.new_word_count
                )?;
            }
        }

        if !analysis.movements.is_empty() {
            writeln!(out)?;
            writeln!(out, "## Moved sections")?;
            writeln!(out)?;
            writeln!(out, "| Section | Position | Impact |")?;
            writeln!(out, "|---------|----------|--------|")?;
            for movement in &analysis.movements {
                writeln!(
                    out,
                    "| {} | {} → {} | {} |",
                    movement.title,
                    movement.old_position + 1,
                    movement.new_position + 1,
                    movement.impact.as_str()
                )?;
            }
        }

        let integrity = &analysis.integrity_assessment;
        writeln!(out)?;
        writeln!(out, "## Comparison integrity")?;
        writeln!(out)?;
        writeln!(
            out,
            "**Score:** {}/100 ({})",
            integrity.score,
            integrity.level.as_str()
        )?;
        if !integrity.warnings.is_empty() {
            writeln!(out)?;
            for warning in &integrity.warnings {
                writeln!(out, "- {warning}")?;
            }
        }
        writeln!(out)?;
        writeln!(out, "> {}", integrity.recommendation)?;

        if !analysis.critical_issues.is_empty() {
            writeln!(out)?;
            writeln!(out, "## Critical issues")?;
            writeln!(out)?;
            for issue in &analysis.critical_issues {
                writeln!(
                    out,
                    "- **{}**: {} _({})_",
                    issue.severity, issue.message, issue.action_required
                )?;
            }
        }

        if let Some(narrative) = &response.narrative {
            writeln!(out)?;
            writeln!(out, "## Narrative")?;
            writeln!(out)?;
            writeln!(out, "{narrative}")?;
        }

        writeln!(out)?;
        writeln!(out, "---")?;
        writeln!(
            out,
            "_Generated by polidiff v{}_",
            env!("CARGO_PKG_VERSION")
        )?;

        Ok(out)
    }

    fn generate_inspect_report(
        &self,
        inspection: &DocumentInspection,
    ) -> Result<String, ReportError> {
        let mut out = String::new();

        writeln!(out, "# Document Structure: {}", inspection.label)?;
        writeln!(out)?;
        writeln!(
            out,
            "**Words:** {} | **Characters:** {} | **Lines:** {} | **Paragraphs:** {}",
            inspection.stats.word_count,
            inspection.stats.char_count,
            inspection.stats.line_count,
            inspection.stats.paragraph_count
        )?;

        writeln!(out)?;
        writeln!(out, "## Sections ({})", inspection.section_count)?;
        writeln!(out)?;
        if inspection.sections.is_empty() {
            writeln!(out, "No headings recognized.")?;
        } else {
            writeln!(out, "| # | Title | Lines | Words |")?;
            writeln!(out, "|---|-------|-------|-------|")?;
            for (index, section) in inspection.sections.iter().enumerate() {
                writeln!(
                    out,
                    "| {} | {} | {}-{} | {} |",
                    index + 1,
                    section.title,
                    section.start_line,
                    section.end_line,
                    section.word_count
                )?;
            }
        }

        if !inspection.content_types.is_empty() {
            writeln!(out)?;
            writeln!(out, "## Content types")?;
            writeln!(out)?;
            for (category, count) in &inspection.content_types {
                writeln!(out, "- {category}: {count}")?;
            }
        }

        writeln!(out)?;
        writeln!(out, "---")?;
        writeln!(
            out,
            "_Generated by polidiff v{}_",
            env!("CARGO_PKG_VERSION")
        )?;

        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}
