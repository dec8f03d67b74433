//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{CompareResponse, DocumentInspection, ReportError, ReportFormat, ReportGenerator};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_compare_report(
        &self,
        response: &CompareResponse,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        // Header
        lines.push(self.color("Document Comparison Summary", "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        // File info
        lines.push(format!(
            "{}  {} → {}",
            self.color("Files:", "cyan"),
            response.label_a,
            response.label_b
        ));
        lines.push(format!(
            "{}  {} → {} words ({:+.1}%)",
            self.color("Words:", "cyan"),
            response.document_a.word_count,
            response.document_b.word_count,
            response.analysis.statistics.differences.word_percentage
        ));
        lines.push(format!(
            "{}  {} → {}",
            self.color("Sections:", "cyan"),
            response.analysis.structure_a.section_count(),
            response.analysis.structure_b.section_count()
        ));

        if let Some(warning) = &response.validation.warning {
            lines.push(format!("  {}", self.color(warning, "yellow")));
        }

        lines.push(String::new());

        // Changes
        lines.push(self.color("Changes:", "bold"));

        let counts = &response.analysis.content_changes.summary;
        let moved = response.analysis.movements.len();

        if counts.additions > 0 {
            lines.push(format!(
                "  {} {} added",
                self.color(&format!("+{}", counts.additions), "green"),
                if counts.additions == 1 {
                    "section"
                } else {
                    "sections"
                }
            ));
        }
        if counts.deletions > 0 {
            lines.push(format!(
                "  {} {} removed",
                self.color(&format!("-{}", counts.deletions), "red"),
                if counts.deletions == 1 {
                    "section"
                } else {
                    "sections"
                }
            ));
        }
        if counts.modifications > 0 {
            lines.push(format!(
                "  {} {} modified",
                self.color(&format!("~{}", counts.modifications), "yellow"),
                if counts.modifications == 1 {
                    "section"
                } else {
                    "sections"
                }
            ));
        }
        if moved > 0 {
            lines.push(format!(
                "  {} {} moved",
                self.color(&format!(">{moved}"), "cyan"),
                if moved == 1 { "section" } else { "sections" }
            ));
        }
        if counts.additions == 0 && counts.deletions == 0 && counts.modifications == 0 && moved == 0
        {
            lines.push(format!("  {}", self.color("No changes", "dim")));
        }

        // Critical issues subsume the raw red flags
        if !response.analysis.critical_issues.is_empty() {
            lines.push(String::new());
            lines.push(self.color("Critical issues:", "bold"));
            for issue in &response.analysis.critical_issues {
                lines.push(format!(
                    "  {} {}",
                    self.color("!", "red"),
                    issue.message
                ));
            }
        }

        // Score
        lines.push(String::new());
        let integrity = &response.analysis.integrity_assessment;
        let score_color = if integrity.score >= 80 {
            "green"
        } else if integrity.score >= 60 {
            "yellow"
        } else {
            "red"
        };
        lines.push(format!(
            "{}  {}",
            self.color("Integrity:", "cyan"),
            self.color(
                &format!("{}/100 ({})", integrity.score, integrity.level.as_str()),
                score_color
            )
        ));
        lines.push(format!(
            "  {}",
            self.color(&integrity.recommendation, "dim")
        ));

        Ok(lines.join("\n"))
    }

    fn generate_inspect_report(
        &self,
        inspection: &DocumentInspection,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        // Header
        lines.push(self.color("Document Summary", "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        lines.push(format!(
            "{}  {}",
            self.color("File:", "cyan"),
            inspection.label
        ));
        lines.push(format!(
            "{}  {} words, {} characters, {} lines, {} paragraphs",
            self.color("Size:", "cyan"),
            inspection.stats.word_count,
            inspection.stats.char_count,
            inspection.stats.line_count,
            inspection.stats.paragraph_count
        ));

        lines.push(String::new());
        lines.push(format!(
            "{} {}",
            self.color("Sections:", "bold"),
            inspection.section_count
        ));
        for (index, section) in inspection.sections.iter().enumerate() {
            lines.push(format!(
                "  {}. {} {}",
                index + 1,
                section.title,
                self.color(
                    &format!(
                        "(lines {}-{}, {} words)",
                        section.start_line, section.end_line, section.word_count
                    ),
                    "dim"
                )
            ));
        }
        if inspection.sections.is_empty() {
            lines.push(format!(
                "  {}",
                self.color("No headings recognized", "dim")
            ));
        }

        if !inspection.content_types.is_empty() {
            let tallies: Vec<String> = inspection
                .content_types
                .iter()
                .map(|(category, count)| format!("{category}: {count}"))
                .collect();
            lines.push(String::new());
            lines.push(format!(
                "{}  {}",
                self.color("Content types:", "cyan"),
                tallies.join(", ")
            ));
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
