//! Comparison stage: validation, structure diff, narrative, envelope.

use super::load::LoadedDocument;
use crate::diff::StructureDiffEngine;
use crate::narrative::{self, NarrativeConfig};
use crate::reports::{CompareResponse, DocumentProfile};
use crate::validate::validate_pair;
use chrono::Utc;

/// Narrative behavior for one compare run.
#[derive(Debug, Clone)]
pub enum NarrativeMode {
    /// No narrative in the response
    Disabled,
    /// Service when configured, deterministic fallback otherwise
    Enabled(NarrativeConfig),
}

/// Run the full comparison over two loaded documents.
///
/// Byte-identical inputs skip the matching stages and take the fixed
/// identical-documents path; everything else runs the complete engine.
#[must_use]
pub fn compare_documents(
    engine: &StructureDiffEngine,
    document_a: &LoadedDocument,
    document_b: &LoadedDocument,
    narrative_mode: &NarrativeMode,
) -> CompareResponse {
    let validation = validate_pair(&document_a.text, &document_b.text);

    let analysis = if validation.is_identical() {
        engine.identical_report(&document_a.text, &document_a.label, &document_b.label)
    } else {
        engine.compare(
            &document_a.text,
            &document_b.text,
            &document_a.label,
            &document_b.label,
        )
    };

    let narrative = match narrative_mode {
        NarrativeMode::Disabled => None,
        NarrativeMode::Enabled(config) => Some(if validation.is_identical() {
            narrative::identical_narrative(&document_a.label, &document_b.label)
        } else {
            narrative::generate_with_fallback(
                config,
                &analysis,
                &document_a.label,
                &document_b.label,
            )
        }),
    };

    CompareResponse {
        success: true,
        label_a: document_a.label.clone(),
        label_b: document_b.label.clone(),
        document_a: profile_of(document_a),
        document_b: profile_of(document_b),
        validation,
        analysis,
        narrative,
        timestamp: Utc::now(),
    }
}

fn profile_of(document: &LoadedDocument) -> DocumentProfile {
    DocumentProfile {
        word_count: document.stats.word_count,
        char_count: document.stats.char_count,
        preview: document.preview.clone(),
    }
}
