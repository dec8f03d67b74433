//! Inspection stage: single-document structure view.

use super::load::LoadedDocument;
use crate::reports::DocumentInspection;
use crate::segmenter::SectionSegmenter;
use chrono::Utc;

/// Segment one loaded document and assemble the inspection payload.
#[must_use]
pub fn inspect_document(document: &LoadedDocument) -> DocumentInspection {
    let structure = SectionSegmenter::new().segment(&document.text, &document.label);

    DocumentInspection {
        label: document.label.clone(),
        stats: document.stats,
        section_count: structure.section_count(),
        sections: structure.sections.iter().map(Into::into).collect(),
        content_types: structure.content_types,
        preview: document.preview.clone(),
        timestamp: Utc::now(),
    }
}
