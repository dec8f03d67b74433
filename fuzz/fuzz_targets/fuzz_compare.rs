#![no_main]
use libfuzzer_sys::fuzz_target;
use polidiff::StructureDiffEngine;

/// Fuzz the full comparison pipeline.
///
/// The input is split at its midpoint into the two documents, so the engine
/// sees pairs that range from identical to unrelated. `compare` is total and
/// the score must stay within its band.
fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let mid = (0..=text.len()).find(|&i| text.is_char_boundary(i) && i >= text.len() / 2);
        if let Some(mid) = mid {
            let (a, b) = text.split_at(mid);
            let engine = StructureDiffEngine::new();
            let report = engine.compare(a, b, "a.txt", "b.txt");
            assert!(report.integrity_assessment.score <= 100);
        }
    }
});
