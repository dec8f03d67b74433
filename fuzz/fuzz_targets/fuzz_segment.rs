#![no_main]
use libfuzzer_sys::fuzz_target;
use polidiff::SectionSegmenter;

/// Fuzz the section segmenter.
///
/// Exercises every heading rule and the line scanner; segmentation must be
/// total over arbitrary text and uphold the section ordering invariants.
fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let structure = SectionSegmenter::new().segment(text, "fuzz.txt");
        for section in &structure.sections {
            assert!(section.start_line < section.end_line);
            assert!(!section.title.is_empty());
        }
    }
});
