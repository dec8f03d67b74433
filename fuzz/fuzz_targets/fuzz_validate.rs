#![no_main]
use libfuzzer_sys::fuzz_target;
use polidiff::validate::validate_pair;

/// Fuzz pair validation.
///
/// Exercises the byte-equality fast path, the Levenshtein scorer, and the
/// token-overlap fallback; similarity must stay within the unit interval.
fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let mid = (0..=text.len()).find(|&i| text.is_char_boundary(i) && i >= text.len() / 2);
        if let Some(mid) = mid {
            let (a, b) = text.split_at(mid);
            let report = validate_pair(a, b);
            assert!((0.0..=1.0).contains(&report.similarity));
        }
    }
});
