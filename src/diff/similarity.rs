//! Sequence similarity for section bodies.
//!
//! Implements the Ratcliff/Obershelp ratio: recursively take the longest
//! common block, then match the pieces on either side, and score
//! `2 * matched / (len_a + len_b)`. The recursion is run iteratively on an
//! explicit work list so deeply fragmented bodies cannot overflow the stack.
//!
//! Bodies up to [`MAX_RATIO_CHARS`] characters are compared character by
//! character. Longer bodies fall back to whitespace tokens, which keeps the
//! quadratic matching step bounded while preserving ordering sensitivity.

use std::collections::HashMap;
use std::hash::Hash;

/// Character-mode cutoff. Either body exceeding this switches the pair to
/// token mode.
pub const MAX_RATIO_CHARS: usize = 4096;

/// Similarity of two section bodies in `[0.0, 1.0]`.
///
/// Equal bodies short-circuit to 1.0 without collecting either sequence.
#[must_use]
pub fn body_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }

    let chars_a: Vec<char> = a.chars().collect();
    let chars_b: Vec<char> = b.chars().collect();
    if chars_a.len() <= MAX_RATIO_CHARS && chars_b.len() <= MAX_RATIO_CHARS {
        sequence_ratio(&chars_a, &chars_b)
    } else {
        let tokens_a: Vec<&str> = a.split_whitespace().collect();
        let tokens_b: Vec<&str> = b.split_whitespace().collect();
        sequence_ratio(&tokens_a, &tokens_b)
    }
}

/// Ratcliff/Obershelp ratio over two element sequences.
///
/// Two empty sequences compare as 1.0.
#[must_use]
pub fn sequence_ratio<T: Eq + Hash>(a: &[T], b: &[T]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    // Element -> ascending positions in b.
    let mut positions: HashMap<&T, Vec<usize>> = HashMap::new();
    for (j, item) in b.iter().enumerate() {
        positions.entry(item).or_default().push(j);
    }

    let mut matched = 0usize;
    let mut regions = vec![(0usize, a.len(), 0usize, b.len())];
    while let Some((alo, ahi, blo, bhi)) = regions.pop() {
        let (besti, bestj, size) = longest_match(a, &positions, alo, ahi, blo, bhi);
        if size > 0 {
            matched += size;
            regions.push((alo, besti, blo, bestj));
            regions.push((besti + size, ahi, bestj + size, bhi));
        }
    }

    2.0 * matched as f64 / total as f64
}

/// Longest common block within `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Ties resolve to the earliest start in `a`, then the earliest in `b`.
fn longest_match<T: Eq + Hash>(
    a: &[T],
    positions: &HashMap<&T, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let mut besti = alo;
    let mut bestj = blo;
    let mut best_size = 0usize;

    // run_lengths[j] is the length of the common run ending at (i, j).
    let mut run_lengths: HashMap<usize, usize> = HashMap::new();
    for i in alo..ahi {
        let mut next_runs: HashMap<usize, usize> = HashMap::new();
        if let Some(indices) = positions.get(&a[i]) {
            for &j in indices {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let len = j
                    .checked_sub(1)
                    .and_then(|prev| run_lengths.get(&prev))
                    .copied()
                    .unwrap_or(0)
                    + 1;
                next_runs.insert(j, len);
                if len > best_size {
                    besti = i + 1 - len;
                    bestj = j + 1 - len;
                    best_size = len;
                }
            }
        }
        run_lengths = next_runs;
    }

    (besti, bestj, best_size)
}
