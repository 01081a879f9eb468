//! # Text Comparison
//!
//! File: cli/src/bot/comparison.rs
//! Author: Christi Mahu
//!
//! Similarity scoring between two utterances. The score is a normalized
//! Levenshtein ratio computed on trimmed, lower-cased text:
//!
//! `1.0 - edit_distance / max(len_a, len_b)`
//!
//! so identical strings score `1.0` and completely different strings of the
//! same length score `0.0`. Lengths are counted in `char`s, not bytes.
//!

/// Returns how similar `a` and `b` are, in `[0.0, 1.0]`.
pub fn similarity(a: &str, b: &str) -> f32 {
    let a: Vec<char> = a.trim().to_lowercase().chars().collect();
    let b: Vec<char> = b.trim().to_lowercase().chars().collect();

    let longest = a.len().max(b.len());
    if longest == 0 {
        return 1.0;
    }
    1.0 - levenshtein(&a, &b) as f32 / longest as f32
}

/// Classic two-row edit distance (insertions, deletions, substitutions).
fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != cb);
            let deletion = previous[j + 1] + 1;
            let insertion = current[j] + 1;
            current[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}
