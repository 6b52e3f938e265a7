//! Shortest path over the word lattice
//!
//! Positions `0..=n` (characters) are lattice vertices. An edge `(i, j)`
//! exists when `text[i..j]` is a lexicon entry; a vertex without any
//! dictionary edge gets a single-character fallback edge `(i, i + 1)`.
//!
//! The search runs right to left: `cost[i]` is the fewest words needed to
//! cover `text[i..]`. Scanning candidate ends from longest to shortest and
//! only replacing on a strict improvement keeps the longest word whenever
//! several ends tie, which makes the forward reconstruction leftmost-longest.

use crate::lexicon::Lexicon;
use smallvec::SmallVec;

/// Append the word-end offsets of the best segmentation of `text` to `out`
///
/// Offsets are bytes shifted by `base`. Nothing is pushed for empty text.
pub(super) fn shortest_path(
    lexicon: &Lexicon,
    text: &str,
    base: usize,
    out: &mut SmallVec<[usize; 16]>,
) {
    // Byte offset of every vertex, including the final one
    let positions: Vec<usize> = text
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(text.len()))
        .collect();
    let n = positions.len() - 1;
    if n == 0 {
        return;
    }

    let max_word = lexicon.max_word_chars();
    let mut cost = vec![0usize; n + 1];
    let mut next = vec![0usize; n + 1];

    for i in (0..n).rev() {
        let mut best: Option<(usize, usize)> = None;
        let limit = (i + max_word).min(n);

        for j in (i + 1..=limit).rev() {
            if !lexicon.contains(&text[positions[i]..positions[j]]) {
                continue;
            }
            let candidate = cost[j] + 1;
            if best.map_or(true, |(best_cost, _)| candidate < best_cost) {
                best = Some((candidate, j));
            }
        }

        let (best_cost, best_end) = best.unwrap_or((cost[i + 1] + 1, i + 1));
        cost[i] = best_cost;
        next[i] = best_end;
    }

    let mut vertex = 0;
    while vertex < n {
        vertex = next[vertex];
        out.push(base + positions[vertex]);
    }
}
