//! Read-only queries over a generated dataset
//!
//! Everything here is a pure function over the immutable entry list produced
//! by `space::generate`; nothing mutates, so callers can share the dataset
//! freely.

use crate::space::{Neighbor, WordEntry};

/// Maximum number of results returned by `search`
pub const SEARCH_LIMIT: usize = 10;

/// Case-insensitive substring search over words.
///
/// Matches are returned in dataset order (not ranked by relevance) and
/// truncated to `SEARCH_LIMIT`. An empty query matches every word, so it
/// degenerates to "the first 10 entries" — callers driving a search box
/// should gate on non-empty input rather than rely on this.
pub fn search<'a>(query: &str, entries: &'a [WordEntry]) -> Vec<&'a WordEntry> {
    let query = query.to_lowercase();
    entries
        .iter()
        .filter(|e| e.word.to_lowercase().contains(&query))
        .take(SEARCH_LIMIT)
        .collect()
}

/// Coordinate-wise mean position of a cluster's members.
///
/// Returns `None` when no entry belongs to the cluster, so an unknown or
/// empty cluster never divides by zero.
pub fn cluster_centroid(cluster_id: &str, entries: &[WordEntry]) -> Option<[f64; 3]> {
    let mut sum = [0.0f64; 3];
    let mut count = 0u32;

    for entry in entries.iter().filter(|e| e.cluster_id == cluster_id) {
        sum[0] += entry.position[0];
        sum[1] += entry.position[1];
        sum[2] += entry.position[2];
        count += 1;
    }

    if count == 0 {
        return None;
    }
    let n = count as f64;
    Some([sum[0] / n, sum[1] / n, sum[2] / n])
}

/// Find a word's entry by exact (case-insensitive) key
pub fn find_word<'a>(word: &str, entries: &'a [WordEntry]) -> Option<&'a WordEntry> {
    entries.iter().find(|e| e.word.eq_ignore_ascii_case(word))
}

/// A word's precomputed neighbor list, or `None` for an unknown word
pub fn neighbors_of<'a>(word: &str, entries: &'a [WordEntry]) -> Option<&'a [Neighbor]> {
    find_word(word, entries).map(|e| e.neighbors.as_slice())
}
