//! Synthetic embedding-space generation
//!
//! Builds the immutable word-galaxy dataset: every word gets a 3D position
//! sampled uniformly inside its cluster's sphere, a placeholder 100-dim
//! vector, and a short list of same-cluster neighbors. The numbers are
//! synthetic stand-ins for a real UMAP/GloVe pipeline; only the structure
//! (which word, which cluster, which neighbors) is meaningful.

use crate::config::SpaceConfig;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Length of the synthetic per-word vector
pub const VECTOR_DIM: usize = 100;

/// Maximum number of neighbors attached to each word
pub const MAX_NEIGHBORS: usize = 8;

/// Similarity scores are sampled uniformly from this half-open range
pub const SIMILARITY_RANGE: (f32, f32) = (0.7, 0.95);

/// A related word with a similarity score in [0.7, 0.95)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Neighbor {
    pub word: String,
    pub similarity: f32,
}

/// One word's full record in the generated space
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordEntry {
    /// Unique key across the whole dataset
    pub word: String,
    /// Id of the cluster this word belongs to
    pub cluster_id: String,
    /// Position inside the cluster's sphere
    pub position: [f64; 3],
    /// Synthetic placeholder vector, values in [-1, 1)
    pub vector: Vec<f32>,
    /// Same-cluster neighbors in word-list order.
    /// Not sorted by similarity; the scores are assigned after selection.
    pub neighbors: Vec<Neighbor>,
}

/// Sample a point uniformly from the volume of a sphere.
///
/// Azimuth is uniform in [0, 2π); the polar angle uses `acos(2u - 1)` so the
/// direction is uniform over the sphere surface instead of bunching at the
/// poles; the radius uses a cube root so density is uniform over the volume
/// instead of concentrating near the center.
pub fn sample_in_sphere(center: [f64; 3], radius: f64, rng: &mut impl Rng) -> [f64; 3] {
    let theta = rng.gen_range(0.0..std::f64::consts::TAU);
    let phi = (2.0 * rng.gen::<f64>() - 1.0).acos();
    let r = radius * rng.gen::<f64>().cbrt();

    [
        center[0] + r * phi.sin() * theta.cos(),
        center[1] + r * phi.sin() * theta.sin(),
        center[2] + r * phi.cos(),
    ]
}

/// Generate the full dataset from a validated layout.
///
/// One entry per (cluster, word) pair: clusters in configuration order, words
/// in their configured order. Structure is deterministic; positions, vectors
/// and similarities depend on the supplied rng, so a seeded rng gives exact
/// reproducibility while `thread_rng` gives fresh numbers per run.
pub fn generate(config: &SpaceConfig, rng: &mut impl Rng) -> Vec<WordEntry> {
    let mut entries = Vec::with_capacity(config.word_count());

    for cluster in &config.clusters {
        for word in &cluster.words {
            let position = sample_in_sphere(cluster.center, config.spread as f64, rng);

            let vector: Vec<f32> = (0..VECTOR_DIM)
                .map(|_| rng.gen_range(-1.0f32..1.0))
                .collect();

            // First MAX_NEIGHBORS other words from the same cluster, in list
            // order. A word never neighbors itself.
            let neighbors: Vec<Neighbor> = cluster
                .words
                .iter()
                .filter(|w| *w != word)
                .take(MAX_NEIGHBORS)
                .map(|w| Neighbor {
                    word: w.clone(),
                    similarity: rng.gen_range(SIMILARITY_RANGE.0..SIMILARITY_RANGE.1),
                })
                .collect();

            entries.push(WordEntry {
                word: word.clone(),
                cluster_id: cluster.id.clone(),
                position,
                vector,
                neighbors,
            });
        }

        debug!(
            cluster = %cluster.id,
            words = cluster.words.len(),
            "generated cluster"
        );
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::{HashMap, HashSet};

    fn generate_seeded(seed: u64) -> (SpaceConfig, Vec<WordEntry>) {
        let config = SpaceConfig::builtin();
        let mut rng = StdRng::seed_from_u64(seed);
        let entries = generate(&config, &mut rng);
        (config, entries)
    }

    #[test]
    fn test_one_entry_per_configured_word() {
        let (config, entries) = generate_seeded(7);
        assert_eq!(entries.len(), config.word_count());

        // Dataset order is cluster order, then word order within each cluster.
        let expected: Vec<(&str, &str)> = config
            .clusters
            .iter()
            .flat_map(|c| c.words.iter().map(move |w| (w.as_str(), c.id.as_str())))
            .collect();
        let actual: Vec<(&str, &str)> = entries
            .iter()
            .map(|e| (e.word.as_str(), e.cluster_id.as_str()))
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_words_globally_unique() {
        let (_, entries) = generate_seeded(7);
        let unique: HashSet<&str> = entries.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(unique.len(), entries.len(), "No two entries share a word");
    }

    #[test]
    fn test_positions_within_spread() {
        let (config, entries) = generate_seeded(11);
        let centers: HashMap<&str, [f64; 3]> = config
            .clusters
            .iter()
            .map(|c| (c.id.as_str(), c.center))
            .collect();

        for entry in &entries {
            let center = centers[entry.cluster_id.as_str()];
            let dx = entry.position[0] - center[0];
            let dy = entry.position[1] - center[1];
            let dz = entry.position[2] - center[2];
            let distance = (dx * dx + dy * dy + dz * dz).sqrt();
            assert!(
                distance <= config.spread as f64 + 1e-9,
                "'{}' lies {} from its center, spread is {}",
                entry.word,
                distance,
                config.spread
            );
        }
    }

    #[test]
    fn test_vector_shape_and_range() {
        let (_, entries) = generate_seeded(13);
        for entry in &entries {
            assert_eq!(entry.vector.len(), VECTOR_DIM);
            for &value in &entry.vector {
                assert!(
                    (-1.0..1.0).contains(&value),
                    "'{}' has vector value {} outside [-1, 1)",
                    entry.word,
                    value
                );
            }
        }
    }

    #[test]
    fn test_neighbor_invariants() {
        let (_, entries) = generate_seeded(17);
        let all_words: HashSet<&str> = entries.iter().map(|e| e.word.as_str()).collect();

        for entry in &entries {
            assert!(entry.neighbors.len() <= MAX_NEIGHBORS);
            for neighbor in &entry.neighbors {
                assert_ne!(
                    neighbor.word, entry.word,
                    "'{}' should not be its own neighbor",
                    entry.word
                );
                assert!(
                    all_words.contains(neighbor.word.as_str()),
                    "Neighbor '{}' of '{}' should exist in the dataset",
                    neighbor.word,
                    entry.word
                );
                assert!(
                    (SIMILARITY_RANGE.0..SIMILARITY_RANGE.1).contains(&neighbor.similarity),
                    "Similarity {} outside [0.7, 0.95)",
                    neighbor.similarity
                );
            }
        }
    }

    #[test]
    fn test_neighbors_follow_word_list_order() {
        let (config, entries) = generate_seeded(19);
        let cluster = &config.clusters[0];
        let entry = &entries[0];
        // For the first word, neighbors are simply the next MAX_NEIGHBORS words.
        let expected: Vec<&str> = cluster.words[1..=MAX_NEIGHBORS]
            .iter()
            .map(String::as_str)
            .collect();
        let actual: Vec<&str> = entry.neighbors.iter().map(|n| n.word.as_str()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_structure_stable_across_runs() {
        let (_, a) = generate_seeded(1);
        let (_, b) = generate_seeded(2);

        assert_eq!(a.len(), b.len());
        for (ea, eb) in a.iter().zip(&b) {
            assert_eq!(ea.word, eb.word);
            assert_eq!(ea.cluster_id, eb.cluster_id);
            let na: Vec<&str> = ea.neighbors.iter().map(|n| n.word.as_str()).collect();
            let nb: Vec<&str> = eb.neighbors.iter().map(|n| n.word.as_str()).collect();
            assert_eq!(na, nb, "Neighbor word sets should not depend on the rng");
        }
        // Different seeds should produce different numeric content somewhere.
        assert!(
            a.iter().zip(&b).any(|(ea, eb)| ea.position != eb.position),
            "Two differently seeded runs should not agree on every position"
        );
    }

    #[test]
    fn test_same_seed_reproduces_exactly() {
        let (_, a) = generate_seeded(42);
        let (_, b) = generate_seeded(42);
        for (ea, eb) in a.iter().zip(&b) {
            assert_eq!(ea.position, eb.position);
            assert_eq!(ea.vector, eb.vector);
            let sa: Vec<f32> = ea.neighbors.iter().map(|n| n.similarity).collect();
            let sb: Vec<f32> = eb.neighbors.iter().map(|n| n.similarity).collect();
            assert_eq!(sa, sb);
        }
    }

    #[test]
    fn test_sample_in_sphere_stays_inside() {
        let mut rng = StdRng::seed_from_u64(5);
        let center = [1.0, -2.0, 3.0];
        for _ in 0..1000 {
            let p = sample_in_sphere(center, 2.5, &mut rng);
            let d2 = (p[0] - center[0]).powi(2)
                + (p[1] - center[1]).powi(2)
                + (p[2] - center[2]).powi(2);
            assert!(d2.sqrt() <= 2.5 + 1e-9);
        }
    }

    #[test]
    fn test_entries_serialize_to_json() {
        let (_, entries) = generate_seeded(3);
        let json = serde_json::to_string(&entries[0]).expect("serialize");
        let parsed: WordEntry = serde_json::from_str(&json).expect("parse");
        assert_eq!(parsed.word, entries[0].word);
        assert_eq!(parsed.vector.len(), VECTOR_DIM);
    }
}
