//! Space layout configuration
//!
//! Defines the fixed set of semantic clusters, each with a display color,
//! a word list and a 3D center. The built-in layout is compiled in; an
//! alternate layout can be loaded from a TOML file with `--config`.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default radius of the spherical region a cluster's words are placed in
pub const DEFAULT_SPREAD: f32 = 4.0;

/// A named semantic cluster of words
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cluster {
    /// Short unique identifier (e.g. "animals")
    pub id: String,
    /// Display label (e.g. "Animals")
    pub name: String,
    /// Display color as a hex string (e.g. "#34d399")
    pub color: String,
    /// One-line description shown in cluster legends
    #[serde(default)]
    pub description: String,
    /// Center of the cluster's spatial region
    pub center: [f64; 3],
    /// Words belonging to this cluster, in display order
    pub words: Vec<String>,
}

/// The full space layout: every cluster plus the shared spread radius
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpaceConfig {
    /// Radius of the sphere words are sampled in, around each cluster center
    #[serde(default = "default_spread")]
    pub spread: f32,
    pub clusters: Vec<Cluster>,
}

fn default_spread() -> f32 {
    DEFAULT_SPREAD
}

/// Contract violations in a space layout.
/// These are configuration-time failures, not runtime errors: a layout that
/// fails validation is rejected at startup before anything is generated.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("layout has no clusters")]
    NoClusters,
    #[error("cluster '{0}' has an empty id")]
    EmptyClusterId(String),
    #[error("duplicate cluster id '{0}'")]
    DuplicateClusterId(String),
    #[error("cluster '{0}' has no words")]
    EmptyCluster(String),
    #[error("word '{word}' appears in more than one cluster (second: '{cluster}')")]
    DuplicateWord { word: String, cluster: String },
    #[error("spread must be positive (got {0})")]
    InvalidSpread(f32),
    #[error("failed to read layout file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse layout file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl SpaceConfig {
    /// Load a layout from a TOML file and validate it
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        let config: SpaceConfig = toml::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the layout invariants: non-empty cluster set, unique cluster ids,
    /// non-empty word lists, globally unique words, positive spread.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.clusters.is_empty() {
            return Err(ConfigError::NoClusters);
        }
        if !(self.spread > 0.0) {
            return Err(ConfigError::InvalidSpread(self.spread));
        }

        let mut cluster_ids = HashSet::new();
        let mut seen_words: HashSet<&str> = HashSet::new();
        for cluster in &self.clusters {
            if cluster.id.trim().is_empty() {
                return Err(ConfigError::EmptyClusterId(cluster.name.clone()));
            }
            if !cluster_ids.insert(cluster.id.as_str()) {
                return Err(ConfigError::DuplicateClusterId(cluster.id.clone()));
            }
            if cluster.words.is_empty() {
                return Err(ConfigError::EmptyCluster(cluster.id.clone()));
            }
            for word in &cluster.words {
                if !seen_words.insert(word.as_str()) {
                    return Err(ConfigError::DuplicateWord {
                        word: word.clone(),
                        cluster: cluster.id.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Look up a cluster by its id. Returns `None` for unknown ids.
    pub fn cluster_by_id(&self, id: &str) -> Option<&Cluster> {
        self.clusters.iter().find(|c| c.id == id)
    }

    /// Total number of words across all clusters
    pub fn word_count(&self) -> usize {
        self.clusters.iter().map(|c| c.words.len()).sum()
    }

    /// The compiled-in default layout: eight semantic clusters spread out
    /// for visibility, word lists curated so no word repeats across clusters.
    pub fn builtin() -> Self {
        let cluster = |id: &str,
                       name: &str,
                       color: &str,
                       description: &str,
                       center: [f64; 3],
                       words: &[&str]| Cluster {
            id: id.to_string(),
            name: name.to_string(),
            color: color.to_string(),
            description: description.to_string(),
            center,
            words: words.iter().map(|w| w.to_string()).collect(),
        };

        SpaceConfig {
            spread: DEFAULT_SPREAD,
            clusters: vec![
                cluster(
                    "royalty",
                    "Royalty & Power",
                    "#fbbf24",
                    "Words related to monarchy, power, and governance",
                    [15.0, 12.0, 8.0],
                    &[
                        "king", "queen", "prince", "princess", "throne", "crown", "palace",
                        "royal", "monarch", "emperor", "empress", "kingdom", "dynasty", "reign",
                        "sovereign", "duke", "duchess", "baron", "knight", "noble", "aristocrat",
                        "majesty", "coronation", "scepter", "castle", "court", "heir", "ruler",
                        "lordship",
                    ],
                ),
                cluster(
                    "animals",
                    "Animals",
                    "#34d399",
                    "Animal species and related terms",
                    [-12.0, -8.0, 15.0],
                    &[
                        "dog", "cat", "lion", "tiger", "elephant", "bird", "fish", "wolf",
                        "bear", "horse", "eagle", "shark", "whale", "dolphin", "monkey", "snake",
                        "rabbit", "deer", "fox", "owl", "penguin", "giraffe", "zebra", "leopard",
                        "panther", "gorilla", "cheetah", "hippo", "rhino",
                    ],
                ),
                cluster(
                    "technology",
                    "Technology",
                    "#60a5fa",
                    "Computing, software, and digital concepts",
                    [8.0, 18.0, -10.0],
                    &[
                        "computer", "software", "algorithm", "data", "neural", "network",
                        "code", "program", "digital", "internet", "server", "database", "cloud",
                        "machine", "artificial", "intelligence", "robot", "processor", "memory",
                        "binary", "encryption", "protocol", "bandwidth", "pixel", "virtual",
                        "cyber", "tech",
                    ],
                ),
                cluster(
                    "emotions",
                    "Emotions",
                    "#f472b6",
                    "Human feelings and emotional states",
                    [-15.0, 5.0, -12.0],
                    &[
                        "happy", "sad", "angry", "fear", "love", "joy", "peace", "anxiety",
                        "hope", "excitement", "grief", "despair", "bliss", "rage", "calm",
                        "nervous", "proud", "shame", "guilt", "envy", "jealousy", "trust",
                        "surprise", "disgust", "content", "lonely", "grateful", "inspired",
                    ],
                ),
                cluster(
                    "nature",
                    "Nature",
                    "#4ade80",
                    "Natural world, geography, and elements",
                    [12.0, -15.0, 5.0],
                    &[
                        "tree", "river", "mountain", "ocean", "forest", "sky", "sun", "moon",
                        "star", "flower", "lake", "desert", "valley", "cliff", "waterfall",
                        "meadow", "jungle", "volcano", "canyon", "glacier", "reef", "island",
                        "cave", "plains", "tundra", "rainforest", "savanna", "marsh", "beach",
                    ],
                ),
                cluster(
                    "science",
                    "Science",
                    "#a78bfa",
                    "Scientific concepts and research",
                    [-8.0, 15.0, 12.0],
                    &[
                        "physics", "chemistry", "biology", "mathematics", "astronomy",
                        "geology", "quantum", "molecule", "atom", "particle", "gravity",
                        "energy", "mass", "velocity", "electron", "proton", "neutron",
                        "hypothesis", "theory", "experiment", "research", "laboratory",
                        "equation", "formula", "discovery",
                    ],
                ),
                cluster(
                    "food",
                    "Food & Drink",
                    "#fb923c",
                    "Culinary items and beverages",
                    [-18.0, -12.0, -8.0],
                    &[
                        "bread", "rice", "meat", "fruit", "vegetable", "water", "milk",
                        "cheese", "pasta", "soup", "salad", "pizza", "burger", "chicken",
                        "beef", "honey", "wine", "coffee", "tea", "juice", "cake", "chocolate",
                        "ice", "cream", "butter", "egg", "sugar", "salt", "pepper", "sauce",
                    ],
                ),
                cluster(
                    "sports",
                    "Sports",
                    "#f87171",
                    "Athletic activities and games",
                    [18.0, -5.0, -15.0],
                    &[
                        "football", "basketball", "soccer", "tennis", "baseball", "hockey",
                        "golf", "swimming", "running", "cycling", "boxing", "wrestling",
                        "volleyball", "cricket", "rugby", "skiing", "skating", "surfing",
                        "climbing", "marathon", "sprint", "champion", "athlete", "coach",
                        "team",
                    ],
                ),
            ],
        }
    }
}
