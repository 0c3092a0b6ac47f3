//! Built-in demonstration analogies
//!
//! Classic word-vector analogies shown alongside the galaxy. They are fixed
//! display data, not computed from the synthetic vectors; the resolver only
//! reports which of the involved words exist in a generated dataset.

use crate::query::find_word;
use crate::space::WordEntry;
use serde::{Deserialize, Serialize};

/// A famous word-vector analogy, e.g. "king - man + woman = queen"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analogy {
    /// Human-readable equation
    pub equation: String,
    /// Every word participating in the equation
    pub words: Vec<String>,
    /// The word on the right-hand side
    pub result: String,
}

impl Analogy {
    /// Words of this analogy that are absent from the dataset
    pub fn missing_words<'a>(&'a self, entries: &[WordEntry]) -> Vec<&'a str> {
        self.words
            .iter()
            .map(String::as_str)
            .filter(|w| find_word(w, entries).is_none())
            .collect()
    }

    /// True when every participating word exists in the dataset
    pub fn is_resolvable(&self, entries: &[WordEntry]) -> bool {
        self.missing_words(entries).is_empty()
    }
}

/// The fixed demonstration analogies
pub fn builtin_analogies() -> Vec<Analogy> {
    let analogy = |equation: &str, words: &[&str], result: &str| Analogy {
        equation: equation.to_string(),
        words: words.iter().map(|w| w.to_string()).collect(),
        result: result.to_string(),
    };

    vec![
        analogy(
            "king - man + woman = queen",
            &["king", "man", "woman", "queen"],
            "queen",
        ),
        analogy(
            "paris - france + italy = rome",
            &["paris", "france", "italy", "rome"],
            "rome",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SpaceConfig;
    use crate::space::generate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_builtin_analogies_well_formed() {
        for analogy in builtin_analogies() {
            assert!(!analogy.words.is_empty());
            assert!(
                analogy.words.contains(&analogy.result),
                "Result '{}' should appear among the analogy's words",
                analogy.result
            );
        }
    }

    #[test]
    fn test_missing_words_against_builtin_layout() {
        let config = SpaceConfig::builtin();
        let mut rng = StdRng::seed_from_u64(1);
        let entries = generate(&config, &mut rng);

        let analogies = builtin_analogies();
        // "king" and "queen" are in the royalty cluster; "man"/"woman" are not
        // part of the layout, so the first analogy is only partially covered.
        let missing = analogies[0].missing_words(&entries);
        assert!(missing.contains(&"man"));
        assert!(missing.contains(&"woman"));
        assert!(!missing.contains(&"king"));
        assert!(!analogies[0].is_resolvable(&entries));
    }
}
