//! # Valence Lexicon
//!
//! General-purpose sentiment lexicon for rule-based polarity scoring of
//! short social-media text.

use std::collections::HashMap;

/// Sentiment valence lexicon
///
/// Maps words to a valence in [-1, 1], with negation words that flip the
/// valence of the following sentiment word and intensifiers that scale it.
pub struct ValenceLexicon {
    /// Word to valence mapping
    words: HashMap<String, f64>,
    /// Negation words
    negations: Vec<String>,
    /// Intensifier words
    intensifiers: HashMap<String, f64>,
}

impl Default for ValenceLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl ValenceLexicon {
    /// Create a new lexicon with the default word list
    pub fn new() -> Self {
        let mut words = HashMap::new();

        // Positive terms
        let positive_words = vec![
            ("good", 0.5),
            ("great", 0.7),
            ("awesome", 0.8),
            ("amazing", 0.8),
            ("excellent", 0.8),
            ("wonderful", 0.7),
            ("fantastic", 0.8),
            ("love", 0.8),
            ("loved", 0.8),
            ("like", 0.4),
            ("happy", 0.7),
            ("glad", 0.6),
            ("joy", 0.7),
            ("fun", 0.6),
            ("beautiful", 0.7),
            ("lovely", 0.6),
            ("nice", 0.5),
            ("best", 0.7),
            ("better", 0.4),
            ("win", 0.6),
            ("winning", 0.6),
            ("success", 0.6),
            ("thanks", 0.5),
            ("thank", 0.5),
            ("congrats", 0.7),
            ("congratulations", 0.7),
            ("perfect", 0.8),
            ("cool", 0.4),
            ("enjoy", 0.6),
            ("enjoyed", 0.6),
            ("proud", 0.6),
            ("excited", 0.7),
            ("brilliant", 0.8),
            ("smile", 0.5),
            ("hope", 0.4),
        ];

        // Negative terms
        let negative_words = vec![
            ("bad", -0.5),
            ("terrible", -0.8),
            ("horrible", -0.8),
            ("awful", -0.8),
            ("worst", -0.8),
            ("worse", -0.5),
            ("hate", -0.8),
            ("hated", -0.8),
            ("sad", -0.6),
            ("angry", -0.7),
            ("mad", -0.6),
            ("upset", -0.6),
            ("annoying", -0.6),
            ("annoyed", -0.6),
            ("disappointed", -0.7),
            ("disappointing", -0.7),
            ("fail", -0.7),
            ("failed", -0.7),
            ("failure", -0.7),
            ("lose", -0.6),
            ("losing", -0.6),
            ("lost", -0.5),
            ("wrong", -0.5),
            ("broken", -0.6),
            ("hurt", -0.6),
            ("pain", -0.6),
            ("cry", -0.6),
            ("crying", -0.6),
            ("fear", -0.6),
            ("scared", -0.6),
            ("sick", -0.5),
            ("tired", -0.4),
            ("boring", -0.5),
            ("stupid", -0.7),
            ("ugly", -0.6),
            ("disgusting", -0.8),
            ("problem", -0.5),
            ("trouble", -0.6),
        ];

        for (word, score) in positive_words {
            words.insert(word.to_string(), score);
        }

        for (word, score) in negative_words {
            words.insert(word.to_string(), score);
        }

        let negations = vec![
            "not", "no", "never", "neither", "nobody", "nothing", "nowhere", "none", "cannot",
            "cant", "don't", "dont", "doesn't", "doesnt", "didn't", "didnt", "won't", "wont",
            "wouldn't", "wouldnt", "shouldn't", "shouldnt", "couldn't", "couldnt", "isn't", "isnt",
            "aren't", "arent", "wasn't", "wasnt", "weren't", "werent", "hardly", "barely",
            "scarcely",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        let mut intensifiers = HashMap::new();
        intensifiers.insert("very".to_string(), 1.5);
        intensifiers.insert("extremely".to_string(), 2.0);
        intensifiers.insert("really".to_string(), 1.5);
        intensifiers.insert("so".to_string(), 1.4);
        intensifiers.insert("totally".to_string(), 1.6);
        intensifiers.insert("absolutely".to_string(), 1.8);
        intensifiers.insert("incredibly".to_string(), 1.8);
        intensifiers.insert("slightly".to_string(), 0.5);
        intensifiers.insert("somewhat".to_string(), 0.7);
        intensifiers.insert("kinda".to_string(), 0.7);

        Self {
            words,
            negations,
            intensifiers,
        }
    }

    /// Get the valence for a word
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.words.get(&word.to_lowercase()).copied()
    }

    /// Check if a word is a negation
    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(&word.to_lowercase())
    }

    /// Get the intensifier multiplier for a word
    pub fn intensifier(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(&word.to_lowercase()).copied()
    }

    /// Add a custom word to the lexicon
    pub fn add_word(&mut self, word: &str, valence: f64) {
        self.words.insert(word.to_lowercase(), valence);
    }
}
