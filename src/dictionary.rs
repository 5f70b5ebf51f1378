use std::fmt::{Display, Formatter};

use itertools::Itertools;

/// The candidate words, without duplicates and in the order they were first added.
///
/// The order matters: it is the final tie-break between equally good openings.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Dictionary::default()
    }

    pub fn create<S: Into<String>>(words: impl IntoIterator<Item = S>) -> Self {
        let mut dictionary = Dictionary::new();
        for word in words {
            dictionary.add_word(word);
        }
        dictionary
    }

    /// Add `word` unless it is already present. Empty words are ignored.
    pub fn add_word(&mut self, word: impl Into<String>) {
        let word = word.into();
        if !word.is_empty() && !self.contains(&word) {
            self.words.push(word);
        }
    }

    pub fn discard_many<S: AsRef<str>>(&mut self, discards: &[S]) {
        self.words.retain(|word| !discards.iter().any(|d| d.as_ref() == word));
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Display for Dictionary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.words.iter().map(|w| format!("{:?}", w)).join(", "))
    }
}
