// Stop word list used by every weighting run.
//
// Stop words never become vocabulary terms. The English list is NLTK's set
// of function words from the `stop-words` crate, built once per process.
// Content words a posting may ask for ("research", "test") stay eligible.

use std::collections::HashSet;
use std::sync::OnceLock;

use stop_words::{get, LANGUAGE};

/// A closed set of lowercase words excluded from term weighting.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// The shared English stop word list.
    pub fn english() -> &'static StopWords {
        static ENGLISH: OnceLock<StopWords> = OnceLock::new();
        ENGLISH.get_or_init(|| StopWords::from_words(get(LANGUAGE::English)))
    }

    /// Build a list from arbitrary words. Entries are lowercased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// An empty list — every token is eligible.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
