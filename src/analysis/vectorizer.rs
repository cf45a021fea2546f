// TF-IDF weighting over a small, closed corpus.
//
// Fitting tokenizes every document, drops stop words and single-character
// tokens, forms n-grams from adjacent surviving tokens, limits the
// vocabulary to the most frequent terms, and produces one L2-normalized
// weight vector per document:
//
//   idf(t)  = ln((1 + n) / (1 + df(t))) + 1
//   w(t, d) = count(t, d) * idf(t), scaled so that ||w(d)|| = 1
//
// Rows are kept in BTreeMaps so every sum over a row runs in the same
// (lexicographic) order and results are exactly reproducible.

use std::collections::{BTreeMap, HashSet};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::stopwords::StopWords;

/// Tokens shorter than this never become terms.
pub const MIN_TOKEN_LEN: usize = 2;

/// A vocabulary entry and its weight within one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermWeight {
    pub term: String,
    pub weight: f64,
}

/// Configuration for a single weighting run.
pub struct TfIdfVectorizer<'a> {
    /// Keep at most this many terms, ranked by total count across the corpus.
    pub max_features: usize,
    /// Smallest and largest n-gram length (inclusive).
    pub ngram_range: (usize, usize),
    stop_words: &'a StopWords,
}

impl TfIdfVectorizer<'static> {
    /// Unigram vectorizer using the shared English stop word list.
    pub fn new(max_features: usize) -> Self {
        Self {
            max_features,
            ngram_range: (1, 1),
            stop_words: StopWords::english(),
        }
    }
}

impl<'a> TfIdfVectorizer<'a> {
    pub fn with_ngram_range(mut self, min_n: usize, max_n: usize) -> Self {
        self.ngram_range = (min_n, max_n);
        self
    }

    pub fn with_stop_words<'b>(self, stop_words: &'b StopWords) -> TfIdfVectorizer<'b> {
        TfIdfVectorizer {
            max_features: self.max_features,
            ngram_range: self.ngram_range,
            stop_words,
        }
    }

    /// Build the vocabulary and the weight matrix for `documents`.
    ///
    /// Fails when the configuration is unusable or when no document
    /// contributes a single term (everything was a stop word or too short).
    pub fn fit<S: AsRef<str>>(&self, documents: &[S]) -> Result<TfIdfMatrix> {
        let (min_n, max_n) = self.ngram_range;
        if min_n == 0 || min_n > max_n {
            anyhow::bail!("invalid n-gram range ({min_n}, {max_n})");
        }
        if self.max_features == 0 {
            anyhow::bail!("max_features must be at least 1");
        }
        if documents.is_empty() {
            anyhow::bail!("cannot fit a vocabulary on an empty corpus");
        }

        let doc_counts: Vec<BTreeMap<String, usize>> = documents
            .iter()
            .map(|doc| count_terms(&self.analyze(doc.as_ref())))
            .collect();

        // Total count per term across the corpus, in lexicographic order.
        let mut corpus_counts: BTreeMap<&str, usize> = BTreeMap::new();
        for counts in &doc_counts {
            for (term, &count) in counts {
                *corpus_counts.entry(term.as_str()).or_insert(0) += count;
            }
        }

        if corpus_counts.is_empty() {
            anyhow::bail!(
                "empty vocabulary; the {} document(s) contain only stop words",
                documents.len()
            );
        }

        let vocabulary = limit_vocabulary(&corpus_counts, self.max_features);

        let n_docs = documents.len() as f64;
        let idf: BTreeMap<String, f64> = vocabulary
            .iter()
            .map(|term| {
                let df = doc_counts.iter().filter(|c| c.contains_key(term)).count() as f64;
                (term.clone(), ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0)
            })
            .collect();

        let rows = doc_counts
            .iter()
            .map(|counts| weight_row(counts, &idf))
            .collect();

        debug!(
            documents = documents.len(),
            candidate_terms = corpus_counts.len(),
            vocabulary = vocabulary.len(),
            "Fitted TF-IDF vocabulary"
        );

        Ok(TfIdfMatrix {
            vocabulary,
            idf,
            rows,
        })
    }

    /// Turn one document into its sequence of terms (unigrams first, then
    /// longer n-grams), with stop words and short tokens removed.
    pub fn analyze(&self, document: &str) -> Vec<String> {
        // `None` marks a position whose token was filtered out, so n-grams
        // never bridge over a removed word.
        let tokens: Vec<Option<String>> = document
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .map(|t| {
                let token = t.to_lowercase();
                let keep = token.chars().count() >= MIN_TOKEN_LEN
                    && !self.stop_words.contains(&token);
                keep.then_some(token)
            })
            .collect();

        let (min_n, max_n) = self.ngram_range;
        let mut terms = Vec::new();
        for n in min_n..=max_n {
            for window in tokens.windows(n) {
                let words: Option<Vec<&str>> = window.iter().map(|t| t.as_deref()).collect();
                if let Some(words) = words {
                    terms.push(words.join(" "));
                }
            }
        }
        terms
    }
}

/// The fitted vocabulary and per-document weight vectors.
#[derive(Debug, Clone)]
pub struct TfIdfMatrix {
    vocabulary: Vec<String>,
    idf: BTreeMap<String, f64>,
    rows: Vec<BTreeMap<String, f64>>,
}

impl TfIdfMatrix {
    /// Vocabulary terms in lexicographic order.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.idf.get(term).copied()
    }

    /// Number of documents (rows).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Non-zero weights of one document, keyed by term.
    pub fn row(&self, doc: usize) -> Option<&BTreeMap<String, f64>> {
        self.rows.get(doc)
    }

    /// Non-zero weights of one document in vocabulary order.
    pub fn term_weights(&self, doc: usize) -> Vec<TermWeight> {
        self.row(doc)
            .map(|row| {
                row.iter()
                    .map(|(term, &weight)| TermWeight {
                        term: term.clone(),
                        weight,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn count_terms(terms: &[String]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for term in terms {
        *counts.entry(term.clone()).or_insert(0) += 1;
    }
    counts
}

/// Keep the `max_features` most frequent terms. Ties on count go to the
/// lexicographically smaller term. Returned in lexicographic order.
fn limit_vocabulary(corpus_counts: &BTreeMap<&str, usize>, max_features: usize) -> Vec<String> {
    if corpus_counts.len() <= max_features {
        return corpus_counts.keys().map(|t| t.to_string()).collect();
    }

    // Stable sort over lexicographic input keeps ties in lexicographic order.
    let mut by_count: Vec<(&str, usize)> = corpus_counts.iter().map(|(t, &c)| (*t, c)).collect();
    by_count.sort_by(|a, b| b.1.cmp(&a.1));

    let kept: HashSet<&str> = by_count
        .into_iter()
        .take(max_features)
        .map(|(t, _)| t)
        .collect();

    corpus_counts
        .keys()
        .filter(|t| kept.contains(*t))
        .map(|t| t.to_string())
        .collect()
}

fn weight_row(counts: &BTreeMap<String, usize>, idf: &BTreeMap<String, f64>) -> BTreeMap<String, f64> {
    let mut row: BTreeMap<String, f64> = counts
        .iter()
        .filter_map(|(term, &count)| {
            let idf = idf.get(term)?;
            Some((term.clone(), count as f64 * idf))
        })
        .collect();

    let norm = row.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for weight in row.values_mut() {
            *weight /= norm;
        }
    }
    row
}
