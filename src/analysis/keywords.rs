// Missing keyword extraction.
//
// The job description is weighted on its own (a single-document corpus over
// unigrams and bigrams), its terms are ranked by weight, and every term that
// does not appear verbatim in the resume text is reported. With one document
// every idf is 1, so salience is driven by how often the posting repeats a
// term.

use std::cmp::Ordering;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use super::vectorizer::{TermWeight, TfIdfVectorizer};

/// Default number of missing keywords to report.
pub const DEFAULT_TOP_N: usize = 20;

/// Vocabulary cap for the job-description-only corpus.
pub const KEYWORD_MAX_FEATURES: usize = 500;

/// Terms from the job description that the resume never mentions.
///
/// Ordered by descending salience, at most `top_n` entries. A term counts as
/// present when it is a substring of the lowercased resume text, so a bigram
/// is only present if the exact two-word phrase appears. Empty input on
/// either side, or a job description with no usable terms, yields nothing.
pub fn missing_keywords(resume_clean: &str, jd_clean: &str, top_n: usize) -> Vec<String> {
    if resume_clean.is_empty() || jd_clean.is_empty() {
        return Vec::new();
    }

    let ranked = match rank_terms(jd_clean) {
        Ok(ranked) => ranked,
        Err(e) => {
            warn!(error = %e, "Keyword extraction failed, reporting no missing keywords");
            return Vec::new();
        }
    };

    let resume_lower = resume_clean.to_lowercase();
    let candidates = ranked.len();
    let missing: Vec<String> = ranked
        .into_iter()
        .filter(|tw| !resume_lower.contains(tw.term.as_str()))
        .take(top_n)
        .map(|tw| tw.term)
        .collect();

    debug!(
        candidates,
        missing = missing.len(),
        top_n,
        "Extracted missing keywords"
    );
    missing
}

/// The full salience ranking of a cleaned job description.
///
/// Highest weight first; equal weights are ordered lexicographically.
pub fn ranked_terms(jd_clean: &str) -> Vec<TermWeight> {
    if jd_clean.is_empty() {
        return Vec::new();
    }

    rank_terms(jd_clean).unwrap_or_else(|e| {
        warn!(error = %e, "Keyword ranking failed");
        Vec::new()
    })
}

fn rank_terms(jd_clean: &str) -> Result<Vec<TermWeight>> {
    let matrix = TfIdfVectorizer::new(KEYWORD_MAX_FEATURES)
        .with_ngram_range(1, 2)
        .fit(&[jd_clean])?;

    if matrix.row(0).is_none() {
        anyhow::bail!("vectorizer produced no row for the job description");
    }

    let mut ranked: Vec<TermWeight> = matrix
        .term_weights(0)
        .into_iter()
        .filter(|tw| tw.weight > 0.0)
        .collect();

    ranked.sort_by(|a, b| {
        b.weight
            .partial_cmp(&a.weight)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.term.cmp(&b.term))
    });

    let top = ranked.first().context("job description produced no weighted terms")?;
    debug!(
        terms = ranked.len(),
        top_term = %top.term,
        top_weight = top.weight,
        "Ranked job description terms"
    );

    Ok(ranked)
}
