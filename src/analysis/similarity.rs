// Resume / job description similarity.
//
// Both cleaned documents are weighted together as a two-document TF-IDF
// corpus, then compared with cosine similarity:
//
//   cos(a, b) = dot(a, b) / (|a| * |b|)
//
// 1.0 means the weighted vocabularies point the same way, 0.0 means no
// shared weighted terms. Any failure along the way degrades to 0.0.

use std::collections::BTreeMap;

use anyhow::Result;
use tracing::{debug, warn};

use super::vectorizer::TfIdfVectorizer;

/// Vocabulary cap for the two-document corpus.
pub const SIMILARITY_MAX_FEATURES: usize = 1000;

/// Score how closely a cleaned resume matches a cleaned job description.
///
/// Returns a value in [0.0, 1.0]. Empty input on either side, or a corpus
/// with no usable terms, scores 0.0.
pub fn similarity(resume_clean: &str, jd_clean: &str) -> f64 {
    if resume_clean.is_empty() || jd_clean.is_empty() {
        return 0.0;
    }

    match score_documents(resume_clean, jd_clean) {
        Ok(score) => score,
        Err(e) => {
            warn!(error = %e, "Similarity scoring failed, reporting no similarity");
            0.0
        }
    }
}

fn score_documents(resume_clean: &str, jd_clean: &str) -> Result<f64> {
    let matrix = TfIdfVectorizer::new(SIMILARITY_MAX_FEATURES).fit(&[resume_clean, jd_clean])?;

    let (Some(resume), Some(jd)) = (matrix.row(0), matrix.row(1)) else {
        anyhow::bail!("vectorizer produced {} rows for 2 documents", matrix.len());
    };

    let score = cosine_from_weights(resume, jd);
    debug!(
        vocabulary = matrix.vocabulary().len(),
        score, "Computed resume similarity"
    );
    Ok(score)
}

/// Cosine similarity between two sparse weight vectors keyed by term.
///
/// Missing terms count as 0. Returns 0.0 when either vector has no
/// magnitude; negative results are clamped to 0.0.
pub fn cosine_from_weights(
    weights_a: &BTreeMap<String, f64>,
    weights_b: &BTreeMap<String, f64>,
) -> f64 {
    if weights_a.is_empty() || weights_b.is_empty() {
        return 0.0;
    }

    let dot: f64 = weights_a
        .iter()
        .filter_map(|(term, a)| weights_b.get(term).map(|b| a * b))
        .sum();

    let norm_a = weights_a.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b = weights_b.values().map(|w| w * w).sum::<f64>().sqrt();
    let denominator = norm_a * norm_b;

    if denominator < f64::EPSILON {
        return 0.0;
    }

    (dot / denominator).clamp(0.0, 1.0)
}
