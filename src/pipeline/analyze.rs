// One resume-vs-job-description analysis, end to end.
//
// The collaborator hands over an AnalysisRequest by value; nothing is kept
// between calls. The similarity score and the keyword gap don't depend on
// each other, so both run on the blocking pool at the same time.

use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};

use crate::analysis::{clean, missing_keywords, similarity, DEFAULT_TOP_N};
use crate::scoring::{recommendations, MatchTier, ScoringThresholds};

/// Inputs for one analysis.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Raw resume text. `None` means extraction failed.
    pub resume_text: Option<String>,
    /// Raw job description text.
    pub job_description: String,
    /// Maximum number of missing keywords to report.
    pub top_n: usize,
}

impl AnalysisRequest {
    pub fn new(resume_text: Option<String>, job_description: impl Into<String>) -> Self {
        Self {
            resume_text,
            job_description: job_description.into(),
            top_n: DEFAULT_TOP_N,
        }
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }
}

/// The outcome of an analysis, ready for terminal or JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Cosine similarity in [0.0, 1.0]
    pub similarity: f64,
    pub tier: MatchTier,
    /// Job description terms absent from the resume, most salient first
    pub missing_keywords: Vec<String>,
    pub recommendations: Vec<String>,
    /// Word counts of the cleaned documents
    pub resume_word_count: usize,
    pub job_description_word_count: usize,
    /// RFC 3339 timestamp of when the analysis ran
    pub analyzed_at: String,
}

/// Run the full analysis: clean, score, find gaps, interpret.
///
/// A missing resume text is analyzed as an empty document, which yields a
/// zero score and no keywords rather than an error.
pub async fn analyze(
    request: AnalysisRequest,
    thresholds: &ScoringThresholds,
) -> Result<AnalysisReport> {
    if request.resume_text.is_none() {
        warn!("Resume text unavailable, analyzing as an empty document");
    }

    let resume_clean: Arc<str> = Arc::from(clean(request.resume_text.as_deref()));
    let jd_clean: Arc<str> = Arc::from(clean(Some(request.job_description.as_str())));
    let top_n = request.top_n;

    let score_task = {
        let resume = Arc::clone(&resume_clean);
        let jd = Arc::clone(&jd_clean);
        tokio::task::spawn_blocking(move || similarity(&resume, &jd))
    };
    let gap_task = {
        let resume = Arc::clone(&resume_clean);
        let jd = Arc::clone(&jd_clean);
        tokio::task::spawn_blocking(move || missing_keywords(&resume, &jd, top_n))
    };

    let (score, missing) = tokio::join!(score_task, gap_task);
    let score = score.context("similarity task panicked")?;
    let missing = missing.context("keyword task panicked")?;

    let tier = MatchTier::from_score(score, thresholds);
    let recs = recommendations(score, missing.len(), thresholds);

    info!(
        similarity = score,
        tier = %tier,
        missing = missing.len(),
        "Analysis complete"
    );

    Ok(AnalysisReport {
        similarity: score,
        tier,
        missing_keywords: missing,
        recommendations: recs,
        resume_word_count: word_count(&resume_clean),
        job_description_word_count: word_count(&jd_clean),
        analyzed_at: chrono::Utc::now().to_rfc3339(),
    })
}

fn word_count(cleaned: &str) -> usize {
    cleaned.split_whitespace().count()
}
