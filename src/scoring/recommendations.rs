// Recommendation text for an analysis result.

use super::tier::ScoringThresholds;

pub const RESTRUCTURE: &str =
    "Consider restructuring your resume to better match the job requirements";
pub const ADD_KEYWORDS: &str =
    "Add more relevant keywords and skills mentioned in the job description";
pub const FOCUS_KEYWORDS: &str =
    "Focus on the most important missing keywords for better ATS compatibility";

/// Advice that applies to every resume, appended after the score-driven items.
pub const GENERAL_TIPS: [&str; 3] = [
    "Quantify your achievements with specific numbers and metrics",
    "Use action verbs to describe your experiences",
    "Tailor your resume summary to match the job requirements",
];

/// Build the ordered recommendation list for a score and missing-keyword count.
pub fn recommendations(
    similarity: f64,
    missing_count: usize,
    thresholds: &ScoringThresholds,
) -> Vec<String> {
    let mut recs = Vec::new();

    if similarity < thresholds.restructure_below {
        recs.push(RESTRUCTURE);
    }
    if similarity < thresholds.good {
        recs.push(ADD_KEYWORDS);
    }
    if missing_count > thresholds.focus_missing_above {
        recs.push(FOCUS_KEYWORDS);
    }
    recs.extend(GENERAL_TIPS);

    recs.into_iter().map(str::to_string).collect()
}
