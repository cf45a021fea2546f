// Match tier classification.
//
// Collapses the raw similarity score into the three labels a user actually
// reads. Thresholds are configurable; the defaults follow the usual ATS
// rule of thumb that 70% alignment is a strong match.

use serde::{Deserialize, Serialize};

/// Score thresholds driving tiers and recommendations.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringThresholds {
    /// Similarity at or above this is an excellent match (default 0.7)
    pub excellent: f64,
    /// Similarity at or above this is a good match (default 0.5)
    pub good: f64,
    /// Below this the resume likely needs restructuring (default 0.3)
    pub restructure_below: f64,
    /// More missing keywords than this triggers the focus advice (default 20)
    pub focus_missing_above: usize,
}

impl Default for ScoringThresholds {
    fn default() -> Self {
        Self {
            excellent: 0.7,
            good: 0.5,
            restructure_below: 0.3,
            focus_missing_above: 20,
        }
    }
}

impl ScoringThresholds {
    /// Reject thresholds outside [0, 1] or out of order.
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, value) in [
            ("excellent", self.excellent),
            ("good", self.good),
            ("restructure_below", self.restructure_below),
        ] {
            if !(0.0..=1.0).contains(&value) {
                anyhow::bail!("{name} threshold must be between 0.0 and 1.0, got {value}");
            }
        }
        if self.good > self.excellent {
            anyhow::bail!(
                "good threshold ({}) must not exceed excellent threshold ({})",
                self.good,
                self.excellent
            );
        }
        if self.restructure_below > self.good {
            anyhow::bail!(
                "restructure_below threshold ({}) must not exceed good threshold ({})",
                self.restructure_below,
                self.good
            );
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchTier {
    NeedsImprovement,
    Good,
    Excellent,
}

impl MatchTier {
    /// Determine the tier from a similarity score (0.0-1.0).
    pub fn from_score(score: f64, thresholds: &ScoringThresholds) -> Self {
        match score {
            s if s >= thresholds.excellent => MatchTier::Excellent,
            s if s >= thresholds.good => MatchTier::Good,
            _ => MatchTier::NeedsImprovement,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchTier::Excellent => "Excellent Match",
            MatchTier::Good => "Good Match",
            MatchTier::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl std::fmt::Display for MatchTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
