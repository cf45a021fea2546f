// Result interpretation — match tiers and recommendations.

pub mod recommendations;
pub mod tier;

pub use recommendations::recommendations;
pub use tier::{MatchTier, ScoringThresholds};
