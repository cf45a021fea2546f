use std::env;

use anyhow::{Context, Result};

use crate::analysis::DEFAULT_TOP_N;
use crate::scoring::ScoringThresholds;

/// How many missing keywords the terminal shows before collapsing the rest.
pub const DEFAULT_DISPLAY_LIMIT: usize = 15;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Command-line
/// flags take precedence over everything here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum missing keywords to report (CVMATCH_TOP_N, default 20)
    pub top_n: usize,
    /// Missing keywords shown before "...and N more" (CVMATCH_DISPLAY_LIMIT, default 15)
    pub display_limit: usize,
    /// Tier and recommendation thresholds (CVMATCH_EXCELLENT_THRESHOLD,
    /// CVMATCH_GOOD_THRESHOLD)
    pub thresholds: ScoringThresholds,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default; only malformed values are errors.
    pub fn load() -> Result<Self> {
        let defaults = ScoringThresholds::default();
        let thresholds = ScoringThresholds {
            excellent: parse_var(
                "CVMATCH_EXCELLENT_THRESHOLD",
                env::var("CVMATCH_EXCELLENT_THRESHOLD").ok(),
                defaults.excellent,
            )?,
            good: parse_var(
                "CVMATCH_GOOD_THRESHOLD",
                env::var("CVMATCH_GOOD_THRESHOLD").ok(),
                defaults.good,
            )?,
            ..defaults
        };
        thresholds
            .validate()
            .context("Invalid scoring thresholds in environment")?;

        Ok(Self {
            top_n: parse_var("CVMATCH_TOP_N", env::var("CVMATCH_TOP_N").ok(), DEFAULT_TOP_N)?,
            display_limit: parse_var(
                "CVMATCH_DISPLAY_LIMIT",
                env::var("CVMATCH_DISPLAY_LIMIT").ok(),
                DEFAULT_DISPLAY_LIMIT,
            )?,
            thresholds,
        })
    }

    /// A `--top-n` flag wins over CVMATCH_TOP_N.
    pub fn top_n_or(&self, flag: Option<usize>) -> usize {
        flag.unwrap_or(self.top_n)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            display_limit: DEFAULT_DISPLAY_LIMIT,
            thresholds: ScoringThresholds::default(),
        }
    }
}

/// Parse an optional raw value, falling back to `default` when unset or blank.
fn parse_var<T>(name: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse()
            .with_context(|| format!("{name} has an invalid value: {value:?}")),
    }
}
