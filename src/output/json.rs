// JSON rendering of analysis results, for piping into other tools.

use anyhow::{Context, Result};

use crate::pipeline::AnalysisReport;

/// Serialize a report as pretty-printed JSON.
pub fn report_json(report: &AnalysisReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize analysis report")
}
