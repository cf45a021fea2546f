// Analysis pipeline — request in, report out.

pub mod analyze;

pub use analyze::{analyze, AnalysisReport, AnalysisRequest};
