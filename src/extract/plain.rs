// Plain-text documents (.txt, .md, anything that isn't a PDF).

use std::path::Path;

use tracing::warn;

use super::traits::TextExtractor;

/// Reads a UTF-8 text file as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> Option<String> {
        match std::fs::read_to_string(path) {
            Ok(text) if text.trim().is_empty() => {
                warn!(path = %path.display(), "Document is empty");
                None
            }
            Ok(text) => Some(text),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read document");
                None
            }
        }
    }
}
