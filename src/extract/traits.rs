// Text extractor trait — the boundary between uploaded files and the engine.
//
// Extraction never fails loudly: an unreadable file, or one with no
// extractable text (a scanned image, say), comes back as `None` and the
// caller decides how to surface it.

use std::path::Path;

/// Turns a document on disk into raw text.
pub trait TextExtractor: Send + Sync {
    /// Extract the document's text. `None` when nothing could be read.
    fn extract(&self, path: &Path) -> Option<String>;
}
