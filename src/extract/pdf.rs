// PDF text extraction via the `pdf-extract` crate.
//
// Text is pulled page by page. Pages with no text are skipped rather than
// failing the whole document; every kept page is followed by a newline.

use std::panic;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use tracing::{debug, warn};

use super::traits::TextExtractor;

/// Extracts text from text-based PDFs. Scanned (image-only) PDFs yield `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Option<String> {
        let pages = match read_pages(path) {
            Ok(pages) => pages,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read PDF");
                return None;
            }
        };

        let text = join_pages(&pages);
        match &text {
            Some(t) => debug!(
                path = %path.display(),
                pages = pages.len(),
                chars = t.len(),
                "Extracted PDF text"
            ),
            None => warn!(
                path = %path.display(),
                pages = pages.len(),
                "PDF has no extractable text"
            ),
        }
        text
    }
}

fn read_pages(path: &Path) -> Result<Vec<String>> {
    // pdf-extract panics on some malformed files instead of returning an error
    let owned: PathBuf = path.to_path_buf();
    panic::catch_unwind(move || pdf_extract::extract_text_by_pages(&owned))
        .map_err(|_| anyhow!("PDF parser panicked on {}", path.display()))?
        .map_err(|e| anyhow!("Failed to extract text from {}: {e}", path.display()))
}

/// Concatenate page texts, newline after each, skipping blank pages.
///
/// Returns `None` if no page had any text.
pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> Option<String> {
    let mut text = String::new();
    for page in pages {
        let page = page.as_ref();
        if page.trim().is_empty() {
            continue;
        }
        text.push_str(page);
        text.push('\n');
    }

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
