// Document text extraction — trait-based so the CLI can pick a reader per file.

pub mod pdf;
pub mod plain;
pub mod traits;

use std::path::Path;

pub use pdf::PdfExtractor;
pub use plain::PlainTextExtractor;
pub use traits::TextExtractor;

/// Pick an extractor from the file extension: `.pdf` (any case) goes through
/// the PDF reader, everything else is read as plain text.
pub fn extractor_for(path: &Path) -> Box<dyn TextExtractor> {
    if is_pdf(path) {
        Box::new(PdfExtractor)
    } else {
        Box::new(PlainTextExtractor)
    }
}

pub fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}
