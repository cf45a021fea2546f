// Text normalization — raw extracted text into a comparable token stream.
//
// The output only ever contains lowercase ASCII letters, digits, and single
// spaces, with nothing leading or trailing. Everything else (punctuation,
// non-ASCII letters, newlines from page concatenation) acts as a separator.

/// Normalize raw document text for statistical comparison.
///
/// Absent or empty input yields an empty string. Never fails, and
/// `clean(Some(&clean(x)))` is always equal to `clean(x)`.
pub fn clean(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    let mut cleaned = String::with_capacity(text.len());
    let mut pending_space = false;

    // Lowercase first, then filter: some non-ASCII characters lowercase to
    // ASCII (e.g. KELVIN SIGN -> 'k') and should survive.
    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_alphanumeric() {
            if pending_space && !cleaned.is_empty() {
                cleaned.push(' ');
            }
            pending_space = false;
            cleaned.push(c);
        } else {
            pending_space = true;
        }
    }

    cleaned
}
