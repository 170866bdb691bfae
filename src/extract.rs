// PDF text extraction

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF parse error: {0}")]
    Parse(String),

    #[error("No extractable text (scanned or image-only PDF?)")]
    Empty,
}

/// Extract the concatenated page text of a PDF held in memory.
///
/// A failure on any page aborts the whole document; there is no page-level
/// isolation. pdf-extract returns all text as one string with form feed
/// characters (\x0C) separating pages; those are normalized to newlines so
/// sentence splitting does not see them.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractError::Parse(e.to_string()))?;

    let text = text.replace('\x0C', "\n");
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ExtractError::Empty);
    }

    Ok(trimmed.to_string())
}

/// First `max_chars` characters of `text`, on a char boundary.
pub fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
