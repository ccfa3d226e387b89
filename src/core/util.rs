//! Common utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Truncate content at the first space at-or-after the given character
/// offset, appending a literal ellipsis. If no space exists at or past the
/// offset (including content shorter than the offset), the full content is
/// kept, still with the ellipsis appended.
pub fn excerpt_at_space(content: &str, offset: usize) -> String {
    let start = content.char_indices().nth(offset).map(|(byte, _)| byte);
    let cut = start.and_then(|byte| content[byte..].find(' ').map(|pos| byte + pos));

    match cut {
        Some(byte) => format!("{}...", &content[..byte]),
        None => format!("{}...", content),
    }
}

/// Escape text for inclusion in HTML element content or attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Read a text file, replacing invalid UTF-8 sequences instead of failing
pub fn read_text(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
