//! Heading identifier derivation
//!
//! Identifiers are derived from heading text: lowercase, spaces and periods
//! collapse to hyphens, everything outside `[a-z0-9-]` is stripped.
//! Derivation is pure and deterministic; uniqueness per page is not enforced.

use once_cell::sync::Lazy;
use regex::Regex;

static SPACE_DOT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ .]").expect("Invalid SPACE_DOT_RE regex"));

static STRIP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9-]").expect("Invalid STRIP_RE regex"));

/// Derive a heading identifier from its text content
pub fn derive_id(text: &str) -> String {
    let lowered = text.to_lowercase();
    let hyphenated = SPACE_DOT_RE.replace_all(&lowered, "-");
    STRIP_RE.replace_all(&hyphenated, "").into_owned()
}
