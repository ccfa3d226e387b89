//! Index builder
//!
//! Flattens each page into a search record. Content normalization contract:
//! script/style blocks and comments removed, remaining tags stripped,
//! newlines collapsed to spaces, literal '#' and backtick characters
//! removed, template placeholders matching `{:...}` removed, runs of spaces
//! collapsed to one.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

use crate::core::model::PageRecord;
use crate::core::pages::collect_pages;
use crate::core::paths::page_url;
use crate::core::util::read_text;

/// Default index file name, relative to the site root
pub const DEFAULT_INDEX_FILE: &str = "search-index.json";

static COMMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").expect("Invalid COMMENT_RE regex"));

static SCRIPT_STYLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>")
        .expect("Invalid SCRIPT_STYLE_RE regex")
});

static HEAD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<head\b[^>]*>.*?</head\s*>").expect("Invalid HEAD_RE regex"));

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").expect("Invalid TAG_RE regex"));

static TITLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<title[^>]*>(.*?)</title\s*>").expect("Invalid TITLE_RE regex")
});

static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{:[^}]*\}").expect("Invalid PLACEHOLDER_RE regex"));

static SPACES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r" +").expect("Invalid SPACES_RE regex"));

/// Extract the page title from its `<title>` element, empty when absent.
///
/// Untitled pages stay in the index; the scorer skips them.
pub fn extract_title(html: &str) -> String {
    TITLE_RE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| TAG_RE.replace_all(m.as_str(), "").trim().to_string())
        .unwrap_or_default()
}

/// Flatten page markup into searchable text. The `<head>` block is dropped
/// first so head metadata never leaks into content scoring.
pub fn normalize_content(html: &str) -> String {
    let without_head = HEAD_RE.replace_all(html, "");
    let without_comments = COMMENT_RE.replace_all(&without_head, "");
    let without_blocks = SCRIPT_STYLE_RE.replace_all(&without_comments, "");
    let text = TAG_RE.replace_all(&without_blocks, "");

    let flattened: String = text
        .chars()
        .filter_map(|c| match c {
            '\n' | '\r' => Some(' '),
            '#' | '`' => None,
            _ => Some(c),
        })
        .collect();

    let without_placeholders = PLACEHOLDER_RE.replace_all(&flattened, "");
    SPACES_RE
        .replace_all(&without_placeholders, " ")
        .trim()
        .to_string()
}

/// Build one record for a page
pub fn build_record(html: &str, url: String) -> PageRecord {
    PageRecord {
        title: extract_title(html),
        content: normalize_content(html),
        url,
    }
}

/// Build records for every page under root, in stable path order
pub fn build_records(root: &Path, scope: Option<&Path>) -> Result<Vec<PageRecord>> {
    let mut records = Vec::new();

    for page in collect_pages(root, scope)? {
        let url = match page_url(&page, root) {
            Some(url) => url,
            None => continue,
        };

        let html = read_text(&page)?;
        records.push(build_record(&html, url));
    }

    Ok(records)
}

/// Run the index command: write the record array as JSON to the output file
/// ('-' for stdout). A summary line goes to stderr unless quiet.
pub fn run_index(
    root: &Path,
    scope: Option<&Path>,
    out: &str,
    quiet: bool,
    pretty: bool,
) -> Result<()> {
    let records = build_records(root, scope)?;

    let json = if pretty {
        serde_json::to_string_pretty(&records).context("Failed to serialize index")?
    } else {
        serde_json::to_string(&records).context("Failed to serialize index")?
    };

    if out == "-" {
        println!("{}", json);
        return Ok(());
    }

    let out_path = if Path::new(out).is_absolute() {
        Path::new(out).to_path_buf()
    } else {
        root.join(out)
    };

    std::fs::write(&out_path, json)
        .with_context(|| format!("Failed to write index file: {}", out_path.display()))?;

    if !quiet {
        eprintln!(
            "Indexed {} pages -> {}",
            records.len(),
            out_path.display()
        );
    }

    Ok(())
}
