//! Heading annotation - Inject jump-link anchors into site pages
//!
//! Single pass over heading elements (h2-h6) in document order. A heading
//! that already carries an id keeps it untouched; otherwise one is derived
//! from the heading's text content before the link child is appended, so the
//! appended `#` label never feeds back into the identifier. Every processed
//! heading is marked with the `jump-target` class and gains an appended
//! `<a class="anchor-hash" href="#<id>">#</a>` link.
//!
//! Headings that already contain an anchor-hash link are left alone, which
//! makes repeated runs over the same tree idempotent.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::fs;
use std::path::Path;

use crate::anchors::slug::derive_id;
use crate::core::model::HeadingAnchor;
use crate::core::pages::collect_pages;
use crate::core::paths::make_relative;
use crate::core::render::{RenderConfig, Renderer};
use crate::core::util::{escape_html, read_text};

/// Matches one heading element, capturing level, open-tag attributes, and
/// inner markup. Headings do not nest, so the lazy inner match stops at the
/// nearest closing tag.
static HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<h([2-6])([^>]*)>(.*?)</h[2-6]\s*>").expect("Invalid HEADING_RE regex")
});

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").expect("Invalid TAG_RE regex"));

static ID_ATTR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)\bid\s*=\s*["']([^"']*)["']"#).expect("Invalid ID_ATTR_RE regex"));

static CLASS_ATTR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\bclass\s*=\s*["']([^"']*)["']"#).expect("Invalid CLASS_ATTR_RE regex")
});

/// Marker class applied to every annotated heading
const JUMP_TARGET_CLASS: &str = "jump-target";

/// Class carried by the appended link element
const ANCHOR_HASH_CLASS: &str = "anchor-hash";

/// Result of annotating one page
#[derive(Debug, Clone)]
pub struct AnnotateOutcome {
    /// Rewritten page markup
    pub html: String,

    /// One row per heading that was annotated in this pass
    pub anchors: Vec<HeadingAnchor>,
}

impl AnnotateOutcome {
    pub fn changed(&self) -> bool {
        !self.anchors.is_empty()
    }
}

/// Annotate every heading element in a page.
///
/// `path` is the root-relative page path used in the report rows. A page
/// with no headings passes through unchanged.
pub fn annotate_page(html: &str, path: &str) -> AnnotateOutcome {
    let mut anchors = Vec::new();

    let rewritten = HEADING_RE.replace_all(html, |caps: &Captures| {
        let level: u8 = caps[1].parse().unwrap_or(2);
        let attrs = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        let inner = caps.get(3).map(|m| m.as_str()).unwrap_or("");

        // Annotated on a previous run
        if inner.contains(ANCHOR_HASH_CLASS) {
            return caps[0].to_string();
        }

        let text = TAG_RE.replace_all(inner, "");

        let (id, created) = match ID_ATTR_RE.captures(attrs) {
            Some(existing) => (existing[1].to_string(), false),
            None => (derive_id(&text), true),
        };

        let mut new_attrs = attrs.to_string();
        if created {
            new_attrs.push_str(&format!(" id=\"{}\"", id));
        }
        new_attrs = add_class(&new_attrs, JUMP_TARGET_CLASS);

        anchors.push(HeadingAnchor {
            path: path.to_string(),
            level,
            id: id.clone(),
            text: text.trim().to_string(),
            created,
        });

        format!(
            "<h{level}{new_attrs}>{inner}<a class=\"{ANCHOR_HASH_CLASS}\" href=\"#{}\">#</a></h{level}>",
            escape_html(&id)
        )
    });

    AnnotateOutcome {
        html: rewritten.into_owned(),
        anchors,
    }
}

/// Ensure the class attribute carries the given token, adding the attribute
/// when absent. Author classes are preserved.
fn add_class(attrs: &str, class: &str) -> String {
    match CLASS_ATTR_RE.captures(attrs) {
        Some(existing) => {
            if existing[1].split_whitespace().any(|token| token == class) {
                attrs.to_string()
            } else {
                CLASS_ATTR_RE
                    .replace(attrs, |caps: &Captures| {
                        format!("class=\"{} {}\"", &caps[1], class)
                    })
                    .into_owned()
            }
        }
        None => format!("{} class=\"{}\"", attrs, class),
    }
}

/// Run the annotate command: rewrite pages in place (unless dry-run) and
/// emit one report row per annotated heading.
pub fn run_annotate(
    root: &Path,
    scope: Option<&Path>,
    dry_run: bool,
    config: RenderConfig,
) -> Result<()> {
    let anchors = annotate_tree(root, scope, dry_run)?;

    let renderer = Renderer::with_config(config);
    println!("{}", renderer.render_anchors(&anchors));

    Ok(())
}

/// Annotate all pages under root, returning the combined report
pub fn annotate_tree(
    root: &Path,
    scope: Option<&Path>,
    dry_run: bool,
) -> Result<Vec<HeadingAnchor>> {
    let mut all_anchors = Vec::new();

    for page in collect_pages(root, scope)? {
        let relative = match make_relative(&page, root) {
            Some(rel) => rel,
            None => continue,
        };

        let html = read_text(&page)?;
        let outcome = annotate_page(&html, &relative);

        if outcome.changed() && !dry_run {
            fs::write(&page, &outcome.html)
                .with_context(|| format!("Failed to write file: {}", page.display()))?;
        }

        all_anchors.extend(outcome.anchors);
    }

    Ok(all_anchors)
}
