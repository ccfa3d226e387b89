//! Data model shared by the index builder, query scorer, and annotator
//!
//! The search index on disk is a bare JSON array of PageRecord objects.
//! SearchHit and HeadingAnchor are the per-command result rows that get
//! rendered to the selected output format.

use serde::{Deserialize, Serialize};

use crate::core::util::excerpt_at_space;

/// Character offset at which result excerpts are cut (at the next space).
pub const EXCERPT_OFFSET: usize = 512;

/// One searchable unit corresponding to a site page.
///
/// `content` is flattened body text: HTML stripped, whitespace collapsed.
/// Records are built once per site build and are immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    pub title: String,
    pub content: String,
    pub url: String,
}

impl PageRecord {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            url: url.into(),
        }
    }

    /// Records with an empty title are never scored and never shown.
    pub fn is_searchable(&self) -> bool {
        !self.title.is_empty()
    }
}

/// A page record that qualified for a query, with its derived score.
///
/// Only records with score > 0 become hits. The excerpt is precomputed so
/// every output format shows the same truncated content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub score: u64,
    pub excerpt: String,
}

impl SearchHit {
    pub fn from_record(record: &PageRecord, score: u64) -> Self {
        Self {
            title: record.title.clone(),
            url: record.url.clone(),
            score,
            excerpt: excerpt_at_space(&record.content, EXCERPT_OFFSET),
        }
    }
}

/// Report row for one heading processed by the annotator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingAnchor {
    /// Page path relative to root, '/'-separated.
    pub path: String,

    /// Heading level (2-6).
    pub level: u8,

    /// The identifier the jump link points at.
    pub id: String,

    /// Heading text content with inner markup stripped.
    pub text: String,

    /// True when the identifier was derived, false when the heading
    /// already carried one.
    pub created: bool,
}
