//! Renderer module
//!
//! Renders search hits and annotation reports to different output formats:
//! jsonl, json, md, html. The html format reproduces the markup the site's
//! results page expects.

use serde::Serialize;

use crate::core::model::{HeadingAnchor, SearchHit};
use crate::core::util::escape_html;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Jsonl,
    Json,
    Markdown,
    Html,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            "html" => Ok(OutputFormat::Html),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for command results
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            config: RenderConfig::new(format),
        }
    }

    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render search hits (assumed already ranked)
    pub fn render_hits(&self, hits: &[SearchHit]) -> String {
        match self.config.format {
            OutputFormat::Jsonl => self.render_jsonl(hits),
            OutputFormat::Json => self.render_json(hits),
            OutputFormat::Markdown => render_hits_markdown(hits),
            OutputFormat::Html => render_hits_html(hits),
        }
    }

    /// Render annotation report rows.
    ///
    /// The html format only applies to search results; annotation reports
    /// fall back to the markdown listing.
    pub fn render_anchors(&self, anchors: &[HeadingAnchor]) -> String {
        match self.config.format {
            OutputFormat::Jsonl => self.render_jsonl(anchors),
            OutputFormat::Json => self.render_json(anchors),
            OutputFormat::Markdown | OutputFormat::Html => render_anchors_markdown(anchors),
        }
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl<T: Serialize>(&self, items: &[T]) -> String {
        items
            .iter()
            .filter_map(|item| {
                if self.config.pretty {
                    serde_json::to_string_pretty(item).ok()
                } else {
                    serde_json::to_string(item).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render as a single JSON array
    fn render_json<T: Serialize>(&self, items: &[T]) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
        }
    }
}

/// Render hits as the results-page markup:
/// one `div.search-result` per hit, or a literal "No results found." when
/// nothing qualified.
fn render_hits_html(hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return "No results found.".to_string();
    }

    hits.iter()
        .map(|hit| {
            format!(
                "<div class=\"search-result\"><h2><a href=\"{}\">{}</a></h2><p>{}</p></div>",
                escape_html(&hit.url),
                escape_html(&hit.title),
                escape_html(&hit.excerpt)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_hits_markdown(hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return "No results found.\n".to_string();
    }

    let mut output = String::from("## Results\n\n");
    for hit in hits {
        output.push_str(&format!(
            "### [{}]({}) (score {})\n\n{}\n\n",
            hit.title, hit.url, hit.score, hit.excerpt
        ));
    }
    output
}

fn render_anchors_markdown(anchors: &[HeadingAnchor]) -> String {
    let mut output = String::from("## Anchors\n\n");
    for anchor in anchors {
        output.push_str(&format!(
            "- `{}` h{} `#{}`{}: {}\n",
            anchor.path,
            anchor.level,
            anchor.id,
            if anchor.created { " (new)" } else { "" },
            anchor.text
        ));
    }
    output
}
