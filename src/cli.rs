//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::render::{OutputFormat, RenderConfig};
use crate::index::build::DEFAULT_INDEX_FILE;

/// siteq - a CLI toolkit for static documentation sites.
#[derive(Parser, Debug)]
#[command(name = "siteq")]
#[command(
    author,
    version,
    about,
    long_about = r#"siteq keeps a static documentation site navigable and searchable.

Commands:
- annotate: inject jump-link anchors into heading elements (h2-h6)
- index: build the search index (one record per page: title, content, url)
- search: score a query against the index and render ranked results

Output formats:
- jsonl: one JSON object per line (default)
- json: a single JSON array
- md: human-friendly Markdown
- html: the results-page markup (search only)

Examples:
    siteq annotate --scope docs
    siteq index --out search-index.json
    siteq search "build rules"
    siteq search "?c%20rules" --format html
"#
)]
pub struct Cli {
    /// Site root directory for all operations.
    #[arg(
        long,
        global = true,
        default_value = ".",
        value_name = "ROOT",
        long_help = "Site root directory (defaults to the current directory).\n\n\
All paths emitted in results and all page URLs are relative to this root."
    )]
    pub root: PathBuf,

    /// Output format (jsonl/json/md/html).
    #[arg(
        long,
        global = true,
        default_value = "jsonl",
        value_name = "FORMAT",
        long_help = "Select the output format.\n\n\
Supported values:\n\
- jsonl (default)\n\
- json\n\
- md (markdown)\n\
- html (search results markup; other commands fall back to md)"
    )]
    pub format: String,

    /// Quiet mode (suppress stderr summaries).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Suppress non-essential stderr output such as the index summary line."
    )]
    pub quiet: bool,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(
        long,
        global = true,
        long_help = "Pretty-print JSON and JSONL output with indentation for human\n\
readability. Also applies to the generated index file."
    )]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inject jump-link anchors into heading elements of site pages.
    #[command(
        long_about = "Scan HTML pages under ROOT (or --scope) and annotate every heading\n\
element (h2-h6): headings without an id get one derived from their text\n\
(lowercased, spaces/periods to hyphens, restricted to [a-z0-9-]), every\n\
heading gains the jump-target class and an appended '#' link.\n\n\
Headings that already carry an anchor link are left alone, so repeated runs\n\
are safe.\n\n\
Examples:\n\
  siteq annotate\n\
  siteq annotate --scope docs --dry-run\n"
    )]
    Annotate {
        /// Limit annotation to a subdirectory under ROOT.
        #[arg(long, value_name = "PATH")]
        scope: Option<PathBuf>,

        /// Report what would change without rewriting any page.
        #[arg(long)]
        dry_run: bool,
    },

    /// Build the search index from page content.
    #[command(
        long_about = "Walk HTML pages under ROOT (or --scope) in stable order and write the\n\
search index: a JSON array of {title, content, url} records.\n\n\
Per record: title is the <title> element text (empty when absent), url is\n\
the root-relative page path, content is flattened body text (tags stripped,\n\
newlines collapsed, '#' and backticks removed, {:...} placeholders removed,\n\
spaces collapsed).\n\n\
Examples:\n\
  siteq index\n\
  siteq index --scope docs --out -\n"
    )]
    Index {
        /// Limit indexing to a subdirectory under ROOT.
        #[arg(long, value_name = "PATH")]
        scope: Option<PathBuf>,

        /// Output file for the index, relative to ROOT ('-' for stdout).
        #[arg(long, default_value = DEFAULT_INDEX_FILE, value_name = "FILE")]
        out: String,
    },

    /// Score a query against the index and render ranked results.
    #[command(
        long_about = r#"Score QUERY against every record in the index: 10 points per
case-insensitive title occurrence and 1 per content occurrence, per term
(terms are space-separated). Records scoring zero are excluded; results are
ranked by descending score.

QUERY may be a raw string or a percent-encoded query-string component with
its leading '?' still attached. An empty query renders nothing and exits
successfully.

Examples:
    siteq search "build rules"
    siteq search "?c%20rules" --format html
"#
    )]
    Search {
        /// Query string (raw or percent-encoded, optional leading '?').
        #[arg(value_name = "QUERY")]
        query: String,

        /// Index file to search, relative to ROOT unless absolute.
        #[arg(long, default_value = DEFAULT_INDEX_FILE, value_name = "FILE")]
        index: PathBuf,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    // Parse output format
    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    // Get absolute root path
    let root = cli.root.canonicalize().unwrap_or(cli.root);

    match cli.command {
        Commands::Annotate { scope, dry_run } => {
            crate::anchors::annotate::run_annotate(&root, scope.as_deref(), dry_run, render_config)
        }

        Commands::Index { scope, out } => {
            crate::index::build::run_index(&root, scope.as_deref(), &out, cli.quiet, cli.pretty)
        }

        Commands::Search { query, index } => {
            crate::search::api::run_search(&root, &query, &index, render_config)
        }
    }
}
