//! siteq - A CLI toolkit for static documentation sites
//!
//! siteq provides:
//! - Heading anchor annotation (jump-link targets in HTML pages)
//! - Search index generation from page content
//! - Query scoring against the generated index
//! - Unified output format (jsonl/json/md/html)

use anyhow::Result;
use clap::Parser;

mod anchors;
mod cli;
mod core;
mod index;
mod search;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
