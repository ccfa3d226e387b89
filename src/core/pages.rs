//! Page discovery
//!
//! Walks the site root for HTML pages using the ignore crate, so build
//! artifacts and hidden directories are skipped the same way the rest of the
//! toolchain skips them. Results are sorted for stable output.

use anyhow::{bail, Result};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Page file extensions recognized as site pages
const PAGE_EXTENSIONS: &[&str] = &["html", "htm"];

/// Check whether a path looks like a site page
pub fn is_page(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            PAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Collect all page files under root (or a scope subdirectory), sorted
pub fn collect_pages(root: &Path, scope: Option<&Path>) -> Result<Vec<PathBuf>> {
    let start = match scope {
        Some(scope) => root.join(scope),
        None => root.to_path_buf(),
    };

    if !start.exists() {
        bail!("Scan path does not exist: {}", start.display());
    }

    let mut pages = Vec::new();

    for entry in WalkBuilder::new(&start).build() {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        let path = entry.path();
        if path.is_dir() || !is_page(path) {
            continue;
        }

        pages.push(path.to_path_buf());
    }

    pages.sort();
    Ok(pages)
}
