//! Search command - Load the page index, score the query, render results

use anyhow::{Context, Result};
use std::path::Path;

use crate::core::model::PageRecord;
use crate::core::render::{RenderConfig, Renderer};
use crate::search::query::parse_query;
use crate::search::score::search;

/// Load the page-record array from the index file
pub fn load_index(path: &Path) -> Result<Vec<PageRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read index file: {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse index file: {}", path.display()))
}

/// Run the search command.
///
/// An absent or empty query terminates early: nothing is rendered and the
/// command still succeeds.
pub fn run_search(root: &Path, raw_query: &str, index: &Path, config: RenderConfig) -> Result<()> {
    let query = match parse_query(raw_query) {
        Some(query) => query,
        None => return Ok(()),
    };

    let index_path = if index.is_absolute() {
        index.to_path_buf()
    } else {
        root.join(index)
    };

    let records = load_index(&index_path)?;
    let hits = search(&records, &query);

    let renderer = Renderer::with_config(config);
    println!("{}", renderer.render_hits(&hits));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::OutputFormat;
    use tempfile::tempdir;

    fn write_index(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("search-index.json");
        std::fs::write(
            &path,
            r#"[{"title":"Cats","content":"cats are great cats","url":"/cats.html"}]"#,
        )
        .unwrap();
        path
    }

    #[test]
    fn test_load_index() {
        let temp = tempdir().unwrap();
        let path = write_index(temp.path());
        let records = load_index(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Cats");
    }

    #[test]
    fn test_load_index_missing_file() {
        let result = load_index(Path::new("/nonexistent/index.json"));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read index file"));
    }

    #[test]
    fn test_load_index_invalid_json() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("bad.json");
        std::fs::write(&path, "not json").unwrap();
        let result = load_index(&path);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to parse index file"));
    }

    #[test]
    fn test_run_search_empty_query_succeeds() {
        let temp = tempdir().unwrap();
        // No index file needed: the empty query returns before loading
        let config = RenderConfig::new(OutputFormat::Jsonl);
        let result = run_search(temp.path(), "", Path::new("search-index.json"), config);
        assert!(result.is_ok());
    }

    #[test]
    fn test_run_search_missing_index_fails() {
        let temp = tempdir().unwrap();
        let config = RenderConfig::new(OutputFormat::Jsonl);
        let result = run_search(temp.path(), "cats", Path::new("search-index.json"), config);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_search_with_index() {
        let temp = tempdir().unwrap();
        write_index(temp.path());
        let config = RenderConfig::new(OutputFormat::Jsonl);
        let result = run_search(temp.path(), "cats", Path::new("search-index.json"), config);
        assert!(result.is_ok());
    }
}
