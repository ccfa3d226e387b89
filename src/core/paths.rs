//! Path normalization utilities
//!
//! Ensures all paths are normalized to use '/' as separator and are relative
//! to root, so emitted page URLs are stable across platforms.

use std::path::Path;

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Build the site URL for a page: '/' plus the root-relative path
pub fn page_url(path: &Path, root: &Path) -> Option<String> {
    make_relative(path, root).map(|rel| format!("/{}", rel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_normalize_path() {
        let path = Path::new("docs/guide.html");
        assert_eq!(normalize_path(path), "docs/guide.html");
    }

    #[test]
    fn test_make_relative() {
        let root = Path::new("/site");
        let path = Path::new("/site/docs/guide.html");
        assert_eq!(
            make_relative(path, root),
            Some("docs/guide.html".to_string())
        );
    }

    #[test]
    fn test_make_relative_not_under_root() {
        let root = Path::new("/site");
        let path = Path::new("/other/page.html");
        assert_eq!(make_relative(path, root), None);
    }

    #[test]
    fn test_page_url() {
        let root = PathBuf::from("/site");
        let path = root.join("docs").join("guide.html");
        assert_eq!(page_url(&path, &root), Some("/docs/guide.html".to_string()));
    }
}
