use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Load the ordered source list: a JSON array of URL strings.
/// A missing or malformed file is a fatal startup error.
pub fn load_sources(path: &Path) -> Result<Vec<String>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read source list {}", path.display()))?;
    let urls: Vec<String> = serde_json::from_str(&raw).with_context(|| {
        format!(
            "Source list {} is not a JSON array of URL strings",
            path.display()
        )
    })?;
    Ok(urls)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_url_array_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules_list.json");
        fs::write(&path, r#"["https://a/x/1.txt", "https://b/y/2.txt"]"#).unwrap();
        let urls = load_sources(&path).unwrap();
        assert_eq!(urls, vec!["https://a/x/1.txt", "https://b/y/2.txt"]);
    }

    #[test]
    fn missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_sources(&dir.path().join("nope.json")).is_err());
    }

    #[test]
    fn malformed_json_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules_list.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(load_sources(&path).is_err());
    }

    #[test]
    fn non_string_entries_are_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules_list.json");
        fs::write(&path, r#"[1, 2, 3]"#).unwrap();
        assert!(load_sources(&path).is_err());
    }
}
