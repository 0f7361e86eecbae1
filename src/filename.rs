use anyhow::{bail, Context, Result};
use url::Url;

/// Derive a stable output filename from a source URL.
///
/// The base name folds in the second-to-last path segment (lists frequently
/// share a host and differ only in the final segment), drops a trailing
/// `.txt`, and maps `-` and `.` to `_` before appending `.json`.
/// Deterministic, no I/O.
pub fn derive_filename(raw_url: &str) -> Result<String> {
    let url = Url::parse(raw_url).with_context(|| format!("Invalid source URL: {}", raw_url))?;

    // Url::path() carries no query or fragment.
    let segments: Vec<&str> = url
        .path()
        .trim_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();

    let mut base = match segments.as_slice() {
        [] => bail!("Source URL has no path segments: {}", raw_url),
        [only] => (*only).to_string(),
        [.., second_last, last] => format!("{}_{}", second_last, last),
    };

    if let Some(stripped) = base.strip_suffix(".txt") {
        base = stripped.to_string();
    }

    Ok(format!("{}.json", base.replace(['-', '.'], "_")))
}

// ── Tests ──
