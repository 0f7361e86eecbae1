use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use tracing::{info, warn};

use crate::extract::extract_domains;
use crate::fetch;
use crate::filename::derive_filename;
use crate::ruleset::RuleSet;

/// Conversion stats returned after completion.
pub struct ConvertStats {
    pub total: usize,
    pub ok: usize,
    pub errors: usize,
    pub domains: usize,
}

/// A source URL paired with its derived output filename.
pub struct PlannedSource {
    pub url: String,
    pub file_name: String,
}

/// Derive the output filename for every source up front.
///
/// An underivable URL is fatal here: that is a config mistake, not a transient
/// failure. Two sources mapping to the same filename get a warning; the later
/// write wins.
pub fn plan_sources(urls: &[String]) -> Result<Vec<PlannedSource>> {
    let mut planned = Vec::with_capacity(urls.len());
    let mut seen: HashMap<String, String> = HashMap::new();

    for url in urls {
        let file_name = derive_filename(url)?;
        if let Some(prev) = seen.insert(file_name.clone(), url.clone()) {
            warn!(
                "{} and {} both map to {}; the later write wins",
                prev, url, file_name
            );
        }
        planned.push(PlannedSource {
            url: url.clone(),
            file_name,
        });
    }

    Ok(planned)
}

/// Fetch every source in order and write one rule-set file per success.
/// A fetch failure skips that source and never aborts the run.
pub async fn convert_sources(
    client: &Client,
    sources: &[PlannedSource],
    out_dir: &Path,
) -> Result<ConvertStats> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let total = sources.len();
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec}, eta {eta})")?
            .progress_chars("=> "),
    );

    let mut ok = 0usize;
    let mut errors = 0usize;
    let mut domains_written = 0usize;

    for source in sources {
        let out_path = out_dir.join(&source.file_name);
        info!("Processing {} -> {}", source.url, out_path.display());

        match fetch::fetch_text(client, &source.url).await {
            Ok(text) => {
                let domains = extract_domains(&text);
                let count = domains.len();
                RuleSet::from_domains(domains).write_to(&out_path)?;
                info!("Saved {} domains to {}", count, out_path.display());
                ok += 1;
                domains_written += count;
            }
            Err(e) => {
                warn!("Failed to download {}: {:#}", source.url, e);
                errors += 1;
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    info!("Converted {} sources ({} ok, {} errors)", total, ok, errors);

    Ok(ConvertStats {
        total,
        ok,
        errors,
        domains: domains_written,
    })
}

// ── Tests ──
