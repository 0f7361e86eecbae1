use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

const RULESET_VERSION: u32 = 3;

/// Fixed rule-set envelope: one document per source, overwritten wholesale.
#[derive(Debug, Serialize)]
pub struct RuleSet {
    pub version: u32,
    pub rules: Vec<Rule>,
}

#[derive(Debug, Serialize)]
pub struct Rule {
    pub domain_suffix: Vec<String>,
}

impl RuleSet {
    /// Wrap an already-sorted domain list in the version-3 envelope.
    pub fn from_domains(domains: Vec<String>) -> Self {
        RuleSet {
            version: RULESET_VERSION,
            rules: vec![Rule {
                domain_suffix: domains,
            }],
        }
    }

    /// 2-space-indented JSON; non-ASCII is emitted literally, not escaped.
    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize rule-set")
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_pretty_json()?)
            .with_context(|| format!("Failed to write {}", path.display()))
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_domains;

    #[test]
    fn envelope_shape() {
        let json = RuleSet::from_domains(vec!["a.com".into(), "b.org".into()])
            .to_pretty_json()
            .unwrap();
        assert_eq!(
            json,
            "{\n  \"version\": 3,\n  \"rules\": [\n    {\n      \"domain_suffix\": [\n        \"a.com\",\n        \"b.org\"\n      ]\n    }\n  ]\n}"
        );
    }

    #[test]
    fn empty_domain_list_still_has_one_rule() {
        let json = RuleSet::from_domains(Vec::new()).to_pretty_json().unwrap();
        assert!(json.contains("\"domain_suffix\": []"));
    }

    #[test]
    fn non_ascii_emitted_literally() {
        let json = RuleSet::from_domains(vec!["bücher.example".into()])
            .to_pretty_json()
            .unwrap();
        assert!(json.contains("bücher.example"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn pipeline_output_is_idempotent() {
        // Same input text → byte-identical file, run after run.
        let text = "0.0.0.0 z.com\n0.0.0.0 a.com\n! note\n0.0.0.0 a.com\n";
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        RuleSet::from_domains(extract_domains(text))
            .write_to(&path)
            .unwrap();
        let first = fs::read(&path).unwrap();

        RuleSet::from_domains(extract_domains(text))
            .write_to(&path)
            .unwrap();
        assert_eq!(fs::read(&path).unwrap(), first);
    }
}
