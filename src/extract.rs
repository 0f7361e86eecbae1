use std::collections::BTreeSet;

const SENTINEL_IP: &str = "0.0.0.0";

/// Extract domains from hosts-style blocklist text.
///
/// Only lines of exactly two whitespace-separated tokens whose first token is
/// `0.0.0.0` qualify; the second token is taken as the domain, verbatim.
/// Empty lines and `!` comments are skipped, everything else is silently
/// dropped. Returns the domains deduplicated and sorted ascending.
pub fn extract_domains(text: &str) -> Vec<String> {
    let mut domains = BTreeSet::new();

    // Split on both \r and \n so classic-Mac and CRLF files both work;
    // the empty strings a \r\n pair produces are skipped as blank lines.
    for line in text.split(['\r', '\n']) {
        let line = line.trim();
        if line.is_empty() || line.starts_with('!') {
            continue;
        }
        let mut tokens = line.split_whitespace();
        if let (Some(SENTINEL_IP), Some(domain), None) =
            (tokens.next(), tokens.next(), tokens.next())
        {
            domains.insert(domain.to_string());
        }
    }

    domains.into_iter().collect()
}

// ── Tests ──
