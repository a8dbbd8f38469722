//! Public Suffix List integration for hostname splitting.

use psl::{List, Psl};

/// A hostname split around its registrable domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostLabels {
    /// Labels left of the registrable domain (`["www", "api"]`)
    pub subdomain: Vec<String>,
    /// Registrable label (`"example"`)
    pub domain: String,
    /// Public suffix labels (`["co", "uk"]`)
    pub tld: Vec<String>,
}

/// Splits hostnames into subdomain, domain and top-level domain labels.
///
/// Returns `None` when the hostname cannot be split, e.g. because its
/// suffix is unknown or it has no registrable label.
pub trait SuffixResolver {
    fn split(&self, hostname: &str) -> Option<HostLabels>;
}

/// [`SuffixResolver`] backed by the compiled-in Public Suffix List.
#[derive(Debug, Clone, Copy, Default)]
pub struct PublicSuffixList;

impl SuffixResolver for PublicSuffixList {
    fn split(&self, hostname: &str) -> Option<HostLabels> {
        split_with_psl(hostname)
    }
}

fn split_with_psl(host: &str) -> Option<HostLabels> {
    // The list only holds lowercase entries
    let host = host.to_ascii_lowercase();
    let host = host.as_str();

    // The registrable domain, e.g. "example.co.uk"
    let registrable = List.domain(host.as_bytes())?;
    let suffix = registrable.suffix();

    // Wildcard fallback suffixes ("*") do not count as a known TLD
    if !suffix.is_known() {
        return None;
    }

    let registrable = std::str::from_utf8(registrable.as_bytes()).ok()?;
    let tld = std::str::from_utf8(suffix.as_bytes()).ok()?;

    let domain = registrable
        .strip_suffix(tld)
        .and_then(|rest| rest.strip_suffix('.'))
        .filter(|domain| !domain.is_empty())?;

    let subdomain = host
        .strip_suffix(registrable)
        .map(|rest| rest.strip_suffix('.').unwrap_or(rest))
        .unwrap_or("");

    Some(HostLabels {
        subdomain: labels(subdomain),
        domain: domain.to_string(),
        tld: labels(tld),
    })
}

fn labels(value: &str) -> Vec<String> {
    if value.is_empty() {
        Vec::new()
    } else {
        value.split('.').map(str::to_string).collect()
    }
}
