//! Accept-Language-style header parsing and matching.
//!
//! Parses a comma-separated ranked language-range list (e.g.
//! `"fr-CA,en-GB,en;q=0.8"`) and matches it against the registry. Parsing is
//! forgiving: malformed quality values default to 1.0 and never fail the
//! request; an unmatchable header simply yields no candidate.
//!
//! Matching scans the ranges in their original header order rather than
//! re-sorting by quality: the first range whose code (or code-region) is
//! supported wins.

use crate::registry::LocaleRegistry;

/// One parsed language range from a header value.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageCandidate {
    /// The primary subtag, lower-cased (e.g. `"en"`).
    pub code: String,
    /// The region subtag, upper-cased, when present (e.g. `"GB"`).
    pub region: Option<String>,
    /// The quality weight, 0.0–1.0; defaults to 1.0 when absent or malformed.
    pub quality: f32,
}

impl LanguageCandidate {
    /// Returns the region-qualified identifier, e.g. `"en-GB"`, when a
    /// region is present.
    fn with_region(&self) -> Option<String> {
        self.region
            .as_ref()
            .map(|region| format!("{}-{region}", self.code))
    }
}

/// Parses a header value into ranked candidates, preserving header order.
///
/// Empty ranges, wildcards (`*`) and ranges weighted `q=0` are dropped.
///
/// # Examples
///
/// ```
/// use lingua_rs_negotiation::accept::parse;
///
/// let candidates = parse("fr-CA,en;q=0.8");
/// assert_eq!(candidates.len(), 2);
/// assert_eq!(candidates[0].code, "fr");
/// assert_eq!(candidates[0].region.as_deref(), Some("CA"));
/// assert!((candidates[1].quality - 0.8).abs() < f32::EPSILON);
/// ```
pub fn parse(header: &str) -> Vec<LanguageCandidate> {
    let mut candidates = Vec::new();

    for range in header.split(',') {
        let mut parts = range.trim().split(';');
        let tag = parts.next().unwrap_or("").trim();
        if tag.is_empty() || tag == "*" {
            continue;
        }

        // A malformed quality value is tolerated, not an error.
        let quality = parts
            .find_map(|param| {
                let param = param.trim();
                param.strip_prefix("q=").or_else(|| param.strip_prefix("Q="))
            })
            .and_then(|q| q.trim().parse::<f32>().ok())
            .filter(|q| (0.0..=1.0).contains(q))
            .unwrap_or(1.0);

        if quality <= 0.0 {
            continue;
        }

        let mut subtags = tag.split('-');
        let code = match subtags.next() {
            Some(code) if !code.is_empty() => code.to_ascii_lowercase(),
            _ => continue,
        };
        let region = subtags.next().map(str::to_ascii_uppercase);

        candidates.push(LanguageCandidate {
            code,
            region,
            quality,
        });
    }

    candidates
}

/// Matches a header value against the registry.
///
/// Scans candidates in header order and returns the canonical spelling of
/// the first supported identifier. When a candidate carries a region and the
/// region-qualified identifier is itself supported, that identifier is
/// preferred over the bare code. No match is not an error; the resolver
/// falls through to the default locale.
///
/// # Examples
///
/// ```
/// use lingua_rs_negotiation::{accept, LocaleRegistry};
///
/// let registry = LocaleRegistry::configure(
///     vec!["de".into(), "en-GB".into(), "en".into(), "fr".into()],
///     None,
/// ).unwrap();
///
/// let matched = accept::negotiate("es,en-GB,en-US;q=0.9,en;q=0.8", &registry);
/// assert_eq!(matched.as_deref(), Some("en-GB"));
/// ```
pub fn negotiate(header: &str, registry: &LocaleRegistry) -> Option<String> {
    for candidate in parse(header) {
        if let Some(qualified) = candidate.with_region() {
            if let Some(canonical) = registry.canonical(&qualified) {
                return Some(canonical.to_string());
            }
        }
        if let Some(canonical) = registry.canonical(&candidate.code) {
            return Some(canonical.to_string());
        }
    }
    None
}
