//! Free-text place resolution.
//!
//! Queries are matched case-insensitively as substrings of place identifiers.
//! When several places match, the first one in the graph's enumeration order
//! wins. That keeps resolution predictable but means an ambiguous query picks
//! a candidate without telling the caller; [`matching_places`] exposes the full
//! candidate list for callers that want to surface the ambiguity.

use std::cmp::Ordering;

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::Graph;

/// Maximum number of "did you mean" suggestions attached to a failed lookup.
pub const MAX_SUGGESTIONS: usize = 3;

/// Minimum Jaro-Winkler similarity for a place to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// Resolve `query` to a place identifier.
///
/// Empty and whitespace-only queries never match anything: every identifier
/// contains the empty string, so accepting it would silently select the first
/// place in the facility.
pub fn resolve_place<'g>(graph: &'g Graph, query: &str) -> Result<&'g str> {
    let candidates = matching_places(graph, query);
    match candidates.first() {
        Some(&place) => {
            if candidates.len() > 1 {
                debug!(
                    query,
                    resolved = place,
                    candidates = candidates.len(),
                    "ambiguous place query"
                );
            }
            Ok(place)
        }
        None => Err(Error::PlaceNotFound {
            query: query.trim().to_string(),
            suggestions: suggest_places(graph, query, MAX_SUGGESTIONS),
        }),
    }
}

/// Every place whose identifier contains `query` (trimmed, case-insensitive),
/// in enumeration order.
pub fn matching_places<'g>(graph: &'g Graph, query: &str) -> Vec<&'g str> {
    let needle = normalize(query);
    if needle.is_empty() {
        return Vec::new();
    }
    graph
        .places()
        .filter(|place| place.to_lowercase().contains(&needle))
        .collect()
}

/// Places whose identifiers look similar to `query`, best match first.
///
/// Used only to enrich not-found messages; it never influences what
/// [`resolve_place`] returns.
pub fn suggest_places(graph: &Graph, query: &str, limit: usize) -> Vec<String> {
    let needle = normalize(query);
    if needle.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut scored = graph
        .places()
        .map(|place| (place, strsim::jaro_winkler(&needle, &place.to_lowercase())))
        .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
        .collect::<Vec<_>>();

    // Stable sort keeps enumeration order among equal scores.
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    scored
        .into_iter()
        .take(limit)
        .map(|(place, _)| place.to_string())
        .collect()
}

fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}
