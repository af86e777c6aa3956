//! Station name resolution.
//!
//! Maps a free-text station name (typically a voice transcription) to a
//! reference-data station record. Two strategies run in order: a
//! bidirectional substring pass, then a Jaro-Winkler similarity pass
//! for misspellings the substring pass cannot bridge.

use crate::wmata::Station;

/// Resolve a free-text query against the station reference list.
///
/// The query and every station name are compared lowercased. The
/// substring pass wins first: a station matches when its name contains
/// the query or the query contains the name (riders say both more and
/// less than the canonical name - "metro center station", "noma").
/// Reference-data order decides between multiple substring candidates.
///
/// Only when no substring candidate exists does the similarity pass
/// run, returning the best-scoring station at or above `threshold`.
/// Returns `None` when neither pass finds a station.
pub fn resolve<'a>(query: &str, stations: &'a [Station], threshold: f64) -> Option<&'a Station> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    partial_match(&query, stations).or_else(|| fuzzy_match(&query, stations, threshold))
}

/// First station whose lowercased name and the query contain each other
/// either way.
fn partial_match<'a>(query: &str, stations: &'a [Station]) -> Option<&'a Station> {
    stations.iter().find(|station| {
        let name = station.name.to_lowercase();
        name.contains(query) || query.contains(&name)
    })
}

/// Highest-similarity station at or above the threshold.
///
/// Ties keep the first-encountered station: the scan only replaces the
/// running best on a strictly greater score.
fn fuzzy_match<'a>(query: &str, stations: &'a [Station], threshold: f64) -> Option<&'a Station> {
    let mut best: Option<(&Station, f64)> = None;

    for station in stations {
        let score = strsim::jaro_winkler(query, &station.name.to_lowercase());
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((station, score));
        }
    }

    best.filter(|&(_, score)| score >= threshold)
        .map(|(station, _)| station)
}
