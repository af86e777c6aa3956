//! Incident relevance filtering.
//!
//! The incident feed covers the whole network; a timetable response
//! should only carry the disruptions touching the resolved station's
//! lines.

use crate::wmata::RailIncident;

/// Tokenize an incident's affected-lines field.
///
/// The feed joins line codes with semicolons ("RD; OR;"), though commas
/// show up in older payloads. Whitespace around tokens and trailing
/// empty tokens are discarded.
pub fn affected_lines(incident: &RailIncident) -> Vec<&str> {
    incident
        .lines_affected
        .split([';', ','])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Filter an incident feed down to the incidents touching any of the
/// given line codes.
///
/// Feed order is preserved. An empty code set matches nothing: a
/// station serving no lines has no relevant disruptions, not all of
/// them.
pub fn relevant(codes: &[String], incidents: Vec<RailIncident>) -> Vec<RailIncident> {
    if codes.is_empty() {
        return Vec::new();
    }

    incidents
        .into_iter()
        .filter(|incident| {
            affected_lines(incident)
                .iter()
                .any(|line| codes.iter().any(|code| code == line))
        })
        .collect()
}
