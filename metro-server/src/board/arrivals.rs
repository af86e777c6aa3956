//! Arrival merging and ordering.
//!
//! Predictions for a logical station may come from two physical
//! platforms. This module combines them into a single boarding-order
//! list: non-passenger sentinel entries dropped, trains already at the
//! platform first, then by minutes to arrival.

use std::cmp::Ordering;

use crate::wmata::RailPrediction;

/// Line codes the feed uses for trains not accepting passengers.
const NON_PASSENGER_LINES: [&str; 2] = ["None", "No"];

/// Destination placeholders for out-of-service trains: a truncated
/// "No Passenger" fragment and a bare "Train".
const NON_PASSENGER_DESTINATIONS: [&str; 2] = ["ssenger", "Train"];

/// Parsed form of the prediction feed's `Min` field, ordered by how
/// soon the train reaches the platform.
///
/// `Boarding` sorts before `Arriving`, which sorts before any numeric
/// value. Entries the feed cannot estimate (blank, `"---"`, `"DLY"`)
/// sort last; they are real trains, just unplaceable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Arrival {
    /// Doors open at the platform ("BRD").
    Boarding,
    /// Pulling in now ("ARR").
    Arriving,
    /// Due in this many minutes.
    Due(u32),
    /// No usable estimate.
    Unknown,
}

impl Arrival {
    /// Parse the raw `Min` string from the prediction feed.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "BRD" => Arrival::Boarding,
            "ARR" => Arrival::Arriving,
            other => other.parse().map(Arrival::Due).unwrap_or(Arrival::Unknown),
        }
    }
}

/// Combine predictions from a station's platforms into one ordered list.
///
/// The secondary list is the sibling platform's, when the station has
/// one. Non-passenger sentinel entries are dropped, then the remainder
/// is stable-sorted by parsed arrival time, so entries with equal
/// minutes keep their feed order and the result does not depend on
/// which platform's fetch completed first.
pub fn merge(
    primary: Vec<RailPrediction>,
    secondary: Option<Vec<RailPrediction>>,
) -> Vec<RailPrediction> {
    let mut combined: Vec<RailPrediction> = primary
        .into_iter()
        .chain(secondary.into_iter().flatten())
        .filter(carries_passengers)
        .collect();

    combined.sort_by(|a, b| compare(a, b));
    combined
}

/// Whether a prediction is for a train riders can board.
fn carries_passengers(prediction: &RailPrediction) -> bool {
    !NON_PASSENGER_LINES.contains(&prediction.line.as_str())
        && !NON_PASSENGER_DESTINATIONS.contains(&prediction.destination.as_str())
}

/// Boarding-order comparison on the raw minutes field.
fn compare(a: &RailPrediction, b: &RailPrediction) -> Ordering {
    Arrival::parse(&a.minutes).cmp(&Arrival::parse(&b.minutes))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arbitrary_minutes() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("BRD".to_string()),
            Just("ARR".to_string()),
            Just("DLY".to_string()),
            Just(String::new()),
            (0u32..60).prop_map(|n| n.to_string()),
        ]
    }

    fn arbitrary_prediction() -> impl Strategy<Value = RailPrediction> {
        let destination = "[A-Za-z]{3,10}"
            .prop_filter("not a sentinel", |d| !NON_PASSENGER_DESTINATIONS.contains(&d.as_str()));
        (arbitrary_minutes(), destination).prop_map(|(minutes, destination)| RailPrediction {
            line: "RD".into(),
            destination,
            destination_name: None,
            minutes,
            location_code: "A01".into(),
            location_name: "Metro Center".into(),
            cars: None,
            group: None,
        })
    }

    proptest! {
        /// Merged output is always in non-decreasing arrival order
        #[test]
        fn output_is_sorted(
            primary in proptest::collection::vec(arbitrary_prediction(), 0..8),
            secondary in proptest::collection::vec(arbitrary_prediction(), 0..8),
        ) {
            let merged = merge(primary, Some(secondary));
            for pair in merged.windows(2) {
                prop_assert!(Arrival::parse(&pair[0].minutes) <= Arrival::parse(&pair[1].minutes));
            }
        }

        /// Merging never invents entries: output length is the number of
        /// passenger-carrying inputs
        #[test]
        fn output_length_matches_passenger_inputs(
            primary in proptest::collection::vec(arbitrary_prediction(), 0..8),
        ) {
            let expected = primary.len();
            let merged = merge(primary, None);
            prop_assert_eq!(merged.len(), expected);
        }
    }
}
