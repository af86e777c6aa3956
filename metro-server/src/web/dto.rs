//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::board::{StationTimetable, StopTimetable};
use crate::board::incidents::affected_lines;
use crate::wmata::{BusIncident, BusPrediction, RailIncident, RailPrediction};

/// Request for a rail station timetable.
#[derive(Debug, Deserialize)]
pub struct StationQuery {
    /// Free-text station name, e.g. "metro center"
    pub station: String,
}

/// Request for a bus stop timetable.
#[derive(Debug, Deserialize)]
pub struct StopQuery {
    /// Stop identifier, possibly noisy ("stop #3004-076")
    pub stop: String,
}

/// A rail arrival in a timetable response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    /// Line code, e.g. "RD"
    pub line: String,

    /// Destination name
    pub destination: String,

    /// Raw minutes field: "BRD", "ARR", or a numeric string
    pub minutes: String,

    /// Platform code this arrival was predicted for
    pub platform_code: String,

    /// Number of cars, when known
    pub cars: Option<String>,
}

impl From<RailPrediction> for PredictionResult {
    fn from(p: RailPrediction) -> Self {
        Self {
            line: p.line,
            // Prefer the full name; the short field is heavily abbreviated
            destination: p.destination_name.unwrap_or(p.destination),
            minutes: p.minutes,
            platform_code: p.location_code,
            cars: p.cars,
        }
    }
}

/// An incident in a timetable response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentResult {
    /// Free-text description
    pub description: String,

    /// Affected line codes, tokenized
    pub lines_affected: Vec<String>,

    /// Incident category, e.g. "Delay"
    pub incident_type: Option<String>,
}

impl From<RailIncident> for IncidentResult {
    fn from(incident: RailIncident) -> Self {
        let lines_affected = affected_lines(&incident)
            .into_iter()
            .map(String::from)
            .collect();
        Self {
            description: incident.description,
            lines_affected,
            incident_type: incident.incident_type,
        }
    }
}

impl From<BusIncident> for IncidentResult {
    fn from(incident: BusIncident) -> Self {
        Self {
            description: incident.description,
            lines_affected: incident.routes_affected,
            incident_type: incident.incident_type,
        }
    }
}

/// Response for a rail station timetable.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationTimetableResponse {
    /// Canonical station name
    pub station_name: String,

    /// Ordered arrival predictions
    pub predictions: Vec<PredictionResult>,

    /// Incidents relevant to the station's lines
    pub incidents: Vec<IncidentResult>,
}

impl From<StationTimetable> for StationTimetableResponse {
    fn from(t: StationTimetable) -> Self {
        Self {
            station_name: t.station_name,
            predictions: t.predictions.into_iter().map(Into::into).collect(),
            incidents: t.incidents.into_iter().map(Into::into).collect(),
        }
    }
}

/// A bus arrival in a stop timetable response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusPredictionResult {
    /// Route identifier, e.g. "B30"
    pub route_id: String,

    /// Human-readable heading
    pub direction: Option<String>,

    /// Minutes to arrival
    pub minutes: i32,
}

impl From<BusPrediction> for BusPredictionResult {
    fn from(p: BusPrediction) -> Self {
        Self {
            route_id: p.route_id,
            direction: p.direction,
            minutes: p.minutes,
        }
    }
}

/// Response for a bus stop timetable.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StopTimetableResponse {
    /// Stop name (or id when the feed has no name)
    pub stop_name: String,

    /// Upcoming arrivals, soonest first
    pub predictions: Vec<BusPredictionResult>,

    /// Route-level disruptions; empty until route matching lands
    pub incidents: Vec<IncidentResult>,
}

impl From<StopTimetable> for StopTimetableResponse {
    fn from(t: StopTimetable) -> Self {
        Self {
            stop_name: t.stop_name,
            predictions: t.predictions.into_iter().map(Into::into).collect(),
            incidents: t.incidents.into_iter().map(Into::into).collect(),
        }
    }
}

/// Error payload for not-found and unavailable outcomes.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}
