//! WMATA API response DTOs.
//!
//! These types map directly to the WMATA JSON API responses, which use
//! PascalCase field names. They use `Option` for fields the feeds null
//! out or omit; line codes in particular are null beyond a station's
//! actual lines.

use serde::Deserialize;

use crate::domain::StationCode;

/// Response from `Rail.svc/json/jStations`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StationsResponse {
    #[serde(rename = "Stations")]
    pub stations: Vec<Station>,
}

/// One physical platform entry in the rail reference data.
///
/// Logical stations with two platforms (e.g. transfer stations) appear
/// twice, cross-linked through `station_together1`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Station {
    /// Platform code, e.g. "A01".
    #[serde(rename = "Code")]
    pub code: String,

    /// Canonical station name, e.g. "Metro Center".
    #[serde(rename = "Name")]
    pub name: String,

    /// First line served, e.g. "RD".
    #[serde(rename = "LineCode1")]
    pub line_code1: Option<String>,

    /// Second line served.
    #[serde(rename = "LineCode2")]
    pub line_code2: Option<String>,

    /// Third line served.
    #[serde(rename = "LineCode3")]
    pub line_code3: Option<String>,

    /// Fourth line served.
    #[serde(rename = "LineCode4")]
    pub line_code4: Option<String>,

    /// Sibling platform code for two-platform stations.
    /// The feed sends an empty string rather than null when absent.
    #[serde(rename = "StationTogether1")]
    pub station_together1: Option<String>,
}

impl Station {
    /// The line codes served by this platform, in feed order 1..4.
    ///
    /// Null and empty slots are skipped; duplicates are kept as-is.
    /// This is the identifier set incidents are matched against.
    pub fn line_codes(&self) -> Vec<&str> {
        [
            &self.line_code1,
            &self.line_code2,
            &self.line_code3,
            &self.line_code4,
        ]
        .into_iter()
        .filter_map(|c| c.as_deref())
        .filter(|c| !c.is_empty())
        .collect()
    }

    /// The sibling platform code, when this station has one and it is
    /// well-formed.
    pub fn paired_platform(&self) -> Option<StationCode> {
        self.station_together1
            .as_deref()
            .filter(|s| !s.is_empty())
            .and_then(|s| StationCode::parse(s).ok())
    }
}

/// Response from `StationPrediction.svc/json/GetPrediction/{code}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictionsResponse {
    #[serde(rename = "Trains")]
    pub trains: Vec<RailPrediction>,
}

/// One upcoming rail arrival at a platform.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RailPrediction {
    /// Line code, e.g. "RD". The feed uses "None" or "No" for trains
    /// not in passenger service.
    #[serde(rename = "Line", default)]
    pub line: String,

    /// Abbreviated destination, e.g. "Glenmont".
    #[serde(rename = "Destination", default)]
    pub destination: String,

    /// Full destination name, when the feed provides one.
    #[serde(rename = "DestinationName")]
    pub destination_name: Option<String>,

    /// Minutes to arrival: "BRD" (boarding), "ARR" (arriving), a
    /// numeric string, or blank/"---"/"DLY" when unknown.
    #[serde(rename = "Min", default)]
    pub minutes: String,

    /// Platform code this prediction is for.
    #[serde(rename = "LocationCode", default)]
    pub location_code: String,

    /// Platform name this prediction is for.
    #[serde(rename = "LocationName", default)]
    pub location_name: String,

    /// Number of cars, e.g. "8".
    #[serde(rename = "Car")]
    pub cars: Option<String>,

    /// Track group within the station.
    #[serde(rename = "Group")]
    pub group: Option<String>,
}

/// Response from `Incidents.svc/json/Incidents`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RailIncidentsResponse {
    #[serde(rename = "Incidents")]
    pub incidents: Vec<RailIncident>,
}

/// One active rail service disruption.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RailIncident {
    /// Authority-assigned incident id.
    #[serde(rename = "IncidentID", default)]
    pub incident_id: String,

    /// Free-text description read out to riders.
    #[serde(rename = "Description", default)]
    pub description: String,

    /// Delimiter-joined affected line codes, e.g. "RD; OR;".
    #[serde(rename = "LinesAffected", default)]
    pub lines_affected: String,

    /// Incident category, e.g. "Delay" or "Alert".
    #[serde(rename = "IncidentType")]
    pub incident_type: Option<String>,

    /// Last-update timestamp as reported by the feed.
    #[serde(rename = "DateUpdated")]
    pub date_updated: Option<String>,
}

/// Response from `Incidents.svc/json/BusIncidents`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BusIncidentsResponse {
    #[serde(rename = "BusIncidents")]
    pub incidents: Vec<BusIncident>,
}

/// One active bus service disruption.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BusIncident {
    /// Authority-assigned incident id.
    #[serde(rename = "IncidentID", default)]
    pub incident_id: String,

    /// Free-text description.
    #[serde(rename = "Description", default)]
    pub description: String,

    /// Affected route identifiers.
    #[serde(rename = "RoutesAffected", default)]
    pub routes_affected: Vec<String>,

    /// Incident category.
    #[serde(rename = "IncidentType")]
    pub incident_type: Option<String>,

    /// Last-update timestamp.
    #[serde(rename = "DateUpdated")]
    pub date_updated: Option<String>,
}

/// Response from `NextBusService.svc/json/jPredictions`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StopArrivals {
    /// Stop name; null for stops the feed cannot name.
    #[serde(rename = "StopName")]
    pub stop_name: Option<String>,

    /// Upcoming arrivals, soonest first.
    #[serde(rename = "Predictions", default)]
    pub predictions: Vec<BusPrediction>,
}

/// One upcoming bus arrival at a stop.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BusPrediction {
    /// Route identifier, e.g. "B30".
    #[serde(rename = "RouteID", default)]
    pub route_id: String,

    /// Human-readable heading, e.g. "North to Greenbelt".
    #[serde(rename = "DirectionText")]
    pub direction: Option<String>,

    /// Minutes to arrival. Unlike the rail feed this is numeric.
    #[serde(rename = "Minutes", default)]
    pub minutes: i32,

    /// Vehicle identifier.
    #[serde(rename = "VehicleID")]
    pub vehicle_id: Option<String>,

    /// Trip identifier.
    #[serde(rename = "TripID")]
    pub trip_id: Option<String>,
}
