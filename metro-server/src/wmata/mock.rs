//! Mock WMATA client for testing without API access.
//!
//! Loads sample feed responses from JSON files and serves them as if
//! they were live API responses.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

use crate::domain::{StationCode, StopId};

use super::error::WmataError;
use super::types::{
    BusIncident, BusIncidentsResponse, PredictionsResponse, RailIncident, RailIncidentsResponse,
    RailPrediction, Station, StationsResponse, StopArrivals,
};

/// In-memory snapshot of one mock data directory.
#[derive(Default)]
struct MockData {
    stations: Vec<Station>,
    rail_predictions: HashMap<StationCode, Vec<RailPrediction>>,
    rail_incidents: Vec<RailIncident>,
    bus_incidents: Vec<BusIncident>,
    bus_predictions: HashMap<String, StopArrivals>,
}

/// Mock WMATA client that serves data from JSON files.
///
/// Expects a directory containing `stations.json`, optionally
/// `incidents.json` and `bus_incidents.json`, plus `rail/{CODE}.json`
/// prediction files and `bus/{STOPID}.json` next-bus files. Useful for
/// development and testing without real API credentials.
#[derive(Clone)]
pub struct MockWmataClient {
    data: Arc<RwLock<MockData>>,
    data_dir: PathBuf,
}

impl MockWmataClient {
    /// Create a new mock client by loading JSON files from a directory.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, WmataError> {
        let data_dir = data_dir.as_ref().to_path_buf();
        let data = load_dir(&data_dir)?;

        Ok(Self {
            data: Arc::new(RwLock::new(data)),
            data_dir,
        })
    }

    /// Fetch the rail station reference list.
    pub async fn rail_stations(&self) -> Result<Vec<Station>, WmataError> {
        let data = self.data.read().await;
        Ok(data.stations.clone())
    }

    /// Fetch predictions for one platform.
    ///
    /// Mimics `WmataClient::rail_predictions`; errors when no mock file
    /// was provided for the platform.
    pub async fn rail_predictions(
        &self,
        code: &StationCode,
    ) -> Result<Vec<RailPrediction>, WmataError> {
        let data = self.data.read().await;
        data.rail_predictions
            .get(code)
            .cloned()
            .ok_or_else(|| WmataError::Mock {
                message: format!(
                    "no mock predictions for {}. Available: {:?}",
                    code,
                    data.rail_predictions.keys().collect::<Vec<_>>()
                ),
            })
    }

    /// Fetch the rail incident feed.
    pub async fn rail_incidents(&self) -> Result<Vec<RailIncident>, WmataError> {
        let data = self.data.read().await;
        Ok(data.rail_incidents.clone())
    }

    /// Fetch the bus incident feed.
    pub async fn bus_incidents(&self) -> Result<Vec<BusIncident>, WmataError> {
        let data = self.data.read().await;
        Ok(data.bus_incidents.clone())
    }

    /// Fetch next-bus predictions for one stop.
    pub async fn bus_predictions(&self, stop: &StopId) -> Result<StopArrivals, WmataError> {
        let data = self.data.read().await;
        data.bus_predictions
            .get(stop.as_str())
            .cloned()
            .ok_or_else(|| WmataError::Mock {
                message: format!(
                    "no mock arrivals for stop {}. Available: {:?}",
                    stop,
                    data.bus_predictions.keys().collect::<Vec<_>>()
                ),
            })
    }

    /// List platforms with mock prediction data.
    pub async fn available_platforms(&self) -> Vec<StationCode> {
        let data = self.data.read().await;
        data.rail_predictions.keys().copied().collect()
    }

    /// Reload mock data from disk (useful for development).
    pub async fn reload(&self) -> Result<(), WmataError> {
        let fresh = load_dir(&self.data_dir)?;
        let mut data = self.data.write().await;
        *data = fresh;
        Ok(())
    }
}

/// Load one mock data directory into memory.
fn load_dir(dir: &Path) -> Result<MockData, WmataError> {
    let stations: StationsResponse = read_json(&dir.join("stations.json"))?;

    let mut data = MockData {
        stations: stations.stations,
        ..MockData::default()
    };

    let incidents_path = dir.join("incidents.json");
    if incidents_path.is_file() {
        let incidents: RailIncidentsResponse = read_json(&incidents_path)?;
        data.rail_incidents = incidents.incidents;
    }

    let bus_incidents_path = dir.join("bus_incidents.json");
    if bus_incidents_path.is_file() {
        let incidents: BusIncidentsResponse = read_json(&bus_incidents_path)?;
        data.bus_incidents = incidents.incidents;
    }

    for (stem, path) in json_files(&dir.join("rail"))? {
        let code = StationCode::parse(&stem).map_err(|_| WmataError::Mock {
            message: format!("invalid platform code in filename: {:?}", path),
        })?;
        let predictions: PredictionsResponse = read_json(&path)?;
        data.rail_predictions.insert(code, predictions.trains);
    }

    for (stem, path) in json_files(&dir.join("bus"))? {
        let arrivals: StopArrivals = read_json(&path)?;
        data.bus_predictions.insert(stem, arrivals);
    }

    Ok(data)
}

/// Enumerate `{stem, path}` pairs for .json files in a directory.
///
/// A missing directory is treated as empty so mock sets can omit whole
/// feeds.
fn json_files(dir: &Path) -> Result<Vec<(String, PathBuf)>, WmataError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let entries = std::fs::read_dir(dir).map_err(|e| WmataError::Mock {
        message: format!("failed to read mock data directory {:?}: {}", dir, e),
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| WmataError::Mock {
            message: format!("failed to read directory entry: {}", e),
        })?;

        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
            continue;
        }

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| WmataError::Mock {
                message: format!("invalid filename: {:?}", path),
            })?
            .to_string();

        files.push((stem, path));
    }

    Ok(files)
}

/// Read and parse one JSON file.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, WmataError> {
    let json = std::fs::read_to_string(path).map_err(|e| WmataError::Mock {
        message: format!("failed to read {:?}: {}", path, e),
    })?;

    serde_json::from_str(&json).map_err(|e| WmataError::Mock {
        message: format!("failed to parse {:?}: {}", path, e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATIONS: &str = r#"{
        "Stations": [
            {
                "Code": "A01",
                "Name": "Metro Center",
                "LineCode1": "RD",
                "LineCode2": null,
                "LineCode3": null,
                "LineCode4": null,
                "StationTogether1": "C01"
            }
        ]
    }"#;

    const PREDICTIONS: &str = r#"{
        "Trains": [
            {
                "Car": "8",
                "Destination": "Glenmont",
                "Group": "1",
                "Line": "RD",
                "LocationCode": "A01",
                "LocationName": "Metro Center",
                "Min": "3"
            }
        ]
    }"#;

    const INCIDENTS: &str = r#"{
        "Incidents": [
            {
                "IncidentID": "1",
                "Description": "Red Line: residual delays.",
                "LinesAffected": "RD;",
                "IncidentType": "Delay",
                "DateUpdated": "2015-01-16T08:59:54"
            }
        ]
    }"#;

    const STOP: &str = r#"{
        "StopName": "Nebraska Ave Nw + Macomb St Nw",
        "Predictions": [
            {"RouteID": "M4", "DirectionText": "North", "Minutes": 4}
        ]
    }"#;

    fn write_fixture_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("stations.json"), STATIONS).unwrap();
        std::fs::write(dir.path().join("incidents.json"), INCIDENTS).unwrap();
        std::fs::create_dir(dir.path().join("rail")).unwrap();
        std::fs::write(dir.path().join("rail/A01.json"), PREDICTIONS).unwrap();
        std::fs::create_dir(dir.path().join("bus")).unwrap();
        std::fs::write(dir.path().join("bus/3004076.json"), STOP).unwrap();
        dir
    }

    #[tokio::test]
    async fn load_mock_data() {
        let dir = write_fixture_dir();
        let client = MockWmataClient::new(dir.path()).unwrap();

        let stations = client.rail_stations().await.unwrap();
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].name, "Metro Center");

        let platforms = client.available_platforms().await;
        assert_eq!(platforms, vec![StationCode::parse("A01").unwrap()]);
    }

    #[tokio::test]
    async fn serves_predictions_by_platform() {
        let dir = write_fixture_dir();
        let client = MockWmataClient::new(dir.path()).unwrap();

        let code = StationCode::parse("A01").unwrap();
        let trains = client.rail_predictions(&code).await.unwrap();
        assert_eq!(trains.len(), 1);
        assert_eq!(trains[0].destination, "Glenmont");

        let missing = StationCode::parse("Z99").unwrap();
        assert!(client.rail_predictions(&missing).await.is_err());
    }

    #[tokio::test]
    async fn serves_incidents_and_bus_arrivals() {
        let dir = write_fixture_dir();
        let client = MockWmataClient::new(dir.path()).unwrap();

        let incidents = client.rail_incidents().await.unwrap();
        assert_eq!(incidents.len(), 1);

        // No bus_incidents.json provided: empty, not an error
        assert!(client.bus_incidents().await.unwrap().is_empty());

        let stop = StopId::sanitize("3004076").unwrap();
        let arrivals = client.bus_predictions(&stop).await.unwrap();
        assert_eq!(arrivals.predictions[0].route_id, "M4");
    }

    #[tokio::test]
    async fn reload_picks_up_changes() {
        let dir = write_fixture_dir();
        let client = MockWmataClient::new(dir.path()).unwrap();

        std::fs::write(dir.path().join("rail/C01.json"), PREDICTIONS).unwrap();
        client.reload().await.unwrap();

        let mut platforms = client.available_platforms().await;
        platforms.sort_by_key(|c| c.as_str().to_string());
        assert_eq!(platforms.len(), 2);
    }

    #[test]
    fn missing_stations_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(MockWmataClient::new(dir.path()).is_err());
    }
}
