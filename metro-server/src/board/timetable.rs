//! Timetable aggregation.
//!
//! Orchestrates one query end to end: resolve the spoken station name,
//! fetch predictions for the station's platform(s) and the incident
//! feed concurrently, then merge and filter into a single response.

use tracing::{debug, warn};

use crate::domain::{StationCode, StopId};
use crate::wmata::{
    BusIncident, BusPrediction, MockWmataClient, RailIncident, RailPrediction, Station,
    StopArrivals, WmataClient, WmataError,
};

use super::config::BoardConfig;
use super::{arrivals, incidents, matching};

/// The upstream fetch capability the aggregation pipeline runs on.
///
/// This abstraction allows the pipeline to be tested with mock data;
/// the live client, the file-backed mock, and in-memory test stubs all
/// implement it.
#[allow(async_fn_in_trait)]
pub trait TransitFeed {
    /// Fetch the rail station reference list.
    async fn rail_stations(&self) -> Result<Vec<Station>, WmataError>;

    /// Fetch live predictions for one platform.
    async fn rail_predictions(&self, code: &StationCode)
    -> Result<Vec<RailPrediction>, WmataError>;

    /// Fetch the active rail incident feed.
    async fn rail_incidents(&self) -> Result<Vec<RailIncident>, WmataError>;

    /// Fetch next-bus predictions for one stop.
    async fn bus_predictions(&self, stop: &StopId) -> Result<StopArrivals, WmataError>;
}

impl TransitFeed for WmataClient {
    async fn rail_stations(&self) -> Result<Vec<Station>, WmataError> {
        self.rail_stations().await
    }

    async fn rail_predictions(
        &self,
        code: &StationCode,
    ) -> Result<Vec<RailPrediction>, WmataError> {
        self.rail_predictions(code).await
    }

    async fn rail_incidents(&self) -> Result<Vec<RailIncident>, WmataError> {
        self.rail_incidents().await
    }

    async fn bus_predictions(&self, stop: &StopId) -> Result<StopArrivals, WmataError> {
        self.bus_predictions(stop).await
    }
}

impl TransitFeed for MockWmataClient {
    async fn rail_stations(&self) -> Result<Vec<Station>, WmataError> {
        self.rail_stations().await
    }

    async fn rail_predictions(
        &self,
        code: &StationCode,
    ) -> Result<Vec<RailPrediction>, WmataError> {
        self.rail_predictions(code).await
    }

    async fn rail_incidents(&self) -> Result<Vec<RailIncident>, WmataError> {
        self.rail_incidents().await
    }

    async fn bus_predictions(&self, stop: &StopId) -> Result<StopArrivals, WmataError> {
        self.bus_predictions(stop).await
    }
}

/// Outcome of a timetable lookup.
///
/// The voice layer answers each variant differently: "here are your
/// trains", "I couldn't find that station", and "the feed is down",
/// so an unreachable feed must never masquerade as an empty platform.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    /// The query resolved; the payload may still be partially degraded
    /// if an individual sub-fetch failed.
    Found(T),
    /// No station or stop matched the query.
    NotFound,
    /// The upstream feed could not be reached or parsed.
    Unavailable,
}

/// A rail station's aggregated timetable.
#[derive(Debug, Clone, PartialEq)]
pub struct StationTimetable {
    /// Canonical station name from the reference data.
    pub station_name: String,
    /// Merged, ordered, passenger-only arrival predictions.
    pub predictions: Vec<RailPrediction>,
    /// Incidents touching the station's lines, in feed order.
    pub incidents: Vec<RailIncident>,
}

/// A bus stop's aggregated timetable.
#[derive(Debug, Clone, PartialEq)]
pub struct StopTimetable {
    /// Stop name from the feed, or the stop id when the feed has none.
    pub stop_name: String,
    /// Upcoming arrivals as the feed reports them, soonest first.
    pub predictions: Vec<BusPrediction>,
    /// Route-level disruptions. Currently always empty.
    pub incidents: Vec<BusIncident>,
}

/// Timetable aggregation service.
///
/// Owns the feed handle and tuning configuration; one instance serves
/// all queries, each of which fetches its reference data fresh.
pub struct TimetableService<F: TransitFeed> {
    feed: F,
    config: BoardConfig,
}

impl<F: TransitFeed> TimetableService<F> {
    /// Create a new service over the given feed.
    pub fn new(feed: F, config: BoardConfig) -> Self {
        Self { feed, config }
    }

    /// Borrow the underlying feed.
    pub fn feed(&self) -> &F {
        &self.feed
    }

    /// Aggregate a rail timetable for a spoken station name.
    ///
    /// The reference fetch and name resolution are load-bearing: if
    /// either cannot produce a station, the lookup is `Unavailable` or
    /// `NotFound` respectively. Past that point the query always
    /// produces a timetable; prediction and incident sub-fetches that
    /// fail degrade to empty lists rather than failing the lookup.
    pub async fn station_timetable(&self, query: &str) -> Lookup<StationTimetable> {
        let stations = match self.feed.rail_stations().await {
            Ok(stations) => stations,
            Err(e) => {
                warn!("station reference fetch failed: {e}");
                return Lookup::Unavailable;
            }
        };

        let Some(station) = matching::resolve(query, &stations, self.config.fuzzy_threshold)
        else {
            debug!(query, "no station matched");
            return Lookup::NotFound;
        };
        debug!(query, code = %station.code, name = %station.name, "resolved station");

        let code = match StationCode::parse(&station.code) {
            Ok(code) => code,
            Err(e) => {
                warn!(code = %station.code, "malformed platform code in reference data: {e}");
                return Lookup::Unavailable;
            }
        };
        let paired = station.paired_platform();

        // The three remaining fetches are independent; only the merge
        // order matters, and the sort inside merge fixes that.
        let (primary, secondary, incident_feed) = futures::join!(
            self.feed.rail_predictions(&code),
            self.paired_predictions(paired),
            self.feed.rail_incidents(),
        );

        let primary = primary.unwrap_or_else(|e| {
            warn!(%code, "prediction fetch failed: {e}");
            Vec::new()
        });
        let incident_feed = incident_feed.unwrap_or_else(|e| {
            warn!("incident fetch failed: {e}");
            Vec::new()
        });

        let line_codes: Vec<String> =
            station.line_codes().into_iter().map(String::from).collect();

        Lookup::Found(StationTimetable {
            station_name: station.name.clone(),
            predictions: arrivals::merge(primary, secondary),
            incidents: incidents::relevant(&line_codes, incident_feed),
        })
    }

    /// Aggregate a bus timetable for a (possibly noisy) stop id.
    pub async fn stop_timetable(&self, raw: &str) -> Lookup<StopTimetable> {
        let stop = match StopId::sanitize(raw) {
            Ok(stop) => stop,
            Err(e) => {
                debug!(raw, "unusable stop id: {e}");
                return Lookup::NotFound;
            }
        };

        let arrivals = match self.feed.bus_predictions(&stop).await {
            Ok(arrivals) => arrivals,
            Err(e) => {
                warn!(%stop, "next-bus fetch failed: {e}");
                return Lookup::Unavailable;
            }
        };

        Lookup::Found(StopTimetable {
            stop_name: arrivals
                .stop_name
                .unwrap_or_else(|| format!("stop {stop}")),
            predictions: arrivals.predictions,
            // TODO: attach bus incidents once RoutesAffected can be
            // matched against the routes serving a stop.
            incidents: Vec::new(),
        })
    }

    /// Fetch the sibling platform's predictions, when there is one.
    ///
    /// A failed sibling fetch degrades to "no sibling" - the primary
    /// platform's list still answers the query.
    async fn paired_predictions(&self, paired: Option<StationCode>) -> Option<Vec<RailPrediction>> {
        let code = paired?;
        match self.feed.rail_predictions(&code).await {
            Ok(predictions) => Some(predictions),
            Err(e) => {
                warn!(%code, "sibling platform fetch failed: {e}");
                None
            }
        }
    }
}
