//! Configuration for timetable aggregation.

/// Minimum Jaro-Winkler similarity for a fuzzy station match.
///
/// Below this, a misheard name is more likely to be a different station
/// than a misspelling of the right one.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.8;

/// Configuration parameters for timetable lookups.
///
/// Constructed once at startup and passed into the aggregation service;
/// there is no process-wide configuration state.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// Minimum similarity score for fuzzy station-name matching.
    /// Queries scoring below this against every station are not-found.
    pub fuzzy_threshold: f64,
}

impl BoardConfig {
    /// Create a new configuration with the given threshold.
    pub fn new(fuzzy_threshold: f64) -> Self {
        Self { fuzzy_threshold }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.fuzzy_threshold, DEFAULT_FUZZY_THRESHOLD);
    }

    #[test]
    fn custom_config() {
        let config = BoardConfig::new(0.9);
        assert_eq!(config.fuzzy_threshold, 0.9);
    }
}
