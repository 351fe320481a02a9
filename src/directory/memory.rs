//! In-memory directory implementations for testing and development

use crate::core::types::{Signal, Station};
use crate::directory::{DirectoryError, DirectoryResult, StationDirectory, UnknownSignalRecorder};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Station directory backed by a plain map.
#[derive(Debug, Default)]
pub struct MemoryStationDirectory {
    stations: HashMap<String, Station>,
    fail_lookups: AtomicBool,
}

impl MemoryStationDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a directory from a list of stations.
    pub fn with_stations(stations: Vec<Station>) -> Self {
        let mut directory = Self::new();
        for station in stations {
            directory.insert(station);
        }
        directory
    }

    pub fn insert(&mut self, station: Station) {
        self.stations.insert(station.id.clone(), station);
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Make every subsequent lookup fail, simulating a backend outage.
    pub fn simulate_failure(&self, enable: bool) {
        self.fail_lookups.store(enable, Ordering::SeqCst);
    }
}

impl StationDirectory for MemoryStationDirectory {
    fn find_stations(&self, ids: &[String]) -> DirectoryResult<Vec<Station>> {
        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(DirectoryError::Unavailable {
                reason: "simulated outage".to_string(),
            });
        }

        Ok(ids
            .iter()
            .filter_map(|id| self.stations.get(id).cloned())
            .collect())
    }
}

/// Recorder that captures every batch it receives, with an optional
/// failure switch for exercising the best-effort path.
#[derive(Debug, Default)]
pub struct MemorySignalRecorder {
    recorded: Mutex<Vec<Signal>>,
    fail_writes: AtomicBool,
}

impl MemorySignalRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All signals recorded so far, in arrival order.
    pub fn recorded(&self) -> Vec<Signal> {
        self.recorded.lock().unwrap().clone()
    }

    /// Make every subsequent write fail, simulating a storage error.
    pub fn simulate_failure(&self, enable: bool) {
        self.fail_writes.store(enable, Ordering::SeqCst);
    }
}

impl UnknownSignalRecorder for MemorySignalRecorder {
    fn record_unknown(&self, signals: &[Signal]) -> DirectoryResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DirectoryError::Query {
                message: "simulated write failure".to_string(),
            });
        }

        self.recorded.lock().unwrap().extend_from_slice(signals);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(id: &str, lat: f64, lng: f64) -> Station {
        Station {
            id: id.to_string(),
            lat,
            lng,
        }
    }

    #[test]
    fn test_lookup_returns_only_known_stations() {
        let directory = MemoryStationDirectory::with_stations(vec![
            station("0-1-1", 30.0, 103.0),
            station("0-1-2", 30.1, 103.1),
        ]);

        let found = directory
            .find_stations(&["0-1-1".to_string(), "0-9-9".to_string()])
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "0-1-1");
    }

    #[test]
    fn test_simulated_outage_surfaces_as_error() {
        let directory = MemoryStationDirectory::with_stations(vec![station("0-1-1", 30.0, 103.0)]);
        directory.simulate_failure(true);

        let result = directory.find_stations(&["0-1-1".to_string()]);
        assert!(matches!(result, Err(DirectoryError::Unavailable { .. })));
    }

    #[test]
    fn test_recorder_captures_batches() {
        let recorder = MemorySignalRecorder::new();
        let signals = vec![Signal {
            mnc: "0".to_string(),
            lac: "1".to_string(),
            cid: "2".to_string(),
            strength: -90.0,
        }];

        recorder.record_unknown(&signals).unwrap();
        assert_eq!(recorder.recorded(), signals);
    }

    #[test]
    fn test_recorder_failure_switch() {
        let recorder = MemorySignalRecorder::new();
        recorder.simulate_failure(true);

        let result = recorder.record_unknown(&[]);
        assert!(matches!(result, Err(DirectoryError::Query { .. })));
        assert!(recorder.recorded().is_empty());
    }
}
