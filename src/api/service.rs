//! Position computation service
//!
//! Ties resolution, outlier filtering and triangulation together behind a
//! single entry point, with the station directory and the unknown-signal
//! recorder injected as collaborators.

use crate::algorithms::{find_closest_stations, triangulate};
use crate::api::types::{ApiConfig, ApiResult, PositionError};
use crate::api::worker::UnknownSignalWorker;
use crate::core::types::{ObservedStation, PositionEstimate, Signal, Station};
use crate::directory::{StationDirectory, UnknownSignalRecorder};
use crate::validation::validate_signals;
use std::collections::HashMap;
use std::sync::Arc;

/// Computes position estimates from batches of cell signals.
pub struct PositionService {
    directory: Arc<dyn StationDirectory>,
    worker: UnknownSignalWorker,
    config: ApiConfig,
}

impl PositionService {
    /// Create a service with the default configuration.
    pub fn new(
        directory: Arc<dyn StationDirectory>,
        recorder: Arc<dyn UnknownSignalRecorder>,
    ) -> Self {
        Self::with_config(directory, recorder, ApiConfig::default())
    }

    /// Create a service with an explicit configuration.
    pub fn with_config(
        directory: Arc<dyn StationDirectory>,
        recorder: Arc<dyn UnknownSignalRecorder>,
        config: ApiConfig,
    ) -> Self {
        let worker = UnknownSignalWorker::spawn(recorder, config.recorder_queue_size);
        Self {
            directory,
            worker,
            config,
        }
    }

    /// Get the current configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Estimate a position from the given signals.
    ///
    /// Signals are deduplicated by station identity (when several share one
    /// station, the last signal in request order wins), resolved against
    /// the directory, reduced to a geographically coherent subset and
    /// combined into a weighted estimate. Signals whose station is unknown
    /// are queued for recording off the request path.
    pub fn compute_position(&self, request: &[Signal]) -> ApiResult<PositionEstimate> {
        validate_signals(request)?;

        // Keyed by station identity so each found station can be matched
        // back to the signal that observed it.
        let mut signals: HashMap<String, Signal> = HashMap::with_capacity(request.len());
        for signal in request {
            signals.insert(signal.station_id(), signal.clone());
        }

        let ids: Vec<String> = signals.keys().cloned().collect();
        let stations = self.directory.find_stations(&ids)?;

        // Not all stations requested were found
        if stations.len() != signals.len() {
            log::debug!(
                "{} of {} requested stations are known to the directory",
                stations.len(),
                signals.len()
            );
            self.record_unknown_signals(&stations, &signals);
            if stations.is_empty() {
                return Err(PositionError::NoStationsMatched);
            }
        }

        // Pair every found station with the strength of its signal. A row
        // the directory returns for an identity that was never requested
        // has no strength to pair with and is skipped.
        let observed: Vec<ObservedStation> = stations
            .into_iter()
            .filter_map(|station| {
                signals
                    .get(&station.id)
                    .map(|signal| ObservedStation::new(station, signal.strength))
            })
            .collect();
        if observed.is_empty() {
            return Err(PositionError::NoStationsMatched);
        }

        let closest = find_closest_stations(observed);
        Ok(triangulate(&closest))
    }

    /// Queue the signals without a matching station for recording.
    fn record_unknown_signals(&self, found: &[Station], requested: &HashMap<String, Signal>) {
        let unknowns: Vec<Signal> = requested
            .iter()
            .filter(|(id, _)| !found.iter().any(|station| &station.id == *id))
            .map(|(_, signal)| signal.clone())
            .collect();

        self.worker.submit(unknowns);
    }
}
