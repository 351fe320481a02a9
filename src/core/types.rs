//! Core data types for the positioning system

use crate::core::constants::STATION_ID_SEPARATOR;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cell signal observation reported by a device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    /// Mobile Network Code
    pub mnc: String,

    /// Location Area Code, a unique number of the current location area
    pub lac: String,

    /// Number identifying a base transceiver station, or a sector of one,
    /// within a location area
    pub cid: String,

    /// Received signal strength in dBm, as measured at the device
    #[serde(rename = "str")]
    pub strength: f64,
}

impl Signal {
    /// Identity of the station this signal was received from, used as the
    /// deduplication key and the directory lookup key.
    pub fn station_id(&self) -> String {
        [self.mnc.as_str(), self.lac.as_str(), self.cid.as_str()].join(STATION_ID_SEPARATOR)
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(lac:{}, cid:{}, str:{})", self.lac, self.cid, self.strength)
    }
}

/// A base station known to the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Station identity, the `mnc-lac-cid` key
    pub id: String,
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lng: f64,
}

/// A directory station paired with the strength of the signal that
/// observed it. Built per computation and discarded afterwards.
#[derive(Debug, Clone)]
pub struct ObservedStation {
    pub station: Station,
    /// Strength of the originating signal (dBm)
    pub strength: f64,
}

impl ObservedStation {
    pub fn new(station: Station, strength: f64) -> Self {
        Self { station, strength }
    }

    pub fn lat(&self) -> f64 {
        self.station.lat
    }

    pub fn lng(&self) -> f64 {
        self.station.lng
    }
}

/// Estimated geographic position in decimal degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionEstimate {
    pub lat: f64,
    pub lng: f64,
}

impl PositionEstimate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for PositionEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(lat: {:.6}, lng: {:.6})", self.lat, self.lng)
    }
}
