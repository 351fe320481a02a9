//! System-wide constants and thresholds

/// Standard deviation threshold (degree-space) under which a group of
/// stations counts as geographically coherent.
pub const STD_DEV_THRESHOLD: f64 = 0.03;

/// Separator used when joining mnc/lac/cid into a station identity.
pub const STATION_ID_SEPARATOR: &str = "-";

/// RSSI in theory ranges from -113 to -51 dBm, but real receivers report
/// values beyond that (e.g. -120), so the accepted range is widened.
pub const MIN_SIGNAL_STRENGTH_DBM: f64 = -150.0;

/// Upper bound of the accepted signal strength range. RSSI is measured in
/// dBm and should be negative.
pub const MAX_SIGNAL_STRENGTH_DBM: f64 = 0.0;
