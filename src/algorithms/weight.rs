//! Signal-strength based distance weighting

/// Map a received signal strength (dBm) to a relative proximity weight.
/// Weaker signals get smaller weights and are treated as farther away.
///
/// The full path-loss form is `10^((130 + s - 20*log10(freq)) / 20)` with a
/// fixed reference frequency of 1000. Since `log10(1000)` is the constant 3,
/// the exponent reduces to `3.5 + s/20`; the reduced form is the one
/// implemented and must not be re-derived differently.
pub fn distance_weight(strength_dbm: f64) -> f64 {
    10f64.powf(3.5 + strength_dbm / 20.0)
}
