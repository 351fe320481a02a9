//! Outlier elimination over a group of observed stations

use crate::core::constants::STD_DEV_THRESHOLD;
use crate::core::types::ObservedStation;

/// Find the stations that live close to each other, eliminating the ones
/// far away from the group.
///
/// By close, it means the standard deviation of the stations' latitudes and
/// longitudes (measured in degree space against the group mean) is below
/// [`STD_DEV_THRESHOLD`]. While the group is wider than that, the single
/// station farthest from the mean is removed and the check repeats. Ties on
/// the maximum distance keep the first-encountered station as the victim.
///
/// A non-empty input always yields a non-empty output: the loop only runs
/// while more than one station remains, and a singleton is returned as-is.
pub fn find_closest_stations(mut stations: Vec<ObservedStation>) -> Vec<ObservedStation> {
    while stations.len() > 1 {
        let count = stations.len() as f64;
        let mut avg_lat = 0.0;
        let mut avg_lng = 0.0;
        for station in &stations {
            avg_lat += station.lat();
            avg_lng += station.lng();
        }
        avg_lat /= count;
        avg_lng /= count;

        // Track the squared distance of each station to the center and the
        // index of the one farthest out, which is the elimination candidate.
        let mut max_distance = 0.0;
        let mut max_distance_index = 0;
        let mut sum = 0.0;
        for (index, station) in stations.iter().enumerate() {
            let distance =
                (station.lat() - avg_lat).powi(2) + (station.lng() - avg_lng).powi(2);
            if distance > max_distance {
                max_distance = distance;
                max_distance_index = index;
            }
            sum += distance;
        }

        if (sum / count).sqrt() < STD_DEV_THRESHOLD {
            return stations;
        }

        stations.remove(max_distance_index);
    }

    stations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Station;

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
    fn test_far_away_station_is_excluded() {
        let stations = vec![
            observed("0-32838-60122", 30.732796, 103.962357, -77.0),
            observed("0-32838-60123", 30.734688, 103.961433, -83.0),
            observed("0-32838-36861", 30.730850, 104.965279, -88.0),
            observed("0-32838-60125", 30.732283, 103.961327, -95.0),
        ];

        let closest = find_closest_stations(stations);

        let mut ids: Vec<&str> = closest.iter().map(|s| s.station.id.as_str()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["0-32838-60122", "0-32838-60123", "0-32838-60125"]);
    }

    #[test]
    fn test_single_station_returned_unmodified() {
        let stations = vec![observed("0-1-1", 30.0, 103.0, -90.0)];
        let result = find_closest_stations(stations);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].station.id, "0-1-1");
    }

    #[test]
    fn test_output_never_empty_and_never_grows() {
        let stations = vec![
            observed("a", 10.0, 10.0, -80.0),
            observed("b", 11.0, 11.0, -80.0),
            observed("c", 12.0, 12.0, -80.0),
        ];
        let input_len = stations.len();
        let result = find_closest_stations(stations);
        assert!(!result.is_empty());
        assert!(result.len() <= input_len);
    }

    #[test]
    fn test_filter_is_idempotent_on_coherent_output() {
        let stations = vec![
            observed("0-32838-60122", 30.732796, 103.962357, -77.0),
            observed("0-32838-60123", 30.734688, 103.961433, -83.0),
            observed("0-32838-36861", 30.730850, 104.965279, -88.0),
            observed("0-32838-60125", 30.732283, 103.961327, -95.0),
        ];

        let once = find_closest_stations(stations);
        let twice = find_closest_stations(once.clone());

        assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(twice.iter()) {
            assert_eq!(a.station.id, b.station.id);
        }
    }

    #[test]
    fn test_coherent_group_kept_whole() {
        let stations = vec![
            observed("a", 30.732796, 103.962357, -77.0),
            observed("b", 30.734688, 103.961433, -83.0),
            observed("c", 30.730850, 103.965279, -88.0),
        ];
        let result = find_closest_stations(stations);
        assert_eq!(result.len(), 3);
    }
}
