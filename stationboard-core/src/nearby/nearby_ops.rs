use crate::model::StopRecord;
use geo::{Distance, HaversineMeasure, Point};
use uom::si::f64::Length;
use uom::si::length::meter;

/// spherical earth radius used for all great-circle math.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// stops farther than this are dropped from the nearby list, unless nothing
/// at all is inside the radius.
const NEARBY_RADIUS_METERS: f64 = 1_200.0;

/// upper bound on returned stops.
const MAX_NEARBY_STOPS: usize = 12;

/// one result of a nearest-stops query.
#[derive(Debug, Clone)]
pub struct NearbyStop<'a> {
    pub stop: &'a StopRecord,
    pub distance: Length,
}

/// great-circle distance in meters from a query point to a stop. a stop with
/// a non-finite coordinate is infinitely far away, so it can never displace a
/// valid stop near the front of a distance sort.
pub fn stop_distance_meters(stop: &StopRecord, query_lat: f64, query_lon: f64) -> f64 {
    if !stop.lat.is_finite() || !stop.lon.is_finite() {
        return f64::INFINITY;
    }
    let haversine = HaversineMeasure::new(EARTH_RADIUS_METERS);
    haversine.distance(
        Point::new(query_lon, query_lat),
        Point::new(stop.lon, stop.lat),
    )
}

/// the stops nearest to a query point, ascending by great-circle distance.
///
/// stops within 1200 m are preferred; when no stop is inside that radius the
/// full distance-sorted list is used instead. either way the result is
/// truncated to the 12 nearest.
pub fn nearest_stops(stops: &[StopRecord], query_lat: f64, query_lon: f64) -> Vec<NearbyStop<'_>> {
    let mut ranked: Vec<(f64, &StopRecord)> = stops
        .iter()
        .map(|stop| (stop_distance_meters(stop, query_lat, query_lon), stop))
        .collect();
    ranked.sort_by(|a, b| a.0.total_cmp(&b.0));

    let within_radius = ranked
        .iter()
        .take_while(|(d, _)| *d <= NEARBY_RADIUS_METERS)
        .count();
    if within_radius > 0 {
        ranked.truncate(within_radius);
    }

    ranked
        .into_iter()
        .take(MAX_NEARBY_STOPS)
        .map(|(d, stop)| NearbyStop {
            stop,
            distance: Length::new::<meter>(d),
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    /// meters of latitude per degree on a 6,371,000 m sphere
    const METERS_PER_DEGREE_LAT: f64 = EARTH_RADIUS_METERS * std::f64::consts::PI / 180.0;

    fn stop_at_meters_north(id: &str, meters: f64) -> StopRecord {
        StopRecord {
            id: id.to_string(),
            name: format!("stop {id}"),
            lat: 40.0 + meters / METERS_PER_DEGREE_LAT,
            lon: -74.0,
        }
    }

    #[test]
    fn test_radius_filter_keeps_only_close_stops() {
        let stops = vec![
            stop_at_meters_north("far", 1300.0),
            stop_at_meters_north("near", 100.0),
            stop_at_meters_north("mid", 500.0),
            stop_at_meters_north("distant", 2000.0),
        ];
        let result = nearest_stops(&stops, 40.0, -74.0);

        let ids: Vec<&str> = result.iter().map(|n| n.stop.id.as_str()).collect();
        assert_eq!(ids, vec!["near", "mid"]);
        assert!(result[0].distance.get::<meter>() < result[1].distance.get::<meter>());
        assert!((result[0].distance.get::<meter>() - 100.0).abs() < 1.0);
    }

    #[test]
    fn test_empty_filter_falls_back_to_nearest_overall() {
        let stops = vec![
            stop_at_meters_north("a", 5000.0),
            stop_at_meters_north("b", 1500.0),
            stop_at_meters_north("c", 3000.0),
        ];
        let result = nearest_stops(&stops, 40.0, -74.0);
        let ids: Vec<&str> = result.iter().map(|n| n.stop.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_result_capped_at_twelve() {
        let stops: Vec<StopRecord> = (0..20)
            .map(|i| stop_at_meters_north(&i.to_string(), 50.0 * (i + 1) as f64))
            .collect();
        let result = nearest_stops(&stops, 40.0, -74.0);
        assert_eq!(result.len(), 12);
    }

    #[test]
    fn test_invalid_coordinates_sort_last() {
        let mut stops = vec![
            stop_at_meters_north("valid", 200.0),
            stop_at_meters_north("close", 50.0),
        ];
        stops.push(StopRecord {
            id: "broken".to_string(),
            name: "broken".to_string(),
            lat: f64::NAN,
            lon: -74.0,
        });
        let result = nearest_stops(&stops, 40.0, -74.0);
        // the NaN stop falls outside the 1200 m filter entirely
        let ids: Vec<&str> = result.iter().map(|n| n.stop.id.as_str()).collect();
        assert_eq!(ids, vec!["close", "valid"]);
    }
}
