use super::feed::{FeedDir, ROUTES_RELATION, SHAPES_RELATION, TRIPS_RELATION};
use super::ingest_error::IngestError;
use super::joiner_ops::build_route_short_names;
use super::palette::line_color;
use crate::reader::{RowReader, ShapeRow, TripRow};
use itertools::Itertools;
use stationboard_core::model::RouteShapeFeature;
use std::collections::{BTreeMap, HashMap};
use std::io::Read;

/// builds the route geometry artifact for one feed version: one colored
/// polyline per observed (route, direction) pair.
pub fn build_route_shapes(feed: &FeedDir) -> Result<Vec<RouteShapeFeature>, IngestError> {
    let route_short_names = build_route_short_names(feed.relation(ROUTES_RELATION)?)?;
    let trips = read_trip_rows(feed.relation(TRIPS_RELATION)?)?;
    let shape_points = read_shape_points(feed.relation(SHAPES_RELATION)?)?;
    let features = select_route_shapes(&trips, &route_short_names, &shape_points);
    log::info!(
        "selected {} route shapes from {} trips",
        features.len(),
        trips.len()
    );
    Ok(features)
}

pub fn read_trip_rows<R: Read>(source: R) -> Result<Vec<TripRow>, IngestError> {
    let mut reader = RowReader::new(source)?;
    let mut trips = Vec::new();
    for row in reader.rows() {
        let row = row?;
        match TripRow::from_row(&row) {
            Ok(trip) => trips.push(trip),
            Err(e) => log::warn!("skipping trip row: {e}"),
        }
    }
    Ok(trips)
}

/// shape id -> its (unordered) points. rows with a non-numeric sequence or
/// coordinate are skipped with a warning.
pub fn read_shape_points<R: Read>(
    source: R,
) -> Result<HashMap<String, Vec<ShapeRow>>, IngestError> {
    let mut reader = RowReader::new(source)?;
    let mut points: HashMap<String, Vec<ShapeRow>> = HashMap::new();
    for row in reader.rows() {
        let row = row?;
        match ShapeRow::from_row(&row) {
            Ok(point) => points.entry(point.shape_id.clone()).or_default().push(point),
            Err(e) => log::warn!("skipping shape row: {e}"),
        }
    }
    Ok(points)
}

/// groups trips by (route, direction) and picks one representative geometry
/// per group: the shape travelled by the most trips. equal trip counts break
/// to the lowest shape id, so re-runs always render the same geometry.
/// shapes with fewer than 2 points cannot be drawn and cannot win; a group
/// with no drawable shape is dropped. output is ordered by route short name,
/// then direction.
pub fn select_route_shapes(
    trips: &[TripRow],
    route_short_names: &HashMap<String, String>,
    shape_points: &HashMap<String, Vec<ShapeRow>>,
) -> Vec<RouteShapeFeature> {
    let mut groups: BTreeMap<(String, String), HashMap<&str, usize>> = BTreeMap::new();
    for trip in trips {
        let Some(shape_id) = trip.shape_id.as_deref() else {
            continue;
        };
        let direction = if trip.direction_id.is_empty() {
            "0"
        } else {
            trip.direction_id.as_str()
        };
        *groups
            .entry((trip.route_id.clone(), direction.to_string()))
            .or_default()
            .entry(shape_id)
            .or_insert(0) += 1;
    }

    let mut features = Vec::new();
    for ((route_id, direction), counts) in groups {
        // only shapes with enough points to draw are candidates; a group
        // whose every shape is degenerate is dropped
        let Some((shape_id, trip_count)) = counts
            .into_iter()
            .filter(|(id, _)| shape_points.get(*id).is_some_and(|p| p.len() >= 2))
            .max_by(|(id_a, count_a), (id_b, count_b)| {
                count_a.cmp(count_b).then_with(|| id_b.cmp(id_a))
            })
        else {
            continue;
        };
        let coords: Vec<(f64, f64)> = shape_points[shape_id]
            .iter()
            .sorted_by_key(|p| p.sequence)
            .map(|p| (p.lon, p.lat))
            .collect();

        let line = route_short_names
            .get(&route_id)
            .cloned()
            .unwrap_or_else(|| route_id.clone());
        features.push(RouteShapeFeature {
            color: line_color(&line).to_string(),
            route: line,
            direction: if direction == "1" { 1 } else { 0 },
            points: coords,
            trip_count,
        });
    }

    features.sort_by(|a, b| a.route.cmp(&b.route).then(a.direction.cmp(&b.direction)));
    features
}

#[cfg(test)]
mod test {
    use super::*;

    const TRIPS: &str = "\
trip_id,route_id,trip_headsign,direction_id,shape_id
t1,route_a,Uptown,0,sh_b
t2,route_a,Uptown,0,sh_a
t3,route_a,Uptown,0,sh_b
t4,route_a,Downtown,1,sh_c
t5,route_a,Downtown,1,sh_d
t6,route_b,Loop,,sh_e
t7,route_b,Loop,,sh_degenerate
t8,route_b,Loop,,sh_degenerate
";

    const SHAPES: &str = "\
shape_id,shape_pt_lat,shape_pt_lon,shape_pt_sequence
sh_b,40.70,-73.99,2
sh_b,40.68,-73.98,1
sh_b,40.72,-74.00,3
sh_a,40.00,-73.00,1
sh_a,40.01,-73.01,2
sh_c,40.50,-73.50,1
sh_c,40.51,-73.51,2
sh_d,40.60,-73.60,1
sh_d,40.61,-73.61,2
sh_e,40.80,-73.80,1
sh_e,40.81,-73.81,2
sh_degenerate,40.90,-73.90,1
";

    fn features() -> Vec<RouteShapeFeature> {
        let trips = read_trip_rows(TRIPS.as_bytes()).unwrap();
        let shapes = read_shape_points(SHAPES.as_bytes()).unwrap();
        let names = HashMap::from([
            ("route_a".to_string(), "A".to_string()),
            ("route_b".to_string(), "B".to_string()),
        ]);
        select_route_shapes(&trips, &names, &shapes)
    }

    #[test]
    fn test_one_feature_per_group_with_most_travelled_shape() {
        let features = features();
        let a0: Vec<&RouteShapeFeature> = features
            .iter()
            .filter(|f| f.route == "A" && f.direction == 0)
            .collect();
        assert_eq!(a0.len(), 1);
        assert_eq!(a0[0].trip_count, 2);
        // sh_b's points, re-ordered by sequence number
        assert_eq!(
            a0[0].points,
            vec![(-73.98, 40.68), (-73.99, 40.70), (-74.00, 40.72)]
        );
    }

    #[test]
    fn test_tied_counts_break_to_lowest_shape_id() {
        let features = features();
        let a1 = features
            .iter()
            .find(|f| f.route == "A" && f.direction == 1)
            .unwrap();
        // sh_c and sh_d both have one trip; sh_c wins
        assert_eq!(a1.points[0], (-73.50, 40.50));
        assert_eq!(a1.trip_count, 1);
    }

    #[test]
    fn test_missing_direction_defaults_to_zero_and_degenerate_shapes_lose() {
        let features = features();
        let b = features.iter().filter(|f| f.route == "B").collect_vec();
        // sh_degenerate has the most trips but only 1 point; sh_e is the
        // only drawable candidate, so the group still emits exactly one feature
        assert_eq!(b.len(), 1);
        assert_eq!(b[0].direction, 0);
        assert_eq!(b[0].trip_count, 1);
        assert_eq!(b[0].points.len(), 2);
    }

    #[test]
    fn test_group_with_only_degenerate_shapes_is_dropped() {
        let trips = read_trip_rows(
            "trip_id,route_id,trip_headsign,direction_id,shape_id\nt1,route_c,End,0,sh_degenerate\n"
                .as_bytes(),
        )
        .unwrap();
        let shapes = read_shape_points(SHAPES.as_bytes()).unwrap();
        let names = HashMap::from([("route_c".to_string(), "C".to_string())]);
        assert!(select_route_shapes(&trips, &names, &shapes).is_empty());
    }

    #[test]
    fn test_features_ordered_by_route_then_direction() {
        let features = features();
        let keys: Vec<(String, u8)> = features
            .iter()
            .map(|f| (f.route.clone(), f.direction))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }
}
