use super::feed::{FeedDir, ROUTES_RELATION, STOPS_RELATION, STOP_TIMES_RELATION, TRIPS_RELATION};
use super::ingest_error::IngestError;
use crate::reader::{RouteRow, RowReader, StopRow, StopTimeRow, TripRow};
use kdam::BarExt;
use stationboard_core::model::{
    insert_arrival_time, sort_and_cap_arrival_times, StationArrivalIndex, StationLineIndex,
    StopRecord,
};
use std::collections::HashMap;
use std::io::Read;

/// the joined attributes of one trip, resolved before the stop_times pass so
/// that pass is a pure lookup.
#[derive(Debug, Clone)]
pub struct TripInfo {
    /// route short name
    pub line: String,
    pub headsign: String,
    /// "0" or "1"; feeds that omit direction_id default to "0"
    pub direction: String,
}

/// everything the batch emits for the station side of the feed.
#[derive(Debug)]
pub struct FeedIndices {
    pub stops: Vec<StopRecord>,
    pub station_lines: StationLineIndex,
    pub station_times: StationArrivalIndex,
}

/// the stops relation reduced to what the joins need: the emitted stop list
/// and the child-stop -> station resolution map.
#[derive(Debug)]
pub struct StopLookup {
    pub stops: Vec<StopRecord>,
    pub stop_to_station: HashMap<String, String>,
}

/// builds all station indices for one feed version. the three small lookups
/// run before (and independently of) the single streaming pass over the
/// stop_times relation, so the stops build runs concurrently with the
/// routes-then-trips build.
pub fn build_indices(feed: &FeedDir) -> Result<FeedIndices, IngestError> {
    let (stop_lookup, trip_info) = rayon::join(
        || -> Result<StopLookup, IngestError> { build_stop_lookup(feed.relation(STOPS_RELATION)?) },
        || -> Result<HashMap<String, TripInfo>, IngestError> {
            let route_short_names = build_route_short_names(feed.relation(ROUTES_RELATION)?)?;
            build_trip_info(feed.relation(TRIPS_RELATION)?, &route_short_names)
        },
    );
    let StopLookup {
        stops,
        stop_to_station,
    } = stop_lookup?;
    let trip_info = trip_info?;

    let (station_lines, station_times) = accumulate_stop_times(
        feed.relation(STOP_TIMES_RELATION)?,
        &trip_info,
        &stop_to_station,
        true,
    )?;

    log::info!(
        "built indices: {} stops, {} stations with lines, {} stations with times",
        stops.len(),
        station_lines.len(),
        station_times.len()
    );
    Ok(FeedIndices {
        stops,
        station_lines,
        station_times,
    })
}

/// one pass over the stops relation. every stop maps to its parent station
/// when one is listed, else to itself; stops without a parent (stations and
/// standalone stops) form the emitted stop list.
pub fn build_stop_lookup<R: Read>(source: R) -> Result<StopLookup, IngestError> {
    let mut reader = RowReader::new(source)?;
    let mut stops = Vec::new();
    let mut stop_to_station = HashMap::new();
    for row in reader.rows() {
        let row = row?;
        match StopRow::from_row(&row) {
            Ok(stop) => {
                let station = stop
                    .parent_station
                    .clone()
                    .unwrap_or_else(|| stop.id.clone());
                stop_to_station.insert(stop.id.clone(), station);
                if stop.parent_station.is_none() {
                    stops.push(StopRecord {
                        id: stop.id,
                        name: stop.name,
                        lat: stop.lat,
                        lon: stop.lon,
                    });
                }
            }
            Err(e) => log::warn!("skipping stop row: {e}"),
        }
    }
    Ok(StopLookup {
        stops,
        stop_to_station,
    })
}

/// route id -> trimmed short display name, falling back to the id when the
/// feed leaves the short name blank.
pub fn build_route_short_names<R: Read>(source: R) -> Result<HashMap<String, String>, IngestError> {
    let mut reader = RowReader::new(source)?;
    let mut names = HashMap::new();
    for row in reader.rows() {
        let row = row?;
        match RouteRow::from_row(&row) {
            Ok(route) => {
                let name = if route.short_name.is_empty() {
                    route.id.clone()
                } else {
                    route.short_name
                };
                names.insert(route.id, name);
            }
            Err(e) => log::warn!("skipping route row: {e}"),
        }
    }
    Ok(names)
}

/// trip id -> (line, headsign, direction). trips whose route cannot be
/// resolved or whose headsign is blank carry nothing a board could display,
/// so they are dropped here and their stop_times skip silently later.
pub fn build_trip_info<R: Read>(
    source: R,
    route_short_names: &HashMap<String, String>,
) -> Result<HashMap<String, TripInfo>, IngestError> {
    let mut reader = RowReader::new(source)?;
    let mut info = HashMap::new();
    for row in reader.rows() {
        let row = row?;
        match TripRow::from_row(&row) {
            Ok(trip) => {
                let Some(line) = route_short_names.get(&trip.route_id) else {
                    continue;
                };
                if trip.headsign.is_empty() {
                    continue;
                }
                let direction = if trip.direction_id == "1" { "1" } else { "0" };
                info.insert(
                    trip.trip_id,
                    TripInfo {
                        line: line.clone(),
                        headsign: trip.headsign,
                        direction: direction.to_string(),
                    },
                );
            }
            Err(e) => log::warn!("skipping trip row: {e}"),
        }
    }
    Ok(info)
}

/// the single streaming pass over the stop_times relation, by far the
/// largest input. rows resolve through the prebuilt lookups and accumulate
/// straight into the indices; no row outlives its loop iteration, so memory
/// stays bounded by index size rather than relation size. rows referencing
/// an unknown trip are routine (dropped trips) and skip without a warning.
pub fn accumulate_stop_times<R: Read>(
    source: R,
    trip_info: &HashMap<String, TripInfo>,
    stop_to_station: &HashMap<String, String>,
    progress: bool,
) -> Result<(StationLineIndex, StationArrivalIndex), IngestError> {
    let mut reader = RowReader::new(source)?;
    let mut station_lines = StationLineIndex::new();
    let mut station_times = StationArrivalIndex::new();
    let mut bar = progress
        .then(|| kdam::Bar::builder().desc("stop_times").build().ok())
        .flatten();

    for row in reader.rows() {
        let row = row?;
        if let Some(ref mut bar) = bar {
            let _ = bar.update(1);
        }
        let stop_time = match StopTimeRow::from_row(&row) {
            Ok(st) => st,
            Err(e) => {
                log::warn!("skipping stop_time row: {e}");
                continue;
            }
        };
        let Some(info) = trip_info.get(&stop_time.trip_id) else {
            continue;
        };
        let station = stop_to_station
            .get(&stop_time.stop_id)
            .unwrap_or(&stop_time.stop_id);

        station_lines
            .entry(station.clone())
            .or_default()
            .insert(info.line.clone());
        insert_arrival_time(
            &mut station_times,
            station,
            &info.line,
            &info.headsign,
            &stop_time.arrival_time,
        );
    }

    sort_and_cap_arrival_times(&mut station_times);
    Ok((station_lines, station_times))
}

#[cfg(test)]
mod test {
    use super::*;

    const STOPS: &str = "\
stop_id,stop_name,stop_lat,stop_lon,parent_station,location_type
101,Union Sq,40.7359,-73.9906,,1
101N,Union Sq - Northbound,40.7359,-73.9906,101,0
101S,Union Sq - Southbound,40.7359,-73.9906,101,0
201,Astor Pl,40.7301,-73.9911,,1
201N,Astor Pl - Northbound,40.7301,-73.9911,201,0
";

    const ROUTES: &str = "\
route_id,route_short_name,route_type,route_color
route_6, 6 ,1,00933C
route_x,,1,
";

    const TRIPS: &str = "\
trip_id,route_id,trip_headsign,direction_id,shape_id
t1,route_6,Pelham Bay Park,0,sh1
t2,route_6,Brooklyn Bridge,1,sh2
t3,route_unknown,Nowhere,0,
t4,route_6,,0,
";

    const STOP_TIMES: &str = "\
trip_id,stop_id,arrival_time
t1,101N,08:10:00
t1,201N,08:12:30
t2,101S,08:05:00
t2,101S,07:55:00
t_unknown,101N,09:00:00
t1,999,10:00:00
";

    fn indices() -> (StopLookup, HashMap<String, TripInfo>) {
        let lookup = build_stop_lookup(STOPS.as_bytes()).unwrap();
        let names = build_route_short_names(ROUTES.as_bytes()).unwrap();
        let trips = build_trip_info(TRIPS.as_bytes(), &names).unwrap();
        (lookup, trips)
    }

    #[test]
    fn test_stop_lookup_resolves_parents_and_lists_stations() {
        let (lookup, _) = indices();
        assert_eq!(lookup.stop_to_station["101N"], "101");
        assert_eq!(lookup.stop_to_station["101"], "101");
        let ids: Vec<&str> = lookup.stops.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["101", "201"]);
    }

    #[test]
    fn test_route_short_names_trim_and_fall_back_to_id() {
        let names = build_route_short_names(ROUTES.as_bytes()).unwrap();
        assert_eq!(names["route_6"], "6");
        assert_eq!(names["route_x"], "route_x");
    }

    #[test]
    fn test_trips_without_route_or_headsign_are_dropped() {
        let (_, trips) = indices();
        assert_eq!(trips.len(), 2);
        assert_eq!(trips["t1"].line, "6");
        assert_eq!(trips["t2"].direction, "1");
        assert!(!trips.contains_key("t3"));
        assert!(!trips.contains_key("t4"));
    }

    #[test]
    fn test_stop_times_accumulate_into_both_indices() {
        let (lookup, trips) = indices();
        let (lines, times) =
            accumulate_stop_times(STOP_TIMES.as_bytes(), &trips, &lookup.stop_to_station, false)
                .unwrap();

        // both directions of the 6 resolve to station 101
        assert_eq!(
            lines["101"].iter().collect::<Vec<&String>>(),
            vec![&"6".to_string()]
        );
        assert_eq!(
            times["101"]["6"]["Brooklyn Bridge"],
            vec!["07:55:00".to_string(), "08:05:00".to_string()]
        );
        assert_eq!(
            times["201"]["6"]["Pelham Bay Park"],
            vec!["08:12:30".to_string()]
        );
        // unknown stop falls back to its own id as the station
        assert_eq!(times["999"]["6"]["Pelham Bay Park"], vec!["10:00:00".to_string()]);
        // unknown trip leaves no trace
        assert!(!times.contains_key("t_unknown"));
    }

    #[test]
    fn test_rerun_on_identical_input_is_identical() {
        let (lookup, trips) = indices();
        let first =
            accumulate_stop_times(STOP_TIMES.as_bytes(), &trips, &lookup.stop_to_station, false)
                .unwrap();
        let second =
            accumulate_stop_times(STOP_TIMES.as_bytes(), &trips, &lookup.stop_to_station, false)
                .unwrap();
        assert_eq!(first.0, second.0);
        assert_eq!(first.1, second.1);
        assert_eq!(
            serde_json::to_string(&first.1).unwrap(),
            serde_json::to_string(&second.1).unwrap()
        );
    }
}
