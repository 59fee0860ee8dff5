use std::collections::{BTreeMap, BTreeSet};

/// station id -> set of line short names serving it. BTree containers keep
/// iteration (and the serialized artifact) sorted, which the batch job relies
/// on for byte-identical re-runs over identical input.
pub type StationLineIndex = BTreeMap<String, BTreeSet<String>>;

/// station id -> line -> headsign -> schedule clock strings ("HH:MM:SS",
/// values may encode 24 hours or more for post-midnight service). each bucket
/// is sorted ascending and capped at [MAX_TIMES_PER_BUCKET] once finalized.
pub type StationArrivalIndex = BTreeMap<String, BTreeMap<String, BTreeMap<String, Vec<String>>>>;

/// upper bound on clock strings retained per (station, line, headsign) bucket.
pub const MAX_TIMES_PER_BUCKET: usize = 120;

/// appends one arrival time under station -> line -> headsign, creating the
/// intermediate maps as needed. buckets are unsorted until
/// [sort_and_cap_arrival_times] runs.
pub fn insert_arrival_time(
    index: &mut StationArrivalIndex,
    station_id: &str,
    line: &str,
    headsign: &str,
    arrival_time: &str,
) {
    index
        .entry(station_id.to_string())
        .or_default()
        .entry(line.to_string())
        .or_default()
        .entry(headsign.to_string())
        .or_default()
        .push(arrival_time.to_string());
}

/// finalizes an arrival index: every bucket is sorted ascending and truncated
/// to [MAX_TIMES_PER_BUCKET]. lexicographic order is correct for fixed-width
/// two-digit "HH:MM:SS" fields, including hours of 24 and beyond.
pub fn sort_and_cap_arrival_times(index: &mut StationArrivalIndex) {
    for lines in index.values_mut() {
        for headsigns in lines.values_mut() {
            for times in headsigns.values_mut() {
                times.sort_unstable();
                times.truncate(MAX_TIMES_PER_BUCKET);
            }
        }
    }
}
