//! batch ingestion for stationboard: streams the tabular relations of a
//! static GTFS feed, joins them into the runtime indices defined in
//! `stationboard-core`, and writes them out as immutable artifacts, once per
//! feed version.

pub mod app;
pub mod ingest;
pub mod reader;
