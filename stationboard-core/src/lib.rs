//! runtime library for the stationboard transit display: the index data model
//! produced by the batch ingestion in `stationboard-gtfs`, nearest-stop queries
//! over the stop list, and schedule-based arrival countdown estimation.

pub mod estimate;
pub mod model;
pub mod nearby;
