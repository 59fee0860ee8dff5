use serde::{Deserialize, Serialize};

/// one physical boarding location or station, as emitted in the stop list
/// artifact. coordinates are WGS84 degrees. immutable once built.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StopRecord {
    /// the unique name of this stop within its GTFS feed
    pub id: String,
    /// rider-facing display name
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}
