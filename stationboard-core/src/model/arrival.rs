use serde::{Deserialize, Serialize};

/// where an [ArrivalEstimate] came from. the estimator composes both variants
/// uniformly; the only branch on this value is the one that set the label.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EstimateSource {
    /// traceable to a schedule entry in the arrival index (or confirmed by a
    /// live feed), carries the source clock string when one exists
    Scheduled,
    /// synthesized fallback when no scheduled entry is imminent
    Estimated,
}

/// a single countdown entry on the board. recomputed fresh on every query,
/// never persisted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ArrivalEstimate {
    pub eta_seconds: i64,
    /// rider-facing countdown, e.g. "Now", "1 min", "12 min"
    pub label: String,
    pub source: EstimateSource,
    /// the "HH:MM:SS" schedule entry this estimate was derived from.
    /// always None for [EstimateSource::Estimated].
    pub source_time: Option<String>,
}

/// the arrivals shown for one (line, headsign) at a station: up to 4 entries,
/// ascending by eta.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ArrivalGroup {
    pub line: String,
    pub headsign: String,
    pub arrivals: Vec<ArrivalEstimate>,
}

impl ArrivalGroup {
    /// eta of the soonest entry; groups are ordered across lines by this key.
    pub fn earliest_eta(&self) -> Option<i64> {
        self.arrivals.first().map(|a| a.eta_seconds)
    }
}
