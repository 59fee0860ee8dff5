use super::clock::{eta_label, eta_seconds};
use super::fallback::{synthesize_minutes, FallbackConfig};
use super::live::ConfirmedArrivals;
use crate::model::{ArrivalEstimate, ArrivalGroup, EstimateSource, StationArrivalIndex};
use rand::Rng;

/// scheduled entries farther out than this are not shown.
pub const DISPLAY_HORIZON_SECONDS: i64 = 90 * 60;

/// a scheduled entry at or under this counts as "imminent"; with none
/// imminent the group falls back to synthesized estimates.
pub const SOON_THRESHOLD_SECONDS: i64 = 20 * 60;

/// entries kept per group after the horizon filter, before display capping.
const KEEP_SCHEDULED: usize = 5;

/// entries shown per group.
pub const MAX_GROUP_ENTRIES: usize = 4;

/// computes the full arrival board for one station: one [ArrivalGroup] per
/// (line, headsign) with at least one entry, ordered soonest-first across
/// groups (ties keep index iteration order). a station absent from the index
/// yields an empty board.
///
/// `live` optionally supplies confirmed real-time etas; for any key it
/// answers, those values replace the schedule-derived ones.
pub fn arrival_board<R: Rng + ?Sized>(
    index: &StationArrivalIndex,
    station_id: &str,
    now_sec: u32,
    config: &FallbackConfig,
    rng: &mut R,
    live: Option<&dyn ConfirmedArrivals>,
) -> Vec<ArrivalGroup> {
    let Some(lines) = index.get(station_id) else {
        return Vec::new();
    };

    let mut groups: Vec<ArrivalGroup> = Vec::new();
    for (line, headsigns) in lines {
        for (headsign, times) in headsigns {
            let confirmed =
                live.and_then(|src| src.confirmed_eta_seconds(station_id, line, headsign));
            let arrivals = match confirmed {
                Some(etas) => confirmed_entries(&etas),
                None => scheduled_or_synthesized(times, now_sec, config, rng),
            };
            if !arrivals.is_empty() {
                groups.push(ArrivalGroup {
                    line: line.clone(),
                    headsign: headsign.clone(),
                    arrivals,
                });
            }
        }
    }

    // stable, so equal-eta groups keep their encounter order
    groups.sort_by_key(|g| g.earliest_eta().unwrap_or(i64::MAX));
    groups
}

/// entries for one (line, headsign): real schedule entries when one is
/// imminent, otherwise synthesized estimates plus the single nearest real
/// entry if any survives the horizon.
fn scheduled_or_synthesized<R: Rng + ?Sized>(
    times: &[String],
    now_sec: u32,
    config: &FallbackConfig,
    rng: &mut R,
) -> Vec<ArrivalEstimate> {
    // unparseable clock strings drop out here via eta_seconds -> None
    let mut kept: Vec<(i64, &str)> = times
        .iter()
        .filter_map(|t| eta_seconds(t, now_sec).map(|eta| (eta, t.as_str())))
        .filter(|(eta, _)| *eta >= 0 && *eta <= DISPLAY_HORIZON_SECONDS)
        .collect();
    kept.sort_by_key(|(eta, _)| *eta);
    kept.truncate(KEEP_SCHEDULED);

    let has_soon = kept.iter().any(|(eta, _)| *eta <= SOON_THRESHOLD_SECONDS);
    if has_soon {
        return kept
            .into_iter()
            .take(MAX_GROUP_ENTRIES)
            .map(|(eta, time)| scheduled_entry(eta, Some(time)))
            .collect();
    }

    let mut entries: Vec<ArrivalEstimate> = synthesize_minutes(config, rng)
        .into_iter()
        .map(|minutes| {
            let eta = minutes * 60;
            ArrivalEstimate {
                eta_seconds: eta,
                label: eta_label(eta),
                source: EstimateSource::Estimated,
                source_time: None,
            }
        })
        .collect();
    if let Some((eta, time)) = kept.first() {
        entries.push(scheduled_entry(*eta, Some(time)));
    }
    entries.sort_by_key(|e| e.eta_seconds);
    entries.truncate(MAX_GROUP_ENTRIES);
    entries
}

/// confirmed live etas take precedence over anything schedule-derived; the
/// same horizon and cap apply.
fn confirmed_entries(etas: &[i64]) -> Vec<ArrivalEstimate> {
    let mut etas: Vec<i64> = etas
        .iter()
        .copied()
        .filter(|eta| *eta >= 0 && *eta <= DISPLAY_HORIZON_SECONDS)
        .collect();
    etas.sort_unstable();
    etas.into_iter()
        .take(MAX_GROUP_ENTRIES)
        .map(|eta| scheduled_entry(eta, None))
        .collect()
}

fn scheduled_entry(eta: i64, source_time: Option<&str>) -> ArrivalEstimate {
    ArrivalEstimate {
        eta_seconds: eta,
        label: eta_label(eta),
        source: EstimateSource::Scheduled,
        source_time: source_time.map(|t| t.to_string()),
    }
}
