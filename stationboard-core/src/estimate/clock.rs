use chrono::{NaiveTime, Timelike};

const SECONDS_PER_DAY: u32 = 86_400;

/// parses a GTFS schedule clock string "HH:MM:SS" into raw seconds since
/// midnight of the service day. hours of 24 and beyond are valid and denote
/// post-midnight service kept on the previous operating day. returns None
/// for anything that does not look like a clock string.
pub fn parse_clock_seconds(clock: &str) -> Option<u32> {
    let mut parts = clock.split(':');
    let hours: u32 = parts.next()?.trim().parse().ok()?;
    let minutes: u32 = parts.next()?.parse().ok()?;
    let seconds: u32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || minutes > 59 || seconds > 59 {
        return None;
    }
    Some(hours * 3600 + minutes * 60 + seconds)
}

/// seconds until a scheduled clock string arrives, given the current
/// wall-clock seconds since midnight (0..86400). None if unparseable.
///
/// a clock at or past 24:00:00 belongs to the next calendar day and counts
/// forward through midnight. a clock earlier than `now_sec` on the current
/// day is treated as tomorrow's service and pushed a full day forward; this
/// deliberately conflates "already departed today" with "runs tomorrow",
/// which can mis-count near service-day boundaries but keeps the countdown
/// monotone with no calendar lookup.
pub fn eta_seconds(clock: &str, now_sec: u32) -> Option<i64> {
    let raw = parse_clock_seconds(clock)?;
    let norm = (raw % SECONDS_PER_DAY) as i64;
    let now = now_sec as i64;
    let is_next_day = raw >= SECONDS_PER_DAY;
    if is_next_day || norm < now {
        Some(norm + SECONDS_PER_DAY as i64 - now)
    } else {
        Some(norm - now)
    }
}

/// wall-clock seconds since midnight for the estimator entry point.
pub fn seconds_since_midnight(time: &NaiveTime) -> u32 {
    time.num_seconds_from_midnight()
}

/// renders an eta as the countdown label shown on the board. seconds round
/// to the nearest minute; zero or negative minutes render as "Now".
pub fn eta_label(eta_seconds: i64) -> String {
    let minutes = (eta_seconds + 30).div_euclid(60);
    if minutes <= 0 {
        "Now".to_string()
    } else if minutes == 1 {
        "1 min".to_string()
    } else {
        format!("{minutes} min")
    }
}
