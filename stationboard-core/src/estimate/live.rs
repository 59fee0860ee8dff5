use std::collections::HashMap;
use std::time::{Duration, Instant};

/// boundary to an external live-feed collaborator. when a source answers for
/// a (station, line, headsign) key, its confirmed etas (in seconds) replace
/// the schedule-derived ones for that group.
pub trait ConfirmedArrivals {
    fn confirmed_eta_seconds(
        &self,
        station_id: &str,
        line: &str,
        headsign: &str,
    ) -> Option<Vec<i64>>;
}

/// a timestamped cache keyed by feed name, with an injected time-to-live.
/// constructed and owned by whatever component polls the live feed; there is
/// no process-wide instance.
#[derive(Debug)]
pub struct FeedCache<T> {
    ttl: Duration,
    entries: HashMap<String, (Instant, T)>,
}

impl<T> FeedCache<T> {
    pub fn new(ttl: Duration) -> Self {
        FeedCache {
            ttl,
            entries: HashMap::new(),
        }
    }

    /// the cached value for a feed, if one was inserted within the ttl.
    pub fn get(&self, feed: &str) -> Option<&T> {
        self.entries
            .get(feed)
            .filter(|(at, _)| at.elapsed() < self.ttl)
            .map(|(_, value)| value)
    }

    pub fn insert(&mut self, feed: &str, value: T) {
        self.entries.insert(feed.to_string(), (Instant::now(), value));
    }

    /// drops entries past the ttl so a long-lived cache does not accumulate
    /// stale feeds.
    pub fn purge_expired(&mut self) {
        let ttl = self.ttl;
        self.entries.retain(|_, (at, _)| at.elapsed() < ttl);
    }
}
