mod clock;
mod estimator;
mod fallback;
mod live;

pub use clock::{eta_label, eta_seconds, parse_clock_seconds, seconds_since_midnight};
pub use estimator::{
    arrival_board, DISPLAY_HORIZON_SECONDS, MAX_GROUP_ENTRIES, SOON_THRESHOLD_SECONDS,
};
pub use fallback::{synthesize_minutes, FallbackConfig};
pub use live::{ConfirmedArrivals, FeedCache};
