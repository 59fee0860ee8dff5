mod nearby_ops;

pub use nearby_ops::{nearest_stops, stop_distance_meters, NearbyStop, EARTH_RADIUS_METERS};
