mod arrival;
mod route_shape;
mod station_index;
mod stop_record;

pub use arrival::{ArrivalEstimate, ArrivalGroup, EstimateSource};
pub use route_shape::RouteShapeFeature;
pub use station_index::{
    insert_arrival_time, sort_and_cap_arrival_times, StationArrivalIndex, StationLineIndex,
    MAX_TIMES_PER_BUCKET,
};
pub use stop_record::StopRecord;
