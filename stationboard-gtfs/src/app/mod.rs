mod operation;
mod stationboard_app;

pub use operation::StationboardOperation;
pub use stationboard_app::StationboardApp;
