//! batch entry point: parses one static transit feed into the stop list,
//! station index, and route geometry artifacts served to the display layer.
use clap::Parser;
use stationboard_gtfs::app::StationboardApp;

fn main() {
    env_logger::init();
    let args = StationboardApp::parse();
    args.op.run()
}
