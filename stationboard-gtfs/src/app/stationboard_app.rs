use super::StationboardOperation;
use clap::Parser;

/// command line tool for turning a static transit feed into stationboard
/// index artifacts
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct StationboardApp {
    #[command(subcommand)]
    pub op: StationboardOperation,
}
