//! batch operations for one feed version. each run reads the raw relations
//! from a feed directory and replaces the queryable artifacts consumed by
//! the display layer.
use crate::ingest::{artifact_ops, build_indices, build_route_shapes, FeedDir};
use clap::Subcommand;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum StationboardOperation {
    /// build the stop list and station index artifacts from a feed directory
    Build {
        /// directory holding the feed's tabular relations (stops.txt,
        /// routes.txt, trips.txt, stop_times.txt)
        #[arg(long)]
        input: String,
        #[arg(long)]
        output_directory: String,
        #[arg(long, default_value_t = true)]
        overwrite: bool,
    },
    /// build the route geometry artifact from trips, routes and shapes
    Shapes {
        /// directory holding the feed's tabular relations
        #[arg(long)]
        input: String,
        #[arg(long)]
        output_directory: String,
        #[arg(long, default_value_t = true)]
        overwrite: bool,
    },
}

impl StationboardOperation {
    pub fn run(&self) {
        match self {
            StationboardOperation::Build {
                input,
                output_directory,
                overwrite,
            } => {
                let feed = FeedDir::new(input);
                let indices = build_indices(&feed)
                    .unwrap_or_else(|e| panic!("failed building indices from '{input}': {e}"));
                let out = Path::new(output_directory);
                artifact_ops::write_json_artifact(&indices.stops, out, "stops.json", *overwrite)
                    .expect("failed writing stop list artifact");
                artifact_ops::write_json_artifact(
                    &indices.station_lines,
                    out,
                    "station_lines.json",
                    *overwrite,
                )
                .expect("failed writing station lines artifact");
                artifact_ops::write_json_artifact(
                    &indices.station_times,
                    out,
                    "station_times.json",
                    *overwrite,
                )
                .expect("failed writing station times artifact");
            }
            StationboardOperation::Shapes {
                input,
                output_directory,
                overwrite,
            } => {
                let feed = FeedDir::new(input);
                let features = build_route_shapes(&feed)
                    .unwrap_or_else(|e| panic!("failed building route shapes from '{input}': {e}"));
                artifact_ops::write_geojson_artifact(
                    &features,
                    Path::new(output_directory),
                    "route_shapes.geojson",
                    *overwrite,
                )
                .expect("failed writing route shapes artifact");
            }
        }
    }
}
