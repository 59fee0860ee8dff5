use super::ingest_error::IngestError;
use std::fs::File;
use std::path::PathBuf;

pub const STOPS_RELATION: &str = "stops.txt";
pub const ROUTES_RELATION: &str = "routes.txt";
pub const TRIPS_RELATION: &str = "trips.txt";
pub const STOP_TIMES_RELATION: &str = "stop_times.txt";
pub const SHAPES_RELATION: &str = "shapes.txt";

/// a directory holding one version of a feed's tabular relations. a relation
/// that cannot be opened is fatal for the whole batch; nothing partial is
/// ever emitted.
#[derive(Debug, Clone)]
pub struct FeedDir {
    root: PathBuf,
}

impl FeedDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FeedDir { root: root.into() }
    }

    pub fn relation(&self, name: &str) -> Result<File, IngestError> {
        let path = self.root.join(name);
        File::open(&path).map_err(|source| IngestError::MissingRelationError {
            name: path.display().to_string(),
            source,
        })
    }
}
