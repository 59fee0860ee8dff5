use crate::reader::ReaderError;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum IngestError {
    #[error("missing required relation '{name}': {source}")]
    MissingRelationError {
        name: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    ReaderError(#[from] ReaderError),
    #[error("failed serializing artifact {}: {source}", path.display())]
    SerializeError {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed writing artifact {}: {source}", path.display())]
    ArtifactWriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}
