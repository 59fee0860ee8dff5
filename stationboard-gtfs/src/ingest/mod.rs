pub mod artifact_ops;
pub mod joiner_ops;
pub mod shape_ops;

mod feed;
mod ingest_error;
mod palette;

pub use feed::FeedDir;
pub use ingest_error::IngestError;
pub use joiner_ops::{build_indices, FeedIndices, TripInfo};
pub use palette::{line_color, DEFAULT_LINE_COLOR};
pub use shape_ops::build_route_shapes;
