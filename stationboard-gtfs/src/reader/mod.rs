mod reader_error;
mod records;
mod row;
mod row_reader;

pub use reader_error::ReaderError;
pub use records::{RouteRow, ShapeRow, StopRow, StopTimeRow, TripRow};
pub use row::Row;
pub use row_reader::RowReader;
