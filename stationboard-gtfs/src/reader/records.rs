use super::reader_error::ReaderError;
use super::row::Row;

/// a row of the stops relation, validated at parse time.
#[derive(Debug, Clone)]
pub struct StopRow {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    /// parent station id, when this stop is a child platform or entrance
    pub parent_station: Option<String>,
    pub location_type: String,
}

impl StopRow {
    pub fn from_row(row: &Row) -> Result<Self, ReaderError> {
        Ok(StopRow {
            id: required(row, "stop_id")?,
            name: row.get("stop_name").trim().to_string(),
            lat: parse_f64(row, "stop_lat")?,
            lon: parse_f64(row, "stop_lon")?,
            parent_station: optional(row, "parent_station"),
            location_type: row.get("location_type").trim().to_string(),
        })
    }
}

/// a row of the routes relation.
#[derive(Debug, Clone)]
pub struct RouteRow {
    pub id: String,
    pub short_name: String,
}

impl RouteRow {
    pub fn from_row(row: &Row) -> Result<Self, ReaderError> {
        Ok(RouteRow {
            id: required(row, "route_id")?,
            short_name: row.get("route_short_name").trim().to_string(),
        })
    }
}

/// a row of the trips relation.
#[derive(Debug, Clone)]
pub struct TripRow {
    pub trip_id: String,
    pub route_id: String,
    pub headsign: String,
    /// raw direction_id field; empty when the feed omits it
    pub direction_id: String,
    pub shape_id: Option<String>,
}

impl TripRow {
    pub fn from_row(row: &Row) -> Result<Self, ReaderError> {
        Ok(TripRow {
            trip_id: required(row, "trip_id")?,
            route_id: required(row, "route_id")?,
            headsign: row.get("trip_headsign").trim().to_string(),
            direction_id: row.get("direction_id").trim().to_string(),
            shape_id: optional(row, "shape_id"),
        })
    }
}

/// a row of the stop_times relation; by far the largest input, so it stays
/// as thin as possible.
#[derive(Debug, Clone)]
pub struct StopTimeRow {
    pub trip_id: String,
    pub stop_id: String,
    pub arrival_time: String,
}

impl StopTimeRow {
    pub fn from_row(row: &Row) -> Result<Self, ReaderError> {
        Ok(StopTimeRow {
            trip_id: required(row, "trip_id")?,
            stop_id: required(row, "stop_id")?,
            arrival_time: required(row, "arrival_time")?,
        })
    }
}

/// a row of the shapes relation.
#[derive(Debug, Clone)]
pub struct ShapeRow {
    pub shape_id: String,
    pub lat: f64,
    pub lon: f64,
    pub sequence: u32,
}

impl ShapeRow {
    pub fn from_row(row: &Row) -> Result<Self, ReaderError> {
        Ok(ShapeRow {
            shape_id: required(row, "shape_id")?,
            lat: parse_f64(row, "shape_pt_lat")?,
            lon: parse_f64(row, "shape_pt_lon")?,
            sequence: parse_u32(row, "shape_pt_sequence")?,
        })
    }
}

fn required(row: &Row, field: &'static str) -> Result<String, ReaderError> {
    let value = row.get(field).trim();
    if value.is_empty() {
        Err(ReaderError::MissingFieldError {
            line: row.line(),
            field,
        })
    } else {
        Ok(value.to_string())
    }
}

fn optional(row: &Row, field: &str) -> Option<String> {
    let value = row.get(field).trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn parse_f64(row: &Row, field: &'static str) -> Result<f64, ReaderError> {
    let value = row.get(field).trim();
    value
        .parse::<f64>()
        .map_err(|_| ReaderError::InvalidFieldError {
            line: row.line(),
            field,
            value: value.to_string(),
        })
}

fn parse_u32(row: &Row, field: &'static str) -> Result<u32, ReaderError> {
    let value = row.get(field).trim();
    value
        .parse::<u32>()
        .map_err(|_| ReaderError::InvalidFieldError {
            line: row.line(),
            field,
            value: value.to_string(),
        })
}
