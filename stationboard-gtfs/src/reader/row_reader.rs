use super::reader_error::ReaderError;
use super::row::{Headers, Row};
use std::io::Read;
use std::sync::Arc;

/// streams a delimited relation into field-keyed [Row]s. the first non-blank
/// line is the header; blank lines are skipped; quoted fields follow RFC 4180
/// (a doubled quote is an escaped literal quote, delimiters inside quotes are
/// literal). rows with a mismatched field count are passed through, with the
/// missing trailing fields reading as empty strings.
pub struct RowReader<R: Read> {
    inner: csv::Reader<R>,
    headers: Arc<Headers>,
}

impl<R: Read> RowReader<R> {
    pub fn new(source: R) -> Result<Self, ReaderError> {
        let mut inner = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(source);
        let headers = Arc::new(Headers::from_record(inner.headers()?));
        Ok(RowReader { inner, headers })
    }

    /// streaming iterator over the remaining rows. rows are yielded one at a
    /// time and never retained, so memory stays bounded regardless of the
    /// relation's size.
    pub fn rows(&mut self) -> impl Iterator<Item = Result<Row, ReaderError>> + '_ {
        let headers = self.headers.clone();
        self.inner.records().map(move |result| {
            result.map_err(ReaderError::from).map(|record| {
                let line = record.position().map(|p| p.line()).unwrap_or(0);
                Row::new(record, headers.clone(), line)
            })
        })
    }
}
