use std::collections::HashMap;
use std::sync::Arc;

/// the header row of one relation, shared by every [Row] read from it.
#[derive(Debug, Clone, Default)]
pub struct Headers {
    index: HashMap<String, usize>,
}

impl Headers {
    pub fn from_record(record: &csv::StringRecord) -> Self {
        let index = record
            .iter()
            .enumerate()
            .map(|(i, name)| (name.trim().to_string(), i))
            .collect();
        Headers { index }
    }

    pub fn position(&self, field: &str) -> Option<usize> {
        self.index.get(field).copied()
    }
}

/// one parsed row: field values keyed by header name. a field that is absent
/// from the header, or missing because the row came up short, reads as the
/// empty string rather than failing.
#[derive(Debug, Clone)]
pub struct Row {
    record: csv::StringRecord,
    headers: Arc<Headers>,
    line: u64,
}

impl Row {
    pub fn new(record: csv::StringRecord, headers: Arc<Headers>, line: u64) -> Self {
        Row {
            record,
            headers,
            line,
        }
    }

    pub fn get(&self, field: &str) -> &str {
        self.headers
            .position(field)
            .and_then(|i| self.record.get(i))
            .unwrap_or("")
    }

    /// 1-based line number of this row in the source stream.
    pub fn line(&self) -> u64 {
        self.line
    }
}
