#[derive(thiserror::Error, Debug)]
pub enum ReaderError {
    #[error("failed reading delimited stream: {0}")]
    CsvError(#[from] csv::Error),
    #[error("line {line}: invalid value '{value}' in field '{field}'")]
    InvalidFieldError {
        line: u64,
        field: &'static str,
        value: String,
    },
    #[error("line {line}: required field '{field}' is empty")]
    MissingFieldError { line: u64, field: &'static str },
}
