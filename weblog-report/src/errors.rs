use std::string::FromUtf8Error;

use derive_more::{Display, Error, From};

/// Failure to retrieve the access log body.
#[derive(Debug, Display, Error, From)]
pub enum FetchError {
    #[display("{_0}")]
    Http(#[error(source)] reqwest::Error),
    #[display("response body is not valid UTF-8: {_0}")]
    Decode(#[error(source)] FromUtf8Error),
}

/// A row too short to map onto a log entry. Fatal for the whole run.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("row {row} has {fields} field(s), expected at least 5")]
pub struct RowShapeError {
    pub row: usize,
    pub fields: usize,
}

/// A timestamp that does not match `%m/%d/%Y %H:%M:%S`. Only the offending
/// entry is dropped from the hourly tally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("row {row}: time data {raw:?} does not match format '%m/%d/%Y %H:%M:%S' ({reason})")]
pub struct TimestampError {
    pub row: usize,
    pub raw: String,
    #[error(source)]
    pub reason: chrono::ParseError,
}

#[derive(Debug, Display, Error, From)]
pub enum ReportError {
    #[display("malformed access log: {_0}")]
    Row(#[error(source)] RowShapeError),
    #[display("failed to write report: {_0}")]
    Output(#[error(source)] std::io::Error),
}
