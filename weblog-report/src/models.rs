/// One row of the access log, fields kept exactly as they appear in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub path: String,
    pub datetime: String,
    pub browser: String,
    pub status: String,
    pub size: String,
}
