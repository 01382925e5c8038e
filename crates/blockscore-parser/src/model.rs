use chrono::{DateTime, Timelike, Utc};

/// One block-template observation extracted from a log line.
///
/// `fees` and `score` are absent when the line carried no metrics
/// substructure; `hash` is always a 64-character lowercase hex string,
/// since lines without one are dropped at parse time.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRecord {
    pub time: DateTime<Utc>,
    pub fees: Option<f64>,
    pub score: Option<f64>,
    pub hash: String,
}

impl ParsedRecord {
    /// Minute-of-hour of the observation, 0-59.
    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    pub fn timestamp_micros(&self) -> i64 {
        self.time.timestamp_micros()
    }
}
