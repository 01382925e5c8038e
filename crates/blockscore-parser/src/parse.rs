use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::diagnostics::{DiagnosticSink, SkipReason};
use crate::model::ParsedRecord;

// The structured fields can sit anywhere in a line; everything around
// them (level, source tag, free text) is noise.
static RE_DATETIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{4})-(\d{2})-(\d{2})T(\d{2}):(\d{2}):(\d{2})\.(\d{3})").unwrap()
});
static RE_BLOCK_HASH: Lazy<Regex> = Lazy::new(|| Regex::new(r#""hash":"([0-9a-f]{64})""#).unwrap());
static RE_METRICS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""block_fees":([0-9.]+),"block_score":([0-9.]+)"#).unwrap());

/// Parse a full log, reporting every dropped line to `sink` and
/// returning the records in input order.
pub fn parse_log(content: &str, sink: &mut dyn DiagnosticSink) -> Vec<ParsedRecord> {
    let mut records = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        match parse_line(line) {
            Ok(record) => records.push(record),
            Err(reason) => sink.skipped(idx + 1, line, reason),
        }
    }
    records
}

/// Parse a single line. A missing or invalid date-time and a missing
/// block hash each drop the line; a missing metrics pair does not.
pub fn parse_line(line: &str) -> Result<ParsedRecord, SkipReason> {
    let time = match_datetime(line).ok_or(SkipReason::MissingTimestamp)?;

    let hash = RE_BLOCK_HASH
        .captures(line)
        .map(|caps| caps[1].to_string())
        .ok_or(SkipReason::MissingHash)?;

    let (fees, score) = match_metrics(line);

    Ok(ParsedRecord {
        time,
        fees,
        score,
        hash,
    })
}

fn match_datetime(line: &str) -> Option<DateTime<Utc>> {
    let caps = RE_DATETIME.captures(line)?;
    // Capture groups are all-digit, so the integer parses cannot fail;
    // the calendar lookups can (e.g. month 13) and drop the line.
    let field = |idx: usize| caps[idx].parse::<u32>().ok();
    let (year, month, day) = (field(1)?, field(2)?, field(3)?);
    let (hour, minute, second, millis) = (field(4)?, field(5)?, field(6)?, field(7)?);

    let naive = NaiveDate::from_ymd_opt(year as i32, month, day)?
        .and_hms_micro_opt(hour, minute, second, millis * 1000)?;
    Some(naive.and_utc())
}

fn match_metrics(line: &str) -> (Option<f64>, Option<f64>) {
    let Some(caps) = RE_METRICS.captures(line) else {
        return (None, None);
    };
    // A malformed number (e.g. "1.2.3") is treated the same as an
    // absent metrics pair.
    match (caps[1].parse::<f64>().ok(), caps[2].parse::<f64>().ok()) {
        (Some(fees), Some(score)) => (Some(fees), Some(score)),
        _ => (None, None),
    }
}
