use std::io::Write;

use csv::Writer;

use crate::classify::ValidityDecision;

pub const CSV_HEADER: [&str; 4] = ["block_time", "fees", "score", "block_hash"];

/// Placeholder for the first record's elapsed time and for absent
/// fee/score metrics.
pub const ABSENT: &str = "none";

/// Write the full decision stream as CSV, one row per parsed record in
/// input order, discarded records included.
pub fn write_rows<W: Write>(writer: W, decisions: &[ValidityDecision]) -> Result<(), csv::Error> {
    let mut out = Writer::from_writer(writer);
    out.write_record(CSV_HEADER)?;

    for decision in decisions {
        let block_time = decision
            .elapsed_minutes()
            .map(|minutes| format!("{minutes:.2}"))
            .unwrap_or_else(|| ABSENT.to_string());
        out.write_record([
            &block_time,
            &format_metric(decision.record.fees),
            &format_metric(decision.record.score),
            &decision.record.hash,
        ])?;
    }

    out.flush()?;
    Ok(())
}

fn format_metric(value: Option<f64>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => ABSENT.to_string(),
    }
}
