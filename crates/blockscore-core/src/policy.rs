use blockscore_parser::ParsedRecord;

use crate::error::PipelineError;

/// Record-pair classification interface: given a record and its
/// immediate predecessor, decide whether the record's score was
/// computed against a freshly refreshed block template.
pub trait TemplatePolicy: std::fmt::Debug {
    fn name(&self) -> &'static str;
    fn is_fresh(&self, prev: &ParsedRecord, current: &ParsedRecord) -> bool;
}

const MICROS_PER_SECOND: i64 = 1_000_000;

fn elapsed_micros(prev: &ParsedRecord, current: &ParsedRecord) -> i64 {
    current.timestamp_micros() - prev.timestamp_micros()
}

/// Pure threshold test: fresh only when strictly more than one full
/// refresh interval elapsed between the two observations. An elapsed
/// time of exactly the interval is stale.
#[derive(Debug, Clone, Copy)]
pub struct StrictThreshold {
    interval_min: u32,
}

impl StrictThreshold {
    pub fn new(interval_min: u32) -> Self {
        Self { interval_min }
    }
}

impl TemplatePolicy for StrictThreshold {
    fn name(&self) -> &'static str {
        "strict-threshold"
    }

    fn is_fresh(&self, prev: &ParsedRecord, current: &ParsedRecord) -> bool {
        let threshold = i64::from(self.interval_min) * 60 * MICROS_PER_SECOND;
        elapsed_micros(prev, current) > threshold
    }
}

/// Threshold test with a minute-boundary exception. The template
/// refresh runs on a wall-clock cadence (every `interval_min` minutes
/// past the hour), so two blocks closer together than the interval can
/// still both reflect fresh templates if a refresh tick fell between
/// their minute marks.
#[derive(Debug, Clone, Copy)]
pub struct MinuteBoundary {
    interval_min: u32,
}

impl MinuteBoundary {
    pub fn new(interval_min: u32) -> Self {
        Self { interval_min }
    }
}

impl TemplatePolicy for MinuteBoundary {
    fn name(&self) -> &'static str {
        "minute-boundary"
    }

    fn is_fresh(&self, prev: &ParsedRecord, current: &ParsedRecord) -> bool {
        let threshold = i64::from(self.interval_min) * 60 * MICROS_PER_SECOND;
        if elapsed_micros(prev, current) >= threshold {
            return true;
        }

        let m0 = prev.minute();
        let m1 = current.minute();
        if m0 > m1 {
            // The pair straddles an hour rollover, which makes
            // minute-modulo reasoning ambiguous. Assume a refresh tick
            // crossed the seam; known to overcount near hour
            // boundaries.
            return true;
        }
        if m0 == m1 {
            // Same-minute arrivals cannot straddle a refresh tick.
            return false;
        }
        // A tick at any minute in (m0, m1] means a refresh fell
        // strictly between the two observations.
        (m0 + 1..=m1).any(|m| m % self.interval_min == 0)
    }
}

/// Configuration-level tag selecting one of the two policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    StrictThreshold,
    MinuteBoundary,
}

impl PolicyKind {
    /// Build the selected policy for a refresh interval in minutes.
    pub fn build(self, interval_min: u32) -> Result<Box<dyn TemplatePolicy>, PipelineError> {
        if interval_min == 0 {
            return Err(PipelineError::Validation(
                "refresh interval must be at least one minute".to_string(),
            ));
        }
        Ok(match self {
            PolicyKind::StrictThreshold => Box::new(StrictThreshold::new(interval_min)),
            PolicyKind::MinuteBoundary => Box::new(MinuteBoundary::new(interval_min)),
        })
    }
}
