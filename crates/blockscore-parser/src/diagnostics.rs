use std::fmt;

/// Why the parser dropped a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No recognizable date-time stamp, or the digits did not form a
    /// real calendar date/time.
    MissingTimestamp,
    /// A date-time was present but no 64-hex block hash; without a key
    /// the record is not worth emitting.
    MissingHash,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::MissingTimestamp => "no parseable date-time",
            SkipReason::MissingHash => "no block hash",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the parser reports lines it drops. Injected rather than
/// logged through global state so callers decide what skipped input
/// looks like.
pub trait DiagnosticSink {
    fn skipped(&mut self, line_number: usize, line: &str, reason: SkipReason);
}

/// Production sink: forwards every skipped line to the `tracing`
/// subscriber at DEBUG.
#[derive(Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn skipped(&mut self, line_number: usize, line: &str, reason: SkipReason) {
        tracing::debug!(line_number, reason = %reason, "skipping line: {line}");
    }
}

/// Collects diagnostics in memory, for tests.
#[derive(Debug, Default)]
pub struct VecSink {
    pub entries: Vec<(usize, SkipReason)>,
}

impl DiagnosticSink for VecSink {
    fn skipped(&mut self, line_number: usize, _line: &str, reason: SkipReason) {
        self.entries.push((line_number, reason));
    }
}
