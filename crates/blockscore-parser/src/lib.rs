pub mod diagnostics;
pub mod model;
mod parse;

pub use diagnostics::{DiagnosticSink, SkipReason, TracingSink, VecSink};
pub use model::ParsedRecord;
pub use parse::{parse_line, parse_log};

#[cfg(test)]
mod tests;
