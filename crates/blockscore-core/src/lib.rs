pub mod classify;
pub mod error;
pub mod pipeline;
pub mod policy;
pub mod report;
pub mod stats;
