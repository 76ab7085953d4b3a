//! Self-verification suites for the path rework.

pub mod path_fix;
pub mod report;
pub mod source_scan;

pub use report::{CheckOutcome, CheckReport};
