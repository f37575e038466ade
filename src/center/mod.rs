//! Dispatch center: first-match routing over an ordered roster.
//!
//! The center scans its roster once per report, in construction order,
//! and hands the report to the first eligible team. There is no
//! best-match ranking, no retry, and no queue: an unmatched report is
//! surfaced as [`DispatchOutcome::NoCoverage`] and forgotten.

mod engine;

pub use engine::{DispatchCenter, DispatchOutcome};
