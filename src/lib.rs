//! Emergency-dispatch simulation.
//!
//! Models a fixed roster of responder teams matched in priority order
//! against a sequence of incident reports:
//!
//! - **Report**: an immutable description of one incident (kind, zone,
//!   severity, duration, free-text description).
//! - **Team**: a named, zoned responder unit. Each team kind carries one
//!   hard-coded eligibility rule and a one-shot availability flag that
//!   flips when the team takes a report.
//! - **Dispatch center**: owns the ordered roster; each report is routed
//!   to the *first* eligible team in roster order, or announced as
//!   uncovered. First-match-wins, not best-match — severity and duration
//!   act as eligibility gates, never as ranking criteria.
//!
//! # Architecture
//!
//! The library performs no I/O: `dispatch` returns a
//! [`center::DispatchOutcome`] whose `Display` rendering is the exact
//! console line, and only the `dispatch-demo` driver binary prints.
//! Per-team `available` is the only mutable state in the system, and it
//! never reverts to true (there is no "team becomes free again" event
//! in this design).
//!
//! Execution is purely sequential. A concurrent dispatcher would need
//! each team's check-and-flip to be atomic; nothing here provides that.

pub mod center;
pub mod report;
pub mod scenario;
pub mod team;
