//! Responder teams and their eligibility rules.
//!
//! Team behavior is polymorphic over a closed set of kinds, modeled as
//! [`TeamKind`] with an exhaustive `match` per operation — adding a
//! kind forces every rule site to be revisited.
//!
//! Each rule is purely conjunctive: every listed condition must hold,
//! and availability is always the first gate. A team that has taken a
//! report is out of the roster for good; `available` flips true→false
//! at most once and never reverts.

mod types;

pub use types::{Team, TeamKind};
