//! Incident report data model.
//!
//! A [`Report`] is a pure data holder: created once per incident, never
//! mutated, owned solely by whichever call feeds it into dispatch. The
//! constructor stores its fields verbatim — there is no validation or
//! normalization (a negative severity is accepted and simply fails any
//! numeric eligibility threshold).

mod types;

pub use types::{EmergencyKind, Report};
