//! Team type, eligibility predicates, and handling actions.

use crate::report::{EmergencyKind, Report};

/// The capability variant of a responder team.
///
/// `General` is the explicit fallback for a team with no specialized
/// rule: it matches nothing and cannot respond. It is unreachable
/// through a dispatch scan by construction (its eligibility check is
/// unconditionally false); it exists so the variant set stays closed
/// and exhaustively matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TeamKind {
    Flood,
    Injury,
    Blockage,
    General,
}

/// A named, zoned responder unit with one eligibility rule and a
/// one-shot availability flag.
///
/// # Examples
///
/// ```
/// use dispatch_sim::report::{EmergencyKind, Report};
/// use dispatch_sim::team::Team;
///
/// let mut team = Team::flood("Flood Team A", "North");
/// let report = Report::new(EmergencyKind::Flood, "North", 2, 5.0, "Flood near river");
///
/// assert!(team.is_match(&report));
/// let line = team.handle(&report);
/// assert_eq!(line, "Flood Team A is handling FLOOD: Flood near river");
/// assert!(!team.available);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Team {
    /// Capability variant deciding which rule applies.
    pub kind: TeamKind,
    /// Display name, echoed in status lines.
    pub name: String,
    /// Home zone. A team only ever matches reports from its own zone.
    pub zone: String,
    /// Whether this team can still take a report. Starts true; flipped
    /// to false the first time the team handles a report, never reset.
    pub available: bool,
}

impl Team {
    fn new(kind: TeamKind, name: impl Into<String>, zone: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            zone: zone.into(),
            available: true,
        }
    }

    /// Creates a flood-response team.
    pub fn flood(name: impl Into<String>, zone: impl Into<String>) -> Self {
        Self::new(TeamKind::Flood, name, zone)
    }

    /// Creates an injury-response (medic) team.
    pub fn injury(name: impl Into<String>, zone: impl Into<String>) -> Self {
        Self::new(TeamKind::Injury, name, zone)
    }

    /// Creates a blockage-clearing team.
    pub fn blockage(name: impl Into<String>, zone: impl Into<String>) -> Self {
        Self::new(TeamKind::Blockage, name, zone)
    }

    /// Creates a team with no specialized rule. It never matches any
    /// report.
    pub fn general(name: impl Into<String>, zone: impl Into<String>) -> Self {
        Self::new(TeamKind::General, name, zone)
    }

    /// Whether this team can and should handle the given report right
    /// now.
    ///
    /// Availability is consulted first: an unavailable team never
    /// matches, regardless of the other fields. The per-kind rules are
    /// purely conjunctive:
    ///
    /// | Kind     | Rule                                                  |
    /// |----------|-------------------------------------------------------|
    /// | Flood    | same zone, kind is Flood                              |
    /// | Injury   | same zone, kind is Injury, severity ≥ 3               |
    /// | Blockage | same zone, kind is Blockage, duration > 2 h (strict)  |
    /// | General  | never                                                 |
    pub fn is_match(&self, report: &Report) -> bool {
        if !self.available {
            return false;
        }
        match self.kind {
            TeamKind::Flood => report.zone == self.zone && report.kind == EmergencyKind::Flood,
            TeamKind::Injury => {
                report.zone == self.zone
                    && report.kind == EmergencyKind::Injury
                    && report.severity >= 3
            }
            TeamKind::Blockage => {
                report.zone == self.zone
                    && report.kind == EmergencyKind::Blockage
                    && report.duration_hours > 2.0
            }
            TeamKind::General => false,
        }
    }

    /// Responds to the report: returns the human-readable status line
    /// and marks the team unavailable.
    ///
    /// A `General` team instead returns a cannot-respond line and does
    /// not change its availability — its `is_match` is always false,
    /// so a dispatch scan never reaches this path.
    pub fn handle(&mut self, report: &Report) -> String {
        match self.kind {
            TeamKind::Flood => {
                self.available = false;
                format!("{} is handling FLOOD: {}", self.name, report.description)
            }
            TeamKind::Injury => {
                self.available = false;
                format!("{} is treating INJURY: {}", self.name, report.description)
            }
            TeamKind::Blockage => {
                self.available = false;
                format!("{} is clearing BLOCKAGE: {}", self.name, report.description)
            }
            TeamKind::General => {
                format!("{}: cannot respond to {}", self.name, report.description)
            }
        }
    }
}
