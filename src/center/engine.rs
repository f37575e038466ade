//! First-match dispatch scan.

use std::fmt;

use crate::report::Report;
use crate::team::Team;

/// The outcome of dispatching one report.
///
/// "No available team" is a normal, expected outcome — not an error.
/// The `Display` rendering is the exact console line the driver prints.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DispatchOutcome {
    /// A team took the report. Carries the team name and the status
    /// line produced by its handling action.
    Assigned {
        /// Name of the team that handled the report.
        team: String,
        /// The rendered status line.
        line: String,
    },

    /// No team in the roster matched; the report is discarded.
    NoCoverage,
}

impl fmt::Display for DispatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchOutcome::Assigned { line, .. } => f.write_str(line),
            DispatchOutcome::NoCoverage => f.write_str("No available team for this report."),
        }
    }
}

/// Routes reports to the first eligible team in a fixed-order roster.
///
/// The roster order is significant and set once at construction; it is
/// never reordered. Teams mutate internally (their availability flag)
/// but the sequence itself is immutable.
///
/// # Examples
///
/// ```
/// use dispatch_sim::center::{DispatchCenter, DispatchOutcome};
/// use dispatch_sim::report::{EmergencyKind, Report};
/// use dispatch_sim::team::Team;
///
/// let mut center = DispatchCenter::new(vec![Team::flood("Flood Team A", "North")]);
/// let report = Report::new(EmergencyKind::Flood, "North", 2, 5.0, "Flood near river");
///
/// match center.dispatch(&report) {
///     DispatchOutcome::Assigned { team, .. } => assert_eq!(team, "Flood Team A"),
///     DispatchOutcome::NoCoverage => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct DispatchCenter {
    teams: Vec<Team>,
}

impl DispatchCenter {
    /// Creates a center over the given roster. Order is preserved and
    /// determines dispatch priority.
    pub fn new(teams: Vec<Team>) -> Self {
        Self { teams }
    }

    /// Read-only view of the roster, in dispatch order.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Routes one report to the first eligible team.
    ///
    /// A linear scan in roster order; the first team whose eligibility
    /// check passes handles the report and the scan stops — no team
    /// after it is consulted. O(roster size) per call, with no per-zone
    /// or per-kind index; rosters are small and fixed.
    pub fn dispatch(&mut self, report: &Report) -> DispatchOutcome {
        for team in &mut self.teams {
            if team.is_match(report) {
                let line = team.handle(report);
                return DispatchOutcome::Assigned {
                    team: team.name.clone(),
                    line,
                };
            }
        }
        DispatchOutcome::NoCoverage
    }
}
