//! The compiled-in sample scenario.
//!
//! Three North-zone teams and four reports, fed through the center in a
//! fixed order. Purely illustrative; the reusable logic lives in
//! [`center`](crate::center) and [`team`](crate::team).

use crate::center::DispatchCenter;
use crate::report::{EmergencyKind, Report};
use crate::team::Team;

/// The fixed sample roster, in dispatch-priority order.
pub fn sample_roster() -> Vec<Team> {
    vec![
        Team::flood("Flood Team A", "North"),
        Team::injury("Medic One", "North"),
        Team::blockage("RoadClear Squad", "North"),
    ]
}

/// The four sample reports, in submission order. The last one targets
/// a zone with no registered teams and goes uncovered.
pub fn sample_reports() -> Vec<Report> {
    vec![
        Report::new(EmergencyKind::Flood, "North", 2, 5.0, "Flood near river"),
        Report::new(EmergencyKind::Injury, "North", 4, 1.0, "Car accident injury"),
        Report::new(EmergencyKind::Blockage, "North", 1, 3.0, "Tree blocking road"),
        Report::new(EmergencyKind::Injury, "South", 5, 1.0, "Remote injury"),
    ]
}

/// Runs the sample scenario and returns the rendered outcome lines, one
/// per report, in submission order.
pub fn run() -> Vec<String> {
    let mut center = DispatchCenter::new(sample_roster());
    sample_reports()
        .iter()
        .map(|report| center.dispatch(report).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_output_lines() {
        assert_eq!(
            run(),
            vec![
                "Flood Team A is handling FLOOD: Flood near river",
                "Medic One is treating INJURY: Car accident injury",
                "RoadClear Squad is clearing BLOCKAGE: Tree blocking road",
                "No available team for this report.",
            ]
        );
    }

    #[test]
    fn test_scenario_consumes_all_north_teams() {
        let mut center = DispatchCenter::new(sample_roster());
        for report in sample_reports() {
            center.dispatch(&report);
        }
        assert!(center.teams().iter().all(|t| !t.available));
    }
}
