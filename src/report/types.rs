//! Report and emergency-kind types.

/// The category of an incident.
///
/// `Shortage` is declared but no team kind handles it; a `Shortage`
/// report always falls through the dispatch scan to
/// [`DispatchOutcome::NoCoverage`](crate::center::DispatchOutcome).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EmergencyKind {
    Flood,
    Injury,
    Blockage,
    Shortage,
}

/// An immutable description of one incident requiring a response.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    /// Incident category.
    pub kind: EmergencyKind,
    /// Zone identifier. Matching against a team's zone is exact string
    /// equality.
    pub zone: String,
    /// Severity level. Unvalidated; only the Injury rule reads it.
    pub severity: i32,
    /// Expected duration in hours. Only the Blockage rule reads it.
    pub duration_hours: f64,
    /// Free-text description, echoed in status lines.
    pub description: String,
}

impl Report {
    /// Creates a report, storing all fields verbatim.
    pub fn new(
        kind: EmergencyKind,
        zone: impl Into<String>,
        severity: i32,
        duration_hours: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            zone: zone.into(),
            severity,
            duration_hours,
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_stores_fields_verbatim() {
        let report = Report::new(EmergencyKind::Flood, "North", 2, 5.0, "Flood near river");

        assert_eq!(report.kind, EmergencyKind::Flood);
        assert_eq!(report.zone, "North");
        assert_eq!(report.severity, 2);
        assert!((report.duration_hours - 5.0).abs() < f64::EPSILON);
        assert_eq!(report.description, "Flood near river");
    }

    #[test]
    fn test_report_accepts_unvalidated_values() {
        // No range checks: negative severity and duration are stored as-is.
        let report = Report::new(EmergencyKind::Shortage, "", -7, -1.5, "");

        assert_eq!(report.severity, -7);
        assert!(report.duration_hours < 0.0);
        assert!(report.zone.is_empty());
    }
}
