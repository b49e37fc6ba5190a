//! Aggregated smoke run reports.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::check::{CheckOutcome, CheckStatus};
use crate::error::Result;

/// Result of a single check within a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRecord {
    /// Check name.
    pub name: String,
    /// Resulting status.
    pub status: CheckStatus,
    /// Optional detail message.
    pub message: Option<String>,
}

/// Aggregated results of a smoke run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmokeReport {
    /// Per-check records in execution order.
    pub records: Vec<CheckRecord>,
}

impl SmokeReport {
    /// Creates an empty report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Appends a check outcome to the report.
    pub fn record(&mut self, name: impl Into<String>, outcome: CheckOutcome) {
        self.records.push(CheckRecord {
            name: name.into(),
            status: outcome.status,
            message: outcome.message,
        });
    }

    /// Returns true if no check failed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.count(CheckStatus::Fail) == 0
    }

    /// Returns true if no check failed or warned.
    #[must_use]
    pub fn passed_strict(&self) -> bool {
        self.passed() && self.count(CheckStatus::Warn) == 0
    }

    /// Returns the number of records with the given status.
    #[must_use]
    pub fn count(&self, status: CheckStatus) -> usize {
        self.records.iter().filter(|r| r.status == status).count()
    }

    /// Returns the failed records in execution order.
    pub fn failures(&self) -> impl Iterator<Item = &CheckRecord> {
        self.records
            .iter()
            .filter(|r| r.status == CheckStatus::Fail)
    }

    /// Serializes the report as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for SmokeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.records {
            match &record.message {
                Some(message) => writeln!(f, "{} {}: {}", record.status, record.name, message)?,
                None => writeln!(f, "{} {}", record.status, record.name)?,
            }
        }
        writeln!(
            f,
            "{} passed, {} warnings, {} failed, {} skipped",
            self.count(CheckStatus::Pass),
            self.count(CheckStatus::Warn),
            self.count(CheckStatus::Fail),
            self.count(CheckStatus::Skip),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> SmokeReport {
        let mut report = SmokeReport::new();
        report.record("framework-setup", CheckOutcome::pass_with("framework is set up"));
        report.record("project-structure", CheckOutcome::fail("missing directories: docs"));
        report.record("ai-ignore-patterns", CheckOutcome::warn(".gitignore not found"));
        report
    }

    #[test]
    fn test_empty_report_passes() {
        let report = SmokeReport::new();
        assert!(report.passed());
        assert!(report.passed_strict());
    }

    #[test]
    fn test_verdicts() {
        let report = sample_report();
        assert!(!report.passed());
        assert!(!report.passed_strict());

        let mut warn_only = SmokeReport::new();
        warn_only.record("ai-ignore-patterns", CheckOutcome::warn("advisory"));
        assert!(warn_only.passed());
        assert!(!warn_only.passed_strict());
    }

    #[test]
    fn test_counts_and_failures() {
        let report = sample_report();
        assert_eq!(report.count(CheckStatus::Pass), 1);
        assert_eq!(report.count(CheckStatus::Warn), 1);
        assert_eq!(report.count(CheckStatus::Fail), 1);

        let failures: Vec<_> = report.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].name, "project-structure");
    }

    #[test]
    fn test_display_lists_each_check() {
        let rendered = sample_report().to_string();
        assert!(rendered.contains("PASS framework-setup"));
        assert!(rendered.contains("FAIL project-structure: missing directories: docs"));
        assert!(rendered.contains("1 passed, 1 warnings, 1 failed, 0 skipped"));
    }

    #[test]
    fn test_json_round_trip() {
        let report = sample_report();
        let json = report.to_json().unwrap();
        let parsed: SmokeReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, parsed);
    }
}
