//! Check trait and per-check outcome types.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// A single named verification over a project root.
///
/// Implementations must be pure reads: no filesystem writes, no retained
/// state between runs. Repeated runs over an unchanged tree return the
/// same outcome, and checks may safely run concurrently.
pub trait ScaffoldCheck: Send + Sync {
    /// Returns the check name as reported in the summary.
    fn name(&self) -> &str;

    /// Runs the check against the given project root.
    fn run(&self, root: &Path) -> CheckOutcome;
}

/// Status of a completed check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// Expectation met.
    Pass,
    /// Advisory finding, never fails the run by itself.
    Warn,
    /// Expectation not met.
    Fail,
    /// Check did not apply to this project.
    Skip,
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pass => "PASS",
            Self::Warn => "WARN",
            Self::Fail => "FAIL",
            Self::Skip => "SKIP",
        };
        f.write_str(label)
    }
}

/// Outcome of a single check run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// Resulting status.
    pub status: CheckStatus,
    /// Human-readable detail, mandatory on failure.
    pub message: Option<String>,
}

impl CheckOutcome {
    /// A passing outcome with no message.
    #[must_use]
    pub const fn pass() -> Self {
        Self {
            status: CheckStatus::Pass,
            message: None,
        }
    }

    /// A passing outcome with a descriptive message.
    #[must_use]
    pub fn pass_with(msg: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Pass,
            message: Some(msg.into()),
        }
    }

    /// An advisory outcome.
    #[must_use]
    pub fn warn(msg: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Warn,
            message: Some(msg.into()),
        }
    }

    /// A failing outcome naming the unmet expectation.
    #[must_use]
    pub fn fail(msg: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Fail,
            message: Some(msg.into()),
        }
    }

    /// A skipped outcome.
    #[must_use]
    pub fn skip(msg: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Skip,
            message: Some(msg.into()),
        }
    }

    /// Returns true unless the outcome is a failure.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.status != CheckStatus::Fail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_constructors() {
        assert_eq!(CheckOutcome::pass().status, CheckStatus::Pass);
        assert!(CheckOutcome::pass().message.is_none());

        let fail = CheckOutcome::fail("docs directory should exist");
        assert_eq!(fail.status, CheckStatus::Fail);
        assert!(fail.message.is_some_and(|m| m.contains("docs")));
    }

    #[test]
    fn test_outcome_passed() {
        assert!(CheckOutcome::pass().passed());
        assert!(CheckOutcome::warn("advisory").passed());
        assert!(CheckOutcome::skip("not applicable").passed());
        assert!(!CheckOutcome::fail("missing").passed());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(CheckStatus::Pass.to_string(), "PASS");
        assert_eq!(CheckStatus::Warn.to_string(), "WARN");
        assert_eq!(CheckStatus::Fail.to_string(), "FAIL");
        assert_eq!(CheckStatus::Skip.to_string(), "SKIP");
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&CheckStatus::Fail).unwrap();
        assert_eq!(json, "\"fail\"");
        let status: CheckStatus = serde_json::from_str("\"warn\"").unwrap();
        assert_eq!(status, CheckStatus::Warn);
    }
}
