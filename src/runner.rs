//! Smoke runner: ordered execution of scaffold checks.

use std::path::Path;

use crate::check::{CheckStatus, ScaffoldCheck};
use crate::checks::{
    AgentInstructions, AiIgnorePatterns, FrameworkSetup, GitRepository, RequiredDirs,
    RequiredFiles,
};
use crate::config::SmokeConfig;
use crate::report::SmokeReport;

/// Runs a suite of scaffold checks against a project root.
pub struct SmokeRunner {
    checks: Vec<Box<dyn ScaffoldCheck>>,
    stop_on_first: bool,
}

impl SmokeRunner {
    /// Creates an empty runner.
    #[must_use]
    pub fn new(stop_on_first: bool) -> Self {
        Self {
            checks: Vec::new(),
            stop_on_first,
        }
    }

    /// Builds the standard suite from a configuration.
    #[must_use]
    pub fn from_config(config: &SmokeConfig) -> Self {
        let mut runner = Self::new(config.stop_on_first);
        runner.add_check(FrameworkSetup);
        runner.add_check(RequiredDirs::new(config.required_dirs.clone()));
        runner.add_check(RequiredFiles::new(config.required_files.clone()));
        if !config.instruction_patterns.is_empty() {
            runner.add_check(AgentInstructions::new(
                config.instruction_file.clone(),
                config.instruction_patterns.clone(),
            ));
        }
        if config.check_git {
            runner.add_check(GitRepository);
        }
        runner.add_check(AiIgnorePatterns::default());
        runner
    }

    /// Adds a check to the suite.
    pub fn add_check(&mut self, check: impl ScaffoldCheck + 'static) {
        self.checks.push(Box::new(check));
    }

    /// Returns the number of checks in the suite.
    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Returns true if the suite is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Runs every check against `root` and returns the aggregated report.
    ///
    /// Checks are independent pure reads: execution order only affects
    /// report ordering, and repeated runs over an unchanged tree produce
    /// identical reports.
    #[must_use]
    pub fn run(&self, root: &Path) -> SmokeReport {
        let mut report = SmokeReport::new();

        for check in &self.checks {
            let outcome = check.run(root);
            match outcome.status {
                CheckStatus::Fail => {
                    tracing::warn!(
                        check = check.name(),
                        message = outcome.message.as_deref().unwrap_or(""),
                        "check failed"
                    );
                }
                status => {
                    tracing::debug!(check = check.name(), %status, "check complete");
                }
            }
            let failed = outcome.status == CheckStatus::Fail;
            report.record(check.name(), outcome);
            if failed && self.stop_on_first {
                break;
            }
        }

        report
    }
}

impl Default for SmokeRunner {
    fn default() -> Self {
        Self::from_config(&SmokeConfig::default())
    }
}
