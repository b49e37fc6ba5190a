//! Concrete scaffold checks.
//!
//! Each check verifies one aspect of a materialized AI-First SDLC project
//! scaffold. All checks are read-only and independent of each other.

use std::fs;
use std::path::{Path, PathBuf};

use crate::check::{CheckOutcome, ScaffoldCheck};

/// Sentinel check that always passes.
///
/// Its presence in a report indicates the smoke suite itself is wired up
/// and runnable, even in an otherwise empty repository.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameworkSetup;

impl ScaffoldCheck for FrameworkSetup {
    fn name(&self) -> &'static str {
        "framework-setup"
    }

    fn run(&self, _root: &Path) -> CheckOutcome {
        CheckOutcome::pass_with("framework is set up")
    }
}

/// Verifies that required directories exist under the project root.
#[derive(Debug, Clone)]
pub struct RequiredDirs {
    dirs: Vec<PathBuf>,
}

impl RequiredDirs {
    /// Creates the check for the given relative directory paths.
    #[must_use]
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }
}

impl ScaffoldCheck for RequiredDirs {
    fn name(&self) -> &'static str {
        "project-structure"
    }

    fn run(&self, root: &Path) -> CheckOutcome {
        let missing = missing_entries(root, &self.dirs, Path::is_dir);
        if missing.is_empty() {
            CheckOutcome::pass()
        } else {
            CheckOutcome::fail(format!("missing directories: {}", missing.join(", ")))
        }
    }
}

/// Verifies that required files exist under the project root.
#[derive(Debug, Clone)]
pub struct RequiredFiles {
    files: Vec<PathBuf>,
}

impl RequiredFiles {
    /// Creates the check for the given relative file paths.
    #[must_use]
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self { files }
    }
}

impl ScaffoldCheck for RequiredFiles {
    fn name(&self) -> &'static str {
        "required-files"
    }

    fn run(&self, root: &Path) -> CheckOutcome {
        let missing = missing_entries(root, &self.files, Path::is_file);
        if missing.is_empty() {
            CheckOutcome::pass()
        } else {
            CheckOutcome::fail(format!("missing files: {}", missing.join(", ")))
        }
    }
}

/// Verifies that the agent instruction file contains required content.
///
/// Matching is case-insensitive substring search, mirroring how the
/// scaffold's instruction file is authored free-form.
#[derive(Debug, Clone)]
pub struct AgentInstructions {
    file: PathBuf,
    patterns: Vec<String>,
}

impl AgentInstructions {
    /// Creates the check for the given instruction file and patterns.
    #[must_use]
    pub fn new(file: PathBuf, patterns: Vec<String>) -> Self {
        Self { file, patterns }
    }
}

impl ScaffoldCheck for AgentInstructions {
    fn name(&self) -> &'static str {
        "agent-instructions"
    }

    fn run(&self, root: &Path) -> CheckOutcome {
        let path = root.join(&self.file);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content.to_lowercase(),
            Err(_) => {
                return CheckOutcome::fail(format!("{} not found", self.file.display()));
            }
        };

        let missing: Vec<&str> = self
            .patterns
            .iter()
            .map(String::as_str)
            .filter(|pattern| !content.contains(&pattern.to_lowercase()))
            .collect();

        if missing.is_empty() {
            CheckOutcome::pass()
        } else {
            CheckOutcome::fail(format!(
                "{} missing required content: {}",
                self.file.display(),
                missing.join(", ")
            ))
        }
    }
}

/// Verifies that the project root is a git repository.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitRepository;

impl ScaffoldCheck for GitRepository {
    fn name(&self) -> &'static str {
        "git-repository"
    }

    fn run(&self, root: &Path) -> CheckOutcome {
        if root.join(".git").is_dir() {
            CheckOutcome::pass()
        } else {
            CheckOutcome::fail("not a git repository (run 'git init')")
        }
    }
}

/// Advisory check that `.gitignore` covers AI tool artifacts.
///
/// Never fails the run: a missing `.gitignore` or absent patterns are
/// reported as warnings only.
#[derive(Debug, Clone)]
pub struct AiIgnorePatterns {
    patterns: Vec<String>,
}

impl AiIgnorePatterns {
    /// Creates the check for the given ignore patterns.
    #[must_use]
    pub fn new(patterns: Vec<String>) -> Self {
        Self { patterns }
    }
}

impl Default for AiIgnorePatterns {
    fn default() -> Self {
        Self::new(vec![
            ".claude".to_string(),
            ".cursor".to_string(),
            ".aider".to_string(),
        ])
    }
}

impl ScaffoldCheck for AiIgnorePatterns {
    fn name(&self) -> &'static str {
        "ai-ignore-patterns"
    }

    fn run(&self, root: &Path) -> CheckOutcome {
        let content = match fs::read_to_string(root.join(".gitignore")) {
            Ok(content) => content.to_lowercase(),
            Err(_) => return CheckOutcome::warn(".gitignore not found"),
        };

        let found = self
            .patterns
            .iter()
            .any(|pattern| content.contains(&pattern.to_lowercase()));

        if found {
            CheckOutcome::pass()
        } else {
            CheckOutcome::warn("consider adding AI tool patterns to .gitignore")
        }
    }
}

/// Returns display strings for entries under `root` that fail `probe`,
/// in declaration order.
fn missing_entries(
    root: &Path,
    entries: &[PathBuf],
    probe: fn(&Path) -> bool,
) -> Vec<String> {
    entries
        .iter()
        .filter(|entry| !probe(&root.join(entry)))
        .map(|entry| entry.display().to_string())
        .collect()
}
