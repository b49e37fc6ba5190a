//! Smoke suite configuration.
//!
//! Configuration is validated at load time, with defaults matching the
//! scaffold contract of the AI-First SDLC templates.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SmokeError};

/// Configuration for a smoke verification run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmokeConfig {
    /// Project root to verify.
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Directories that must exist, relative to the root.
    #[serde(default = "default_required_dirs")]
    pub required_dirs: Vec<PathBuf>,

    /// Files that must exist, relative to the root.
    #[serde(default = "default_required_files")]
    pub required_files: Vec<PathBuf>,

    /// Agent instruction file checked for required content.
    #[serde(default = "default_instruction_file")]
    pub instruction_file: PathBuf,

    /// Case-insensitive patterns the instruction file must contain.
    /// Empty list skips the content check entirely.
    #[serde(default = "default_instruction_patterns")]
    pub instruction_patterns: Vec<String>,

    /// Whether to require a `.git` directory.
    #[serde(default = "default_true")]
    pub check_git: bool,

    /// Treat warnings as failures.
    #[serde(default)]
    pub strict: bool,

    /// Stop at the first failing check instead of collecting all results.
    #[serde(default)]
    pub stop_on_first: bool,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_required_dirs() -> Vec<PathBuf> {
    vec![PathBuf::from("docs"), PathBuf::from("retrospectives")]
}

fn default_required_files() -> Vec<PathBuf> {
    vec![
        PathBuf::from("README.md"),
        PathBuf::from("CLAUDE.md"),
        PathBuf::from("VERSION"),
    ]
}

fn default_instruction_file() -> PathBuf {
    PathBuf::from("CLAUDE.md")
}

fn default_instruction_patterns() -> Vec<String> {
    [
        "claude.md",
        "ai development",
        "git workflow",
        "never push directly to main",
    ]
    .map(String::from)
    .to_vec()
}

fn default_true() -> bool {
    true
}

impl Default for SmokeConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            required_dirs: default_required_dirs(),
            required_files: default_required_files(),
            instruction_file: default_instruction_file(),
            instruction_patterns: default_instruction_patterns(),
            check_git: default_true(),
            strict: false,
            stop_on_first: false,
        }
    }
}

impl SmokeConfig {
    /// Loads and validates a configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns an error if any scaffold path is empty or absolute, or if
    /// an instruction pattern is blank.
    pub fn validate(&self) -> Result<()> {
        for path in self.required_dirs.iter().chain(&self.required_files) {
            if path.as_os_str().is_empty() {
                return Err(SmokeError::config("scaffold paths cannot be empty"));
            }
            if path.is_absolute() {
                return Err(SmokeError::config(format!(
                    "scaffold paths must be relative to the project root: {}",
                    path.display()
                )));
            }
        }

        if self.instruction_file.as_os_str().is_empty() {
            return Err(SmokeError::config("instruction_file cannot be empty"));
        }

        if self.instruction_patterns.iter().any(|p| p.trim().is_empty()) {
            return Err(SmokeError::config(
                "instruction_patterns entries cannot be blank",
            ));
        }

        Ok(())
    }
}
