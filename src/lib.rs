// Allow unwrap/expect in tests for clear failure messages
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! # sdlc-smoke
//!
//! Scaffold smoke verification for AI-First SDLC projects.
//!
//! This crate provides:
//! - **Scaffold checks**: named, read-only verifications of a project tree
//! - **Smoke runner**: ordered execution with per-check reporting
//! - **Reports**: aggregated pass/warn/fail/skip verdicts with JSON export
//!
//! A smoke run never mutates the project: every check is an idempotent
//! read, safe to repeat and safe to run concurrently. Checks are
//! independent, so one failing expectation never masks another.
//!
//! ## Example
//!
//! ```rust,no_run
//! use sdlc_smoke::{SmokeConfig, SmokeRunner};
//!
//! let config = SmokeConfig::default();
//! let runner = SmokeRunner::from_config(&config);
//! let report = runner.run(&config.root);
//! assert!(report.passed());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod check;
pub mod checks;
pub mod config;
pub mod error;
pub mod report;
pub mod runner;

pub use check::{CheckOutcome, CheckStatus, ScaffoldCheck};
pub use checks::{
    AgentInstructions, AiIgnorePatterns, FrameworkSetup, GitRepository, RequiredDirs,
    RequiredFiles,
};
pub use config::SmokeConfig;
pub use error::{Result, SmokeError};
pub use report::{CheckRecord, SmokeReport};
pub use runner::SmokeRunner;
