//! Command-line entry point for scaffold smoke verification.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use sdlc_smoke::{Result, SmokeConfig, SmokeRunner};
use tracing_subscriber::EnvFilter;

/// Verify an AI-First SDLC project scaffold.
#[derive(Debug, Parser)]
#[command(name = "sdlc-smoke", version, about)]
struct Cli {
    /// Project root to verify (defaults to the current directory).
    root: Option<PathBuf>,

    /// Path to a TOML configuration file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Treat warnings as failures.
    #[arg(long)]
    strict: bool,

    /// Stop at the first failing check.
    #[arg(long)]
    stop_on_first: bool,

    /// Emit the report as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            tracing::error!("smoke verification aborted: {err}");
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<bool> {
    let mut config = match &cli.config {
        Some(path) => SmokeConfig::load(path)?,
        None => SmokeConfig::default(),
    };
    if let Some(root) = &cli.root {
        config.root = root.clone();
    }
    config.strict |= cli.strict;
    config.stop_on_first |= cli.stop_on_first;
    config.validate()?;

    if !config.root.is_dir() {
        return Err(sdlc_smoke::SmokeError::RootNotFound(config.root.clone()));
    }

    tracing::info!(root = %config.root.display(), "running scaffold smoke checks");
    let runner = SmokeRunner::from_config(&config);
    let report = runner.run(&config.root);

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{report}");
    }

    Ok(if config.strict {
        report.passed_strict()
    } else {
        report.passed()
    })
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_defaults() {
        let cli = Cli::parse_from(["sdlc-smoke"]);
        assert!(cli.root.is_none());
        assert!(!cli.strict);
        assert!(!cli.json);
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::parse_from([
            "sdlc-smoke",
            "some/project",
            "--strict",
            "--json",
            "--stop-on-first",
        ]);
        assert_eq!(cli.root, Some(PathBuf::from("some/project")));
        assert!(cli.strict);
        assert!(cli.json);
        assert!(cli.stop_on_first);
    }
}
