//! Robots-Checker main entry point
//!
//! This is the command-line interface for checking one URL against its site's robots.txt.

use clap::Parser;
use robots_checker::config::{load_config, Config};
use robots_checker::RobotsChecker;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Robots-Checker: robots.txt access checks
///
/// Fetches the robots.txt of the URL's site and reports whether the given
/// user agent may crawl the URL. Exits with 0 when allowed, 1 when not, 2 on error.
#[derive(Parser, Debug)]
#[command(name = "robots-checker")]
#[command(version)]
#[command(about = "Check a URL against its site's robots.txt", long_about = None)]
struct Cli {
    /// URL to check
    #[arg(value_name = "URL")]
    url: String,

    /// User-agent token to evaluate robots.txt groups for
    #[arg(short = 'a', long, default_value = "*")]
    user_agent: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Print the reason behind the verdict
    #[arg(long)]
    explain: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    ExitCode::from(exit_status(run(&cli).await))
}

/// Maps the check result to the process exit status, logging errors once
fn exit_status(outcome: Result<bool, Box<dyn Error>>) -> u8 {
    match outcome {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(e) => {
            tracing::error!("{}", e);
            2
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("robots_checker=warn"),
            1 => EnvFilter::new("robots_checker=info,warn"),
            2 => EnvFilter::new("robots_checker=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads configuration, runs the check and prints the result
async fn run(cli: &Cli) -> Result<bool, Box<dyn Error>> {
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => Config::default(),
    };

    let checker = RobotsChecker::new(&config)?;
    let verdict = checker.check(&cli.url, &cli.user_agent).await?;

    if !cli.quiet {
        if verdict.allowed {
            println!("{} is accessible.", cli.url);
        } else {
            println!("{} is not accessible.", cli.url);
        }
        if cli.explain {
            println!("  robots.txt: {}", verdict.robots_url);
            println!("  reason: {}", verdict.reason);
        }
    }

    Ok(verdict.allowed)
}
