//! `pypackage-gen` — scaffold the skeleton of a command-line Python package.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load user defaults ([`config::load_config`]).
//! 3. Merge flags, config and environment into [`models::GenerateOptions`].
//! 4. For each package name, in order: normalize it ([`naming`]), resolve the
//!    license ([`license`]) and write the skeleton ([`scaffold`]).
//! 5. Render the summary ([`report`]) or print it as JSON.
//!
//! Invalid names are skipped. A license that cannot be resolved or a failed
//! write stops the run with exit code `1`.

mod cli;
mod config;
mod error;
mod license;
mod models;
mod naming;
mod report;
mod scaffold;

use anyhow::Result;
use chrono::Datelike;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, ReportFormat};
use config::{load_config, Config};
use error::GenError;
use license::resolver::LicenseResolver;
use models::{GenerateOptions, LicenseKey};
use report::terminal::{render_summary, SilentProgress, TerminalProgress};
use scaffold::{Generator, Progress};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = std::env::current_dir()?;
    let config = load_config(&cwd, cli.config.as_deref())?;

    let options = match resolve_options(&cli, &config, &current_user(), &current_year()) {
        Ok(options) => options,
        Err(err) => abort_on_license(&err),
    };
    tracing::debug!(?options, "resolved options");

    let resolver = LicenseResolver::builtin();
    let generator = Generator::new(&resolver, &options);

    let mut progress: Box<dyn Progress> = match cli.report {
        ReportFormat::Terminal => Box::new(TerminalProgress::new(cli.quiet)),
        ReportFormat::Json => Box::new(SilentProgress),
    };

    let outcomes = match generator.run(&cli.package_names, &cwd, progress.as_mut()) {
        Ok(outcomes) => outcomes,
        Err(err @ (GenError::LicenseNotFound { .. } | GenError::UnknownSlot { .. })) => {
            abort_on_license(&err)
        }
        Err(err) => return Err(err.into()),
    };

    match cli.report {
        ReportFormat::Terminal => {
            if !cli.quiet {
                render_summary(&outcomes);
            }
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&outcomes)?);
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn abort_on_license(err: &GenError) -> ! {
    eprintln!(
        "{} There was an error retrieving the licensing text: {}",
        "✗".red(),
        err
    );
    std::process::exit(1);
}

/// Merge CLI flags over config values over environment-derived defaults.
fn resolve_options(
    cli: &Cli,
    config: &Config,
    env_user: &str,
    env_year: &str,
) -> Result<GenerateOptions, GenError> {
    let defaults = &config.defaults;

    let license = match (&cli.license, &defaults.license) {
        (Some(arg), _) => LicenseKey::from(arg),
        (None, Some(key)) => key.parse()?,
        (None, None) => LicenseKey::Gplv3,
    };

    Ok(GenerateOptions {
        license,
        user: cli
            .user
            .clone()
            .or_else(|| defaults.user.clone())
            .unwrap_or_else(|| env_user.to_string()),
        email: cli
            .email
            .clone()
            .or_else(|| defaults.email.clone())
            .unwrap_or_default(),
        year: cli.year.clone().unwrap_or_else(|| env_year.to_string()),
        description: cli
            .description
            .clone()
            .or_else(|| defaults.description.clone())
            .unwrap_or_default(),
        docs: cli.docs || defaults.docs,
        max_name_len: config.naming.effective_max_len(),
    })
}

fn current_user() -> String {
    ["USER", "USERNAME"]
        .iter()
        .find_map(|var| std::env::var(var).ok().filter(|v| !v.is_empty()))
        .unwrap_or_else(|| "user".to_string())
}

fn current_year() -> String {
    chrono::Local::now().year().to_string()
}
