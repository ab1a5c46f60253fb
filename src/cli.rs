use std::path::PathBuf;

use clap::Parser;

use crate::models::LicenseKey;

#[derive(Parser, Debug)]
#[command(
    name = "pypackage-gen",
    about = "Creates a basic framework for a python command line package",
    version
)]
pub struct Cli {
    /// Package names to generate; may include a parent directory (e.g. `work/my-pkg`)
    #[arg(value_name = "PACKAGE_NAMES")]
    pub package_names: Vec<String>,

    /// Also create a docs directory
    #[arg(long)]
    pub docs: bool,

    /// User name to put in the licensing and in setup.py [default: current user]
    #[arg(long)]
    pub user: Option<String>,

    /// Short description of the package to put in README.md
    #[arg(short = 'm', value_name = "DESCRIPTION")]
    pub description: Option<String>,

    /// Email to put in the licensing and in setup.py
    #[arg(long)]
    pub email: Option<String>,

    /// Year to put in the licensing [default: current year]
    #[arg(long)]
    pub year: Option<String>,

    /// License for the generated package [default: gplv3]
    #[arg(long, value_name = "LICENSE")]
    pub license: Option<LicenseArg>,

    /// Config file [default: ./.pypackage-gen/config.toml, fallback ~/.config/pypackage-gen/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Do not print a line per written file
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum LicenseArg {
    Gplv3,
    Mit,
    Agplv3,
    Bsd,
    Apache2,
}

impl From<&LicenseArg> for LicenseKey {
    fn from(arg: &LicenseArg) -> Self {
        match arg {
            LicenseArg::Gplv3 => LicenseKey::Gplv3,
            LicenseArg::Mit => LicenseKey::Mit,
            LicenseArg::Agplv3 => LicenseKey::Agplv3,
            LicenseArg::Bsd => LicenseKey::Bsd,
            LicenseArg::Apache2 => LicenseKey::Apache2,
        }
    }
}
