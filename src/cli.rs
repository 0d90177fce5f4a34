use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::analyzer::traefik::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "traefik-validate")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Validate Traefik YAML configuration files")]
#[command(long_about = "Recursively finds .yml/.yaml files in a directory, runs them through yamllint, and validates Traefik routers, services and entry points. Missing routers/services containers can be auto-corrected.")]
pub struct Cli {
    /// Directory to scan for .yml/.yaml files
    #[arg(value_name = "DIRECTORY", required_unless_present = "list_rules")]
    pub directory: Option<PathBuf>,

    /// Insert missing 'routers'/'services' containers and rewrite invalid files
    #[arg(long)]
    pub auto_correct: bool,

    /// With --auto-correct, print corrected files instead of writing them
    #[arg(long, requires = "auto_correct")]
    pub dry_run: bool,

    /// Do not run the external YAML linter
    #[arg(long)]
    pub skip_lint: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,

    /// Fail auto-corrected files that still have errors
    #[arg(long)]
    pub strict: bool,

    /// Disable colored output (NO_COLOR is honored as well)
    #[arg(long)]
    pub no_color: bool,

    /// List the validation rules and exit
    #[arg(long)]
    pub list_rules: bool,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Gitlab,
    Stylish,
    Github,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Gitlab => OutputFormat::GitLab,
            Format::Stylish => OutputFormat::Stylish,
            Format::Github => OutputFormat::GitHub,
            Format::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}
