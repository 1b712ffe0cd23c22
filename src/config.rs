//! Command-line arguments and the run configuration derived from them.

use crate::license::LicenseSource;
use crate::model::ParseMode;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mdtogo",
    about = "Generate Go help-text variables from a directory of markdown command docs"
)]
pub struct Cli {
    /// Directory containing the *.md command docs
    pub source_dir: PathBuf,

    /// Directory to write docs.go into; its base name is the Go package name
    pub dest_dir: PathBuf,

    /// Put every section of each doc into the Long variable
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub full: bool,

    /// License header file, or "none" to omit the header
    #[arg(long, value_name = "PATH|none")]
    pub license: Option<String>,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Everything a run needs, built once from [`Cli`].
#[derive(Debug, Clone)]
pub struct Config {
    pub source_dir: PathBuf,
    pub dest_dir: PathBuf,
    pub mode: ParseMode,
    pub license: LicenseSource,
    pub verbose: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            mode: ParseMode::from_full_flag(cli.full),
            license: LicenseSource::from_arg(cli.license.as_deref()),
            source_dir: cli.source_dir,
            dest_dir: cli.dest_dir,
            verbose: cli.verbose,
        }
    }
}
