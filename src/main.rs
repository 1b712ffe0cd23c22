//! mdtogo — generate Go help-text variables from markdown command docs.
//!
//! Usage: `mdtogo SOURCE_MD_DIR/ DEST_GO_DIR/ [--full=true] [--license=license.txt|none]`
//!
//! Every `*.md` file in SOURCE_MD_DIR becomes `<Name>Short`, `<Name>Long` and
//! `<Name>Examples` variables in DEST_GO_DIR/docs.go.

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use mdtogo::{Cli, Config};

fn main() -> Result<()> {
    let config = Config::from(Cli::parse());

    let env = if config.verbose {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("warn")
    };
    env_logger::Builder::from_env(env).init();

    mdtogo::generate(&config).with_context(|| {
        format!(
            "failed to generate docs.go from {}",
            config.source_dir.display()
        )
    })?;
    Ok(())
}
