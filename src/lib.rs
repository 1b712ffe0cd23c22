//! mdtogo: turn a directory of markdown command docs into Go string
//! variables for cobra help text.
//!
//! Pipeline: [`loader::load_dir`] → [`parser::parse`] per file →
//! [`license::LicenseSource::resolve`] → [`render::render`] →
//! [`render::write_output`].

pub mod config;
pub mod error;
pub mod license;
pub mod loader;
pub mod model;
pub mod parser;
pub mod render;

pub use config::{Cli, Config};
pub use error::{Error, Result};
pub use model::{Document, ParseMode};

use std::collections::HashMap;
use std::path::PathBuf;

/// Run the whole generation and return the path of the written file.
pub fn generate(config: &Config) -> Result<PathBuf> {
    let files = loader::load_dir(&config.source_dir)?;
    log::debug!(
        "found {} markdown files in {}",
        files.len(),
        config.source_dir.display()
    );

    let mut seen: HashMap<String, String> = HashMap::new();
    let mut docs = Vec::with_capacity(files.len());
    for file in &files {
        let doc = parser::parse(&file.file_name, &file.content, config.mode);
        log::debug!(
            "{} -> {} (short: {}, long: {} lines, examples: {} lines)",
            file.file_name,
            doc.name,
            !doc.short.is_empty(),
            line_count(&doc.long),
            line_count(&doc.examples)
        );
        if let Some(previous) = seen.insert(doc.name.clone(), file.file_name.clone()) {
            log::warn!(
                "{} and {} both generate variables named {}*",
                previous,
                file.file_name,
                doc.name
            );
        }
        docs.push(doc);
    }

    let header = config.license.resolve()?;
    let package = render::package_name(&config.dest_dir)?;
    let output = render::render(&header, &package, &docs);
    let path = render::write_output(&config.dest_dir, &output)?;
    log::info!("wrote {} ({} documents)", path.display(), docs.len());
    Ok(path)
}

fn line_count(text: &str) -> usize {
    if text.is_empty() {
        0
    } else {
        text.lines().count()
    }
}
