//! License header selection for the generated file.

use crate::error::{Error, Result};
use std::fs;
use std::path::PathBuf;

/// Header used when no `--license` is given.
pub const DEFAULT_LICENSE: &str = "// Copyright 2019 The Kubernetes Authors.
// SPDX-License-Identifier: Apache-2.0";

/// `--license` value that suppresses the header.
pub const NO_LICENSE: &str = "none";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LicenseSource {
    Default,
    None,
    File(PathBuf),
}

impl LicenseSource {
    /// An empty value (`--license=`) selects the default header.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("") => LicenseSource::Default,
            Some(NO_LICENSE) => LicenseSource::None,
            Some(path) => LicenseSource::File(PathBuf::from(path)),
        }
    }

    /// Produce the header text, reading the license file if one was given.
    pub fn resolve(&self) -> Result<String> {
        match self {
            LicenseSource::Default => Ok(DEFAULT_LICENSE.to_string()),
            LicenseSource::None => Ok(String::new()),
            LicenseSource::File(path) => {
                log::debug!("reading license header from {}", path.display());
                fs::read_to_string(path).map_err(|source| Error::ReadLicense {
                    path: path.clone(),
                    source,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_header() {
        let source = LicenseSource::from_arg(None);
        assert_eq!(source, LicenseSource::Default);
        assert!(source.resolve().unwrap().starts_with("// Copyright"));
    }

    #[test]
    fn empty_value_uses_default() {
        assert_eq!(LicenseSource::from_arg(Some("")), LicenseSource::Default);
    }

    #[test]
    fn none_suppresses_header() {
        let source = LicenseSource::from_arg(Some("none"));
        assert_eq!(source.resolve().unwrap(), "");
    }

    #[test]
    fn header_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"// Copyright 2024 Example Inc.\n").unwrap();
        let source = LicenseSource::from_arg(file.path().to_str());
        assert_eq!(source.resolve().unwrap(), "// Copyright 2024 Example Inc.\n");
    }

    #[test]
    fn missing_file_is_error() {
        let source = LicenseSource::from_arg(Some("/nonexistent/license.txt"));
        assert!(matches!(source.resolve(), Err(Error::ReadLicense { .. })));
    }
}
