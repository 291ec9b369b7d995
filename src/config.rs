//! Run configuration: the two exclusion sets and the PDF output.
//!
//! The configuration is fixed and built once at startup.

use crate::sinks::PDF;
use crate::source::NameFilter;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

const DEFAULT_EXCLUDED_FILES: &[&str] = &[
    "package.json",
    "package-lock.json",
    "yarn.lock",
    "README.md",
    ".DS_Store",
    "Thumbs.db",
    "Desktop.ini",
];

const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "__pycache__",
    "build",
    "dist",
    ".next",
    "coverage",
    ".nyc_output",
    "logs",
    "*.log",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Configuration {
    /// File names that are never exported
    pub excluded_files: BTreeSet<String>,
    /// Directory names whose whole subtree is skipped
    pub excluded_dirs: BTreeSet<String>,
    pub pdf: PDF,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            excluded_files: DEFAULT_EXCLUDED_FILES
                .iter()
                .map(ToString::to_string)
                .collect(),
            excluded_dirs: DEFAULT_EXCLUDED_DIRS
                .iter()
                .map(ToString::to_string)
                .collect(),
            pdf: PDF::default(),
        }
    }
}

impl Configuration {
    pub fn file_filter(&self) -> Result<NameFilter> {
        NameFilter::new(&self.excluded_files).with_context(|| "Invalid file exclusions")
    }

    pub fn dir_filter(&self) -> Result<NameFilter> {
        NameFilter::new(&self.excluded_dirs).with_context(|| "Invalid directory exclusions")
    }
}

/// The directory the running executable lives in; this is what gets exported.
pub fn scan_root() -> Result<PathBuf> {
    let exe = std::env::current_exe()
        .with_context(|| "Failed to locate the running executable")?;
    exe.parent()
        .map(|dir| dir.to_path_buf())
        .ok_or_else(|| anyhow!("Executable {} has no parent directory", exe.display()))
}

#[cfg(test)]
mod test {
    use super::*;
    use std::ffi::OsStr;
    use std::path::Path;

    #[test]
    fn defaults_cover_common_noise() {
        let config = Configuration::default();
        assert!(config.excluded_files.contains("package.json"));
        assert!(config.excluded_files.contains("README.md"));
        assert!(config.excluded_dirs.contains("node_modules"));
        assert!(config.excluded_dirs.contains(".git"));
        assert_eq!(config.pdf.outfile, PathBuf::from("Frontend_Code_Export.pdf"));
    }

    #[test]
    fn builds_filters() {
        let config = Configuration::default();
        let dirs = config.dir_filter().expect("defaults are valid");
        assert!(dirs.matches(OsStr::new("__pycache__")));
        assert!(dirs.matches(OsStr::new("server.log")));
        assert!(dirs.matches_any_segment(Path::new("web/.next/cache")));

        let files = config.file_filter().expect("defaults are valid");
        assert!(files.matches(OsStr::new("yarn.lock")));
        assert!(!files.matches(OsStr::new("index.js")));
    }

    #[test]
    fn can_serialize_configuration() {
        let toml = toml::to_string(&Configuration::default()).expect("can serialize to TOML");
        let parsed: Configuration = toml::from_str(&toml).expect("can parse it back");
        assert_eq!(parsed.excluded_dirs, Configuration::default().excluded_dirs);
    }
}
