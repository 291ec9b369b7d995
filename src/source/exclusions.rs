use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::Path;

/// A set of file or directory names to leave out of a scan.
///
/// Names are matched exactly against a single path segment. Entries containing glob
/// metacharacters (`*`, `?`, `[` or `{`) are compiled into a [`GlobSet`] and matched
/// against the segment instead, so `*.log` catches `debug.log` but `build` never
/// catches `builds`.
#[derive(Debug, Clone)]
pub struct NameFilter {
    exact: BTreeSet<String>,
    globs: GlobSet,
}

impl NameFilter {
    pub fn new<I, S>(names: I) -> Result<NameFilter>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut exact = BTreeSet::default();
        let mut builder = GlobSetBuilder::new();
        for name in names {
            let name = name.as_ref();
            if is_pattern(name) {
                let glob = Glob::new(name)
                    .with_context(|| format!("Invalid exclusion pattern `{name}`"))?;
                builder.add(glob);
            } else {
                exact.insert(name.to_string());
            }
        }
        let globs = builder
            .build()
            .with_context(|| "Failed to compile exclusion patterns")?;

        Ok(NameFilter { exact, globs })
    }

    /// Whether a single path segment (a file or directory name) is excluded.
    pub fn matches(&self, name: &OsStr) -> bool {
        let Some(name) = name.to_str() else {
            // non-UTF-8 names can't equal any configured name, but a pattern may still match
            return self.globs.is_match(Path::new(name));
        };
        self.exact.contains(name) || self.globs.is_match(name)
    }

    /// Whether any directory segment of `path` is excluded.
    pub fn matches_any_segment(&self, path: &Path) -> bool {
        path.iter().any(|segment| self.matches(segment))
    }
}

fn is_pattern(name: &str) -> bool {
    name.contains(['*', '?', '[', '{'])
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn matches_exact_names_only() {
        let filter = NameFilter::new(["build", "node_modules"]).expect("can build filter");
        assert!(filter.matches(OsStr::new("build")));
        assert!(filter.matches(OsStr::new("node_modules")));
        assert!(!filter.matches(OsStr::new("builds")));
        assert!(!filter.matches(OsStr::new("Build")));
    }

    #[test]
    fn matches_glob_entries() {
        let filter = NameFilter::new(["*.log", "logs"]).expect("can build filter");
        assert!(filter.matches(OsStr::new("debug.log")));
        assert!(filter.matches(OsStr::new("logs")));
        assert!(!filter.matches(OsStr::new("logger.js")));
    }

    #[test]
    fn matches_path_segments() {
        let filter = NameFilter::new(["node_modules"]).expect("can build filter");
        assert!(filter.matches_any_segment(Path::new("web/node_modules/react")));
        assert!(!filter.matches_any_segment(Path::new("web/my_node_modules/react")));
    }

    #[test]
    fn empty_filter_matches_nothing() {
        let filter = NameFilter::new(Vec::<String>::new()).expect("can build filter");
        assert!(!filter.matches(OsStr::new("anything")));
    }
}
