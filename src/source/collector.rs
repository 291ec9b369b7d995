//! Walks a project directory and loads every file worth exporting.
//!
//! Excluded directories are pruned while walking so large dependency trees are never
//! read. Files are then checked again against the directory exclusions using their
//! full path, which keeps excluded subtrees out even if the walk reaches them some
//! other way (a symlinked root, for instance).

use super::extensions;
use super::{CodeFiles, FileContents, NameFilter};
use anyhow::{anyhow, Context, Result};
use ignore::WalkBuilder;
use log::{debug, info, warn};
use std::path::Path;

/// Collect the contents of every eligible file below `root`.
///
/// Individual files that can't be read are kept with an error placeholder rather than
/// failing the whole scan. The only fatal error is `root` itself being unusable.
pub fn collect(
    root: &Path,
    excluded_files: &NameFilter,
    excluded_dirs: &NameFilter,
) -> Result<CodeFiles> {
    // make sure the root is a directory we can actually list
    if !root.is_dir() {
        return Err(anyhow!("Scan root {} isn't a directory!", root.display()));
    }
    std::fs::read_dir(root)
        .with_context(|| format!("Failed to read scan root {}", root.display()))?;

    let mut walker = WalkBuilder::new(root);
    walker.standard_filters(false).follow_links(false);
    {
        let excluded_dirs = excluded_dirs.clone();
        walker.filter_entry(move |entry| {
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            if entry.depth() > 0 && is_dir && excluded_dirs.matches(entry.file_name()) {
                debug!("Pruning excluded directory {}", entry.path().display());
                return false;
            }
            true
        });
    }

    let mut files = CodeFiles::new(root);
    for entry in walker.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Failed to walk part of {}: {e}", root.display());
                continue;
            }
        };

        // symlinks to files count as files, symlinked directories are never entered
        if !entry.path().is_file() {
            continue;
        }
        let path = entry.into_path();

        if path.parent().is_some_and(|dir| excluded_dirs.matches_any_segment(dir)) {
            debug!("Skipping {} inside an excluded directory", path.display());
            continue;
        }
        if path
            .file_name()
            .is_some_and(|name| excluded_files.matches(name))
        {
            debug!("Skipping excluded file {}", path.display());
            continue;
        }

        let contents = load(&path);
        files.insert(path, contents);
    }

    Ok(files)
}

/// Load a single file, never failing.
pub fn load(path: &Path) -> FileContents {
    if !extensions::is_text_like(path) {
        info!("Treating {} as binary", path.display());
        return FileContents::binary(extensions::extension_label(path));
    }

    match std::fs::read(path) {
        Ok(bytes) => FileContents::from_text(&String::from_utf8_lossy(&bytes)),
        Err(e) => {
            warn!("Error reading {}: {e}", path.display());
            FileContents::unreadable(e)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn default_filters() -> (NameFilter, NameFilter) {
        let files = NameFilter::new(["package.json", "package-lock.json"]).expect("valid names");
        let dirs = NameFilter::new(["node_modules", ".git", "build", "*.log"]).expect("valid names");
        (files, dirs)
    }

    fn relative_keys(files: &CodeFiles) -> Vec<String> {
        files
            .sorted_paths()
            .into_iter()
            .map(|p| files.display_path(p))
            .collect()
    }

    #[test]
    fn collects_scenario_tree() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        let root = dir.path();
        fs::write(root.join("a.js"), "const a = 1;\nconsole.log(a);\n").unwrap();
        fs::write(root.join("b.png"), [0x89, b'P', b'N', b'G']).unwrap();
        fs::create_dir(root.join("node_modules")).unwrap();
        fs::write(root.join("node_modules/c.js"), "module.exports = {};\n").unwrap();
        fs::write(root.join("package.json"), "{}").unwrap();

        let (excluded_files, excluded_dirs) = default_filters();
        let files = collect(root, &excluded_files, &excluded_dirs).expect("can collect");

        assert_eq!(relative_keys(&files), vec!["a.js", "b.png"]);
        assert_eq!(
            files.get(&root.join("a.js")).map(FileContents::lines),
            Some(&["const a = 1;\n".to_string(), "console.log(a);\n".to_string()][..])
        );
        assert_eq!(
            files.get(&root.join("b.png")),
            Some(&FileContents::binary(".png"))
        );
    }

    #[test]
    fn prunes_nested_excluded_directories() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        let root = dir.path();
        fs::create_dir_all(root.join("src/build/deep")).unwrap();
        fs::create_dir_all(root.join("src/.git")).unwrap();
        fs::create_dir_all(root.join("server.log")).unwrap();
        fs::create_dir_all(root.join("builds")).unwrap();
        fs::write(root.join("src/build/deep/out.js"), "x\n").unwrap();
        fs::write(root.join("src/.git/config"), "[core]\n").unwrap();
        fs::write(root.join("server.log/today.txt"), "started\n").unwrap();
        fs::write(root.join("builds/keep.js"), "y\n").unwrap();
        fs::write(root.join("src/index.js"), "z\n").unwrap();

        let (excluded_files, excluded_dirs) = default_filters();
        let files = collect(root, &excluded_files, &excluded_dirs).expect("can collect");

        assert_eq!(relative_keys(&files), vec!["builds/keep.js", "src/index.js"]);
        for path in files.sorted_paths() {
            let relative = path.strip_prefix(root).unwrap();
            assert!(!excluded_dirs.matches_any_segment(relative));
        }
    }

    #[test]
    fn excludes_files_by_base_name_anywhere() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        let root = dir.path();
        fs::create_dir_all(root.join("packages/ui")).unwrap();
        fs::write(root.join("packages/ui/package.json"), "{}").unwrap();
        fs::write(root.join("packages/ui/package.json.bak"), "{}").unwrap();

        let (excluded_files, excluded_dirs) = default_filters();
        let files = collect(root, &excluded_files, &excluded_dirs).expect("can collect");

        assert_eq!(relative_keys(&files), vec!["packages/ui/package.json.bak"]);
    }

    #[test]
    fn decodes_invalid_utf8_permissively() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        let path = dir.path().join("notes.txt");
        fs::write(&path, b"caf\xe9\nok\n").unwrap();

        let contents = load(&path);
        assert_eq!(
            contents.lines(),
            &["caf\u{FFFD}\n".to_string(), "ok\n".to_string()]
        );
    }

    #[test]
    fn loads_old_mac_line_endings_as_separate_lines() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        let path = dir.path().join("old.js");
        fs::write(&path, b"one\rtwo\rthree\r").unwrap();

        let contents = load(&path);
        assert_eq!(contents.lines().len(), 3);
        assert_eq!(contents.lines()[1], "two\r");
    }

    #[test]
    fn binary_files_are_never_opened() {
        // a path that doesn't exist would fail to open, so a placeholder proves it wasn't read
        let contents = load(&PathBuf::from("/definitely/not/here/logo.png"));
        assert_eq!(contents, FileContents::binary(".png"));
        assert_eq!(contents.lines().len(), 1);
    }

    #[test]
    fn unreadable_text_files_become_placeholders() {
        let contents = load(&PathBuf::from("/definitely/not/here/app.js"));
        match contents {
            FileContents::Unreadable { placeholder } => {
                assert!(placeholder.starts_with("[Error reading file: "))
            }
            other => panic!("expected an unreadable placeholder, got {other:?}"),
        }
    }

    #[test]
    fn missing_root_is_fatal() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        let (excluded_files, excluded_dirs) = default_filters();
        assert!(collect(&dir.path().join("missing"), &excluded_files, &excluded_dirs).is_err());
    }

    #[test]
    fn empty_root_collects_nothing() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        let (excluded_files, excluded_dirs) = default_filters();
        let files = collect(dir.path(), &excluded_files, &excluded_dirs).expect("can collect");
        assert!(files.is_empty());
    }
}
