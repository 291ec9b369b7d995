use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// What was loaded for a single collected file.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum FileContents {
    /// The file was decoded as text. Each line keeps its trailing newline, if it had one
    Text(Vec<String>),

    /// The file's extension isn't text-like, so it was never opened
    Binary { placeholder: String },

    /// Reading the file failed; the error is kept so it still shows up in the export
    Unreadable { placeholder: String },
}

impl FileContents {
    pub fn binary<S: AsRef<str>>(extension: S) -> FileContents {
        FileContents::Binary {
            placeholder: format!("[Binary file - {} format]", extension.as_ref()),
        }
    }

    pub fn unreadable<E: std::fmt::Display>(error: E) -> FileContents {
        FileContents::Unreadable {
            placeholder: format!("[Error reading file: {error}]"),
        }
    }

    /// Split decoded text into lines, keeping the line endings attached.
    ///
    /// `\n`, `\r\n` and a lone `\r` all end a line.
    pub fn from_text(text: &str) -> FileContents {
        let mut lines = Vec::default();
        let mut rest = text;
        while let Some(end) = rest.find(['\n', '\r']) {
            let end = if rest[end..].starts_with("\r\n") {
                end + 2
            } else {
                end + 1
            };
            lines.push(rest[..end].to_string());
            rest = &rest[end..];
        }
        if !rest.is_empty() {
            lines.push(rest.to_string());
        }
        FileContents::Text(lines)
    }

    /// The lines to print for this file. Binary and unreadable files have a single
    /// placeholder line.
    pub fn lines(&self) -> &[String] {
        match self {
            FileContents::Text(lines) => lines.as_slice(),
            FileContents::Binary { placeholder } | FileContents::Unreadable { placeholder } => {
                std::slice::from_ref(placeholder)
            }
        }
    }
}

/// Every file picked up by a scan, keyed by its path on disk.
#[derive(Debug, Clone)]
pub struct CodeFiles {
    root: PathBuf,
    files: BTreeMap<PathBuf, FileContents>,
}

impl CodeFiles {
    pub fn new<P: Into<PathBuf>>(root: P) -> CodeFiles {
        CodeFiles {
            root: root.into(),
            files: BTreeMap::default(),
        }
    }

    /// The directory the scan started from; paths are displayed relative to it.
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    pub fn insert<P: Into<PathBuf>>(&mut self, path: P, contents: FileContents) -> &mut Self {
        self.files.insert(path.into(), contents);
        self
    }

    pub fn get(&self, path: &Path) -> Option<&FileContents> {
        self.files.get(path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// All collected paths, sorted lexicographically by their string form.
    ///
    /// This differs from [`PathBuf`]'s own component-wise ordering: `a-b/x` sorts before
    /// `a/x` here because `-` comes before `/`.
    pub fn sorted_paths(&self) -> Vec<&Path> {
        let mut paths: Vec<&Path> = self.files.keys().map(PathBuf::as_path).collect();
        paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
        paths
    }

    /// The files in display order, paired with their contents.
    pub fn iter_sorted(&self) -> impl Iterator<Item = (&Path, &FileContents)> {
        self.sorted_paths()
            .into_iter()
            .filter_map(move |path| self.get(path).map(|contents| (path, contents)))
    }

    /// The path as it is shown to readers: relative to the scan root when possible.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(self.root())
            .unwrap_or(path)
            .display()
            .to_string()
    }
}
