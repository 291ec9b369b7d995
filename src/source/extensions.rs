//! Extension tables used to classify and render collected files.
//!
//! There are two separate lists. [`TEXT_EXTENSIONS`] decides whether a file is
//! read as text at all, while the narrower [`NUMBERED_EXTENSIONS`] decides which
//! text files get line numbers in the rendered output. Markdown and YAML, for
//! example, are read as text but printed without numbers.

use std::path::Path;

/// Extensions (lowercase, without the dot) whose files are decoded as text.
pub const TEXT_EXTENSIONS: &[&str] = &[
    "js",
    "jsx",
    "ts",
    "tsx",
    "css",
    "scss",
    "sass",
    "less",
    "html",
    "htm",
    "json",
    "md",
    "txt",
    "xml",
    "yaml",
    "yml",
    "config",
    "gitignore",
    "env",
    "py",
    "sh",
    "bat",
    "cmd",
    "svg",
    "dockerfile",
    "editorconfig",
    "eslintrc",
    "prettierrc",
];

/// Path suffixes whose lines are printed with a line number prefix.
pub const NUMBERED_EXTENSIONS: &[&str] =
    &[".js", ".jsx", ".ts", ".tsx", ".css", ".py", ".html", ".json"];

/// Whether the file at `path` should be decoded as text, judged purely on its extension.
///
/// Dotfiles like `.gitignore` have no extension as far as [`Path::extension`] is concerned,
/// so they are treated as binary.
pub fn is_text_like(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .is_some_and(|ext| TEXT_EXTENSIONS.contains(&ext.as_str()))
}

/// Whether a displayed path gets numbered lines. The suffix test is case sensitive.
pub fn is_numbered(display_path: &str) -> bool {
    NUMBERED_EXTENSIONS
        .iter()
        .any(|ext| display_path.ends_with(ext))
}

/// The extension of `path` including its leading dot, or an empty string if it has none.
pub fn extension_label(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}
