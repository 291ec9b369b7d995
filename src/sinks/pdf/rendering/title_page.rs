//! Title block and file index.

use super::{Flow, DOCUMENT_TITLE};
use crate::sinks::pdf::config::{FONT_HEADING, FONT_LISTING, FONT_TITLE};
use crate::source::CodeFiles;

pub const FILE_LIST_LABEL: &str = "File List:";

/// Draw the title, then list every file (sorted, relative to the scan root), continuing
/// onto as many pages as the list needs.
pub fn render(flow: &mut Flow, files: &CodeFiles) {
    flow.set_font(FONT_TITLE);
    flow.draw(DOCUMENT_TITLE);
    flow.advance(2.0);

    flow.set_font(FONT_HEADING);
    flow.draw(FILE_LIST_LABEL);
    flow.advance(2.0);

    flow.set_font(FONT_LISTING);
    for path in files.sorted_paths() {
        flow.break_if_full(FONT_LISTING);
        flow.draw(format!("- {}", files.display_path(path)));
        flow.advance(1.0);
    }
}
