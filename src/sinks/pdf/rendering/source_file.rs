//! One section of the export per file: a bold header, a rule, then the file's lines.
//!
//! Code files (see [`extensions::is_numbered`]) get line numbers, everything else is
//! printed as-is. Long lines are cut rather than wrapped, and a section header is always
//! kept together with at least its rule and first line.

use super::text;
use super::Flow;
use crate::sinks::pdf::config::{FONT_HEADING, FONT_LISTING};
use crate::source::{extensions, FileContents};

const RULE_WIDTH: usize = 80;

pub fn render(flow: &mut Flow, display_path: &str, contents: &FileContents) {
    // keep the header, its rule and the first line together
    flow.reserve(3.0);

    flow.set_font(FONT_HEADING);
    flow.draw(format!("File: {display_path}"));
    flow.advance(1.0);

    flow.set_font(FONT_LISTING);
    flow.draw("=".repeat(RULE_WIDTH));
    flow.advance(1.0);

    let numbered = extensions::is_numbered(display_path);
    for (i, line) in contents.lines().iter().enumerate() {
        let line = text::format_line(i + 1, line, numbered);
        flow.break_if_full(FONT_LISTING);
        flow.draw(line);
        flow.advance(1.0);
    }

    // the closing rule is dropped entirely when it doesn't fit
    flow.advance(1.0);
    if flow.has_room() {
        flow.set_font(FONT_LISTING);
        flow.draw("-".repeat(RULE_WIDTH));
        flow.advance(2.0);
    }
}
