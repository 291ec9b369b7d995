/// Maximum characters of a numbered line, not counting the number prefix
pub const NUMBERED_LINE_CHARS: usize = 280;
/// Maximum characters of an unnumbered line
pub const PLAIN_LINE_CHARS: usize = 300;

/// Turn one stored line into the exact text drawn on the page.
///
/// The line ending is dropped and the text is squeezed into Latin-1. Numbered lines get
/// a right-aligned three digit prefix. Anything past the width limit is cut off; lines
/// are never wrapped.
pub fn format_line(line_number: usize, line: &str, numbered: bool) -> String {
    let line = to_latin1(line.trim_end_matches(['\n', '\r']));
    if numbered {
        format!(
            "{line_number:>3}: {}",
            truncate_chars(&line, NUMBERED_LINE_CHARS)
        )
    } else {
        truncate_chars(&line, PLAIN_LINE_CHARS).to_string()
    }
}

/// Replace every character outside Latin-1 with `?`.
pub fn to_latin1(text: &str) -> String {
    text.chars()
        .map(|c| if u32::from(c) <= 0xFF { c } else { '?' })
        .collect()
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
