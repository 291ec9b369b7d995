use super::fonts::{BuiltinFont, SpanFont};
use super::units::{pagesize, Mm, Pt};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// PDF output configuration.
///
/// Only the output location can be changed; the page layout is fixed (see [`Geometry`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PDF {
    /// Output PDF file path, relative to the working directory
    pub outfile: PathBuf,
}

impl Default for PDF {
    fn default() -> Self {
        PDF {
            outfile: PathBuf::from("Frontend_Code_Export.pdf"),
        }
    }
}

/// Fixed page layout: A4 with 20 mm margins all round and a 10 pt line pitch.
#[derive(Debug, Clone, Copy)]
pub struct Geometry {
    pub page_size: (Pt, Pt),
    pub margin: Pt,
    pub line_pitch: Pt,
}

impl Default for Geometry {
    fn default() -> Self {
        Geometry {
            page_size: pagesize::a4(),
            margin: Mm(20.0).into(),
            line_pitch: Pt(10.0),
        }
    }
}

impl Geometry {
    /// Baseline of the first line on a page
    pub fn top(&self) -> Pt {
        self.page_size.1 - self.margin
    }
}

pub const FONT_TITLE: SpanFont = SpanFont::new(BuiltinFont::HelveticaBold, Pt(16.0));
pub const FONT_HEADING: SpanFont = SpanFont::new(BuiltinFont::HelveticaBold, Pt(12.0));
pub const FONT_LISTING: SpanFont = SpanFont::new(BuiltinFont::Courier, Pt(8.0));

/// Statistics from rendering a PDF, used for user feedback.
pub struct RenderStats {
    /// Number of pages in the PDF
    pub page_count: usize,
    /// Number of files exported
    pub file_count: usize,
    /// Size of the written PDF
    pub bytes_written: usize,
}
