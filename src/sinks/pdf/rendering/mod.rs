//! PDF rendering orchestration.
//!
//! The document has two regions: the title block with an index of every exported
//! file, then (starting on a fresh page) one section per file. Both regions walk the
//! files in the same sorted order.
//!
//! All drawing goes through [`Flow`], which owns the vertical cursor. The cursor starts
//! one margin below the top of the page and moves down one line pitch per line; before
//! a line would be drawn below the bottom margin, a new page is started.
//!
//! The render function accepts a progress bar from the caller, updating it with the
//! current file name and incrementing after each file is laid out.

mod source_file;
mod text;
mod title_page;

use crate::sinks::pdf::canvas::{Canvas, Info};
use crate::sinks::pdf::config::{Geometry, RenderStats, PDF};
use crate::sinks::pdf::fonts::SpanFont;
use crate::sinks::pdf::units::Pt;
use crate::source::CodeFiles;
use anyhow::{Context, Result};
use indicatif::ProgressBar;
use log::debug;
use std::io::Write;

pub const DOCUMENT_TITLE: &str = "Project Code Export";

/// A canvas plus the cursor position on its current page.
pub struct Flow {
    canvas: Canvas,
    geometry: Geometry,
    y: Pt,
}

impl Flow {
    pub fn new(geometry: Geometry) -> Flow {
        Flow {
            canvas: Canvas::new(geometry.page_size),
            geometry,
            y: geometry.top(),
        }
    }

    pub fn set_font(&mut self, font: SpanFont) {
        self.canvas.set_font(font);
    }

    /// Draw a line of text at the left margin, at the current cursor position.
    pub fn draw<S: Into<String>>(&mut self, text: S) {
        self.canvas.draw_string(self.geometry.margin, self.y, text);
    }

    /// Move the cursor down by `lines` line pitches.
    pub fn advance(&mut self, lines: f32) {
        self.y = self.y - self.geometry.line_pitch * lines;
    }

    /// Start a new page and put the cursor back at the top.
    pub fn new_page(&mut self) {
        self.canvas.show_page();
        self.y = self.geometry.top();
    }

    /// If the cursor has run past the bottom margin, continue on a new page using `font`.
    pub fn break_if_full(&mut self, font: SpanFont) {
        if self.y < self.geometry.margin {
            self.new_page();
            self.canvas.set_font(font);
        }
    }

    /// Start a new page unless at least `lines` line pitches remain above the bottom margin.
    pub fn reserve(&mut self, lines: f32) {
        if self.y < self.geometry.margin + self.geometry.line_pitch * lines {
            self.new_page();
        }
    }

    /// Whether the cursor is still above the bottom margin.
    pub fn has_room(&self) -> bool {
        self.y > self.geometry.margin
    }

    pub fn into_canvas(self) -> Canvas {
        self.canvas
    }
}

impl PDF {
    /// Lay out and write the whole export to [`PDF::outfile`].
    pub fn render(&self, files: &CodeFiles, progress: &ProgressBar) -> Result<RenderStats> {
        let canvas = self.layout(files, progress);
        let page_count = canvas.page_count();
        debug!("Laid out {} files on {page_count} pages", files.len());

        let file = std::fs::File::create(&self.outfile).with_context(|| {
            format!("Failed to create output file {}", self.outfile.display())
        })?;
        let mut file = std::io::BufWriter::new(file);
        let bytes_written = canvas
            .write(&mut file)
            .with_context(|| "Failed to render PDF")?;
        file.flush()
            .with_context(|| format!("Failed to write {}", self.outfile.display()))?;

        Ok(RenderStats {
            page_count,
            file_count: files.len(),
            bytes_written,
        })
    }

    /// Lay out every page of the export without writing anything.
    pub fn layout(&self, files: &CodeFiles, progress: &ProgressBar) -> Canvas {
        let mut flow = Flow::new(Geometry::default());

        let mut info = Info::default();
        info.title(DOCUMENT_TITLE)
            .creator(concat!("code-export v", env!("CARGO_PKG_VERSION")))
            .created(chrono::Local::now().naive_local());
        flow.canvas.set_info(info);

        title_page::render(&mut flow, files);

        // the file contents always start on their own page
        flow.new_page();

        for (path, contents) in files.iter_sorted() {
            let display_path = files.display_path(path);
            progress.set_message(display_path.clone());
            announce(progress, &mut std::io::stdout(), &display_path);

            source_file::render(&mut flow, &display_path, contents);
            progress.inc(1);
        }

        flow.into_canvas()
    }
}

/// Print the per-file notice above the progress bar. A hidden bar drops its own
/// `println`s, so the notice goes straight to `out` while the bar is paused.
fn announce<W: Write>(progress: &ProgressBar, out: &mut W, display_path: &str) {
    progress.suspend(|| {
        if let Err(e) = writeln!(out, "Adding: {display_path}") {
            debug!("Failed to print progress notice: {e}");
        }
    });
}
