//! An in-memory page model and its PDF serialization.
//!
//! Drawing only records positioned text spans on [`Page`]s; nothing is encoded until
//! [`Canvas::write`] is called once at the end. Keeping the layout around as plain data
//! means the drawn text can be inspected without parsing a PDF back.

use super::fonts::{BuiltinFont, SpanFont};
use super::units::Pt;
use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDateTime, Timelike};
use pdf_writer::{Content, Date, Finish, Name, Pdf, Rect, Ref, Str, TextStr};
use std::io::Write;

/// A run of text drawn with a single font, starting at `coords` (the baseline origin).
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub coords: (Pt, Pt),
}

#[derive(Clone, Debug)]
pub struct Page {
    pub size: (Pt, Pt),
    pub spans: Vec<SpanLayout>,
}

impl Page {
    pub fn new(size: (Pt, Pt)) -> Page {
        Page {
            size,
            spans: Vec::default(),
        }
    }

    pub fn add_span(&mut self, span: SpanLayout) {
        self.spans.push(span);
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

/// Document properties shown by PDF readers.
#[derive(Clone, Debug, Default)]
pub struct Info {
    title: Option<String>,
    creator: Option<String>,
    created: Option<NaiveDateTime>,
}

impl Info {
    pub fn title<S: ToString>(&mut self, title: S) -> &mut Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn creator<S: ToString>(&mut self, creator: S) -> &mut Self {
        self.creator = Some(creator.to_string());
        self
    }

    pub fn created(&mut self, created: NaiveDateTime) -> &mut Self {
        self.created = Some(created);
        self
    }
}

/// A drawing surface that works like a pen on paper: pick a font, draw strings at
/// coordinates, and move on to a fresh page when the current one is full.
///
/// Starting a new page resets the font to the default, the same way a fresh sheet of
/// a PDF content stream has no graphics state carried over.
#[derive(Debug)]
pub struct Canvas {
    page_size: (Pt, Pt),
    pages: Vec<Page>,
    current: Page,
    font: SpanFont,
    info: Info,
}

impl Canvas {
    pub fn new(page_size: (Pt, Pt)) -> Canvas {
        Canvas {
            page_size,
            pages: Vec::default(),
            current: Page::new(page_size),
            font: SpanFont::default(),
            info: Info::default(),
        }
    }

    pub fn set_info(&mut self, info: Info) {
        self.info = info;
    }

    pub fn set_font(&mut self, font: SpanFont) {
        self.font = font;
    }

    pub fn draw_string<S: Into<String>>(&mut self, x: Pt, y: Pt, text: S) {
        self.current.add_span(SpanLayout {
            text: text.into(),
            font: self.font,
            coords: (x, y),
        });
    }

    /// Finish the current page and start a blank one.
    pub fn show_page(&mut self) {
        let page = std::mem::replace(&mut self.current, Page::new(self.page_size));
        self.pages.push(page);
        self.font = SpanFont::default();
    }

    /// Every page that will be written. A trailing page nothing was drawn on is left out.
    pub fn pages(&self) -> Vec<&Page> {
        let mut pages: Vec<&Page> = self.pages.iter().collect();
        if !self.current.is_empty() {
            pages.push(&self.current);
        }
        pages
    }

    pub fn page_count(&self) -> usize {
        self.pages().len()
    }

    /// Serialize the whole document, returning the number of bytes written.
    pub fn write<W: Write>(&self, out: &mut W) -> Result<usize> {
        let pages = self.pages();

        let mut alloc = Ref::new(1);
        let catalog_id = alloc.bump();
        let tree_id = alloc.bump();
        let info_id = alloc.bump();
        let font_ids: Vec<(BuiltinFont, Ref)> = BuiltinFont::all()
            .iter()
            .map(|font| (*font, alloc.bump()))
            .collect();
        let page_ids: Vec<(Ref, Ref)> = pages
            .iter()
            .map(|_| (alloc.bump(), alloc.bump()))
            .collect();

        let mut pdf = Pdf::new();
        pdf.catalog(catalog_id).pages(tree_id);
        pdf.pages(tree_id)
            .kids(page_ids.iter().map(|(page_id, _)| *page_id))
            .count(page_ids.len() as i32);

        for (font, id) in font_ids.iter() {
            pdf.type1_font(*id)
                .base_font(Name(font.base_font().as_bytes()))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        for (page, (page_id, content_id)) in pages.iter().zip(page_ids.iter()) {
            {
                let mut writer = pdf.page(*page_id);
                writer
                    .media_box(Rect::new(0.0, 0.0, *page.size.0, *page.size.1))
                    .parent(tree_id)
                    .contents(*content_id);
                let mut resources = writer.resources();
                let mut fonts = resources.fonts();
                for (font, id) in font_ids.iter() {
                    fonts.pair(Name(font.resource_name()), *id);
                }
                fonts.finish();
                resources.finish();
                writer.finish();
            }

            let mut content = Content::new();
            for span in page.spans.iter() {
                let text = win_ansi_bytes(&span.text);
                content
                    .begin_text()
                    .set_font(Name(span.font.font.resource_name()), *span.font.size)
                    .next_line(*span.coords.0, *span.coords.1)
                    .show(Str(&text))
                    .end_text();
            }
            pdf.stream(*content_id, &content.finish());
        }

        {
            let mut info = pdf.document_info(info_id);
            if let Some(title) = &self.info.title {
                info.title(TextStr(title));
            }
            if let Some(creator) = &self.info.creator {
                info.creator(TextStr(creator));
            }
            if let Some(created) = &self.info.created {
                info.creation_date(pdf_date(created));
            }
            info.finish();
        }

        let bytes = pdf.finish();
        out.write_all(&bytes)
            .with_context(|| "Failed to write PDF data")?;
        Ok(bytes.len())
    }
}

/// Encode text for a WinAnsi base font, one byte per character. Anything outside
/// Latin-1, and the C1 control range, becomes `?`.
pub fn win_ansi_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match u32::from(c) {
            // C1 controls: WinAnsi puts printable glyphs at these bytes
            0x80..=0x9F => b'?',
            code => u8::try_from(code).unwrap_or(b'?'),
        })
        .collect()
}

fn pdf_date(created: &NaiveDateTime) -> Date {
    Date::new(created.year().clamp(0, 9999) as u16)
        .month(created.month() as u8)
        .day(created.day() as u8)
        .hour(created.hour() as u8)
        .minute(created.minute() as u8)
        .second(created.second() as u8)
}
