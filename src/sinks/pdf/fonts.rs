use super::units::Pt;

/// The standard PDF fonts used by the export.
///
/// These are part of the base-14 set every PDF reader ships with, so nothing gets
/// embedded. They only cover the WinAnsi character set; text outside it is replaced
/// before it reaches the page.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum BuiltinFont {
    HelveticaBold,
    Courier,
}

impl BuiltinFont {
    /// The PostScript name written into the font dictionary
    pub fn base_font(&self) -> &'static str {
        match self {
            BuiltinFont::HelveticaBold => "Helvetica-Bold",
            BuiltinFont::Courier => "Courier",
        }
    }

    /// The name pages use to refer to this font in their resources
    pub fn resource_name(&self) -> &'static [u8] {
        match self {
            BuiltinFont::HelveticaBold => b"F1",
            BuiltinFont::Courier => b"F2",
        }
    }

    pub fn all() -> &'static [BuiltinFont] {
        &[BuiltinFont::HelveticaBold, BuiltinFont::Courier]
    }
}

/// A font at a particular size.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub font: BuiltinFont,
    pub size: Pt,
}

impl SpanFont {
    pub const fn new(font: BuiltinFont, size: Pt) -> SpanFont {
        SpanFont { font, size }
    }
}

/// The font a fresh page starts with: the plain listing font.
impl Default for SpanFont {
    fn default() -> Self {
        SpanFont::new(BuiltinFont::Courier, Pt(8.0))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_font_is_one_that_gets_registered() {
        assert!(BuiltinFont::all().contains(&SpanFont::default().font));
    }

    #[test]
    fn resource_names_are_unique() {
        let fonts = BuiltinFont::all();
        for (i, a) in fonts.iter().enumerate() {
            for b in &fonts[i + 1..] {
                assert_ne!(a.resource_name(), b.resource_name());
            }
        }
    }
}
