use crate::PDFError;
use std::collections::HashMap;

/// Per-character advance widths of a font, expressed in font units of 1/1000 em.
///
/// Metrics are used to measure text without laying it out. They are built once
/// from an embedded [`Font`](crate::Font) (see [`Font::metrics`](crate::Font::metrics))
/// or assembled by hand, and never change afterwards.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FontMetrics {
    widths: HashMap<char, u16>,
}

impl FontMetrics {
    pub fn new(widths: HashMap<char, u16>) -> FontMetrics {
        FontMetrics { widths }
    }

    /// Metrics where every character in `chars` has the same width, mostly
    /// useful for monospaced fonts and for testing
    pub fn uniform<I: IntoIterator<Item = char>>(chars: I, width: u16) -> FontMetrics {
        chars.into_iter().map(|ch| (ch, width)).collect()
    }

    /// The width of `ch` in 1/1000 em, if the font defines it
    pub fn width(&self, ch: char) -> Option<u16> {
        self.widths.get(&ch).copied()
    }

    /// Like [`FontMetrics::width`], but treats a missing character as an error
    pub fn require(&self, ch: char) -> Result<u16, PDFError> {
        self.width(ch).ok_or(PDFError::UndefinedCharacterWidth { ch })
    }

    /// The widest character, if any
    pub fn max_width(&self) -> Option<u16> {
        self.widths.values().copied().max()
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

impl FromIterator<(char, u16)> for FontMetrics {
    fn from_iter<T: IntoIterator<Item = (char, u16)>>(iter: T) -> Self {
        FontMetrics {
            widths: iter.into_iter().collect(),
        }
    }
}

impl Extend<(char, u16)> for FontMetrics {
    fn extend<T: IntoIterator<Item = (char, u16)>>(&mut self, iter: T) {
        self.widths.extend(iter);
    }
}
