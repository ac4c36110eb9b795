use crate::{
    metrics::FontMetrics,
    refs::{ObjectReferences, RefType},
    PDFError,
};
use id_arena::Id;
use encoding_rs::WINDOWS_1252;
use owned_ttf_parser::{AsFaceRef, OwnedFace};
use pdf_writer::{
    types::{CidFontType, FontFlags, SystemInfo},
    Filter, Finish, Name, Pdf, Ref, Str,
};
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// One of the standard fonts every PDF reader provides. These are referenced by name
/// and never embedded. Text is written in windows-1252 (`WinAnsiEncoding`), so they
/// cover printable ASCII plus the accented Latin letters and punctuation of that
/// code page
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BuiltinFont {
    Helvetica,
    Courier,
}

impl BuiltinFont {
    fn base_name(self) -> &'static [u8] {
        match self {
            BuiltinFont::Helvetica => b"Helvetica",
            BuiltinFont::Courier => b"Courier",
        }
    }

    fn metrics(self) -> FontMetrics {
        match self {
            BuiltinFont::Courier => {
                let high = (0x80..=0xff).filter_map(win_ansi_char);
                FontMetrics::uniform((' '..='~').chain(high), 600)
            }
            BuiltinFont::Helvetica => {
                let mut metrics: FontMetrics = (' '..='~').zip(HELVETICA_WIDTHS).collect();
                metrics.extend(
                    (0x80..=0xffu8)
                        .zip(HELVETICA_HIGH_WIDTHS)
                        .filter_map(|(byte, width)| win_ansi_char(byte).map(|ch| (ch, width))),
                );
                metrics
            }
        }
    }
}

/// The character a windows-1252 byte stands for, if the code page defines one
fn win_ansi_char(byte: u8) -> Option<char> {
    let bytes = [byte];
    let (text, _) = WINDOWS_1252.decode_without_bom_handling(&bytes);
    text.chars().next().filter(|ch| !ch.is_control())
}

/// The windows-1252 byte for `ch`, if the code page has it
fn win_ansi_byte(ch: char) -> Option<u8> {
    if ch.is_ascii() {
        return Some(ch as u8);
    }
    let mut buf = [0u8; 4];
    let (bytes, _, unmappable) = WINDOWS_1252.encode(ch.encode_utf8(&mut buf));
    match (unmappable, bytes.as_ref()) {
        (false, [byte]) => Some(*byte),
        _ => None,
    }
}

/// widths of ' ' through '~'
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// widths of windows-1252 bytes 0x80 through 0xff; undefined bytes are skipped
#[rustfmt::skip]
const HELVETICA_HIGH_WIDTHS: [u16; 128] = [
    556, 350, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 350, 611, 350,
    350, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 350, 500, 667,
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

enum FontKind {
    Builtin(BuiltinFont),
    Embedded {
        face: Box<OwnedFace>,
        /// char -> glyph id, for every character the font maps
        glyphs: BTreeMap<char, u16>,
    },
}

/// A font that text can be set in: either a [`BuiltinFont`] or a parsed TrueType /
/// OpenType font. Parsed fonts are embedded in their entirety as Unicode CID fonts,
/// so large fonts may dramatically increase the size of the output.
///
/// Character widths are extracted once, when the font is created, and are available
/// through [`Font::metrics`].
pub struct Font {
    kind: FontKind,
    metrics: FontMetrics,
}

impl Font {
    pub fn builtin(font: BuiltinFont) -> Font {
        Font {
            kind: FontKind::Builtin(font),
            metrics: font.metrics(),
        }
    }

    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, PDFError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        let glyphs = Self::glyph_map(&face);

        let parsed = face.as_face_ref();
        let scaling = 1000.0 / parsed.units_per_em() as f32;
        let metrics: FontMetrics = glyphs
            .iter()
            .filter_map(|(&ch, &gid)| {
                parsed
                    .glyph_hor_advance(owned_ttf_parser::GlyphId(gid))
                    .map(|advance| (ch, (advance as f32 * scaling).round() as u16))
            })
            .collect();
        log::debug!("loaded font with widths for {} characters", metrics.len());

        Ok(Font {
            kind: FontKind::Embedded {
                face: Box::new(face),
                glyphs,
            },
            metrics,
        })
    }

    /// The advance widths of every character the font covers, in 1/1000 em
    pub fn metrics(&self) -> &FontMetrics {
        &self.metrics
    }

    /// Obtain the full name of the font, if it has one
    pub fn name(&self) -> Option<String> {
        match &self.kind {
            FontKind::Builtin(font) => Some(String::from_utf8_lossy(font.base_name()).into()),
            FontKind::Embedded { face, .. } => face
                .as_face_ref()
                .names()
                .into_iter()
                .find(|name| {
                    name.name_id == owned_ttf_parser::name_id::FULL_NAME && name.is_unicode()
                })
                .and_then(|name| name.to_string()),
        }
    }

    /// Encodes `text` the way the font's content stream operators expect it, as the
    /// body of a hex string
    pub(crate) fn encode(&self, text: &str) -> String {
        let mut hex = String::with_capacity(text.len() * 4);
        for ch in text.chars() {
            // writing into a String can't fail
            let _ = match &self.kind {
                FontKind::Builtin(_) => {
                    let byte = win_ansi_byte(ch).unwrap_or(b'?');
                    write!(hex, "{byte:02x}")
                }
                FontKind::Embedded { glyphs, .. } => {
                    write!(hex, "{:04x}", glyphs.get(&ch).copied().unwrap_or(0))
                }
            };
        }
        hex
    }

    fn glyph_map(face: &OwnedFace) -> BTreeMap<char, u16> {
        let mut map: BTreeMap<char, u16> = BTreeMap::new();
        let Some(cmap) = face.as_face_ref().tables().cmap else {
            return map;
        };

        for subtable in cmap.subtables.into_iter().filter(|table| table.is_unicode()) {
            subtable.codepoints(|codepoint: u32| {
                let Ok(ch) = char::try_from(codepoint) else {
                    return;
                };
                if let Some(gid) = subtable.glyph_index(codepoint).filter(|gid| gid.0 > 0) {
                    map.entry(ch).or_insert(gid.0);
                }
            });
        }
        map
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, id: Id<Font>, writer: &mut Pdf) {
        let font_index = id.index();
        let font_id = refs.gen(RefType::Font(font_index));

        match &self.kind {
            FontKind::Builtin(font) => {
                let mut type1 = writer.type1_font(font_id);
                type1.base_font(Name(font.base_name()));
                type1.encoding_predefined(Name(b"WinAnsiEncoding"));
            }
            FontKind::Embedded { face, glyphs } => {
                let cid_font_id = self.write_cid(refs, font_index, face, glyphs, writer);
                let to_unicode_id = Self::write_to_unicode(refs, font_index, glyphs, writer);

                let mut type0 = writer.type0_font(font_id);
                type0.base_font(Name(format!("F{font_index}").as_bytes()));
                type0.encoding_predefined(Name(b"Identity-H"));
                type0.descendant_font(cid_font_id);
                type0.to_unicode(to_unicode_id);
            }
        }
    }

    fn write_cid(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        face: &OwnedFace,
        glyphs: &BTreeMap<char, u16>,
        writer: &mut Pdf,
    ) -> Ref {
        let descriptor_id = self.write_descriptor(refs, font_index, face, writer);

        let id = refs.gen(RefType::CidFont(font_index));
        let mut cid_font = writer.cid_font(id);
        cid_font.subtype(CidFontType::Type2);
        cid_font.base_font(Name(format!("F{font_index}").as_bytes()));
        cid_font.system_info(SystemInfo {
            registry: Str(b"Adobe"),
            ordering: Str(b"Identity"),
            supplement: 0,
        });
        cid_font.font_descriptor(descriptor_id);
        cid_font.default_width(1000.0);

        // glyph ids are used as cids directly, so widths are keyed by glyph
        let by_gid: BTreeMap<u16, f32> = glyphs
            .iter()
            .filter_map(|(ch, &gid)| self.metrics.width(*ch).map(|w| (gid, w as f32)))
            .collect();

        let mut widths = cid_font.widths();
        let mut run: Option<(u16, Vec<f32>)> = None;
        for (gid, width) in by_gid {
            let continues = matches!(
                &run,
                Some((start, values)) if *start as usize + values.len() == gid as usize
            );
            if continues {
                if let Some((_, values)) = run.as_mut() {
                    values.push(width);
                }
            } else {
                if let Some((start, values)) = run.take() {
                    widths.consecutive(start, values);
                }
                run = Some((gid, vec![width]));
            }
        }
        if let Some((start, values)) = run {
            widths.consecutive(start, values);
        }
        widths.finish();

        cid_font.cid_to_gid_map_predefined(Name(b"Identity"));
        id
    }

    fn write_descriptor(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        face: &OwnedFace,
        writer: &mut Pdf,
    ) -> Ref {
        let data_id = refs.gen(RefType::FontData(font_index));
        writer
            .stream(data_id, face.as_slice())
            .pair(Name(b"Length1"), face.as_slice().len() as i32);

        let parsed = face.as_face_ref();
        let scaling = 1000.0 / parsed.units_per_em() as f32;
        let bbox = parsed.global_bounding_box();
        let max_width = self.metrics.max_width().unwrap_or(1000) as f32;
        let name = self.name().unwrap_or_else(|| format!("F{font_index}"));

        let id = refs.gen(RefType::FontDescriptor(font_index));
        let mut descriptor = writer.font_descriptor(id);
        descriptor.name(Name(name.replace(' ', "").as_bytes()));

        let mut flags = FontFlags::NON_SYMBOLIC;
        if parsed.is_monospaced() {
            flags.insert(FontFlags::FIXED_PITCH);
        }
        if parsed.is_italic() {
            flags.insert(FontFlags::ITALIC);
        }
        descriptor.flags(flags);
        descriptor.bbox(pdf_writer::Rect {
            x1: bbox.x_min as f32 * scaling,
            y1: bbox.y_min as f32 * scaling,
            x2: bbox.x_max as f32 * scaling,
            y2: bbox.y_max as f32 * scaling,
        });
        descriptor.italic_angle(parsed.italic_angle());
        descriptor.ascent(parsed.ascender() as f32 * scaling);
        descriptor.descent(parsed.descender() as f32 * scaling);
        descriptor.cap_height(
            parsed
                .capital_height()
                .map(|h| h as f32 * scaling)
                .unwrap_or(parsed.ascender() as f32 * scaling),
        );
        // not stored in TrueType fonts, readers only use it as a hint
        descriptor.stem_v(80.0);
        descriptor.max_width(max_width);
        descriptor.font_file2(data_id);
        descriptor.finish();

        id
    }

    fn write_to_unicode(
        refs: &mut ObjectReferences,
        font_index: usize,
        glyphs: &BTreeMap<char, u16>,
        writer: &mut Pdf,
    ) -> Ref {
        let id = refs.gen(RefType::ToUnicode(font_index));

        let mut map = String::from(
            "/CIDInit /ProcSet findresource begin\n\
             12 dict begin\n\
             begincmap\n\
             /CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def\n\
             /CMapName /Adobe-Identity-UCS def\n\
             /CMapType 2 def\n\
             1 begincodespacerange\n\
             <0000> <FFFF>\n\
             endcodespacerange\n",
        );

        let mut pairs: Vec<(u16, char)> = glyphs.iter().map(|(&ch, &gid)| (gid, ch)).collect();
        pairs.sort_by_key(|&(gid, _)| gid);
        pairs.dedup_by_key(|&mut (gid, _)| gid);

        // bfchar blocks hold at most 100 entries
        for block in pairs.chunks(100) {
            let _ = writeln!(map, "{} beginbfchar", block.len());
            for &(gid, ch) in block {
                let mut utf16 = [0u16; 2];
                let _ = write!(map, "<{gid:04x}> <");
                for unit in ch.encode_utf16(&mut utf16) {
                    let _ = write!(map, "{unit:04x}");
                }
                map.push_str(">\n");
            }
            map.push_str("endbfchar\n");
        }
        map.push_str("endcmap CMapName currentdict /CMap defineresource pop end end\n");

        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            map.as_bytes(),
            miniz_oxide::deflate::CompressionLevel::DefaultLevel as u8,
        );
        writer
            .stream(id, compressed.as_slice())
            .filter(Filter::FlateDecode);

        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_fonts_cover_windows_1252() {
        // 95 printable ascii characters plus 123 of the 128 high bytes
        let helvetica = Font::builtin(BuiltinFont::Helvetica);
        assert_eq!(helvetica.metrics().len(), 95 + 123);
        assert_eq!(helvetica.metrics().width(' '), Some(278));
        assert_eq!(helvetica.metrics().width('W'), Some(944));
        assert_eq!(helvetica.metrics().width('~'), Some(584));
        assert_eq!(helvetica.metrics().width('é'), Some(556));
        assert_eq!(helvetica.metrics().width('€'), Some(556));
        assert_eq!(helvetica.metrics().width('Æ'), Some(1000));
        assert_eq!(helvetica.metrics().width('\u{81}'), None);
        assert_eq!(helvetica.metrics().width('ā'), None);

        let courier = Font::builtin(BuiltinFont::Courier);
        assert_eq!(courier.metrics().width('i'), Some(600));
        assert_eq!(courier.metrics().width('ß'), Some(600));
        assert_eq!(courier.metrics().len(), 95 + 123);
        assert_eq!(courier.name().as_deref(), Some("Courier"));
    }

    #[test]
    fn builtin_fonts_encode_single_bytes() {
        let font = Font::builtin(BuiltinFont::Helvetica);
        assert_eq!(font.encode("Ab 1"), "41622031");
        assert_eq!(font.encode("é€"), "e980");
        assert_eq!(font.encode("“ok”"), "936f6b94");
        // outside the code page
        assert_eq!(font.encode("ā"), "3f");
    }

    #[test]
    fn garbage_is_not_a_font() {
        assert!(matches!(
            Font::load(vec![0, 1, 2, 3]),
            Err(PDFError::FaceParsingError(_))
        ));
    }
}
