use crate::colour::Colour;
use crate::content::render_contents;
use crate::font::Font;
use crate::image::Image;
use crate::pagesize::{Orientation, PageSize};
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use crate::PDFError;
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Name, Pdf};

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub id: Id<Font>,
    pub size: Pt,
}

/// A run of text in a single font and colour, starting at a baseline position
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (Pt, Pt),
}

#[derive(Clone, PartialEq, Debug)]
pub struct ImageLayout {
    pub image_id: Id<Image>,
    pub position: Rect,
}

/// A stroked, unfilled rectangle
#[derive(Clone, PartialEq, Debug)]
pub struct RectLayout {
    pub rect: Rect,
    pub colour: Colour,
    pub line_width: Pt,
}

#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Text(Vec<SpanLayout>),
    Image(ImageLayout),
    Rect(RectLayout),
}

/// A single page and everything drawn on it, in PDF coordinates (origin at the
/// bottom-left corner)
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    pub orientation: Orientation,
    pub contents: Vec<PageContents>,
}

impl Page {
    /// Create an empty page, turning `size` to the requested orientation
    pub fn new(size: PageSize, orientation: Orientation) -> Page {
        let (width, height) = orientation.apply(size);
        Page {
            media_box: Rect::from_origin(Pt(0.0), Pt(0.0), width, height),
            orientation,
            contents: Vec::default(),
        }
    }

    pub fn width(&self) -> Pt {
        self.media_box.width()
    }

    pub fn height(&self) -> Pt {
        self.media_box.height()
    }

    pub fn add_span(&mut self, span: SpanLayout) {
        self.add_spans(vec![span]);
    }

    /// Adds several spans as one text block; empty blocks are dropped
    pub fn add_spans(&mut self, spans: Vec<SpanLayout>) {
        if !spans.is_empty() {
            self.contents.push(PageContents::Text(spans));
        }
    }

    pub fn add_image(&mut self, image: ImageLayout) {
        self.contents.push(PageContents::Image(image));
    }

    pub fn add_rect(&mut self, rect: RectLayout) {
        self.contents.push(PageContents::Rect(rect));
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        fonts: &Arena<Font>,
        images: &Arena<Image>,
        writer: &mut Pdf,
    ) -> Result<(), PDFError> {
        let id = refs.get(RefType::Page(page_index)).ok_or(PDFError::PageMissing)?;
        let parent = refs.get(RefType::PageTree).ok_or(PDFError::PageMissing)?;
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.parent(parent);

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for (font_id, _) in fonts.iter() {
            if let Some(font_ref) = refs.get(RefType::Font(font_id.index())) {
                resource_fonts.pair(Name(format!("F{}", font_id.index()).as_bytes()), font_ref);
            }
        }
        resource_fonts.finish();
        let mut resource_xobjects = resources.x_objects();
        for (image_id, _) in images.iter() {
            if let Some(image_ref) = refs.get(RefType::Image(image_id.index())) {
                resource_xobjects.pair(
                    Name(format!("I{}", image_id.index()).as_bytes()),
                    image_ref,
                );
            }
        }
        resource_xobjects.finish();
        resources.finish();

        page.contents(content_id);
        page.finish();

        let rendered = render_contents(&self.contents, fonts)?;
        writer.stream(content_id, rendered.as_slice());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;
    use crate::font::BuiltinFont;
    use crate::pagesize::LETTER;

    #[test]
    fn spans_are_grouped_into_text_blocks() {
        let mut fonts: Arena<Font> = Arena::new();
        let id = fonts.alloc(Font::builtin(BuiltinFont::Helvetica));
        let span = |text: &str| SpanLayout {
            text: text.to_string(),
            font: SpanFont { id, size: Pt(12.0) },
            colour: colours::BLACK,
            coords: (Pt(72.0), Pt(700.0)),
        };

        let mut page = Page::new(LETTER, Orientation::Portrait);
        assert_eq!(page.width(), Pt(612.0));
        assert_eq!(page.height(), Pt(792.0));

        page.add_span(span("one"));
        page.add_spans(Vec::new());
        page.add_spans(vec![span("two"), span("three")]);

        assert_eq!(page.contents.len(), 2);
        assert!(matches!(&page.contents[1], PageContents::Text(spans) if spans.len() == 2));
    }
}
