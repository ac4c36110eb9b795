use crate::colour::{colours, Colour};
use crate::document::Document;
use crate::font::Font;
use crate::image::{Image, ImageInfo};
use crate::info::Info;
use crate::layout::{split_lines, text_width, Margins};
use crate::page::{ImageLayout, Page, RectLayout, SpanFont, SpanLayout};
use crate::pagesize::{Orientation, PageSize, A4};
use crate::rect::Rect;
use crate::surface::{ActiveFont, Align, DrawSurface};
use crate::units::{Mm, Pt, Unit};
use crate::PDFError;
use id_arena::Id;
use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Page setup for a [`Canvas`]. Every setting has a default, so only the ones that
/// differ need to be given:
///
/// ```
/// use pdf_rows::{CanvasConfig, Unit};
/// use pdf_rows::pagesize::{Orientation, LETTER};
///
/// let config = CanvasConfig::default()
///     .unit(Unit::In)
///     .page_size(LETTER)
///     .orientation(Orientation::Landscape);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasConfig {
    /// The unit all canvas coordinates are given in. Millimetres by default
    pub unit: Unit,
    /// Portrait size of every page, A4 by default
    pub page_size: PageSize,
    /// Orientation of pages started with [`Canvas::new_page`]
    pub orientation: Orientation,
    pub margins: Margins,
    /// Horizontal padding between a cell's border and its text
    pub cell_margin: Pt,
    /// Whether text and images that run past the bottom margin continue on a new page
    pub auto_page_break: bool,
    pub line_width: Pt,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        CanvasConfig {
            unit: Unit::Mm,
            page_size: A4,
            orientation: Orientation::Portrait,
            margins: Margins::default(),
            cell_margin: Mm(1.0).into(),
            auto_page_break: true,
            line_width: Mm(0.2).into(),
        }
    }
}

impl CanvasConfig {
    pub fn unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    pub fn page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub fn cell_margin<D: Into<Pt>>(mut self, cell_margin: D) -> Self {
        self.cell_margin = cell_margin.into();
        self
    }

    pub fn auto_page_break(mut self, auto_page_break: bool) -> Self {
        self.auto_page_break = auto_page_break;
        self
    }

    pub fn line_width<D: Into<Pt>>(mut self, line_width: D) -> Self {
        self.line_width = line_width.into();
        self
    }
}

/// A cursor-based PDF builder.
///
/// Content is placed relative to the top-left corner of the current page, in the unit
/// chosen in the [`CanvasConfig`], and the cursor moves along as text and images are
/// added. This is the [`DrawSurface`] that [`Table`](crate::Table) renders rows on.
///
/// Pages are kept in memory until the canvas is finished with [`Canvas::close`],
/// [`Canvas::output`], or [`Canvas::into_document`].
pub struct Canvas {
    document: Document,
    config: CanvasConfig,
    page: Option<Page>,
    orientation: Orientation,
    x: f32,
    y: f32,
    font: Option<SpanFont>,
    draw_colour: Colour,
    text_colour: Colour,
    line_width: Pt,
    images: HashMap<PathBuf, Id<Image>>,
    out_file: Option<(PathBuf, File)>,
}

impl Canvas {
    pub fn new(config: CanvasConfig) -> Canvas {
        let x = config.unit.from_pt(config.margins.left);
        let y = config.unit.from_pt(config.margins.top);
        Canvas {
            document: Document::default(),
            orientation: config.orientation,
            line_width: config.line_width,
            config,
            page: None,
            x,
            y,
            font: None,
            draw_colour: colours::BLACK,
            text_colour: colours::BLACK,
            images: HashMap::new(),
            out_file: None,
        }
    }

    /// Creates the output file right away, so that an unwritable destination is reported
    /// before any content is generated. The document is written to it by
    /// [`Canvas::close`].
    pub fn open<P: AsRef<Path>>(path: P, config: CanvasConfig) -> Result<Canvas, PDFError> {
        let path = path.as_ref().to_owned();
        let file = File::create(&path).map_err(|source| PDFError::CreateOutput {
            path: path.clone(),
            source,
        })?;

        let mut canvas = Canvas::new(config);
        canvas.out_file = Some((path, file));
        Ok(canvas)
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn set_info(&mut self, info: Info) {
        self.document.set_info(info);
    }

    /// The page currently being drawn on, if one was started
    pub fn current_page(&self) -> Option<&Page> {
        self.page.as_ref()
    }

    /// Pages started so far, including the current one
    pub fn page_count(&self) -> usize {
        self.document.page_count() + usize::from(self.page.is_some())
    }

    /// Starts a new page in the configured orientation
    pub fn new_page(&mut self) {
        self.begin_page(self.config.orientation);
    }

    pub fn add_font(&mut self, font: Font) -> Id<Font> {
        self.document.add_font(font)
    }

    /// Selects the font used for all following text, at `size` points
    pub fn set_font(&mut self, font: Id<Font>, size: f32) -> Result<(), PDFError> {
        if self.document.fonts.get(font).is_none() {
            return Err(PDFError::FontMissing);
        }
        check_font_size(size)?;
        self.font = Some(SpanFont {
            id: font,
            size: Pt(size),
        });
        Ok(())
    }

    /// Changes the size of the selected font, in points
    pub fn set_font_size(&mut self, size: f32) -> Result<(), PDFError> {
        let font = self.font.as_mut().ok_or(PDFError::NoFontSelected)?;
        check_font_size(size)?;
        font.size = Pt(size);
        Ok(())
    }

    /// Colour of rectangles and cell borders
    pub fn set_draw_colour(&mut self, colour: Colour) {
        self.draw_colour = colour;
    }

    pub fn set_text_colour(&mut self, colour: Colour) {
        self.text_colour = colour;
    }

    /// Width of rectangle outlines, in the canvas unit
    pub fn set_line_width(&mut self, width: f32) {
        self.line_width = self.to_pt(width);
    }

    /// Places the image stored at `path`.
    ///
    /// The file's header is only read the first time a path is used; its size and type
    /// are cached and the image is embedded once no matter how often it is placed.
    ///
    /// * `x` defaults to the cursor position.
    /// * Without `y`, the image flows: it goes at the cursor, moving to a new page first
    ///   if it doesn't fit, and the cursor moves below it.
    /// * With `w` and `h` both `0.0` the image is placed at 96 dpi. If only one of them
    ///   is `0.0` it is derived from the other, keeping the aspect ratio.
    pub fn image<P: AsRef<Path>>(
        &mut self,
        path: P,
        x: Option<f32>,
        y: Option<f32>,
        w: f32,
        h: f32,
    ) -> Result<(), PDFError> {
        let image_id = self.register_image(path.as_ref())?;
        let info = self.document.images[image_id].info;
        let (w, h) = self.image_size(&info, w, h);

        let y = match y {
            Some(y) => y,
            None => {
                if self.config.auto_page_break && self.y + h > self.page_break_trigger() {
                    self.begin_page(self.orientation);
                }
                let y = self.y;
                self.y += h;
                y
            }
        };
        let x = x.unwrap_or(self.x);

        let position = self.pdf_rect(x, y, w, h);
        self.page_mut().add_image(ImageLayout { image_id, position });
        Ok(())
    }

    /// Size and type of an image that has already been placed
    pub fn image_info<P: AsRef<Path>>(&self, path: P) -> Option<ImageInfo> {
        self.images
            .get(path.as_ref())
            .map(|id| self.document.images[*id].info)
    }

    fn register_image(&mut self, path: &Path) -> Result<Id<Image>, PDFError> {
        if let Some(id) = self.images.get(path) {
            return Ok(*id);
        }

        let image = Image::probe(path)?;
        log::debug!(
            "registered image {} ({}x{} {:?})",
            path.display(),
            image.info.width,
            image.info.height,
            image.info.kind
        );
        let id = self.document.add_image(image);
        self.images.insert(path.to_owned(), id);
        Ok(id)
    }

    fn image_size(&self, info: &ImageInfo, w: f32, h: f32) -> (f32, f32) {
        let (px_w, px_h) = (info.width as f32, info.height as f32);
        match (w == 0.0, h == 0.0) {
            (true, true) => {
                let unit = self.config.unit;
                (
                    unit.from_pt(Pt(px_w * 72.0 / 96.0)),
                    unit.from_pt(Pt(px_h * 72.0 / 96.0)),
                )
            }
            (true, false) => (h * px_w / px_h, h),
            (false, true) => (w, w * px_h / px_w),
            (false, false) => (w, h),
        }
    }

    /// Finishes the document into the file created by [`Canvas::open`]
    pub fn close(mut self) -> Result<(), PDFError> {
        let (path, file) = self.out_file.take().ok_or(PDFError::NoOutput)?;
        log::debug!("writing {}", path.display());
        self.output(file)
    }

    /// Finishes the document and writes it to `w`
    pub fn output<W: Write>(self, w: W) -> Result<(), PDFError> {
        self.into_document().write(w)
    }

    /// Finishes the current page and hands over the document. A document without any
    /// pages gets a single empty one.
    pub fn into_document(mut self) -> Document {
        if self.page.is_none() && self.document.page_count() == 0 {
            self.new_page();
        }
        if let Some(page) = self.page.take() {
            self.document.add_page(page);
        }
        self.document
    }

    fn begin_page(&mut self, orientation: Orientation) {
        if let Some(page) = self.page.take() {
            self.document.add_page(page);
        }
        self.page = Some(Page::new(self.config.page_size, orientation));
        self.orientation = orientation;
        self.x = self.margin(self.config.margins.left);
        self.y = self.margin(self.config.margins.top);
        log::debug!("started page {} ({orientation:?})", self.page_count());
    }

    fn page_mut(&mut self) -> &mut Page {
        if self.page.is_none() {
            self.begin_page(self.orientation);
        }
        let (size, orientation) = (self.config.page_size, self.orientation);
        self.page.get_or_insert_with(|| Page::new(size, orientation))
    }

    fn to_pt(&self, value: f32) -> Pt {
        self.config.unit.to_pt(value)
    }

    fn margin(&self, margin: Pt) -> f32 {
        self.config.unit.from_pt(margin)
    }

    /// (width, height) of the current page in the canvas unit
    fn page_dimensions(&self) -> (f32, f32) {
        let (w, h) = self.orientation.apply(self.config.page_size);
        (self.config.unit.from_pt(w), self.config.unit.from_pt(h))
    }

    /// Converts a box given by its top-left corner in canvas space to PDF space
    fn pdf_rect(&self, x: f32, y: f32, w: f32, h: f32) -> Rect {
        let (_, page_h) = self.page_dimensions();
        Rect::from_origin(
            self.to_pt(x),
            self.to_pt(page_h - y - h),
            self.to_pt(w),
            self.to_pt(h),
        )
    }

    /// Breaks `text` into lines for a cell `w` wide, pairing every line with its
    /// horizontal offset inside the cell
    fn lay_out_lines(
        &self,
        w: f32,
        text: &str,
        align: Align,
    ) -> Result<(f32, Vec<(String, f32)>), PDFError> {
        let ActiveFont { metrics, size } = self.font()?;
        let margin = self.cell_margin();
        let w = if w == 0.0 { self.remaining_width() } else { w };

        let lines = split_lines(w, text, metrics, size, margin, w)?;
        let mut placed = Vec::with_capacity(lines.len());
        for line in lines {
            let width = text_width(&line, metrics, size)?;
            let dx = match align {
                Align::Left => margin,
                Align::Center => (w - width) / 2.0,
                Align::Right => w - margin - width,
            };
            placed.push((line, dx));
        }
        Ok((w, placed))
    }
}

/// Line widths are divided by the font size, so it has to be positive
fn check_font_size(size: f32) -> Result<(), PDFError> {
    if size > 0.0 {
        Ok(())
    } else {
        Err(PDFError::InvalidFontSize { size })
    }
}

impl DrawSurface for Canvas {
    fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    fn page_break_trigger(&self) -> f32 {
        let (_, page_h) = self.page_dimensions();
        page_h - self.margin(self.config.margins.bottom)
    }

    fn remaining_width(&self) -> f32 {
        let (page_w, _) = self.page_dimensions();
        page_w - self.margin(self.config.margins.right) - self.x
    }

    fn cell_margin(&self) -> f32 {
        self.margin(self.config.cell_margin)
    }

    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn font(&self) -> Result<ActiveFont<'_>, PDFError> {
        let span_font = self.font.ok_or(PDFError::NoFontSelected)?;
        let font = self
            .document
            .fonts
            .get(span_font.id)
            .ok_or(PDFError::FontMissing)?;
        Ok(ActiveFont {
            metrics: font.metrics(),
            size: self.config.unit.from_pt(span_font.size),
        })
    }

    fn add_page(&mut self, orientation: Orientation) -> Result<(), PDFError> {
        self.begin_page(orientation);
        Ok(())
    }

    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) -> Result<(), PDFError> {
        let rect = RectLayout {
            rect: self.pdf_rect(x, y, w, h),
            colour: self.draw_colour,
            line_width: self.line_width,
        };
        self.page_mut().add_rect(rect);
        Ok(())
    }

    fn multi_cell(
        &mut self,
        w: f32,
        line_height: f32,
        text: &str,
        border: bool,
        align: Align,
    ) -> Result<(), PDFError> {
        let (w, lines) = self.lay_out_lines(w, text, align)?;
        let font = self.font.ok_or(PDFError::NoFontSelected)?;
        let font_size = self.config.unit.from_pt(font.size);

        let x = self.x;
        let mut top = self.y;
        let mut spans: Vec<SpanLayout> = Vec::with_capacity(lines.len());

        for (line, dx) in lines {
            if self.config.auto_page_break && self.y + line_height > self.page_break_trigger() {
                self.page_mut().add_spans(std::mem::take(&mut spans));
                if border && self.y > top {
                    self.rect(x, top, w, self.y - top)?;
                }
                self.begin_page(self.orientation);
                self.x = x;
                top = self.y;
            }

            if !line.is_empty() {
                let (_, page_h) = self.page_dimensions();
                let baseline = self.y + 0.5 * line_height + 0.3 * font_size;
                spans.push(SpanLayout {
                    text: line,
                    font,
                    colour: self.text_colour,
                    coords: (self.to_pt(x + dx), self.to_pt(page_h - baseline)),
                });
            }
            self.y += line_height;
        }

        self.page_mut().add_spans(spans);
        if border && self.y > top {
            self.rect(x, top, w, self.y - top)?;
        }
        self.x = self.margin(self.config.margins.left);
        Ok(())
    }

    fn ln(&mut self, h: f32) {
        self.x = self.margin(self.config.margins.left);
        self.y += h;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::BuiltinFont;
    use crate::page::PageContents;

    fn canvas_with_font() -> Canvas {
        let config = CanvasConfig::default()
            .unit(Unit::Pt)
            .margins(Margins::all(Pt(20.0)));
        let mut canvas = Canvas::new(config);
        let font = canvas.add_font(Font::builtin(BuiltinFont::Courier));
        canvas.set_font(font, 10.0).unwrap();
        canvas.new_page();
        canvas
    }

    fn temp_png(name: &str, width: u32, height: u32) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "pdf-rows-{}-{name}.png",
            std::process::id()
        ));
        image::RgbaImage::new(width, height).save(&path).unwrap();
        path
    }

    #[test]
    fn pages_start_at_the_top_left_margin() {
        let mut canvas = Canvas::new(CanvasConfig::default());
        assert_eq!(canvas.page_count(), 0);

        canvas.new_page();
        let (x, y) = canvas.position();
        assert!((x - 10.0).abs() < 1e-3);
        assert!((y - 10.0).abs() < 1e-3);
        assert!((canvas.page_break_trigger() - 277.0).abs() < 1e-3);
        assert!((canvas.remaining_width() - 190.0).abs() < 1e-3);
        assert!((canvas.cell_margin() - 1.0).abs() < 1e-3);
        assert_eq!(canvas.page_count(), 1);
    }

    #[test]
    fn landscape_pages_swap_dimensions() {
        let mut canvas = Canvas::new(CanvasConfig::default());
        canvas.add_page(Orientation::Landscape).unwrap();

        assert_eq!(canvas.orientation(), Orientation::Landscape);
        let page = canvas.current_page().unwrap();
        assert!(page.width() > page.height());
        assert_eq!(page.width(), A4.1);
        assert!((canvas.page_break_trigger() - 190.0).abs() < 1e-3);
        assert!((canvas.remaining_width() - 277.0).abs() < 1e-3);
    }

    #[test]
    fn ln_returns_to_the_left_margin() {
        let mut canvas = canvas_with_font();
        canvas.set_position(100.0, 50.0);
        canvas.ln(12.0);
        assert_eq!(canvas.position(), (20.0, 62.0));
    }

    #[test]
    fn font_sizes_are_reported_in_the_canvas_unit() {
        let mut canvas = Canvas::new(CanvasConfig::default());
        let font = canvas.add_font(Font::builtin(BuiltinFont::Helvetica));
        canvas.set_font(font, 72.0).unwrap();

        let active = canvas.font().unwrap();
        assert!((active.size - 25.4).abs() < 1e-3);
        assert_eq!(active.metrics.width('W'), Some(944));
    }

    #[test]
    fn font_sizes_must_be_positive() {
        let mut canvas = canvas_with_font();
        let font = canvas.add_font(Font::builtin(BuiltinFont::Helvetica));

        for size in [0.0, -4.0, f32::NAN] {
            assert!(matches!(
                canvas.set_font(font, size),
                Err(PDFError::InvalidFontSize { .. })
            ));
            assert!(matches!(
                canvas.set_font_size(size),
                Err(PDFError::InvalidFontSize { .. })
            ));
        }

        // the courier font selected before is still active at 10pt
        let active = canvas.font().unwrap();
        assert_eq!(active.size, 10.0);
        assert_eq!(active.metrics.width('W'), Some(600));
    }

    #[test]
    fn text_needs_a_font() {
        let mut canvas = Canvas::new(CanvasConfig::default());
        canvas.new_page();

        let result = canvas.multi_cell(50.0, 5.0, "hello", false, Align::Left);
        assert!(matches!(result, Err(PDFError::NoFontSelected)));
        assert!(matches!(
            canvas.set_font_size(12.0),
            Err(PDFError::NoFontSelected)
        ));
        assert!(canvas.current_page().unwrap().contents.is_empty());
    }

    #[test]
    fn multi_cell_writes_one_span_per_line() {
        let mut canvas = canvas_with_font();

        // courier at 10pt is 6pt per character; 60 wide minus 2 margins of 1mm fits 9
        canvas
            .multi_cell(60.0, 12.0, "hello world\nagain", false, Align::Left)
            .unwrap();

        let page = canvas.current_page().unwrap();
        let PageContents::Text(spans) = &page.contents[0] else {
            panic!("expected text, got {:?}", page.contents[0]);
        };
        let lines: Vec<&str> = spans.iter().map(|span| span.text.as_str()).collect();
        assert_eq!(lines, vec!["hello", "world", "again"]);
        assert_eq!(canvas.position(), (20.0, 20.0 + 36.0));
    }

    #[test]
    fn alignment_moves_text_inside_the_cell() {
        let mut canvas = canvas_with_font();
        canvas.set_position(100.0, 100.0);

        canvas.multi_cell(100.0, 12.0, "abc", false, Align::Right).unwrap();
        canvas.set_position(100.0, 100.0);
        canvas.multi_cell(100.0, 12.0, "abc", false, Align::Center).unwrap();

        let page = canvas.current_page().unwrap();
        let starts: Vec<f32> = page
            .contents
            .iter()
            .filter_map(|content| match content {
                PageContents::Text(spans) => Some(spans[0].coords.0 .0),
                _ => None,
            })
            .collect();
        let margin = Unit::Pt.from_pt(Mm(1.0).into());
        assert!((starts[0] - (200.0 - margin - 18.0)).abs() < 1e-3);
        assert!((starts[1] - (100.0 + 41.0)).abs() < 1e-3);
    }

    #[test]
    fn framed_cells_are_split_across_pages() {
        let mut canvas = canvas_with_font();
        let trigger = canvas.page_break_trigger();
        canvas.set_position(20.0, trigger - 18.0);

        canvas
            .multi_cell(100.0, 12.0, "one\ntwo\nthree", true, Align::Left)
            .unwrap();

        assert_eq!(canvas.page_count(), 2);
        let document = canvas.into_document();
        let rects = |page: &Page| {
            page.contents
                .iter()
                .filter(|content| matches!(content, PageContents::Rect(_)))
                .count()
        };
        assert_eq!(rects(document.page(0).unwrap()), 1);
        assert_eq!(rects(document.page(1).unwrap()), 1);
    }

    #[test]
    fn rectangles_are_flipped_into_pdf_space() {
        let mut canvas = canvas_with_font();
        canvas.rect(20.0, 30.0, 40.0, 50.0).unwrap();

        let page_height = A4.1;
        let page = canvas.current_page().unwrap();
        let PageContents::Rect(rect) = &page.contents[0] else {
            panic!("expected a rectangle");
        };
        assert_eq!(rect.rect.x1, Pt(20.0));
        assert_eq!(rect.line_width, Pt::from(Mm(0.2)));
        assert!((rect.rect.y1.0 - (page_height.0 - 80.0)).abs() < 1e-3);
        assert!((rect.rect.height().0 - 50.0).abs() < 1e-3);
    }

    #[test]
    fn images_are_probed_once_and_scaled() {
        let path = temp_png("scaled", 40, 20);
        let mut canvas = canvas_with_font();

        canvas.image(&path, Some(20.0), Some(20.0), 100.0, 0.0).unwrap();
        canvas.image(&path, Some(20.0), Some(200.0), 0.0, 0.0).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(canvas.document().images.len(), 1);
        let info = canvas.image_info(&path).unwrap();
        assert_eq!((info.width, info.height), (40, 20));

        let page = canvas.current_page().unwrap();
        let sizes: Vec<(f32, f32)> = page
            .contents
            .iter()
            .filter_map(|content| match content {
                PageContents::Image(image) => {
                    Some((image.position.width().0, image.position.height().0))
                }
                _ => None,
            })
            .collect();
        let expected = [(100.0, 50.0), (30.0, 15.0)];
        assert_eq!(sizes.len(), expected.len());
        for ((w, h), (ew, eh)) in sizes.into_iter().zip(expected) {
            assert!((w - ew).abs() < 1e-3, "width {w} != {ew}");
            assert!((h - eh).abs() < 1e-3, "height {h} != {eh}");
        }
    }

    #[test]
    fn flowing_images_move_the_cursor_and_break_pages() {
        let path = temp_png("flowing", 10, 10);
        let mut canvas = canvas_with_font();

        canvas.image(&path, None, None, 100.0, 100.0).unwrap();
        assert_eq!(canvas.position(), (20.0, 120.0));

        let trigger = canvas.page_break_trigger();
        canvas.set_position(20.0, trigger - 50.0);
        canvas.image(&path, None, None, 100.0, 100.0).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(canvas.page_count(), 2);
        assert_eq!(canvas.position(), (20.0, 120.0));
    }

    #[test]
    fn missing_images_are_reported() {
        let mut canvas = canvas_with_font();
        let result = canvas.image("/no/such/image.png", None, None, 0.0, 0.0);
        assert!(matches!(result, Err(PDFError::Io(_))));
        assert!(canvas.image_info("/no/such/image.png").is_none());
    }

    #[test]
    fn empty_documents_get_a_page() {
        let document = Canvas::new(CanvasConfig::default()).into_document();
        assert_eq!(document.page_count(), 1);
    }

    #[test]
    fn close_needs_an_opened_file() {
        let canvas = Canvas::new(CanvasConfig::default());
        assert!(matches!(canvas.close(), Err(PDFError::NoOutput)));
    }

    #[test]
    fn open_reports_unwritable_paths() {
        let dir = std::env::temp_dir();
        let result = Canvas::open(&dir, CanvasConfig::default());
        assert!(matches!(result, Err(PDFError::CreateOutput { .. })));
    }
}
