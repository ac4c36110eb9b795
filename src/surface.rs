use crate::metrics::FontMetrics;
use crate::pagesize::Orientation;
use crate::PDFError;

/// Horizontal alignment of text inside a cell
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// The font text is currently measured and drawn with
#[derive(Debug, Copy, Clone)]
pub struct ActiveFont<'a> {
    pub metrics: &'a FontMetrics,
    /// the font size, in the surface's unit
    pub size: f32,
}

/// Something that can be drawn on with a cursor, one page after another.
///
/// Positions are in the surface's own unit, measured from the top-left corner of the
/// current page with y growing downwards. [`Canvas`](crate::Canvas) is the
/// implementation that produces PDF pages; [`Table`](crate::Table) only ever talks to
/// this trait.
pub trait DrawSurface {
    /// The current cursor position
    fn position(&self) -> (f32, f32);

    fn set_position(&mut self, x: f32, y: f32);

    /// The y position beyond which content no longer fits on the page
    fn page_break_trigger(&self) -> f32;

    /// Distance from the cursor to the right margin
    fn remaining_width(&self) -> f32;

    /// Horizontal padding applied inside cells
    fn cell_margin(&self) -> f32;

    fn orientation(&self) -> Orientation;

    /// The selected font, or [`PDFError::NoFontSelected`]
    fn font(&self) -> Result<ActiveFont<'_>, PDFError>;

    /// Starts a new page and moves the cursor to its top-left margin
    fn add_page(&mut self, orientation: Orientation) -> Result<(), PDFError>;

    /// Strokes the outline of a rectangle whose top-left corner is at (x, y)
    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) -> Result<(), PDFError>;

    /// Writes `text` wrapped into lines of `line_height`, inside a box `w` wide starting at
    /// the cursor, optionally framed. Afterwards the cursor is at the left margin below the
    /// text.
    fn multi_cell(
        &mut self,
        w: f32,
        line_height: f32,
        text: &str,
        border: bool,
        align: Align,
    ) -> Result<(), PDFError>;

    /// Moves the cursor down by `h` and back to the left margin
    fn ln(&mut self, h: f32);
}
