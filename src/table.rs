use crate::layout::estimate_line_count;
use crate::surface::{Align, DrawSurface};
use crate::PDFError;

/// Height of one line of text in a row, in the surface's unit (5 mm on a default
/// [`Canvas`](crate::Canvas))
pub const DEFAULT_LINE_HEIGHT: f32 = 5.0;

/// Column layout for rendering table rows whose height grows with their content.
///
/// Every cell of a row is measured first; the row then takes the height of its tallest
/// cell so all cells get the same bordered box. A row that would cross the page-break
/// trigger is moved to a new page as a whole before anything of it is drawn.
///
/// # Example
///
/// ```
/// use pdf_rows::{Align, BuiltinFont, Canvas, CanvasConfig, Font, Table};
///
/// let mut canvas = Canvas::new(CanvasConfig::default());
/// let helvetica = canvas.add_font(Font::builtin(BuiltinFont::Helvetica));
/// canvas.set_font(helvetica, 10.0).unwrap();
/// canvas.new_page();
///
/// let mut table = Table::new();
/// table.set_widths(vec![40.0, 60.0, 40.0]);
/// table.set_aligns(vec![Align::Left, Align::Left, Align::Right]);
///
/// table.row(&mut canvas, &["Item", "Description", "Price"]).unwrap();
/// table
///     .row(&mut canvas, &["Widget", "A small part that goes in a larger thing", "3.50"])
///     .unwrap();
///
/// let mut out = Vec::new();
/// canvas.output(&mut out).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    widths: Vec<f32>,
    aligns: Vec<Align>,
    line_height: f32,
}

impl Default for Table {
    fn default() -> Self {
        Table::new()
    }
}

impl Table {
    pub fn new() -> Table {
        Table {
            widths: Vec::new(),
            aligns: Vec::new(),
            line_height: DEFAULT_LINE_HEIGHT,
        }
    }

    /// Sets the width of every column. A width of `0.0` stretches the column to the
    /// right margin
    pub fn set_widths(&mut self, widths: Vec<f32>) -> &mut Self {
        self.widths = widths;
        self
    }

    /// Sets the alignment of the columns; columns without an entry are left aligned
    pub fn set_aligns(&mut self, aligns: Vec<Align>) -> &mut Self {
        self.aligns = aligns;
        self
    }

    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    pub fn widths(&self) -> &[f32] {
        &self.widths
    }

    pub fn align(&self, column: usize) -> Align {
        self.aligns.get(column).copied().unwrap_or_default()
    }

    /// Draws one row at the cursor and moves the cursor to the start of the next row.
    /// Returns the height of the row.
    ///
    /// # Errors
    ///
    /// All of these are raised before anything is drawn:
    ///
    /// * [`PDFError::NoFontSelected`] if the surface has no font
    /// * [`PDFError::MissingColumnWidth`] if there are more cells than widths
    /// * [`PDFError::UndefinedCharacterWidth`] if the font can't measure a cell
    pub fn row<S, D>(&self, surface: &mut D, cells: &[S]) -> Result<f32, PDFError>
    where
        S: AsRef<str>,
        D: DrawSurface + ?Sized,
    {
        let widths = self.measure(surface, cells)?;
        let max_lines = widths.iter().map(|&(_, lines)| lines).max().unwrap_or(1);
        let h = self.line_height * max_lines as f32;
        log::trace!("row of {} cells, {max_lines} lines high", cells.len());

        check_page_break(surface, h)?;

        for (column, (cell, (w, _))) in cells.iter().zip(widths).enumerate() {
            let (x, y) = surface.position();
            surface.rect(x, y, w, h)?;
            surface.multi_cell(w, self.line_height, cell.as_ref(), false, self.align(column))?;
            surface.set_position(x + w, y);
        }
        surface.ln(h);

        Ok(h)
    }

    /// Resolves the width of every cell and counts its lines, without drawing anything
    fn measure<S, D>(&self, surface: &D, cells: &[S]) -> Result<Vec<(f32, usize)>, PDFError>
    where
        S: AsRef<str>,
        D: DrawSurface + ?Sized,
    {
        let font = surface.font()?;
        let margin = surface.cell_margin();
        let (mut x, _) = surface.position();
        let right_edge = x + surface.remaining_width();

        let mut measured = Vec::with_capacity(cells.len());
        for (column, cell) in cells.iter().enumerate() {
            let width = *self
                .widths
                .get(column)
                .ok_or(PDFError::MissingColumnWidth { column })?;
            let fallback = right_edge - x;
            let lines = estimate_line_count(
                width,
                cell.as_ref(),
                font.metrics,
                font.size,
                margin,
                fallback,
            )?;

            let width = if width == 0.0 { fallback } else { width };
            measured.push((width, lines));
            x += width;
        }
        Ok(measured)
    }
}

/// Starts a new page, in the current orientation, if something `h` high would not fit
/// below the cursor. Returns whether a page was added.
pub fn check_page_break<D: DrawSurface + ?Sized>(
    surface: &mut D,
    h: f32,
) -> Result<bool, PDFError> {
    let (_, y) = surface.position();
    if y + h <= surface.page_break_trigger() {
        return Ok(false);
    }

    let orientation = surface.orientation();
    surface.add_page(orientation)?;

    let (_, y) = surface.position();
    if y + h > surface.page_break_trigger() {
        log::warn!("content {h} high does not fit on an empty page and will overflow it");
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::FontMetrics;
    use crate::pagesize::Orientation;
    use crate::surface::ActiveFont;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        AddPage(Orientation),
        Rect(f32, f32, f32, f32),
        MultiCell(f32, f32, String, Align),
        SetPosition(f32, f32),
        Ln(f32),
    }

    /// an A4 sized surface with 10 unit margins that records what is drawn on it
    struct Recorder {
        x: f32,
        y: f32,
        metrics: Option<FontMetrics>,
        calls: Vec<Call>,
    }

    const LEFT: f32 = 10.0;
    const TOP: f32 = 10.0;
    const RIGHT_EDGE: f32 = 200.0;
    const TRIGGER: f32 = 287.0;

    impl Recorder {
        fn new() -> Recorder {
            // every ASCII character is 500 wide, so 5 units at size 10
            let metrics = FontMetrics::uniform(' '..='~', 500);
            Recorder {
                x: LEFT,
                y: TOP,
                metrics: Some(metrics),
                calls: Vec::new(),
            }
        }
    }

    impl DrawSurface for Recorder {
        fn position(&self) -> (f32, f32) {
            (self.x, self.y)
        }

        fn set_position(&mut self, x: f32, y: f32) {
            self.calls.push(Call::SetPosition(x, y));
            self.x = x;
            self.y = y;
        }

        fn page_break_trigger(&self) -> f32 {
            TRIGGER
        }

        fn remaining_width(&self) -> f32 {
            RIGHT_EDGE - self.x
        }

        fn cell_margin(&self) -> f32 {
            0.0
        }

        fn orientation(&self) -> Orientation {
            Orientation::Portrait
        }

        fn font(&self) -> Result<ActiveFont<'_>, PDFError> {
            self.metrics
                .as_ref()
                .map(|metrics| ActiveFont { metrics, size: 10.0 })
                .ok_or(PDFError::NoFontSelected)
        }

        fn add_page(&mut self, orientation: Orientation) -> Result<(), PDFError> {
            self.calls.push(Call::AddPage(orientation));
            self.x = LEFT;
            self.y = TOP;
            Ok(())
        }

        fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) -> Result<(), PDFError> {
            self.calls.push(Call::Rect(x, y, w, h));
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
            assert!(!border, "rows draw their own borders");
            self.calls
                .push(Call::MultiCell(w, line_height, text.to_string(), align));
            self.x = LEFT;
            Ok(())
        }

        fn ln(&mut self, h: f32) {
            self.calls.push(Call::Ln(h));
            self.x = LEFT;
            self.y += h;
        }
    }

    fn three_columns() -> Table {
        let mut table = Table::new();
        table.set_widths(vec![40.0, 60.0, 40.0]);
        table
    }

    // 8 characters fit in 40, 12 in 60
    const ONE_LINE: &str = "abc";
    const THREE_LINES: &str = "abcdefghijklmnopqrstuvwxyzabcdefgh";
    const TWO_LINES: &str = "abcdefghijkl";

    #[test]
    fn row_takes_the_height_of_its_tallest_cell() {
        let mut surface = Recorder::new();
        surface.y = 20.0;

        let h = three_columns()
            .row(&mut surface, &[ONE_LINE, THREE_LINES, TWO_LINES])
            .unwrap();

        assert_eq!(h, 15.0);
        assert_eq!(
            surface.calls,
            vec![
                Call::Rect(10.0, 20.0, 40.0, 15.0),
                Call::MultiCell(40.0, 5.0, ONE_LINE.to_string(), Align::Left),
                Call::SetPosition(50.0, 20.0),
                Call::Rect(50.0, 20.0, 60.0, 15.0),
                Call::MultiCell(60.0, 5.0, THREE_LINES.to_string(), Align::Left),
                Call::SetPosition(110.0, 20.0),
                Call::Rect(110.0, 20.0, 40.0, 15.0),
                Call::MultiCell(40.0, 5.0, TWO_LINES.to_string(), Align::Left),
                Call::SetPosition(150.0, 20.0),
                Call::Ln(15.0),
            ]
        );
        assert_eq!(surface.position(), (LEFT, 35.0));
    }

    #[test]
    fn rows_that_do_not_fit_move_to_a_new_page_before_drawing() {
        let mut surface = Recorder::new();
        surface.y = 280.0;

        three_columns()
            .row(&mut surface, &[ONE_LINE, THREE_LINES, TWO_LINES])
            .unwrap();

        assert_eq!(surface.calls[0], Call::AddPage(Orientation::Portrait));
        assert_eq!(surface.calls[1], Call::Rect(LEFT, TOP, 40.0, 15.0));
        assert_eq!(
            surface
                .calls
                .iter()
                .filter(|call| matches!(call, Call::AddPage(_)))
                .count(),
            1
        );
        assert_eq!(surface.position(), (LEFT, TOP + 15.0));
    }

    #[test]
    fn rows_ending_exactly_at_the_trigger_stay_on_the_page() {
        let mut surface = Recorder::new();
        surface.y = TRIGGER - 5.0;

        three_columns().row(&mut surface, &["a", "b", "c"]).unwrap();
        assert_eq!(surface.calls[0], Call::Rect(LEFT, TRIGGER - 5.0, 40.0, 5.0));
    }

    #[test]
    fn missing_font_fails_before_drawing() {
        let mut surface = Recorder::new();
        surface.metrics = None;

        let result = three_columns().row(&mut surface, &["a", "b", "c"]);
        assert!(matches!(result, Err(PDFError::NoFontSelected)));
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn undefined_characters_fail_before_drawing() {
        let mut surface = Recorder::new();

        let result = three_columns().row(&mut surface, &["a", "caf\u{e9}", "c"]);
        assert!(matches!(
            result,
            Err(PDFError::UndefinedCharacterWidth { ch: '\u{e9}' })
        ));
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn more_cells_than_widths_fail_before_drawing() {
        let mut surface = Recorder::new();

        let result = three_columns().row(&mut surface, &["a", "b", "c", "d"]);
        assert!(matches!(
            result,
            Err(PDFError::MissingColumnWidth { column: 3 })
        ));
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn unset_alignments_default_to_left() {
        let mut surface = Recorder::new();
        let mut table = three_columns();
        table.set_aligns(vec![Align::Right, Align::Center]);

        table.row(&mut surface, &["a", "b", "c"]).unwrap();
        let aligns: Vec<Align> = surface
            .calls
            .iter()
            .filter_map(|call| match call {
                Call::MultiCell(_, _, _, align) => Some(*align),
                _ => None,
            })
            .collect();
        assert_eq!(aligns, vec![Align::Right, Align::Center, Align::Left]);
    }

    #[test]
    fn zero_width_columns_stretch_to_the_right_margin() {
        let mut surface = Recorder::new();
        let mut table = Table::new();
        table.set_widths(vec![30.0, 0.0]);

        table.row(&mut surface, &["a", "b"]).unwrap();
        assert_eq!(surface.calls[3], Call::Rect(40.0, TOP, 160.0, 5.0));
    }

    #[test]
    fn line_height_is_configurable() {
        let mut surface = Recorder::new();
        assert_eq!(three_columns().line_height(), DEFAULT_LINE_HEIGHT);
        let table = three_columns().with_line_height(4.0);
        assert_eq!(table.line_height(), 4.0);
        assert_eq!(table.widths(), &[40.0, 60.0, 40.0]);

        let h = table
            .row(&mut surface, &[ONE_LINE, THREE_LINES, TWO_LINES])
            .unwrap();
        assert_eq!(h, 12.0);
        assert_eq!(
            surface.calls[1],
            Call::MultiCell(40.0, 4.0, ONE_LINE.to_string(), Align::Left)
        );
    }

    #[test]
    fn explicit_newlines_grow_the_row() {
        let mut surface = Recorder::new();

        let h = three_columns()
            .row(&mut surface, &["a\nb\nc\nd", "", ""])
            .unwrap();
        assert_eq!(h, 20.0);
    }
}
