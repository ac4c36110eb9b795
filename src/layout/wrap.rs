use crate::metrics::FontMetrics;
use crate::PDFError;
use std::ops::Range;

/// Estimates how many lines `text` wraps into when written inside a cell that is
/// `width` wide.
///
/// All lengths (`width`, `font_size`, `cell_margin`, `page_width_fallback`) must be
/// in the same unit; character widths come from `metrics` in 1/1000 em. A `width`
/// of `0.0` means "the rest of the line", in which case `page_width_fallback` is
/// used instead (typically the distance from the cursor to the right margin).
///
/// # Wrapping Behavior
///
/// Text is scanned once, greedily:
///
/// 1. **Newlines** always end the current line, including a trailing one, so text
///    with `n` newlines never takes fewer than `n + 1` lines. Carriage returns are
///    ignored entirely.
/// 2. **Spaces** are remembered as break points. When a line overflows, it is cut
///    after the most recent space and the following word starts the next line.
/// 3. **Long words** without any space since the start of the line are broken
///    between characters. A single character wider than the cell still gets a line
///    to itself, so the scan always makes progress.
///
/// Empty text occupies one line.
///
/// # Errors
///
/// [`PDFError::UndefinedCharacterWidth`] if `metrics` has no width for a character.
pub fn estimate_line_count(
    width: f32,
    text: &str,
    metrics: &FontMetrics,
    font_size: f32,
    cell_margin: f32,
    page_width_fallback: f32,
) -> Result<usize, PDFError> {
    let chars = strip_carriage_returns(text);
    let wmax = width_budget(width, font_size, cell_margin, page_width_fallback);
    scan(&chars, metrics, wmax, |_| {})
}

/// Splits `text` into the lines [`estimate_line_count`] counts, using the same rules.
/// The returned vector always has exactly as many entries as
/// [`estimate_line_count`] reports for the same arguments.
///
/// A line broken at a space does not include that space.
pub fn split_lines(
    width: f32,
    text: &str,
    metrics: &FontMetrics,
    font_size: f32,
    cell_margin: f32,
    page_width_fallback: f32,
) -> Result<Vec<String>, PDFError> {
    let chars = strip_carriage_returns(text);
    let wmax = width_budget(width, font_size, cell_margin, page_width_fallback);

    let mut lines: Vec<String> = Vec::new();
    scan(&chars, metrics, wmax, |range| {
        lines.push(chars[range].iter().collect())
    })?;
    Ok(lines)
}

/// Calculate the width of a given string of text, in the same unit as `font_size`.
/// Newlines are not measured.
pub fn text_width(text: &str, metrics: &FontMetrics, font_size: f32) -> Result<f32, PDFError> {
    let mut units: u32 = 0;
    for ch in text.chars().filter(|&ch| ch != '\n' && ch != '\r') {
        units += metrics.require(ch)? as u32;
    }
    Ok(units as f32 * font_size / 1000.0)
}

fn strip_carriage_returns(text: &str) -> Vec<char> {
    text.chars().filter(|&ch| ch != '\r').collect()
}

/// usable width of the cell, in 1/1000 em
fn width_budget(width: f32, font_size: f32, cell_margin: f32, page_width_fallback: f32) -> f32 {
    let width = if width == 0.0 {
        page_width_fallback
    } else {
        width
    };
    (width - 2.0 * cell_margin) * 1000.0 / font_size
}

/// Walks `chars` once, calling `emit` with the range of every finished line, and
/// returns the number of lines
fn scan<F: FnMut(Range<usize>)>(
    chars: &[char],
    metrics: &FontMetrics,
    wmax: f32,
    mut emit: F,
) -> Result<usize, PDFError> {
    // last space seen since the start of the line
    let mut sep: Option<usize> = None;
    let mut i = 0usize;
    let mut j = 0usize;
    let mut l: u32 = 0;
    let mut nl = 1usize;

    while i < chars.len() {
        let c = chars[i];
        if c == '\n' {
            emit(j..i);
            i += 1;
            sep = None;
            j = i;
            l = 0;
            nl += 1;
            continue;
        }

        if c == ' ' {
            sep = Some(i);
        }
        l += metrics.require(c)? as u32;

        if l as f32 > wmax {
            match sep {
                Some(space) => {
                    emit(j..space);
                    i = space + 1;
                }
                None => {
                    // a lone character wider than the cell still has to go somewhere
                    if i == j {
                        i += 1;
                    }
                    emit(j..i);
                }
            }
            sep = None;
            j = i;
            l = 0;
            nl += 1;
        } else {
            i += 1;
        }
    }
    emit(j..chars.len());

    Ok(nl)
}
