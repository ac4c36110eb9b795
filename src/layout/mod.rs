//! Measuring text and placing content inside the printable area of a page.
//!
//! The centrepiece is [`estimate_line_count`](crate::layout::estimate_line_count),
//! which tells how many lines a string needs inside a cell of a given width. The
//! [`Table`](crate::Table) row renderer uses it to give every cell of a row the same
//! height, and [`split_lines`](crate::layout::split_lines) produces the matching
//! lines when the text is actually drawn.
//!
//! # Example
//!
//! ```
//! use pdf_rows::FontMetrics;
//! use pdf_rows::layout::estimate_line_count;
//!
//! let metrics = FontMetrics::uniform("abcdefgh ".chars(), 500);
//!
//! // a 20 unit wide cell at font size 10 fits 4 of these characters per line
//! let lines = estimate_line_count(20.0, "abcd efgh", &metrics, 10.0, 0.0, 0.0).unwrap();
//! assert_eq!(lines, 2);
//! ```

mod margins;
mod wrap;

pub use margins::*;
pub use wrap::*;
