//! Fixed-width tables for PDF documents, one wrapped row at a time.
//!
//! A [`Table`] holds the column widths and alignments. Each call to [`Table::row`] measures
//! how many lines every cell needs with [`layout::estimate_line_count`], gives the whole
//! row the height of its tallest cell, starts a new page when the row would cross the
//! bottom margin, and then draws the framed cells side by side.
//!
//! Rows are drawn on anything implementing [`DrawSurface`]. The [`Canvas`] provided here
//! is a cursor-based PDF builder with the builtin Helvetica and Courier fonts, embedded
//! TrueType fonts, and JPEG, PNG, and GIF images.
//!
//! ```
//! use pdf_rows::{Align, BuiltinFont, Canvas, CanvasConfig, Font, Table};
//!
//! let mut canvas = Canvas::new(CanvasConfig::default());
//! let helvetica = canvas.add_font(Font::builtin(BuiltinFont::Helvetica));
//! canvas.set_font(helvetica, 10.0).unwrap();
//! canvas.new_page();
//!
//! let mut table = Table::new();
//! table
//!     .set_widths(vec![30.0, 60.0, 30.0])
//!     .set_aligns(vec![Align::Left, Align::Left, Align::Right]);
//! let cells = ["1", "A description long enough to wrap onto a second line", "9.99"];
//! let height = table.row(&mut canvas, &cells).unwrap();
//! assert_eq!(height, 10.0);
//!
//! let mut pdf = Vec::new();
//! canvas.output(&mut pdf).unwrap();
//! assert!(pdf.starts_with(b"%PDF"));
//! ```

mod canvas;
pub use canvas::*;

mod colour;
pub use colour::*;

pub(crate) mod content;

mod document;
pub use document::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod image;
pub use self::image::*;

mod info;
pub use info::*;

/// Text measurement and line wrapping
pub mod layout;

mod metrics;
pub use metrics::*;

mod page;
pub use page::*;

pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod surface;
pub use surface::*;

mod table;
pub use table::*;

mod units;
pub use units::*;

/// Re-export PDF-writer functionality, mostly for custom [pdf_writer::Content] generation
pub use pdf_writer;
