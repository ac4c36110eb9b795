//! Pre-defined page sizes for common paper formats.
//!
//! All sizes are provided in portrait orientation (width, height) where width ≤ height.
//! Use [`Orientation::apply`](crate::pagesize::Orientation::apply) to get the size of a
//! page in either orientation.
//!
//! # Example
//!
//! ```
//! use pdf_rows::pagesize::{Orientation, A4};
//!
//! let (width, height) = Orientation::Landscape.apply(A4);
//! assert!(width > height);
//! ```

use crate::units::*;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

// north american sizes
pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));
pub const LEGAL: PageSize = (Pt(8.5 * 72.0), Pt(14.0 * 72.0));

// iso a-series (converted from mm to points)
pub const A3: PageSize = (Pt(297.0 * 72.0 / 25.4), Pt(420.0 * 72.0 / 25.4));
pub const A4: PageSize = (Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));
pub const A5: PageSize = (Pt(148.0 * 72.0 / 25.4), Pt(210.0 * 72.0 / 25.4));

/// Whether a page is taller than it is wide or the other way around
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Returns `size` turned to this orientation
    pub fn apply(self, size: PageSize) -> PageSize {
        let (short, long) = if size.0 <= size.1 {
            (size.0, size.1)
        } else {
            (size.1, size.0)
        };
        match self {
            Orientation::Portrait => (short, long),
            Orientation::Landscape => (long, short),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_swaps_sides() {
        assert_eq!(Orientation::Portrait.apply(A4), A4);
        assert_eq!(Orientation::Landscape.apply(A4), (A4.1, A4.0));
        assert_eq!(Orientation::Portrait.apply((A4.1, A4.0)), A4);
    }
}
