use crate::units::{Mm, Pt};

/// Margins are the guidelines a [`Canvas`](crate::Canvas) lays content out within.
/// Nothing prevents drawing outside of them, but the cursor starts at the top-left
/// margin of every page, [`DrawSurface::ln`](crate::DrawSurface::ln) returns to the
/// left margin, and a page break is triggered when content would cross the bottom
/// margin.
#[derive(Debug, Clone, PartialEq)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Default for Margins {
    /// 1 cm at the top and sides, and a 2 cm zone at the bottom that triggers
    /// page breaks
    fn default() -> Self {
        let side: Pt = Mm(10.0).into();
        Margins {
            top: side,
            right: side,
            bottom: Mm(20.0).into(),
            left: side,
        }
    }
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Pt, right: Pt, bottom: Pt, left: Pt) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins::trbl(value, value, value, value)
    }

    /// Create margins by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) margins
    pub fn symmetric<D: Into<Pt>>(vertical: D, horizontal: D) -> Margins {
        let (vertical, horizontal): (Pt, Pt) = (vertical.into(), horizontal.into());
        Margins::trbl(vertical, horizontal, vertical, horizontal)
    }

    /// Create margins where all values are 0.0
    pub fn empty() -> Margins {
        Margins::all(Pt(0.0))
    }
}
