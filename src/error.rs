use std::path::PathBuf;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum PDFError {
    #[error("no font has been selected")]
    /// Text was measured or drawn before a font was selected on the canvas
    NoFontSelected,

    #[error("the current font has no width for {ch:?}")]
    /// A character in the text is not covered by the active font's metrics
    UndefinedCharacterWidth { ch: char },

    #[error("no width configured for column {column}")]
    /// A row has more cells than the table has column widths
    MissingColumnWidth { column: usize },

    #[error("font size must be positive, got {size}")]
    /// A font was selected at a size of zero, below zero, or NaN
    InvalidFontSize { size: f32 },

    #[error("font is not part of this document")]
    FontMissing,

    #[error("page is not part of this document")]
    PageMissing,

    #[error("unsupported image type {format} in {}", .path.display())]
    /// Only JPEG, PNG, and GIF images can be embedded
    UnsupportedImage { path: PathBuf, format: String },

    #[error("unable to create output file {}", .path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no output file has been opened")]
    NoOutput,

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [image] failed to probe or decode the image
    Image(#[from] image::ImageError),
}
