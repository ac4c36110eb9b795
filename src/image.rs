use crate::refs::{ObjectReferences, RefType};
use crate::PDFError;
use image::{ColorType, GenericImageView, ImageFormat};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Pdf};
use std::path::{Path, PathBuf};

/// The image formats that can be embedded
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Png,
    Gif,
}

impl ImageKind {
    fn format(self) -> ImageFormat {
        match self {
            ImageKind::Jpeg => ImageFormat::Jpeg,
            ImageKind::Png => ImageFormat::Png,
            ImageKind::Gif => ImageFormat::Gif,
        }
    }
}

/// What is known about an image before its pixels are decoded
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    /// width in pixels
    pub width: u32,
    /// height in pixels
    pub height: u32,
    pub kind: ImageKind,
}

/// An image file on disk. Only the file header is read when the image is created;
/// the pixels are read, decoded, and compressed when the document is written.
pub struct Image {
    pub path: PathBuf,
    pub info: ImageInfo,
}

struct EncodeOutput {
    filter: Filter,
    bytes: Vec<u8>,
    mask: Option<Vec<u8>>,
}

impl Image {
    /// Reads just enough of the file at `path` to learn its format and dimensions
    pub fn probe<P: AsRef<Path>>(path: P) -> Result<Image, PDFError> {
        let path = path.as_ref();
        let reader = image::io::Reader::open(path)?.with_guessed_format()?;

        let kind = match reader.format() {
            Some(ImageFormat::Jpeg) => ImageKind::Jpeg,
            Some(ImageFormat::Png) => ImageKind::Png,
            Some(ImageFormat::Gif) => ImageKind::Gif,
            other => {
                return Err(PDFError::UnsupportedImage {
                    path: path.to_owned(),
                    format: other
                        .map(|format| format!("{format:?}"))
                        .unwrap_or_else(|| "unknown".to_string()),
                })
            }
        };
        let (width, height) = reader.into_dimensions()?;

        Ok(Image {
            path: path.to_owned(),
            info: ImageInfo {
                width,
                height,
                kind,
            },
        })
    }

    fn encode(&self) -> Result<EncodeOutput, PDFError> {
        let data = std::fs::read(&self.path)?;
        let image = image::load_from_memory_with_format(&data, self.info.kind.format())?;

        if self.info.kind == ImageKind::Jpeg && image.color() == ColorType::Rgb8 {
            // we can embed it directly!
            return Ok(EncodeOutput {
                filter: Filter::DctDecode,
                bytes: data,
                mask: None,
            });
        }

        let level = CompressionLevel::DefaultLevel as u8;
        let mask = image.color().has_alpha().then(|| {
            let alphas: Vec<u8> = image.pixels().map(|p| (p.2).0[3]).collect();
            compress_to_vec_zlib(&alphas, level)
        });
        let bytes = compress_to_vec_zlib(image.to_rgb8().as_raw(), level);

        Ok(EncodeOutput {
            filter: Filter::FlateDecode,
            bytes,
            mask,
        })
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        image_index: usize,
        writer: &mut Pdf,
    ) -> Result<(), PDFError> {
        let id = refs.gen(RefType::Image(image_index));
        let encoded = self.encode()?;
        log::debug!(
            "embedding {} ({} bytes, {:?})",
            self.path.display(),
            encoded.bytes.len(),
            self.info.kind
        );

        let mut image = writer.image_xobject(id, encoded.bytes.as_slice());
        image.filter(encoded.filter);
        image.width(self.info.width as i32);
        image.height(self.info.height as i32);
        image.color_space().device_rgb();
        image.bits_per_component(8);

        let mask_id = encoded
            .mask
            .as_ref()
            .map(|_| refs.gen(RefType::ImageMask(image_index)));
        if let Some(mask_id) = mask_id {
            image.s_mask(mask_id);
        }
        image.finish();

        // add a transparency mask if we have one
        if let (Some(mask_id), Some(mask)) = (mask_id, encoded.mask.as_ref()) {
            let mut s_mask = writer.image_xobject(mask_id, mask.as_slice());
            s_mask.filter(Filter::FlateDecode);
            s_mask.width(self.info.width as i32);
            s_mask.height(self.info.height as i32);
            s_mask.color_space().device_gray();
            s_mask.bits_per_component(8);
        }

        Ok(())
    }
}
