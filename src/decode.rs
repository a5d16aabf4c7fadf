//! Pixel decoding and 24-bit color packing
//!
//! Opens a raster asset, picks its first frame, normalizes it to 8-bit RGB
//! and packs every pixel as `(R << 16) | (G << 8) | B` in row-major order.

use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, ColorType, DynamicImage, ImageFormat, RgbImage};
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Seek};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::scan::RasterAsset;

/// Frame selected from every asset, including animated ones.
pub const PRIMARY_FRAME: usize = 0;

/// What went wrong while decoding an asset.
#[derive(Debug, Error)]
pub enum DecodeErrorKind {
    /// The file could not be opened or read
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// The image data is corrupt or in an unsupported encoding
    #[error("{0}")]
    Image(#[from] image::ImageError),
    /// The container has no frame at the requested index
    #[error("no frame at index {0}")]
    MissingFrame(usize),
}

/// Failure to decode a single asset.
#[derive(Debug, Error)]
#[error("Error opening '{}': {kind}", path.display())]
pub struct DecodeError {
    /// Asset that failed
    pub path: PathBuf,
    /// Underlying cause
    #[source]
    pub kind: DecodeErrorKind,
}

impl DecodeError {
    fn new(path: &Path, kind: impl Into<DecodeErrorKind>) -> Self {
        Self { path: path.to_path_buf(), kind: kind.into() }
    }
}

/// A decoder that can produce individual frames of an image.
///
/// Still images have exactly one frame. Multi-frame containers expose each
/// frame composited onto the full canvas.
pub trait FrameSource {
    /// Decode the frame at `index`.
    fn decode_frame(self, index: usize) -> Result<DynamicImage, DecodeErrorKind>;
}

/// Single-frame source backed by the format-sniffing reader.
pub struct StillSource<R: BufRead + Seek> {
    reader: image::io::Reader<R>,
}

impl<R: BufRead + Seek> FrameSource for StillSource<R> {
    fn decode_frame(self, index: usize) -> Result<DynamicImage, DecodeErrorKind> {
        if index != 0 {
            return Err(DecodeErrorKind::MissingFrame(index));
        }
        Ok(self.reader.decode()?)
    }
}

/// Multi-frame source backed by an animation decoder.
pub struct AnimatedSource<D> {
    decoder: D,
}

impl<'a, D: AnimationDecoder<'a>> FrameSource for AnimatedSource<D> {
    fn decode_frame(self, index: usize) -> Result<DynamicImage, DecodeErrorKind> {
        let frame = self
            .decoder
            .into_frames()
            .nth(index)
            .ok_or(DecodeErrorKind::MissingFrame(index))??;
        Ok(DynamicImage::ImageRgba8(frame.into_buffer()))
    }
}

/// Row-major matrix of packed 24-bit colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedColorMatrix {
    width: u32,
    height: u32,
    values: Vec<u32>,
}

impl PackedColorMatrix {
    /// Pack an RGB image pixel by pixel.
    pub fn from_rgb(image: &RgbImage) -> Self {
        let (width, height) = image.dimensions();
        let values = image.pixels().map(|p| pack_rgb(p[0], p[1], p[2])).collect();
        Self { width, height, values }
    }

    /// Wrap already-packed values; `None` if the count is not `width * height`
    /// or a value does not fit in 24 bits.
    pub fn from_values(width: u32, height: u32, values: Vec<u32>) -> Option<Self> {
        let expected = width as usize * height as usize;
        if values.len() != expected || values.iter().any(|&v| v > 0xFF_FFFF) {
            return None;
        }
        Some(Self { width, height, values })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// All values in row-major order.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        let width = self.width as usize;
        (0..self.height as usize).map(move |y| &self.values[y * width..(y + 1) * width])
    }
}

/// Pack one RGB pixel as `0xRRGGBB`.
pub fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
}

/// The result of decoding one asset.
#[derive(Debug, Clone)]
pub struct DecodedAsset {
    /// Color type of the source frame before normalization
    pub source_color: ColorType,
    /// Packed pixels; dimensions match the source frame
    pub pixels: PackedColorMatrix,
}

impl DecodedAsset {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

/// Decode the first frame of a dynamic image into packed colors.
pub fn pack_image(image: &DynamicImage) -> DecodedAsset {
    DecodedAsset { source_color: image.color(), pixels: PackedColorMatrix::from_rgb(&image.to_rgb8()) }
}

/// Decode an asset from disk.
///
/// The format is sniffed from the file content and falls back to the one
/// implied by the extension.
pub fn decode_asset(asset: &RasterAsset) -> Result<DecodedAsset, DecodeError> {
    let decoded = pack_image(&decode_first_frame(asset)?);

    tracing::debug!(
        asset = %asset.path.display(),
        width = decoded.width(),
        height = decoded.height(),
        color = ?decoded.source_color,
        "decoded asset"
    );
    Ok(decoded)
}

/// Open an asset and decode its first frame without normalizing it.
pub fn decode_first_frame(asset: &RasterAsset) -> Result<DynamicImage, DecodeError> {
    let file = File::open(&asset.path).map_err(|e| DecodeError::new(&asset.path, e))?;
    read_first_frame(BufReader::new(file), Some(asset.format.image_format()))
        .map_err(|kind| DecodeError::new(&asset.path, kind))
}

/// Decode image data from any seekable reader into packed colors.
pub fn decode_reader<R: BufRead + Seek>(
    reader: R,
    fallback: Option<ImageFormat>,
) -> Result<DecodedAsset, DecodeErrorKind> {
    Ok(pack_image(&read_first_frame(reader, fallback)?))
}

fn read_first_frame<R: BufRead + Seek>(
    reader: R,
    fallback: Option<ImageFormat>,
) -> Result<DynamicImage, DecodeErrorKind> {
    let mut reader = image::io::Reader::new(reader).with_guessed_format()?;
    if reader.format().is_none() {
        if let Some(format) = fallback {
            reader.set_format(format);
        }
    }

    match reader.format() {
        Some(ImageFormat::Gif) => open_animated(reader.into_inner())?.decode_frame(PRIMARY_FRAME),
        _ => StillSource { reader }.decode_frame(PRIMARY_FRAME),
    }
}

fn open_animated<R: Read>(reader: R) -> Result<AnimatedSource<GifDecoder<R>>, DecodeErrorKind> {
    Ok(AnimatedSource { decoder: GifDecoder::new(reader)? })
}
