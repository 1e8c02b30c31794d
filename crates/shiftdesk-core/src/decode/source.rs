//! Image decoding with EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageReader};
use tracing::debug;

use super::{DecodeError, DecodedImage, ImageSource, Orientation};

/// Resolve and decode an image source into an RGBA raster.
///
/// EXIF orientation is applied so the raster matches what a browser draws
/// for the same file.
///
/// # Errors
///
/// - `DecodeError::Unreachable` if a path source cannot be read
/// - `DecodeError::InvalidFormat` if the bytes are empty or not a known format
/// - `DecodeError::CorruptedFile` if the codec rejects the data
/// - `DecodeError::EmptyImage` if the decoded raster has no pixels
pub fn decode_image(source: &ImageSource) -> Result<DecodedImage, DecodeError> {
    match source {
        ImageSource::Bytes(bytes) => decode_bytes(bytes),
        ImageSource::Path(path) => {
            let bytes = std::fs::read(path)
                .map_err(|e| DecodeError::Unreachable(format!("{}: {}", path.display(), e)))?;
            decode_bytes(&bytes)
        }
    }
}

/// Decode encoded image bytes into an RGBA raster.
pub fn decode_bytes(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::InvalidFormat);
    }

    let orientation = extract_orientation(bytes);

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;
    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let rgba = apply_orientation(img, orientation).into_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(DecodeError::EmptyImage { width, height });
    }

    debug!(width, height, ?orientation, "decoded source image");
    Ok(DecodedImage::from_rgba_image(rgba))
}

/// Extract EXIF orientation from encoded bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is found.
pub fn get_orientation(bytes: &[u8]) -> Orientation {
    extract_orientation(bytes)
}

fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);

    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(_) => Orientation::Normal,
    }
}

fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}
