//! Rotate-then-crop image transform engine.
//!
//! # Pipeline
//!
//! 1. Decode the source into a `W x H` raster
//! 2. Acquire a square working canvas of side `S` (see [`working_canvas_side`])
//! 3. Draw the source centred on the canvas, rotated clockwise about the centre
//! 4. Read back the whole canvas
//! 5. Acquire an output surface sized to the crop
//! 6. Paste the canvas data at [`paste_offset`] so the crop lands at the origin
//! 7. Encode (JPEG quality 95 unless configured otherwise)
//!
//! # Coordinate System
//!
//! - Rotation angles are in degrees, positive = clockwise
//! - Crop coordinates are whole pixels in the rotated image's space
//! - Origin is the top-left corner

mod canvas;
mod crop;
mod rotation;

use tracing::{debug, info, warn};

use crate::config::{SurfaceLimits, TransformConfig};
use crate::decode::{decode_image, DecodedImage, ImageSource};
use crate::encode::{encode_image, EncodedImage};
use crate::error::TransformError;

pub use canvas::{Canvas, RenderContextError};
pub use crop::{paste_offset, CropRegion};
pub use rotation::{rotated_bounds, working_canvas_side};

/// Decode `source`, rotate it by `rotation_degrees` and crop, returning a
/// JPEG at quality 95 under the default surface limits.
///
/// Use [`transform_with_config`] for PNG output, another JPEG quality or
/// different limits.
pub fn transform(
    source: &ImageSource,
    crop: CropRegion,
    rotation_degrees: f64,
) -> Result<EncodedImage, TransformError> {
    transform_with_config(source, crop, rotation_degrees, &TransformConfig::default())
}

/// [`transform`] with explicit output format and surface limits.
pub fn transform_with_config(
    source: &ImageSource,
    crop: CropRegion,
    rotation_degrees: f64,
    config: &TransformConfig,
) -> Result<EncodedImage, TransformError> {
    let result = run_pipeline(source, crop, rotation_degrees, config);
    if let Err(err) = &result {
        warn!(error = %err, "image transform failed");
    }
    result
}

fn run_pipeline(
    source: &ImageSource,
    crop: CropRegion,
    rotation_degrees: f64,
    config: &TransformConfig,
) -> Result<EncodedImage, TransformError> {
    let image = decode_image(source)?;
    let raster = render_transform(&image, &crop, rotation_degrees, &config.limits)?;
    let encoded = encode_image(&raster, config.output)?;

    info!(
        width = encoded.width,
        height = encoded.height,
        bytes = encoded.bytes.len(),
        mime = encoded.mime_type(),
        "image transform complete"
    );
    Ok(encoded)
}

/// Rotate and crop an already decoded image, returning the output raster.
///
/// An empty crop yields an empty raster; encoding it fails with
/// `EncodeError::InvalidDimensions`.
pub fn render_transform(
    image: &DecodedImage,
    crop: &CropRegion,
    rotation_degrees: f64,
    limits: &SurfaceLimits,
) -> Result<DecodedImage, RenderContextError> {
    if crop.is_empty() {
        return Ok(DecodedImage::transparent(crop.width, crop.height));
    }

    let side = working_canvas_side(image.width, image.height);
    debug!(
        source_width = image.width,
        source_height = image.height,
        canvas_side = side,
        rotation_degrees,
        "rendering onto working canvas"
    );

    let mut working = Canvas::new(side, side, limits)?;
    working.draw_rotated(image, rotation_degrees);
    let data = working.read_pixels(0, 0, working.width(), working.height());
    drop(working);

    let mut output = Canvas::new(crop.width as u64, crop.height as u64, limits)?;
    let (dx, dy) = paste_offset(side, image.width, image.height, crop);
    debug!(?crop, dx, dy, "pasting canvas into crop surface");
    output.put_pixels(&data, dx, dy);

    Ok(output.into_image())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::DecodeError;
    use crate::encode::{EncodeError, OutputFormat};
    use image::{DynamicImage, ImageFormat, RgbaImage};
    use std::io::Cursor;

    /// Opaque test image where each pixel encodes its own position.
    fn test_image(width: u32, height: u32) -> DecodedImage {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&[(x % 256) as u8, (y % 256) as u8, 7, 255]);
            }
        }
        DecodedImage::new(width, height, pixels)
    }

    fn png_source(image: &DecodedImage) -> ImageSource {
        let rgba = RgbaImage::from_raw(image.width, image.height, image.pixels.clone()).unwrap();
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(rgba)
            .write_to(&mut buf, ImageFormat::Png)
            .unwrap();
        ImageSource::Bytes(buf.into_inner())
    }

    #[test]
    fn test_unrotated_full_crop_is_identity() {
        let img = test_image(40, 30);
        let limits = SurfaceLimits::default();
        let out = render_transform(&img, &CropRegion::full(40, 30), 0.0, &limits).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn test_unrotated_crop_picks_region() {
        let img = test_image(40, 30);
        let crop = CropRegion::new(10, 5, 8, 6);
        let out = render_transform(&img, &crop, 0.0, &SurfaceLimits::default()).unwrap();

        assert_eq!((out.width, out.height), (8, 6));
        assert_eq!(out.pixel(0, 0), img.pixel(10, 5));
        assert_eq!(out.pixel(7, 5), img.pixel(17, 10));
    }

    #[test]
    fn test_crop_past_image_is_transparent() {
        let img = test_image(10, 10);
        let crop = CropRegion::new(8, 0, 4, 2);
        let out = render_transform(&img, &crop, 0.0, &SurfaceLimits::default()).unwrap();

        assert_eq!(out.pixel(1, 0), img.pixel(9, 0));
        assert_eq!(out.pixel(2, 0)[3], 0);
    }

    #[test]
    fn test_rotated_90_output_dimensions() {
        let img = test_image(400, 300);
        let crop = CropRegion::new(0, 0, 300, 400);
        let out = render_transform(&img, &crop, 90.0, &SurfaceLimits::default()).unwrap();
        assert_eq!((out.width, out.height), (300, 400));
    }

    #[test]
    fn test_full_turn_matches_unrotated() {
        let img = test_image(20, 12);
        let crop = CropRegion::full(20, 12);
        let limits = SurfaceLimits::default();

        let a = render_transform(&img, &crop, 0.0, &limits).unwrap();
        let b = render_transform(&img, &crop, 360.0, &limits).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_does_not_mutate_source() {
        let img = test_image(16, 16);
        let before = img.clone();
        render_transform(&img, &CropRegion::full(16, 16), 37.0, &SurfaceLimits::default()).unwrap();
        assert_eq!(img, before);
    }

    #[test]
    fn test_empty_crop_yields_empty_raster() {
        let img = test_image(8, 8);
        let crop = CropRegion::new(0, 0, 0, 5);
        let out = render_transform(&img, &crop, 0.0, &SurfaceLimits::default()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_working_canvas_over_limit() {
        let img = test_image(100, 100);
        let limits = SurfaceLimits {
            max_side: 120,
            max_area: u64::MAX,
        };
        let result = render_transform(&img, &CropRegion::full(10, 10), 0.0, &limits);
        assert!(matches!(result, Err(RenderContextError::SideTooLarge { width: 142, .. })));
    }

    #[test]
    fn test_output_surface_over_limit() {
        let img = test_image(10, 10);
        let limits = SurfaceLimits {
            max_side: 64,
            max_area: u64::MAX,
        };
        let result = render_transform(&img, &CropRegion::full(100, 10), 0.0, &limits);
        assert!(matches!(result, Err(RenderContextError::SideTooLarge { width: 100, .. })));
    }

    #[test]
    fn test_transform_scenario_400x300_rotated_90() {
        let source = png_source(&test_image(400, 300));
        let encoded = transform(&source, CropRegion::new(0, 0, 300, 400), 90.0).unwrap();

        assert_eq!((encoded.width, encoded.height), (300, 400));
        assert_eq!(encoded.mime_type(), "image/jpeg");

        let decoded = image::load_from_memory(&encoded.bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (300, 400));
    }

    #[test]
    fn test_transform_png_output_keeps_pixels() {
        let img = test_image(12, 10);
        let config = TransformConfig::new().with_output(OutputFormat::Png);
        let encoded =
            transform_with_config(&png_source(&img), CropRegion::new(2, 3, 4, 4), 0.0, &config)
                .unwrap();

        let decoded = image::load_from_memory(&encoded.bytes).unwrap().into_rgba8();
        assert_eq!(decoded.get_pixel(0, 0).0, img.pixel(2, 3));
    }

    #[test]
    fn test_transform_defaults_to_jpeg_95() {
        let source = png_source(&test_image(16, 12));
        let crop = CropRegion::full(16, 12);
        let config = TransformConfig::new().with_output(OutputFormat::Jpeg { quality: 95 });

        let default = transform(&source, crop, 0.0).unwrap();
        let explicit = transform_with_config(&source, crop, 0.0, &config).unwrap();
        assert_eq!(default.format, OutputFormat::Jpeg { quality: 95 });
        assert_eq!(default, explicit);
    }

    #[test]
    fn test_transform_is_deterministic() {
        let source = png_source(&test_image(30, 20));
        let crop = CropRegion::new(3, 4, 20, 15);

        let a = transform(&source, crop, 17.5).unwrap();
        let b = transform(&source, crop, 17.5).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_transform_decode_failure() {
        let result = transform(&ImageSource::Bytes(vec![1, 2, 3]), CropRegion::full(1, 1), 0.0);
        assert!(matches!(result, Err(TransformError::Decode(DecodeError::InvalidFormat))));
    }

    #[test]
    fn test_transform_empty_crop_is_encode_error() {
        let source = png_source(&test_image(8, 8));
        let result = transform(&source, CropRegion::new(0, 0, 0, 0), 0.0);
        assert!(matches!(
            result,
            Err(TransformError::Encode(EncodeError::InvalidDimensions { .. }))
        ));
    }

    #[test]
    fn test_transform_render_failure() {
        let source = png_source(&test_image(50, 50));
        let config = TransformConfig::new().with_limits(SurfaceLimits {
            max_side: 16_384,
            max_area: 100,
        });
        let result = transform_with_config(&source, CropRegion::full(5, 5), 0.0, &config);
        assert!(matches!(result, Err(TransformError::RenderContext(_))));
    }
}
