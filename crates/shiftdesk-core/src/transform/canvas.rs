//! A software 2D drawing surface.
//!
//! `Canvas` holds straight-alpha RGBA pixels and offers the three raster
//! operations the transform engine needs:
//!
//! - [`Canvas::draw_rotated`] composites an image rotated about the canvas centre
//! - [`Canvas::read_pixels`] copies a rectangle out (transparent outside)
//! - [`Canvas::put_pixels`] replaces a rectangle, clipped to the surface
//!
//! Allocation is checked against [`SurfaceLimits`] so an oversized request
//! fails with [`RenderContextError`] instead of exhausting memory.

use thiserror::Error;

use crate::config::SurfaceLimits;
use crate::decode::DecodedImage;

use super::rotation::sin_cos_clockwise;

/// The drawing surface could not be acquired.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderContextError {
    #[error("Surface {width}x{height} has no pixels")]
    EmptySurface { width: u64, height: u64 },

    #[error("Surface {width}x{height} exceeds the maximum side of {max}px")]
    SideTooLarge { width: u64, height: u64, max: u32 },

    #[error("Surface {width}x{height} exceeds the maximum area of {max} pixels")]
    AreaTooLarge { width: u64, height: u64, max: u64 },
}

/// Software drawing surface with straight RGBA pixels.
#[derive(Debug, Clone)]
pub struct Canvas {
    surface: DecodedImage,
}

impl Canvas {
    /// Acquire a transparent surface of the given size.
    pub fn new(
        width: u64,
        height: u64,
        limits: &SurfaceLimits,
    ) -> Result<Self, RenderContextError> {
        if width == 0 || height == 0 {
            return Err(RenderContextError::EmptySurface { width, height });
        }
        if width > limits.max_side as u64 || height > limits.max_side as u64 {
            return Err(RenderContextError::SideTooLarge {
                width,
                height,
                max: limits.max_side,
            });
        }
        if width * height > limits.max_area {
            return Err(RenderContextError::AreaTooLarge {
                width,
                height,
                max: limits.max_area,
            });
        }

        Ok(Self {
            surface: DecodedImage::transparent(width as u32, height as u32),
        })
    }

    pub fn width(&self) -> u32 {
        self.surface.width
    }

    pub fn height(&self) -> u32 {
        self.surface.height
    }

    /// Draw `image` centred on the canvas, rotated clockwise by `angle_degrees`
    /// about the canvas centre.
    ///
    /// Equivalent to translating to the centre, rotating, translating back and
    /// drawing at `(cx - w/2, cy - h/2)`. Uses bilinear resampling with
    /// source-over compositing; quarter turns sample pixel centres exactly.
    pub fn draw_rotated(&mut self, image: &DecodedImage, angle_degrees: f64) {
        if image.is_empty() {
            return;
        }

        let (sin, cos) = sin_cos_clockwise(angle_degrees);
        let cx = self.surface.width as f64 / 2.0;
        let cy = self.surface.height as f64 / 2.0;
        let half_w = image.width as f64 / 2.0;
        let half_h = image.height as f64 / 2.0;
        let width = self.surface.width as usize;

        for py in 0..self.surface.height {
            let dy = py as f64 + 0.5 - cy;
            for px in 0..self.surface.width {
                let dx = px as f64 + 0.5 - cx;

                // Inverse of the clockwise rotation, back into image space
                let sx = dx * cos + dy * sin + half_w;
                let sy = -dx * sin + dy * cos + half_h;

                let src = sample_bilinear(image, sx - 0.5, sy - 0.5);
                if src[3] == 0 {
                    continue;
                }

                let idx = (py as usize * width + px as usize) * 4;
                let dst = &mut self.surface.pixels[idx..idx + 4];
                let blended = blend_over(src, [dst[0], dst[1], dst[2], dst[3]]);
                dst.copy_from_slice(&blended);
            }
        }
    }

    /// Copy a rectangle of the surface. Areas outside the surface read as
    /// transparent.
    pub fn read_pixels(&self, x: i64, y: i64, width: u32, height: u32) -> DecodedImage {
        let mut out = DecodedImage::transparent(width, height);
        copy_clipped(&self.surface, &mut out, -x, -y);
        out
    }

    /// Replace surface pixels with `data` placed at `(dx, dy)`. Pixels that
    /// land outside the surface are dropped; no compositing is applied.
    pub fn put_pixels(&mut self, data: &DecodedImage, dx: i64, dy: i64) {
        copy_clipped(data, &mut self.surface, dx, dy);
    }

    /// Consume the canvas, returning its pixels.
    pub fn into_image(self) -> DecodedImage {
        self.surface
    }
}

/// Copy `src` into `dst` with `src`'s origin at `(dx, dy)` in `dst`.
fn copy_clipped(src: &DecodedImage, dst: &mut DecodedImage, dx: i64, dy: i64) {
    let x_start = dx.max(0);
    let x_end = (dx + src.width as i64).min(dst.width as i64);
    let y_start = dy.max(0);
    let y_end = (dy + src.height as i64).min(dst.height as i64);
    if x_start >= x_end || y_start >= y_end {
        return;
    }

    let row_bytes = (x_end - x_start) as usize * 4;
    for y in y_start..y_end {
        let src_x = (x_start - dx) as usize;
        let src_y = (y - dy) as usize;
        let src_idx = (src_y * src.width as usize + src_x) * 4;
        let dst_idx = (y as usize * dst.width as usize + x_start as usize) * 4;
        dst.pixels[dst_idx..dst_idx + row_bytes]
            .copy_from_slice(&src.pixels[src_idx..src_idx + row_bytes]);
    }
}

/// Sample with bilinear interpolation in pixel-index space.
///
/// Texels outside the image count as transparent, which antialiases the
/// rotated edges. Interpolation runs on premultiplied values.
fn sample_bilinear(image: &DecodedImage, x: f64, y: f64) -> [u8; 4] {
    let (w, h) = (image.width as f64, image.height as f64);
    if x <= -1.0 || y <= -1.0 || x >= w || y >= h {
        return [0, 0, 0, 0];
    }

    let x0 = x.floor();
    let y0 = y.floor();
    let fx = x - x0;
    let fy = y - y0;

    let taps = [
        (0, 0, (1.0 - fx) * (1.0 - fy)),
        (1, 0, fx * (1.0 - fy)),
        (0, 1, (1.0 - fx) * fy),
        (1, 1, fx * fy),
    ];

    let mut acc = [0.0f64; 4];
    for (ox, oy, weight) in taps {
        if weight <= 0.0 {
            continue;
        }
        let px = x0 as i64 + ox;
        let py = y0 as i64 + oy;
        if px < 0 || py < 0 || px >= image.width as i64 || py >= image.height as i64 {
            continue;
        }

        let p = image.pixel(px as u32, py as u32);
        let a = p[3] as f64 / 255.0;
        acc[0] += p[0] as f64 * a * weight;
        acc[1] += p[1] as f64 * a * weight;
        acc[2] += p[2] as f64 * a * weight;
        acc[3] += a * weight;
    }

    if acc[3] <= 0.0 {
        return [0, 0, 0, 0];
    }

    [
        (acc[0] / acc[3]).clamp(0.0, 255.0).round() as u8,
        (acc[1] / acc[3]).clamp(0.0, 255.0).round() as u8,
        (acc[2] / acc[3]).clamp(0.0, 255.0).round() as u8,
        (acc[3] * 255.0).clamp(0.0, 255.0).round() as u8,
    ]
}

/// Porter-Duff source-over on straight-alpha pixels.
fn blend_over(src: [u8; 4], dst: [u8; 4]) -> [u8; 4] {
    if src[3] == 255 || dst[3] == 0 {
        return src;
    }

    let sa = src[3] as f64 / 255.0;
    let da = dst[3] as f64 / 255.0;
    let out_a = sa + da * (1.0 - sa);

    let mut out = [0u8; 4];
    for i in 0..3 {
        let c = (src[i] as f64 * sa + dst[i] as f64 * da * (1.0 - sa)) / out_a;
        out[i] = c.clamp(0.0, 255.0).round() as u8;
    }
    out[3] = (out_a * 255.0).round() as u8;
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opaque_image(width: u32, height: u32) -> DecodedImage {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&[(x * 7 % 256) as u8, (y * 11 % 256) as u8, 99, 255]);
            }
        }
        DecodedImage::new(width, height, pixels)
    }

    const RED: [u8; 4] = [255, 0, 0, 255];
    const GREEN: [u8; 4] = [0, 255, 0, 255];

    /// 2x2 image with a red left column and a green right column.
    fn red_green_columns() -> DecodedImage {
        let pixels = [RED, GREEN, RED, GREEN].concat();
        DecodedImage::new(2, 2, pixels)
    }

    #[test]
    fn test_new_canvas_is_transparent() {
        let canvas = Canvas::new(4, 3, &SurfaceLimits::default()).unwrap();
        let img = canvas.into_image();
        assert_eq!((img.width, img.height), (4, 3));
        assert!(img.pixels.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_new_canvas_rejects_empty() {
        let result = Canvas::new(0, 10, &SurfaceLimits::default());
        assert!(matches!(result, Err(RenderContextError::EmptySurface { .. })));
    }

    #[test]
    fn test_new_canvas_rejects_oversized_side() {
        let limits = SurfaceLimits {
            max_side: 64,
            max_area: u64::MAX,
        };
        let result = Canvas::new(65, 10, &limits);
        assert!(matches!(result, Err(RenderContextError::SideTooLarge { max: 64, .. })));
    }

    #[test]
    fn test_new_canvas_rejects_oversized_area() {
        let limits = SurfaceLimits {
            max_side: 1000,
            max_area: 100,
        };
        let result = Canvas::new(20, 20, &limits);
        assert!(matches!(result, Err(RenderContextError::AreaTooLarge { max: 100, .. })));
    }

    #[test]
    fn test_draw_unrotated_is_exact_copy() {
        let img = opaque_image(4, 2);
        let mut canvas = Canvas::new(8, 6, &SurfaceLimits::default()).unwrap();
        canvas.draw_rotated(&img, 0.0);

        // Centred at (8/2 - 4/2, 6/2 - 2/2) = (2, 2)
        let region = canvas.read_pixels(2, 2, 4, 2);
        assert_eq!(region, img);

        let out = canvas.into_image();
        assert_eq!(out.pixel(1, 2)[3], 0);
        assert_eq!(out.pixel(6, 2)[3], 0);
    }

    #[test]
    fn test_draw_quarter_turn_clockwise() {
        let img = red_green_columns();
        let mut canvas = Canvas::new(4, 4, &SurfaceLimits::default()).unwrap();
        canvas.draw_rotated(&img, 90.0);

        // Clockwise quarter turn moves the left column to the top row
        let out = canvas.into_image();
        assert_eq!(out.pixel(1, 1), RED);
        assert_eq!(out.pixel(2, 1), RED);
        assert_eq!(out.pixel(1, 2), GREEN);
        assert_eq!(out.pixel(2, 2), GREEN);
    }

    #[test]
    fn test_draw_half_turn() {
        let img = red_green_columns();
        let mut canvas = Canvas::new(4, 4, &SurfaceLimits::default()).unwrap();
        canvas.draw_rotated(&img, 180.0);

        let out = canvas.into_image();
        assert_eq!(out.pixel(1, 1), GREEN);
        assert_eq!(out.pixel(2, 1), RED);
    }

    #[test]
    fn test_draw_arbitrary_angle_keeps_centre() {
        let img = DecodedImage::new(10, 10, vec![200u8; 10 * 10 * 4]);
        let mut canvas = Canvas::new(16, 16, &SurfaceLimits::default()).unwrap();
        canvas.draw_rotated(&img, 33.0);

        let out = canvas.into_image();
        assert_eq!(out.pixel(8, 8)[3], 200);
        assert_eq!(out.pixel(0, 0)[3], 0);
    }

    #[test]
    fn test_read_pixels_outside_is_transparent() {
        let canvas = Canvas::new(2, 2, &SurfaceLimits::default()).unwrap();
        let region = canvas.read_pixels(-5, -5, 3, 3);
        assert!(region.pixels.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_put_pixels_clips_negative_offset() {
        let data = opaque_image(4, 4);
        let mut canvas = Canvas::new(2, 2, &SurfaceLimits::default()).unwrap();
        canvas.put_pixels(&data, -1, -2);

        let out = canvas.into_image();
        assert_eq!(out.pixel(0, 0), data.pixel(1, 2));
        assert_eq!(out.pixel(1, 1), data.pixel(2, 3));
    }

    #[test]
    fn test_put_pixels_replaces_without_blending() {
        let mut canvas = Canvas::new(1, 1, &SurfaceLimits::default()).unwrap();
        canvas.put_pixels(&DecodedImage::new(1, 1, vec![9, 9, 9, 255]), 0, 0);
        canvas.put_pixels(&DecodedImage::new(1, 1, vec![1, 2, 3, 0]), 0, 0);
        assert_eq!(canvas.into_image().pixel(0, 0), [1, 2, 3, 0]);
    }

    #[test]
    fn test_put_pixels_fully_outside() {
        let mut canvas = Canvas::new(2, 2, &SurfaceLimits::default()).unwrap();
        canvas.put_pixels(&opaque_image(2, 2), 10, 10);
        assert!(canvas.into_image().pixels.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_blend_over_transparent_destination() {
        assert_eq!(blend_over([10, 20, 30, 128], [0, 0, 0, 0]), [10, 20, 30, 128]);
    }

    #[test]
    fn test_blend_over_opaque_source() {
        assert_eq!(blend_over([10, 20, 30, 255], [200, 200, 200, 255]), [10, 20, 30, 255]);
    }

    #[test]
    fn test_sample_far_outside() {
        let img = opaque_image(4, 4);
        assert_eq!(sample_bilinear(&img, -3.0, 1.0), [0, 0, 0, 0]);
        assert_eq!(sample_bilinear(&img, 1.0, 9.0), [0, 0, 0, 0]);
    }

    #[test]
    fn test_sample_edge_is_partially_covered() {
        let img = opaque_image(4, 4);
        let px = sample_bilinear(&img, -0.5, 1.0);
        assert_eq!(px[3], 128);
        assert_eq!(&px[..3], &img.pixel(0, 1)[..3]);
    }
}
