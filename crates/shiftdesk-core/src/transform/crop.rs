//! Crop rectangles in rotated-image space.
//!
//! A crop is given in whole pixels relative to the rotated image. The engine
//! pastes the working canvas into a crop-sized surface at
//! [`paste_offset`], so the requested rectangle lands at the output origin.

use serde::{Deserialize, Serialize};

/// Rectangle to keep, in pixels of the rotated image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CropRegion {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Width of the output image. Must be non-zero to produce output.
    pub width: u32,
    /// Height of the output image. Must be non-zero to produce output.
    pub height: u32,
}

impl CropRegion {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A crop covering a whole `width x height` image.
    pub fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of pixels in the output image.
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Where to paste the working canvas in the crop-sized output surface.
///
/// `x = -(S/2) + W/2 - crop.x`, `y = -(S/2) + H/2 - crop.y`, truncated toward
/// zero the way a 2D canvas converts `putImageData` offsets.
pub fn paste_offset(
    canvas_side: u64,
    image_width: u32,
    image_height: u32,
    crop: &CropRegion,
) -> (i64, i64) {
    let half_side = canvas_side as f64 / 2.0;
    let x = -half_side + image_width as f64 / 2.0 - crop.x as f64;
    let y = -half_side + image_height as f64 / 2.0 - crop.y as f64;
    (x.trunc() as i64, y.trunc() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_crop() {
        let crop = CropRegion::full(400, 300);
        assert_eq!(crop, CropRegion::new(0, 0, 400, 300));
        assert_eq!(crop.area(), 120_000);
        assert!(!crop.is_empty());
    }

    #[test]
    fn test_empty_crop() {
        assert!(CropRegion::new(5, 5, 0, 10).is_empty());
        assert!(CropRegion::new(5, 5, 10, 0).is_empty());
    }

    #[test]
    fn test_paste_offset_even_dimensions() {
        // S = 566 for 400x300
        let offset = paste_offset(566, 400, 300, &CropRegion::full(400, 300));
        assert_eq!(offset, (-83, -133));
    }

    #[test]
    fn test_paste_offset_moves_with_crop_origin() {
        let base = paste_offset(566, 400, 300, &CropRegion::new(0, 0, 10, 10));
        let moved = paste_offset(566, 400, 300, &CropRegion::new(25, 40, 10, 10));
        assert_eq!(moved, (base.0 - 25, base.1 - 40));
    }

    #[test]
    fn test_paste_offset_truncates_half_pixels() {
        // S = 8 for 5x5: -4 + 2.5 = -1.5 truncates to -1
        assert_eq!(paste_offset(8, 5, 5, &CropRegion::full(5, 5)), (-1, -1));
    }
}
