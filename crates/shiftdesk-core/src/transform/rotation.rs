//! Rotation geometry for the working canvas.
//!
//! Angles are in degrees, positive = clockwise on screen (y axis down), with
//! no range restriction: 450° behaves like 90°, -90° like 270°.

use std::f64::consts::SQRT_2;

/// Tolerance for snapping an angle to an exact quarter turn.
const QUARTER_TURN_EPSILON: f64 = 1e-9;

/// Side length of the square working canvas for a `width x height` source.
///
/// `S = 2 * ceil((max(w, h) / 2) * sqrt(2))`. S is even and never smaller than
/// the source diagonal, so the source fits at any rotation without clipping.
pub fn working_canvas_side(width: u32, height: u32) -> u64 {
    let max_side = width.max(height) as f64;
    2 * ((max_side / 2.0) * SQRT_2).ceil() as u64
}

/// Sine and cosine of a clockwise rotation.
///
/// Quarter turns return exact values so axis-aligned rotations resample
/// pixel centres without interpolation error.
pub(crate) fn sin_cos_clockwise(angle_degrees: f64) -> (f64, f64) {
    let normalized = angle_degrees.rem_euclid(360.0);

    for (turn, sin, cos) in [
        (0.0, 0.0, 1.0),
        (90.0, 1.0, 0.0),
        (180.0, 0.0, -1.0),
        (270.0, -1.0, 0.0),
        (360.0, 0.0, 1.0),
    ] {
        if (normalized - turn).abs() < QUARTER_TURN_EPSILON {
            return (sin, cos);
        }
    }

    normalized.to_radians().sin_cos()
}

/// Bounding box of a `width x height` image after rotation.
///
/// Useful for sizing a crop that covers the whole rotated image. Quarter
/// turns swap or keep the dimensions exactly.
pub fn rotated_bounds(width: u32, height: u32, angle_degrees: f64) -> (u32, u32) {
    let (sin, cos) = sin_cos_clockwise(angle_degrees);
    let (sin, cos) = (sin.abs(), cos.abs());

    if sin == 0.0 {
        return (width, height);
    }
    if cos == 0.0 {
        return (height, width);
    }

    let w = width as f64;
    let h = height as f64;
    let new_w = (w * cos + h * sin).round() as u32;
    let new_h = (w * sin + h * cos).round() as u32;

    (new_w.max(1), new_h.max(1))
}
