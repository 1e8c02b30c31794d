//! Configuration for the image transform engine.
//!
//! All fields have defaults, so hosts can deserialize a partial object
//! (for example `{ "output": { "type": "png" } }`) and keep the rest.

use serde::{Deserialize, Serialize};

use crate::encode::OutputFormat;

/// Largest side a drawing surface may have, matching common browser limits.
pub const DEFAULT_MAX_SURFACE_SIDE: u32 = 16_384;

/// Largest pixel area a drawing surface may have.
pub const DEFAULT_MAX_SURFACE_AREA: u64 = 268_435_456;

/// Size limits for the working canvas and output surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SurfaceLimits {
    /// Maximum width or height in pixels.
    pub max_side: u32,
    /// Maximum width * height in pixels.
    pub max_area: u64,
}

impl Default for SurfaceLimits {
    fn default() -> Self {
        Self {
            max_side: DEFAULT_MAX_SURFACE_SIDE,
            max_area: DEFAULT_MAX_SURFACE_AREA,
        }
    }
}

/// Options for a single transform call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransformConfig {
    /// Encoded output format (JPEG quality 95 by default).
    pub output: OutputFormat,
    /// Surface size limits.
    pub limits: SurfaceLimits,
}

impl TransformConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given output format.
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Use the given surface limits.
    pub fn with_limits(mut self, limits: SurfaceLimits) -> Self {
        self.limits = limits;
        self
    }
}
