//! Error type for the full transform pipeline.

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;
use crate::transform::RenderContextError;

/// Terminal failure of a single transform call.
///
/// Nothing is retried and no partial output is produced; callers surface
/// the message and may re-invoke with the same or corrected inputs.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("Failed to decode source image: {0}")]
    Decode(#[from] DecodeError),

    #[error("Failed to acquire drawing surface: {0}")]
    RenderContext(#[from] RenderContextError),

    #[error("Failed to encode output image: {0}")]
    Encode(#[from] EncodeError),
}
