//! Image decoding for the transform engine.
//!
//! Resolves an [`ImageSource`] to bytes, decodes JPEG or PNG data, applies
//! EXIF orientation and hands back an RGBA [`DecodedImage`].
//!
//! ```ignore
//! use shiftdesk_core::decode::{decode_image, ImageSource};
//!
//! let image = decode_image(&ImageSource::Path("avatar.jpg".into()))?;
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod source;
mod types;

pub use source::{decode_bytes, decode_image, get_orientation};
pub use types::{DecodeError, DecodedImage, ImageSource, Orientation};
