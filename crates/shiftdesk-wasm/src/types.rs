//! WASM-compatible wrapper types.

use shiftdesk_core::encode::EncodedImage;
use wasm_bindgen::prelude::*;

/// An encoded transform result for JavaScript.
///
/// Holds the compressed bytes in WASM memory. Call `bytes()` to copy them
/// into a `Uint8Array`, or use `transform_image_to_object_url` to get a
/// Blob URL directly.
#[wasm_bindgen]
pub struct JsEncodedImage {
    width: u32,
    height: u32,
    mime_type: String,
    bytes: Vec<u8>,
}

#[wasm_bindgen]
impl JsEncodedImage {
    /// Output width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Output height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// MIME type of the encoded bytes (`image/jpeg` or `image/png`)
    #[wasm_bindgen(getter, js_name = mimeType)]
    pub fn mime_type(&self) -> String {
        self.mime_type.clone()
    }

    #[wasm_bindgen(getter, js_name = byteLength)]
    pub fn byte_length(&self) -> usize {
        self.bytes.len()
    }

    /// Returns the encoded bytes as a Uint8Array (copied).
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

impl JsEncodedImage {
    pub(crate) fn bytes_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<EncodedImage> for JsEncodedImage {
    fn from(encoded: EncodedImage) -> Self {
        Self {
            width: encoded.width,
            height: encoded.height,
            mime_type: encoded.mime_type().to_string(),
            bytes: encoded.bytes,
        }
    }
}
