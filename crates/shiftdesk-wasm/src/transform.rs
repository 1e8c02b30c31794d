//! WASM bindings for the rotate-then-crop transform engine.
//!
//! The JS side fetches the source (file input, `fetch`, camera capture) and
//! passes the bytes in; results come back as bytes or as a Blob URL.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const { x, y, width, height } = crop;
//! const url = transform_image_to_object_url(bytes, x, y, width, height, rotation);
//! avatar.src = url;
//! // later, when the preview is discarded:
//! revoke_object_url(url);
//! ```

use crate::types::JsEncodedImage;
use js_sys::{Array, Uint8Array};
use shiftdesk_core::config::TransformConfig;
use shiftdesk_core::decode::ImageSource;
use shiftdesk_core::transform::{self, rotated_bounds, CropRegion};
use shiftdesk_core::TransformError;
use wasm_bindgen::prelude::*;
use web_sys::{Blob, BlobPropertyBag, Url};

/// Rotate `bytes` clockwise by `rotation_degrees`, crop, and encode as JPEG
/// (quality 95).
///
/// Crop coordinates are whole pixels in the rotated image's space.
///
/// # Errors
///
/// Rejects with a message if the source cannot be decoded, the drawing
/// surface is too large, or encoding produces no data (e.g. a zero-sized crop).
#[wasm_bindgen]
pub fn transform_image(
    bytes: &[u8],
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    rotation_degrees: f64,
) -> Result<JsEncodedImage, JsValue> {
    let crop = CropRegion::new(x, y, width, height);
    run(bytes, crop, rotation_degrees, &TransformConfig::default()).map_err(to_js_error)
}

/// [`transform_image`] with an options object:
/// `{ output?: { type: "jpeg", quality } | { type: "png" }, limits?: { maxSide, maxArea } }`.
#[wasm_bindgen]
pub fn transform_image_with_options(
    bytes: &[u8],
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    rotation_degrees: f64,
    options: JsValue,
) -> Result<JsEncodedImage, JsValue> {
    let config: TransformConfig = if options.is_undefined() || options.is_null() {
        TransformConfig::default()
    } else {
        serde_wasm_bindgen::from_value(options)?
    };

    let crop = CropRegion::new(x, y, width, height);
    run(bytes, crop, rotation_degrees, &config).map_err(to_js_error)
}

/// Transform and wrap the result in a Blob URL.
///
/// The caller owns the URL and must pass it to [`revoke_object_url`] when
/// done, or the encoded bytes stay alive for the lifetime of the document.
#[wasm_bindgen]
pub fn transform_image_to_object_url(
    bytes: &[u8],
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    rotation_degrees: f64,
) -> Result<String, JsValue> {
    let encoded = transform_image(bytes, x, y, width, height, rotation_degrees)?;
    object_url(&encoded)
}

/// Create a Blob URL for an encoded image.
#[wasm_bindgen]
pub fn object_url(image: &JsEncodedImage) -> Result<String, JsValue> {
    let data = Uint8Array::from(image.bytes_ref());
    let parts = Array::of1(&data);

    let options = BlobPropertyBag::new();
    options.set_type(&image.mime_type());

    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    Url::create_object_url_with_blob(&blob)
}

/// Release a Blob URL returned by this module.
#[wasm_bindgen]
pub fn revoke_object_url(url: &str) -> Result<(), JsValue> {
    Url::revoke_object_url(url)
}

/// Size of the rotated image's bounding box, as `[width, height]`.
///
/// Use it to build a crop that covers the whole rotated image.
#[wasm_bindgen]
pub fn rotated_size(width: u32, height: u32, rotation_degrees: f64) -> Vec<u32> {
    let (w, h) = rotated_bounds(width, height, rotation_degrees);
    vec![w, h]
}

fn run(
    bytes: &[u8],
    crop: CropRegion,
    rotation_degrees: f64,
    config: &TransformConfig,
) -> Result<JsEncodedImage, TransformError> {
    let source = ImageSource::from(bytes);
    transform::transform_with_config(&source, crop, rotation_degrees, config)
        .map(JsEncodedImage::from)
}

fn to_js_error(err: TransformError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
