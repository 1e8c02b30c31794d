//! Shiftdesk WASM - WebAssembly bindings for Shiftdesk
//!
//! This crate exposes the shiftdesk-core functionality to the JavaScript
//! employee app. Load it in a Web Worker: transforms are synchronous and
//! would otherwise block the main thread. Core log events (decode, render and
//! encode stages) go to the browser console once the module has started.
//!
//! # Module Structure
//!
//! - `transform` - Rotate-then-crop export, Blob URL helpers
//! - `schedule` - Shift hours, day counts, demo shift generation
//! - `settings` - Notification settings rows
//! - `types` - WASM-compatible wrapper for encoded images
//! - `logging` - Console subscriber for core `tracing` events
//!
//! # Usage
//!
//! ```typescript
//! import init, { transform_image, shift_hours } from '@shiftdesk/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const result = transform_image(bytes, 0, 0, 300, 400, 90);
//! console.log(`Exported ${result.width}x${result.height} ${result.mimeType}`);
//!
//! shift_hours('08:00', '16:00', 30); // 7.5
//! ```

use wasm_bindgen::prelude::*;

mod logging;
mod schedule;
mod settings;
mod transform;
mod types;

pub use schedule::{days_between, generate_shifts, shift_hours};
pub use settings::{default_notification_settings, notification_rows, toggle_notification};
pub use transform::{
    object_url, revoke_object_url, rotated_size, transform_image, transform_image_to_object_url,
    transform_image_with_options,
};
pub use types::JsEncodedImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logging::init();
    web_sys::console::debug_1(&JsValue::from_str(&format!(
        "shiftdesk-wasm {} ready",
        version()
    )));
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
