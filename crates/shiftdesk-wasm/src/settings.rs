//! WASM bindings for notification settings rows.

use shiftdesk_core::settings::{self, NotificationSettings, NotificationTopic, SettingsRow};
use wasm_bindgen::prelude::*;

/// Default notification settings as a plain object.
#[wasm_bindgen]
pub fn default_notification_settings() -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(&NotificationSettings::default())?)
}

/// Toggle rows for a settings object (missing fields take their defaults).
#[wasm_bindgen]
pub fn notification_rows(settings: JsValue) -> Result<JsValue, JsValue> {
    let settings = parse_settings(settings)?;
    Ok(serde_wasm_bindgen::to_value(&rows_for(&settings))?)
}

/// Return a copy of `settings` with `topic` (e.g. `"shiftReminders"`) flipped.
#[wasm_bindgen]
pub fn toggle_notification(settings: JsValue, topic: JsValue) -> Result<JsValue, JsValue> {
    let settings = parse_settings(settings)?;
    let topic: NotificationTopic = serde_wasm_bindgen::from_value(topic)?;
    Ok(serde_wasm_bindgen::to_value(&settings.toggled(topic))?)
}

fn parse_settings(value: JsValue) -> Result<NotificationSettings, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(NotificationSettings::default());
    }
    Ok(serde_wasm_bindgen::from_value(value)?)
}

fn rows_for(settings: &NotificationSettings) -> Vec<SettingsRow> {
    settings::notification_rows(settings)
}
