//! `SettingsStore` <-> `[{ "Height": .., "Width": .. }]`.

use super::JsonPersist;
use crate::model::settings::Settings;
use crate::store::settings_store::SettingsStore;
use log::debug;
use serde_json::Value;

const HEIGHT_KEY: &str = "Height";
const WIDTH_KEY: &str = "Width";

impl JsonPersist for SettingsStore {
    /// Single-element array; `Settings` carries the `Height`/`Width` names.
    fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value([self.settings()])
    }

    /// Reads element 0 only. A missing or non-integer key becomes `0`; an
    /// empty array leaves the store untouched.
    fn apply_json(&mut self, items: Vec<Value>) {
        let Some(first) = items.first() else {
            debug!("event=settings_load module=persist status=skip reason=empty_array");
            return;
        };

        self.apply(Settings {
            expanded_width: int_field(first, WIDTH_KEY),
            win_height: int_field(first, HEIGHT_KEY),
        });
    }
}

/// JSON has one number type, so a whole float such as `700.0` counts as an
/// integer. Fractions, non-numbers and values outside `i32` become `0`.
fn int_field(value: &Value, key: &str) -> i32 {
    let Some(number) = value.get(key) else {
        return 0;
    };
    if let Some(raw) = number.as_i64() {
        return i32::try_from(raw).unwrap_or(0);
    }
    match number.as_f64() {
        Some(raw)
            if raw.fract() == 0.0 && raw >= f64::from(i32::MIN) && raw <= f64::from(i32::MAX) =>
        {
            raw as i32
        }
        _ => 0,
    }
}
