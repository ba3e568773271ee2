// Visible-field projection of a settings descriptor.
//
// The persistence layer and the host's formatting pane both read this
// projection, so hidden fields never leave the descriptor.

use serde_json::{Map, Value};

use pulseviz_settings::fields::{FieldKey, FieldValue};
use pulseviz_settings::NumberSettings;

/// Serializes the visible fields of a descriptor, keyed by their panel
/// names. The `format` key carries the precedence-resolved value; fields
/// with no current value are omitted rather than written as null.
pub fn visible_projection(settings: &NumberSettings) -> Map<String, Value> {
    let mut map = Map::new();

    for key in settings.visibility().visible_keys() {
        let value = match settings.value_by_key(key) {
            Some(FieldValue::Text(s)) => Value::String(s),
            Some(FieldValue::Number(n)) => match serde_json::Number::from_f64(n) {
                Some(num) => Value::Number(num),
                None => continue,
            },
            None => continue,
        };
        map.insert(key.name().to_string(), value);
    }

    map
}

/// Reads a JSON number as a field value. Accepts integer- and
/// float-backed numbers (the projection itself emits float-backed ones);
/// negative and non-finite values are ignored.
fn numeric_value(value: &Value) -> Option<u32> {
    let n = value.as_f64()?;
    if !n.is_finite() || n < 0.0 {
        return None;
    }
    Some(n.min(u32::MAX as f64) as u32)
}

/// Applies known keys from a stored projection back onto a descriptor.
///
/// Writes go through the input controls, so out-of-range values are
/// clamped on the way in. Unknown keys and wrongly-typed values are
/// ignored.
pub fn apply_projection(settings: &mut NumberSettings, map: &Map<String, Value>) {
    for (name, value) in map {
        let Some(key) = FieldKey::from_name(name) else {
            continue;
        };

        match key {
            FieldKey::Format => {
                if let Some(format) = value.as_str() {
                    if !format.is_empty() {
                        settings.format.value = Some(format.to_string());
                    }
                }
            }
            FieldKey::FontSize => {
                if let Some(size) = numeric_value(value) {
                    settings.sizing.font_size.set(size);
                }
            }
            FieldKey::DisplayUnits => {
                if let Some(units) = numeric_value(value) {
                    settings.display_units = units;
                }
            }
            FieldKey::Precision => {
                if let Some(precision) = numeric_value(value) {
                    settings.precision.set(precision);
                }
            }
            FieldKey::Density => {
                if let Some(density) = numeric_value(value) {
                    settings.density.set(density);
                }
            }
        }
    }
}
