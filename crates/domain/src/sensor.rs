//! Sensor: an external Dallas temperature probe reporting to the gateway.

use serde::{Deserialize, Deserializer, Serialize};

use crate::format::format_temp;

/// A temperature sensor attached to the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sensor {
    /// Position of the sensor on the one-wire bus, starting at 1.
    pub no: u32,
    /// One-wire ROM identifier, e.g. `28-233D-9497-0C03`.
    pub id: String,
    /// Last reading, `None` when the sensor has not reported yet.
    #[serde(default, deserialize_with = "string_or_number")]
    pub temp: Option<String>,
}

impl Sensor {
    /// The reading formatted for display.
    #[must_use]
    pub fn formatted_temp(&self) -> String {
        format_temp(self.temp.as_deref())
    }
}

/// Accept the temperature either as a JSON string or as a number.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_decode_string_temperature() {
        let sensor: Sensor =
            serde_json::from_str(r#"{"no":1,"id":"28-233D-9497-0C03","temp":"21.5"}"#).unwrap();
        assert_eq!(sensor.temp.as_deref(), Some("21.5"));
        assert_eq!(sensor.formatted_temp(), "21.5 \u{b0}C");
    }

    #[test]
    fn should_decode_numeric_temperature() {
        let sensor: Sensor =
            serde_json::from_str(r#"{"no":2,"id":"28-1111-2222-3333","temp":19.25}"#).unwrap();
        assert_eq!(sensor.temp.as_deref(), Some("19.25"));
    }

    #[test]
    fn should_show_na_for_null_or_missing_temperature() {
        let null: Sensor = serde_json::from_str(r#"{"no":3,"id":"a","temp":null}"#).unwrap();
        let missing: Sensor = serde_json::from_str(r#"{"no":4,"id":"b"}"#).unwrap();
        assert_eq!(null.formatted_temp(), "n/a");
        assert_eq!(missing.formatted_temp(), "n/a");
    }
}
