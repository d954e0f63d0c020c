//! Display helpers shared by the dashboard tables.

/// Format a sensor temperature for display.
///
/// Returns `"n/a"` when the sensor has not reported a reading.
#[must_use]
pub fn format_temp(temp: Option<&str>) -> String {
    match temp {
        Some(t) => format!("{t} \u{b0}C"),
        None => "n/a".to_string(),
    }
}

/// Format a unit of measure as a suffix for a register value.
///
/// Returns `None` when there is no unit, so the value is shown bare.
#[must_use]
pub fn format_unit(unit: Option<&str>) -> Option<String> {
    unit.map(|u| format!(" {u}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_show_na_when_temperature_missing() {
        assert_eq!(format_temp(None), "n/a");
    }

    #[test]
    fn should_append_celsius_to_temperature() {
        assert_eq!(format_temp(Some("21.5")), "21.5 \u{b0}C");
    }

    #[test]
    fn should_return_none_when_unit_missing() {
        assert_eq!(format_unit(None), None);
    }

    #[test]
    fn should_prefix_unit_with_space() {
        assert_eq!(format_unit(Some("bar")).as_deref(), Some(" bar"));
    }
}
