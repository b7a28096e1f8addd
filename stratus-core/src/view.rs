//! Render dispatch - maps a forecast entry to a presentational structure
//!
//! `entry_view` is the single place that knows how each entry variant is
//! presented; the UI layer only turns the result into widgets. It is pure
//! and never panics for any valid entry.
//!
//! Formatting policy is unit-dependent, not variant-dependent: Celsius gets
//! a bare degree mark with per-variant precision (one decimal for "Now",
//! none for future buckets - a measurement versus a rounded forecast),
//! Fahrenheit is always an integer with a unit suffix. The asymmetry is
//! intentional and mirrors the backend's own presentation.

use crate::model::{DayNight, ForecastEntry, Temperature};
use crate::state::Unit;

/// One rendered temperature block: the day half, the night half, or the
/// single current reading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockView {
    /// "Day" or "Night" for future halves; `None` for current conditions.
    pub heading: Option<&'static str>,
    /// Formatted temperature, e.g. `21.4°` or `70°F`.
    pub reading: String,
    pub description: String,
    /// Tooltip text. May contain backend markup; rendered as-is.
    pub summary: String,
}

/// Presentational form of one forecast entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryView {
    /// "Now", a weekday name, or a warning title.
    pub label: String,
    /// One block per present reading. Empty for warnings; absent future
    /// halves produce no placeholder block.
    pub blocks: Vec<BlockView>,
    /// Warning summary text, for the variant with no temperature.
    pub note: Option<String>,
}

pub fn entry_view(entry: &ForecastEntry, unit: Unit) -> EntryView {
    match entry {
        ForecastEntry::Current(current) => EntryView {
            label: "Now".into(),
            blocks: vec![BlockView {
                heading: None,
                reading: reading(current.celsius, current.fahrenheit, unit, 1),
                description: current.description.clone(),
                summary: current.summary.clone(),
            }],
            note: None,
        },

        ForecastEntry::Future(future) => {
            let mut blocks = Vec::with_capacity(2);
            if let Some(day) = future.day() {
                blocks.push(half_block("Day", day, unit));
            }
            if let Some(night) = future.night() {
                blocks.push(half_block("Night", night, unit));
            }
            EntryView {
                label: future.day_of_week().as_str().into(),
                blocks,
                note: None,
            }
        }

        ForecastEntry::Warning(warning) => EntryView {
            label: warning.title.clone(),
            blocks: Vec::new(),
            note: Some(warning.summary.clone()),
        },
    }
}

fn half_block(heading: &'static str, half: &DayNight, unit: Unit) -> BlockView {
    BlockView {
        heading: Some(heading),
        reading: reading(half.celsius, half.fahrenheit, unit, 0),
        description: half.description.clone(),
        summary: half.summary.clone(),
    }
}

/// Format the reading for the selected unit. The entry carries both
/// precomputed readings, so this only picks and formats - no conversion.
fn reading(celsius: Temperature, fahrenheit: Temperature, unit: Unit, decimals: usize) -> String {
    match unit {
        Unit::Celsius => format!("{:.*}°", decimals, celsius.value),
        Unit::Fahrenheit => format!("{:.0}°F", fahrenheit.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        CurrentConditions, DayOfWeek, FutureForecast, TempKind, WeatherWarning,
    };

    fn temp(kind: TempKind, value: f32) -> Temperature {
        Temperature::new(kind, value)
    }

    fn half(day_of_week: DayOfWeek, celsius: f32, description: &str) -> DayNight {
        DayNight {
            celsius: temp(TempKind::High, celsius),
            fahrenheit: temp(TempKind::High, celsius * 9.0 / 5.0 + 32.0),
            day_of_week,
            description: description.into(),
            summary: format!("{description}."),
        }
    }

    #[test]
    fn current_renders_now_with_one_decimal_celsius() {
        let entry = ForecastEntry::Current(CurrentConditions {
            summary: "<b>Current:</b> Clear".into(),
            celsius: temp(TempKind::Current, 21.4),
            fahrenheit: temp(TempKind::Current, 70.6),
            description: "Clear".into(),
        });

        let view = entry_view(&entry, Unit::Celsius);

        assert_eq!(view.label, "Now");
        assert_eq!(view.blocks.len(), 1);
        assert_eq!(view.blocks[0].reading, "21.4°");
        assert_eq!(view.blocks[0].description, "Clear");
        // Markup passes through untouched.
        assert_eq!(view.blocks[0].summary, "<b>Current:</b> Clear");
        assert_eq!(view.note, None);
    }

    #[test]
    fn current_renders_integer_fahrenheit_with_suffix() {
        let entry = ForecastEntry::Current(CurrentConditions {
            summary: String::new(),
            celsius: temp(TempKind::Current, 21.4),
            fahrenheit: temp(TempKind::Current, 70.6),
            description: "Clear".into(),
        });

        let view = entry_view(&entry, Unit::Fahrenheit);
        assert_eq!(view.blocks[0].reading, "71°F");
    }

    #[test]
    fn future_day_only_renders_one_block_and_no_placeholder() {
        let entry = ForecastEntry::Future(
            FutureForecast::new(Some(half(DayOfWeek::Monday, 15.0, "Sunny")), None)
                .expect("valid forecast"),
        );

        let view = entry_view(&entry, Unit::Celsius);

        assert_eq!(view.label, "Monday");
        assert_eq!(view.blocks.len(), 1);
        assert_eq!(view.blocks[0].heading, Some("Day"));
        assert_eq!(view.blocks[0].reading, "15°");
    }

    #[test]
    fn future_night_only_takes_label_from_night() {
        let entry = ForecastEntry::Future(
            FutureForecast::new(None, Some(half(DayOfWeek::Saturday, -3.0, "Clearing")))
                .expect("valid forecast"),
        );

        let view = entry_view(&entry, Unit::Celsius);

        assert_eq!(view.label, "Saturday");
        assert_eq!(view.blocks.len(), 1);
        assert_eq!(view.blocks[0].heading, Some("Night"));
        assert_eq!(view.blocks[0].reading, "-3°");
    }

    #[test]
    fn future_both_halves_render_day_then_night() {
        let entry = ForecastEntry::Future(
            FutureForecast::new(
                Some(half(DayOfWeek::Friday, 18.0, "Sunny")),
                Some(half(DayOfWeek::Friday, 9.0, "Partly cloudy")),
            )
            .expect("valid forecast"),
        );

        let view = entry_view(&entry, Unit::Celsius);

        assert_eq!(view.label, "Friday");
        let headings: Vec<_> = view.blocks.iter().map(|b| b.heading).collect();
        assert_eq!(headings, vec![Some("Day"), Some("Night")]);
        assert_eq!(view.blocks[0].reading, "18°");
        assert_eq!(view.blocks[1].reading, "9°");
    }

    #[test]
    fn future_fahrenheit_uses_precomputed_reading() {
        let entry = ForecastEntry::Future(
            FutureForecast::new(Some(half(DayOfWeek::Monday, 15.0, "Sunny")), None)
                .expect("valid forecast"),
        );

        let view = entry_view(&entry, Unit::Fahrenheit);
        assert_eq!(view.blocks[0].reading, "59°F");
    }

    #[test]
    fn warning_has_no_temperature_blocks() {
        let entry = ForecastEntry::Warning(WeatherWarning {
            title: "Frost Advisory".into(),
            summary: "Frost expected overnight.".into(),
        });

        let view = entry_view(&entry, Unit::Celsius);

        assert_eq!(view.label, "Frost Advisory");
        assert!(view.blocks.is_empty());
        assert_eq!(view.note.as_deref(), Some("Frost expected overnight."));
    }
}
