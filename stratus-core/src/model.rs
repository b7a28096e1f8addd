//! Forecast entry data model
//!
//! These are the shapes that cross the gateway boundary, so everything here
//! derives `Serialize`/`Deserialize`. `ForecastEntry` is adjacently tagged
//! (`{"type": ..., "content": ...}`) to match the backend payload.

use serde::{Deserialize, Serialize};

/// What a temperature reading measures. Metadata only - never used in
/// arithmetic or comparisons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TempKind {
    High,
    Low,
    Current,
}

/// A single temperature reading in some unit. The unit is implied by which
/// field of an entry the reading sits in (`celsius` vs `fahrenheit`); the
/// backend precomputes both, so the client never converts.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    pub kind: TempKind,
    pub value: f32,
}

impl Temperature {
    pub fn new(kind: TempKind, value: f32) -> Self {
        Self { kind, value }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

/// One half (day or night) of a future forecast.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DayNight {
    pub celsius: Temperature,
    pub fahrenheit: Temperature,
    pub day_of_week: DayOfWeek,
    pub description: String,
    pub summary: String,
}

/// The current observed conditions.
///
/// `summary` may contain inline markup produced by the backend and is
/// rendered as-is (tooltip text); it is never re-escaped on this side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub summary: String,
    pub celsius: Temperature,
    pub fahrenheit: Temperature,
    pub description: String,
}

/// An active weather warning. Carries no temperature.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherWarning {
    pub title: String,
    pub summary: String,
}

/// Error returned when a future forecast would have neither half.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyForecast;

impl std::fmt::Display for EmptyForecast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("future forecast has neither a day nor a night half")
    }
}

impl std::error::Error for EmptyForecast {}

/// A future forecast: a day half, a night half, or both.
///
/// Invariant: at least one half is present. Fields are private and the only
/// ways in - [`FutureForecast::new`] and deserialization - both reject the
/// empty pair, so downstream code can rely on `day_of_week()` always having
/// a weekday to return.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FutureHalves", into = "FutureHalves")]
pub struct FutureForecast {
    day: Option<DayNight>,
    night: Option<DayNight>,
}

impl FutureForecast {
    /// Build a future forecast, rejecting the all-absent pair.
    pub fn new(day: Option<DayNight>, night: Option<DayNight>) -> Result<Self, EmptyForecast> {
        if day.is_none() && night.is_none() {
            return Err(EmptyForecast);
        }
        Ok(Self { day, night })
    }

    pub fn day(&self) -> Option<&DayNight> {
        self.day.as_ref()
    }

    pub fn night(&self) -> Option<&DayNight> {
        self.night.as_ref()
    }

    /// The weekday this forecast belongs to, preferring the day half when
    /// both are present (they agree by construction).
    pub fn day_of_week(&self) -> DayOfWeek {
        match (&self.day, &self.night) {
            (Some(half), _) | (None, Some(half)) => half.day_of_week,
            // Unreachable by invariant; Monday keeps this total without a panic path.
            (None, None) => DayOfWeek::Monday,
        }
    }
}

/// Serde surrogate for `FutureForecast` so decoding enforces the invariant.
#[derive(Serialize, Deserialize)]
struct FutureHalves {
    day: Option<DayNight>,
    night: Option<DayNight>,
}

impl TryFrom<FutureHalves> for FutureForecast {
    type Error = EmptyForecast;

    fn try_from(halves: FutureHalves) -> Result<Self, Self::Error> {
        FutureForecast::new(halves.day, halves.night)
    }
}

impl From<FutureForecast> for FutureHalves {
    fn from(forecast: FutureForecast) -> Self {
        Self {
            day: forecast.day,
            night: forecast.night,
        }
    }
}

/// One displayable forecast item. Exactly one variant is active; display
/// order is the order the backend delivered them in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
pub enum ForecastEntry {
    Current(CurrentConditions),
    Future(FutureForecast),
    Warning(WeatherWarning),
}
