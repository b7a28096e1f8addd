//! Application state - single source of truth
//!
//! Components receive `&ForecastState` as props; only the reducer mutates
//! it. The state lives for the session and is never persisted.

use chrono::{DateTime, Local};

use crate::model::ForecastEntry;

/// Temperature unit preference, fixed by the caller at startup and
/// toggleable at runtime. Selects which precomputed reading an entry
/// renders - no conversion happens client-side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Unit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl Unit {
    pub fn toggle(&self) -> Self {
        match self {
            Unit::Celsius => Unit::Fahrenheit,
            Unit::Fahrenheit => Unit::Celsius,
        }
    }
}

/// Everything the UI needs to render one session of forecast display.
#[derive(Clone, Debug)]
pub struct ForecastState {
    /// Forecast entries in backend delivery order (display order).
    pub entries: Vec<ForecastEntry>,

    /// A fetch is in flight. Gates the manual refresh trigger.
    pub fetching: bool,

    /// Message from the last failed fetch, cleared on the next request.
    pub error: Option<String>,

    /// When the entries were last replaced, pull or push alike.
    pub last_refreshed: Option<DateTime<Local>>,

    /// Presentation unit for temperatures.
    pub unit: Unit,

    /// Animation frame counter for the loading spinner.
    pub tick_count: u32,
}

impl ForecastState {
    /// Fresh session state: nothing fetched, nothing in flight.
    pub fn new(unit: Unit) -> Self {
        Self {
            entries: Vec::new(),
            fetching: false,
            error: None,
            last_refreshed: None,
            unit,
            tick_count: 0,
        }
    }
}

impl Default for ForecastState {
    fn default() -> Self {
        Self::new(Unit::Celsius)
    }
}
