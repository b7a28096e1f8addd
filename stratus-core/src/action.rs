//! Actions - every state mutation flows through one of these
//!
//! Naming convention: category prefix, with `Did` marking an async result.
//! `ForecastFetch` is the intent; `ForecastDidLoad`/`ForecastDidError` are
//! the two ways it resolves. `ForecastDidLoad` also arrives unsolicited from
//! the push channel - the reducer treats both origins identically.

use chrono::{DateTime, Local};

use crate::model::ForecastEntry;

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    // ===== Forecast category =====
    /// Intent: request a forecast fetch (the reducer emits the effect).
    ForecastFetch,

    /// Result: a forecast arrived, from the pull request or a push.
    ///
    /// `received` is stamped where the entries crossed the gateway boundary
    /// so the reducer stays a pure function of (state, action).
    ForecastDidLoad {
        entries: Vec<ForecastEntry>,
        received: DateTime<Local>,
    },

    /// Result: the fetch failed; the message is all the shell keeps.
    ForecastDidError(String),

    // ===== UI category =====
    /// Toggle between Celsius and Fahrenheit.
    UiToggleUnits,

    // ===== Uncategorized (global) =====
    /// Periodic tick for the loading animation.
    Tick,

    /// Exit the application.
    Quit,
}

impl Action {
    /// Action name for dispatch logging.
    pub fn name(&self) -> &'static str {
        match self {
            Action::ForecastFetch => "ForecastFetch",
            Action::ForecastDidLoad { .. } => "ForecastDidLoad",
            Action::ForecastDidError(_) => "ForecastDidError",
            Action::UiToggleUnits => "UiToggleUnits",
            Action::Tick => "Tick",
            Action::Quit => "Quit",
        }
    }

    /// Concise log line instead of full `Debug` output for data-heavy
    /// actions.
    pub fn summary(&self) -> String {
        match self {
            Action::ForecastDidLoad { entries, received } => {
                format!(
                    "ForecastDidLoad {{ entries: {}, received: {} }}",
                    entries.len(),
                    received.format("%x %r")
                )
            }
            Action::ForecastDidError(message) => {
                let short = if message.len() > 40 {
                    format!("{}...", message.chars().take(37).collect::<String>())
                } else {
                    message.clone()
                };
                format!("ForecastDidError({short:?})")
            }
            _ => format!("{self:?}"),
        }
    }
}
