//! Reducer - pure function: (state, action) -> DispatchResult
//!
//! The three forecast transitions are total and state-independent: no
//! action is rejected based on the current state, and replaying the same
//! action against the same state produces the same next state. That is what
//! lets the push channel and the pull request share one code path -
//! `ForecastDidLoad` is handled identically whether or not a
//! `ForecastFetch` preceded it.

use crate::action::Action;
use crate::effect::{DispatchResult, Effect};
use crate::state::ForecastState;

pub fn reduce(state: &mut ForecastState, action: Action) -> DispatchResult {
    match action {
        // ===== Forecast actions =====
        Action::ForecastFetch => {
            state.fetching = true;
            state.error = None;
            DispatchResult::changed_with(Effect::FetchForecast)
        }

        Action::ForecastDidLoad { entries, received } => {
            state.fetching = false;
            state.entries = entries;
            state.error = None;
            state.last_refreshed = Some(received);
            DispatchResult::changed()
        }

        Action::ForecastDidError(message) => {
            state.fetching = false;
            state.error = Some(message);
            // Entries stay as they were: stale data beats no data.
            DispatchResult::changed()
        }

        // ===== UI actions =====
        Action::UiToggleUnits => {
            state.unit = state.unit.toggle();
            DispatchResult::changed()
        }

        // ===== Global actions =====
        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            if state.fetching {
                // Spinner frame advanced.
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => {
            // Quit is handled by the runtime loop, not here.
            DispatchResult::unchanged()
        }
    }
}
