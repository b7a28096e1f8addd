//! State store - the only writer of `ForecastState`
//!
//! Wraps the core reducer with dispatch logging. Components read the state
//! through the runtime; every mutation goes through `dispatch`.

use stratus_core::{reduce, Action, DispatchResult, ForecastState};

pub struct Store {
    state: ForecastState,
}

impl Store {
    pub fn new(state: ForecastState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &ForecastState {
        &self.state
    }

    /// Run one action through the reducer, logging what happened.
    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        let name = action.name();
        tracing::trace!(action = %action.summary(), "dispatching");

        let result = reduce(&mut self.state, action);

        tracing::debug!(
            action = name,
            changed = result.changed,
            effects = result.effects.len(),
            "action processed"
        );
        result
    }
}
