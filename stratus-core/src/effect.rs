//! Effects - side effects declared by the reducer
//!
//! The reducer never performs I/O. It returns a [`DispatchResult`] naming
//! the work to do; the shell's effect handler spawns the actual task. This
//! keeps the state machine pure and synchronous.

/// Side effects the reducer can request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Ask the gateway for a fresh forecast.
    FetchForecast,
}

/// Outcome of dispatching one action: whether the state changed (so the UI
/// re-renders) and any effects to hand to the shell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DispatchResult {
    pub changed: bool,
    pub effects: Vec<Effect>,
}

impl DispatchResult {
    /// No state change, no effects.
    #[inline]
    pub fn unchanged() -> Self {
        Self::default()
    }

    /// State changed, no effects.
    #[inline]
    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: Vec::new(),
        }
    }

    /// State changed and one effect to process.
    #[inline]
    pub fn changed_with(effect: Effect) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }

    #[inline]
    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }
}
