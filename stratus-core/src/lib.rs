//! Core types for the stratus weather client
//!
//! This crate is the pure half of the application: the forecast data model,
//! the fetch-lifecycle state machine, and the render dispatcher. Nothing in
//! here is async and nothing touches a terminal - the `stratus` crate wires
//! these pieces to the backend gateway and the UI.
//!
//! # Architecture
//!
//! - **Model**: `ForecastEntry` is a closed sum over current conditions,
//!   day/night future forecasts, and weather warnings. Every consumer
//!   matches exhaustively, so a new entry kind is a compile error at each
//!   match site rather than silently dropped data.
//! - **State machine**: `reduce` is a pure function
//!   `(state, action) -> DispatchResult`. It never performs side effects;
//!   it declares them as [`Effect`] values for the shell to handle.
//! - **View**: `entry_view` maps an entry plus a unit preference to a
//!   presentational structure, keeping formatting policy out of the UI.

pub mod action;
pub mod effect;
pub mod model;
pub mod reducer;
pub mod state;
pub mod view;

pub use action::Action;
pub use effect::{DispatchResult, Effect};
pub use model::{
    CurrentConditions, DayNight, DayOfWeek, EmptyForecast, ForecastEntry, FutureForecast,
    TempKind, Temperature, WeatherWarning,
};
pub use reducer::reduce;
pub use state::{ForecastState, Unit};
pub use view::{entry_view, BlockView, EntryView};
