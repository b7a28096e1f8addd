//! stratus - a terminal weather-display client
//!
//! The pure pieces (data model, reducer, render dispatch) live in
//! `stratus-core`. This crate is the application shell: the backend
//! gateway, the single-consumer action loop, task and subscription
//! lifecycle management, and the ratatui components.
//!
//! Control flow per session:
//! 1. Key events map to actions through the focused component.
//! 2. Actions feed the store; the reducer returns state changes plus
//!    declarative effects.
//! 3. The effect handler spawns gateway work; completions come back as
//!    actions over the same channel.
//! 4. Push deliveries from the gateway's refresh stream enter the channel
//!    the same way, so pull and push share one state path.

pub mod components;
pub mod events;
pub mod gateway;
pub mod runtime;
pub mod store;
pub mod subscriptions;
pub mod tasks;
pub mod testing;

pub use events::{process_raw_event, spawn_event_poller, EventKind, RawEvent};
pub use gateway::{Gateway, GatewayError};
pub use runtime::{EffectContext, EventOutcome, Runtime};
pub use store::Store;
pub use subscriptions::{SubKey, Subscriptions};
pub use tasks::{TaskKey, TaskManager};
