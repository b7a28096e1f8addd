//! Event/action loop
//!
//! One loop owns the terminal, the store, and the single action channel.
//! Key events become actions, actions run through the reducer, and any
//! effects the reducer requests are handed to the caller's effect handler
//! with access to the task manager. Rendering only happens when a dispatch
//! reports a state change or an event forces it.

use std::io;
use std::time::Duration;

use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal};
use stratus_core::{Action, Effect, ForecastState};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::events::{process_raw_event, spawn_event_poller, EventKind, RawEvent};
use crate::store::Store;
use crate::subscriptions::Subscriptions;
use crate::tasks::TaskManager;

const POLL_TIMEOUT: Duration = Duration::from_millis(10);
const LOOP_SLEEP: Duration = Duration::from_millis(16);

/// Result of mapping an event into actions plus an optional render hint.
#[derive(Debug, Clone, PartialEq)]
pub struct EventOutcome {
    pub actions: Vec<Action>,
    /// Force a re-render even if no action changes state, e.g. on resize.
    pub needs_render: bool,
}

impl EventOutcome {
    /// No actions and no render.
    pub fn ignored() -> Self {
        Self {
            actions: Vec::new(),
            needs_render: false,
        }
    }

    /// No actions, but request a render.
    pub fn needs_render() -> Self {
        Self {
            actions: Vec::new(),
            needs_render: true,
        }
    }

    pub fn action(action: Action) -> Self {
        Self {
            actions: vec![action],
            needs_render: false,
        }
    }

    pub fn from_actions(iter: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: iter.into_iter().collect(),
            needs_render: false,
        }
    }

    pub fn with_render(mut self) -> Self {
        self.needs_render = true;
        self
    }
}

impl Default for EventOutcome {
    fn default() -> Self {
        Self::ignored()
    }
}

/// Context passed to the effect handler.
pub struct EffectContext<'a> {
    action_tx: &'a mpsc::UnboundedSender<Action>,
    tasks: &'a mut TaskManager,
}

impl<'a> EffectContext<'a> {
    /// Send an action back into the loop immediately.
    pub fn emit(&self, action: Action) {
        let _ = self.action_tx.send(action);
    }

    pub fn tasks(&mut self) -> &mut TaskManager {
        self.tasks
    }
}

pub struct Runtime {
    store: Store,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    tasks: TaskManager,
    subscriptions: Subscriptions,
    should_render: bool,
}

impl Runtime {
    pub fn new(state: ForecastState) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let tasks = TaskManager::new(action_tx.clone());
        let subscriptions = Subscriptions::new(action_tx.clone());

        Self {
            store: Store::new(state),
            action_tx,
            action_rx,
            tasks,
            subscriptions,
            should_render: true,
        }
    }

    /// Queue an action for the next loop iteration.
    pub fn enqueue(&self, action: Action) {
        let _ = self.action_tx.send(action);
    }

    pub fn action_tx(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }

    pub fn state(&self) -> &ForecastState {
        self.store.state()
    }

    pub fn subscriptions(&mut self) -> &mut Subscriptions {
        &mut self.subscriptions
    }

    pub fn tasks(&mut self) -> &mut TaskManager {
        &mut self.tasks
    }

    /// Run the loop until `Action::Quit` arrives.
    ///
    /// `render` draws the whole frame from the current state; `map_event`
    /// turns a terminal event into actions; `handle_effect` runs each effect
    /// the reducer requested, typically by spawning a task.
    pub async fn run<B, FRender, FEvent, FEffect>(
        &mut self,
        terminal: &mut Terminal<B>,
        mut render: FRender,
        mut map_event: FEvent,
        mut handle_effect: FEffect,
    ) -> io::Result<()>
    where
        B: Backend,
        FRender: FnMut(&mut Frame, Rect, &ForecastState),
        FEvent: FnMut(&EventKind, &ForecastState) -> EventOutcome,
        FEffect: FnMut(Effect, &mut EffectContext),
    {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
        let cancel_token = CancellationToken::new();
        let _poller = spawn_event_poller(event_tx, POLL_TIMEOUT, LOOP_SLEEP, cancel_token.clone());

        loop {
            if self.should_render {
                let state = self.store.state();
                terminal.draw(|frame| {
                    render(frame, frame.area(), state);
                })?;
                self.should_render = false;
            }

            tokio::select! {
                Some(raw_event) = event_rx.recv() => {
                    let event = process_raw_event(raw_event);
                    let outcome = map_event(&event, self.store.state());
                    if outcome.needs_render {
                        self.should_render = true;
                    }
                    for action in outcome.actions {
                        let _ = self.action_tx.send(action);
                    }
                }

                Some(action) = self.action_rx.recv() => {
                    if matches!(action, Action::Quit) {
                        break;
                    }

                    let result = self.store.dispatch(action);
                    if result.has_effects() {
                        let mut ctx = EffectContext {
                            action_tx: &self.action_tx,
                            tasks: &mut self.tasks,
                        };
                        for effect in result.effects {
                            handle_effect(effect, &mut ctx);
                        }
                    }
                    // Accumulate, so a pending render hint survives a
                    // no-change dispatch.
                    self.should_render |= result.changed;
                }

                else => {
                    break;
                }
            }
        }

        cancel_token.cancel();
        self.subscriptions.cancel_all();
        self.tasks.cancel_all();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_builders_compose() {
        let ignored = EventOutcome::ignored();
        assert!(ignored.actions.is_empty());
        assert!(!ignored.needs_render);

        let outcome = EventOutcome::action(Action::Tick).with_render();
        assert_eq!(outcome.actions, vec![Action::Tick]);
        assert!(outcome.needs_render);

        let many = EventOutcome::from_actions([Action::Tick, Action::UiToggleUnits]);
        assert_eq!(many.actions.len(), 2);
    }

    #[tokio::test]
    async fn effect_context_emit_feeds_the_channel() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut tasks = TaskManager::new(tx.clone());
        let ctx = EffectContext {
            action_tx: &tx,
            tasks: &mut tasks,
        };

        ctx.emit(Action::ForecastFetch);
        assert_eq!(rx.recv().await, Some(Action::ForecastFetch));
    }

    #[test]
    fn runtime_enqueue_reaches_the_store_on_dispatch() {
        let runtime = Runtime::new(ForecastState::default());
        runtime.enqueue(Action::ForecastFetch);
        // The action sits in the channel until run() drains it.
        assert!(!runtime.state().fetching);
    }
}
