//! Top-level forecast panel
//!
//! Owns the bordered frame and the key bindings, delegating the body to
//! `EntryList` and the footer to `HelpBar`. Manual refresh is ignored while
//! a fetch is already in flight.

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, Borders},
    Frame,
};

use super::{Component, EntryList, EntryListProps, HelpBar, HelpBarProps};
use crate::events::EventKind;
use stratus_core::{Action, ForecastState};

pub const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];

#[derive(Default)]
pub struct ForecastPanel;

pub struct ForecastPanelProps<'a> {
    pub state: &'a ForecastState,
    pub is_focused: bool,
}

impl Component for ForecastPanel {
    type Props<'a> = ForecastPanelProps<'a>;

    fn handle_event(&mut self, event: &EventKind, props: ForecastPanelProps<'_>) -> Vec<Action> {
        if !props.is_focused {
            return vec![];
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Char('r') | KeyCode::F(5) => {
                    // One fetch at a time; the key does nothing mid-flight.
                    if props.state.fetching {
                        vec![]
                    } else {
                        vec![Action::ForecastFetch]
                    }
                }
                KeyCode::Char('u') => vec![Action::UiToggleUnits],
                KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
                _ => vec![],
            },
            _ => vec![],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: ForecastPanelProps<'_>) {
        let state = props.state;

        let loading_indicator = if state.fetching {
            let spinner = SPINNERS[(state.tick_count as usize / 2) % SPINNERS.len()];
            format!(" {} ", spinner)
        } else {
            String::new()
        };

        let outer_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(format!(" ☁ Forecast{}", loading_indicator))
            .title_style(Style::default().fg(Color::Cyan).bold())
            .title_alignment(Alignment::Center);

        frame.render_widget(outer_block.clone(), area);
        let inner = outer_block.inner(area);

        let chunks = Layout::vertical([
            Constraint::Min(1),    // Entry list
            Constraint::Length(1), // Help bar
        ])
        .split(inner);

        let mut list = EntryList;
        list.render(frame, chunks[0], EntryListProps { state });

        let mut help = HelpBar;
        help.render(frame, chunks[1], HelpBarProps);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{char_key, code_key};

    fn props(state: &ForecastState, is_focused: bool) -> ForecastPanelProps<'_> {
        ForecastPanelProps { state, is_focused }
    }

    #[test]
    fn refresh_key_requests_a_fetch() {
        let mut panel = ForecastPanel;
        let state = ForecastState::default();

        let actions = panel.handle_event(&EventKind::Key(char_key('r')), props(&state, true));
        assert_eq!(actions, vec![Action::ForecastFetch]);
    }

    #[test]
    fn f5_also_requests_a_fetch() {
        let mut panel = ForecastPanel;
        let state = ForecastState::default();

        let actions =
            panel.handle_event(&EventKind::Key(code_key(KeyCode::F(5))), props(&state, true));
        assert_eq!(actions, vec![Action::ForecastFetch]);
    }

    #[test]
    fn refresh_key_is_ignored_while_fetching() {
        let mut panel = ForecastPanel;
        let state = ForecastState {
            fetching: true,
            ..Default::default()
        };

        let actions = panel.handle_event(&EventKind::Key(char_key('r')), props(&state, true));
        assert!(actions.is_empty());
    }

    #[test]
    fn unit_key_toggles_units() {
        let mut panel = ForecastPanel;
        let state = ForecastState::default();

        let actions = panel.handle_event(&EventKind::Key(char_key('u')), props(&state, true));
        assert_eq!(actions, vec![Action::UiToggleUnits]);
    }

    #[test]
    fn quit_key_quits() {
        let mut panel = ForecastPanel;
        let state = ForecastState::default();

        let actions = panel.handle_event(&EventKind::Key(char_key('q')), props(&state, true));
        assert_eq!(actions, vec![Action::Quit]);
    }

    #[test]
    fn unfocused_panel_ignores_keys() {
        let mut panel = ForecastPanel;
        let state = ForecastState::default();

        let actions = panel.handle_event(&EventKind::Key(char_key('r')), props(&state, false));
        assert!(actions.is_empty());
    }
}
