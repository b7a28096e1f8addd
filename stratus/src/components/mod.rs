//! UI components
//!
//! Components are pure: props carry everything they read, `handle_event`
//! returns actions without touching state, and `render` draws from props
//! alone. The panel owns the frame chrome and delegates to the entry list
//! and the help bar.

use ratatui::layout::Rect;
use ratatui::Frame;

use crate::events::EventKind;
use stratus_core::Action;

pub mod entry_list;
pub mod forecast_panel;
pub mod help_bar;

pub use entry_list::{EntryList, EntryListProps};
pub use forecast_panel::{ForecastPanel, ForecastPanelProps, SPINNERS};
pub use help_bar::{HelpBar, HelpBarProps};

pub trait Component {
    /// Read-only data needed for rendering.
    type Props<'a>;

    /// Handle an event and return actions to dispatch. Render-only
    /// components keep the default.
    fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> Vec<Action> {
        let _ = (event, props);
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
