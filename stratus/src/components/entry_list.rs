//! Entry list body
//!
//! Renders whatever the state holds: the forecast entries, an error with a
//! retry hint, the loading spinner, or the initial prompt. Entry layout
//! comes from `entry_view`; this file only turns views into styled lines.

use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{Component, SPINNERS};
use stratus_core::{entry_view, EntryView, ForecastState};

pub const ERROR_ICON: &str = "⚠";

pub struct EntryList;

pub struct EntryListProps<'a> {
    pub state: &'a ForecastState,
}

impl Component for EntryList {
    type Props<'a> = EntryListProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let lines = lines_for_state(props.state);
        frame.render_widget(Paragraph::new(lines), area);
    }
}

fn lines_for_state(state: &ForecastState) -> Vec<Line<'static>> {
    if let Some(error) = state.error.as_deref() {
        return error_lines(error);
    }
    if !state.entries.is_empty() {
        return entry_lines(state);
    }
    if state.fetching {
        return loading_lines(state.tick_count);
    }
    prompt_lines()
}

fn error_lines(error: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(ERROR_ICON).centered(),
        Line::from(Span::styled("Error", Style::default().fg(Color::Red).bold())).centered(),
        Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Rgb(200, 100, 100)),
        ))
        .centered(),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("r", Style::default().fg(Color::Cyan).bold()),
            Span::styled(" to retry", Style::default().fg(Color::DarkGray)),
        ])
        .centered(),
    ]
}

fn entry_lines(state: &ForecastState) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for entry in &state.entries {
        let view = entry_view(entry, state.unit);
        lines.extend(view_lines(view));
        lines.push(Line::from(""));
    }

    if let Some(refreshed) = state.last_refreshed {
        lines.push(
            Line::from(Span::styled(
                format!("Updated {}", refreshed.format("%x %r")),
                Style::default().fg(Color::DarkGray),
            ))
            .centered(),
        );
    }

    lines
}

fn view_lines(view: EntryView) -> Vec<Line<'static>> {
    let label_style = if view.note.is_some() {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default().fg(Color::Cyan).bold()
    };

    let mut lines = vec![Line::from(Span::styled(view.label, label_style))];

    for block in view.blocks {
        let mut spans = Vec::with_capacity(3);
        if let Some(heading) = block.heading {
            spans.push(Span::styled(
                format!("  {:<6}", heading),
                Style::default().fg(Color::Gray),
            ));
        } else {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("{:>7}", block.reading),
            Style::default().fg(Color::White).bold(),
        ));
        spans.push(Span::styled(
            format!("  {}", block.description),
            Style::default().fg(Color::Gray),
        ));
        lines.push(Line::from(spans));
    }

    if let Some(note) = view.note {
        for text in note.split('\n') {
            lines.push(Line::from(Span::styled(
                format!("  {}", text),
                Style::default().fg(Color::Yellow),
            )));
        }
    }

    lines
}

fn loading_lines(tick_count: u32) -> Vec<Line<'static>> {
    let spinner = SPINNERS[(tick_count as usize / 2) % SPINNERS.len()];
    let dots = ".".repeat((tick_count as usize / 3) % 4);

    vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(spinner.to_string(), Style::default().fg(Color::Cyan)),
            Span::styled(
                format!(" Fetching forecast{:<3}", dots),
                Style::default().fg(Color::Gray),
            ),
        ])
        .centered(),
    ]
}

fn prompt_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("r", Style::default().fg(Color::Cyan).bold()),
            Span::styled(" to fetch the forecast", Style::default().fg(Color::DarkGray)),
        ])
        .centered(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use stratus_core::{
        CurrentConditions, ForecastEntry, TempKind, Temperature, WeatherWarning,
    };

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn current(celsius: f32) -> ForecastEntry {
        ForecastEntry::Current(CurrentConditions {
            summary: String::new(),
            celsius: Temperature::new(TempKind::Current, celsius),
            fahrenheit: Temperature::new(TempKind::Current, celsius * 9.0 / 5.0 + 32.0),
            description: "Clear".into(),
        })
    }

    #[test]
    fn error_takes_priority_over_entries() {
        let state = ForecastState {
            entries: vec![current(21.4)],
            error: Some("backend unreachable".into()),
            ..Default::default()
        };

        let lines = lines_for_state(&state);
        let text: Vec<String> = lines.iter().map(line_text).collect();

        assert!(text.iter().any(|l| l.contains("backend unreachable")));
        assert!(text.iter().any(|l| l.contains("to retry")));
        assert!(!text.iter().any(|l| l.contains("21.4°")));
    }

    #[test]
    fn entries_render_with_reading_and_description() {
        let state = ForecastState {
            entries: vec![current(21.4)],
            ..Default::default()
        };

        let lines = lines_for_state(&state);
        let text: Vec<String> = lines.iter().map(line_text).collect();

        assert!(text.iter().any(|l| l.contains("Now")));
        assert!(text.iter().any(|l| l.contains("21.4°") && l.contains("Clear")));
    }

    #[test]
    fn warning_note_lines_are_indented() {
        let state = ForecastState {
            entries: vec![ForecastEntry::Warning(WeatherWarning {
                title: "Wind Warning".into(),
                summary: "Gusts to 90 km/h.\nSecure loose objects.".into(),
            })],
            ..Default::default()
        };

        let lines = lines_for_state(&state);
        let text: Vec<String> = lines.iter().map(line_text).collect();

        assert!(text.iter().any(|l| l.contains("Wind Warning")));
        assert!(text.iter().any(|l| l.contains("Gusts to 90 km/h.")));
        assert!(text.iter().any(|l| l.contains("Secure loose objects.")));
    }

    #[test]
    fn fetching_without_entries_shows_spinner() {
        let state = ForecastState {
            fetching: true,
            ..Default::default()
        };

        let lines = lines_for_state(&state);
        let text: Vec<String> = lines.iter().map(line_text).collect();
        assert!(text.iter().any(|l| l.contains("Fetching forecast")));
    }

    #[test]
    fn idle_empty_state_prompts_for_fetch() {
        let state = ForecastState::default();

        let lines = lines_for_state(&state);
        let text: Vec<String> = lines.iter().map(line_text).collect();
        assert!(text.iter().any(|l| l.contains("to fetch the forecast")));
    }
}
