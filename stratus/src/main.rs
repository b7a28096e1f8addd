//! stratus - terminal weather-display client
//!
//! Session shape:
//! 1. Keyboard -> `ForecastPanel::handle_event` -> actions
//! 2. Actions -> store/reducer -> state change + effects
//! 3. `Effect::FetchForecast` -> gateway task -> result action
//! 4. Gateway push stream -> `ForecastDidLoad` over the same channel
//!
//! Logging goes to the file named by `STRATUS_LOG` (the terminal belongs to
//! the UI); unset means no logging.

use std::cell::RefCell;
use std::io;
use std::sync::Mutex;
use std::time::Duration;

use chrono::Local;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio_stream::StreamExt;
use tracing_subscriber::EnvFilter;

use stratus::components::{Component, ForecastPanel, ForecastPanelProps};
use stratus::{EventKind, EventOutcome, Gateway, Runtime};
use stratus_core::{Action, Effect, ForecastState, Unit};

/// Spinner animation cadence.
const TICK_MS: u64 = 120;

#[derive(Parser, Debug)]
#[command(name = "stratus")]
#[command(about = "A terminal weather-display client")]
struct Args {
    /// Base URL of the forecast backend
    #[arg(long, default_value = "http://127.0.0.1:8787")]
    backend_url: String,

    /// Push refresh interval in seconds
    #[arg(long, short, default_value = "900")]
    refresh_interval: u64,

    /// Start with Fahrenheit readings
    #[arg(long)]
    fahrenheit: bool,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    init_logging();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &args).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn init_logging() {
    let Ok(path) = std::env::var("STRATUS_LOG") else {
        return;
    };
    match std::fs::File::create(&path) {
        Ok(file) => {
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        Err(e) => eprintln!("could not open log file {}: {}", path, e),
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    args: &Args,
) -> io::Result<()> {
    let unit = if args.fahrenheit {
        Unit::Fahrenheit
    } else {
        Unit::Celsius
    };
    let gateway = Gateway::new(args.backend_url.clone());

    let mut runtime = Runtime::new(ForecastState::new(unit));

    // Spinner animation.
    runtime
        .subscriptions()
        .interval("tick", Duration::from_millis(TICK_MS), || Action::Tick);

    // Backend push channel; deliveries land like any other load.
    let refresh = gateway
        .refresh_stream(Duration::from_secs(args.refresh_interval))
        .map(|entries| Action::ForecastDidLoad {
            entries,
            received: Local::now(),
        });
    runtime.subscriptions().stream("refresh", refresh);

    // Fetch on startup.
    runtime.enqueue(Action::ForecastFetch);

    let panel = RefCell::new(ForecastPanel);
    let fetch_gateway = gateway.clone();

    runtime
        .run(
            terminal,
            |frame, area, state| {
                panel.borrow_mut().render(
                    frame,
                    area,
                    ForecastPanelProps {
                        state,
                        is_focused: true,
                    },
                );
            },
            |event, state| {
                if let EventKind::Resize(_, _) = event {
                    return EventOutcome::needs_render();
                }
                EventOutcome::from_actions(panel.borrow_mut().handle_event(
                    event,
                    ForecastPanelProps {
                        state,
                        is_focused: true,
                    },
                ))
            },
            move |effect, ctx| match effect {
                Effect::FetchForecast => {
                    let gateway = fetch_gateway.clone();
                    ctx.tasks().spawn("forecast", async move {
                        match gateway.fetch_forecast().await {
                            Ok(entries) => Action::ForecastDidLoad {
                                entries,
                                received: Local::now(),
                            },
                            Err(e) => Action::ForecastDidError(e.to_string()),
                        }
                    });
                }
            },
        )
        .await
}
