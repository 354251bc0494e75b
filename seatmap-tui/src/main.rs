use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use seatmap_client::ClientConfig;
use seatmap_tui::{App, worker};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Route tracing into the TUI log pane
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(tui_logger::tracing_subscriber_layer())
        .with(env_filter)
        .init();
    tui_logger::init_logger(log::LevelFilter::Info).ok();
    tui_logger::set_default_level(log::LevelFilter::Info);

    let config = ClientConfig::from_env();
    tracing::info!(base_url = %config.base_url, "connecting to table service");
    let client = config.build_http_client();

    // Background network worker; cancelled on teardown so nothing updates
    // state after the UI is gone
    let cancel = CancellationToken::new();
    let (events_tx, events_rx) = mpsc::channel(16);
    let commands = worker::spawn(client, events_tx, cancel.clone());
    let app = App::new(commands);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, events_rx).await;

    // Restore terminal
    cancel.cancel();
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    mut events: mpsc::Receiver<worker::AppEvent>,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| seatmap_tui::ui::draw(f, &app))?;

        // Keyboard input, with a short tick so worker events keep flowing
        // App::on_key filters out release events itself
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.on_key(key);
            }
        }

        // Drain pending worker events (non-blocking)
        while let Ok(event) = events.try_recv() {
            app.on_app_event(event);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
