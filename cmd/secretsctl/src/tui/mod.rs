//! Interactive request panel.
//!
//! Each backend call runs in its own task and reports back over a channel;
//! the draw loop applies outcomes in completion order, so several submits can
//! be in flight and the last completed load decides what is shown.

mod app;
mod layout;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use pkg_client::{ApiError, HttpClient};
use pkg_types::SecretRequest;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::info;

use app::{Action, App};

/// Outcome of a backend call, delivered to the draw loop.
enum PanelEvent {
    Loaded(Result<Vec<SecretRequest>, ApiError>),
    Submitted(Result<(), ApiError>),
}

pub async fn run(client: HttpClient) -> anyhow::Result<()> {
    info!("Opening request panel against {}", client.base_url());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, client).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    client: HttpClient,
) -> anyhow::Result<()> {
    let (tx, mut rx) = unbounded_channel();
    let mut app = App::new();

    // Mount-time load.
    spawn_load(&client, &tx);

    loop {
        apply_outcomes(&mut app, &mut rx, &client, &tx);

        terminal.draw(|frame| layout::render(frame, &app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    match app.handle_key(key) {
                        Some(Action::Reload) => spawn_load(&client, &tx),
                        Some(Action::Submit) => spawn_submit(&client, &tx, &app),
                        None => {}
                    }
                }
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

fn apply_outcomes(
    app: &mut App,
    rx: &mut UnboundedReceiver<PanelEvent>,
    client: &HttpClient,
    tx: &UnboundedSender<PanelEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            PanelEvent::Loaded(result) => {
                if app.panel.finish_load(result) {
                    app.last_refresh = Some(chrono::Local::now());
                }
            }
            PanelEvent::Submitted(result) => {
                if app.panel.finish_submit(result) {
                    spawn_load(client, tx);
                }
            }
        }
    }
}

fn spawn_load(client: &HttpClient, tx: &UnboundedSender<PanelEvent>) {
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = client.list_requests().await;
        // The receiver is gone only once the panel has closed.
        let _ = tx.send(PanelEvent::Loaded(result));
    });
}

fn spawn_submit(client: &HttpClient, tx: &UnboundedSender<PanelEvent>, app: &App) {
    let body = app.panel.draft_body();
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = client.create_request(&body).await;
        let _ = tx.send(PanelEvent::Submitted(result));
    });
}
