use crate::clipboard::{ClipboardHandler, ClipboardSink};
use crate::config::Config;
use crate::service::GotinyClient;
use crate::shortener::{ControllerOptions, SubmissionController};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;

/// Run the interactive UI until the user quits.
pub fn run(config: Config) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    // Service calls are spawned from the synchronous UI loop.
    let _enter = runtime.enter();

    let client = GotinyClient::new(&config.service)?;
    let service_label = service_host(client.endpoint());
    let controller = SubmissionController::new(Arc::new(client), ControllerOptions::from(&config));

    let clipboard: Option<Box<dyn ClipboardSink>> = match ClipboardHandler::new() {
        Ok(handler) => Some(Box::new(handler)),
        Err(err) => {
            tracing::warn!(error = %err, "Clipboard disabled");
            None
        }
    };

    let mut app = App::new(controller, clipboard, &config.ui).with_service_label(service_label);
    let tick_rate = Duration::from_millis(config.ui.tick_ms);

    let (mut terminal, guard) = setup_terminal().context("Failed to set up terminal")?;
    let events = EventHandler::new(tick_rate);
    tracing::info!(tick_ms = config.ui.tick_ms, "UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => app.on_paste(text),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }

        app.poll_service();
    }

    drop(guard);
    tracing::info!("UI stopped");
    Ok(())
}

/// Host part of the endpoint for the header, e.g. `gotiny.cc`.
fn service_host(endpoint: &str) -> String {
    let without_scheme = endpoint
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(endpoint);
    without_scheme
        .split('/')
        .next()
        .unwrap_or(without_scheme)
        .to_string()
}
