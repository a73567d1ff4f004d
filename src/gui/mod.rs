//! Interactive mode: a full-screen terminal form driven by the same
//! one-second ticker as the console mode.

pub mod app;
pub mod ui;

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use ratatui::DefaultTerminal;
use tracing::info;

use crate::config::PhaseDurations;
use crate::error::AppError;
use crate::notify::DesktopNotifier;
use crate::runtime::{self, Shutdown};
use app::App;

/// Restores the terminal on every exit path.
struct TerminalSession {
    terminal: DefaultTerminal,
}

impl TerminalSession {
    fn enter() -> std::io::Result<Self> {
        Ok(Self {
            terminal: ratatui::try_init()?,
        })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        ratatui::restore();
    }
}

pub async fn run(durations: PhaseDurations, mut shutdown: Shutdown) -> Result<(), AppError> {
    let mut app = App::new(durations, DesktopNotifier::default());
    let mut session = TerminalSession::enter()?;
    let mut events = EventStream::new();
    let mut ticker = runtime::ticker().await;

    loop {
        session.terminal.draw(|frame| ui::draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        tokio::select! {
            biased;
            _ = shutdown.cancelled() => app.quit(),
            _ = ticker.tick() => app.on_tick(),
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => app.quit(),
            },
        }
    }

    info!(completed = app.completed(), "interactive session closed");
    Ok(())
}
