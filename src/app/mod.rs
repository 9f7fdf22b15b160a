// chat_viewport — A terminal chat transcript viewport with managed scrolling
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

mod events;
pub mod feed;
mod state;
mod viewport;

pub use events::handle_terminal_event;
pub use feed::FeedEvent;
pub use state::App;
pub use viewport::TerminalViewport;

use crate::Cli;
use crate::settings;
use crate::transcript::{self, Message, Transcript};
use crossterm::event::EventStream;
use futures::{FutureExt as _, StreamExt};
use std::time::{Duration, Instant};

const DEMO_HISTORY_LEN: usize = 45;

/// Build the app from CLI arguments: settings, seeded transcript, history backlog.
pub fn create_app(cli: &Cli) -> anyhow::Result<App> {
    let settings = settings::resolve(cli.settings.as_deref())?;
    let history = match cli.history.as_deref() {
        Some(path) => transcript::load_messages(path)?,
        None => feed::demo_history(DEMO_HISTORY_LEN),
    };
    let welcome = Message::node("bot", crate::ui::welcome_node());
    tracing::info!(history = history.len(), "app created");
    Ok(App::new(settings, Transcript::from(vec![welcome]), history))
}

/// Start scripted playback into the app's feed channel.
pub fn start_feed(app: &App, cli: &Cli) -> anyhow::Result<tokio::task::JoinHandle<()>> {
    let script = match cli.script.as_deref() {
        Some(path) => transcript::load_messages(path)?,
        None => feed::demo_script(),
    };
    let interval = Duration::from_millis(cli.interval_ms);
    Ok(feed::spawn_playback(script, interval, app.feed_tx.clone()))
}

// ---------------------------------------------------------------------------
// TUI event loop
// ---------------------------------------------------------------------------

pub async fn run_tui(app: &mut App) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    // Mouse capture and focus reporting (ignore error on unsupported terminals)
    let _ = crossterm::execute!(
        std::io::stdout(),
        crossterm::event::EnableMouseCapture,
        crossterm::event::EnableFocusChange,
    );

    let mut events = EventStream::new();
    let tick_duration = Duration::from_millis(16);
    let mut last_render = Instant::now();

    let result = loop {
        // Phase 1: wait for at least one event or the next frame tick
        let time_to_next = tick_duration.saturating_sub(last_render.elapsed());
        tokio::select! {
            Some(Ok(event)) = events.next() => {
                events::handle_terminal_event(app, event);
            }
            Some(event) = app.feed_rx.recv() => {
                app.handle_feed_event(event);
            }
            () = tokio::time::sleep(time_to_next) => {}
        }

        // Phase 2: drain all remaining queued events (non-blocking)
        loop {
            if let Some(Some(Ok(event))) = events.next().now_or_never() {
                events::handle_terminal_event(app, event);
                continue;
            }
            match app.feed_rx.try_recv() {
                Ok(event) => app.handle_feed_event(event),
                Err(_) => break,
            }
        }

        if app.should_quit {
            break Ok(());
        }

        // Phase 3: render once
        if app.typing {
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
        }
        if let Err(e) = terminal.draw(|f| crate::ui::render(f, app)) {
            break Err(anyhow::Error::new(e));
        }
        last_render = Instant::now();
    };

    // Restore terminal
    let _ = crossterm::execute!(
        std::io::stdout(),
        crossterm::event::DisableMouseCapture,
        crossterm::event::DisableFocusChange,
    );
    ratatui::restore();

    result
}
