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

use chat_viewport::app::{App, FeedEvent, TerminalViewport};
use chat_viewport::settings::ViewportSettings;
use chat_viewport::transcript::{Message, Transcript};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

/// Build an `App` over `transcript` with `settings`. No terminal, no feed task.
pub fn test_app(settings: ViewportSettings, transcript: Vec<Message>, history: Vec<Message>) -> App {
    App::new(settings, Transcript::from(transcript), history)
}

/// `count` bot messages `"{label} {i}"`, oldest first.
pub fn bot_lines(label: &str, count: usize) -> Vec<Message> {
    (0..count).map(|i| Message::text("bot", format!("{label} {i}"))).collect()
}

/// Settings with a small prompt offset so short test transcripts can scroll past it.
pub fn tight_settings() -> ViewportSettings {
    ViewportSettings { message_prompt_offset: 5, ..ViewportSettings::default() }
}

/// Draw one frame into a `width` x `height` test terminal and return its rows.
/// The chat pane is the top `height - 2` rows.
pub fn render(app: &mut App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test backend");
    terminal.draw(|frame| chat_viewport::ui::render(frame, app)).expect("draw");
    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(usize::from(width))
        .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect())
        .collect()
}

pub fn scroll_top(app: &App) -> i64 {
    app.scroll.viewport().map_or(-1, TerminalViewport::scroll_top)
}

pub fn max_scroll_top(app: &App) -> i64 {
    app.scroll.viewport().map_or(-1, TerminalViewport::max_scroll_top)
}

pub fn deliver(app: &mut App, message: Message) {
    app.handle_feed_event(FeedEvent::Message(message));
}

pub fn status_text(app: &App) -> String {
    chat_viewport::ui::status_line(app).to_string()
}
