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

use super::App;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

const MOUSE_SCROLL_LINES: i64 = 3;

pub fn handle_terminal_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::FocusGained => app.set_window_focused(true),
        Event::FocusLost => app.set_window_focused(false),
        // Resize is picked up by the next render's layout sync
        _ => {}
    }
}

fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    let area = app.rendered_chat_area;
    let over_chat = mouse.column >= area.x
        && mouse.column < area.right()
        && mouse.row >= area.y
        && mouse.row < area.bottom();
    if !over_chat {
        return;
    }
    match mouse.kind {
        MouseEventKind::ScrollUp => app.user_scroll(-MOUSE_SCROLL_LINES),
        MouseEventKind::ScrollDown => app.user_scroll(MOUSE_SCROLL_LINES),
        _ => {}
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => app.should_quit = true,
        (KeyCode::Char('q') | KeyCode::Esc, _) => app.should_quit = true,
        (KeyCode::Up | KeyCode::Char('k'), _) => app.user_scroll(-1),
        (KeyCode::Down | KeyCode::Char('j'), _) => app.user_scroll(1),
        (KeyCode::PageUp, _) => app.user_scroll(-app.page_height()),
        (KeyCode::PageDown, _) => app.user_scroll(app.page_height()),
        (KeyCode::Home, _) => app.user_scroll_to_top(),
        (KeyCode::End, _) => app.user_scroll_to_bottom(),
        (KeyCode::Char('l'), _) => {
            if !app.load_older_history() {
                tracing::debug!("no older history to load");
            }
        }
        _ => {}
    }
}
