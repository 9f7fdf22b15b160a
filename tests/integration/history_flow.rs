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

use chat_viewport::settings::ViewportSettings;
use pretty_assertions::assert_eq;

use crate::helpers::{bot_lines, max_scroll_top, render, scroll_top, status_text, test_app, tight_settings};

fn history_settings(batch: usize) -> ViewportSettings {
    ViewportSettings { history_batch_size: batch, ..tight_settings() }
}

#[test]
fn prepend_keeps_top_row_anchored() {
    let mut app = test_app(history_settings(20), bot_lines("new", 30), bot_lines("old", 20));
    render(&mut app, 40, 12);
    app.user_scroll_to_top();
    let rows = render(&mut app, 40, 12);
    assert!(rows[0].contains("new 0"));

    assert!(app.load_older_history());
    let rows = render(&mut app, 40, 12);

    assert_eq!(scroll_top(&app), 20);
    assert!(rows[0].contains("new 0"), "top row moved: {:?}", rows[0]);
    assert!(!app.scroll.state().is_loading_chat_history);
    assert_eq!(app.scroll.state().chat_scroll_height, 50);
}

#[test]
fn prepend_mid_transcript_keeps_reading_position() {
    let mut app = test_app(history_settings(5), bot_lines("new", 30), bot_lines("old", 20));
    render(&mut app, 40, 12);
    app.user_scroll(-8);
    let before = render(&mut app, 40, 12);
    let anchor_top = scroll_top(&app);

    assert!(app.load_older_history());
    let after = render(&mut app, 40, 12);

    assert_eq!(scroll_top(&app), anchor_top + 5);
    assert!(before[3].contains("new 15"));
    assert!(after[3].contains("new 15"), "reading position moved: {:?}", after[3]);
}

#[test]
fn batches_come_newest_first_until_backlog_is_empty() {
    let mut app = test_app(history_settings(8), bot_lines("new", 30), bot_lines("old", 20));
    render(&mut app, 40, 12);
    assert!(status_text(&app).contains("l: 20 older"));

    for remaining in [12, 4, 0] {
        assert!(app.load_older_history());
        render(&mut app, 40, 12);
        assert_eq!(app.history.len(), remaining);
    }
    assert!(!app.load_older_history());
    assert!(!status_text(&app).contains("older"));

    let first = &app.transcript.messages()[0];
    assert_eq!(first, &chat_viewport::transcript::Message::text("bot", "old 0"));
    assert_eq!(app.transcript.len(), 50);
}

#[test]
fn second_load_waits_for_first_to_settle() {
    let mut app = test_app(history_settings(5), bot_lines("new", 30), bot_lines("old", 20));
    render(&mut app, 40, 12);

    assert!(app.load_older_history());
    assert!(status_text(&app).contains("loading history"));
    assert!(!app.load_older_history());

    render(&mut app, 40, 12);
    assert!(app.load_older_history());
}

#[test]
fn load_at_bottom_lands_on_new_bottom() {
    let mut app = test_app(history_settings(5), bot_lines("new", 30), bot_lines("old", 20));
    render(&mut app, 40, 12);
    let bottom = max_scroll_top(&app);
    assert_eq!(scroll_top(&app), bottom);

    assert!(app.load_older_history());
    render(&mut app, 40, 12);

    // Anchored shift equals the prepended height, which lands on the new bottom.
    assert_eq!(scroll_top(&app), bottom + 5);
    assert_eq!(scroll_top(&app), max_scroll_top(&app));
}
