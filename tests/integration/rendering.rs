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
use chat_viewport::transcript::Message;
use pretty_assertions::assert_eq;

use crate::helpers::{bot_lines, render, test_app};

const WIDTH: u16 = 40;
const HEIGHT: u16 = 12;
const CHAT_ROWS: usize = 10;

fn last_column(rows: &[String]) -> Vec<String> {
    rows.iter().take(CHAT_ROWS).map(|row| row.chars().last().unwrap_or(' ').to_string()).collect()
}

#[test]
fn short_transcript_sits_at_bottom_of_pane() {
    let messages = vec![
        Message::text("bot", "hi"),
        Message::text("user", "hello"),
        Message::text("system", "joined"),
    ];
    let mut app = test_app(ViewportSettings::default(), messages, Vec::new());
    let rows = render(&mut app, WIDTH, HEIGHT);

    for row in &rows[..5] {
        assert_eq!(row.trim(), "");
    }
    assert_eq!(rows[5].trim_end(), "◆ hi");
    assert_eq!(rows[7].trim_end(), "hello");
    assert_eq!(rows[9].trim_end(), "joined");
}

#[test]
fn bot_series_stacks_under_one_avatar() {
    let messages = vec![
        Message::text("bot", "first"),
        Message::text("bot", "second"),
        Message::text("bot", "third"),
    ];
    let mut app = test_app(ViewportSettings::default(), messages, Vec::new());
    let rows = render(&mut app, WIDTH, HEIGHT);

    assert_eq!(
        rows[7..CHAT_ROWS].iter().map(|r| r.trim_end().to_owned()).collect::<Vec<_>>(),
        vec!["◆ first", "  second", "  third"]
    );
}

#[test]
fn status_row_and_separator_frame_the_pane() {
    let mut app = test_app(ViewportSettings::default(), bot_lines("msg", 3), Vec::new());
    let rows = render(&mut app, WIDTH, HEIGHT);

    assert_eq!(rows[CHAT_ROWS], "─".repeat(usize::from(WIDTH)));
    assert!(rows[CHAT_ROWS + 1].contains("q quit"));
}

#[test]
fn scrollbar_appears_only_when_content_overflows() {
    let mut app = test_app(ViewportSettings::default(), bot_lines("msg", 3), Vec::new());
    let rows = render(&mut app, WIDTH, HEIGHT);
    assert!(last_column(&rows).iter().all(|c| c == " "));

    let mut app = test_app(ViewportSettings::default(), bot_lines("msg", 30), Vec::new());
    let rows = render(&mut app, WIDTH, HEIGHT);
    assert!(last_column(&rows).iter().all(|c| c != " "));
}

#[test]
fn scrollbar_can_be_disabled() {
    let settings = ViewportSettings { show_scrollbar: false, ..ViewportSettings::default() };
    let mut app = test_app(settings, bot_lines("msg", 30), Vec::new());
    let rows = render(&mut app, WIDTH, HEIGHT);
    assert!(last_column(&rows).iter().all(|c| c == " "));
}

#[test]
fn shrinking_the_pane_keeps_newest_message_visible() {
    let mut app = test_app(ViewportSettings::default(), bot_lines("msg", 30), Vec::new());
    let rows = render(&mut app, WIDTH, HEIGHT);
    assert!(rows[CHAT_ROWS - 1].contains("msg 29"));

    let rows = render(&mut app, WIDTH, 8);

    assert!(!app.scroll.state().is_scrolling);
    let position = app.scroll.viewport().map(|vp| (vp.scroll_top(), vp.max_scroll_top()));
    assert_eq!(position, Some((24, 24)));
    assert!(rows[5].contains("msg 29"), "newest row hidden: {:?}", rows[5]);
}

#[test]
fn wrapped_lines_count_toward_scroll_height() {
    let long = "word ".repeat(30);
    let mut app = test_app(ViewportSettings::default(), vec![Message::text("bot", long)], Vec::new());
    render(&mut app, WIDTH, HEIGHT);

    let height = app.scroll.viewport().map_or(0, |vp| vp.scroll_height());
    assert!(height > 1, "wrapped height was {height}");
}

#[test]
fn welcome_card_renders_verbatim() {
    let welcome = Message::node("bot", chat_viewport::ui::welcome_node());
    let mut app = test_app(ViewportSettings::default(), vec![welcome], Vec::new());
    let rows = render(&mut app, WIDTH, 20);

    assert!(rows.iter().any(|row| row.contains("Welcome to the chat!")));
    assert!(rows.iter().any(|row| row.contains("chat-viewport v")));
}

#[test]
fn typing_indicator_renders_after_last_message() {
    let mut app = test_app(ViewportSettings::default(), vec![Message::text("user", "ping")], Vec::new());
    app.typing = true;
    let rows = render(&mut app, WIDTH, HEIGHT);

    assert!(rows[CHAT_ROWS - 1].contains("typing..."));
    assert!(rows[CHAT_ROWS - 3].contains("ping"));
}
