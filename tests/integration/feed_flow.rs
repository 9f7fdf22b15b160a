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

use chat_viewport::app::{FeedEvent, feed};
use chat_viewport::settings::ViewportSettings;
use chat_viewport::transcript::Message;
use pretty_assertions::assert_eq;
use std::time::Duration;

use crate::helpers::{
    bot_lines, deliver, max_scroll_top, render, scroll_top, status_text, test_app, tight_settings,
};

// --- Following the bottom ---

#[test]
fn first_frame_lands_at_bottom() {
    let mut app = test_app(ViewportSettings::default(), bot_lines("msg", 30), Vec::new());
    let rows = render(&mut app, 40, 12);
    assert_eq!(scroll_top(&app), max_scroll_top(&app));
    assert!(rows[9].contains("msg 29"));
}

#[test]
fn incoming_message_at_bottom_keeps_following() {
    let mut app = test_app(ViewportSettings::default(), bot_lines("msg", 30), Vec::new());
    render(&mut app, 40, 12);

    deliver(&mut app, Message::text("bot", "fresh"));
    let rows = render(&mut app, 40, 12);

    assert_eq!(scroll_top(&app), max_scroll_top(&app));
    assert!(rows[9].contains("fresh"));
    assert_eq!(app.scroll.state().unread_count, 0);
}

// --- Reading older content ---

#[test]
fn scrolled_reader_is_not_yanked_and_counts_unread() {
    let mut app = test_app(tight_settings(), bot_lines("msg", 30), Vec::new());
    render(&mut app, 40, 12);
    app.user_scroll(-10);
    let pinned = scroll_top(&app);
    assert!(app.scroll.state().is_scrolling);

    deliver(&mut app, Message::text("bot", "one"));
    deliver(&mut app, Message::text("bot", "two"));
    render(&mut app, 40, 12);

    assert_eq!(scroll_top(&app), pinned);
    assert_eq!(app.scroll.state().unread_count, 2);
    assert!(status_text(&app).contains("2 unread"));
}

#[test]
fn returning_to_bottom_clears_unread() {
    let mut app = test_app(tight_settings(), bot_lines("msg", 30), Vec::new());
    render(&mut app, 40, 12);
    app.user_scroll(-10);
    deliver(&mut app, Message::text("bot", "missed"));
    render(&mut app, 40, 12);
    assert_eq!(app.scroll.state().unread_count, 1);

    app.user_scroll_to_bottom();

    assert!(!app.scroll.state().is_scrolling);
    assert_eq!(app.scroll.state().unread_count, 0);
    assert!(!status_text(&app).contains("unread"));
}

#[test]
fn small_scroll_within_offset_still_follows() {
    let mut app = test_app(tight_settings(), bot_lines("msg", 30), Vec::new());
    render(&mut app, 40, 12);
    app.user_scroll(-3);
    assert!(!app.scroll.state().is_scrolling);

    deliver(&mut app, Message::text("bot", "fresh"));
    render(&mut app, 40, 12);
    assert_eq!(scroll_top(&app), max_scroll_top(&app));
}

#[test]
fn auto_jump_snaps_even_while_scrolled() {
    let settings = ViewportSettings { auto_jump_to_bottom: true, ..tight_settings() };
    let mut app = test_app(settings, bot_lines("msg", 30), Vec::new());
    render(&mut app, 40, 12);
    app.user_scroll(-10);

    deliver(&mut app, Message::text("bot", "fresh"));
    render(&mut app, 40, 12);
    assert_eq!(scroll_top(&app), max_scroll_top(&app));
}

#[test]
fn own_messages_never_count_as_unread() {
    let mut app = test_app(tight_settings(), bot_lines("msg", 30), Vec::new());
    render(&mut app, 40, 12);
    app.user_scroll(-10);

    deliver(&mut app, Message::text("user", "me"));
    render(&mut app, 40, 12);
    assert_eq!(app.scroll.state().unread_count, 0);
}

// --- Window focus ---

#[test]
fn unfocused_window_accumulates_unread_while_following() {
    let mut app = test_app(ViewportSettings::default(), bot_lines("msg", 30), Vec::new());
    render(&mut app, 40, 12);
    app.set_window_focused(false);

    deliver(&mut app, Message::text("bot", "while away"));
    render(&mut app, 40, 12);

    assert_eq!(scroll_top(&app), max_scroll_top(&app));
    assert_eq!(app.scroll.state().unread_count, 1);
}

// --- Playback ---

#[tokio::test(start_paused = true)]
async fn playback_feeds_transcript_in_order() {
    let mut app = test_app(ViewportSettings::default(), Vec::new(), Vec::new());
    let script = vec![Message::text("user", "hi"), Message::text("bot", "hello")];
    let handle = feed::spawn_playback(script, Duration::from_millis(100), app.feed_tx.clone());

    while !app.feed_finished {
        let Some(event) = app.feed_rx.recv().await else { break };
        app.handle_feed_event(event);
    }
    handle.await.expect("playback task");

    assert_eq!(
        app.transcript.messages(),
        &[Message::text("user", "hi"), Message::text("bot", "hello")]
    );
    assert!(!app.typing);
}

#[tokio::test(start_paused = true)]
async fn typing_indicator_precedes_bot_message() {
    let app = test_app(ViewportSettings::default(), Vec::new(), Vec::new());
    let mut rx = app.feed_rx;
    let handle =
        feed::spawn_playback(vec![Message::text("bot", "x")], Duration::from_millis(50), app.feed_tx);

    let mut seen = Vec::new();
    while let Some(event) = rx.recv().await {
        let done = event == FeedEvent::Finished;
        seen.push(event);
        if done {
            break;
        }
    }
    handle.await.expect("playback task");

    assert_eq!(
        seen,
        vec![
            FeedEvent::Typing(true),
            FeedEvent::Typing(false),
            FeedEvent::Message(Message::text("bot", "x")),
            FeedEvent::Finished,
        ]
    );
}
