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

//! Scripted message playback standing in for a live chat backend.

use crate::transcript::{Message, Sender};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    Typing(bool),
    Message(Message),
    Finished,
}

/// Play `script` into `tx`, one message per `interval`. Bot-side messages are
/// preceded by a typing indicator. Stops early once the receiver is dropped.
pub fn spawn_playback(
    script: Vec<Message>,
    interval: Duration,
    tx: mpsc::UnboundedSender<FeedEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        if play(script, interval, &tx).await.is_err() {
            tracing::debug!("feed receiver dropped; playback stopped");
            return;
        }
        let _ = tx.send(FeedEvent::Finished);
    })
}

async fn play(
    script: Vec<Message>,
    interval: Duration,
    tx: &mpsc::UnboundedSender<FeedEvent>,
) -> Result<(), mpsc::error::SendError<FeedEvent>> {
    for message in script {
        if shows_typing(&message.sender) {
            tx.send(FeedEvent::Typing(true))?;
            tokio::time::sleep(interval).await;
            tx.send(FeedEvent::Typing(false))?;
        } else {
            tokio::time::sleep(interval / 2).await;
        }
        tracing::trace!(sender = message.sender.as_str(), "feed message");
        tx.send(FeedEvent::Message(message))?;
    }
    Ok(())
}

fn shows_typing(sender: &Sender) -> bool {
    !matches!(sender, Sender::User | Sender::System)
}

/// Conversation used when no `--script` is given.
#[must_use]
pub fn demo_script() -> Vec<Message> {
    vec![
        Message::text("user", "Hi! Can you show me how the viewport follows new messages?"),
        Message::text("bot", "Sure. Every new message snaps the view to the bottom."),
        Message::text(
            "bot",
            "Scroll up with the mouse wheel or the arrow keys and new messages stop \
             pulling you down. The status line counts what you missed.",
        ),
        Message::text("user", "And older messages?"),
        Message::text(
            "bot",
            "Press **l** to load an older batch. The message you were reading stays put \
             while history is inserted above it.",
        ),
        Message::text("system", "-- history loading is anchor-corrected --"),
        Message::text("bot", "Unfocus the terminal and messages keep counting as unread."),
        Message::text("user", "Nice."),
        Message::text("bot", "That is the whole tour. Press q to quit."),
    ]
}

/// Older backlog used when no `--history` is given, oldest first.
#[must_use]
pub fn demo_history(count: usize) -> Vec<Message> {
    (1..=count)
        .map(|n| {
            let sender = if n % 3 == 0 { "user" } else { "bot" };
            Message::text(sender, format!("Earlier message #{n}"))
        })
        .collect()
}
