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

use crate::error::AppError;
use ratatui::text::Line;
use serde::Deserialize;
use std::path::Path;

/// Logical sender of a message. Wire strings are matched exactly, so
/// `"User"` is an `Other` sender distinct from `User`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Sender {
    User,
    Bot,
    System,
    Other(String),
}

impl Sender {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
            Self::System => "system",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for Sender {
    fn from(value: String) -> Self {
        match value.as_str() {
            "user" => Self::User,
            "bot" => Self::Bot,
            "system" => Self::System,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for Sender {
    fn from(value: &str) -> Self {
        Self::from(value.to_owned())
    }
}

/// Pre-rendered block of terminal lines supplied by the host.
/// Rendered as-is; never interpreted as markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderNode {
    lines: Vec<Line<'static>>,
}

impl RenderNode {
    #[must_use]
    pub fn new(lines: Vec<Line<'static>>) -> Self {
        Self { lines }
    }

    #[must_use]
    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageContent {
    Text(String),
    Node(RenderNode),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "WireMessage")]
pub struct Message {
    pub sender: Sender,
    pub content: MessageContent,
}

impl Message {
    pub fn text(sender: impl Into<Sender>, text: impl Into<String>) -> Self {
        Self { sender: sender.into(), content: MessageContent::Text(text.into()) }
    }

    pub fn node(sender: impl Into<Sender>, node: RenderNode) -> Self {
        Self { sender: sender.into(), content: MessageContent::Node(node) }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct WireMessage {
    sender: String,
    content: String,
}

impl From<WireMessage> for Message {
    fn from(wire: WireMessage) -> Self {
        Self { sender: Sender::from(wire.sender), content: MessageContent::Text(wire.content) }
    }
}

/// Ordered message sequence. Append-mostly: the only other mutation is a
/// batched prepend while chat history loads. Never re-sorted.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Insert `batch` above the current first message, keeping the batch order.
    pub fn prepend_batch(&mut self, batch: Vec<Message>) {
        if batch.is_empty() {
            return;
        }
        self.messages.splice(0..0, batch);
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl From<Vec<Message>> for Transcript {
    fn from(messages: Vec<Message>) -> Self {
        Self { messages }
    }
}

/// Load a JSON array of `{ "sender", "content" }` objects.
pub fn load_messages(path: &Path) -> anyhow::Result<Vec<Message>> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        tracing::warn!("failed to read transcript {}: {e}", path.display());
        anyhow::Error::new(AppError::TranscriptUnreadable)
            .context(format!("{}: {e}", path.display()))
    })?;
    parse_messages(&raw).map_err(|e| e.context(path.display().to_string()))
}

pub fn parse_messages(raw: &str) -> anyhow::Result<Vec<Message>> {
    let messages: Vec<Message> = serde_json::from_str(raw).map_err(|e| {
        tracing::warn!("invalid transcript JSON: {e}");
        anyhow::Error::new(AppError::TranscriptInvalid).context(e.to_string())
    })?;
    tracing::debug!(count = messages.len(), "parsed transcript");
    Ok(messages)
}
