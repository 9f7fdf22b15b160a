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

//! Message grouping and render-mode classification.
//!
//! Consecutive messages from the same sender form a series: only the first
//! message of a series carries an avatar, the rest stack tightly under it.
//! Everything here is a pure function of the message sequence and the role
//! settings. It is recomputed from scratch on every render pass.

use crate::settings::ViewportSettings;
use crate::transcript::{Message, MessageContent, RenderNode, Sender};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarginVariant {
    Normal,
    /// Reduced top margin for a continuation bubble next to an avatar gutter.
    Offset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMode {
    PlainText,
    RawMarkup,
    /// Pre-rendered node, drawn without the bubble wrapper.
    OpaqueNode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BubblePlacement {
    pub is_first_in_series: bool,
    pub show_avatar: bool,
    pub margin: MarginVariant,
    pub content_mode: ContentMode,
    pub animate_entry: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// System message: bare content, no bubble, no avatar, no grouping.
    Bare,
    Bubble(BubblePlacement),
}

impl Placement {
    #[must_use]
    pub fn show_avatar(&self) -> bool {
        matches!(self, Self::Bubble(b) if b.show_avatar)
    }
}

/// Content ready to draw, tagged with how it must be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderContent<'a> {
    Plain(&'a str),
    RawMarkup(&'a str),
    Node(&'a RenderNode),
}

/// Whether the message at `index` starts a new sender series. `false` for an
/// index past the end.
#[must_use]
pub fn is_first_in_series(messages: &[Message], index: usize) -> bool {
    let Some(current) = messages.get(index) else {
        return false;
    };
    match index.checked_sub(1).and_then(|prev| messages.get(prev)) {
        Some(previous) => previous.sender != current.sender,
        None => true,
    }
}

/// Classify every message of the transcript, in order.
#[must_use]
pub fn classify(messages: &[Message], settings: &ViewportSettings) -> Vec<Placement> {
    (0..messages.len()).map(|i| classify_at(messages, i, settings)).collect()
}

fn classify_at(messages: &[Message], index: usize, settings: &ViewportSettings) -> Placement {
    let message = &messages[index];
    if message.sender == Sender::System {
        return Placement::Bare;
    }

    let bubble = settings.bubble_for(&message.sender);
    let first = is_first_in_series(messages, index);
    let content_mode = match message.content {
        MessageContent::Text(_) if bubble.dangerous_raw_markup => ContentMode::RawMarkup,
        MessageContent::Text(_) => ContentMode::PlainText,
        MessageContent::Node(_) => ContentMode::OpaqueNode,
    };

    Placement::Bubble(BubblePlacement {
        is_first_in_series: first,
        show_avatar: bubble.show_avatar && first,
        // Tight stacking only matters when there is an avatar gutter to line up with.
        margin: if bubble.show_avatar && !first {
            MarginVariant::Offset
        } else {
            MarginVariant::Normal
        },
        content_mode,
        animate_entry: bubble.animate_entry,
    })
}

/// Pair message content with its render mode. A node is always returned as
/// `Node`, whatever mode was requested.
#[must_use]
pub fn render_content(message: &Message, mode: ContentMode) -> RenderContent<'_> {
    match (&message.content, mode) {
        (MessageContent::Node(node), _) => RenderContent::Node(node),
        (MessageContent::Text(text), ContentMode::RawMarkup) => RenderContent::RawMarkup(text),
        (MessageContent::Text(text), ContentMode::PlainText | ContentMode::OpaqueNode) => {
            RenderContent::Plain(text)
        }
    }
}
