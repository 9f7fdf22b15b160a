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

use crate::transcript::RenderNode;
use crate::ui::theme;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

const FERRIS_SAYS: &[&str] = &[
    r" _______________________ ",
    r"< Welcome to the chat!  >",
    r" ----------------------- ",
    r"        \             ",
    r"         \            ",
    r"            _~^~^~_  ",
    r"        \) /  o o  \ (/",
    r"          '_   -   _' ",
    r"          / '-----' \ ",
];

/// Pre-rendered welcome card the host places at the top of the transcript.
#[must_use]
pub fn welcome_node() -> RenderNode {
    let mut lines: Vec<Line<'static>> = FERRIS_SAYS
        .iter()
        .map(|art| Line::from(Span::styled(*art, Style::default().fg(theme::RUST_ORANGE))))
        .collect();

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("chat-viewport v{}", env!("CARGO_PKG_VERSION")),
        Style::default().fg(theme::RUST_ORANGE).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        "Wheel/arrows scroll, l loads older messages, q quits",
        Style::default().fg(theme::DIM),
    )));
    RenderNode::new(lines)
}
