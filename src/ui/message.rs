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

use crate::grouping::{self, BubblePlacement, ContentMode, MarginVariant, Placement, RenderContent};
use crate::settings::{BubbleSettings, ViewportSettings};
use crate::transcript::{Message, Sender};
use crate::ui::{markdown, theme};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

const SPINNER_FRAMES: &[char] = &[
    '\u{280B}', '\u{2819}', '\u{2839}', '\u{2838}', '\u{283C}', '\u{2834}', '\u{2826}', '\u{2827}',
    '\u{2807}', '\u{280F}',
];

/// Render the whole transcript into wrapped-later lines. Grouping is
/// recomputed from the messages on every call.
/// `typing_frame` is the spinner frame when the typing indicator is on.
pub fn render_transcript(
    messages: &[Message],
    settings: &ViewportSettings,
    typing_frame: Option<usize>,
) -> Vec<Line<'static>> {
    let placements = grouping::classify(messages, settings);
    let mut out = Vec::new();

    for (message, placement) in messages.iter().zip(placements) {
        match placement {
            Placement::Bare => {
                push_separator(&mut out);
                render_bare(message, &mut out);
            }
            Placement::Bubble(placement) => {
                // Offset margin: continuation bubbles stack without a blank line.
                if placement.margin == MarginVariant::Normal {
                    push_separator(&mut out);
                }
                render_bubble(message, placement, settings.bubble_for(&message.sender), &mut out);
            }
        }
    }

    if let Some(frame) = typing_frame {
        push_separator(&mut out);
        render_typing(&settings.bot_bubble, frame, &mut out);
    }

    out
}

fn push_separator(out: &mut Vec<Line<'static>>) {
    if !out.is_empty() {
        out.push(Line::default());
    }
}

/// System messages: bare content, no bubble, no avatar gutter.
fn render_bare(message: &Message, out: &mut Vec<Line<'static>>) {
    let style = Style::default().fg(theme::ROLE_SYSTEM).add_modifier(Modifier::ITALIC);
    match grouping::render_content(message, ContentMode::PlainText) {
        RenderContent::Plain(text) | RenderContent::RawMarkup(text) => {
            out.extend(markdown::render_plain(text, style));
        }
        RenderContent::Node(node) => out.extend(node.lines().iter().cloned()),
    }
}

fn render_bubble(
    message: &Message,
    placement: BubblePlacement,
    bubble: &BubbleSettings,
    out: &mut Vec<Line<'static>>,
) {
    let style = bubble_style(&message.sender, bubble);
    let body = match grouping::render_content(message, placement.content_mode) {
        RenderContent::Plain(text) => markdown::render_plain(text, style),
        RenderContent::RawMarkup(text) => markdown::render_markup(text, style),
        // Nodes skip the bubble styling entirely.
        RenderContent::Node(node) => node.lines().to_vec(),
    };

    let gutter = bubble.show_avatar.then(|| Gutter::new(bubble, &message.sender));
    for (i, line) in body.into_iter().enumerate() {
        match &gutter {
            Some(g) => out.push(g.prefix(line, i == 0 && placement.show_avatar)),
            None => out.push(line),
        }
    }
}

fn render_typing(bubble: &BubbleSettings, frame: usize, out: &mut Vec<Line<'static>>) {
    let ch = SPINNER_FRAMES[frame % SPINNER_FRAMES.len()];
    let line = Line::from(Span::styled(
        format!("{ch} {}...", theme::TYPING_LABEL),
        Style::default().fg(theme::DIM),
    ));
    if bubble.show_avatar {
        out.push(Gutter::new(bubble, &Sender::Bot).prefix(line, true));
    } else {
        out.push(line);
    }
}

fn bubble_style(sender: &Sender, bubble: &BubbleSettings) -> Style {
    match sender {
        Sender::User => Style::default()
            .fg(bubble.secondary().unwrap_or(theme::ROLE_USER))
            .bg(bubble.primary().unwrap_or(theme::USER_MSG_BG)),
        _ => {
            let style = Style::default().fg(bubble.primary().unwrap_or(theme::ROLE_BOT));
            match bubble.secondary() {
                Some(bg) => style.bg(bg),
                None => style,
            }
        }
    }
}

/// Avatar column in front of a bubble. Continuation lines get blank padding
/// of the same width so the bubble text stays aligned.
struct Gutter {
    avatar: Span<'static>,
    blank: String,
}

impl Gutter {
    fn new(bubble: &BubbleSettings, sender: &Sender) -> Self {
        let color = match sender {
            Sender::User => theme::ROLE_USER,
            _ => bubble.primary().unwrap_or(theme::ROLE_BOT),
        };
        let avatar = format!("{} ", bubble.avatar);
        let blank = " ".repeat(avatar.width());
        Self {
            avatar: Span::styled(avatar, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            blank,
        }
    }

    fn prefix(&self, line: Line<'static>, with_avatar: bool) -> Line<'static> {
        let lead = if with_avatar { self.avatar.clone() } else { Span::raw(self.blank.clone()) };
        let mut spans = Vec::with_capacity(line.spans.len() + 1);
        spans.push(lead);
        spans.extend(line.spans);
        Line::from(spans)
    }
}
