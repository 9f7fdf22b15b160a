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

mod chat;
mod markdown;
pub mod message;
pub mod theme;
mod welcome;

pub use welcome::welcome_node;

use crate::app::App;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, app: &mut App) {
    let [body, separator, status] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
            .areas(frame.area());

    chat::render(frame, body, app);
    render_separator(frame, separator);
    render_status(frame, status, app);
}

fn render_separator(frame: &mut Frame, area: Rect) {
    let rule = theme::SEPARATOR_CHAR.repeat(usize::from(area.width));
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(rule, Style::default().fg(theme::DIM)))),
        area,
    );
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(Paragraph::new(status_line(app)), area);
}

/// Unread badge, scroll state and history hints for the status row.
pub fn status_line(app: &App) -> Line<'static> {
    let state = app.scroll.state();
    let dim = Style::default().fg(theme::DIM);
    let mut spans = Vec::new();

    if state.unread_count > 0 {
        spans.push(Span::styled(
            format!(" ↓ {} unread ", state.unread_count),
            Style::default().fg(theme::UNREAD_BADGE).add_modifier(Modifier::BOLD),
        ));
    }
    if state.is_loading_chat_history {
        spans.push(Span::styled(" loading history ", Style::default().fg(theme::STATUS_LOADING)));
    } else if !app.history.is_empty() {
        spans.push(Span::styled(format!(" l: {} older ", app.history.len()), dim));
    }
    if state.is_scrolling {
        spans.push(Span::styled(" scrolled up · End to follow ", dim));
    }
    if app.feed_finished {
        spans.push(Span::styled(" feed finished ", dim));
    }
    spans.push(Span::styled(" q quit", dim));
    Line::from(spans)
}
