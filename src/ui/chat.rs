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

use crate::app::{App, TerminalViewport};
use crate::ui::message;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Text;
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap};

pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
    let typing_frame = app.typing.then_some(app.spinner_frame);
    let lines = message::render_transcript(app.transcript.messages(), &app.settings, typing_frame);

    let show_scrollbar = app.settings.show_scrollbar && area.width > 1;
    let text_width = if show_scrollbar { area.width - 1 } else { area.width };

    // Build paragraph once; line_count gives the real wrapped height
    let paragraph = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false });
    let content_height = paragraph.line_count(text_width);
    let viewport_height = usize::from(area.height);

    app.rendered_chat_area = area;
    app.sync_viewport(i64::from(area.height), i64::try_from(content_height).unwrap_or(i64::MAX));

    if content_height <= viewport_height {
        // Short content: render in a bottom-aligned sub-rect
        let offset = u16::try_from(viewport_height - content_height).unwrap_or(0);
        let render_area = Rect {
            x: area.x,
            y: area.y + offset,
            width: text_width,
            height: area.height - offset,
        };
        frame.render_widget(paragraph, render_area);
        return;
    }

    let scroll_top = app.scroll.viewport().map_or(0, TerminalViewport::scroll_top);
    let scroll_row = u16::try_from(scroll_top).unwrap_or(u16::MAX);
    let text_area = Rect { width: text_width, ..area };
    frame.render_widget(paragraph.scroll((scroll_row, 0)), text_area);

    if show_scrollbar {
        let max_scroll = content_height - viewport_height;
        let mut state = ScrollbarState::new(max_scroll)
            .position(usize::try_from(scroll_top).unwrap_or(0))
            .viewport_content_length(viewport_height);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area,
            &mut state,
        );
    }
}
