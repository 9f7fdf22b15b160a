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

use crate::scroll::{Viewport, ViewportMetrics};

/// Row-based scroll region of the chat pane. Offsets are clamped to
/// `0..=scroll_height - client_height`, like a native scroll container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TerminalViewport {
    scroll_top: i64,
    client_height: i64,
    scroll_height: i64,
}

impl TerminalViewport {
    #[must_use]
    pub fn max_scroll_top(&self) -> i64 {
        (self.scroll_height - self.client_height).max(0)
    }

    /// Apply the latest measured layout. Returns `true` when either the
    /// visible height or the total scrollable height changed.
    pub fn set_layout(&mut self, client_height: i64, scroll_height: i64) -> bool {
        let client_height = client_height.max(0);
        let scroll_height = scroll_height.max(0);
        let layout_changed =
            client_height != self.client_height || scroll_height != self.scroll_height;
        self.client_height = client_height;
        self.scroll_height = scroll_height;
        self.scroll_top = self.scroll_top.clamp(0, self.max_scroll_top());
        layout_changed
    }

    /// User-driven scroll (wheel, keys). Clamped like any other offset write.
    pub fn scroll_by(&mut self, delta: i64) {
        self.set_scroll_top(self.scroll_top.saturating_add(delta));
    }

    #[must_use]
    pub fn scroll_top(&self) -> i64 {
        self.scroll_top
    }

    #[must_use]
    pub fn client_height(&self) -> i64 {
        self.client_height
    }

    #[must_use]
    pub fn scroll_height(&self) -> i64 {
        self.scroll_height
    }
}

impl Viewport for TerminalViewport {
    fn metrics(&self) -> ViewportMetrics {
        ViewportMetrics {
            scroll_top: self.scroll_top,
            client_height: self.client_height,
            scroll_height: self.scroll_height,
        }
    }

    fn set_scroll_top(&mut self, scroll_top: i64) {
        self.scroll_top = scroll_top.clamp(0, self.max_scroll_top());
    }
}
