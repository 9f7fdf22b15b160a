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

//! Scroll-position controller for the transcript viewport.
//!
//! The host calls one handler per event:
//! - [`ScrollController::on_messages_changed`]: message count or typing indicator changed
//! - [`ScrollController::on_height_changed`]: total scrollable height changed
//! - [`ScrollController::on_scroll_event`]: raw scroll event from the user
//! - [`ScrollController::on_scrolling_flag_changed`]: `is_scrolling` flipped
//!
//! Each handler reads the viewport metrics once and writes at most one scroll
//! offset. With no viewport mounted every handler is a no-op.

use crate::settings::{DEFAULT_MESSAGE_PROMPT_OFFSET, ViewportSettings};

/// Snapshot of the scrollable region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewportMetrics {
    pub scroll_top: i64,
    pub client_height: i64,
    pub scroll_height: i64,
}

impl ViewportMetrics {
    #[must_use]
    pub fn distance_from_bottom(&self) -> i64 {
        self.scroll_height - (self.scroll_top + self.client_height)
    }
}

/// Live scrollable surface the controller writes offsets into.
pub trait Viewport {
    fn metrics(&self) -> ViewportMetrics;
    fn set_scroll_top(&mut self, scroll_top: i64);
}

/// Host-visible scroll state. Only the controller mutates it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    /// User has scrolled away from the bottom.
    pub is_scrolling: bool,
    /// A history prepend is in flight; the next height change is anchor-corrected.
    pub is_loading_chat_history: bool,
    /// Last observed scroll height, baseline for anchor correction.
    pub chat_scroll_height: i64,
    pub unread_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollSettings {
    pub auto_jump_to_bottom: bool,
    pub message_prompt_offset: i64,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self { auto_jump_to_bottom: false, message_prompt_offset: DEFAULT_MESSAGE_PROMPT_OFFSET }
    }
}

impl From<&ViewportSettings> for ScrollSettings {
    fn from(settings: &ViewportSettings) -> Self {
        Self {
            auto_jump_to_bottom: settings.auto_jump_to_bottom,
            message_prompt_offset: settings.message_prompt_offset,
        }
    }
}

#[derive(Debug)]
pub struct ScrollController<V> {
    viewport: Option<V>,
    state: ScrollState,
    settings: ScrollSettings,
    chat_window_open: bool,
}

impl<V: Viewport> ScrollController<V> {
    #[must_use]
    pub fn new(settings: ScrollSettings) -> Self {
        Self { viewport: None, state: ScrollState::default(), settings, chat_window_open: true }
    }

    pub fn mount(&mut self, viewport: V) {
        self.viewport = Some(viewport);
    }

    pub fn unmount(&mut self) -> Option<V> {
        self.viewport.take()
    }

    #[must_use]
    pub fn viewport(&self) -> Option<&V> {
        self.viewport.as_ref()
    }

    /// Host access for layout updates. Scroll offsets should go through the handlers.
    pub fn viewport_mut(&mut self) -> Option<&mut V> {
        self.viewport.as_mut()
    }

    #[must_use]
    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    #[must_use]
    pub fn settings(&self) -> ScrollSettings {
        self.settings
    }

    pub fn set_settings(&mut self, settings: ScrollSettings) {
        self.settings = settings;
    }

    #[must_use]
    pub fn chat_window_open(&self) -> bool {
        self.chat_window_open
    }

    pub fn set_chat_window_open(&mut self, open: bool) {
        self.chat_window_open = open;
    }

    /// Mark a history prepend as in flight. Call before prepending messages;
    /// `chat_scroll_height` must still hold the pre-prepend height.
    pub fn begin_history_load(&mut self) {
        tracing::debug!(baseline = self.state.chat_scroll_height, "history load started");
        self.state.is_loading_chat_history = true;
    }

    /// Count a message that arrived while it could not be seen.
    pub fn note_incoming_message(&mut self) {
        if self.state.is_scrolling || !self.chat_window_open {
            self.state.unread_count += 1;
            tracing::debug!(unread = self.state.unread_count, "unread message");
        }
    }

    /// Content appended: message count changed or typing indicator toggled.
    pub fn on_messages_changed(&mut self) {
        let Some(viewport) = self.viewport.as_mut() else {
            return;
        };
        // A history load also changes the message count; the height handler owns it.
        if self.state.is_loading_chat_history {
            tracing::trace!("messages changed during history load; skipping snap");
            return;
        }
        if self.settings.auto_jump_to_bottom || !self.state.is_scrolling {
            let metrics = viewport.metrics();
            viewport.set_scroll_top(metrics.scroll_height);
            if self.chat_window_open {
                self.state.unread_count = 0;
            }
            tracing::debug!(scroll_top = metrics.scroll_height, "snapped to bottom on new content");
        }
    }

    /// Total scrollable height changed. Anchor-corrects a pending history load,
    /// otherwise records the new height and follows the bottom when not scrolled away.
    pub fn on_height_changed(&mut self) {
        let Some(viewport) = self.viewport.as_mut() else {
            return;
        };
        let metrics = viewport.metrics();

        if self.state.is_loading_chat_history {
            let scroll_difference = metrics.scroll_height - self.state.chat_scroll_height;
            let scroll_top = metrics.scroll_top + scroll_difference;
            viewport.set_scroll_top(scroll_top);
            self.state.is_loading_chat_history = false;
            self.state.chat_scroll_height = metrics.scroll_height;
            tracing::debug!(scroll_difference, scroll_top, "anchor-corrected history prepend");
            return;
        }

        self.state.chat_scroll_height = metrics.scroll_height;
        if !self.state.is_scrolling {
            viewport.set_scroll_top(metrics.scroll_height);
            if self.chat_window_open {
                self.state.unread_count = 0;
            }
            tracing::trace!(scroll_height = metrics.scroll_height, "followed height change");
        }
    }

    /// Classify a raw scroll event and keep the viewport off the exact maximum offset.
    pub fn on_scroll_event(&mut self) {
        let Some(viewport) = self.viewport.as_mut() else {
            return;
        };
        let metrics = viewport.metrics();
        let was_scrolling = self.state.is_scrolling;
        let is_scrolling = metrics.distance_from_bottom() > self.settings.message_prompt_offset;

        // Hold a one-unit buffer above the true bottom so later automatic
        // scrolls keep taking effect.
        if !was_scrolling
            && metrics.scroll_top + metrics.client_height >= metrics.scroll_height - 1
        {
            let buffered = (metrics.scroll_height - metrics.client_height - 1).max(0);
            viewport.set_scroll_top(buffered);
        }

        if is_scrolling != was_scrolling {
            tracing::debug!(is_scrolling, distance = metrics.distance_from_bottom(), "scroll state");
            self.state.is_scrolling = is_scrolling;
            self.on_scrolling_flag_changed();
        }
    }

    /// Leaving the scrolled-away state means everything has been seen.
    pub fn on_scrolling_flag_changed(&mut self) {
        if self.viewport.is_none() {
            return;
        }
        if !self.state.is_scrolling && self.state.unread_count > 0 {
            tracing::debug!(cleared = self.state.unread_count, "unread count reset");
            self.state.unread_count = 0;
        }
    }
}
