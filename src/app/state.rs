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

use super::feed::FeedEvent;
use super::viewport::TerminalViewport;
use crate::scroll::{ScrollController, ScrollSettings};
use crate::settings::ViewportSettings;
use crate::transcript::{Message, Transcript};
use tokio::sync::mpsc;

pub struct App {
    pub transcript: Transcript,
    /// Typing indicator shown after the last message.
    pub typing: bool,
    pub settings: ViewportSettings,
    pub scroll: ScrollController<TerminalViewport>,
    /// Older messages not yet loaded, oldest first. Batches come off the end.
    pub history: Vec<Message>,
    pub feed_tx: mpsc::UnboundedSender<FeedEvent>,
    pub feed_rx: mpsc::UnboundedReceiver<FeedEvent>,
    pub feed_finished: bool,
    pub should_quit: bool,
    pub spinner_frame: usize,
    /// Area where chat content was rendered (for mouse hit-testing).
    pub rendered_chat_area: ratatui::layout::Rect,
    /// Message count and typing flag seen by the last render.
    seen_message_count: usize,
    seen_typing: bool,
}

impl App {
    #[must_use]
    pub fn new(settings: ViewportSettings, transcript: Transcript, history: Vec<Message>) -> Self {
        let (feed_tx, feed_rx) = mpsc::unbounded_channel();
        let mut scroll = ScrollController::new(ScrollSettings::from(&settings));
        scroll.mount(TerminalViewport::default());
        Self {
            transcript,
            typing: false,
            settings,
            scroll,
            history,
            feed_tx,
            feed_rx,
            feed_finished: false,
            should_quit: false,
            spinner_frame: 0,
            rendered_chat_area: ratatui::layout::Rect::default(),
            seen_message_count: 0,
            seen_typing: false,
        }
    }

    /// Minimal app with default settings, an empty transcript and no backlog.
    #[must_use]
    pub fn test_default() -> Self {
        Self::new(ViewportSettings::default(), Transcript::new(), Vec::new())
    }

    /// Feed the measured chat layout back into the scroll controller.
    /// Called once per render, after the transcript has been measured.
    pub fn sync_viewport(&mut self, client_height: i64, scroll_height: i64) {
        let Some(viewport) = self.scroll.viewport_mut() else {
            return;
        };
        let layout_changed = viewport.set_layout(client_height, scroll_height);

        let content_changed =
            self.transcript.len() != self.seen_message_count || self.typing != self.seen_typing;
        self.seen_message_count = self.transcript.len();
        self.seen_typing = self.typing;

        if content_changed {
            self.scroll.on_messages_changed();
        }
        // A pane resize with unchanged content still has to follow the bottom.
        if layout_changed {
            self.scroll.on_height_changed();
        }
    }

    /// Native scroll by the user, followed by scroll-event classification.
    pub fn user_scroll(&mut self, delta: i64) {
        let Some(viewport) = self.scroll.viewport_mut() else {
            return;
        };
        viewport.scroll_by(delta);
        self.scroll.on_scroll_event();
    }

    pub fn user_scroll_to_top(&mut self) {
        let top = self.scroll.viewport().map_or(0, TerminalViewport::scroll_top);
        self.user_scroll(-top);
    }

    pub fn user_scroll_to_bottom(&mut self) {
        let remaining = self
            .scroll
            .viewport()
            .map_or(0, |vp| vp.max_scroll_top() - vp.scroll_top());
        self.user_scroll(remaining);
    }

    #[must_use]
    pub fn page_height(&self) -> i64 {
        self.scroll.viewport().map_or(1, |vp| vp.client_height().max(1))
    }

    /// Prepend the next batch of older messages. Returns `false` when there is
    /// nothing left or a load is already in flight.
    pub fn load_older_history(&mut self) -> bool {
        if self.history.is_empty() || self.scroll.state().is_loading_chat_history {
            return false;
        }
        let take = self.settings.history_batch_size.min(self.history.len());
        let batch = self.history.split_off(self.history.len() - take);
        tracing::info!(batch = batch.len(), remaining = self.history.len(), "loading history");
        self.scroll.begin_history_load();
        self.transcript.prepend_batch(batch);
        true
    }

    pub fn set_window_focused(&mut self, focused: bool) {
        tracing::debug!(focused, "chat window focus");
        self.scroll.set_chat_window_open(focused);
    }

    pub fn handle_feed_event(&mut self, event: FeedEvent) {
        match event {
            FeedEvent::Typing(typing) => self.typing = typing,
            FeedEvent::Message(message) => {
                if message.sender != crate::transcript::Sender::User {
                    self.scroll.note_incoming_message();
                }
                self.transcript.push(message);
            }
            FeedEvent::Finished => {
                tracing::info!("feed finished");
                self.feed_finished = true;
            }
        }
    }
}
