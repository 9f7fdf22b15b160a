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
use crate::transcript::Sender;
use ratatui::style::Color;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const DEFAULT_MESSAGE_PROMPT_OFFSET: i64 = 30;
pub const DEFAULT_HISTORY_BATCH_SIZE: usize = 20;

const CONFIG_DIR_NAME: &str = "chat-viewport";
const CONFIG_FILE: &str = "settings.json";

/// Display settings for one sender role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BubbleSettings {
    pub show_avatar: bool,
    /// Passed through to the renderer; entry animation timing is not modelled.
    pub animate_entry: bool,
    /// Render text content as trusted markdown instead of plain text.
    pub dangerous_raw_markup: bool,
    pub avatar: String,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
}

impl BubbleSettings {
    fn user_defaults() -> Self {
        Self {
            show_avatar: false,
            animate_entry: true,
            dangerous_raw_markup: false,
            avatar: "◉".to_owned(),
            primary_color: None,
            secondary_color: None,
        }
    }

    fn bot_defaults() -> Self {
        Self {
            show_avatar: true,
            animate_entry: true,
            dangerous_raw_markup: false,
            avatar: "◆".to_owned(),
            primary_color: None,
            secondary_color: None,
        }
    }

    /// Parsed primary color. Validated at load time, so `None` means unset.
    #[must_use]
    pub fn primary(&self) -> Option<Color> {
        self.primary_color.as_deref().and_then(|c| Color::from_str(c).ok())
    }

    #[must_use]
    pub fn secondary(&self) -> Option<Color> {
        self.secondary_color.as_deref().and_then(|c| Color::from_str(c).ok())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "WireSettings")]
pub struct ViewportSettings {
    pub auto_jump_to_bottom: bool,
    pub show_scrollbar: bool,
    /// Distance from the true bottom beyond which the user counts as scrolled away.
    pub message_prompt_offset: i64,
    pub history_batch_size: usize,
    pub user_bubble: BubbleSettings,
    pub bot_bubble: BubbleSettings,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            auto_jump_to_bottom: false,
            show_scrollbar: true,
            message_prompt_offset: DEFAULT_MESSAGE_PROMPT_OFFSET,
            history_batch_size: DEFAULT_HISTORY_BATCH_SIZE,
            user_bubble: BubbleSettings::user_defaults(),
            bot_bubble: BubbleSettings::bot_defaults(),
        }
    }
}

// On-disk shape: every key optional, layered over the per-role defaults.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct WireSettings {
    auto_jump_to_bottom: Option<bool>,
    show_scrollbar: Option<bool>,
    message_prompt_offset: Option<i64>,
    history_batch_size: Option<usize>,
    user_bubble: Option<WireBubble>,
    bot_bubble: Option<WireBubble>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct WireBubble {
    show_avatar: Option<bool>,
    animate_entry: Option<bool>,
    dangerous_raw_markup: Option<bool>,
    avatar: Option<String>,
    primary_color: Option<String>,
    secondary_color: Option<String>,
}

impl WireBubble {
    fn layer_over(self, base: BubbleSettings) -> BubbleSettings {
        BubbleSettings {
            show_avatar: self.show_avatar.unwrap_or(base.show_avatar),
            animate_entry: self.animate_entry.unwrap_or(base.animate_entry),
            dangerous_raw_markup: self.dangerous_raw_markup.unwrap_or(base.dangerous_raw_markup),
            avatar: self.avatar.unwrap_or(base.avatar),
            primary_color: self.primary_color.or(base.primary_color),
            secondary_color: self.secondary_color.or(base.secondary_color),
        }
    }
}

impl TryFrom<WireSettings> for ViewportSettings {
    type Error = String;

    fn try_from(wire: WireSettings) -> Result<Self, Self::Error> {
        let defaults = Self::default();
        let settings = Self {
            auto_jump_to_bottom: wire.auto_jump_to_bottom.unwrap_or(defaults.auto_jump_to_bottom),
            show_scrollbar: wire.show_scrollbar.unwrap_or(defaults.show_scrollbar),
            message_prompt_offset: wire
                .message_prompt_offset
                .unwrap_or(defaults.message_prompt_offset),
            history_batch_size: wire.history_batch_size.unwrap_or(defaults.history_batch_size),
            user_bubble: match wire.user_bubble {
                Some(bubble) => bubble.layer_over(defaults.user_bubble),
                None => defaults.user_bubble,
            },
            bot_bubble: match wire.bot_bubble {
                Some(bubble) => bubble.layer_over(defaults.bot_bubble),
                None => defaults.bot_bubble,
            },
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl ViewportSettings {
    /// Role settings for `sender`. Every non-user role shares the bot bubble.
    #[must_use]
    pub fn bubble_for(&self, sender: &Sender) -> &BubbleSettings {
        match sender {
            Sender::User => &self.user_bubble,
            Sender::Bot | Sender::System | Sender::Other(_) => &self.bot_bubble,
        }
    }

    fn validate(&self) -> Result<(), String> {
        if self.message_prompt_offset < 0 {
            return Err(format!(
                "message_prompt_offset must not be negative (got {})",
                self.message_prompt_offset
            ));
        }
        if self.history_batch_size == 0 {
            return Err("history_batch_size must be at least 1".to_owned());
        }
        for (role, bubble) in [("user_bubble", &self.user_bubble), ("bot_bubble", &self.bot_bubble)]
        {
            for color in [&bubble.primary_color, &bubble.secondary_color].into_iter().flatten() {
                if Color::from_str(color).is_err() {
                    return Err(format!("{role}: unrecognized color `{color}`"));
                }
            }
        }
        Ok(())
    }
}

#[must_use]
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE))
}

/// Resolve settings: explicit path, else the per-user config file when present,
/// else defaults.
pub fn resolve(explicit: Option<&Path>) -> anyhow::Result<ViewportSettings> {
    if let Some(path) = explicit {
        return load(path);
    }
    match default_settings_path() {
        Some(path) if path.is_file() => load(&path),
        _ => {
            tracing::debug!("no settings file; using defaults");
            Ok(ViewportSettings::default())
        }
    }
}

pub fn load(path: &Path) -> anyhow::Result<ViewportSettings> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        tracing::warn!("failed to read settings {}: {e}", path.display());
        anyhow::Error::new(AppError::SettingsUnreadable)
            .context(format!("{}: {e}", path.display()))
    })?;
    let settings = parse(&raw).map_err(|e| e.context(path.display().to_string()))?;
    tracing::info!(path = %path.display(), "loaded settings");
    Ok(settings)
}

pub fn parse(raw: &str) -> anyhow::Result<ViewportSettings> {
    let settings: ViewportSettings = serde_json::from_str(raw).map_err(|e| {
        tracing::warn!("invalid settings JSON: {e}");
        anyhow::Error::new(AppError::SettingsInvalid).context(e.to_string())
    })?;
    Ok(settings)
}
