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

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("Settings file could not be read")]
    SettingsUnreadable,
    #[error("Settings file is invalid")]
    SettingsInvalid,
    #[error("Transcript file could not be read")]
    TranscriptUnreadable,
    #[error("Transcript file is invalid")]
    TranscriptInvalid,
}

impl AppError {
    pub const SETTINGS_UNREADABLE_EXIT_CODE: i32 = 20;
    pub const SETTINGS_INVALID_EXIT_CODE: i32 = 21;
    pub const TRANSCRIPT_UNREADABLE_EXIT_CODE: i32 = 22;
    pub const TRANSCRIPT_INVALID_EXIT_CODE: i32 = 23;

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::SettingsUnreadable => Self::SETTINGS_UNREADABLE_EXIT_CODE,
            Self::SettingsInvalid => Self::SETTINGS_INVALID_EXIT_CODE,
            Self::TranscriptUnreadable => Self::TRANSCRIPT_UNREADABLE_EXIT_CODE,
            Self::TranscriptInvalid => Self::TRANSCRIPT_INVALID_EXIT_CODE,
        }
    }

    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::SettingsUnreadable => {
                "Settings file could not be read. Check the path passed to `--settings`."
            }
            Self::SettingsInvalid => {
                "Settings file is not valid JSON or contains unknown keys or colors."
            }
            Self::TranscriptUnreadable => "Transcript file could not be read.",
            Self::TranscriptInvalid => {
                "Transcript file must be a JSON array of {\"sender\", \"content\"} objects."
            }
        }
    }
}
