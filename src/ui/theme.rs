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

use ratatui::style::Color;

pub const RUST_ORANGE: Color = Color::Rgb(244, 118, 0);

pub const DIM: Color = Color::DarkGray;
pub const SEPARATOR_CHAR: &str = "─";

pub const ROLE_USER: Color = Color::White;
pub const ROLE_BOT: Color = RUST_ORANGE;
pub const ROLE_SYSTEM: Color = Color::Yellow;

pub const USER_MSG_BG: Color = Color::Rgb(40, 44, 52);

pub const UNREAD_BADGE: Color = Color::Cyan;
pub const STATUS_LOADING: Color = Color::Magenta;

pub const TYPING_LABEL: &str = "typing";
