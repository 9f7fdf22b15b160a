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

pub mod app;
pub mod error;
pub mod grouping;
pub mod scroll;
pub mod settings;
pub mod transcript;
pub mod ui;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "chat-viewport", about = "Terminal chat viewport with managed scrolling")]
pub struct Cli {
    /// JSON transcript to play back as incoming messages
    #[arg(long)]
    pub script: Option<std::path::PathBuf>,

    /// JSON backlog of older messages, loaded in batches with `l`
    #[arg(long)]
    pub history: Option<std::path::PathBuf>,

    /// Settings file (defaults to <config dir>/chat-viewport/settings.json)
    #[arg(long, short)]
    pub settings: Option<std::path::PathBuf>,

    /// Delay between played-back messages, in milliseconds
    #[arg(long, default_value_t = 900)]
    pub interval_ms: u64,

    /// Write tracing output to this file (tracing is off without it)
    #[arg(long)]
    pub log_file: Option<std::path::PathBuf>,

    /// Tracing filter directives, e.g. `chat_viewport=debug` (defaults to RUST_LOG, then info)
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Append to the log file instead of truncating it
    #[arg(long)]
    pub log_append: bool,
}
