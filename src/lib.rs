// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 Michael Dippery <michael@monkey-robot.com>

//! corpusbot is a command-line tool for building a small text corpus out
//! of a subreddit. It searches the subreddit for each of a list of
//! keywords, saves every matching post as its own text file, and exports
//! a table of all matches as CSV for further analysis.
//!
//! # Examples
//!
//! Search r/PrequelMemes for the top 10 posts of all time matching
//! "obi-wan" and "darth" (the defaults):
//!
//! ```bash
//! corpusbot
//! ```
//!
//! This creates `PrequelMemes/`, containing one `<post id>.txt` file per
//! post, and `PrequelMemes.csv`, containing one row per match. A post that
//! matches both keywords gets two rows in the table but only one text file.
//!
//! Search another subreddit for other keywords, collecting the 50 newest
//! matches for each keyword into `out/`:
//!
//! ```bash
//! corpusbot -s StarWars -k "hello there,general kenobi" -n 50 --sort new -o out
//! ```
//!
//! Running corpusbot again into the same output directory fails rather
//! than mixing results from two runs; move or delete the old output first.
//!
//! Get usage and help for the tool:
//!
//! ```bash
//! corpusbot --help
//! ```
//!
//! # Reddit API Setup
//!
//! corpusbot talks to Reddit's OAuth API, so you need your own API
//! credentials:
//!
//! 1. Create a "script" application on Reddit's [app preferences] page.
//! 2. Copy the application's client ID and secret into a credentials file
//!    called `corpusbot.toml` (or point `--config` or `$CORPUSBOT_CONFIG`
//!    somewhere else):
//!
//!    ```toml
//!    [corpusbot]
//!    client_id = "your client id"
//!    client_secret = "your client secret"
//!    username = "your reddit username"
//!    password = "your reddit password"
//!    ```
//!
//! `username` and `password` are optional; without them corpusbot uses a
//! read-only session. See the [`conf`] module for the full file format and
//! the environment variables that override it.
//!
//! # License
//!
//! corpusbot is licensed under the terms of the [Apache License 2.0]. Please
//! see the LICENSE file accompanying this source code or visit the previous
//! link for more information on licensing.
//!
//! [Apache License 2.0]: https://www.apache.org/licenses/LICENSE-2.0
//! [app preferences]: https://www.reddit.com/prefs/apps

pub mod cli;
pub mod collect;
pub mod conf;
pub mod corpus;
pub mod export;
pub mod http;
pub mod post;
pub mod reddit;
pub mod view;

#[cfg(test)]
mod test_utils;
