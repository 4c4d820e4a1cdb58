// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 Michael Dippery <michael@monkey-robot.com>

//! Reddit API clients and services for communicating with Reddit over HTTP.

pub mod auth;
pub mod client;
pub mod search;
pub mod service;
pub mod thing;

pub use client::{Reddit, Subreddit};
pub use search::{SearchOptions, Sort, TimeFilter};
