// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 Michael Dippery <michael@monkey-robot.com>

//! Records of posts collected by a search.

use crate::reddit::thing::Submission;
use chrono::{DateTime, Utc};

/// One search result, tagged with the keyword that found it.
///
/// A post that matches several keywords yields one record per keyword.
#[derive(Clone, Debug, PartialEq)]
pub struct PostRecord {
    id: String,
    search_term: String,
    title: String,
    created_utc: f64,
    flair: Option<String>,
    score: i64,
    upvote_ratio: f64,
    num_comments: u64,
    body: String,
}

impl PostRecord {
    /// Creates a record for `post`, which was found by searching for
    /// `search_term`.
    pub fn new(search_term: &str, post: &Submission) -> Self {
        Self {
            id: post.id().to_string(),
            search_term: search_term.to_string(),
            title: post.title().to_string(),
            created_utc: post.created_utc(),
            flair: post.flair().map(str::to_string),
            score: post.score(),
            upvote_ratio: post.upvote_ratio(),
            num_comments: post.num_comments(),
            body: post.selftext().to_string(),
        }
    }

    /// The post's unique ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The keyword that produced this record.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Post title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Creation time as seconds since the Unix epoch.
    pub fn created_utc(&self) -> f64 {
        self.created_utc
    }

    /// Creation time as a date, if the timestamp is representable.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        let secs = self.created_utc.trunc() as i64;
        let nanos = (self.created_utc.fract() * 1e9).round() as u32;
        DateTime::from_timestamp(secs, nanos)
    }

    /// Link flair, if any.
    pub fn flair(&self) -> Option<&str> {
        self.flair.as_deref()
    }

    /// Net score.
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Fraction of votes that are upvotes.
    pub fn upvote_ratio(&self) -> f64 {
        self.upvote_ratio
    }

    /// Number of comments.
    pub fn num_comments(&self) -> u64 {
        self.num_comments
    }

    /// Body text; empty for link posts.
    pub fn body(&self) -> &str {
        &self.body
    }
}
