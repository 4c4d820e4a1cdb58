// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 Michael Dippery <michael@monkey-robot.com>

//! A "thing" in the Reddit sense.
//!
//! Historically in the Reddit API, a "Thing" was any element of the Reddit
//! system: users, posts, subreddits, etc. Every thing arrives wrapped in an
//! envelope naming its `kind` (`t2` for accounts, `t3` for links, `t5` for
//! subreddits), and collections of things arrive as a `Listing`.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// An error parsing data returned by the Reddit API.
#[derive(Debug, Error)]
pub enum Error {
    /// The response was not the JSON we expected.
    #[error("could not parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A thing of the wrong kind was returned.
    #[error("expected a {expected} but got a {actual}")]
    UnexpectedKind {
        /// The kind that should have been returned.
        expected: &'static str,
        /// The kind that was actually returned.
        actual: String,
    },
}

/// A Reddit type that arrives inside a `{"kind": ..., "data": ...}` envelope.
pub trait Kind: DeserializeOwned {
    /// The kind prefix Reddit uses for this type, such as `t3`.
    const KIND: &'static str;
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    kind: String,
    data: T,
}

impl<T: Kind> Envelope<T> {
    fn unwrap_kind(self) -> Result<T, Error> {
        if self.kind == T::KIND {
            Ok(self.data)
        } else {
            Err(Error::UnexpectedKind {
                expected: T::KIND,
                actual: self.kind,
            })
        }
    }
}

/// Parses a single enveloped thing, such as the response from
/// `/r/<subreddit>/about`.
pub fn parse<T: Kind>(data: &str) -> Result<T, Error> {
    serde_json::from_str::<Envelope<T>>(data)?.unwrap_kind()
}

/// One page of things.
#[derive(Debug)]
pub struct Listing<T> {
    things: Vec<T>,
    after: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListingData<T> {
    children: Vec<Envelope<T>>,
    after: Option<String>,
}

impl<T: Kind> Listing<T> {
    /// Parses a listing returned from any Reddit listing endpoint.
    pub fn parse(data: &str) -> Result<Self, Error> {
        let envelope: Envelope<ListingData<T>> = serde_json::from_str(data)?;
        if envelope.kind != "Listing" {
            return Err(Error::UnexpectedKind {
                expected: "Listing",
                actual: envelope.kind,
            });
        }
        let things = envelope
            .data
            .children
            .into_iter()
            .map(Envelope::unwrap_kind)
            .collect::<Result<Vec<_>, _>>()?;
        let after = envelope.data.after;
        Ok(Self { things, after })
    }
}

impl<T> Listing<T> {
    /// Fullname of the last item on this page, if more pages follow.
    pub fn after(&self) -> Option<&str> {
        self.after.as_deref()
    }

    /// Number of things on this page.
    pub fn len(&self) -> usize {
        self.things.len()
    }

    /// True if the page is empty.
    pub fn is_empty(&self) -> bool {
        self.things.is_empty()
    }

    /// The things on this page, in the order Reddit ranked them.
    pub fn into_things(self) -> Vec<T> {
        self.things
    }
}

/// The authenticated Reddit account.
#[derive(Debug, Deserialize)]
pub struct Account {
    name: String,
}

impl Account {
    /// Parses the response from `/api/v1/me`, which, unlike most Reddit
    /// endpoints, is not wrapped in an envelope.
    pub fn parse(data: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(data)?)
    }

    /// The account's username.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Metadata describing a subreddit.
#[derive(Debug, Deserialize)]
pub struct About {
    display_name: String,
    #[serde(default)]
    subscribers: u64,
}

impl Kind for About {
    const KIND: &'static str = "t5";
}

impl About {
    /// The subreddit's name as Reddit displays it.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Number of subscribers.
    pub fn subscribers(&self) -> u64 {
        self.subscribers
    }
}

/// A Reddit post (a "link" in API terms).
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Submission {
    id: String,
    title: String,
    created_utc: f64,
    link_flair_text: Option<String>,
    score: i64,
    #[serde(default)]
    upvote_ratio: f64,
    num_comments: u64,
    #[serde(default)]
    selftext: String,
}

impl Kind for Submission {
    const KIND: &'static str = "t3";
}

impl Submission {
    /// Unique, stable ID (without the `t3_` prefix).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Post title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Creation time as seconds since the Unix epoch.
    pub fn created_utc(&self) -> f64 {
        self.created_utc
    }

    /// Link flair, if the post is tagged.
    pub fn flair(&self) -> Option<&str> {
        self.link_flair_text.as_deref()
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

    /// Body text. Empty for posts that link elsewhere.
    pub fn selftext(&self) -> &str {
        &self.selftext
    }
}
