// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 Michael Dippery <michael@monkey-robot.com>

//! Runs keyword searches against a subreddit and gathers the results.

use crate::corpus::{self, Corpus, Written};
use crate::post::PostRecord;
use crate::reddit::client::{self, Subreddit};
use crate::reddit::search::SearchOptions;
use crate::reddit::service::Service;
use log::info;
use thiserror::Error;

/// Trims whitespace from each keyword and drops empty ones.
pub fn normalize_keywords<S: AsRef<str>>(keywords: impl IntoIterator<Item = S>) -> Vec<String> {
    keywords
        .into_iter()
        .map(|k| k.as_ref().trim().to_string())
        .filter(|k| !k.is_empty())
        .collect()
}

/// Everything gathered by a run of the [`Collector`].
#[derive(Debug, Default)]
pub struct Collection {
    records: Vec<PostRecord>,
    created: usize,
    already_present: usize,
}

impl Collection {
    /// One record per (keyword, result) pair, in keyword order and then
    /// in the order Reddit ranked the results.
    pub fn records(&self) -> &[PostRecord] {
        &self.records
    }

    /// Number of post files created.
    pub fn files_created(&self) -> usize {
        self.created
    }

    /// Number of results whose post file had already been written, usually
    /// because an earlier keyword matched the same post.
    pub fn files_already_present(&self) -> usize {
        self.already_present
    }

    fn push(&mut self, record: PostRecord, written: Written) {
        match written {
            Written::Created => self.created += 1,
            Written::AlreadyPresent => self.already_present += 1,
        }
        self.records.push(record);
    }
}

/// Searches a subreddit for each keyword in turn, writing every result to
/// a [`Corpus`] and recording it.
///
/// Results are neither filtered nor deduplicated: a post matching two
/// keywords is recorded twice but written to the corpus once.
#[derive(Debug)]
pub struct Collector<'a, 'r, S: Service> {
    subreddit: &'a Subreddit<'r, S>,
    corpus: &'a Corpus,
}

impl<'a, 'r, S: Service> Collector<'a, 'r, S> {
    /// Creates a collector that searches `subreddit` and writes to `corpus`.
    pub fn new(subreddit: &'a Subreddit<'r, S>, corpus: &'a Corpus) -> Self {
        Self { subreddit, corpus }
    }

    /// Runs one search per keyword.
    ///
    /// Stops at the first error. Post files written before the error stay
    /// on disk.
    pub async fn collect(
        &self,
        keywords: &[String],
        options: &SearchOptions,
    ) -> Result<Collection, Error> {
        let mut collection = Collection::default();

        for keyword in keywords {
            info!(
                "Searching r/{} for {:?} ({}, {}, limit {})",
                self.subreddit.name(),
                keyword,
                options.sort_mode(),
                options.window(),
                options.max_results()
            );
            let posts = self.subreddit.search(keyword, options).await?;
            for post in &posts {
                let written = self
                    .corpus
                    .write(post.id(), post.title(), post.selftext())?;
                collection.push(PostRecord::new(keyword, post), written);
            }
        }

        info!(
            "Collected {} record(s): {} new file(s), {} already present",
            collection.records.len(),
            collection.created,
            collection.already_present
        );
        Ok(collection)
    }
}

/// An error collecting posts.
#[derive(Debug, Error)]
pub enum Error {
    /// Searching Reddit failed.
    #[error(transparent)]
    Search(#[from] client::Error),

    /// Writing a post file failed.
    #[error(transparent)]
    Corpus(#[from] corpus::Error),
}
