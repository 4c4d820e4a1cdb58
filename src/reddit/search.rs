// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 Michael Dippery <michael@monkey-robot.com>

//! Parameters for searching a subreddit.

use clap::ValueEnum;
use std::fmt;

/// Largest number of items Reddit will return in one listing page.
pub const PAGE_SIZE: usize = 100;

/// How Reddit ranks search results.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum Sort {
    /// Best textual match first.
    Relevance,

    /// Currently popular posts first.
    Hot,

    /// Highest score first.
    #[default]
    Top,

    /// Most recent posts first.
    New,

    /// Most commented posts first.
    Comments,
}

impl Sort {
    /// The value Reddit expects in the `sort` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sort::Relevance => "relevance",
            Sort::Hot => "hot",
            Sort::Top => "top",
            Sort::New => "new",
            Sort::Comments => "comments",
        }
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The window of time a search covers.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum TimeFilter {
    /// The past hour.
    Hour,

    /// The past day.
    Day,

    /// The past week.
    Week,

    /// The past month.
    Month,

    /// The past year.
    Year,

    /// All time.
    #[default]
    All,
}

impl TimeFilter {
    /// The value Reddit expects in the `t` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeFilter::Hour => "hour",
            TimeFilter::Day => "day",
            TimeFilter::Week => "week",
            TimeFilter::Month => "month",
            TimeFilter::Year => "year",
            TimeFilter::All => "all",
        }
    }
}

impl fmt::Display for TimeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options shared by every keyword search in a run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SearchOptions {
    sort: Sort,
    limit: usize,
    time_filter: TimeFilter,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            sort: Sort::default(),
            limit: 10,
            time_filter: TimeFilter::default(),
        }
    }
}

impl SearchOptions {
    /// Sets the ranking used for results.
    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort = sort;
        self
    }

    /// Sets the maximum number of results returned for each keyword.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the window of time searched.
    pub fn time_filter(mut self, time_filter: TimeFilter) -> Self {
        self.time_filter = time_filter;
        self
    }

    /// Ranking used for results.
    pub fn sort_mode(&self) -> Sort {
        self.sort
    }

    /// Maximum number of results returned for each keyword.
    pub fn max_results(&self) -> usize {
        self.limit
    }

    /// Window of time searched.
    pub fn window(&self) -> TimeFilter {
        self.time_filter
    }
}

/// A request for a single page of search results.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SearchQuery<'a> {
    keyword: &'a str,
    sort: Sort,
    time_filter: TimeFilter,
    page_size: usize,
    after: Option<&'a str>,
}

impl<'a> SearchQuery<'a> {
    /// Creates a query for the first page of results for `keyword`.
    ///
    /// The page size is the smaller of the search limit and [`PAGE_SIZE`].
    pub fn new(keyword: &'a str, options: &SearchOptions) -> Self {
        Self {
            keyword,
            sort: options.sort,
            time_filter: options.time_filter,
            page_size: options.limit.min(PAGE_SIZE),
            after: None,
        }
    }

    /// Continues the search after the item named `after`, requesting at
    /// most `page_size` items.
    pub fn page(mut self, page_size: usize, after: Option<&'a str>) -> Self {
        self.page_size = page_size.min(PAGE_SIZE);
        self.after = after;
        self
    }

    /// The search term.
    pub fn keyword(&self) -> &str {
        self.keyword
    }

    /// Ranking requested.
    pub fn sort(&self) -> Sort {
        self.sort
    }

    /// Fullname of the last item on the previous page, if any.
    pub fn after(&self) -> Option<&str> {
        self.after
    }

    /// Number of items requested.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Query string parameters for Reddit's `/r/<subreddit>/search` endpoint.
    ///
    /// Results are restricted to the subreddit being searched and to
    /// posts, and text fields are requested without HTML escaping.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("q", self.keyword.to_string()),
            ("sort", self.sort.to_string()),
            ("t", self.time_filter.to_string()),
            ("limit", self.page_size.to_string()),
            ("restrict_sr", "on".to_string()),
            ("type", "link".to_string()),
            ("raw_json", "1".to_string()),
        ];
        if let Some(after) = self.after {
            params.push(("after", after.to_string()));
        }
        params
    }
}
