// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 Michael Dippery <michael@monkey-robot.com>

//! Clients for reading data from the Reddit API.

use crate::conf::Credentials;
use crate::http;
use crate::reddit::auth::AuthError;
use crate::reddit::search::{SearchOptions, SearchQuery};
use crate::reddit::service::{RedditService, Service};
use crate::reddit::thing::{self, About, Account, Listing, Submission};
use log::{debug, info};
use thiserror::Error;

/// True if `name` can be a subreddit name: one or more ASCII letters,
/// digits, and underscores.
pub fn is_valid_subreddit_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

/// An authenticated session with Reddit.
#[derive(Debug)]
pub struct Reddit<S: Service> {
    service: S,
}

impl Reddit<RedditService> {
    /// Logs in to Reddit with the given `credentials`.
    ///
    /// Returns an [`AuthError`] if Reddit cannot be reached or refuses
    /// the credentials.
    pub async fn login(credentials: &Credentials) -> Result<Self, AuthError> {
        let service = RedditService::login(credentials).await?;
        Ok(Self::new_with_service(service))
    }
}

impl<S: Service> Reddit<S> {
    /// Creates a new session backed by `service`.
    pub fn new_with_service(service: S) -> Self {
        Self { service }
    }

    /// The underlying service.
    pub fn service(&self) -> &S {
        &self.service
    }

    /// The authenticated account, or `None` for a read-only session.
    pub async fn me(&self) -> Result<Option<Account>, Error> {
        if self.service.is_read_only() {
            return Ok(None);
        }
        let data = self.service.me().await?;
        Ok(Some(Account::parse(&data)?))
    }

    /// Looks up the subreddit called `name`.
    ///
    /// Returns an [`enum@Error`] if `name` is not a valid subreddit name,
    /// the subreddit does not exist, or its metadata cannot be parsed.
    pub async fn subreddit(&self, name: impl Into<String>) -> Result<Subreddit<'_, S>, Error> {
        let name = name.into();
        if !is_valid_subreddit_name(&name) {
            return Err(Error::InvalidName(name));
        }
        let data = self.service.subreddit_about(&name).await?;
        let about = thing::parse::<About>(&data)?;
        Ok(Subreddit {
            service: &self.service,
            name,
            about,
        })
    }
}

/// A subreddit that can be searched.
#[derive(Debug)]
pub struct Subreddit<'a, S: Service> {
    service: &'a S,
    name: String,
    about: About,
}

impl<S: Service> Subreddit<'_, S> {
    /// The name the subreddit was looked up by.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The subreddit's name as Reddit displays it.
    pub fn display_name(&self) -> &str {
        self.about.display_name()
    }

    /// Number of subscribers.
    pub fn subscribers(&self) -> u64 {
        self.about.subscribers()
    }

    /// Searches the subreddit for posts matching `keyword`.
    ///
    /// Returns at most `options.max_results()` posts, in the order Reddit
    /// ranked them. Reddit serves at most 100 posts per request, so larger
    /// searches page through the listing until enough posts are found or
    /// Reddit runs out of results.
    pub async fn search(
        &self,
        keyword: &str,
        options: &SearchOptions,
    ) -> Result<Vec<Submission>, Error> {
        let limit = options.max_results();
        let mut posts = Vec::with_capacity(limit);
        let mut after: Option<String> = None;

        while posts.len() < limit {
            let remaining = limit - posts.len();
            let query = SearchQuery::new(keyword, options).page(remaining, after.as_deref());
            let data = self.service.search(&self.name, &query).await?;
            let listing = Listing::<Submission>::parse(&data)?;

            let next = listing.after().map(str::to_string);
            let page = listing.into_things();
            debug!(
                "r/{}: {} result(s) for {:?} (after {:?})",
                self.name,
                page.len(),
                keyword,
                after
            );

            let exhausted = page.is_empty();
            posts.extend(page.into_iter().take(remaining));

            match next {
                Some(cursor) if !exhausted => after = Some(cursor),
                _ => break,
            }
        }

        info!("r/{}: {} post(s) match {:?}", self.name, posts.len(), keyword);
        Ok(posts)
    }
}

/// A client error.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the underlying HTTP service.
    #[error("Service error: {0}")]
    Service(#[from] http::HTTPError),

    /// An error parsing data.
    #[error("Parse error: {0}")]
    Parse(#[from] thing::Error),

    /// A name that cannot belong to a subreddit.
    #[error("Invalid subreddit name: {0:?}")]
    InvalidName(String),
}

#[cfg(test)]
mod tests {
    use crate::reddit::search::{SearchOptions, Sort};
    use crate::reddit::Reddit;
    use crate::reddit::client::{Error, is_valid_subreddit_name};
    use crate::test_utils::TestService;

    fn ids(posts: &[crate::reddit::thing::Submission]) -> Vec<&str> {
        posts.iter().map(|p| p.id()).collect()
    }

    mod session {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn it_returns_the_authenticated_account() {
            let reddit = Reddit::new_with_service(TestService::new());
            let me = reddit.me().await.unwrap().unwrap();
            assert_eq!(me.name(), "corpusbot_tester");
        }

        #[tokio::test]
        async fn it_has_no_account_when_read_only() {
            let reddit = Reddit::new_with_service(TestService::read_only());
            assert!(reddit.me().await.unwrap().is_none());
        }

        #[tokio::test]
        async fn it_looks_up_a_subreddit() {
            let reddit = Reddit::new_with_service(TestService::new());
            let sub = reddit.subreddit("PrequelMemes").await.unwrap();
            assert_eq!(sub.name(), "PrequelMemes");
            assert_eq!(sub.display_name(), "PrequelMemes");
            assert_eq!(sub.subscribers(), 2143827);
        }

        #[tokio::test]
        async fn it_rejects_names_that_are_not_subreddit_names() {
            let reddit = Reddit::new_with_service(TestService::new());
            for name in ["", "../PrequelMemes", "r/PrequelMemes", "Prequel Memes"] {
                let err = reddit.subreddit(name).await.unwrap_err();
                assert!(matches!(err, Error::InvalidName(_)), "{name:?} was accepted");
            }
        }

        #[test]
        fn it_accepts_underscores_in_subreddit_names() {
            assert!(is_valid_subreddit_name("Star_Wars"));
        }

        #[tokio::test]
        async fn it_fails_for_a_missing_subreddit() {
            let reddit = Reddit::new_with_service(TestService::new());
            let err = reddit.subreddit("doesnotexist").await.unwrap_err();
            assert!(matches!(err, Error::Service(_)));
        }
    }

    mod search {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn it_returns_results_in_ranked_order() {
            let service = TestService::new();
            let reddit = Reddit::new_with_service(service);
            let sub = reddit.subreddit("PrequelMemes").await.unwrap();
            let posts = sub
                .search("obi-wan", &SearchOptions::default())
                .await
                .unwrap();
            assert_eq!(ids(&posts), vec!["lkx8qv", "l9bq2e", "lu1w0t"]);
        }

        #[tokio::test]
        async fn it_truncates_results_to_the_limit() {
            let reddit = Reddit::new_with_service(TestService::new());
            let sub = reddit.subreddit("PrequelMemes").await.unwrap();
            let opts = SearchOptions::default().limit(2);
            let posts = sub.search("obi-wan", &opts).await.unwrap();
            assert_eq!(ids(&posts), vec!["lkx8qv", "l9bq2e"]);
        }

        #[tokio::test]
        async fn it_follows_the_pagination_cursor() {
            let reddit = Reddit::new_with_service(TestService::new());
            let sub = reddit.subreddit("PrequelMemes").await.unwrap();
            let opts = SearchOptions::default().limit(10);
            let posts = sub.search("hello", &opts).await.unwrap();
            assert_eq!(ids(&posts), vec!["m0a1b2", "m0b1c2", "m0c1d2"]);
        }

        #[tokio::test]
        async fn it_stops_paging_once_the_limit_is_reached() {
            let reddit = Reddit::new_with_service(TestService::new());
            let sub = reddit.subreddit("PrequelMemes").await.unwrap();
            let opts = SearchOptions::default().limit(2);
            let posts = sub.search("hello", &opts).await.unwrap();
            assert_eq!(ids(&posts), vec!["m0a1b2", "m0b1c2"]);
            assert_eq!(reddit.service().queries(), vec!["hello"]);
        }

        #[tokio::test]
        async fn it_sends_the_requested_sort_mode() {
            let reddit = Reddit::new_with_service(TestService::new());
            let sub = reddit.subreddit("PrequelMemes").await.unwrap();
            let opts = SearchOptions::default().sort(Sort::Comments);
            sub.search("darth", &opts).await.unwrap();
            assert_eq!(reddit.service().sorts(), vec![Sort::Comments]);
        }

        #[tokio::test]
        async fn it_returns_nothing_for_an_empty_listing() {
            let reddit = Reddit::new_with_service(TestService::new());
            let sub = reddit.subreddit("PrequelMemes").await.unwrap();
            let posts = sub
                .search("jar-jar", &SearchOptions::default())
                .await
                .unwrap();
            assert!(posts.is_empty());
        }

        #[tokio::test]
        async fn it_propagates_service_errors() {
            let reddit = Reddit::new_with_service(TestService::new());
            let sub = reddit.subreddit("PrequelMemes").await.unwrap();
            let err = sub
                .search("unreachable", &SearchOptions::default())
                .await
                .unwrap_err();
            assert!(matches!(err, Error::Service(_)));
        }

        #[tokio::test]
        async fn it_propagates_parse_errors() {
            let reddit = Reddit::new_with_service(TestService::new());
            let sub = reddit.subreddit("PrequelMemes").await.unwrap();
            let err = sub
                .search("garbled", &SearchOptions::default())
                .await
                .unwrap_err();
            assert!(matches!(err, Error::Parse(_)));
        }
    }
}
