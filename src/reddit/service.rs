// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 Michael Dippery <michael@monkey-robot.com>

//! HTTPS connector for the Reddit API.
//!
//! Service structures in this module provide a low-level way to interact
//! with the Reddit API over HTTPS, essentially a specialized HTTPS client
//! specifically for Reddit. They return raw response bodies; parsing is
//! left to [`crate::reddit::thing`].

use crate::conf::Credentials;
use crate::http::{self, HTTPResult};
use crate::reddit::auth::{self, AccessToken, AuthError};
use crate::reddit::search::SearchQuery;
use log::debug;
use reqwest::Client;

/// Base URL for authenticated API requests.
pub const OAUTH_BASE: &str = "https://oauth.reddit.com";

/// A service for retrieving information from Reddit.
///
/// Using this trait, clients can implement different ways of connecting
/// to the Reddit API, such as an actual connector for production code,
/// and a canned connector for testing purposes.
pub trait Service {
    /// Retrieves the authenticated account.
    fn me(&self) -> impl Future<Output = HTTPResult<String>> + Send;

    /// Retrieves metadata for `subreddit`.
    fn subreddit_about(&self, subreddit: &str) -> impl Future<Output = HTTPResult<String>> + Send;

    /// Retrieves one page of search results from `subreddit`.
    fn search(
        &self,
        subreddit: &str,
        query: &SearchQuery<'_>,
    ) -> impl Future<Output = HTTPResult<String>> + Send;

    /// True if the service has no user context, in which case
    /// [`Service::me()`] will fail.
    fn is_read_only(&self) -> bool {
        false
    }
}

/// A service that contacts the Reddit API directly to retrieve information.
#[derive(Debug)]
pub struct RedditService {
    client: Client,
    token: AccessToken,
}

impl RedditService {
    /// Authenticates with Reddit and returns a service that sends requests
    /// using the resulting token.
    pub async fn login(credentials: &Credentials) -> Result<Self, AuthError> {
        let client = http::client(&credentials.user_agent())?;
        let token = auth::request_token(&client, credentials).await?;
        Ok(Self { client, token })
    }

    fn uri(path: &str) -> String {
        format!("{OAUTH_BASE}{path}")
    }

    async fn get(&self, path: &str, query: &[(&str, String)]) -> HTTPResult<String> {
        let uri = Self::uri(path);
        debug!("GET {uri} {query:?}");
        let resp = self
            .client
            .get(&uri)
            .bearer_auth(self.token.secret())
            .query(query)
            .send()
            .await?;
        http::json_body(resp).await
    }
}

impl Service for RedditService {
    async fn me(&self) -> HTTPResult<String> {
        self.get("/api/v1/me", &[("raw_json", "1".to_string())])
            .await
    }

    async fn subreddit_about(&self, subreddit: &str) -> HTTPResult<String> {
        let path = format!("/r/{subreddit}/about");
        self.get(&path, &[("raw_json", "1".to_string())]).await
    }

    async fn search(&self, subreddit: &str, query: &SearchQuery<'_>) -> HTTPResult<String> {
        let path = format!("/r/{subreddit}/search");
        self.get(&path, &query.params()).await
    }

    fn is_read_only(&self) -> bool {
        self.token.is_read_only()
    }
}
