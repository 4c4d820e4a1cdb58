// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 Michael Dippery <michael@monkey-robot.com>

//! OAuth2 authentication for the Reddit API.
//!
//! Reddit "script" applications trade a client ID, client secret, username,
//! and password for a bearer token (the password grant). Without a
//! username and password, an application can still obtain a read-only
//! token using the client credentials grant.

use crate::conf::Credentials;
use crate::http::{self, HTTPError};
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

/// Endpoint that issues access tokens.
pub const TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";

/// A bearer token for the Reddit API.
#[derive(Clone, PartialEq)]
pub struct AccessToken {
    token: String,
    read_only: bool,
}

impl AccessToken {
    /// Wraps a raw bearer token.
    pub fn new(token: impl Into<String>, read_only: bool) -> Self {
        let token = token.into();
        Self { token, read_only }
    }

    /// The raw bearer token.
    pub fn secret(&self) -> &str {
        &self.token
    }

    /// True if the token was issued without a user context.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &"<redacted>")
            .field("read_only", &self.read_only)
            .finish()
    }
}

/// Form fields sent to the token endpoint for the given credentials.
pub fn grant(credentials: &Credentials) -> Vec<(&'static str, &str)> {
    match credentials.login() {
        Some((username, password)) => vec![
            ("grant_type", "password"),
            ("username", username),
            ("password", password),
        ],
        None => vec![("grant_type", "client_credentials")],
    }
}

/// Requests an access token for `credentials` using `client`.
pub async fn request_token(
    client: &Client,
    credentials: &Credentials,
) -> Result<AccessToken, AuthError> {
    let read_only = credentials.login().is_none();
    debug!(
        "Requesting {} access token for client {}",
        if read_only { "read-only" } else { "user" },
        credentials.client_id()
    );

    let resp = client
        .post(TOKEN_URL)
        .basic_auth(credentials.client_id(), Some(credentials.client_secret()))
        .form(&grant(credentials))
        .send()
        .await
        .map_err(HTTPError::Request)?;
    let body = http::json_body(resp).await?;
    parse_token_response(&body, read_only)
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TokenResponse {
    Token { access_token: String },
    Rejected { error: String },
}

/// Parses the body returned by the token endpoint.
///
/// Reddit reports bad credentials with a successful status code and an
/// `error` field, so the body has to be inspected either way.
pub fn parse_token_response(body: &str, read_only: bool) -> Result<AccessToken, AuthError> {
    match serde_json::from_str::<TokenResponse>(body)? {
        TokenResponse::Token { access_token } => Ok(AccessToken::new(access_token, read_only)),
        TokenResponse::Rejected { error } => Err(AuthError::Rejected(error)),
    }
}

/// Indicates an error while authenticating.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The token endpoint could not be reached or returned an error status.
    #[error("Could not request access token: {0}")]
    Http(#[from] HTTPError),

    /// The token endpoint returned something other than a token.
    #[error("Could not parse access token response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Reddit refused the credentials.
    #[error("Reddit rejected the credentials: {0}")]
    Rejected(String),
}
