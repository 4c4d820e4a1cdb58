// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 Michael Dippery <michael@monkey-robot.com>

//! Shared plumbing for talking to APIs over HTTP.

use log::debug;
use reqwest::{Client, ClientBuilder, Response, header};
use thiserror::Error;

/// The result of an HTTP request.
pub type HTTPResult<T> = Result<T, HTTPError>;

/// Indicates an error has occurred when making an HTTP call.
#[derive(Debug, Error)]
pub enum HTTPError {
    /// The HTTP client itself could not be constructed.
    #[error("Could not create HTTP client: {0}")]
    Build(reqwest::Error),

    /// An error that occurred while making an HTTP request or reading
    /// its body.
    #[error("Error while making HTTP request: {0}")]
    Request(#[from] reqwest::Error),

    /// An unsuccessful HTTP status code in an HTTP response.
    #[error("Request returned HTTP {0}")]
    Http(reqwest::StatusCode),

    /// A missing Content-Type header in a response.
    #[error("Missing Content-Type header")]
    MissingContentType,

    /// An invalid Content-Type header.
    #[error("Invalid Content-Type header value: {0}")]
    InvalidContentType(#[from] header::ToStrError),

    /// A Content-Type that is not understood by the service.
    #[error("Unexpected content type: {0}")]
    UnexpectedContentType(String),
}

/// An appropriate user agent to use when the caller has not configured one.
pub fn default_user_agent() -> String {
    format!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Creates an HTTP client that identifies itself with `user_agent`.
pub fn client(user_agent: &str) -> HTTPResult<Client> {
    ClientBuilder::new()
        .user_agent(user_agent)
        .build()
        .map_err(HTTPError::Build)
}

/// Consumes a response, returning its body if the request succeeded and
/// the body is JSON.
pub async fn json_body(resp: Response) -> HTTPResult<String> {
    let status = resp.status();
    debug!("{} {}", status, resp.url());

    if !status.is_success() {
        return Err(HTTPError::Http(status));
    }

    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .ok_or(HTTPError::MissingContentType)?
        .to_str()?;
    if !content_type.starts_with("application/json") {
        Err(HTTPError::UnexpectedContentType(content_type.to_string()))
    } else {
        Ok(resp.text().await?)
    }
}
