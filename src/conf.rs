// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 Michael Dippery <michael@monkey-robot.com>

//! Credentials and configuration utilities.
//!
//! Reddit credentials live in a TOML file that holds one table per named
//! profile (a "site"), for example:
//!
//! ```toml
//! [corpusbot]
//! client_id = "p-jcoLKBynTLew"
//! client_secret = "gko_LXELoV07ZBNUXrvWZfzE3aI"
//! username = "reddit_user"
//! password = "hunter2"
//! user_agent = "corpusbot v0.1.0 by u/reddit_user"
//! ```
//!
//! `username` and `password` may be omitted, in which case only read-only
//! access to Reddit is possible. Any field can be overridden through the
//! environment (see [`Credentials::with_env_overrides()`]).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::{env, fmt, fs, io};
use thiserror::Error;

/// Environment variable naming the credentials file.
pub const CONFIG_ENV: &str = "CORPUSBOT_CONFIG";

/// Credentials file used when neither `--config` nor [`CONFIG_ENV`] is given.
pub const DEFAULT_CONFIG_FILE: &str = "corpusbot.toml";

/// Profile read from the credentials file by default.
pub const DEFAULT_PROFILE: &str = "corpusbot";

/// Decides which credentials file to read.
///
/// An `explicit` path (from the command line) wins, followed by the value
/// of `$CORPUSBOT_CONFIG`, followed by `corpusbot.toml` in the current
/// directory.
///
/// # Examples
///
/// ```
/// use corpusbot::conf::config_path;
/// use std::path::{Path, PathBuf};
/// let path = config_path(Some(Path::new("/etc/corpusbot.toml")));
/// assert_eq!(path, PathBuf::from("/etc/corpusbot.toml"));
/// ```
pub fn config_path(explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE)),
    }
}

/// Credentials for a Reddit "script" or read-only application.
#[derive(Clone, Deserialize, PartialEq)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
    username: Option<String>,
    password: Option<String>,
    user_agent: Option<String>,
}

impl Credentials {
    /// Loads the `profile` table from the credentials file at `path` and
    /// applies any environment overrides.
    pub fn load(path: &Path, profile: &str) -> Result<Self, Error> {
        let contents = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents, profile).map(Credentials::with_env_overrides)
    }

    /// Parses the `profile` table out of TOML `contents`.
    pub fn parse(contents: &str, profile: &str) -> Result<Self, Error> {
        let mut table: toml::Table = toml::from_str(contents)?;
        let section = table
            .remove(profile)
            .ok_or_else(|| Error::MissingProfile(profile.to_string()))?;
        Ok(section.try_into()?)
    }

    /// Replaces fields with the values of `$CORPUSBOT_CLIENT_ID`,
    /// `$CORPUSBOT_CLIENT_SECRET`, `$CORPUSBOT_USERNAME`,
    /// `$CORPUSBOT_PASSWORD`, and `$CORPUSBOT_USER_AGENT` when set.
    pub fn with_env_overrides(self) -> Self {
        fn var(name: &str) -> Option<String> {
            env::var(name).ok().filter(|value| !value.is_empty())
        }

        Self {
            client_id: var("CORPUSBOT_CLIENT_ID").unwrap_or(self.client_id),
            client_secret: var("CORPUSBOT_CLIENT_SECRET").unwrap_or(self.client_secret),
            username: var("CORPUSBOT_USERNAME").or(self.username),
            password: var("CORPUSBOT_PASSWORD").or(self.password),
            user_agent: var("CORPUSBOT_USER_AGENT").or(self.user_agent),
        }
    }

    /// The application's client ID.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// The application's client secret.
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// Username and password, if both were supplied.
    ///
    /// When this is `None` only a read-only session can be opened.
    pub fn login(&self) -> Option<(&str, &str)> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Some((username, password)),
            _ => None,
        }
    }

    /// The configured user agent, or a generic one naming this program.
    pub fn user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(crate::http::default_user_agent)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// An error reading credentials.
#[derive(Debug, Error)]
pub enum Error {
    /// The credentials file could not be read.
    #[error("Could not read credentials file {}: {source}", path.display())]
    Read {
        /// Location of the credentials file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The credentials file is not valid TOML, or a profile is missing
    /// required fields.
    #[error("Invalid credentials file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The requested profile does not appear in the credentials file.
    #[error("No [{0}] profile in credentials file")]
    MissingProfile(String),
}
