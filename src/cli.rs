// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 Michael Dippery <michael@monkey-robot.com>

//! Drives the command-line program.

use crate::collect::{self, Collector, normalize_keywords};
use crate::conf::{self, Credentials};
use crate::corpus::{self, Corpus};
use crate::export;
use crate::reddit::auth::AuthError;
use crate::reddit::client::{self, Reddit};
use crate::reddit::search::{SearchOptions, Sort, TimeFilter};
use crate::reddit::service::Service;
use crate::view::{Preview, Viewable};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::info;
use std::path::PathBuf;
use std::process;
use thiserror::Error;

/// Prints `message` to stderr and exits with `error_code`.
pub fn die(error_code: i32, message: &str) -> ! {
    eprintln!("{message}");
    process::exit(error_code);
}

fn subreddit_name(name: &str) -> Result<String, String> {
    if client::is_valid_subreddit_name(name) {
        Ok(name.to_string())
    } else {
        Err(String::from(
            "subreddit names may only contain letters, digits, and underscores",
        ))
    }
}

/// Program configuration.
#[derive(Debug, Parser)]
#[command(version)]
#[command(about = "Collects a subreddit's posts matching a set of keywords into a text corpus and a CSV table", long_about = None)]
pub struct Config {
    #[command(flatten)]
    verbosity: Verbosity,

    /// Subreddit to search
    #[arg(short, long, default_value = "PrequelMemes", value_parser = subreddit_name)]
    subreddit: String,

    /// Comma-separated keywords to search for
    #[arg(short, long, value_delimiter = ',', default_values = ["obi-wan", "darth"])]
    keywords: Vec<String>,

    /// Maximum number of posts to collect per keyword
    #[arg(short = 'n', long, default_value_t = 10)]
    limit: usize,

    /// How Reddit ranks search results
    #[arg(long, value_enum, default_value_t = Sort::Top)]
    sort: Sort,

    /// Window of time to search
    #[arg(short, long = "time", value_enum, default_value_t = TimeFilter::All)]
    time_filter: TimeFilter,

    /// Profile to read from the credentials file
    #[arg(long, value_name = "PROFILE", default_value = conf::DEFAULT_PROFILE)]
    site: String,

    /// Credentials file [default: $CORPUSBOT_CONFIG or ./corpusbot.toml]
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory in which the corpus and table are written
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// Number of table rows to print when finished
    #[arg(long, value_name = "ROWS", default_value_t = 10)]
    preview: usize,
}

impl Config {
    /// Requested logging verbosity.
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Subreddit to search.
    pub fn subreddit(&self) -> &str {
        &self.subreddit
    }

    /// Keywords to search for, trimmed, with empty keywords removed.
    pub fn keywords(&self) -> Vec<String> {
        normalize_keywords(&self.keywords)
    }

    /// Options applied to every keyword search.
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions::default()
            .sort(self.sort)
            .limit(self.limit)
            .time_filter(self.time_filter)
    }

    /// Credentials file to read.
    pub fn config_path(&self) -> PathBuf {
        conf::config_path(self.config.as_deref())
    }

    /// Directory that receives one text file per post.
    pub fn corpus_dir(&self) -> PathBuf {
        self.output.join(&self.subreddit)
    }

    /// File that receives the table of collected posts.
    pub fn table_path(&self) -> PathBuf {
        self.output.join(format!("{}.csv", self.subreddit))
    }
}

/// Runs the command-line program.
#[derive(Debug)]
pub struct Runner {
    config: Config,
}

impl Runner {
    /// Create a new program runner using the given `config`.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Logs in using the configured credentials and runs the program.
    pub async fn run(&self) -> Result<(), Error> {
        let path = self.config.config_path();
        println!("Credentials file: {}", path.display());
        let credentials = Credentials::load(&path, &self.config.site)?;

        let reddit = Reddit::login(&credentials).await?;
        self.run_with(&reddit).await
    }

    /// Runs the program against an already established session.
    ///
    /// The corpus directory is created before anything is searched, so a
    /// leftover directory from an earlier run stops the program before any
    /// requests are made. If a search fails, post files already written
    /// are kept but the table is not written.
    pub async fn run_with<S: Service>(&self, reddit: &Reddit<S>) -> Result<(), Error> {
        println!("{}", reddit.me().await?.view());

        let subreddit = reddit.subreddit(self.config.subreddit()).await?;
        println!("{}", subreddit.view());

        let keywords = self.config.keywords();
        if keywords.is_empty() {
            return Err(Error::NoKeywords);
        }
        let corpus = Corpus::create(self.config.corpus_dir())?;

        let collection = Collector::new(&subreddit, &corpus)
            .collect(&keywords, &self.config.search_options())
            .await?;

        let table = self.config.table_path();
        export::write_csv(&table, collection.records())?;
        info!(
            "{} post file(s) in {} ({} shared between keywords), table in {}",
            collection.files_created(),
            corpus.dir().display(),
            collection.files_already_present(),
            table.display()
        );

        println!(
            "{}",
            Preview::new(collection.records(), self.config.preview).view()
        );
        Ok(())
    }
}

/// An error that stops the program.
#[derive(Debug, Error)]
pub enum Error {
    /// The credentials could not be loaded.
    #[error(transparent)]
    Config(#[from] conf::Error),

    /// Logging in failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Reddit could not be queried.
    #[error(transparent)]
    Reddit(#[from] client::Error),

    /// The corpus directory could not be created.
    #[error(transparent)]
    Corpus(#[from] corpus::Error),

    /// Collecting posts failed.
    #[error(transparent)]
    Collect(#[from] collect::Error),

    /// The table could not be written.
    #[error(transparent)]
    Export(#[from] export::Error),

    /// Every keyword was blank.
    #[error("No keywords to search for")]
    NoKeywords,
}
