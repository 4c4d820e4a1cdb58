use crate::http::{HTTPError, HTTPResult};
use crate::reddit::search::{SearchQuery, Sort};
use crate::reddit::service::Service;
use reqwest::StatusCode;
use std::fs;
use std::sync::Mutex;

#[allow(dead_code)]
pub fn do_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn load_data(file: &str) -> String {
    fs::read_to_string(format!("tests/data/{file}.json")).expect("could not find test data")
}

/// Serves canned responses from `tests/data`, answering 404 for anything
/// that has no file.
#[derive(Debug, Default)]
pub struct TestService {
    read_only: bool,
    queries: Mutex<Vec<String>>,
    sorts: Mutex<Vec<Sort>>,
}

impl TestService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    /// Keywords searched for, one entry per page requested.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    /// Sort modes requested, one entry per page requested.
    pub fn sorts(&self) -> Vec<Sort> {
        self.sorts.lock().unwrap().clone()
    }

    fn get(&self, file: &str) -> HTTPResult<String> {
        fs::read_to_string(format!("tests/data/{file}.json"))
            .map_err(|_| HTTPError::Http(StatusCode::NOT_FOUND))
    }
}

impl Service for TestService {
    async fn me(&self) -> HTTPResult<String> {
        self.get("me")
    }

    async fn subreddit_about(&self, subreddit: &str) -> HTTPResult<String> {
        self.get(&format!("about_{subreddit}"))
    }

    async fn search(&self, _subreddit: &str, query: &SearchQuery<'_>) -> HTTPResult<String> {
        self.queries.lock().unwrap().push(query.keyword().to_string());
        self.sorts.lock().unwrap().push(query.sort());
        let file = match query.after() {
            Some(after) => format!("search_{}_{after}", query.keyword()),
            None => format!("search_{}", query.keyword()),
        };
        self.get(&file)
    }

    fn is_read_only(&self) -> bool {
        self.read_only
    }
}
