// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 Michael Dippery <michael@monkey-robot.com>

//! A directory of per-post text files.
//!
//! Each post is stored as `<id>.txt`, containing the post's title
//! immediately followed by its body. A post is only ever written once: if
//! a later search turns up the same post again, the existing file is left
//! alone.

use log::debug;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The outcome of writing a post to the corpus.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Written {
    /// A new file was created.
    Created,

    /// A file for the post already existed and was left untouched.
    AlreadyPresent,
}

/// A directory of per-post text files.
#[derive(Debug)]
pub struct Corpus {
    dir: PathBuf,
}

impl Corpus {
    /// Creates a new, empty corpus directory at `dir`, along with any
    /// missing parent directories.
    ///
    /// Fails with [`Error::DirectoryExists`] if `dir` already exists; an
    /// existing corpus is never merged into.
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self, Error> {
        let dir = dir.into();

        if let Some(parent) = dir.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        match fs::create_dir(&dir) {
            Ok(()) => {
                debug!("Created corpus directory {}", dir.display());
                Ok(Self { dir })
            }
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                Err(Error::DirectoryExists(dir))
            }
            Err(source) => Err(Error::Io { path: dir, source }),
        }
    }

    /// The corpus directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file that holds the post with the given `id`.
    pub fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.txt"))
    }

    /// Writes a post's `title` followed by its `body` to `<id>.txt`, unless
    /// that file already exists.
    ///
    /// Only an existing file is tolerated; any other I/O failure is
    /// returned as an error.
    pub fn write(&self, id: &str, title: &str, body: &str) -> Result<Written, Error> {
        if id.is_empty() || !id.chars().all(|ch| ch.is_ascii_alphanumeric()) {
            return Err(Error::InvalidId(id.to_string()));
        }

        let path = self.path_for(id);
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                debug!("{} already exists, skipping", path.display());
                return Ok(Written::AlreadyPresent);
            }
            Err(source) => return Err(Error::Io { path, source }),
        };

        file.write_all(title.as_bytes())
            .and_then(|_| file.write_all(body.as_bytes()))
            .map_err(|source| Error::Io {
                path: path.clone(),
                source,
            })?;
        Ok(Written::Created)
    }
}

/// An error writing to a corpus.
#[derive(Debug, Error)]
pub enum Error {
    /// The corpus directory is left over from an earlier run.
    #[error("Output directory {} already exists", .0.display())]
    DirectoryExists(PathBuf),

    /// A post ID that cannot safely be used as a file name.
    #[error("Invalid post ID: {0:?}")]
    InvalidId(String),

    /// Any other file system error.
    #[error("Could not write {}: {source}", path.display())]
    Io {
        /// The file or directory being written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    mod create {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn it_creates_the_directory() {
            let scratch = tempdir().unwrap();
            let corpus = Corpus::create(scratch.path().join("PrequelMemes")).unwrap();
            assert!(corpus.dir().is_dir());
        }

        #[test]
        fn it_creates_missing_parents() {
            let scratch = tempdir().unwrap();
            let dir = scratch.path().join("out").join("PrequelMemes");
            let corpus = Corpus::create(&dir).unwrap();
            assert_eq!(corpus.dir(), dir);
            assert!(dir.is_dir());
        }

        #[test]
        fn it_refuses_to_reuse_an_existing_directory() {
            let scratch = tempdir().unwrap();
            let dir = scratch.path().join("PrequelMemes");
            Corpus::create(&dir).unwrap();
            let err = Corpus::create(&dir).unwrap_err();
            assert!(matches!(err, Error::DirectoryExists(ref path) if *path == dir));
        }
    }

    mod write {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn it_writes_the_title_followed_by_the_body() {
            let scratch = tempdir().unwrap();
            let corpus = Corpus::create(scratch.path().join("sub")).unwrap();
            let written = corpus
                .write("lkx8qv", "Hello there!", "General Kenobi!")
                .unwrap();
            assert_eq!(written, Written::Created);
            let contents = fs::read_to_string(corpus.path_for("lkx8qv")).unwrap();
            assert_eq!(contents, "Hello there!General Kenobi!");
        }

        #[test]
        fn it_writes_only_the_title_for_link_posts() {
            let scratch = tempdir().unwrap();
            let corpus = Corpus::create(scratch.path().join("sub")).unwrap();
            corpus
                .write("l9bq2e", "I have the high ground", "")
                .unwrap();
            let contents = fs::read_to_string(corpus.path_for("l9bq2e")).unwrap();
            assert_eq!(contents, "I have the high ground");
        }

        #[test]
        fn it_keeps_the_first_version_of_a_post() {
            let scratch = tempdir().unwrap();
            let corpus = Corpus::create(scratch.path().join("sub")).unwrap();
            corpus.write("lu1w0t", "First", " version").unwrap();
            let written = corpus.write("lu1w0t", "Second", " version").unwrap();
            assert_eq!(written, Written::AlreadyPresent);
            let contents = fs::read_to_string(corpus.path_for("lu1w0t")).unwrap();
            assert_eq!(contents, "First version");
        }

        #[test]
        fn it_rejects_ids_that_are_not_file_names() {
            let scratch = tempdir().unwrap();
            let corpus = Corpus::create(scratch.path().join("sub")).unwrap();
            for id in ["", "../escape", "a/b", "dots.txt"] {
                let err = corpus.write(id, "title", "body").unwrap_err();
                assert!(matches!(err, Error::InvalidId(_)), "{id:?} was accepted");
            }
            assert!(!scratch.path().join("escape.txt").exists());
        }

        #[test]
        fn it_surfaces_other_io_errors() {
            let scratch = tempdir().unwrap();
            let corpus = Corpus::create(scratch.path().join("sub")).unwrap();
            fs::remove_dir(corpus.dir()).unwrap();
            let err = corpus.write("lkx8qv", "Hello there!", "").unwrap_err();
            assert!(matches!(err, Error::Io { .. }));
        }
    }
}
