// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 Michael Dippery <michael@monkey-robot.com>

//! Exports collected posts as a CSV table.
//!
//! The table has a header row and one row per record. The first column is
//! an unnamed, zero-based row index, followed by the columns in
//! [`COLUMNS`].

use crate::post::PostRecord;
use log::info;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Names of the data columns, in the order they are written.
pub const COLUMNS: [&str; 9] = [
    "post_id",
    "search term",
    "post_title",
    "time",
    "link_flair",
    "num_upvotes",
    "upvote_ratio",
    "num_comments",
    "post text",
];

/// Formats a floating-point cell: the shortest text that reads back as the
/// same value, always with a fractional part.
///
/// # Examples
///
/// ```
/// use corpusbot::export::format_float;
/// assert_eq!(format_float(1613419205.0), "1613419205.0");
/// assert_eq!(format_float(1613419205.25), "1613419205.25");
/// assert_eq!(format_float(1.0), "1.0");
/// ```
pub fn format_float(value: f64) -> String {
    format!("{value:?}")
}

/// The cells of one table row, without the row index.
pub fn row(record: &PostRecord) -> [String; 9] {
    [
        record.id().to_string(),
        record.search_term().to_string(),
        record.title().to_string(),
        format_float(record.created_utc()),
        record.flair().unwrap_or_default().to_string(),
        record.score().to_string(),
        format_float(record.upvote_ratio()),
        record.num_comments().to_string(),
        record.body().to_string(),
    ]
}

/// Writes `records` as CSV to `writer`.
pub fn to_writer<W: io::Write>(writer: W, records: &[PostRecord]) -> Result<(), csv::Error> {
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record(std::iter::once("").chain(COLUMNS))?;
    for (index, record) in records.iter().enumerate() {
        let index = index.to_string();
        let cells = row(record);
        csv.write_record(std::iter::once(index.as_str()).chain(cells.iter().map(String::as_str)))?;
    }

    csv.flush()?;
    Ok(())
}

/// Writes `records` as CSV to the file at `path`, replacing it if it
/// already exists.
pub fn write_csv(path: &Path, records: &[PostRecord]) -> Result<(), Error> {
    let file = std::fs::File::create(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    to_writer(file, records).map_err(|source| Error::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote {} row(s) to {}", records.len(), path.display());
    Ok(())
}

/// An error exporting the table.
#[derive(Debug, Error)]
pub enum Error {
    /// The table file could not be created.
    #[error("Could not create {}: {source}", path.display())]
    Io {
        /// The table file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A row could not be written.
    #[error("Could not write {}: {source}", path.display())]
    Csv {
        /// The table file.
        path: PathBuf,
        /// Underlying CSV error.
        source: csv::Error,
    },
}
