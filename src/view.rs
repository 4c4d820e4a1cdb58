// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 Michael Dippery <michael@monkey-robot.com>

//! Draws viewable objects into a terminal window.

use crate::export::{self, COLUMNS};
use crate::post::PostRecord;
use crate::reddit::client::Subreddit;
use crate::reddit::service::Service;
use crate::reddit::thing::Account;
use colored::Colorize;
use indoc::formatdoc;
use itertools::Itertools;

/// Marks an item that can be converted into a string for display on a terminal.
pub trait Viewable {
    /// Converts the item into a string for display on a terminal.
    fn view(&self) -> String;
}

impl<S: Service> Viewable for Subreddit<'_, S> {
    fn view(&self) -> String {
        formatdoc! {"
            Subreddit: {}
            Subscribers: {}",
            self.display_name(),
            self.subscribers(),
        }
    }
}

impl Viewable for Option<Account> {
    fn view(&self) -> String {
        match self {
            Some(account) => format!("Logged in as: {}", account.name()),
            None => String::from("Logged in as: (read-only session)"),
        }
    }
}

/// Position of the `time` column within a row, which the preview shows as
/// a UTC date rather than a raw timestamp.
const TIME_COLUMN: usize = 3;

/// The first few rows of the exported table.
#[derive(Debug)]
pub struct Preview<'a> {
    records: &'a [PostRecord],
    rows: usize,
}

impl<'a> Preview<'a> {
    /// Widest a cell is allowed to be before it is cut short.
    pub const MAX_CELL_WIDTH: usize = 24;

    /// Previews the first `rows` of `records`.
    pub fn new(records: &'a [PostRecord], rows: usize) -> Self {
        Self { records, rows }
    }

    fn cells(&self) -> Vec<Vec<String>> {
        self.records
            .iter()
            .take(self.rows)
            .enumerate()
            .map(|(index, record)| {
                let mut cells = export::row(record);
                if let Some(created) = record.created_at() {
                    cells[TIME_COLUMN] = created.format("%Y-%m-%d %H:%M:%S").to_string();
                }
                std::iter::once(index.to_string())
                    .chain(cells.into_iter().map(|cell| clip(&cell)))
                    .collect()
            })
            .collect()
    }
}

impl Viewable for Preview<'_> {
    fn view(&self) -> String {
        let header: Vec<String> = std::iter::once("")
            .chain(COLUMNS)
            .map(String::from)
            .collect();
        let rows = self.cells();

        let widths: Vec<usize> = (0..header.len())
            .map(|col| {
                std::iter::once(&header)
                    .chain(rows.iter())
                    .map(|row| row[col].chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let pad = |row: &[String]| {
            row.iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{cell:<width$}"))
                .join("  ")
                .trim_end()
                .to_string()
        };

        let mut lines = vec![pad(&header).bold().to_string()];
        lines.extend(rows.iter().map(|row| pad(row)));
        if self.records.len() > self.rows {
            lines.push(format!("[{} rows total]", self.records.len()));
        }
        lines.join("\n")
    }
}

/// Collapses whitespace and cuts `cell` down to [`Preview::MAX_CELL_WIDTH`]
/// characters, marking the cut with an ellipsis.
fn clip(cell: &str) -> String {
    let cell = cell.split_whitespace().join(" ");
    if cell.chars().count() <= Preview::MAX_CELL_WIDTH {
        cell
    } else {
        let kept: String = cell.chars().take(Preview::MAX_CELL_WIDTH - 1).collect();
        format!("{kept}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reddit::Reddit;
    use crate::reddit::thing::{Listing, Submission};
    use crate::test_utils::{TestService, load_data};
    use pretty_assertions::assert_eq;

    fn records() -> Vec<PostRecord> {
        Listing::<Submission>::parse(&load_data("search_obi-wan"))
            .unwrap()
            .into_things()
            .iter()
            .map(|post| PostRecord::new("obi-wan", post))
            .collect()
    }

    #[test]
    fn it_clips_long_cells() {
        let clipped = clip("Did you ever hear the tragedy of Darth Plagueis?");
        assert_eq!(clipped, "Did you ever hear the t…");
        assert_eq!(clipped.chars().count(), Preview::MAX_CELL_WIDTH);
    }

    #[test]
    fn it_collapses_newlines_in_cells() {
        assert_eq!(clip("It's a\nSith  legend."), "It's a Sith legend.");
    }

    #[test]
    fn it_previews_only_the_requested_rows() {
        colored::control::set_override(false);
        let records = records();
        let view = Preview::new(&records, 2).view();
        let lines: Vec<_> = view.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("   post_id"));
        assert!(lines[1].starts_with("0  lkx8qv"));
        assert!(lines[2].starts_with("1  l9bq2e"));
        assert_eq!(lines[3], "[3 rows total]");
    }

    #[test]
    fn it_previews_every_row_of_short_tables() {
        colored::control::set_override(false);
        let records = records();
        let view = Preview::new(&records, 10).view();
        assert_eq!(view.lines().count(), 4);
        assert!(!view.contains("rows total"));
    }

    #[test]
    fn it_lines_up_columns() {
        colored::control::set_override(false);
        let records = records();
        let view = Preview::new(&records, 10).view();
        let offsets: Vec<_> = view
            .lines()
            .skip(1)
            .map(|line| line.find("obi-wan").unwrap())
            .collect();
        assert_eq!(offsets, vec![12, 12, 12]);
    }

    #[test]
    fn it_shows_times_as_utc_dates() {
        colored::control::set_override(false);
        let records = records();
        let view = Preview::new(&records, 1).view();
        let first = view.lines().nth(1).unwrap();
        assert!(first.contains("2021-02-15 20:00:05"));
        assert!(!first.contains("1613419205"));
    }

    #[tokio::test]
    async fn it_describes_a_subreddit() {
        let reddit = Reddit::new_with_service(TestService::new());
        let sub = reddit.subreddit("PrequelMemes").await.unwrap();
        assert_eq!(sub.view(), "Subreddit: PrequelMemes\nSubscribers: 2143827");
    }

    #[tokio::test]
    async fn it_describes_the_session() {
        let reddit = Reddit::new_with_service(TestService::read_only());
        let me = reddit.me().await.unwrap();
        assert_eq!(me.view(), "Logged in as: (read-only session)");
    }
}
