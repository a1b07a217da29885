//! Per-kind detail rendering.
//!
//! Each of the six kinds has exactly one formatter, selected by tag through
//! [`for_kind`]. Keeping the formatting out of the entities and the register
//! means a new kind is added by registering a formatter and a factory branch,
//! not by growing a central conditional.

use std::fmt::Write as _;
use std::str::FromStr;

use crate::catalog::literature::{Kind, Literature, Periodical};
use crate::error::Result;

/// Renders the full details of entities of one kind.
pub trait LiteratureView: std::fmt::Debug {
    fn render(&self, literature: &Literature) -> String;
}

/// Formatter for the kind tag, or `UnsupportedKind` for anything outside the
/// closed set.
pub fn for_kind(kind: &str) -> Result<Box<dyn LiteratureView>> {
    let view: Box<dyn LiteratureView> = match Kind::from_str(kind)? {
        Kind::Magazine => Box::new(MagazineView),
        Kind::Newspaper => Box::new(NewspaperView),
        Kind::Journal => Box::new(JournalView),
        Kind::Book => Box::new(BookView),
        Kind::BookSeries => Box::new(BookSeriesView),
        Kind::Comic => Box::new(ComicView),
    };
    Ok(view)
}

// A view handed an entity of another kind falls back to the identity line it
// can always produce, rather than panicking on the mismatch.
fn identity_line(literature: &Literature) -> String {
    format!(
        "{}: \"{}\" published by {}",
        literature.kind(),
        literature.title(),
        literature.publisher()
    )
}

fn periodical_line(label: &str, periodical: &Periodical) -> String {
    format!(
        "{}: \"{}\" published by {}, genre {}, {} issues a year",
        label,
        periodical.title(),
        periodical.publisher(),
        periodical.genre(),
        periodical.issues_per_year()
    )
}

#[derive(Debug)]
struct MagazineView;

impl LiteratureView for MagazineView {
    fn render(&self, literature: &Literature) -> String {
        match literature {
            Literature::Magazine(p) => periodical_line("Magazine", p),
            other => identity_line(other),
        }
    }
}

#[derive(Debug)]
struct NewspaperView;

impl LiteratureView for NewspaperView {
    fn render(&self, literature: &Literature) -> String {
        match literature {
            Literature::Newspaper(p) => periodical_line("Newspaper", p),
            other => identity_line(other),
        }
    }
}

#[derive(Debug)]
struct JournalView;

impl LiteratureView for JournalView {
    fn render(&self, literature: &Literature) -> String {
        match literature {
            Literature::Journal(p) => periodical_line("Journal", p),
            other => identity_line(other),
        }
    }
}

#[derive(Debug)]
struct BookView;

impl LiteratureView for BookView {
    fn render(&self, literature: &Literature) -> String {
        match literature {
            Literature::Book(b) => {
                format!("Book: \"{}\" published by {}", b.title(), b.publisher())
            }
            other => identity_line(other),
        }
    }
}

#[derive(Debug)]
struct BookSeriesView;

impl LiteratureView for BookSeriesView {
    fn render(&self, literature: &Literature) -> String {
        match literature {
            Literature::BookSeries(series) => {
                let mut out = format!(
                    "Book series: \"{}\" published by {}, {} book(s)",
                    series.title(),
                    series.publisher(),
                    series.books().len()
                );
                for book in series.books() {
                    let _ = write!(
                        out,
                        "\n  - \"{}\" published by {}",
                        book.title(),
                        book.publisher()
                    );
                }
                out
            }
            other => identity_line(other),
        }
    }
}

#[derive(Debug)]
struct ComicView;

impl LiteratureView for ComicView {
    fn render(&self, literature: &Literature) -> String {
        match literature {
            Literature::Comic(c) => {
                format!("Comic: \"{}\" published by {}", c.title(), c.publisher())
            }
            other => identity_line(other),
        }
    }
}

/// Render an entity with the formatter registered for its own kind.
pub fn render(literature: &Literature) -> String {
    match for_kind(literature.kind().as_str()) {
        Ok(view) => view.render(literature),
        // Unreachable: kind() only produces tags from the closed set.
        Err(_) => identity_line(literature),
    }
}
