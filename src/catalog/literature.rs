//! The literature entity model.
//!
//! Every catalogued work is one of a closed set of six kinds. The kind tag
//! doubles as the dispatch key for the factory and the views, so it is
//! validated at the boundary and never left unconstrained.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{LitregError, Result};

/// The closed set of literature kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    #[serde(rename = "magazine")]
    Magazine,
    #[serde(rename = "newspaper")]
    Newspaper,
    #[serde(rename = "journal")]
    Journal,
    #[serde(rename = "book")]
    Book,
    #[serde(rename = "book series")]
    BookSeries,
    #[serde(rename = "comic")]
    Comic,
}

impl Kind {
    /// All kinds, in the order they are offered to the user.
    pub const ALL: [Kind; 6] = [
        Kind::Magazine,
        Kind::Newspaper,
        Kind::Journal,
        Kind::Book,
        Kind::BookSeries,
        Kind::Comic,
    ];

    /// Canonical tag for this kind. Round-trips through `FromStr`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Magazine => "magazine",
            Kind::Newspaper => "newspaper",
            Kind::Journal => "journal",
            Kind::Book => "book",
            Kind::BookSeries => "book series",
            Kind::Comic => "comic",
        }
    }

    /// Whether this kind is published on a recurring schedule.
    pub fn is_periodical(&self) -> bool {
        matches!(self, Kind::Magazine | Kind::Newspaper | Kind::Journal)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = LitregError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "magazine" => Ok(Kind::Magazine),
            "newspaper" => Ok(Kind::Newspaper),
            "journal" => Ok(Kind::Journal),
            "book" => Ok(Kind::Book),
            "book series" => Ok(Kind::BookSeries),
            "comic" => Ok(Kind::Comic),
            other => Err(LitregError::UnsupportedKind(other.to_string())),
        }
    }
}

fn require_nonempty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LitregError::InvalidInput(format!(
            "{} must not be empty",
            field
        )));
    }
    Ok(())
}

/// Anything published on a recurring schedule: magazines, newspapers and
/// journals share this shape and differ only in their kind tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Periodical {
    title: String,
    publisher: String,
    genre: String,
    issues_per_year: u32,
}

impl Periodical {
    pub fn new(
        title: impl Into<String>,
        publisher: impl Into<String>,
        genre: impl Into<String>,
        issues_per_year: u32,
    ) -> Result<Self> {
        let title = title.into();
        let publisher = publisher.into();
        let genre = genre.into();
        require_nonempty("title", &title)?;
        require_nonempty("publisher", &publisher)?;
        if issues_per_year == 0 {
            return Err(LitregError::InvalidInput(
                "issues per year must be a positive number".to_string(),
            ));
        }
        Ok(Self {
            title,
            publisher,
            genre,
            issues_per_year,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn issues_per_year(&self) -> u32 {
        self.issues_per_year
    }
}

/// A single standalone work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    title: String,
    publisher: String,
}

impl Book {
    pub fn new(title: impl Into<String>, publisher: impl Into<String>) -> Result<Self> {
        let title = title.into();
        let publisher = publisher.into();
        require_nonempty("title", &title)?;
        require_nonempty("publisher", &publisher)?;
        Ok(Self { title, publisher })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    /// Produce a new series seeded with this book's title and publisher.
    /// The book itself is left untouched; it carries no other fields worth
    /// carrying over, and the new series starts with zero member books.
    pub fn to_series(&self) -> BookSeries {
        BookSeries {
            title: self.title.clone(),
            publisher: self.publisher.clone(),
            books: Vec::new(),
        }
    }
}

/// An ordered collection of books published under one series title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSeries {
    title: String,
    publisher: String,
    books: Vec<Book>,
}

impl BookSeries {
    pub fn new(title: impl Into<String>, publisher: impl Into<String>) -> Result<Self> {
        let title = title.into();
        let publisher = publisher.into();
        require_nonempty("title", &title)?;
        require_nonempty("publisher", &publisher)?;
        Ok(Self {
            title,
            publisher,
            books: Vec::new(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    /// Append a book to the series. Insertion order is kept and duplicates
    /// are allowed; the caller decides whether the same book belongs twice.
    pub fn add_book(&mut self, book: Book) {
        self.books.push(book);
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }
}

/// A comic. Distinct kind tag, no fields beyond its identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comic {
    title: String,
    publisher: String,
}

impl Comic {
    pub fn new(title: impl Into<String>, publisher: impl Into<String>) -> Result<Self> {
        let title = title.into();
        let publisher = publisher.into();
        require_nonempty("title", &title)?;
        require_nonempty("publisher", &publisher)?;
        Ok(Self { title, publisher })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }
}

/// A catalogued work of any kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Literature {
    #[serde(rename = "magazine")]
    Magazine(Periodical),
    #[serde(rename = "newspaper")]
    Newspaper(Periodical),
    #[serde(rename = "journal")]
    Journal(Periodical),
    #[serde(rename = "book")]
    Book(Book),
    #[serde(rename = "book series")]
    BookSeries(BookSeries),
    #[serde(rename = "comic")]
    Comic(Comic),
}

impl Literature {
    pub fn kind(&self) -> Kind {
        match self {
            Literature::Magazine(_) => Kind::Magazine,
            Literature::Newspaper(_) => Kind::Newspaper,
            Literature::Journal(_) => Kind::Journal,
            Literature::Book(_) => Kind::Book,
            Literature::BookSeries(_) => Kind::BookSeries,
            Literature::Comic(_) => Kind::Comic,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Literature::Magazine(p) | Literature::Newspaper(p) | Literature::Journal(p) => {
                p.title()
            }
            Literature::Book(b) => b.title(),
            Literature::BookSeries(s) => s.title(),
            Literature::Comic(c) => c.title(),
        }
    }

    pub fn publisher(&self) -> &str {
        match self {
            Literature::Magazine(p) | Literature::Newspaper(p) | Literature::Journal(p) => {
                p.publisher()
            }
            Literature::Book(b) => b.publisher(),
            Literature::BookSeries(s) => s.publisher(),
            Literature::Comic(c) => c.publisher(),
        }
    }

    /// Exact, case-sensitive match on the (title, publisher) natural key.
    pub fn matches_key(&self, title: &str, publisher: &str) -> bool {
        self.title() == title && self.publisher() == publisher
    }
}
