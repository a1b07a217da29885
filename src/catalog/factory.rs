//! Construction of concrete literature entities from a kind tag.
//!
//! The shell validates the tag before prompting for fields, but the factory
//! validates it again and fails closed on anything outside the six kinds.

use std::str::FromStr;
use tracing::debug;

use crate::catalog::literature::{Book, BookSeries, Comic, Kind, Literature, Periodical};
use crate::error::{LitregError, Result};

/// Field values for a new entity. Title and publisher are always required;
/// genre and issues-per-year only for the periodical kinds.
#[derive(Debug, Clone, Default)]
pub struct LiteratureFields {
    pub title: String,
    pub publisher: String,
    pub genre: Option<String>,
    pub issues_per_year: Option<u32>,
}

impl LiteratureFields {
    pub fn new(title: impl Into<String>, publisher: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            publisher: publisher.into(),
            genre: None,
            issues_per_year: None,
        }
    }

    pub fn with_schedule(mut self, genre: impl Into<String>, issues_per_year: u32) -> Self {
        self.genre = Some(genre.into());
        self.issues_per_year = Some(issues_per_year);
        self
    }
}

/// Build the entity matching `kind`. The returned entity's `kind()` always
/// equals the requested tag; an unknown tag is an `UnsupportedKind` error,
/// never a silent default.
pub fn create(kind: &str, fields: LiteratureFields) -> Result<Literature> {
    let kind = Kind::from_str(kind)?;
    debug!(kind = %kind, title = %fields.title, "Creating literature");

    match kind {
        Kind::Magazine => Ok(Literature::Magazine(periodical(fields)?)),
        Kind::Newspaper => Ok(Literature::Newspaper(periodical(fields)?)),
        Kind::Journal => Ok(Literature::Journal(periodical(fields)?)),
        Kind::Book => Ok(Literature::Book(Book::new(fields.title, fields.publisher)?)),
        Kind::BookSeries => Ok(Literature::BookSeries(BookSeries::new(
            fields.title,
            fields.publisher,
        )?)),
        Kind::Comic => Ok(Literature::Comic(Comic::new(
            fields.title,
            fields.publisher,
        )?)),
    }
}

fn periodical(fields: LiteratureFields) -> Result<Periodical> {
    let genre = fields
        .genre
        .ok_or_else(|| LitregError::InvalidInput("genre is required for periodicals".to_string()))?;
    let issues_per_year = fields.issues_per_year.ok_or_else(|| {
        LitregError::InvalidInput("issues per year is required for periodicals".to_string())
    })?;
    Periodical::new(fields.title, fields.publisher, genre, issues_per_year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fields_for(kind: Kind) -> LiteratureFields {
        let fields = LiteratureFields::new("Title", "Publisher");
        if kind.is_periodical() {
            fields.with_schedule("Genre", 12)
        } else {
            fields
        }
    }

    #[test]
    fn test_created_kind_matches_requested_tag() {
        for kind in Kind::ALL {
            let literature = create(kind.as_str(), fields_for(kind)).unwrap();
            assert_eq!(literature.kind(), kind);
        }
    }

    #[test]
    fn test_unknown_kind_fails_closed() {
        let err = create("unicorn", LiteratureFields::new("T", "P")).unwrap_err();
        assert!(matches!(err, LitregError::UnsupportedKind(_)));
    }

    #[test]
    fn test_periodical_requires_schedule_fields() {
        let err = create("magazine", LiteratureFields::new("Wired", "Condé Nast")).unwrap_err();
        assert!(matches!(err, LitregError::InvalidInput(_)));
    }

    #[test]
    fn test_magazine_carries_its_fields() {
        let literature = create(
            "magazine",
            LiteratureFields::new("Wired", "Condé Nast").with_schedule("Tech", 12),
        )
        .unwrap();

        match literature {
            Literature::Magazine(magazine) => {
                assert_eq!(magazine.genre(), "Tech");
                assert_eq!(magazine.issues_per_year(), 12);
            }
            other => panic!("Expected a magazine, got {:?}", other),
        }
    }

    #[test]
    fn test_field_validation_propagates() {
        let err = create("book", LiteratureFields::new("", "Ace")).unwrap_err();
        assert!(matches!(err, LitregError::InvalidInput(_)));
    }
}
