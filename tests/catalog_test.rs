//! Scenario tests for the catalog core through the public API.

use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;

use litreg::catalog::factory::{self, LiteratureFields};
use litreg::catalog::view;
use litreg::catalog::{
    DeleteListener, Kind, Literature, LiteratureDeleteEvent, LiteratureRegister,
};
use litreg::LitregError;

#[derive(Default)]
struct RecordingListener {
    seen: Rc<RefCell<Vec<(String, String)>>>,
}

impl DeleteListener for RecordingListener {
    fn on_delete(&self, event: &LiteratureDeleteEvent) {
        self.seen
            .borrow_mut()
            .push((event.literature.title().to_string(), event.source.to_string()));
    }
}

#[test]
fn factory_creates_every_kind_with_matching_tag() {
    for kind in Kind::ALL {
        let fields = if kind.is_periodical() {
            LiteratureFields::new("Title", "Publisher").with_schedule("Genre", 4)
        } else {
            LiteratureFields::new("Title", "Publisher")
        };
        let literature = factory::create(kind.as_str(), fields).unwrap();
        assert_eq!(literature.kind(), kind);
        assert_eq!(literature.kind().as_str(), kind.as_str());
    }
}

#[test]
fn added_literature_is_found_by_its_key() {
    let mut register = LiteratureRegister::new();
    let magazine = factory::create(
        "magazine",
        LiteratureFields::new("Wired", "Condé Nast").with_schedule("Tech", 12),
    )
    .unwrap();
    register.add(magazine);

    let found = register
        .by_title_and_publisher("Wired", "Condé Nast")
        .expect("the magazine should be found by its key");
    match found {
        Literature::Magazine(magazine) => {
            assert_eq!(magazine.genre(), "Tech");
            assert_eq!(magazine.issues_per_year(), 12);
        }
        other => panic!("Expected a magazine, got {:?}", other),
    }
}

#[test]
fn lookup_misses_are_values_not_errors() {
    let register = LiteratureRegister::new();
    assert!(register.by_title_and_publisher("Dune", "Ace").is_none());
    assert_eq!(register.by_publisher("Ace").count(), 0);
}

#[test]
fn by_publisher_returns_all_and_only_matches_in_order() {
    let mut register = LiteratureRegister::new();
    register.add(
        factory::create(
            "magazine",
            LiteratureFields::new("Wired", "Condé Nast").with_schedule("Tech", 12),
        )
        .unwrap(),
    );
    register.add(factory::create("book", LiteratureFields::new("Dune", "Ace")).unwrap());
    register.add(
        factory::create(
            "journal",
            LiteratureFields::new("Vogue", "Condé Nast").with_schedule("Fashion", 12),
        )
        .unwrap(),
    );

    let titles: Vec<&str> = register
        .by_publisher("Condé Nast")
        .map(|literature| literature.title())
        .collect();
    assert_eq!(titles, vec!["Wired", "Vogue"]);
}

#[test]
fn converting_a_book_seeds_the_series_from_its_identity() {
    let mut register = LiteratureRegister::new();
    register.add(factory::create("book", LiteratureFields::new("Dune", "Ace")).unwrap());

    register.promote_to_series("Dune", "Ace").unwrap();

    let series = register.by_title_and_publisher("Dune", "Ace").unwrap();
    assert_eq!(series.kind(), Kind::BookSeries);
    assert_eq!(series.title(), "Dune");
    assert_eq!(series.publisher(), "Ace");
    match series {
        Literature::BookSeries(series) => assert!(series.books().is_empty()),
        other => panic!("Expected a book series, got {:?}", other),
    }
    // The swap is atomic: exactly one entry remains under the key.
    assert_eq!(register.len(), 1);
}

#[test]
fn adding_the_same_book_twice_keeps_both_entries() {
    let series = factory::create("book series", LiteratureFields::new("Dune", "Ace")).unwrap();
    let book = factory::create("book", LiteratureFields::new("Dune", "Ace")).unwrap();

    let (mut series, book) = match (series, book) {
        (Literature::BookSeries(series), Literature::Book(book)) => (series, book),
        other => panic!("Factory returned unexpected kinds: {:?}", other),
    };
    series.add_book(book.clone());
    series.add_book(book);

    assert_eq!(series.books().len(), 2);
}

#[test]
fn view_dispatch_rejects_unknown_kinds() {
    let err = view::for_kind("unicorn").unwrap_err();
    assert!(matches!(err, LitregError::UnsupportedKind(ref tag) if tag == "unicorn"));
}

#[test]
fn removal_notifies_subscribed_listeners() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut register = LiteratureRegister::new();
    register.subscribe(Box::new(RecordingListener { seen: seen.clone() }));
    register.add(factory::create("comic", LiteratureFields::new("Nemi", "Egmont")).unwrap());

    let removed = register.remove("Nemi", "Egmont", "remove").unwrap();
    assert_eq!(removed.kind(), Kind::Comic);
    assert_eq!(
        *seen.borrow(),
        vec![("Nemi".to_string(), "remove".to_string())]
    );
    assert!(register.is_empty());
}

#[test]
fn promotion_counts_as_a_delete_of_the_book() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut register = LiteratureRegister::new();
    register.subscribe(Box::new(RecordingListener { seen: seen.clone() }));
    register.add(factory::create("book", LiteratureFields::new("Dune", "Ace")).unwrap());

    register.promote_to_series("Dune", "Ace").unwrap();

    assert_eq!(
        *seen.borrow(),
        vec![("Dune".to_string(), "promote".to_string())]
    );
}
