//! The literature register: owner of the live collection.
//!
//! A plain vector scanned linearly. The catalog is a small single-session
//! collection, so the observable contract is what matters: insertion order is
//! preserved everywhere, key lookups are exact and first-match-wins, and
//! misses are values, not errors.

use tracing::debug;

use crate::catalog::events::{DeleteListener, LiteratureDeleteEvent};
use crate::catalog::literature::{Kind, Literature};
use crate::error::{LitregError, Result};

pub struct LiteratureRegister {
    entries: Vec<Literature>,
    delete_listeners: Vec<Box<dyn DeleteListener>>,
}

impl LiteratureRegister {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            delete_listeners: Vec::new(),
        }
    }

    /// Append an entity. Duplicate (title, publisher) keys are allowed; only
    /// the first of them is ever reachable through key lookup.
    pub fn add(&mut self, literature: Literature) {
        debug!(
            kind = %literature.kind(),
            title = %literature.title(),
            publisher = %literature.publisher(),
            "Adding literature to register"
        );
        self.entries.push(literature);
    }

    /// First entity matching the natural key, if any.
    pub fn by_title_and_publisher(&self, title: &str, publisher: &str) -> Option<&Literature> {
        self.entries
            .iter()
            .find(|literature| literature.matches_key(title, publisher))
    }

    /// Mutable variant of [`by_title_and_publisher`], same match contract.
    ///
    /// [`by_title_and_publisher`]: Self::by_title_and_publisher
    pub fn by_title_and_publisher_mut(
        &mut self,
        title: &str,
        publisher: &str,
    ) -> Option<&mut Literature> {
        self.entries
            .iter_mut()
            .find(|literature| literature.matches_key(title, publisher))
    }

    /// All entities with a matching publisher, in insertion order. Empty when
    /// nothing matches; each call re-scans from the start.
    pub fn by_publisher<'a>(
        &'a self,
        publisher: &'a str,
    ) -> impl Iterator<Item = &'a Literature> + 'a {
        self.entries
            .iter()
            .filter(move |literature| literature.publisher() == publisher)
    }

    /// All entities in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Literature> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register a listener for delete notifications. Listeners are invoked in
    /// subscription order, synchronously, after the entity has left the
    /// collection.
    pub fn subscribe(&mut self, listener: Box<dyn DeleteListener>) {
        self.delete_listeners.push(listener);
    }

    /// Remove the first entity matching the key and notify the delete
    /// listeners. Returns the removed entity, or `None` on a miss (nobody is
    /// notified then). The order of the remaining entries is unchanged.
    pub fn remove(&mut self, title: &str, publisher: &str, source: &str) -> Option<Literature> {
        let index = self.position_of(title, publisher)?;
        let removed = self.entries.remove(index);
        debug!(
            kind = %removed.kind(),
            title = %removed.title(),
            publisher = %removed.publisher(),
            source = %source,
            "Removed literature from register"
        );
        self.notify_delete(&removed, source);
        Some(removed)
    }

    /// Promote the book under the given key to a book series, in place.
    ///
    /// The swap is atomic as far as any observer goes: the series takes the
    /// book's position, so there is no intermediate state where both or
    /// neither are present. A delete event is published for the book. Fails
    /// with `NotFound` on a key miss and `KindMismatch` when the key holds
    /// anything but a book, leaving the register untouched either way.
    pub fn promote_to_series(&mut self, title: &str, publisher: &str) -> Result<&Literature> {
        let index = self
            .position_of(title, publisher)
            .ok_or_else(|| LitregError::NotFound {
                title: title.to_string(),
                publisher: publisher.to_string(),
            })?;

        let series = match &self.entries[index] {
            Literature::Book(book) => book.to_series(),
            other => {
                return Err(LitregError::KindMismatch {
                    expected: Kind::Book,
                    actual: other.kind(),
                })
            }
        };

        let removed = std::mem::replace(&mut self.entries[index], Literature::BookSeries(series));
        debug!(
            title = %removed.title(),
            publisher = %removed.publisher(),
            "Promoted book to book series"
        );
        self.notify_delete(&removed, "promote");
        Ok(&self.entries[index])
    }

    fn position_of(&self, title: &str, publisher: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|literature| literature.matches_key(title, publisher))
    }

    fn notify_delete(&self, literature: &Literature, source: &str) {
        let event = LiteratureDeleteEvent { literature, source };
        for listener in &self.delete_listeners {
            listener.on_delete(&event);
        }
    }
}

impl Default for LiteratureRegister {
    fn default() -> Self {
        Self::new()
    }
}
