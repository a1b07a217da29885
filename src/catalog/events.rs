//! Delete notification contract for the register.
//!
//! Listeners are told about every entity that leaves the collection, whether
//! through an explicit removal or a book-to-series promotion. Notification is
//! synchronous and happens after the entity is already gone from the register.

use tracing::info;

use crate::catalog::literature::Literature;

/// Carries the deleted entity and the operation that removed it.
#[derive(Debug, Clone, Copy)]
pub struct LiteratureDeleteEvent<'a> {
    pub literature: &'a Literature,
    pub source: &'a str,
}

pub trait DeleteListener {
    fn on_delete(&self, event: &LiteratureDeleteEvent);
}

/// Stock listener that records deletions on the log.
#[derive(Debug, Default)]
pub struct LogDeleteListener;

impl DeleteListener for LogDeleteListener {
    fn on_delete(&self, event: &LiteratureDeleteEvent) {
        info!(
            kind = %event.literature.kind(),
            title = %event.literature.title(),
            publisher = %event.literature.publisher(),
            source = %event.source,
            "Literature deleted"
        );
    }
}
