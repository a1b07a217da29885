//! The catalog core: entity model, factory, register, views and the delete
//! event contract.

pub mod events;
pub mod factory;
pub mod literature;
pub mod register;
pub mod view;

pub use events::{DeleteListener, LiteratureDeleteEvent, LogDeleteListener};
pub use literature::{Book, BookSeries, Comic, Kind, Literature, Periodical};
pub use register::LiteratureRegister;
