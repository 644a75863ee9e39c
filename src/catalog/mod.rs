//! The in-memory catalog, split across logical submodules the same way the
//! operations group: record keeping, circulation, and search.

mod circulation;
mod normalize;
mod records;
mod search;
mod seed;

use std::fmt;

use crate::models::Book;

pub use normalize::normalize_title;
pub use seed::SEED_BOOKS;

/// Ordered collection of books, insertion order preserved. Owned by a single
/// session; every mutation goes through `&mut self`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

/// Which field a checkout or return request identifies a book by. Both
/// variants match exactly and case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    Isbn(&'a str),
    Title(&'a str),
}

impl Lookup<'_> {
    pub(crate) fn matches(&self, book: &Book) -> bool {
        match self {
            Lookup::Isbn(isbn) => book.isbn == *isbn,
            Lookup::Title(title) => book.title == *title,
        }
    }
}

impl fmt::Display for Lookup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Isbn(isbn) => write!(f, "isbn={isbn}"),
            Lookup::Title(title) => write!(f, "title={title:?}"),
        }
    }
}
