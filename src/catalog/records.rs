use tracing::{debug, warn};

use super::{normalize_title, Catalog, Lookup};
use crate::models::Book;

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a book. Never fails; a repeated ISBN is kept and only the first
    /// copy will ever be reached by ISBN lookups.
    pub fn add_book(&mut self, book: Book) {
        if self.get_by_isbn(&book.isbn).is_some() {
            warn!(isbn = %book.isbn, title = %book.title, "duplicate ISBN added to catalog");
        } else {
            debug!(isbn = %book.isbn, title = %book.title, "book added");
        }
        self.books.push(book);
    }

    /// Every record, in insertion order.
    pub fn display_all(&self) -> impl Iterator<Item = &Book> + '_ {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn get_by_isbn(&self, isbn: &str) -> Option<&Book> {
        self.first_match(Lookup::Isbn(isbn))
    }

    /// First book whose normalized title equals the normalized `title`.
    /// Checkout, return, and search never go through this; the shell uses it
    /// to suggest a title after an exact lookup misses.
    pub fn find_by_normalized_title(&self, title: &str) -> Option<&Book> {
        let key = normalize_title(title);
        if key.is_empty() {
            return None;
        }
        self.books
            .iter()
            .find(|book| normalize_title(&book.title) == key)
    }

    pub(crate) fn first_match(&self, lookup: Lookup<'_>) -> Option<&Book> {
        self.books.iter().find(|book| lookup.matches(book))
    }

    pub(crate) fn first_match_mut(&mut self, lookup: Lookup<'_>) -> Option<&mut Book> {
        self.books.iter_mut().find(|book| lookup.matches(book))
    }
}

impl FromIterator<Book> for Catalog {
    fn from_iter<I: IntoIterator<Item = Book>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        catalog.extend(iter);
        catalog
    }
}

impl Extend<Book> for Catalog {
    fn extend<I: IntoIterator<Item = Book>>(&mut self, iter: I) {
        for book in iter {
            self.add_book(book);
        }
    }
}
