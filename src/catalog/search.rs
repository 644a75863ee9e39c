//! Read-only lookups. Title search is a substring scan that may come back
//! empty without complaint; author and ISBN searches stop at the first exact
//! hit and report a miss as an error.

use super::{Catalog, Lookup};
use crate::error::{CatalogError, CatalogResult};
use crate::models::Book;

impl Catalog {
    /// Every book whose title contains `fragment`, case-sensitively, in
    /// insertion order.
    pub fn search_by_title<'a>(&'a self, fragment: &'a str) -> impl Iterator<Item = &'a Book> + 'a {
        self.books
            .iter()
            .filter(move |book| book.title.contains(fragment))
    }

    /// First book whose author equals `author` exactly.
    pub fn search_by_author(&self, author: &str) -> CatalogResult<&Book> {
        self.books
            .iter()
            .find(|book| book.author == author)
            .ok_or_else(|| CatalogError::NoAuthorMatch {
                author: author.to_string(),
            })
    }

    /// First book carrying `isbn`.
    pub fn search_by_isbn(&self, isbn: &str) -> CatalogResult<&Book> {
        self.first_match(Lookup::Isbn(isbn))
            .ok_or_else(|| CatalogError::NoIsbnMatch {
                isbn: isbn.to_string(),
            })
    }
}
