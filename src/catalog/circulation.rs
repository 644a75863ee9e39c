//! Checkout and return. The only transitions a book ever takes are
//! `Available -> Borrowed` and `Borrowed -> Available`; every other state is
//! reported back unchanged.

use tracing::{debug, info};

use super::{Catalog, Lookup};
use crate::error::{CatalogError, CatalogResult};
use crate::models::{Book, BookStatus};

impl Catalog {
    /// Move the first book matching `lookup` from `Available` to `Borrowed`.
    pub fn check_out(&mut self, lookup: Lookup<'_>) -> CatalogResult<&Book> {
        self.transition(lookup, BookStatus::Available, BookStatus::Borrowed)
    }

    /// Move the first book matching `lookup` from `Borrowed` back to
    /// `Available`.
    pub fn return_book(&mut self, lookup: Lookup<'_>) -> CatalogResult<&Book> {
        self.transition(lookup, BookStatus::Borrowed, BookStatus::Available)
    }

    pub fn check_out_by_isbn(&mut self, isbn: &str) -> CatalogResult<&Book> {
        self.check_out(Lookup::Isbn(isbn))
    }

    pub fn check_out_by_title(&mut self, title: &str) -> CatalogResult<&Book> {
        self.check_out(Lookup::Title(title))
    }

    pub fn return_by_isbn(&mut self, isbn: &str) -> CatalogResult<&Book> {
        self.return_book(Lookup::Isbn(isbn))
    }

    pub fn return_by_title(&mut self, title: &str) -> CatalogResult<&Book> {
        self.return_book(Lookup::Title(title))
    }

    fn transition(
        &mut self,
        lookup: Lookup<'_>,
        from: BookStatus,
        to: BookStatus,
    ) -> CatalogResult<&Book> {
        let Some(book) = self.first_match_mut(lookup) else {
            info!(%lookup, "no matching book");
            return Err(CatalogError::NotFound);
        };

        if book.status != from {
            info!(%lookup, current = %book.status, requested = %to, "transition rejected");
            return Err(match to {
                BookStatus::Borrowed => CatalogError::NotAvailable,
                _ => CatalogError::NotBorrowed,
            });
        }

        book.status = to;
        debug!(isbn = %book.isbn, %from, %to, "status changed");
        Ok(&*book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(catalog: &Catalog, isbn: &str) -> Option<BookStatus> {
        catalog.get_by_isbn(isbn).map(|b| b.status)
    }

    #[test]
    fn checkout_then_return_round_trips_status() {
        let mut catalog = Catalog::seeded();

        let book = catalog.check_out_by_isbn("ISBN001").unwrap();
        assert_eq!(book.status, BookStatus::Borrowed);
        assert_eq!(status_of(&catalog, "ISBN001"), Some(BookStatus::Borrowed));

        let book = catalog.return_by_isbn("ISBN001").unwrap();
        assert_eq!(book.status, BookStatus::Available);
        assert_eq!(status_of(&catalog, "ISBN001"), Some(BookStatus::Available));
    }

    #[test]
    fn second_checkout_is_refused() {
        let mut catalog = Catalog::seeded();
        assert!(catalog.check_out_by_isbn("ISBN002").is_ok());
        assert_eq!(
            catalog.check_out_by_isbn("ISBN002").unwrap_err(),
            CatalogError::NotAvailable
        );
        assert_eq!(status_of(&catalog, "ISBN002"), Some(BookStatus::Borrowed));
    }

    #[test]
    fn returning_an_available_book_is_refused() {
        let mut catalog = Catalog::seeded();
        assert_eq!(
            catalog.return_by_isbn("ISBN003").unwrap_err(),
            CatalogError::NotBorrowed
        );
        assert_eq!(status_of(&catalog, "ISBN003"), Some(BookStatus::Available));
    }

    #[test]
    fn unknown_isbn_does_not_exist_and_mutates_nothing() {
        let mut catalog = Catalog::seeded();
        let before: Vec<Book> = catalog.display_all().cloned().collect();

        assert_eq!(
            catalog.check_out_by_isbn("ISBN999").unwrap_err(),
            CatalogError::NotFound
        );
        assert_eq!(
            catalog.return_by_isbn("ISBN999").unwrap_err(),
            CatalogError::NotFound
        );

        let after: Vec<Book> = catalog.display_all().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn title_lookups_are_exact_and_case_sensitive() {
        let mut catalog = Catalog::seeded();
        assert_eq!(
            catalog.check_out_by_title("miami").unwrap_err(),
            CatalogError::NotFound
        );
        assert_eq!(
            catalog.check_out_by_title("Mia").unwrap_err(),
            CatalogError::NotFound
        );

        let book = catalog.check_out_by_title("Miami").unwrap();
        assert_eq!(book.isbn, "ISBN002");
        assert!(catalog.return_by_title("Miami").is_ok());
        assert_eq!(
            catalog.return_by_title("Miami").unwrap_err(),
            CatalogError::NotBorrowed
        );
    }

    #[test]
    fn only_first_duplicate_is_affected() {
        let mut catalog = Catalog::new();
        catalog.add_book(Book::new("Twin", "A", "ISBN100"));
        catalog.add_book(Book::new("Twin", "B", "ISBN100"));

        assert!(catalog.check_out_by_isbn("ISBN100").is_ok());
        assert_eq!(
            catalog.check_out_by_isbn("ISBN100").unwrap_err(),
            CatalogError::NotAvailable
        );

        let statuses: Vec<BookStatus> = catalog.display_all().map(|b| b.status).collect();
        assert_eq!(statuses, vec![BookStatus::Borrowed, BookStatus::Available]);
    }

    #[test]
    fn missing_and_overdue_books_fall_through_to_generic_refusals() {
        let mut catalog = Catalog::new();
        catalog.add_book(Book::with_status("Lost", "A", "L1", BookStatus::Missing));
        catalog.add_book(Book::with_status("Late", "B", "L2", BookStatus::Overdue));

        assert_eq!(catalog.check_out_by_isbn("L1").unwrap_err(), CatalogError::NotAvailable);
        assert_eq!(catalog.return_by_isbn("L1").unwrap_err(), CatalogError::NotBorrowed);
        assert_eq!(catalog.check_out_by_title("Late").unwrap_err(), CatalogError::NotAvailable);
        assert_eq!(catalog.return_by_title("Late").unwrap_err(), CatalogError::NotBorrowed);

        assert_eq!(status_of(&catalog, "L1"), Some(BookStatus::Missing));
        assert_eq!(status_of(&catalog, "L2"), Some(BookStatus::Overdue));
    }
}
