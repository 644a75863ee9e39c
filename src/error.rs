use thiserror::Error;

/// Outcomes a catalog operation can refuse with. None of them are fatal: the
/// catalog is left exactly as it was and the session keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No record matched the ISBN or title.
    #[error("Book does not exist at this library.")]
    NotFound,
    /// Checkout requested on a book that is not `Available`.
    #[error("Book not available for checkout.")]
    NotAvailable,
    /// Return requested on a book that is not `Borrowed`.
    #[error("Book was not borrowed.")]
    NotBorrowed,
    #[error("No books found by author: {author}")]
    NoAuthorMatch { author: String },
    #[error("No book found with ISBN: {isbn}")]
    NoIsbnMatch { isbn: String },
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
