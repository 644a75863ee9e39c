//! Domain models for the catalog. These stay plain data holders so the
//! catalog can own the matching rules and the shell can own presentation.

use std::fmt;

/// Circulation state of a single copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BookStatus {
    /// On the shelf and free to check out.
    #[default]
    Available,
    /// Checked out by a patron.
    Borrowed,
    /// Representable, but no operation moves a book here.
    Missing,
    /// Representable, but no operation moves a book here.
    Overdue,
}

impl BookStatus {
    /// Label used in the formatted book line.
    pub fn label(self) -> &'static str {
        match self {
            BookStatus::Available => "Available",
            BookStatus::Borrowed => "Borrowed",
            BookStatus::Missing => "Missing",
            BookStatus::Overdue => "Overdue",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One catalog record. Title and author are stored exactly as supplied;
/// normalization only ever happens on the comparison side.
pub struct Book {
    pub title: String,
    pub author: String,
    /// Expected to be unique within a catalog, but not enforced.
    pub isbn: String,
    pub status: BookStatus,
}

impl Book {
    /// Build an `Available` book.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self::with_status(title, author, isbn, BookStatus::Available)
    }

    pub fn with_status(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        status: BookStatus,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            status,
        }
    }
}

impl fmt::Display for Book {
    /// `Title: …, Author: …, ISBN: …, Status: …`, the line the shell prints
    /// for listings and search hits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}, Author: {}, ISBN: {}, Status: {}",
            self.title, self.author, self.isbn, self.status
        )
    }
}
