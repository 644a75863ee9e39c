use super::Catalog;
use crate::models::Book;

/// Titles every fresh session starts with, as `(title, author, isbn)`.
pub const SEED_BOOKS: [(&str, &str, &str); 10] = [
    ("Trout Fishing", "Sam Smith", "ISBN001"),
    ("Miami", "Joan Didion", "ISBN002"),
    ("Water", "Dr. Herbert Gruber", "ISBN003"),
    ("Winning", "Charlie Sheen", "ISBN004"),
    ("Tempering Chocolate", "Joy Almond", "ISBN005"),
    ("Ancient Civilizations", "Edward Norton", "ISBN006"),
    ("Easy Household Projects", "James Genera", "ISBN007"),
    ("Neil Young: Waging Heavy Peace", "Bill Bullok", "ISBN008"),
    ("Dog Breeds of the World", "Isabelle Young", "ISBN009"),
    ("Earth: A History", "Jude McCartney", "ISBN010"),
];

impl Catalog {
    /// A catalog holding the ten seed books, all `Available`.
    pub fn seeded() -> Self {
        SEED_BOOKS
            .iter()
            .map(|&(title, author, isbn)| Book::new(title, author, isbn))
            .collect()
    }
}
