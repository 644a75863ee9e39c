/// Top-level menu, printed before every selection.
pub(crate) const MAIN_MENU: &str = "\nLibrary System Menu:
1. Check Out Book
2. Return Book
3. Search for Book by Title
4. Search for Book by Author
5. Search for Book by ISBN
6. Display All Books
0. Exit
Enter your choice: ";

/// One numeric selection from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    CheckOut,
    Return,
    SearchTitle,
    SearchAuthor,
    SearchIsbn,
    DisplayAll,
    /// A number with no menu entry.
    Unknown(i64),
}

impl MenuChoice {
    /// Parse a selection line. `None` means the line was not a number at all,
    /// which the session re-prompts for.
    pub fn parse(line: &str) -> Option<Self> {
        let number: i64 = line.trim().parse().ok()?;
        Some(match number {
            0 => MenuChoice::Exit,
            1 => MenuChoice::CheckOut,
            2 => MenuChoice::Return,
            3 => MenuChoice::SearchTitle,
            4 => MenuChoice::SearchAuthor,
            5 => MenuChoice::SearchIsbn,
            6 => MenuChoice::DisplayAll,
            other => MenuChoice::Unknown(other),
        })
    }
}

/// Second-level choice for checkout and return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Isbn,
    Title,
}

impl KeyKind {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "1" => Some(KeyKind::Isbn),
            "2" => Some(KeyKind::Title),
            _ => None,
        }
    }

    pub(crate) fn noun(self) -> &'static str {
        match self {
            KeyKind::Isbn => "ISBN",
            KeyKind::Title => "title",
        }
    }
}
