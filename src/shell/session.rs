use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use crate::catalog::{Catalog, Lookup};
use crate::config::ShellConfig;
use crate::error::CatalogError;

use super::helpers::{chomp, write_status, StatusKind};
use super::menu::{KeyKind, MenuChoice, MAIN_MENU};

/// The two mutating menu entries share one prompt flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Circulation {
    CheckOut,
    Return,
}

impl Circulation {
    fn header(self) -> &'static str {
        match self {
            Circulation::CheckOut => "Check out by:",
            Circulation::Return => "Return book by:",
        }
    }

    fn verb(self) -> &'static str {
        match self {
            Circulation::CheckOut => "check out",
            Circulation::Return => "return",
        }
    }
}

/// One interactive run of the menu over a pair of line streams. The session
/// borrows the catalog for its whole lifetime and is its only writer.
pub struct Session<'c, R, W> {
    catalog: &'c mut Catalog,
    input: R,
    output: W,
    config: ShellConfig,
}

impl<'c, R: BufRead, W: Write> Session<'c, R, W> {
    pub fn new(catalog: &'c mut Catalog, input: R, output: W, config: ShellConfig) -> Self {
        Self {
            catalog,
            input,
            output,
            config,
        }
    }

    /// Show the menu and dispatch selections until `0` or end of input.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.prompt(MAIN_MENU)?;
            let Some(choice) = self.read_choice()? else {
                debug!("input closed");
                self.status("Exiting...", StatusKind::Info)?;
                return Ok(());
            };
            debug!(?choice, "menu selection");

            if !self.handle_choice(choice)? {
                return Ok(());
            }
        }
    }

    /// Returns `false` once the session should end.
    fn handle_choice(&mut self, choice: MenuChoice) -> Result<bool> {
        match choice {
            MenuChoice::Exit => {
                self.status("Exiting...", StatusKind::Info)?;
                return Ok(false);
            }
            MenuChoice::CheckOut => self.handle_circulation(Circulation::CheckOut)?,
            MenuChoice::Return => self.handle_circulation(Circulation::Return)?,
            MenuChoice::SearchTitle => self.handle_search_title()?,
            MenuChoice::SearchAuthor => self.handle_search_author()?,
            MenuChoice::SearchIsbn => self.handle_search_isbn()?,
            MenuChoice::DisplayAll => self.handle_display_all()?,
            MenuChoice::Unknown(_) => {
                self.status("Invalid choice. Please try again.", StatusKind::Error)?
            }
        }
        Ok(true)
    }

    fn handle_circulation(&mut self, action: Circulation) -> Result<()> {
        self.prompt(&format!("{}\n1. ISBN\n2. Title\nEnter choice: ", action.header()))?;
        let Some(line) = self.read_line()? else {
            return Ok(());
        };
        let Some(kind) = KeyKind::parse(&line) else {
            return self.status("Invalid choice.", StatusKind::Error);
        };

        self.prompt(&format!("Enter {} to {}: ", kind.noun(), action.verb()))?;
        let Some(line) = self.read_line()? else {
            return Ok(());
        };
        let lookup = match kind {
            KeyKind::Isbn => Lookup::Isbn(line.trim()),
            KeyKind::Title => Lookup::Title(&line),
        };

        let outcome = match action {
            Circulation::CheckOut => self
                .catalog
                .check_out(lookup)
                .map(|_| "Book checked out successfully."),
            Circulation::Return => self
                .catalog
                .return_book(lookup)
                .map(|_| "Book returned successfully."),
        };

        match outcome {
            Ok(message) => self.status(message, StatusKind::Info),
            Err(err) => {
                self.status(&err.to_string(), StatusKind::Error)?;
                if let (Lookup::Title(title), CatalogError::NotFound) = (lookup, &err) {
                    self.suggest_title(title)?;
                }
                Ok(())
            }
        }
    }

    /// After an exact title miss, point at a title that differs only in case
    /// or punctuation.
    fn suggest_title(&mut self, title: &str) -> Result<()> {
        let hint = self
            .catalog
            .find_by_normalized_title(title)
            .map(|book| format!("Did you mean: {}?", book.title));
        if let Some(hint) = hint {
            writeln!(self.output, "{hint}").context("failed to write output")?;
        }
        Ok(())
    }

    fn handle_search_title(&mut self) -> Result<()> {
        self.prompt("Enter title to search: ")?;
        let Some(fragment) = self.read_line()? else {
            return Ok(());
        };
        for book in self.catalog.search_by_title(&fragment) {
            writeln!(self.output, "{book}").context("failed to write output")?;
        }
        Ok(())
    }

    fn handle_search_author(&mut self) -> Result<()> {
        self.prompt("Enter author to search: ")?;
        let Some(author) = self.read_line()? else {
            return Ok(());
        };
        match self.catalog.search_by_author(&author) {
            Ok(book) => writeln!(self.output, "{book}").context("failed to write output"),
            Err(err) => self.status(&err.to_string(), StatusKind::Error),
        }
    }

    fn handle_search_isbn(&mut self) -> Result<()> {
        self.prompt("Enter ISBN to search: ")?;
        let Some(line) = self.read_line()? else {
            return Ok(());
        };
        match self.catalog.search_by_isbn(line.trim()) {
            Ok(book) => writeln!(self.output, "{book}").context("failed to write output"),
            Err(err) => self.status(&err.to_string(), StatusKind::Error),
        }
    }

    fn handle_display_all(&mut self) -> Result<()> {
        for book in self.catalog.display_all() {
            writeln!(self.output, "{book}").context("failed to write output")?;
        }
        Ok(())
    }

    /// Read lines until one parses as a number. `None` on end of input.
    fn read_choice(&mut self) -> Result<Option<MenuChoice>> {
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if let Some(choice) = MenuChoice::parse(&line) {
                return Ok(Some(choice));
            }
            self.prompt("Invalid input. Please enter a number: ")?;
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(chomp(&line).to_string()))
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{text}").context("failed to write prompt")?;
        self.output.flush().context("failed to flush output")
    }

    fn status(&mut self, text: &str, kind: StatusKind) -> Result<()> {
        write_status(&mut self.output, text, kind, self.config.color)
            .context("failed to write status")
    }
}
