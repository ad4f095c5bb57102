//! Interactive lending desk.
//!
//! One command is read and fully handled before the next prompt. Lending
//! failures and malformed input are reported to the patron and the loop
//! carries on; only a broken terminal ends it with an error.

use std::io::{self, BufRead, Write};

use shelf_catalog::{Inventory, LendingError, ReturnError};

use crate::command::Command;
use crate::render;

pub const FAREWELL: &str = "Good bye and have a nice day.";

/// Names shown in the menu greeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub library: String,
    pub assistant: String,
}

impl Default for Banner {
    fn default() -> Self {
        Self {
            library: "The Wall".to_string(),
            assistant: "Alica".to_string(),
        }
    }
}

enum Flow {
    Continue,
    Stop,
}

pub struct Session<'a, R, W> {
    inventory: &'a mut Inventory,
    input: R,
    output: W,
    banner: Banner,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(inventory: &'a mut Inventory, input: R, output: W, banner: Banner) -> Self {
        Self {
            inventory,
            input,
            output,
            banner,
        }
    }

    /// Serve commands until the patron exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.write_menu()?;
            let Some(line) = self.read_line()? else {
                tracing::debug!("input closed, ending session");
                break;
            };

            let flow = match line.parse::<Command>() {
                Ok(command) => self.dispatch(command)?,
                Err(err) => {
                    tracing::debug!(error = ?err, "rejected menu input");
                    writeln!(self.output, "{err}")?;
                    Flow::Continue
                }
            };
            if let Flow::Stop = flow {
                break;
            }
        }
        self.output.flush()
    }

    fn dispatch(&mut self, command: Command) -> io::Result<Flow> {
        match command {
            Command::List => {
                render::write_listing(&mut self.output, &self.inventory.list_all())?;
            }
            Command::Borrow => {
                writeln!(self.output, "\nType the title of the book you would like to borrow")?;
                let Some(title) = self.read_line()? else {
                    return Ok(Flow::Stop);
                };
                match self.inventory.borrow(&title) {
                    Ok(receipt) => writeln!(self.output, "You borrowed \"{}\".", receipt.title)?,
                    Err(LendingError::OutOfStock { title }) => writeln!(
                        self.output,
                        "Sorry, \"{title}\" is currently out of stock."
                    )?,
                    Err(LendingError::NotFound { .. }) => writeln!(
                        self.output,
                        "The requested book is not available in the library."
                    )?,
                }
            }
            Command::Return => {
                writeln!(self.output, "\nType the title of the book you would like to return")?;
                let Some(title) = self.read_line()? else {
                    return Ok(Flow::Stop);
                };
                match self.inventory.return_copy(&title) {
                    Ok(receipt) => writeln!(
                        self.output,
                        "Thank you for returning \"{}\".",
                        receipt.title
                    )?,
                    Err(ReturnError::NotFound { .. }) => {
                        writeln!(self.output, "This book does not belong to the library.")?
                    }
                    Err(ReturnError::CopyLimitExceeded { title }) => writeln!(
                        self.output,
                        "Sorry, \"{title}\" cannot take any more copies."
                    )?,
                }
            }
            Command::Exit => {
                writeln!(self.output, "{FAREWELL}")?;
                return Ok(Flow::Stop);
            }
        }
        Ok(Flow::Continue)
    }

    fn write_menu(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "\nWelcome to our book library ~{}~",
            self.banner.library
        )?;
        writeln!(
            self.output,
            "I'm {}, your virtual assistant. How can I help you?",
            self.banner.assistant
        )?;
        writeln!(self.output, "1. Show all books in the library")?;
        writeln!(self.output, "2. I would like to borrow a book")?;
        writeln!(self.output, "3. I would like to return a book")?;
        writeln!(self.output, "4. Farewell {}", self.banner.assistant)?;
        write!(self.output, "Choose an option: ")?;
        self.output.flush()
    }

    /// Next line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use shelf_catalog::{CatalogEntry, EntryFields};
    use std::io::Cursor;

    fn inventory() -> Inventory {
        let mut inventory = Inventory::new();
        for (title, quantity) in [("Strach", 5), ("Holly", 3)] {
            let entry = CatalogEntry::standard(
                EntryFields::new(title, "Author")
                    .page_count(300)
                    .base_price(dec!(12.00)),
            )
            .unwrap();
            inventory.register(entry, quantity).unwrap();
        }
        inventory
    }

    fn run(inventory: &mut Inventory, script: &str) -> String {
        let mut output = Vec::new();
        Session::new(
            inventory,
            Cursor::new(script.as_bytes()),
            &mut output,
            Banner::default(),
        )
        .run()
        .unwrap();
        String::from_utf8(output).unwrap()
    }

    fn counts(inventory: &Inventory) -> Vec<u32> {
        inventory
            .list_all()
            .iter()
            .map(|view| view.copies_on_hand)
            .collect()
    }

    #[test]
    fn menu_names_library_and_assistant() {
        let mut inventory = inventory();
        let mut output = Vec::new();
        let banner = Banner {
            library: "Kniznica".to_string(),
            assistant: "Bob".to_string(),
        };
        Session::new(&mut inventory, Cursor::new("4\n"), &mut output, banner)
            .run()
            .unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("~Kniznica~"));
        assert!(text.contains("I'm Bob, your virtual assistant."));
        assert!(text.contains("4. Farewell Bob"));
    }

    #[test]
    fn list_shows_every_title() {
        let mut inventory = inventory();
        let text = run(&mut inventory, "1\n4\n");

        assert!(text.contains("Strach by Author - Quantity: 5 - Value: 12.00"));
        assert!(text.contains("Holly by Author - Quantity: 3 - Value: 12.00"));
        assert!(text.contains(FAREWELL));
    }

    #[test]
    fn borrow_is_case_insensitive() {
        let mut inventory = inventory();
        let text = run(&mut inventory, "2\nsTRACH\n4\n");

        assert!(text.contains("You borrowed \"Strach\"."));
        assert_eq!(inventory.copies_on_hand("Strach"), Some(4));
    }

    #[test]
    fn borrowing_past_zero_reports_out_of_stock() {
        let mut inventory = inventory();
        let text = run(&mut inventory, "2\nHolly\n2\nHolly\n2\nHolly\n2\nHolly\n4\n");

        assert_eq!(text.matches("You borrowed \"Holly\".").count(), 3);
        assert!(text.contains("Sorry, \"Holly\" is currently out of stock."));
        assert_eq!(inventory.copies_on_hand("Holly"), Some(0));
    }

    #[test]
    fn return_restores_count() {
        let mut inventory = inventory();
        let text = run(&mut inventory, "2\nHolly\n3\nholly\n4\n");

        assert!(text.contains("Thank you for returning \"Holly\"."));
        assert_eq!(inventory.copies_on_hand("Holly"), Some(3));
    }

    #[test]
    fn unknown_titles_are_reported() {
        let mut inventory = inventory();
        let before = counts(&inventory);
        let text = run(&mut inventory, "2\nDune\n3\nDune\n4\n");

        assert!(text.contains("The requested book is not available in the library."));
        assert!(text.contains("This book does not belong to the library."));
        assert_eq!(counts(&inventory), before);
    }

    #[test]
    fn return_at_copy_limit_is_refused() {
        let mut inventory = inventory();
        let entry = inventory.find("Holly").unwrap().entry().clone();
        inventory.register(entry.clone(), i32::MAX).unwrap();
        inventory.register(entry, i32::MAX - 2).unwrap();
        assert_eq!(inventory.copies_on_hand("Holly"), Some(u32::MAX));

        let text = run(&mut inventory, "3
Holly
4
");

        assert!(text.contains("Sorry, \"Holly\" cannot take any more copies."));
        assert!(!text.contains("This book does not belong to the library."));
        assert_eq!(inventory.copies_on_hand("Holly"), Some(u32::MAX));
    }

    #[test]
    fn bad_input_is_reported_without_touching_stock() {
        let mut inventory = inventory();
        let before = counts(&inventory);
        let text = run(&mut inventory, "abc\n\n7\n-2\n4\n");

        assert_eq!(text.matches("Error: Please enter a valid number.").count(), 2);
        assert_eq!(text.matches("Bad choice try again").count(), 2);
        assert!(text.contains(FAREWELL));
        assert_eq!(counts(&inventory), before);
    }

    #[test]
    fn end_of_input_ends_session() {
        let mut inventory = inventory();
        let text = run(&mut inventory, "1\n");
        assert!(!text.contains(FAREWELL));

        let text = run(&mut inventory, "2\n");
        assert!(text.contains("Type the title of the book you would like to borrow"));
        assert_eq!(inventory.copies_on_hand("Strach"), Some(5));
    }

    #[test]
    fn windows_line_endings_are_accepted() {
        let mut inventory = inventory();
        let text = run(&mut inventory, "2\r\nHolly\r\n4\r\n");

        assert!(text.contains("You borrowed \"Holly\"."));
        assert!(text.contains(FAREWELL));
    }
}
