//! The interactive menu loop.
//!
//! All user interaction lives here: the menu, the prompts and the outcome
//! messages. The shell only talks to the core through the register, the
//! factory and the views, and every failure ends as a printed message, never
//! a panic. Reader and writer are generic so sessions can be scripted in
//! tests.

use std::io::{BufRead, Write};

use tracing::info;

use crate::catalog::factory::{self, LiteratureFields};
use crate::catalog::literature::{Kind, Literature};
use crate::catalog::view;
use crate::catalog::LiteratureRegister;
use crate::cli::app::ListFormat;
use crate::cli::input::InputReader;
use crate::error::{LitregError, Result};

const MENU_ITEMS: [&str; 7] = [
    "1. List all literature",
    "2. Add new literature",
    "3. Find a literature by title and publisher",
    "4. Find all literature by publisher",
    "5. Add a book to a book series",
    "6. Convert a book to a book series",
    "7. Remove a literature",
];

pub struct Shell<'a, R, W> {
    register: &'a mut LiteratureRegister,
    input: InputReader<R>,
    output: W,
    format: ListFormat,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(
        register: &'a mut LiteratureRegister,
        input: R,
        output: W,
        format: ListFormat,
    ) -> Self {
        Self {
            register,
            input: InputReader::new(input),
            output,
            format,
        }
    }

    /// Run the menu loop until the user exits or the input ends.
    pub fn run(&mut self) -> Result<()> {
        info!("Starting interactive shell");
        let exit_choice = MENU_ITEMS.len() + 1;

        loop {
            self.print_menu()?;
            let Some(line) = self.input.read_line()? else {
                break;
            };
            match line.trim().parse::<usize>() {
                Ok(1) => self.list_all()?,
                Ok(2) => self.add_new()?,
                Ok(3) => self.find_by_title_and_publisher()?,
                Ok(4) => self.find_by_publisher()?,
                Ok(5) => self.add_book_to_series()?,
                Ok(6) => self.convert_book_to_series()?,
                Ok(7) => self.remove_literature()?,
                Ok(n) if n == exit_choice => {
                    writeln!(self.output, "\nThank you for using litreg. Bye!")?;
                    break;
                }
                _ => writeln!(
                    self.output,
                    "\nERROR: Please provide a number between 1 and {}.",
                    exit_choice
                )?,
            }
        }
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n**** litreg ****\n")?;
        for item in MENU_ITEMS {
            writeln!(self.output, "{}", item)?;
        }
        let exit_choice = MENU_ITEMS.len() + 1;
        writeln!(self.output, "{}. Exit\n", exit_choice)?;
        writeln!(self.output, "Please choose menu item (1-{}):", exit_choice)?;
        Ok(())
    }

    fn list_all(&mut self) -> Result<()> {
        if self.register.is_empty() {
            writeln!(self.output, "There is no literature in the register.")?;
            return Ok(());
        }
        match self.format {
            ListFormat::Json => {
                let entries: Vec<&Literature> = self.register.iter().collect();
                let json = serde_json::to_string_pretty(&entries)?;
                writeln!(self.output, "{}", json)?;
            }
            ListFormat::Text => {
                writeln!(self.output, "\nCurrent literature in the register:")?;
                for literature in self.register.iter() {
                    writeln!(self.output, "{}", view::render(literature))?;
                }
            }
        }
        Ok(())
    }

    fn add_new(&mut self) -> Result<()> {
        let Some(kind) = self.prompt_kind()? else {
            return Ok(());
        };
        let Some(title) = self.prompt_string("title")? else {
            return Ok(());
        };
        let Some(publisher) = self.prompt_string("publisher")? else {
            return Ok(());
        };

        let mut fields = LiteratureFields::new(title, publisher);
        if kind.is_periodical() {
            let Some(genre) = self.prompt_string("genre")? else {
                return Ok(());
            };
            let Some(issues) = self.prompt_positive_number("number of issues a year")? else {
                return Ok(());
            };
            fields = fields.with_schedule(genre, issues);
        }

        match factory::create(kind.as_str(), fields) {
            Ok(literature) => {
                self.register.add(literature);
                writeln!(self.output, "Literature successfully added!")?;
            }
            Err(err) => writeln!(self.output, "Could not add the literature: {}", err)?,
        }
        Ok(())
    }

    fn find_by_title_and_publisher(&mut self) -> Result<()> {
        let Some(title) = self.prompt_string("title of the literature")? else {
            return Ok(());
        };
        let Some(publisher) = self.prompt_string("publisher of the literature")? else {
            return Ok(());
        };

        match self.register.by_title_and_publisher(&title, &publisher) {
            Some(literature) => {
                let rendered = view::render(literature);
                writeln!(
                    self.output,
                    "\nThe literature matching the title \"{}\" and the publisher \"{}\" is:",
                    title, publisher
                )?;
                writeln!(self.output, "{}", rendered)?;
            }
            None => self.print_no_match(&title, &publisher)?,
        }
        Ok(())
    }

    fn find_by_publisher(&mut self) -> Result<()> {
        let Some(publisher) = self.prompt_string("publisher of the literature(s)")? else {
            return Ok(());
        };

        let rendered: Vec<String> = self
            .register
            .by_publisher(&publisher)
            .map(view::render)
            .collect();
        if rendered.is_empty() {
            writeln!(
                self.output,
                "There is no literature matching the publisher \"{}\".",
                publisher
            )?;
        } else {
            writeln!(
                self.output,
                "\nThe literature published by \"{}\" is:",
                publisher
            )?;
            for line in rendered {
                writeln!(self.output, "{}", line)?;
            }
        }
        Ok(())
    }

    fn add_book_to_series(&mut self) -> Result<()> {
        let Some(series_title) = self.prompt_string("title of the book series")? else {
            return Ok(());
        };
        let Some(series_publisher) = self.prompt_string("publisher of the book series")? else {
            return Ok(());
        };

        match self
            .register
            .by_title_and_publisher(&series_title, &series_publisher)
        {
            None => return self.print_no_match(&series_title, &series_publisher),
            Some(Literature::BookSeries(_)) => {}
            Some(_) => {
                writeln!(self.output, "That is not a book series in the register!")?;
                return Ok(());
            }
        }

        let Some(book_title) = self.prompt_string("title of the book to be added")? else {
            return Ok(());
        };
        let Some(book_publisher) = self.prompt_string("publisher of the book to be added")? else {
            return Ok(());
        };

        // The series keeps its own copy; the book's register entry stays put.
        let book = match self
            .register
            .by_title_and_publisher(&book_title, &book_publisher)
        {
            None => return self.print_no_match(&book_title, &book_publisher),
            Some(Literature::Book(book)) => book.clone(),
            Some(_) => {
                writeln!(self.output, "That is not a book in the register!")?;
                return Ok(());
            }
        };

        if let Some(Literature::BookSeries(series)) = self
            .register
            .by_title_and_publisher_mut(&series_title, &series_publisher)
        {
            series.add_book(book);
            writeln!(self.output, "Book successfully added to the series!")?;
        }
        Ok(())
    }

    fn convert_book_to_series(&mut self) -> Result<()> {
        let Some(title) = self.prompt_string("title of the book to be converted")? else {
            return Ok(());
        };
        let Some(publisher) = self.prompt_string("publisher of the book to be converted")? else {
            return Ok(());
        };

        match self.register.promote_to_series(&title, &publisher) {
            Ok(series) => {
                let rendered = view::render(series);
                writeln!(self.output, "The book was converted to a book series:")?;
                writeln!(self.output, "{}", rendered)?;
            }
            Err(LitregError::NotFound { .. }) => self.print_no_match(&title, &publisher)?,
            Err(LitregError::KindMismatch { .. }) => {
                writeln!(self.output, "That is not a book in the register!")?;
            }
            Err(err) => return Err(err),
        }
        Ok(())
    }

    fn remove_literature(&mut self) -> Result<()> {
        let Some(title) = self.prompt_string("title of the literature to remove")? else {
            return Ok(());
        };
        let Some(publisher) = self.prompt_string("publisher of the literature to remove")? else {
            return Ok(());
        };

        match self.register.remove(&title, &publisher, "remove") {
            Some(removed) => writeln!(
                self.output,
                "Removed the {} \"{}\" published by {}.",
                removed.kind(),
                removed.title(),
                removed.publisher()
            )?,
            None => self.print_no_match(&title, &publisher)?,
        }
        Ok(())
    }

    fn print_no_match(&mut self, title: &str, publisher: &str) -> Result<()> {
        writeln!(
            self.output,
            "There is no literature matching the title \"{}\" and the publisher \"{}\".",
            title, publisher
        )?;
        Ok(())
    }

    /// Ask for the kind until the user enters one of the six valid tags.
    /// `None` means the input ended mid-prompt.
    fn prompt_kind(&mut self) -> Result<Option<Kind>> {
        writeln!(self.output, "Which kind of literature do you want to add?")?;
        let choices: Vec<&str> = Kind::ALL.iter().map(Kind::as_str).collect();
        writeln!(self.output, "{}", choices.join(", "))?;

        loop {
            let Some(line) = self.input.read_line()? else {
                return Ok(None);
            };
            match line.trim().parse::<Kind>() {
                Ok(kind) => return Ok(Some(kind)),
                Err(_) => writeln!(self.output, "Please enter a valid literature kind:")?,
            }
        }
    }

    fn prompt_string(&mut self, label: &str) -> Result<Option<String>> {
        loop {
            writeln!(self.output, "Enter the {}:", label)?;
            let Some(line) = self.input.read_line()? else {
                return Ok(None);
            };
            let value = line.trim();
            if value.is_empty() {
                writeln!(self.output, "The {} must not be empty.", label)?;
                continue;
            }
            return Ok(Some(value.to_string()));
        }
    }

    fn prompt_positive_number(&mut self, label: &str) -> Result<Option<u32>> {
        loop {
            writeln!(self.output, "Enter the {}:", label)?;
            let Some(line) = self.input.read_line()? else {
                return Ok(None);
            };
            match line.trim().parse::<u32>() {
                Ok(value) if value > 0 => return Ok(Some(value)),
                _ => writeln!(self.output, "Please enter a positive number.")?,
            }
        }
    }
}
