//! Interactive menu loop
//!
//! Presents the main menu, reads one choice per line and dispatches to the
//! expense operations until the user exits. Input and output are generic so
//! the loop can be driven from tests.

use std::io::{BufRead, Write};

use tracing::{debug, error};

use crate::config::Settings;
use crate::display::{format_category_menu, format_expense_list};
use crate::error::{TrackerError, TrackerResult};
use crate::reports::{CategorySummary, MonthlySummary};
use crate::services::{parse_amount, parse_category_index, ExpenseService};
use crate::storage::{initialize_store, Storage};

const NO_RECORDS: &str = "No expense records found.";
const INVALID_INPUT: &str = "Invalid input! Please try again.";
const INVALID_CHOICE: &str = "Invalid choice! Please select a valid option.";
const GOODBYE: &str = "Exiting Expense Tracker. Goodbye!";

/// An option of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense,
    ViewExpenses,
    MonthlySummary,
    CategorySummary,
    Exit,
}

impl MenuChoice {
    /// Get all menu options in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::AddExpense,
            Self::ViewExpenses,
            Self::MonthlySummary,
            Self::CategorySummary,
            Self::Exit,
        ]
    }

    /// Menu label for this option
    pub fn label(&self) -> &'static str {
        match self {
            Self::AddExpense => "Add Expense",
            Self::ViewExpenses => "View Expenses",
            Self::MonthlySummary => "Monthly Summary",
            Self::CategorySummary => "Category Summary",
            Self::Exit => "Exit",
        }
    }

    /// Parse the text typed at the menu prompt
    ///
    /// The line must be exactly the option number; surrounding spaces are not
    /// accepted.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(Self::AddExpense),
            "2" => Some(Self::ViewExpenses),
            "3" => Some(Self::MonthlySummary),
            "4" => Some(Self::CategorySummary),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// The interactive expense tracker session
pub struct MenuLoop<'a, R, W> {
    storage: &'a Storage,
    settings: &'a Settings,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> MenuLoop<'a, R, W> {
    /// Create a new menu loop
    pub fn new(storage: &'a Storage, settings: &'a Settings, input: R, output: W) -> Self {
        Self {
            storage,
            settings,
            input,
            output,
        }
    }

    /// Initialize the store, then serve menu choices until exit
    ///
    /// Ends when "Exit" is chosen or the input is exhausted. Errors inside a
    /// single operation are reported and the loop continues.
    pub fn run(&mut self) -> TrackerResult<()> {
        initialize_store(self.storage.paths())?;

        loop {
            self.print_menu()?;

            let Some(line) = self.read_line()? else {
                debug!("input closed, leaving menu");
                return Ok(());
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "{}", GOODBYE)?;
                    return Ok(());
                }
                Some(choice) => {
                    if let Err(e) = self.dispatch(choice) {
                        error!(?choice, "operation failed: {}", e);
                        writeln!(self.output, "Operation failed: {}", e)?;
                    }
                }
                None => writeln!(self.output, "{}", INVALID_CHOICE)?,
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> TrackerResult<()> {
        debug!(?choice, "dispatching menu choice");
        match choice {
            MenuChoice::AddExpense => self.add_expense(),
            MenuChoice::ViewExpenses => self.view_expenses(),
            MenuChoice::MonthlySummary => self.monthly_summary(),
            MenuChoice::CategorySummary => self.category_summary(),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn print_menu(&mut self) -> TrackerResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Expense Tracker Menu:")?;
        for (i, choice) in MenuChoice::all().iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, choice.label())?;
        }
        write!(self.output, "Enter your choice: ")?;
        self.output.flush()?;
        Ok(())
    }

    /// Collect one expense interactively and append it to the store
    fn add_expense(&mut self) -> TrackerResult<()> {
        match self.collect_and_record() {
            Ok(()) => writeln!(self.output, "Expense added successfully!")?,
            Err(e) if e.is_invalid_input() => {
                debug!("expense entry rejected: {}", e);
                writeln!(self.output, "{}", INVALID_INPUT)?;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn collect_and_record(&mut self) -> TrackerResult<()> {
        let amount = parse_amount(&self.prompt("Enter the amount spent: ")?)?;

        write!(self.output, "{}", format_category_menu())?;
        let category = parse_category_index(&self.prompt("Enter category number: ")?)?;

        let description = self.prompt("Enter description: ")?;

        ExpenseService::new(self.storage).add(amount, category, description)?;
        Ok(())
    }

    fn view_expenses(&mut self) -> TrackerResult<()> {
        let Some(rows) = self.or_no_records(ExpenseService::new(self.storage).list())? else {
            return Ok(());
        };
        write!(
            self.output,
            "{}",
            format_expense_list(&rows, &self.settings.currency_symbol)
        )?;
        Ok(())
    }

    fn monthly_summary(&mut self) -> TrackerResult<()> {
        let Some(report) = self.or_no_records(MonthlySummary::generate(self.storage))? else {
            return Ok(());
        };
        write!(
            self.output,
            "{}",
            report.format_terminal(&self.settings.currency_symbol)
        )?;
        Ok(())
    }

    fn category_summary(&mut self) -> TrackerResult<()> {
        let Some(report) = self.or_no_records(CategorySummary::generate(self.storage))? else {
            return Ok(());
        };
        write!(
            self.output,
            "{}",
            report.format_terminal(&self.settings.currency_symbol)
        )?;
        Ok(())
    }

    /// Turn a missing store into the "no records" message
    fn or_no_records<T>(&mut self, result: TrackerResult<T>) -> TrackerResult<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_store_not_found() => {
                writeln!(self.output, "{}", NO_RECORDS)?;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Print a prompt and read the answer
    ///
    /// The end of input counts as invalid input.
    fn prompt(&mut self, prompt: &str) -> TrackerResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        self.read_line()?
            .ok_or_else(|| TrackerError::invalid_input("Unexpected end of input"))
    }

    /// Read one line without its line terminator, or `None` at end of input
    fn read_line(&mut self) -> TrackerResult<Option<String>> {
        let mut input = String::new();
        if self.input.read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim_end_matches(['\r', '\n']).to_string()))
    }
}
