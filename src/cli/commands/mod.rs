//! Operations dispatched from the main menu.

mod expense;
mod report;

pub use expense::add_expense;
pub use report::{view_expenses, view_summary};

pub type CommandResult = crate::errors::CliResult<()>;
