use crate::cli::input::{prompt_once, prompt_until_valid, LineSource, Prompted};
use crate::cli::output;
use crate::core::services::ExpenseService;
use crate::domain::{validation, ExpenseStore};
use crate::errors::{CliResult, ValidationError};

use super::CommandResult;

pub const DESCRIPTION_PROMPT: &str = "Enter expense description: ";
pub const CATEGORY_PROMPT: &str = "Enter category: ";
pub const AMOUNT_PROMPT: &str = "Enter amount: ";

/// Collects description, category and amount, then records the expense.
///
/// A blank description or category aborts immediately; the amount prompt
/// repeats until valid. Cancellation and unexpected failures are reported
/// here and never reach the command loop, and the store is only touched
/// once all three fields are valid.
pub fn add_expense(store: &mut ExpenseStore, source: &mut dyn LineSource) -> CommandResult {
    if let Err(err) = collect_and_record(store, source) {
        tracing::warn!(error = %err, "add expense failed");
        output::error(format!("An unexpected error occurred: {err}"));
    }
    Ok(())
}

fn collect_and_record(store: &mut ExpenseStore, source: &mut dyn LineSource) -> CliResult<()> {
    let Some(description) = settle(prompt_once(
        source,
        DESCRIPTION_PROMPT,
        validation::description,
    )?) else {
        return Ok(());
    };

    let Some(category) = settle(prompt_once(source, CATEGORY_PROMPT, validation::category)?)
    else {
        return Ok(());
    };

    let amount = match prompt_until_valid(source, AMOUNT_PROMPT, validation::amount)? {
        Prompted::Value(amount) => amount,
        Prompted::Cancelled => {
            report_cancelled();
            return Ok(());
        }
    };

    ExpenseService::record(store, &description, &category, amount)?;
    output::success("Expense added successfully.");
    output::blank_line();
    Ok(())
}

fn settle<T>(outcome: Prompted<Result<T, ValidationError>>) -> Option<T> {
    match outcome {
        Prompted::Value(Ok(value)) => Some(value),
        Prompted::Value(Err(err)) => {
            output::error(err);
            None
        }
        Prompted::Cancelled => {
            report_cancelled();
            None
        }
    }
}

fn report_cancelled() {
    tracing::debug!("add expense cancelled");
    output::warning("Operation cancelled.");
}
