use crate::cli::formatters::{itemized_lines, summary_lines, EMPTY_STORE_MESSAGE};
use crate::cli::output;
use crate::core::services::SummaryService;
use crate::domain::ExpenseStore;

use super::CommandResult;

pub fn view_expenses(store: &ExpenseStore) -> CommandResult {
    if store.is_empty() {
        report_empty();
        return Ok(());
    }
    itemized_lines(store).into_iter().for_each(output::line);
    Ok(())
}

pub fn view_summary(store: &ExpenseStore) -> CommandResult {
    if store.is_empty() {
        report_empty();
        return Ok(());
    }
    let summary = SummaryService::summarize(store);
    summary_lines(&summary).into_iter().for_each(output::line);
    Ok(())
}

fn report_empty() {
    output::info(EMPTY_STORE_MESSAGE);
    output::blank_line();
}
