//! Text layout for the two report views.

use crate::core::services::ExpenseSummary;
use crate::domain::ExpenseStore;

const ITEMIZED_RULE_WIDTH: usize = 40;
const SUMMARY_RULE_WIDTH: usize = 30;

pub const EMPTY_STORE_MESSAGE: &str = "No expenses recorded yet.";

/// Dollar amount with exactly two decimals, e.g. `$3.50`.
pub fn format_currency(amount: f64) -> String {
    format!("${amount:.2}")
}

fn rule(width: usize) -> String {
    "-".repeat(width)
}

/// Every expense grouped under its category heading. Each category block is
/// followed by an empty line.
pub fn itemized_lines(store: &ExpenseStore) -> Vec<String> {
    let mut lines = vec!["All Expenses:".to_string(), rule(ITEMIZED_RULE_WIDTH)];
    for ledger in store.ledgers() {
        lines.push(format!("Category: {}", ledger.name()));
        for expense in ledger.expenses() {
            lines.push(format!(
                "  - {}: {}",
                expense.description(),
                format_currency(expense.amount())
            ));
        }
        lines.push(String::new());
    }
    lines
}

pub fn summary_lines(summary: &ExpenseSummary) -> Vec<String> {
    let mut lines = vec!["Summary:".to_string(), rule(SUMMARY_RULE_WIDTH)];
    for entry in &summary.categories {
        lines.push(format!("{}: {}", entry.category, format_currency(entry.total)));
    }
    lines.push(rule(SUMMARY_RULE_WIDTH));
    lines.push(format!("Total Expenses: {}", format_currency(summary.grand_total)));
    lines.push(String::new());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::{ExpenseService, SummaryService};

    fn scenario_store() -> ExpenseStore {
        let mut store = ExpenseStore::new();
        ExpenseService::record(&mut store, "Coffee", "Food", 3.5).unwrap();
        ExpenseService::record(&mut store, "Bus", "Transport", 2.0).unwrap();
        ExpenseService::record(&mut store, "Lunch", "Food", 8.0).unwrap();
        store
    }

    #[test]
    fn currency_always_has_two_decimals() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(3.5), "$3.50");
        assert_eq!(format_currency(1234.567), "$1234.57");
    }

    #[test]
    fn itemized_lines_group_by_category_in_insertion_order() {
        let lines = itemized_lines(&scenario_store());
        assert_eq!(
            lines,
            vec![
                "All Expenses:".to_string(),
                "-".repeat(40),
                "Category: Food".into(),
                "  - Coffee: $3.50".into(),
                "  - Lunch: $8.00".into(),
                String::new(),
                "Category: Transport".into(),
                "  - Bus: $2.00".into(),
                String::new(),
            ]
        );
    }

    #[test]
    fn itemized_order_ignores_amounts() {
        let mut store = ExpenseStore::new();
        ExpenseService::record(&mut store, "Big", "Zeta", 900.0).unwrap();
        ExpenseService::record(&mut store, "Small", "Alpha", 0.5).unwrap();
        ExpenseService::record(&mut store, "Medium", "Zeta", 10.0).unwrap();

        let lines = itemized_lines(&store);
        let zeta = lines.iter().position(|line| line == "Category: Zeta").unwrap();
        let alpha = lines.iter().position(|line| line == "Category: Alpha").unwrap();
        assert!(zeta < alpha);
        assert_eq!(lines[zeta + 1], "  - Big: $900.00");
        assert_eq!(lines[zeta + 2], "  - Medium: $10.00");
    }

    #[test]
    fn summary_lines_report_subtotals_and_grand_total() {
        let summary = SummaryService::summarize(&scenario_store());
        let lines = summary_lines(&summary);
        assert_eq!(
            lines,
            vec![
                "Summary:".to_string(),
                "-".repeat(30),
                "Food: $11.50".into(),
                "Transport: $2.00".into(),
                "-".repeat(30),
                "Total Expenses: $13.50".into(),
                String::new(),
            ]
        );
    }
}
