//! In-memory grouping of expenses by category.

use std::collections::HashMap;

use crate::domain::expense::Expense;
use crate::errors::ValidationError;

/// Expenses recorded under one category, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryLedger {
    name: String,
    expenses: Vec<Expense>,
}

impl CategoryLedger {
    fn new(name: String) -> Self {
        Self {
            name,
            expenses: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn total(&self) -> f64 {
        self.expenses.iter().map(Expense::amount).sum()
    }
}

/// Mapping from category name to its ledger.
///
/// Categories keep the order in which they were first used. Names are
/// case-sensitive and only trimmed; a category exists only once it holds at
/// least one expense.
#[derive(Debug, Default, Clone)]
pub struct ExpenseStore {
    ledgers: Vec<CategoryLedger>,
    index: HashMap<String, usize>,
}

impl ExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `expense` to the ledger for `category`, creating the ledger on
    /// first use. Returns the trimmed category key the expense was filed under.
    pub fn add(&mut self, category: &str, expense: Expense) -> Result<&str, ValidationError> {
        let category = category.trim();
        if category.is_empty() {
            return Err(ValidationError::EmptyCategory);
        }

        let position = match self.index.get(category) {
            Some(position) => *position,
            None => {
                let position = self.ledgers.len();
                self.ledgers.push(CategoryLedger::new(category.to_string()));
                self.index.insert(category.to_string(), position);
                position
            }
        };

        let ledger = &mut self.ledgers[position];
        ledger.expenses.push(expense);
        Ok(&ledger.name)
    }

    pub fn is_empty(&self) -> bool {
        self.ledgers.is_empty()
    }

    /// Number of distinct categories.
    pub fn category_count(&self) -> usize {
        self.ledgers.len()
    }

    /// Number of expenses across every category.
    pub fn expense_count(&self) -> usize {
        self.ledgers.iter().map(|ledger| ledger.expenses.len()).sum()
    }

    pub fn ledger(&self, category: &str) -> Option<&CategoryLedger> {
        self.index
            .get(category)
            .and_then(|position| self.ledgers.get(*position))
    }

    /// Ledgers in category insertion order.
    pub fn ledgers(&self) -> impl Iterator<Item = &CategoryLedger> {
        self.ledgers.iter()
    }
}
