use crate::domain::{Expense, ExpenseStore};

use super::ServiceResult;

pub struct ExpenseService;

impl ExpenseService {
    /// Validates the three fields and files the expense under `category`.
    ///
    /// Nothing is written to the store unless every field is valid.
    pub fn record(
        store: &mut ExpenseStore,
        description: &str,
        category: &str,
        amount: f64,
    ) -> ServiceResult<()> {
        let expense = Expense::new(description, amount)?;
        let filed_under = store.add(category, expense)?;
        tracing::debug!(category = filed_under, amount, "expense recorded");
        Ok(())
    }
}
