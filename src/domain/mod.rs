pub mod expense;
pub mod store;
pub mod validation;

pub use expense::Expense;
pub use store::{CategoryLedger, ExpenseStore};
