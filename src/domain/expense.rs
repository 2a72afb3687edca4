//! A single recorded expense.

use crate::errors::ValidationError;

/// An immutable `(description, amount)` record.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    description: String,
    amount: f64,
}

impl Expense {
    /// Builds an expense, trimming the description and rejecting empty text
    /// or amounts that are negative or not finite.
    pub fn new(description: impl Into<String>, amount: f64) -> Result<Self, ValidationError> {
        let description = description.into();
        let description = description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        if !amount.is_finite() {
            return Err(ValidationError::InvalidAmount);
        }
        if amount < 0.0 {
            return Err(ValidationError::NegativeAmount);
        }
        Ok(Self {
            description: description.to_string(),
            // -0.0 would otherwise render as "$-0.00".
            amount: amount + 0.0,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_description() {
        let expense = Expense::new("  Coffee ", 3.5).unwrap();
        assert_eq!(expense.description(), "Coffee");
        assert_eq!(expense.amount(), 3.5);
    }

    #[test]
    fn new_rejects_blank_description() {
        assert_eq!(
            Expense::new("   ", 1.0),
            Err(ValidationError::EmptyDescription)
        );
    }

    #[test]
    fn new_rejects_negative_and_non_finite_amounts() {
        assert_eq!(
            Expense::new("Refund", -0.01),
            Err(ValidationError::NegativeAmount)
        );
        assert_eq!(
            Expense::new("Odd", f64::NAN),
            Err(ValidationError::InvalidAmount)
        );
        assert_eq!(
            Expense::new("Odd", f64::INFINITY),
            Err(ValidationError::InvalidAmount)
        );
    }

    #[test]
    fn negative_zero_is_stored_as_zero() {
        let expense = Expense::new("Free sample", -0.0).unwrap();
        assert!(expense.amount().is_sign_positive());
    }
}
